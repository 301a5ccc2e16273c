use tracing::{debug, warn};

use taskify_core::pagination::{self, LINK_NEXT, LINK_PREV};
use taskify_core::{PaginationMeta, QueryParameterSet, Task, metrics};

use crate::error::ClientError;
use crate::feed::TaskFeed;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskPage {
    pub rows: Vec<Task>,
    pub meta: PaginationMeta,
}

impl TaskPage {
    pub fn has_next(&self) -> bool {
        self.meta.next().is_some()
    }

    pub fn has_prev(&self) -> bool {
        self.meta.prev().is_some()
    }
}

/// Turns a parameter set into one page of tasks plus navigation metadata.
pub struct TaskListQueryExecutor<F> {
    feed: F,
}

impl<F: TaskFeed> TaskListQueryExecutor<F> {
    pub fn new(feed: F) -> Self {
        Self { feed }
    }

    pub fn feed(&self) -> &F {
        &self.feed
    }

    pub async fn execute(&self, params: &QueryParameterSet) -> Result<TaskPage, ClientError> {
        let collection = match self.feed.fetch_tasks(params).await {
            Ok(collection) => collection,
            Err(e) => {
                warn!(params = %params.to_query(), error = %e, "Task list fetch failed");
                metrics::record_task_fetch_failure();
                return Err(e);
            }
        };

        let mut meta = pagination::parse(&collection.links);
        prune_navigation(&mut meta);
        debug!(
            rows = collection.rows.len(),
            links = ?meta.names().collect::<Vec<_>>(),
            "Task page loaded"
        );

        Ok(TaskPage {
            rows: collection.rows,
            meta,
        })
    }
}

/// The service keeps `next`/`prev` on the first and last page but points them
/// at the current page. Those are not real neighbours.
fn prune_navigation(meta: &mut PaginationMeta) {
    let Some(current) = meta.current() else {
        return;
    };
    for name in [LINK_NEXT, LINK_PREV] {
        if meta.get(name).is_some_and(|p| p.page == current.page) {
            meta.remove(name);
        }
    }
}
