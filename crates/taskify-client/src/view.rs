use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::watch;
use tracing::debug;

use taskify_core::{PaginationMeta, QueryParameterSet, Task, metrics};

use crate::executor::{TaskListQueryExecutor, TaskPage};
use crate::feed::TaskFeed;

/// What the task list currently shows.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum TaskListState {
    #[default]
    Idle,
    Loaded {
        params: QueryParameterSet,
        page: TaskPage,
    },
    /// The last fetch failed; nothing from earlier pages is kept.
    Failed {
        params: QueryParameterSet,
        message: String,
    },
}

impl TaskListState {
    pub fn rows(&self) -> &[Task] {
        match self {
            Self::Loaded { page, .. } => &page.rows,
            _ => &[],
        }
    }

    pub fn meta(&self) -> Option<&PaginationMeta> {
        match self {
            Self::Loaded { page, .. } => Some(&page.meta),
            _ => None,
        }
    }

    pub fn params(&self) -> Option<&QueryParameterSet> {
        match self {
            Self::Idle => None,
            Self::Loaded { params, .. } | Self::Failed { params, .. } => Some(params),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    Applied,
    /// A newer request was issued while this one was in flight.
    Stale,
}

/// The task list screen. Only the most recently issued request may change
/// what is visible.
pub struct TaskListView<F> {
    executor: TaskListQueryExecutor<F>,
    issued: AtomicU64,
    state: watch::Sender<TaskListState>,
}

impl<F: TaskFeed> TaskListView<F> {
    pub fn new(executor: TaskListQueryExecutor<F>) -> Self {
        let (state, _rx) = watch::channel(TaskListState::Idle);
        Self {
            executor,
            issued: AtomicU64::new(0),
            state,
        }
    }

    pub fn state(&self) -> TaskListState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<TaskListState> {
        self.state.subscribe()
    }

    pub async fn refresh(&self, params: QueryParameterSet) -> RefreshOutcome {
        let ticket = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        let result = self.executor.execute(&params).await;

        let next = match result {
            Ok(page) => TaskListState::Loaded {
                params: params.clone(),
                page,
            },
            Err(e) => TaskListState::Failed {
                params: params.clone(),
                message: e.to_string(),
            },
        };

        let applied = self.state.send_if_modified(|state| {
            if self.issued.load(Ordering::SeqCst) != ticket {
                return false;
            }
            *state = next;
            true
        });

        if applied {
            RefreshOutcome::Applied
        } else {
            debug!(ticket, params = %params.to_query(), "Discarding stale task list response");
            metrics::record_stale_response("tasks");
            RefreshOutcome::Stale
        }
    }

    /// Re-fetches on every change of the parameter store until the store is
    /// dropped. `on_change` sees each state that was actually applied.
    pub async fn follow<C>(&self, mut params: watch::Receiver<QueryParameterSet>, mut on_change: C)
    where
        C: FnMut(&TaskListState),
    {
        loop {
            let current = params.borrow_and_update().clone();
            if self.refresh(current).await == RefreshOutcome::Applied {
                on_change(&self.state());
            }
            if params.changed().await.is_err() {
                break;
            }
        }
    }

    /// Parameters for the following page, if the service offered one.
    pub fn next_params(&self) -> Option<QueryParameterSet> {
        self.neighbour(PaginationMeta::next)
    }

    pub fn prev_params(&self) -> Option<QueryParameterSet> {
        self.neighbour(PaginationMeta::prev)
    }

    fn neighbour(
        &self,
        pick: fn(&PaginationMeta) -> Option<taskify_core::PageRef>,
    ) -> Option<QueryParameterSet> {
        match &*self.state.borrow() {
            TaskListState::Loaded { params, page } => {
                pick(&page.meta).map(|target| params.with_page(target.page))
            }
            _ => None,
        }
    }
}
