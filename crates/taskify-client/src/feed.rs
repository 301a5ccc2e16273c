use async_trait::async_trait;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;

use taskify_core::{PaginationLinkSet, QueryParameterSet, Task};

use crate::error::ClientError;

/// One page of the task collection as the service returned it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskCollection {
    pub rows: Vec<Task>,
    pub links: PaginationLinkSet,
}

/// The reads the task list and the navigation menu depend on.
///
/// `HttpApi` is the production implementation; anything else that can answer
/// these two questions (a fake in tests, a cached proxy) can stand in for it.
#[async_trait]
pub trait TaskFeed: Send + Sync {
    async fn fetch_tasks(&self, params: &QueryParameterSet) -> Result<TaskCollection, ClientError>;

    /// Raw per-state tallies; keys the service omits are simply absent.
    async fn fetch_state_counts(&self) -> Result<BTreeMap<String, Value>, ClientError>;
}

#[async_trait]
impl<T: TaskFeed + ?Sized> TaskFeed for Arc<T> {
    async fn fetch_tasks(&self, params: &QueryParameterSet) -> Result<TaskCollection, ClientError> {
        (**self).fetch_tasks(params).await
    }

    async fn fetch_state_counts(&self) -> Result<BTreeMap<String, Value>, ClientError> {
        (**self).fetch_state_counts().await
    }
}
