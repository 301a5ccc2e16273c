use async_trait::async_trait;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::sync::Mutex;
use tokio::sync::oneshot;

use taskify_client::{ClientError, TaskCollection, TaskFeed};
use taskify_core::{PaginationLinkSet, QueryParameterSet, Task, TaskId};

pub fn task(id: &str, state: &str) -> Task {
    Task {
        id: TaskId::from(id),
        title: format!("task {id}"),
        scheduled: Some("Mon, 01 Jan 2024 10:00:00".to_string()),
        run: None,
        state: state.to_string(),
        locks: None,
        options: BTreeMap::new(),
        scheduled_by: None,
        worker: None,
        script: None,
        parent: None,
        children: Vec::new(),
        depends: Vec::new(),
        logs: Vec::new(),
    }
}

/// Links the way the service renders them: `next`/`prev` stay present on the
/// edges but point at the current page.
pub fn links(page: u64, limit: u64, last: u64) -> PaginationLinkSet {
    let url = |p: u64| format!("http://svc/tasks?page={p}&limit={limit}&state=ALL");
    PaginationLinkSet::new()
        .with("self", url(page))
        .with("first", url(1))
        .with("last", url(last))
        .with("next", url((page + 1).min(last)))
        .with("prev", url(page.saturating_sub(1).max(1)))
}

pub fn collection(rows: Vec<Task>, links: PaginationLinkSet) -> TaskCollection {
    TaskCollection { rows, links }
}

/// In-memory task service. Responses are keyed by requested page; a gate
/// holds a response back until the test releases it.
#[derive(Default)]
pub struct FakeFeed {
    pages: Mutex<HashMap<u64, Result<TaskCollection, String>>>,
    gates: Mutex<HashMap<u64, oneshot::Receiver<()>>>,
    requests: Mutex<Vec<QueryParameterSet>>,
    counts: Mutex<Option<Result<BTreeMap<String, Value>, String>>>,
    counts_gate: Mutex<Option<oneshot::Receiver<()>>>,
    count_requests: Mutex<usize>,
}

impl FakeFeed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, page: u64, collection: TaskCollection) {
        self.pages.lock().unwrap().insert(page, Ok(collection));
    }

    pub fn fail(&self, page: u64, message: &str) {
        self.pages
            .lock()
            .unwrap()
            .insert(page, Err(message.to_string()));
    }

    pub fn gate(&self, page: u64) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().unwrap().insert(page, rx);
        tx
    }

    pub fn requests(&self) -> Vec<QueryParameterSet> {
        self.requests.lock().unwrap().clone()
    }

    pub fn set_counts(&self, counts: Value) {
        let raw = counts
            .as_object()
            .map(|m| m.clone().into_iter().collect())
            .unwrap_or_default();
        *self.counts.lock().unwrap() = Some(Ok(raw));
    }

    pub fn fail_counts(&self, message: &str) {
        *self.counts.lock().unwrap() = Some(Err(message.to_string()));
    }

    pub fn gate_counts(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        *self.counts_gate.lock().unwrap() = Some(rx);
        tx
    }

    pub fn count_requests(&self) -> usize {
        *self.count_requests.lock().unwrap()
    }
}

fn unavailable(message: &str) -> ClientError {
    ClientError::Api {
        status: 503,
        body: message.to_string(),
    }
}

#[async_trait]
impl TaskFeed for FakeFeed {
    async fn fetch_tasks(&self, params: &QueryParameterSet) -> Result<TaskCollection, ClientError> {
        self.requests.lock().unwrap().push(params.clone());
        let page = params.page();

        let gate = self.gates.lock().unwrap().remove(&page);
        if let Some(gate) = gate {
            let _ = gate.await;
        }

        let response = self.pages.lock().unwrap().get(&page).cloned();
        match response {
            Some(Ok(collection)) => Ok(collection),
            Some(Err(message)) => Err(unavailable(&message)),
            None => Ok(TaskCollection::default()),
        }
    }

    async fn fetch_state_counts(&self) -> Result<BTreeMap<String, Value>, ClientError> {
        *self.count_requests.lock().unwrap() += 1;

        let gate = self.counts_gate.lock().unwrap().take();
        if let Some(gate) = gate {
            let _ = gate.await;
        }

        let response = self.counts.lock().unwrap().clone();
        match response {
            Some(Ok(raw)) => Ok(raw),
            Some(Err(message)) => Err(unavailable(&message)),
            None => Ok(BTreeMap::new()),
        }
    }
}
