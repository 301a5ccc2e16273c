use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use std::collections::BTreeMap;
use tracing::{debug, info};

use taskify_core::*;

use crate::document::{self, Document, ResourceObject, SingleDocument};
use crate::error::ClientError;
use crate::feed::{TaskCollection, TaskFeed};

/// HTTP client for the task service.
#[derive(Clone, Debug)]
pub struct HttpApi {
    client: Client,
    base: String,
}

impl HttpApi {
    pub fn new(config: &DashboardConfig) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()?;
        Ok(Self::with_client(client, config.api_base()))
    }

    pub fn with_client(client: Client, base: &str) -> Self {
        Self {
            client,
            base: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client.request(method, format!("{}{}", self.base, path))
    }

    async fn send<T: DeserializeOwned>(&self, req: RequestBuilder) -> Result<T, ClientError> {
        let resp = req.send().await?;
        let status = resp.status();
        let body = resp.text().await?;
        if !status.is_success() {
            return Err(ClientError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(serde_json::from_str(&body)?)
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ClientError> {
        debug!(path, ?query, "GET");
        self.send(self.request(Method::GET, path).query(query)).await
    }

    async fn get_one<A, R>(&self, path: &str) -> Result<R, ClientError>
    where
        A: DeserializeOwned + Default,
        R: From<ResourceObject<A>>,
    {
        let doc: SingleDocument<A> = self.get(path, &[]).await?;
        doc.data
            .map(R::from)
            .ok_or_else(|| ClientError::NotFound(path.to_string()))
    }

    async fn get_all<A, R>(&self, path: &str, query: &[(&str, String)]) -> Result<Vec<R>, ClientError>
    where
        A: DeserializeOwned + Default,
        R: From<ResourceObject<A>>,
    {
        let doc: Document<A> = self.get(path, query).await?;
        Ok(document::into_records(doc))
    }

    // ─── Tasks ─────────────────────────────────────────────────────

    pub async fn get_task(&self, id: &TaskId) -> Result<Task, ClientError> {
        self.get_one::<document::TaskAttributes, Task>(&format!("/tasks/{id}"))
            .await
    }

    pub async fn task_logs(&self, id: &TaskId) -> Result<Vec<TaskLog>, ClientError> {
        self.get_all::<document::TaskLogAttributes, TaskLog>(&format!("/tasklogs/{id}"), &[])
            .await
    }

    // ─── Workers ───────────────────────────────────────────────────

    pub async fn list_workers(&self) -> Result<Vec<Worker>, ClientError> {
        self.get_all::<document::NamedStateAttributes, Worker>("/workers", &[])
            .await
    }

    pub async fn get_worker(&self, id: &WorkerId) -> Result<Worker, ClientError> {
        self.get_one::<document::NamedStateAttributes, Worker>(&format!("/workers/{id}"))
            .await
    }

    pub async fn worker_options(&self, id: &WorkerId) -> Result<WorkerOptions, ClientError> {
        let payload: Value = self.get(&format!("/workeroptions/{id}"), &[]).await?;
        Ok(document::worker_options(id, payload))
    }

    // ─── Queues ────────────────────────────────────────────────────

    pub async fn list_queues(&self) -> Result<Vec<WorkerQueue>, ClientError> {
        self.get_all::<document::NamedStateAttributes, WorkerQueue>("/workerqueues", &[])
            .await
    }

    /// Queues a worker is currently consuming from.
    pub async fn worker_queues(&self, worker: &WorkerId) -> Result<Vec<WorkerQueue>, ClientError> {
        self.get_all::<document::NamedStateAttributes, WorkerQueue>(
            "/workerqueues",
            &[("worker_id", worker.to_string())],
        )
        .await
    }

    pub async fn get_queue(&self, id: &QueueId) -> Result<WorkerQueue, ClientError> {
        self.get_one::<document::NamedStateAttributes, WorkerQueue>(&format!("/workerqueues/{id}"))
            .await
    }

    /// The service overwrites both name and state on update, so the current
    /// name is always sent along.
    pub async fn set_queue_state(
        &self,
        queue: &WorkerQueue,
        state: QueueState,
    ) -> Result<WorkerQueue, ClientError> {
        let body = document::resource_body(
            "workerqueue",
            Some(queue.id.as_ref()),
            json!({ "name": queue.name, "state": state.as_str() }),
        );
        let path = format!("/workerqueues/{}", queue.id);
        let doc: SingleDocument<document::NamedStateAttributes> = self
            .send(self.request(Method::PATCH, &path).json(&body))
            .await?;
        let updated = doc
            .data
            .map(WorkerQueue::from)
            .ok_or(ClientError::NotFound(path))?;
        info!(queue = %updated.name, state = %updated.state, "Queue state changed");
        Ok(updated)
    }

    // ─── Scripts and teams ─────────────────────────────────────────

    pub async fn list_scripts(&self) -> Result<Vec<Script>, ClientError> {
        self.get_all::<document::ScriptAttributes, Script>(
            "/scripts",
            &[("include_data", "1".to_string())],
        )
        .await
    }

    pub async fn get_script(&self, id: &ScriptId) -> Result<Script, ClientError> {
        self.get_one::<document::ScriptAttributes, Script>(&format!("/scripts/{id}"))
            .await
    }

    pub async fn create_script(&self, draft: &ScriptDraft) -> Result<Script, ClientError> {
        draft.validate()?;
        let body = document::resource_body(
            "script",
            None,
            json!({
                "name": draft.name,
                "cmd": draft.cmd,
                "type": draft.kind,
                "team_id": draft.team_id()?,
                "default_options": draft.default_options(),
            }),
        );
        let doc: SingleDocument<document::ScriptAttributes> = self
            .send(self.request(Method::POST, "/scripts").json(&body))
            .await?;
        let script = doc
            .data
            .map(Script::from)
            .ok_or_else(|| ClientError::NotFound("/scripts".to_string()))?;
        info!(script = %script.name, id = %script.id, "Script created");
        Ok(script)
    }

    pub async fn list_teams(&self) -> Result<Vec<Team>, ClientError> {
        self.get_all::<document::TeamAttributes, Team>("/teams", &[])
            .await
    }
}

#[async_trait]
impl TaskFeed for HttpApi {
    async fn fetch_tasks(&self, params: &QueryParameterSet) -> Result<TaskCollection, ClientError> {
        let doc: Document<document::TaskAttributes> = self.get("/tasks", &params.to_pairs()).await?;
        let links = doc.links.clone();
        Ok(TaskCollection {
            rows: document::into_records(doc),
            links,
        })
    }

    async fn fetch_state_counts(&self) -> Result<BTreeMap<String, Value>, ClientError> {
        let payload: Value = self.get("/tasks/state", &[]).await?;
        Ok(document::attribute_map(payload))
    }
}
