use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::status::{self, StatusDisplay};
use crate::types::*;

/// A scheduled unit of work. `parent` and `children` are lookup keys only;
/// the service keeps the hierarchy acyclic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub scheduled: Option<String>,
    pub run: Option<String>,
    pub state: String,
    pub locks: Option<String>,
    pub options: BTreeMap<String, Value>,
    pub scheduled_by: Option<String>,
    pub worker: Option<QueueId>,
    pub script: Option<ScriptId>,
    pub parent: Option<TaskId>,
    pub children: Vec<TaskId>,
    pub depends: Vec<TaskId>,
    pub logs: Vec<TaskLogId>,
}

impl Task {
    pub fn task_state(&self) -> Option<TaskState> {
        TaskState::from_str_state(&self.state)
    }

    pub fn status(&self) -> StatusDisplay {
        status::derive(&self.state, StateKind::Task)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskLog {
    pub id: TaskLogId,
    pub task_id: Option<TaskId>,
    pub run: Option<String>,
    pub state: String,
    pub worker: Option<WorkerId>,
}

impl TaskLog {
    pub fn status(&self) -> StatusDisplay {
        status::derive(&self.state, StateKind::TaskLog)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Worker {
    pub id: WorkerId,
    pub name: String,
    pub state: String,
}

impl Worker {
    pub fn worker_state(&self) -> Option<WorkerState> {
        WorkerState::from_str_state(&self.state)
    }

    pub fn status(&self) -> StatusDisplay {
        status::derive(&self.state, StateKind::Worker)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerQueue {
    pub id: QueueId,
    pub name: String,
    pub state: String,
}

impl WorkerQueue {
    pub fn queue_state(&self) -> Option<QueueState> {
        QueueState::from_str_state(&self.state)
    }

    pub fn status(&self) -> StatusDisplay {
        status::derive(&self.state, StateKind::Queue)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkerOptions {
    pub worker: WorkerId,
    pub concurrency: Option<u32>,
    pub prefetchcount: Option<u32>,
    pub statistics: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Script {
    pub id: ScriptId,
    pub name: String,
    pub cmd: String,
    pub status: String,
    pub kind: String,
    pub team: Option<TeamId>,
    pub default_options: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
}
