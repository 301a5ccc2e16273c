use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TaskId(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WorkerId(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct QueueId(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ScriptId(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TeamId(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TaskLogId(pub String);

macro_rules! string_id {
    ($($name:ident),* $(,)?) => {
        $(
            impl From<&str> for $name {
                fn from(s: &str) -> Self {
                    Self(s.to_string())
                }
            }

            impl From<String> for $name {
                fn from(s: String) -> Self {
                    Self(s)
                }
            }

            impl fmt::Display for $name {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.pad(&self.0)
                }
            }

            impl AsRef<str> for $name {
                fn as_ref(&self) -> &str {
                    &self.0
                }
            }
        )*
    };
}

string_id!(TaskId, WorkerId, QueueId, ScriptId, TeamId, TaskLogId);

/// Task lifecycle state as reported by the service. Only the service moves a
/// task between states; the client only reads them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskState {
    #[serde(rename = "PRERUN")]
    Prerun,
    #[serde(rename = "STARTED")]
    Started,
    #[serde(rename = "SUCCEED")]
    Succeed,
    #[serde(rename = "FAILED")]
    Failed,
    #[serde(rename = "FAILED-ACKED")]
    FailedAcked,
    #[serde(rename = "RETRIED")]
    Retried,
}

impl TaskState {
    pub const ALL: [TaskState; 6] = [
        Self::Prerun,
        Self::Started,
        Self::Succeed,
        Self::Failed,
        Self::FailedAcked,
        Self::Retried,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Prerun => "PRERUN",
            Self::Started => "STARTED",
            Self::Succeed => "SUCCEED",
            Self::Failed => "FAILED",
            Self::FailedAcked => "FAILED-ACKED",
            Self::Retried => "RETRIED",
        }
    }

    /// Returns `None` for anything outside the closed set.
    pub fn from_str_state(s: &str) -> Option<Self> {
        match s {
            "PRERUN" => Some(Self::Prerun),
            "STARTED" => Some(Self::Started),
            "SUCCEED" => Some(Self::Succeed),
            "FAILED" => Some(Self::Failed),
            "FAILED-ACKED" => Some(Self::FailedAcked),
            "RETRIED" => Some(Self::Retried),
            _ => None,
        }
    }
}

impl fmt::Display for TaskState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueueState {
    Active,
    Inactive,
}

impl QueueState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }

    pub fn from_str_state(s: &str) -> Option<Self> {
        match s {
            "active" => Some(Self::Active),
            "inactive" => Some(Self::Inactive),
            _ => None,
        }
    }

    /// The state a queue moves to when the operator toggles it.
    pub fn toggled(&self) -> Self {
        match self {
            Self::Active => Self::Inactive,
            Self::Inactive => Self::Active,
        }
    }
}

impl fmt::Display for QueueState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WorkerState {
    Online,
    Offline,
}

impl WorkerState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Online => "ONLINE",
            Self::Offline => "OFFLINE",
        }
    }

    pub fn from_str_state(s: &str) -> Option<Self> {
        match s {
            "ONLINE" => Some(Self::Online),
            "OFFLINE" => Some(Self::Offline),
            _ => None,
        }
    }
}

impl fmt::Display for WorkerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which state vocabulary a raw state string belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateKind {
    Task,
    /// Task state as shown on a task log row.
    TaskLog,
    Queue,
    Worker,
}
