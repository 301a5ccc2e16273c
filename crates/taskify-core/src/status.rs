use serde::Serialize;

use crate::types::{QueueState, StateKind, TaskState, WorkerState};

/// Row highlight used next to the color token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Positive,
    Negative,
    Neutral,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct StatusDisplay {
    pub color: &'static str,
    pub icon: &'static str,
    pub tone: Tone,
}

impl StatusDisplay {
    const TASK_FALLBACK: Self = Self {
        color: "gray",
        icon: "help_outline",
        tone: Tone::Neutral,
    };

    const BLANK: Self = Self {
        color: "",
        icon: "",
        tone: Tone::Neutral,
    };
}

/// Maps a raw state string to its display tokens. Total over all inputs.
pub fn derive(state: &str, kind: StateKind) -> StatusDisplay {
    match kind {
        StateKind::Task => TaskState::from_str_state(state)
            .map(task_display)
            .unwrap_or(StatusDisplay::TASK_FALLBACK),
        StateKind::TaskLog => TaskState::from_str_state(state)
            .map(task_log_display)
            .unwrap_or(StatusDisplay::TASK_FALLBACK),
        StateKind::Worker => WorkerState::from_str_state(state)
            .map(worker_display)
            .unwrap_or(StatusDisplay::BLANK),
        StateKind::Queue => QueueState::from_str_state(state)
            .map(queue_display)
            .unwrap_or(StatusDisplay::BLANK),
    }
}

/// Task list display. A retried task has no dedicated token there and shows
/// the neutral fallback.
pub fn task_display(state: TaskState) -> StatusDisplay {
    let (color, icon, tone) = match state {
        TaskState::Failed => ("red", "error", Tone::Negative),
        TaskState::FailedAcked => ("orange", "error_outline", Tone::Negative),
        TaskState::Started => ("olive", "loop", Tone::Neutral),
        TaskState::Prerun => ("teal", "schedule", Tone::Neutral),
        TaskState::Succeed => ("green", "check_circle_outline", Tone::Positive),
        TaskState::Retried => return StatusDisplay::TASK_FALLBACK,
    };
    StatusDisplay { color, icon, tone }
}

/// Task log rows highlight RETRIED runs like failures.
pub fn task_log_display(state: TaskState) -> StatusDisplay {
    match state {
        TaskState::Retried => StatusDisplay {
            color: "red",
            icon: "",
            tone: Tone::Negative,
        },
        other => task_display(other),
    }
}

pub fn worker_display(state: WorkerState) -> StatusDisplay {
    match state {
        WorkerState::Online => StatusDisplay {
            color: "green",
            icon: "",
            tone: Tone::Positive,
        },
        WorkerState::Offline => StatusDisplay {
            color: "red",
            icon: "",
            tone: Tone::Negative,
        },
    }
}

pub fn queue_display(state: QueueState) -> StatusDisplay {
    match state {
        QueueState::Active => StatusDisplay {
            color: "green",
            icon: "",
            tone: Tone::Positive,
        },
        QueueState::Inactive => StatusDisplay {
            color: "red",
            icon: "",
            tone: Tone::Negative,
        },
    }
}
