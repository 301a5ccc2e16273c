use taskify_core::status::{self, task_display, task_log_display};
use taskify_core::*;

// ─── Task states ───────────────────────────────────────────────────

#[test]
fn test_task_state_colors_and_icons() {
    let expected = [
        (TaskState::Failed, "red", "error"),
        (TaskState::FailedAcked, "orange", "error_outline"),
        (TaskState::Started, "olive", "loop"),
        (TaskState::Prerun, "teal", "schedule"),
        (TaskState::Succeed, "green", "check_circle_outline"),
        (TaskState::Retried, "gray", "help_outline"),
    ];
    for (state, color, icon) in expected {
        let display = task_display(state);
        assert_eq!(display.color, color, "color for {state}");
        assert_eq!(display.icon, icon, "icon for {state}");
    }
}

#[test]
fn test_task_derive_matches_enum_for_every_state() {
    for state in TaskState::ALL {
        assert_eq!(
            status::derive(state.as_str(), StateKind::Task),
            task_display(state)
        );
    }
}

#[test]
fn test_retried_has_no_task_list_token() {
    let display = status::derive("RETRIED", StateKind::Task);
    assert_eq!(display, status::derive("SOMETHING-ELSE", StateKind::Task));
    assert_eq!(display.tone, Tone::Neutral);
}

#[test]
fn test_unknown_task_state_falls_back_to_gray() {
    for raw in ["", "PENDING", "failed", "SUCCESS"] {
        let display = status::derive(raw, StateKind::Task);
        assert_eq!(display.color, "gray");
        assert_eq!(display.icon, "help_outline");
        assert_eq!(display.tone, Tone::Neutral);
    }
}

// ─── Task log tones ────────────────────────────────────────────────

#[test]
fn test_task_log_tones() {
    assert_eq!(status::derive("FAILED", StateKind::TaskLog).tone, Tone::Negative);
    assert_eq!(
        status::derive("FAILED-ACKED", StateKind::TaskLog).tone,
        Tone::Negative
    );
    assert_eq!(status::derive("RETRIED", StateKind::TaskLog).tone, Tone::Negative);
    assert_eq!(status::derive("SUCCEED", StateKind::TaskLog).tone, Tone::Positive);
    assert_eq!(status::derive("STARTED", StateKind::TaskLog).tone, Tone::Neutral);
    assert_eq!(status::derive("PRERUN", StateKind::TaskLog).tone, Tone::Neutral);
    assert_eq!(Tone::Neutral.as_str(), "");
    assert_eq!(Tone::Negative.as_str(), "negative");
}

#[test]
fn test_task_log_retried_is_red() {
    let display = status::derive("RETRIED", StateKind::TaskLog);
    assert_eq!(display.color, "red");
    assert_eq!(display.tone, Tone::Negative);
    assert_eq!(task_log_display(TaskState::Retried), display);
}

#[test]
fn test_task_log_other_states_match_task_list() {
    for state in TaskState::ALL {
        if state == TaskState::Retried {
            continue;
        }
        assert_eq!(task_log_display(state), task_display(state));
    }
    assert_eq!(status::derive("bogus", StateKind::TaskLog).color, "gray");
}

// ─── Workers and queues ────────────────────────────────────────────

#[test]
fn test_worker_and_queue_colors() {
    assert_eq!(status::derive("ONLINE", StateKind::Worker).color, "green");
    assert_eq!(status::derive("OFFLINE", StateKind::Worker).color, "red");
    assert_eq!(status::derive("active", StateKind::Queue).color, "green");
    assert_eq!(status::derive("inactive", StateKind::Queue).color, "red");
}

#[test]
fn test_unknown_worker_and_queue_state_is_blank() {
    let worker = status::derive("BUSY", StateKind::Worker);
    assert_eq!(worker.color, "");
    assert_eq!(worker.icon, "");
    let queue = status::derive("ACTIVE", StateKind::Queue);
    assert_eq!(queue.color, "");
}

#[test]
fn test_records_expose_their_display() {
    let worker = Worker {
        id: WorkerId::from("3"),
        name: "w-3".into(),
        state: "OFFLINE".into(),
    };
    assert_eq!(worker.worker_state(), Some(WorkerState::Offline));
    assert_eq!(worker.status().tone, Tone::Negative);

    let queue = WorkerQueue {
        id: QueueId::from("1"),
        name: "default".into(),
        state: "active".into(),
    };
    assert_eq!(queue.queue_state(), Some(QueueState::Active));
    assert_eq!(queue.queue_state().map(|s| s.toggled()), Some(QueueState::Inactive));
}
