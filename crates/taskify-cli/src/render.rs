use colored::{ColoredString, Colorize};
use taskify_client::{MenuEntry, TaskListState};
use taskify_core::{PaginationMeta, StatusDisplay, Task, TaskLog, Worker, WorkerQueue};

use crate::utils::{format_optional_date, truncate};

pub fn paint(color: &str, text: &str) -> ColoredString {
    match color {
        "red" => text.red(),
        "orange" => text.truecolor(255, 165, 0),
        "olive" => text.truecolor(128, 128, 0),
        "teal" => text.cyan(),
        "green" => text.green(),
        "gray" => text.bright_black(),
        _ => text.normal(),
    }
}

pub fn glyph(icon: &str) -> &'static str {
    match icon {
        "error" => "✖",
        "error_outline" => "!",
        "loop" => "↻",
        "schedule" => "◷",
        "check_circle_outline" => "✔",
        "help_outline" => "?",
        _ => " ",
    }
}

pub fn state_label(state: &str, display: StatusDisplay) -> ColoredString {
    let label = if state.is_empty() { "UNKNOWN" } else { state };
    paint(display.color, &format!("{} {label}", glyph(display.icon)))
}

pub fn print_task_table(tasks: &[Task]) {
    println!(
        "{:>8} | {:<32} | {:<10} | {:<8} | {:<22} | {:<22} | {:<14}",
        "ID", "TITLE", "SCRIPT", "QUEUE", "SCHEDULED", "RUN", "STATE"
    );
    println!("{}", "-".repeat(134));
    for task in tasks {
        let display = task.status();
        println!(
            "{:>8} | {:<32} | {:<10} | {:<8} | {:<22} | {:<22} | {}",
            paint(display.color, task.id.as_ref()),
            truncate(&task.title, 32),
            task.script.as_ref().map(|s| s.0.as_str()).unwrap_or("-"),
            task.worker.as_ref().map(|w| w.0.as_str()).unwrap_or("-"),
            format_optional_date(task.scheduled.as_deref()),
            format_optional_date(task.run.as_deref()),
            state_label(&task.state, display),
        );
    }
}

pub fn print_task_csv(tasks: &[Task]) {
    println!("id,title,script,worker,scheduled,run,state,parent");
    for task in tasks {
        println!(
            "{},{},{},{},{},{},{},{}",
            task.id,
            task.title.replace(',', " "),
            task.script.as_ref().map(|s| s.0.as_str()).unwrap_or_default(),
            task.worker.as_ref().map(|w| w.0.as_str()).unwrap_or_default(),
            task.scheduled.as_deref().unwrap_or_default().replace(',', ""),
            task.run.as_deref().unwrap_or_default().replace(',', ""),
            task.state,
            task.parent.as_ref().map(|p| p.0.as_str()).unwrap_or_default(),
        );
    }
}

pub fn pagination_footer(meta: &PaginationMeta) -> String {
    let current = meta
        .current()
        .map(|p| format!("page {} ({} per page)", p.page, p.limit))
        .unwrap_or_else(|| "page ?".to_string());
    let prev = meta
        .prev()
        .map(|p| format!("prev: {}", p.page))
        .unwrap_or_else(|| "prev: -".to_string());
    let next = meta
        .next()
        .map(|p| format!("next: {}", p.page))
        .unwrap_or_else(|| "next: -".to_string());
    let last = meta
        .get(taskify_core::pagination::LINK_LAST)
        .map(|p| format!(" of {}", p.page))
        .unwrap_or_default();
    format!("{current}{last}  [{prev}] [{next}]")
}

pub fn print_task_list_state(state: &TaskListState) {
    match state {
        TaskListState::Idle => println!("Loading..."),
        TaskListState::Loaded { params, page } => {
            if page.rows.is_empty() {
                println!("No tasks found");
            } else {
                print_task_table(&page.rows);
            }
            println!();
            println!("{}  ?{}", pagination_footer(&page.meta), params.to_query());
        }
        TaskListState::Failed { params, message } => {
            println!("{}", format!("Couldn't load tasks: {message}").red());
            println!("?{}", params.to_query());
        }
    }
}

pub fn print_menu(entries: &[MenuEntry]) {
    for entry in entries {
        println!(
            "  {:<8} {}",
            paint(entry.color, entry.label),
            paint(entry.color, &entry.count.to_string()).bold()
        );
    }
}

pub fn print_logs(logs: &[TaskLog]) {
    if logs.is_empty() {
        println!("  (no runs recorded)");
        return;
    }
    for log in logs {
        let display = log.status();
        let line = format!(
            "  {:<22} {:<14} worker {}",
            format_optional_date(log.run.as_deref()),
            log.state,
            log.worker.as_ref().map(|w| w.0.as_str()).unwrap_or("-"),
        );
        let line = match display.tone {
            taskify_core::Tone::Negative => line.red(),
            taskify_core::Tone::Positive => line.green(),
            taskify_core::Tone::Neutral => line.normal(),
        };
        println!("{line}");
    }
}

pub fn print_workers(workers: &[Worker]) {
    println!("{:>6} | {:<32} | {:<8}", "ID", "NAME", "STATE");
    println!("{}", "-".repeat(52));
    for worker in workers {
        let display = worker.status();
        println!(
            "{:>6} | {:<32} | {}",
            worker.id,
            truncate(&worker.name, 32),
            paint(display.color, &worker.state)
        );
    }
}

pub fn print_queues(queues: &[WorkerQueue]) {
    println!("{:>6} | {:<32} | {:<8}", "ID", "NAME", "STATE");
    println!("{}", "-".repeat(52));
    for queue in queues {
        let display = queue.status();
        println!(
            "{:>6} | {:<32} | {}",
            queue.id,
            truncate(&queue.name, 32),
            paint(display.color, &queue.state)
        );
    }
}
