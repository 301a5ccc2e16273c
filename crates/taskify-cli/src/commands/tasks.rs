use anyhow::{Result, bail};
use taskify_client::{HttpApi, TaskListQueryExecutor, TaskListState, TaskListView};
use taskify_core::{DashboardConfig, QueryParameterSet, QueryParameterStore, TaskId};

use crate::render;
use crate::utils::format_optional_date;
use crate::{OutputFormat, TaskListArgs};

/// Builds the parameter store from configuration, an optional URL query and
/// explicit flags, in that order of precedence.
pub fn initial_store(config: &DashboardConfig, args: &TaskListArgs) -> QueryParameterStore {
    let store =
        QueryParameterStore::new(QueryParameterSet::new().with_limit(config.task_list.page_limit));
    if let Some(state) = &config.task_list.default_state {
        store.update([("state", state.clone())]);
    }

    if let Some(query) = &args.query {
        let from_url = QueryParameterSet::from_query(query);
        store.update(from_url.iter().map(|(k, v)| (k.as_str(), v.clone())));
    }

    let flags = [
        ("page", &args.page),
        ("limit", &args.limit),
        ("state", &args.state),
        ("script", &args.script),
        ("worker", &args.worker),
        ("team", &args.team),
        ("sort", &args.sort),
        ("filter", &args.filter),
    ];
    store.update(
        flags
            .into_iter()
            .filter_map(|(key, value)| value.as_ref().map(|v| (key, v.clone()))),
    );
    store
}

pub async fn list(api: HttpApi, config: &DashboardConfig, args: TaskListArgs) -> Result<()> {
    let store = initial_store(config, &args);
    let view = TaskListView::new(TaskListQueryExecutor::new(api));
    view.refresh(store.current()).await;

    let state = view.state();
    match (&state, args.format) {
        (TaskListState::Failed { message, .. }, _) => bail!("Couldn't load tasks: {message}"),
        (TaskListState::Loaded { page, .. }, OutputFormat::Json) => {
            println!("{}", serde_json::to_string_pretty(&page.rows)?);
        }
        (TaskListState::Loaded { page, .. }, OutputFormat::Csv) => {
            render::print_task_csv(&page.rows);
        }
        (_, OutputFormat::Table) => render::print_task_list_state(&state),
        (TaskListState::Idle, _) => {}
    }

    Ok(())
}

pub async fn show(api: &HttpApi, task_id: &str) -> Result<()> {
    let id = TaskId::from(task_id);
    let task = api.get_task(&id).await?;
    let display = task.status();

    let script = match &task.script {
        Some(script_id) => api.get_script(script_id).await.ok(),
        None => None,
    };
    let queue = match &task.worker {
        Some(queue_id) => api.get_queue(queue_id).await.ok(),
        None => None,
    };

    println!(
        "Task {} {}",
        render::paint(display.color, task.id.as_ref()),
        render::state_label(&task.state, display)
    );
    if !task.title.is_empty() {
        println!("  Title:          {}", task.title);
    }
    println!("  Scheduled:      {}", format_optional_date(task.scheduled.as_deref()));
    println!("  Run:            {}", format_optional_date(task.run.as_deref()));
    println!("  Scheduled by:   {}", task.scheduled_by.as_deref().unwrap_or("-"));
    println!("  Locks:          {}", task.locks.as_deref().unwrap_or("-"));
    println!(
        "  Queue:          {}",
        queue.as_ref().map(|q| q.name.as_str()).unwrap_or("-")
    );
    println!(
        "  Script:         {}",
        script.as_ref().map(|s| s.name.as_str()).unwrap_or("-")
    );
    println!(
        "  Command:        {}",
        script.as_ref().map(|s| s.cmd.as_str()).unwrap_or("-")
    );
    if let Some(parent) = &task.parent {
        println!("  Parent:         {parent}");
    }
    if !task.children.is_empty() {
        let children: Vec<&str> = task.children.iter().map(|c| c.as_ref()).collect();
        println!("  Children:       {}", children.join(", "));
    }
    if !task.depends.is_empty() {
        let depends: Vec<&str> = task.depends.iter().map(|d| d.as_ref()).collect();
        println!("  Depends on:     {}", depends.join(", "));
    }
    if !task.options.is_empty() {
        println!("  Options:        {}", serde_json::to_string(&task.options)?);
    }

    println!();
    println!("Runs:");
    let logs = api.task_logs(&id).await?;
    render::print_logs(&logs);

    Ok(())
}
