use anyhow::Result;
use std::sync::Arc;
use taskify_client::{AggregateCountPoller, HttpApi, TaskListQueryExecutor, TaskListView};
use taskify_core::DashboardConfig;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

use crate::TaskListArgs;
use crate::commands::tasks::initial_store;
use crate::render;

const HELP: &str = "commands: n(ext) | p(rev) | page N | limit N | state S | script S | worker W | team T | sort S | filter F | clear KEY | r(efresh) | q(uit)";

pub async fn run(api: HttpApi, config: &DashboardConfig, args: TaskListArgs) -> Result<()> {
    let store = initial_store(config, &args);
    let view = Arc::new(TaskListView::new(TaskListQueryExecutor::new(api.clone())));
    let poller = AggregateCountPoller::new(api);

    let follower = {
        let view = Arc::clone(&view);
        let params = store.subscribe();
        tokio::spawn(async move {
            view.follow(params, |state| {
                render::print_task_list_state(state);
                println!("{HELP}");
            })
            .await;
        })
    };

    render::print_menu(&poller.menu());
    poller.activate_and_poll().await;
    render::print_menu(&poller.menu());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        let (command, arg) = line.split_once(' ').unwrap_or((line, ""));
        let arg = arg.trim();
        match command {
            "" => continue,
            "q" | "quit" => break,
            "n" | "next" => match view.next_params() {
                Some(next) => {
                    store.replace(next);
                }
                None => println!("Already on the last page"),
            },
            "p" | "prev" => match view.prev_params() {
                Some(prev) => {
                    store.replace(prev);
                }
                None => println!("Already on the first page"),
            },
            "r" | "refresh" => {
                store.touch();
                poller.activate_and_poll().await;
                render::print_menu(&poller.menu());
            }
            "clear" => {
                store.update([(arg, "")]);
            }
            "page" | "limit" | "state" | "script" | "worker" | "team" | "sort" | "filter" => {
                let updated = store.update([(command, arg)]);
                debug!(params = %updated.to_query(), "Parameters updated");
            }
            _ => println!("{HELP}"),
        }
    }

    poller.deactivate();
    drop(store);
    follower.await?;
    Ok(())
}
