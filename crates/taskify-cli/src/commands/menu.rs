use anyhow::Result;
use taskify_client::{AggregateCountPoller, HttpApi};

use crate::render;

pub async fn show(api: HttpApi) -> Result<()> {
    let poller = AggregateCountPoller::new(api);
    poller.activate_and_poll().await;
    println!("Tasks");
    render::print_menu(&poller.menu());
    poller.deactivate();
    Ok(())
}
