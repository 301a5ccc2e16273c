use anyhow::{Result, bail};
use taskify_client::HttpApi;
use taskify_core::{QueueId, QueueState};

use crate::render;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    Enable,
    Disable,
    Toggle,
}

pub async fn list(api: &HttpApi) -> Result<()> {
    let queues = api.list_queues().await?;
    if queues.is_empty() {
        println!("No queues found");
        return Ok(());
    }
    render::print_queues(&queues);
    Ok(())
}

pub async fn set_state(api: &HttpApi, queue_id: &str, change: Change) -> Result<()> {
    let queue = api.get_queue(&QueueId::from(queue_id)).await?;
    let target = match (change, queue.queue_state()) {
        (Change::Enable, _) => QueueState::Active,
        (Change::Disable, _) => QueueState::Inactive,
        (Change::Toggle, Some(current)) => current.toggled(),
        (Change::Toggle, None) => bail!(
            "Queue {} has unknown state {:?}; use enable or disable",
            queue.name,
            queue.state
        ),
    };

    if queue.queue_state() == Some(target) {
        println!("Queue {} is already {target}", queue.name);
        return Ok(());
    }

    let updated = api.set_queue_state(&queue, target).await?;
    let display = updated.status();
    println!(
        "Queue {} is now {}",
        updated.name,
        render::paint(display.color, &updated.state)
    );
    Ok(())
}
