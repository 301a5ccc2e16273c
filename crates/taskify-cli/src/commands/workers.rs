use anyhow::Result;
use taskify_client::HttpApi;
use taskify_core::WorkerId;

use crate::render;

pub async fn list(api: &HttpApi) -> Result<()> {
    let workers = api.list_workers().await?;
    if workers.is_empty() {
        println!("No workers found");
        return Ok(());
    }
    render::print_workers(&workers);
    Ok(())
}

pub async fn show(api: &HttpApi, worker_id: &str) -> Result<()> {
    let id = WorkerId::from(worker_id);
    let worker = api.get_worker(&id).await?;
    let display = worker.status();

    println!("Worker {} ({})", worker.name, render::paint(display.color, &worker.state));

    match api.worker_options(&id).await {
        Ok(options) => {
            let count = |v: Option<u32>| v.map(|n| n.to_string()).unwrap_or_else(|| "-".into());
            println!("  Concurrency:    {}", count(options.concurrency));
            println!("  Prefetch count: {}", count(options.prefetchcount));
            for (key, value) in &options.statistics {
                println!("  {key:<15} {value}");
            }
        }
        Err(e) => println!("  Options unavailable: {e}"),
    }

    println!();
    match api.worker_queues(&id).await {
        Ok(queues) if !queues.is_empty() => render::print_queues(&queues),
        Ok(_) => println!("  Not consuming from any queue"),
        Err(e) => println!("  Queues unavailable: {e}"),
    }

    Ok(())
}
