use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use taskify_client::HttpApi;
use taskify_core::DashboardConfig;

mod commands;
mod render;
mod utils;

#[derive(Parser)]
#[command(name = "taskify", about = "Taskify task platform dashboard")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    /// Task service base URL (overrides configuration)
    #[arg(long, global = true)]
    api_url: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// List tasks
    Tasks(TaskListArgs),
    /// Show a task with its logs
    Task {
        /// Task ID
        task_id: String,
    },
    /// Browse the task list interactively
    Browse(TaskListArgs),
    /// Show task counts per state
    Menu,
    /// Worker operations
    Worker {
        #[command(subcommand)]
        command: WorkerCommands,
    },
    /// Queue operations
    Queue {
        #[command(subcommand)]
        command: QueueCommands,
    },
    /// Script operations
    Script {
        #[command(subcommand)]
        command: ScriptCommands,
    },
    /// List teams
    Teams,
}

#[derive(Args, Clone)]
pub struct TaskListArgs {
    /// Initial parameters as a URL query string, e.g. "page=2&state=FAILED"
    #[arg(long)]
    query: Option<String>,
    /// Page number
    #[arg(long)]
    page: Option<String>,
    /// Rows per page
    #[arg(long)]
    limit: Option<String>,
    /// Filter by state (ALL, ACTIVE, FAILED, ...)
    #[arg(long)]
    state: Option<String>,
    /// Filter by script name
    #[arg(long)]
    script: Option<String>,
    /// Filter by worker
    #[arg(long)]
    worker: Option<String>,
    /// Filter by team
    #[arg(long)]
    team: Option<String>,
    /// Sort order
    #[arg(long)]
    sort: Option<String>,
    /// Free-text filter
    #[arg(long)]
    filter: Option<String>,
    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    format: OutputFormat,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Subcommand)]
enum WorkerCommands {
    /// List workers
    List,
    /// Show a worker with its queues and pool options
    Get {
        /// Worker ID
        worker_id: String,
    },
}

#[derive(Subcommand)]
enum QueueCommands {
    /// List queues
    List,
    /// Start consuming from a queue
    Enable {
        /// Queue ID
        queue_id: String,
    },
    /// Stop consuming from a queue
    Disable {
        /// Queue ID
        queue_id: String,
    },
    /// Flip a queue between active and inactive
    Toggle {
        /// Queue ID
        queue_id: String,
    },
}

#[derive(Subcommand)]
enum ScriptCommands {
    /// List scripts
    List,
    /// Create a script
    Create {
        /// Script name
        #[arg(long)]
        name: String,
        /// Command line to execute
        #[arg(long)]
        cmd: String,
        /// Owning team ID
        #[arg(long)]
        team: String,
        /// Script type
        #[arg(long, default_value = "SCRIPT")]
        kind: String,
        /// Default option as KEY=VALUE (repeatable)
        #[arg(long = "option", value_name = "KEY=VALUE")]
        options: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = DashboardConfig::load(cli.config.as_deref())?;
    if let Some(url) = cli.api_url {
        config.api_url = url;
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.clone().into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let api = HttpApi::new(&config)?;

    match cli.command {
        Commands::Tasks(args) => commands::tasks::list(api, &config, args).await?,
        Commands::Task { task_id } => commands::tasks::show(&api, &task_id).await?,
        Commands::Browse(args) => commands::browse::run(api, &config, args).await?,
        Commands::Menu => commands::menu::show(api).await?,
        Commands::Worker { command } => match command {
            WorkerCommands::List => commands::workers::list(&api).await?,
            WorkerCommands::Get { worker_id } => commands::workers::show(&api, &worker_id).await?,
        },
        Commands::Queue { command } => match command {
            QueueCommands::List => commands::queues::list(&api).await?,
            QueueCommands::Enable { queue_id } => {
                commands::queues::set_state(&api, &queue_id, commands::queues::Change::Enable)
                    .await?
            }
            QueueCommands::Disable { queue_id } => {
                commands::queues::set_state(&api, &queue_id, commands::queues::Change::Disable)
                    .await?
            }
            QueueCommands::Toggle { queue_id } => {
                commands::queues::set_state(&api, &queue_id, commands::queues::Change::Toggle)
                    .await?
            }
        },
        Commands::Script { command } => match command {
            ScriptCommands::List => commands::scripts::list(&api).await?,
            ScriptCommands::Create {
                name,
                cmd,
                team,
                kind,
                options,
            } => commands::scripts::create(&api, name, cmd, team, kind, &options).await?,
        },
        Commands::Teams => commands::scripts::teams(&api).await?,
    }

    Ok(())
}
