use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use taskaio::board::TaskBoard;
use taskaio::config::Config;
use taskaio::constants::{
    API_URL_ENV, ERROR_REORDER_FAILED, SUCCESS_TASKS_REORDERED, SUCCESS_TASK_CREATED, SUCCESS_TASK_CREATED_LOCALLY,
    SUCCESS_TASK_DELETED, SUCCESS_TASK_UPDATED, WARN_OFFLINE,
};
use taskaio::utils::datetime;
use taskaio::{logger, Task, TaskService};

#[derive(Parser)]
#[command(name = "taskaio", version, about = "Organize your tasks by priority")]
struct Cli {
    /// Config file to use instead of the default search path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Base URL of the task service
    #[arg(long, env = API_URL_ENV)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Show all tasks
    List,
    /// Add a task at the end of the list
    Add { title: Vec<String> },
    /// Toggle the completion of a task
    Done { id: String },
    /// Delete a task
    Rm { id: String },
    /// Move the task at position FROM to position TO (1-based)
    Move { from: usize, to: usize },
    /// Check whether the task service is reachable
    Ping,
    /// Write a default config file
    InitConfig { path: Option<PathBuf> },
}

fn print_tasks(tasks: &[Task], offline: bool) {
    if offline {
        println!("{}", WARN_OFFLINE);
    }
    if tasks.is_empty() {
        println!("No tasks found");
        return;
    }
    for (position, task) in tasks.iter().enumerate() {
        let mark = if task.done { "x" } else { " " };
        println!(
            "{:>3}. [{}] {} (#{}, priority {}, updated {})",
            position + 1,
            mark,
            task.title,
            task.task_id,
            task.priority,
            datetime::format_human_timestamp(&task.updated_at)
        );
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(Command::InitConfig { path }) = &cli.command {
        let path = match path {
            Some(path) => path.clone(),
            None => Config::get_default_config_path()?,
        };
        return Config::generate_default_config(path);
    }

    let mut config = match &cli.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load()?,
    };
    if let Some(api_url) = cli.api_url {
        config.api.base_url = api_url;
        config.validate()?;
    }

    if let Some(path) = logger::init(&config.logging)? {
        log::info!("Logging to {}", path.display());
    }

    let service = TaskService::from_config(&config)?;
    let mut board = TaskBoard::new(service, config.tasks.max_priority);

    match cli.command.unwrap_or(Command::List) {
        Command::Ping => {
            if board.service().test_connection().await {
                println!("✅ {} is reachable", config.api.base_url);
            } else {
                println!("❌ {} is not reachable", config.api.base_url);
            }
            return Ok(());
        }
        Command::List => {
            board.load().await;
        }
        Command::Add { title } => {
            board.load().await;
            let created = board.add(&title.join(" ")).await?;
            if created.is_local() {
                println!("{}", SUCCESS_TASK_CREATED_LOCALLY);
            } else {
                println!("{}", SUCCESS_TASK_CREATED);
            }
        }
        Command::Done { id } => {
            board.load().await;
            match board.toggle(&id).await? {
                Some(_) => println!("{}", SUCCESS_TASK_UPDATED),
                None => anyhow::bail!("Task not found: {}", id),
            }
        }
        Command::Rm { id } => {
            board.load().await;
            board.remove(&id).await?;
            println!("{}", SUCCESS_TASK_DELETED);
        }
        Command::Move { from, to } => {
            board.load().await;
            if from == 0 || to == 0 {
                anyhow::bail!("Positions start at 1");
            }
            match board.move_task(from - 1, to - 1).await {
                Ok(()) => println!("{}", SUCCESS_TASKS_REORDERED),
                Err(e) => println!("{}: {}", ERROR_REORDER_FAILED, e),
            }
        }
        Command::InitConfig { .. } => return Ok(()),
    }

    print_tasks(board.tasks(), board.is_offline());
    Ok(())
}
