mod client;
mod commands;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "schedcal")]
#[command(about = "Collect tasks into calendar events and export them as .ics")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// One-shot: schedule a task list with AI and export the result
    Plan {
        /// Free-form task list, e.g. "gym at 7, write report, lunch with Sam"
        tasks: String,

        /// Where to write the .ics file (default: schedule.ics)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show the config file, creating a default one if missing
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        // No subcommand: interactive planning session
        None => commands::session::run().await,
        Some(Commands::Plan { tasks, output }) => commands::plan::run(tasks, output).await,
        Some(Commands::Config) => commands::config::run(),
    }
}
