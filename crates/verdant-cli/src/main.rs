//! Verdant CLI Application
//!
//! Command-line interface for the Verdant lawn-care scheduling and
//! operations tool.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use verdant_core::SchedulerBuilder;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        command,
    } = Args::parse();

    let scheduler = SchedulerBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize scheduler")?;

    let renderer = TerminalRenderer::new(!no_color);
    let cli = Cli::new(scheduler, renderer);

    info!("Verdant started");

    match command {
        Client { command } => cli.handle_client_command(command).await,
        Template { command } => cli.handle_template_command(command).await,
        Treatment { command } => cli.handle_treatment_command(command).await,
        Program { command } => cli.handle_program_command(command).await,
        Service { command } => cli.handle_service_command(command).await,
        Schedule { command } => cli.handle_schedule_command(command).await,
        Job { command } => cli.handle_job_command(command).await,
        Distribute(args) => cli.handle_distribute(args),
    }
}
