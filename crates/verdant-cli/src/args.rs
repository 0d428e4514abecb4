use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{
    ClientCommands, DistributeArgs, JobCommands, ProgramCommands, ScheduleCommands,
    ServiceCommands, TemplateCommands, TreatmentCommands,
};

/// Main command-line interface for the Verdant operations tool
///
/// Verdant is a scheduling and operations system for a lawn-care service
/// business. It manages clients, reusable service program templates, the
/// treatment catalog, per-client program assignments with their planned
/// visit and treatment instances, settings-level treatment schedules, and
/// jobs — and can preview how an annual visit target spreads across the
/// months of a year.
#[derive(Parser)]
#[command(version, about, name = "verdant")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/verdant/verdant.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for the Verdant CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Manage clients
    #[command(alias = "c")]
    Client {
        #[command(subcommand)]
        command: ClientCommands,
    },
    /// Manage program templates
    #[command(alias = "t")]
    Template {
        #[command(subcommand)]
        command: TemplateCommands,
    },
    /// Manage the treatment catalog
    Treatment {
        #[command(subcommand)]
        command: TreatmentCommands,
    },
    /// Manage client program assignments
    #[command(alias = "p")]
    Program {
        #[command(subcommand)]
        command: ProgramCommands,
    },
    /// Manage planned service instances
    #[command(alias = "s")]
    Service {
        #[command(subcommand)]
        command: ServiceCommands,
    },
    /// Manage settings-level treatment schedules
    Schedule {
        #[command(subcommand)]
        command: ScheduleCommands,
    },
    /// Manage jobs
    #[command(alias = "j")]
    Job {
        #[command(subcommand)]
        command: JobCommands,
    },
    /// Preview a monthly service distribution for a year
    #[command(alias = "d")]
    Distribute(DistributeArgs),
}
