//! Command-line interface definitions using clap
//!
//! This module defines the CLI structure using clap's derive API,
//! implementing the parameter wrapper pattern for clean separation
//! between CLI framework concerns and core domain logic:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Scheduler
//! ```
//!
//! Each command defines a clap `Args` struct with CLI-specific attributes
//! (short/long flags, value delimiters, help text) and converts into the
//! matching `verdant_core::params` structure via `From`. Business
//! validation stays at the scheduler boundary; clap only handles parsing
//! and help generation.

use anyhow::Result;
use clap::{Args, Subcommand, ValueEnum};
use jiff::civil::Date;
use verdant_core::{
    display::{CreateResult, DeleteResult, OperationStatus, UpdateResult},
    models::{Cadence, ProgramStatus, StaffRole, TreatmentCategory},
    params::*,
    Scheduler,
};

use crate::renderer::TerminalRenderer;

/// Command handler that owns the scheduler and renderer.
pub struct Cli {
    scheduler: Scheduler,
    renderer: TerminalRenderer,
}

// ============================================================================
// Value enums
// ============================================================================

/// Command-line argument representation of staff roles
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum RoleArg {
    CrewMember,
    Staff,
    TeamLeader,
    Manager,
    Owner,
}

impl From<RoleArg> for StaffRole {
    fn from(val: RoleArg) -> Self {
        match val {
            RoleArg::CrewMember => StaffRole::CrewMember,
            RoleArg::Staff => StaffRole::Staff,
            RoleArg::TeamLeader => StaffRole::TeamLeader,
            RoleArg::Manager => StaffRole::Manager,
            RoleArg::Owner => StaffRole::Owner,
        }
    }
}

impl std::fmt::Display for RoleArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoleArg::CrewMember => write!(f, "crew-member"),
            RoleArg::Staff => write!(f, "staff"),
            RoleArg::TeamLeader => write!(f, "team-leader"),
            RoleArg::Manager => write!(f, "manager"),
            RoleArg::Owner => write!(f, "owner"),
        }
    }
}

/// Command-line argument representation of visit cadences
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum CadenceArg {
    TwoWeek,
    FourWeek,
}

impl From<CadenceArg> for Cadence {
    fn from(val: CadenceArg) -> Self {
        match val {
            CadenceArg::TwoWeek => Cadence::TwoWeek,
            CadenceArg::FourWeek => Cadence::FourWeek,
        }
    }
}

impl std::fmt::Display for CadenceArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CadenceArg::TwoWeek => write!(f, "two-week"),
            CadenceArg::FourWeek => write!(f, "four-week"),
        }
    }
}

/// Command-line argument representation of treatment categories
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum CategoryArg {
    Fertilizer,
    Soil,
    Aeration,
    Irrigation,
    Pest,
    Other,
}

impl From<CategoryArg> for TreatmentCategory {
    fn from(val: CategoryArg) -> Self {
        match val {
            CategoryArg::Fertilizer => TreatmentCategory::Fertilizer,
            CategoryArg::Soil => TreatmentCategory::Soil,
            CategoryArg::Aeration => TreatmentCategory::Aeration,
            CategoryArg::Irrigation => TreatmentCategory::Irrigation,
            CategoryArg::Pest => TreatmentCategory::Pest,
            CategoryArg::Other => TreatmentCategory::Other,
        }
    }
}

impl std::fmt::Display for CategoryArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CategoryArg::Fertilizer => write!(f, "fertilizer"),
            CategoryArg::Soil => write!(f, "soil"),
            CategoryArg::Aeration => write!(f, "aeration"),
            CategoryArg::Irrigation => write!(f, "irrigation"),
            CategoryArg::Pest => write!(f, "pest"),
            CategoryArg::Other => write!(f, "other"),
        }
    }
}

/// Command-line argument representation of program statuses
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum StatusArg {
    Active,
    Paused,
    Completed,
    Cancelled,
}

impl From<StatusArg> for ProgramStatus {
    fn from(val: StatusArg) -> Self {
        match val {
            StatusArg::Active => ProgramStatus::Active,
            StatusArg::Paused => ProgramStatus::Paused,
            StatusArg::Completed => ProgramStatus::Completed,
            StatusArg::Cancelled => ProgramStatus::Cancelled,
        }
    }
}

// ============================================================================
// Client commands
// ============================================================================

/// Create a new client
#[derive(Args)]
pub struct CreateClientArgs {
    /// Display name of the client
    pub name: String,
    /// Street address of the serviced property
    #[arg(short, long)]
    pub address: Option<String>,
    /// Gate or lockbox code for property access
    #[arg(long)]
    pub gate_code: Option<String>,
    /// Monthly rate in cents (e.g. 24500 for $245.00)
    #[arg(long)]
    pub monthly_rate_cents: Option<i64>,
    /// Free-form notes about the client
    #[arg(short, long)]
    pub notes: Option<String>,
}

impl From<CreateClientArgs> for CreateClient {
    fn from(val: CreateClientArgs) -> Self {
        CreateClient {
            name: val.name,
            address: val.address,
            gate_code: val.gate_code,
            monthly_rate_cents: val.monthly_rate_cents,
            notes: val.notes,
        }
    }
}

/// Show details of a specific client
///
/// Gate codes and rates are only shown to roles holding the matching
/// capability; other roles see the client with those fields stripped.
#[derive(Args)]
pub struct ShowClientArgs {
    /// ID of the client to display
    pub id: u64,
    /// Role of the caller, controls field visibility
    #[arg(long, value_enum, default_value_t = RoleArg::CrewMember)]
    pub role: RoleArg,
}

impl From<ShowClientArgs> for ShowClient {
    fn from(val: ShowClientArgs) -> Self {
        ShowClient {
            id: val.id,
            role: val.role.into(),
        }
    }
}

/// List all clients
#[derive(Args)]
pub struct ListClientsArgs {
    /// Role of the caller, controls field visibility
    #[arg(long, value_enum, default_value_t = RoleArg::CrewMember)]
    pub role: RoleArg,
}

#[derive(Subcommand)]
pub enum ClientCommands {
    /// Create a new client
    #[command(alias = "c")]
    Create(CreateClientArgs),
    /// List all clients
    #[command(aliases = ["l", "ls"])]
    List(ListClientsArgs),
    /// Show details of a specific client
    #[command(alias = "s")]
    Show(ShowClientArgs),
    /// Reveal a client's gate code (requires a privileged role)
    GateCode(ShowClientArgs),
}

// ============================================================================
// Template commands
// ============================================================================

/// Create a new program template
#[derive(Args)]
pub struct CreateTemplateArgs {
    /// Name of the offering
    pub name: String,
    /// Annual visit target
    pub services_per_year: u32,
    /// Optional description of the offering
    #[arg(short, long)]
    pub description: Option<String>,
    /// Per-month visit counts as a comma-separated list of 12 integers;
    /// seeded from the allocator when omitted
    #[arg(short = 'm', long, value_delimiter = ',')]
    pub monthly: Option<Vec<u32>>,
    /// Default visit cadence for assignments of this template
    #[arg(long, value_enum, default_value_t = CadenceArg::TwoWeek)]
    pub cadence: CadenceArg,
}

impl From<CreateTemplateArgs> for CreateTemplate {
    fn from(val: CreateTemplateArgs) -> Self {
        CreateTemplate {
            name: val.name,
            description: val.description,
            services_per_year: val.services_per_year,
            services_per_month: val.monthly,
            default_cadence: val.cadence.into(),
        }
    }
}

/// List program templates
#[derive(Args)]
pub struct ListTemplatesArgs {
    /// Include templates that are no longer offered
    #[arg(long)]
    pub all: bool,
}

impl From<ListTemplatesArgs> for ListTemplates {
    fn from(val: ListTemplatesArgs) -> Self {
        ListTemplates { all: val.all }
    }
}

/// Replace a template's monthly distribution
///
/// The counts must have exactly 12 entries and sum to the template's
/// annual target, or the command fails.
#[derive(Args)]
pub struct SetDistributionArgs {
    /// ID of the template to update
    pub template_id: u64,
    /// Per-month visit counts as a comma-separated list of 12 integers
    #[arg(value_delimiter = ',')]
    pub counts: Vec<u32>,
}

impl From<SetDistributionArgs> for SetMonthlyDistribution {
    fn from(val: SetDistributionArgs) -> Self {
        SetMonthlyDistribution {
            template_id: val.template_id,
            monthly_counts: val.counts,
        }
    }
}

/// Link a treatment type to a template month
#[derive(Args)]
pub struct LinkTreatmentArgs {
    /// ID of the template to link into
    pub template_id: u64,
    /// ID of the treatment type to apply
    pub treatment_type_id: u64,
    /// Calendar month the treatment targets (1-12)
    pub month: i8,
    /// Quantity of product or passes
    #[arg(short, long)]
    pub quantity: Option<u32>,
    /// Free-text application instructions
    #[arg(short, long)]
    pub instructions: Option<String>,
}

impl From<LinkTreatmentArgs> for LinkTreatment {
    fn from(val: LinkTreatmentArgs) -> Self {
        LinkTreatment {
            template_id: val.template_id,
            treatment_type_id: val.treatment_type_id,
            month: val.month,
            quantity: val.quantity,
            instructions: val.instructions,
        }
    }
}

/// Delete a template permanently
#[derive(Args)]
pub struct DeleteTemplateArgs {
    /// ID of the template to delete
    pub id: u64,
    /// Confirm the deletion (required to prevent accidental deletion)
    #[arg(long)]
    pub confirm: bool,
}

impl From<DeleteTemplateArgs> for DeleteTemplate {
    fn from(val: DeleteTemplateArgs) -> Self {
        DeleteTemplate {
            id: val.id,
            confirmed: val.confirm,
        }
    }
}

/// Show details of a specific template
#[derive(Args)]
pub struct ShowTemplateArgs {
    /// ID of the template to display
    pub id: u64,
}

#[derive(Subcommand)]
pub enum TemplateCommands {
    /// Create a new program template
    #[command(alias = "c")]
    Create(CreateTemplateArgs),
    /// List program templates
    #[command(aliases = ["l", "ls"])]
    List(ListTemplatesArgs),
    /// Show details of a specific template
    #[command(alias = "s")]
    Show(ShowTemplateArgs),
    /// Replace a template's monthly distribution
    SetDistribution(SetDistributionArgs),
    /// Link a treatment type to a template month
    LinkTreatment(LinkTreatmentArgs),
    /// Delete a template permanently
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteTemplateArgs),
}

// ============================================================================
// Treatment catalog commands
// ============================================================================

/// Create a new treatment catalog entry
#[derive(Args)]
pub struct CreateTreatmentTypeArgs {
    /// Name of the treatment
    pub name: String,
    /// Category of the treatment
    #[arg(short, long, value_enum, default_value_t = CategoryArg::Other)]
    pub category: CategoryArg,
    /// Default application notes
    #[arg(short, long)]
    pub notes: Option<String>,
}

impl From<CreateTreatmentTypeArgs> for CreateTreatmentType {
    fn from(val: CreateTreatmentTypeArgs) -> Self {
        CreateTreatmentType {
            name: val.name,
            category: val.category.into(),
            notes: val.notes,
        }
    }
}

#[derive(Subcommand)]
pub enum TreatmentCommands {
    /// Create a new treatment catalog entry
    #[command(alias = "c")]
    Create(CreateTreatmentTypeArgs),
    /// List the treatment catalog
    #[command(aliases = ["l", "ls"])]
    List,
}

// ============================================================================
// Program commands
// ============================================================================

/// Assign a program template to a client
#[derive(Args)]
pub struct AssignProgramArgs {
    /// ID of the client receiving the program
    pub client_id: u64,
    /// ID of the template being assigned
    pub template_id: u64,
    /// Date service begins (YYYY-MM-DD)
    pub start_date: Date,
    /// Cadence override; falls back to the template default
    #[arg(long, value_enum)]
    pub cadence: Option<CadenceArg>,
    /// Client-facing name overriding the template name
    #[arg(long)]
    pub custom_name: Option<String>,
}

impl From<AssignProgramArgs> for AssignProgram {
    fn from(val: AssignProgramArgs) -> Self {
        AssignProgram {
            client_id: val.client_id,
            template_id: val.template_id,
            start_date: val.start_date,
            cadence: val.cadence.map(Into::into),
            custom_name: val.custom_name,
        }
    }
}

/// List client programs
#[derive(Args)]
pub struct ListProgramsArgs {
    /// Restrict to programs owned by a client
    #[arg(long)]
    pub client_id: Option<u64>,
    /// Restrict to programs in a specific status
    #[arg(long, value_enum)]
    pub status: Option<StatusArg>,
    /// Show programs regardless of status
    #[arg(long)]
    pub all: bool,
}

impl From<ListProgramsArgs> for ListPrograms {
    fn from(val: ListProgramsArgs) -> Self {
        ListPrograms {
            client_id: val.client_id,
            status: val.status.map(Into::into),
            all: val.all,
        }
    }
}

/// Operate on a program by ID
#[derive(Args)]
pub struct ProgramIdArgs {
    /// ID of the program
    pub id: u64,
}

impl From<ProgramIdArgs> for Id {
    fn from(val: ProgramIdArgs) -> Self {
        Id { id: val.id }
    }
}

/// Add a planned treatment instance to a program
#[derive(Args)]
pub struct AddProgramTreatmentArgs {
    /// ID of the owning program
    pub program_id: u64,
    /// ID of the treatment type to apply
    pub treatment_type_id: u64,
    /// Calendar month the treatment targets (1-12)
    pub target_month: i8,
    /// Calendar year the treatment targets
    pub target_year: i16,
    /// Date by which the treatment should be applied (YYYY-MM-DD)
    #[arg(long)]
    pub due_date: Option<Date>,
}

impl From<AddProgramTreatmentArgs> for AddProgramTreatment {
    fn from(val: AddProgramTreatmentArgs) -> Self {
        AddProgramTreatment {
            program_id: val.program_id,
            treatment_type_id: val.treatment_type_id,
            target_month: val.target_month,
            target_year: val.target_year,
            due_date: val.due_date,
        }
    }
}

/// Complete a treatment instance
#[derive(Args)]
pub struct CompleteTreatmentArgs {
    /// ID of the treatment instance
    pub id: u64,
    /// Staff member who performed the treatment
    pub completed_by: String,
    /// Job that fulfilled the treatment
    #[arg(long)]
    pub job_id: Option<u64>,
}

impl From<CompleteTreatmentArgs> for CompleteTreatment {
    fn from(val: CompleteTreatmentArgs) -> Self {
        CompleteTreatment {
            id: val.id,
            completed_by: val.completed_by,
            job_id: val.job_id,
        }
    }
}

#[derive(Subcommand)]
pub enum ProgramCommands {
    /// Assign a program template to a client
    #[command(alias = "a")]
    Assign(AssignProgramArgs),
    /// List client programs
    #[command(aliases = ["l", "ls"])]
    List(ListProgramsArgs),
    /// Show a program with its service and treatment instances
    #[command(alias = "s")]
    Show(ProgramIdArgs),
    /// Pause an active program
    Pause(ProgramIdArgs),
    /// Resume a paused program
    Resume(ProgramIdArgs),
    /// Complete a program at the end of its term
    Complete(ProgramIdArgs),
    /// Cancel a program before the end of its term
    Cancel(ProgramIdArgs),
    /// Add a planned treatment instance to a program
    AddTreatment(AddProgramTreatmentArgs),
    /// Complete a treatment instance
    CompleteTreatment(CompleteTreatmentArgs),
}

// ============================================================================
// Service instance commands
// ============================================================================

/// Add a planned service instance to a program
#[derive(Args)]
pub struct AddServiceArgs {
    /// ID of the owning program
    pub program_id: u64,
    /// Calendar month the visit targets (1-12)
    pub target_month: i8,
    /// Calendar year the visit targets
    pub target_year: i16,
}

impl From<AddServiceArgs> for AddService {
    fn from(val: AddServiceArgs) -> Self {
        AddService {
            program_id: val.program_id,
            target_month: val.target_month,
            target_year: val.target_year,
        }
    }
}

/// Place a service instance on the calendar
#[derive(Args)]
pub struct ScheduleServiceArgs {
    /// ID of the service instance
    pub id: u64,
    /// Concrete visit date (YYYY-MM-DD)
    pub date: Date,
}

impl From<ScheduleServiceArgs> for ScheduleService {
    fn from(val: ScheduleServiceArgs) -> Self {
        ScheduleService {
            id: val.id,
            date: val.date,
        }
    }
}

/// Complete a service instance
#[derive(Args)]
pub struct CompleteServiceArgs {
    /// ID of the service instance
    pub id: u64,
    /// Job that fulfilled the visit
    #[arg(long)]
    pub job_id: Option<u64>,
}

impl From<CompleteServiceArgs> for CompleteService {
    fn from(val: CompleteServiceArgs) -> Self {
        CompleteService {
            id: val.id,
            job_id: val.job_id,
        }
    }
}

/// Operate on a service instance by ID
#[derive(Args)]
pub struct ServiceIdArgs {
    /// ID of the service instance
    pub id: u64,
}

impl From<ServiceIdArgs> for Id {
    fn from(val: ServiceIdArgs) -> Self {
        Id { id: val.id }
    }
}

#[derive(Subcommand)]
pub enum ServiceCommands {
    /// Add a planned service instance to a program
    #[command(alias = "a")]
    Add(AddServiceArgs),
    /// Place a service instance on the calendar
    Schedule(ScheduleServiceArgs),
    /// Complete a service instance
    Complete(CompleteServiceArgs),
    /// Skip a service instance
    Skip(ServiceIdArgs),
}

// ============================================================================
// Treatment schedule commands
// ============================================================================

/// Create a settings-level treatment program
#[derive(Args)]
pub struct CreateTreatmentProgramArgs {
    /// Name of the schedule
    pub name: String,
    /// Detailed description
    #[arg(short, long)]
    pub description: Option<String>,
}

impl From<CreateTreatmentProgramArgs> for CreateTreatmentProgram {
    fn from(val: CreateTreatmentProgramArgs) -> Self {
        CreateTreatmentProgram {
            name: val.name,
            description: val.description,
        }
    }
}

/// Add an entry to a treatment program schedule
///
/// An entry must either name a month or pass --flexible, never both and
/// never neither.
#[derive(Args)]
pub struct AddScheduleEntryArgs {
    /// ID of the owning treatment program
    pub treatment_program_id: u64,
    /// ID of the treatment type to apply
    pub treatment_type_id: u64,
    /// Anchoring calendar month (1-12)
    #[arg(short, long)]
    pub month: Option<i8>,
    /// Mark the entry consumable at any visit
    #[arg(long)]
    pub flexible: bool,
    /// Visit-order grouping within a period
    #[arg(short, long)]
    pub visit_number: Option<u32>,
    /// Free-text application instructions
    #[arg(short, long)]
    pub instructions: Option<String>,
}

impl From<AddScheduleEntryArgs> for AddScheduleEntry {
    fn from(val: AddScheduleEntryArgs) -> Self {
        AddScheduleEntry {
            treatment_program_id: val.treatment_program_id,
            treatment_type_id: val.treatment_type_id,
            month: val.month,
            is_flexible: val.flexible,
            visit_number: val.visit_number,
            instructions: val.instructions,
        }
    }
}

/// Operate on a treatment program by ID
#[derive(Args)]
pub struct TreatmentProgramIdArgs {
    /// ID of the treatment program
    pub id: u64,
}

#[derive(Subcommand)]
pub enum ScheduleCommands {
    /// Create a settings-level treatment program
    #[command(alias = "c")]
    Create(CreateTreatmentProgramArgs),
    /// List treatment programs with their entries
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show a treatment program with its entries
    #[command(alias = "s")]
    Show(TreatmentProgramIdArgs),
    /// Add an entry to a treatment program schedule
    AddEntry(AddScheduleEntryArgs),
}

// ============================================================================
// Job commands
// ============================================================================

/// Create a new job
#[derive(Args)]
pub struct CreateJobArgs {
    /// ID of the visited client
    pub client_id: u64,
    /// Short description of the work
    pub title: String,
    /// Date the job is on the calendar for (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<Date>,
    /// Name of the assigned crew
    #[arg(long)]
    pub crew: Option<String>,
}

impl From<CreateJobArgs> for CreateJob {
    fn from(val: CreateJobArgs) -> Self {
        CreateJob {
            client_id: val.client_id,
            title: val.title,
            scheduled_for: val.date,
            crew: val.crew,
        }
    }
}

/// Operate on a job by ID
#[derive(Args)]
pub struct JobIdArgs {
    /// ID of the job
    pub id: u64,
}

#[derive(Subcommand)]
pub enum JobCommands {
    /// Create a new job
    #[command(alias = "c")]
    Create(CreateJobArgs),
    /// Show details of a specific job
    #[command(alias = "s")]
    Show(JobIdArgs),
    /// Mark a job completed
    Complete(JobIdArgs),
}

// ============================================================================
// Distribution preview
// ============================================================================

/// Preview a monthly service distribution for a year
///
/// Spreads the annual visit target across the twelve months weighted by
/// each month's length in weeks, and prints the table without touching
/// the database. The cadence is recorded but does not change the math.
#[derive(Args)]
pub struct DistributeArgs {
    /// Four-digit calendar year
    pub year: i16,
    /// Annual visit target
    pub annual_services: u32,
    /// Visit cadence preference
    #[arg(long, value_enum, default_value_t = CadenceArg::TwoWeek)]
    pub cadence: CadenceArg,
}

impl From<DistributeArgs> for Distribute {
    fn from(val: DistributeArgs) -> Self {
        Distribute {
            year: val.year,
            annual_services: val.annual_services,
            cadence: val.cadence.into(),
        }
    }
}

// ============================================================================
// Command handlers
// ============================================================================

impl Cli {
    /// Create a new CLI handler.
    pub fn new(scheduler: Scheduler, renderer: TerminalRenderer) -> Self {
        Self {
            scheduler,
            renderer,
        }
    }

    pub async fn handle_client_command(&self, command: ClientCommands) -> Result<()> {
        match command {
            ClientCommands::Create(args) => {
                let client = self.scheduler.create_client(&args.into()).await?;
                self.renderer.render(&CreateResult::new(client).to_string())
            }
            ClientCommands::List(args) => {
                let clients = self.scheduler.list_clients_display(args.role.into()).await?;
                self.renderer.render(&clients.to_string())
            }
            ClientCommands::Show(args) => {
                match self.scheduler.show_client_for_role(&args.into()).await? {
                    Some(client) => self.renderer.render(&client.to_string()),
                    None => self.renderer.render(
                        &OperationStatus::failure("Client not found".to_string()).to_string(),
                    ),
                }
            }
            ClientCommands::GateCode(args) => {
                match self.scheduler.client_gate_code(&args.into()).await? {
                    Some(code) => self.renderer.render(&format!("Gate code: {code}\n")),
                    None => self.renderer.render("No gate code on file.\n"),
                }
            }
        }
    }

    pub async fn handle_template_command(&self, command: TemplateCommands) -> Result<()> {
        match command {
            TemplateCommands::Create(args) => {
                let template = self.scheduler.create_template(&args.into()).await?;
                self.renderer
                    .render(&CreateResult::new(template).to_string())
            }
            TemplateCommands::List(args) => {
                let templates = self.scheduler.list_templates_display(&args.into()).await?;
                self.renderer.render(&templates.to_string())
            }
            TemplateCommands::Show(args) => {
                match self.scheduler.get_template(&Id { id: args.id }).await? {
                    Some(template) => self.renderer.render(&template.to_string()),
                    None => self.renderer.render(
                        &OperationStatus::failure("Template not found".to_string()).to_string(),
                    ),
                }
            }
            TemplateCommands::SetDistribution(args) => {
                let template = self.scheduler.set_monthly_distribution(&args.into()).await?;
                let result = UpdateResult::with_changes(
                    template,
                    vec!["Replaced monthly distribution".to_string()],
                );
                self.renderer.render(&result.to_string())
            }
            TemplateCommands::LinkTreatment(args) => {
                let link = self
                    .scheduler
                    .link_treatment_to_template(&args.into())
                    .await?;
                self.renderer.render(&CreateResult::new(link).to_string())
            }
            TemplateCommands::Delete(args) => {
                match self.scheduler.delete_template(&args.into()).await? {
                    Some(template) => self
                        .renderer
                        .render(&DeleteResult::new(template).to_string()),
                    None => self.renderer.render(
                        &OperationStatus::failure("Template not found".to_string()).to_string(),
                    ),
                }
            }
        }
    }

    pub async fn handle_treatment_command(&self, command: TreatmentCommands) -> Result<()> {
        match command {
            TreatmentCommands::Create(args) => {
                let treatment_type = self.scheduler.create_treatment_type(&args.into()).await?;
                self.renderer
                    .render(&CreateResult::new(treatment_type).to_string())
            }
            TreatmentCommands::List => {
                let types = self.scheduler.list_treatment_types_display().await?;
                self.renderer.render(&types.to_string())
            }
        }
    }

    pub async fn handle_program_command(&self, command: ProgramCommands) -> Result<()> {
        match command {
            ProgramCommands::Assign(args) => {
                let program = self.scheduler.assign_program(&args.into()).await?;
                self.renderer.render(&CreateResult::new(program).to_string())
            }
            ProgramCommands::List(args) => {
                let summaries = self.scheduler.list_programs_summary(&args.into()).await?;
                self.renderer.render(&summaries.to_string())
            }
            ProgramCommands::Show(args) => {
                match self
                    .scheduler
                    .show_program_with_instances(&args.into())
                    .await?
                {
                    Some(program) => self.renderer.render(&program.to_string()),
                    None => self.renderer.render(
                        &OperationStatus::failure("Program not found".to_string()).to_string(),
                    ),
                }
            }
            ProgramCommands::Pause(args) => {
                let program = self.scheduler.pause_program(&args.into()).await?;
                let result =
                    UpdateResult::with_changes(program, vec!["Paused program".to_string()]);
                self.renderer.render(&result.to_string())
            }
            ProgramCommands::Resume(args) => {
                let program = self.scheduler.resume_program(&args.into()).await?;
                let result =
                    UpdateResult::with_changes(program, vec!["Resumed program".to_string()]);
                self.renderer.render(&result.to_string())
            }
            ProgramCommands::Complete(args) => {
                let program = self.scheduler.complete_program(&args.into()).await?;
                let result =
                    UpdateResult::with_changes(program, vec!["Completed program".to_string()]);
                self.renderer.render(&result.to_string())
            }
            ProgramCommands::Cancel(args) => {
                let program = self.scheduler.cancel_program(&args.into()).await?;
                let result =
                    UpdateResult::with_changes(program, vec!["Cancelled program".to_string()]);
                self.renderer.render(&result.to_string())
            }
            ProgramCommands::AddTreatment(args) => {
                let instance = self.scheduler.add_program_treatment(&args.into()).await?;
                self.renderer
                    .render(&CreateResult::new(instance).to_string())
            }
            ProgramCommands::CompleteTreatment(args) => {
                let instance = self.scheduler.complete_treatment(&args.into()).await?;
                let result =
                    UpdateResult::with_changes(instance, vec!["Completed treatment".to_string()]);
                self.renderer.render(&result.to_string())
            }
        }
    }

    pub async fn handle_service_command(&self, command: ServiceCommands) -> Result<()> {
        match command {
            ServiceCommands::Add(args) => {
                let service = self.scheduler.add_service(&args.into()).await?;
                self.renderer.render(&CreateResult::new(service).to_string())
            }
            ServiceCommands::Schedule(args) => {
                let service = self.scheduler.schedule_service(&args.into()).await?;
                let result =
                    UpdateResult::with_changes(service, vec!["Placed on calendar".to_string()]);
                self.renderer.render(&result.to_string())
            }
            ServiceCommands::Complete(args) => {
                let service = self.scheduler.complete_service(&args.into()).await?;
                let result =
                    UpdateResult::with_changes(service, vec!["Completed service".to_string()]);
                self.renderer.render(&result.to_string())
            }
            ServiceCommands::Skip(args) => {
                let service = self.scheduler.skip_service(&args.into()).await?;
                let result =
                    UpdateResult::with_changes(service, vec!["Skipped service".to_string()]);
                self.renderer.render(&result.to_string())
            }
        }
    }

    pub async fn handle_schedule_command(&self, command: ScheduleCommands) -> Result<()> {
        match command {
            ScheduleCommands::Create(args) => {
                let program = self.scheduler.create_treatment_program(&args.into()).await?;
                self.renderer.render(&CreateResult::new(program).to_string())
            }
            ScheduleCommands::List => {
                let programs = self.scheduler.list_treatment_programs().await?;
                self.renderer.render(
                    &verdant_core::display::TreatmentPrograms(programs).to_string(),
                )
            }
            ScheduleCommands::Show(args) => {
                match self
                    .scheduler
                    .get_treatment_program(&Id { id: args.id })
                    .await?
                {
                    Some(program) => self.renderer.render(&program.to_string()),
                    None => self.renderer.render(
                        &OperationStatus::failure("Treatment program not found".to_string())
                            .to_string(),
                    ),
                }
            }
            ScheduleCommands::AddEntry(args) => {
                let entry = self.scheduler.add_schedule_entry(&args.into()).await?;
                self.renderer.render(&CreateResult::new(entry).to_string())
            }
        }
    }

    pub async fn handle_job_command(&self, command: JobCommands) -> Result<()> {
        match command {
            JobCommands::Create(args) => {
                let job = self.scheduler.create_job(&args.into()).await?;
                self.renderer.render(&CreateResult::new(job).to_string())
            }
            JobCommands::Show(args) => {
                match self.scheduler.get_job(&Id { id: args.id }).await? {
                    Some(job) => self.renderer.render(&job.to_string()),
                    None => self.renderer.render(
                        &OperationStatus::failure("Job not found".to_string()).to_string(),
                    ),
                }
            }
            JobCommands::Complete(args) => {
                let job = self.scheduler.complete_job(&Id { id: args.id }).await?;
                let result = UpdateResult::with_changes(job, vec!["Completed job".to_string()]);
                self.renderer.render(&result.to_string())
            }
        }
    }

    pub fn handle_distribute(&self, args: DistributeArgs) -> Result<()> {
        let table = self.scheduler.distribution_table(&args.into());
        self.renderer.render(&table.to_string())
    }
}
