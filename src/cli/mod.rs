use clap::{Args, Parser, Subcommand};

use crate::store::EntityId;

pub mod activities;
pub mod contacts;
pub mod dashboard;
pub mod deals;
pub mod tasks;
pub mod ui;

#[derive(Parser)]
#[command(name = "crmcmd")]
#[command(about = "Lightweight CRM for the command line")]
#[command(version)]
pub struct Cli {
    /// Skip the simulated network delay on every operation
    #[arg(long, global = true)]
    pub no_delay: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Pipeline value, open tasks, and recent activity at a glance
    Dashboard,
    /// Manage contacts
    #[command(subcommand)]
    Contacts(ContactCmd),
    /// Manage the deal pipeline
    #[command(subcommand)]
    Deals(DealCmd),
    /// Manage tasks
    #[command(subcommand)]
    Tasks(TaskCmd),
    /// Browse and log activities
    #[command(subcommand)]
    Activities(ActivityCmd),
}

/// Positional record id, as every lookup takes one.
#[derive(Args)]
pub struct ShowArgs {
    pub id: EntityId,
}

#[derive(Args)]
pub struct DeleteArgs {
    pub id: EntityId,
    /// Delete without asking for confirmation
    #[arg(short, long)]
    pub yes: bool,
}

#[derive(Subcommand)]
pub enum ContactCmd {
    /// List contacts
    List(ContactListArgs),
    /// Show full details for a contact
    Show(ShowArgs),
    /// Add a contact
    Add(ContactAddArgs),
    /// Edit fields on a contact
    Edit(ContactEditArgs),
    /// Delete a contact
    Delete(DeleteArgs),
}

#[derive(Args)]
pub struct ContactListArgs {
    /// Filter by name, email, or company
    #[arg(short, long)]
    pub search: Option<String>,
}

#[derive(Args)]
pub struct ContactAddArgs {
    /// Full name
    pub name: String,
    #[arg(short, long, default_value = "")]
    pub email: String,
    #[arg(short, long, default_value = "")]
    pub phone: String,
    #[arg(short, long, default_value = "")]
    pub company: String,
    #[arg(short, long, default_value = "")]
    pub notes: String,
    /// Defaults to "active"
    #[arg(short, long)]
    pub status: Option<String>,
    /// May be given multiple times
    #[arg(short, long)]
    pub tag: Vec<String>,
}

#[derive(Args)]
pub struct ContactEditArgs {
    pub id: EntityId,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(short, long)]
    pub email: Option<String>,
    #[arg(short, long)]
    pub phone: Option<String>,
    #[arg(short, long)]
    pub company: Option<String>,
    #[arg(short, long)]
    pub notes: Option<String>,
    #[arg(short, long)]
    pub status: Option<String>,
    /// Replaces the whole tag set when given
    #[arg(short, long)]
    pub tag: Vec<String>,
}

#[derive(Subcommand)]
pub enum DealCmd {
    /// List deals
    List,
    /// Deals grouped by stage with per-stage totals
    Pipeline,
    /// Show full details for a deal
    Show(ShowArgs),
    /// Add a deal
    Add(DealAddArgs),
    /// Edit fields on a deal
    Edit(DealEditArgs),
    /// Delete a deal
    Delete(DeleteArgs),
}

#[derive(Args)]
pub struct DealAddArgs {
    /// Deal title
    pub title: String,
    /// Deal value in dollars
    #[arg(short, long)]
    pub value: f64,
    /// lead | qualified | proposal | negotiation | closed
    #[arg(short, long, default_value = "lead")]
    pub stage: String,
    /// Contact id this deal belongs to
    #[arg(short, long)]
    pub contact: EntityId,
    /// Win probability, 0-100
    #[arg(short, long, default_value_t = 50, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub probability: u8,
    /// Expected close date (YYYY-MM-DD)
    #[arg(long)]
    pub close: String,
}

#[derive(Args)]
pub struct DealEditArgs {
    pub id: EntityId,
    #[arg(short, long)]
    pub title: Option<String>,
    #[arg(short, long)]
    pub value: Option<f64>,
    #[arg(short, long)]
    pub stage: Option<String>,
    #[arg(short, long)]
    pub contact: Option<EntityId>,
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub probability: Option<u8>,
    /// Expected close date (YYYY-MM-DD)
    #[arg(long)]
    pub close: Option<String>,
}

#[derive(Subcommand)]
pub enum TaskCmd {
    /// List tasks
    List(TaskListArgs),
    /// Show full details for a task
    Show(ShowArgs),
    /// Add a task (always starts pending)
    Add(TaskAddArgs),
    /// Edit fields on a task
    Edit(TaskEditArgs),
    /// Mark a task completed
    Complete(ShowArgs),
    /// Delete a task
    Delete(DeleteArgs),
}

#[derive(Args)]
pub struct TaskListArgs {
    /// pending | in_progress | completed
    #[arg(short, long)]
    pub status: Option<String>,
    /// Only tasks due today
    #[arg(long)]
    pub today: bool,
}

#[derive(Args)]
pub struct TaskAddArgs {
    /// Task title
    pub title: String,
    #[arg(short, long, default_value = "")]
    pub description: String,
    /// Due date (YYYY-MM-DD)
    #[arg(long)]
    pub due: String,
    /// low | medium | high
    #[arg(short, long, default_value = "medium")]
    pub priority: String,
    #[arg(short, long, default_value = "")]
    pub assigned: String,
}

#[derive(Args)]
pub struct TaskEditArgs {
    pub id: EntityId,
    #[arg(short, long)]
    pub title: Option<String>,
    #[arg(short, long)]
    pub description: Option<String>,
    /// Due date (YYYY-MM-DD)
    #[arg(long)]
    pub due: Option<String>,
    #[arg(short, long)]
    pub priority: Option<String>,
    #[arg(short, long)]
    pub assigned: Option<String>,
    #[arg(short, long)]
    pub status: Option<String>,
}

#[derive(Subcommand)]
pub enum ActivityCmd {
    /// List activities, newest first
    List(ActivityListArgs),
    /// Show full details for an activity
    Show(ShowArgs),
    /// Log a new activity against a contact
    Log(ActivityLogArgs),
    /// Delete an activity
    Delete(DeleteArgs),
}

#[derive(Args)]
pub struct ActivityListArgs {
    /// Show at most this many entries
    #[arg(short, long)]
    pub limit: Option<usize>,
}

#[derive(Args)]
pub struct ActivityLogArgs {
    /// What happened
    pub description: String,
    /// call | email | meeting | note
    #[arg(short, long, default_value = "note")]
    pub kind: String,
    /// Contact id this activity belongs to
    #[arg(short, long)]
    pub contact: EntityId,
    #[arg(short, long)]
    pub outcome: Option<String>,
    /// Extra key=value pairs, may be given multiple times
    #[arg(short, long)]
    pub meta: Vec<String>,
}
