//! Command-line arguments.

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use taskdesk::config::parse_api_base;
use taskdesk::task::dashboard::SortField;
use taskdesk::task::domain::{DueDateRange, Status, TaskId};
use url::Url;

#[derive(Parser, Debug)]
#[command(name = "taskdesk", version, about = "Manage tasks on a taskdesk backend")]
pub struct Cli {
    /// Base URL of the task API; overrides `TASKDESK_API_BASE`
    #[arg(long = "api-base", value_name = "URL", value_parser = parse_api_base, global = true)]
    pub api_base: Option<Url>,

    /// Log filter such as `debug` or `taskdesk=trace`; overrides `RUST_LOG`
    #[arg(long = "log-level", value_name = "LEVEL", global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List tasks with optional filtering, sorting and paging
    List(ListArgs),

    /// Show a single task
    Show {
        /// Task id
        id: TaskId,
    },

    /// Create a task
    Create(CreateArgs),

    /// Edit the fields of an existing task
    Edit(EditArgs),

    /// Delete a task
    Delete {
        /// Task id
        id: TaskId,
    },

    /// Move a task to another status
    Status {
        /// Task id
        id: TaskId,
        /// Target status, e.g. IN_PROGRESS
        status: Status,
    },

    /// Search tasks, falling back to local filtering if the server search fails
    Search(SearchArgs),

    /// List the statuses the backend accepts
    Statuses,

    /// Show task counts by status
    Stats,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only tasks with this status
    #[arg(long)]
    pub status: Option<Status>,

    /// Text to look for in titles and descriptions
    #[arg(long, default_value = "")]
    pub search: String,

    /// Only overdue tasks, as reported by the backend
    #[arg(long, conflicts_with = "status")]
    pub overdue: bool,

    /// Column to sort by: title, status, due-date or tasknum
    #[arg(long, default_value = "due-date")]
    pub sort: SortField,

    /// Sort largest first
    #[arg(long)]
    pub desc: bool,

    /// Page to show, starting at 1
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Rows per page; overrides `TASKDESK_PAGE_SIZE`
    #[arg(long)]
    pub page_size: Option<usize>,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Task title
    #[arg(long)]
    pub title: String,

    /// Longer description
    #[arg(long)]
    pub description: Option<String>,

    /// Initial status
    #[arg(long, default_value = "NEW")]
    pub status: Status,

    /// Due date, e.g. 2026-11-01T17:00
    #[arg(long)]
    pub due: String,
}

#[derive(Args, Debug)]
pub struct EditArgs {
    /// Task id
    pub id: TaskId,

    /// New title
    #[arg(long)]
    pub title: Option<String>,

    /// New description
    #[arg(long)]
    pub description: Option<String>,

    /// New status
    #[arg(long)]
    pub status: Option<Status>,

    /// New due date
    #[arg(long)]
    pub due: Option<String>,
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Title fragment
    #[arg(long, default_value = "")]
    pub title: String,

    /// Exact status
    #[arg(long)]
    pub status: Option<Status>,

    /// Calendar day the task is due, YYYY-MM-DD
    #[arg(long, conflicts_with = "range")]
    pub due_date: Option<NaiveDate>,

    /// Relative due-date bucket: today, this_week or overdue
    #[arg(long)]
    pub range: Option<DueDateRange>,
}
