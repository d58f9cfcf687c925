//! Command-line front end for a taskdesk backend.
//!
//! Usage:
//!
//! ```text
//! taskdesk [--api-base URL] [--log-level LEVEL] <command> [args]
//! ```
//!
//! Settings not given on the command line are read from the `TASKDESK_*`
//! environment variables described in [`taskdesk::config`]. Results are
//! written to standard output and diagnostics to standard error.

#[path = "taskdesk/cli.rs"]
mod cli;
#[path = "taskdesk/output.rs"]
mod output;

use clap::Parser;
use cli::{Cli, Command, CreateArgs, EditArgs, ListArgs, SearchArgs};
use eyre::{Result, WrapErr, eyre};
use mockable::{Clock, DefaultClock};
use std::io::{self, Write};
use std::sync::Arc;
use taskdesk::config::AppConfig;
use taskdesk::task::{
    adapters::http::HttpTaskService,
    dashboard::{SortDirection, SortSpec, TaskListQuery, TaskStats, paginate},
    domain::{SearchFilters, TaskDraft},
    presentation::Notice,
    services::{TaskLifecycleError, TaskLifecycleService, TaskSearchService},
    validation::DefaultTaskValidator,
};
use taskdesk::telemetry;

type Lifecycle = TaskLifecycleService<HttpTaskService, DefaultClock>;

struct App {
    config: AppConfig,
    service: Arc<HttpTaskService>,
    clock: Arc<DefaultClock>,
    lifecycle: Lifecycle,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    telemetry::init_tracing(cli.log_level.as_deref())?;

    let mut config = AppConfig::from_env().wrap_err("invalid configuration")?;
    if let Some(api_base) = cli.api_base {
        config = config.with_api_base(api_base);
    }

    let app = App::new(config)?;
    let mut stdout = io::stdout();
    app.run(cli.command, &mut stdout).await
}

impl App {
    fn new(config: AppConfig) -> Result<Self> {
        let service = Arc::new(
            HttpTaskService::new(config.http_client()).wrap_err("could not set up HTTP client")?,
        );
        let clock = Arc::new(DefaultClock);
        let lifecycle = TaskLifecycleService::new(Arc::clone(&service), Arc::clone(&clock))
            .with_validator(DefaultTaskValidator::with_config(config.validation))
            .with_transition_policy(config.transition_policy());
        tracing::debug!(api_base = %service.base_url(), "client ready");

        Ok(Self {
            config,
            service,
            clock,
            lifecycle,
        })
    }

    async fn run(&self, command: Command, out: &mut impl Write) -> Result<()> {
        match command {
            Command::List(args) => self.list(args, out).await,
            Command::Show { id } => {
                let task = self.lifecycle.get(id).await.map_err(|err| report(&err))?;
                output::task_detail(out, &task)?;
                Ok(())
            }
            Command::Create(args) => self.create(args, out).await,
            Command::Edit(args) => self.edit(args, out).await,
            Command::Delete { id } => {
                self.lifecycle.delete(id).await.map_err(|err| {
                    eyre!(Notice::DeleteFailed(err.user_message()).to_string())
                })?;
                writeln!(out, "{}", Notice::Deleted(id))?;
                Ok(())
            }
            Command::Status { id, status } => {
                // The policy needs the current status.
                let task = self.lifecycle.get(id).await.map_err(|err| report(&err))?;
                let updated = self
                    .lifecycle
                    .change_status(&task, status)
                    .await
                    .map_err(|err| eyre!(Notice::StatusUpdateFailed(err.user_message()).to_string()))?;
                writeln!(out, "{}", Notice::StatusUpdated(updated.status()))?;
                Ok(())
            }
            Command::Search(args) => self.search(args, out).await,
            Command::Statuses => {
                let catalog = self.lifecycle.load_statuses().await;
                output::statuses(out, &catalog)?;
                Ok(())
            }
            Command::Stats => {
                let tasks = self
                    .lifecycle
                    .list()
                    .await
                    .map_err(|err| eyre!("{}: {}", Notice::LoadFailed, err.user_message()))?;
                let stats = TaskStats::collect(&tasks, self.clock.utc());
                output::stats(out, &stats)?;
                Ok(())
            }
        }
    }

    async fn list(&self, args: ListArgs, out: &mut impl Write) -> Result<()> {
        let fetched = if args.overdue {
            self.lifecycle.list_overdue().await
        } else {
            self.lifecycle.list().await
        };
        let tasks = fetched.map_err(|err| eyre!("{}: {}", Notice::LoadFailed, err.user_message()))?;

        let query = TaskListQuery::new()
            .with_status(args.status)
            .with_search(args.search);
        let direction = if args.desc {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        let sorted = SortSpec::new(args.sort, direction).sorted(query.apply(tasks));
        let page = paginate(
            sorted,
            args.page,
            args.page_size.unwrap_or(self.config.page_size),
        );

        output::task_page(out, &page)?;
        Ok(())
    }

    async fn create(&self, args: CreateArgs, out: &mut impl Write) -> Result<()> {
        let mut draft = TaskDraft::new_form()
            .with_title(args.title)
            .with_status(args.status)
            .with_due_date(args.due);
        if let Some(description) = args.description {
            draft = draft.with_description(description);
        }

        let created = self.lifecycle.create(&draft).await.map_err(|err| report(&err))?;
        writeln!(out, "{} (id {})", Notice::Created, created.id())?;
        Ok(())
    }

    async fn edit(&self, args: EditArgs, out: &mut impl Write) -> Result<()> {
        let current = self.lifecycle.get(args.id).await.map_err(|err| report(&err))?;

        let mut draft = TaskDraft::from(&current);
        if let Some(title) = args.title {
            draft = draft.with_title(title);
        }
        if let Some(description) = args.description {
            draft = draft.with_description(description);
        }
        if let Some(status) = args.status {
            draft = draft.with_status(status);
        }
        if let Some(due) = args.due {
            draft = draft.with_due_date(due);
        }

        self.lifecycle.update(args.id, &draft).await.map_err(|err| report(&err))?;
        writeln!(out, "{}", Notice::Updated)?;
        Ok(())
    }

    async fn search(&self, args: SearchArgs, out: &mut impl Write) -> Result<()> {
        let mut filters = SearchFilters::new().with_title(args.title);
        if let Some(status) = args.status {
            filters = filters.with_status(status);
        }
        if let Some(range) = args.range {
            filters = filters.with_due_date_range(range);
        }
        if let Some(due_date) = args.due_date {
            filters = filters.with_due_date(due_date);
        }

        let searcher = TaskSearchService::new(Arc::clone(&self.service), Arc::clone(&self.clock));
        let outcome = searcher
            .search(&filters)
            .await
            .map_err(|err| eyre!(err.user_message()))?;

        output::task_table(out, outcome.tasks())?;
        writeln!(out, "{}", outcome.message())?;
        Ok(())
    }
}

/// Converts a lifecycle error into a report carrying the user-facing text.
fn report(err: &TaskLifecycleError) -> eyre::Report {
    let fields = err.field_messages();
    if fields.is_empty() {
        return eyre!(err.user_message());
    }
    let lines = fields
        .iter()
        .map(|(field, message)| format!("  {field}: {message}"))
        .collect::<Vec<_>>()
        .join("\n");
    eyre!("task was not saved:\n{lines}")
}
