//! Command-line interface for taskopia
//!
//! This module defines the CLI structure using clap derive macros.
//! Each subcommand is implemented in its own submodule.

use std::path::PathBuf;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use clap::{Parser, Subcommand};
use serde::Serialize;

use crate::config::Config;
use crate::dataset;
use crate::error::{Error, Result};
use crate::store::TaskStore;
use crate::task::Task;

mod add;
mod edit;
mod init;
mod list;
mod rm;
mod show;
mod stats;
mod status;

/// taskopia - task manager
///
/// Filter, sort, and summarize a personal task list from the command line.
#[derive(Parser, Debug)]
#[command(name = "taskopia")]
#[command(author, version, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the task dataset (defaults to the platform data dir)
    #[arg(long, global = true, env = "TASKOPIA_FILE")]
    pub file: Option<PathBuf>,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the task dataset, seeded with sample tasks
    Init {
        /// Start with an empty task list instead of the samples
        #[arg(long)]
        empty: bool,

        /// Overwrite an existing dataset
        #[arg(long)]
        force: bool,
    },

    /// List tasks with optional filters and sorting
    List {
        /// Filter by status: todo, in-progress, completed, or all
        #[arg(long, default_value = "all")]
        status: String,

        /// Filter by priority: low, medium, high, or all
        #[arg(long, default_value = "all")]
        priority: String,

        /// Filter by category: work, personal, health, finance, other, or all
        #[arg(long, default_value = "all")]
        category: String,

        /// Case-insensitive search over title, description, and tags
        #[arg(long)]
        search: Option<String>,

        /// Sort key: due-date, priority, title, status, or created
        #[arg(long)]
        sort: Option<String>,

        /// Show at most this many tasks
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Show aggregate task statistics
    Stats,

    /// Show a single task by id or unique id prefix
    Show {
        /// Task id or unique prefix
        id: String,
    },

    /// Add a new task
    Add {
        /// Task title
        title: String,

        /// Longer description
        #[arg(short, long)]
        description: Option<String>,

        /// Priority: low, medium, high
        #[arg(long)]
        priority: Option<String>,

        /// Category: work, personal, health, finance, other
        #[arg(long)]
        category: Option<String>,

        /// Due date (YYYY-MM-DD or RFC 3339)
        #[arg(long)]
        due: Option<String>,

        /// Tag (repeatable)
        #[arg(long = "tag")]
        tags: Vec<String>,
    },

    /// Edit an existing task
    Edit {
        /// Task id or unique prefix
        id: String,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New description
        #[arg(short, long)]
        description: Option<String>,

        /// New priority: low, medium, high
        #[arg(long)]
        priority: Option<String>,

        /// New category: work, personal, health, finance, other
        #[arg(long)]
        category: Option<String>,

        /// New due date (YYYY-MM-DD or RFC 3339)
        #[arg(long, conflicts_with = "clear_due")]
        due: Option<String>,

        /// Remove the due date
        #[arg(long)]
        clear_due: bool,

        /// Replace the tag list (repeatable)
        #[arg(long = "tag")]
        tags: Vec<String>,
    },

    /// Change a task's status
    Status {
        /// Task id or unique prefix
        id: String,

        /// New status: todo, in-progress, completed
        status: String,
    },

    /// Mark a task completed
    Done {
        /// Task id or unique prefix
        id: String,
    },

    /// Delete a task
    Rm {
        /// Task id or unique prefix
        id: String,
    },
}

/// Shared command context: resolved dataset path, loaded store, and config.
pub struct Context {
    pub store: TaskStore,
    pub config: Config,
    pub path: PathBuf,
}

impl Context {
    /// Write the store back to the dataset file.
    pub fn save(&self) -> Result<()> {
        dataset::save(&self.path, self.store.tasks())
    }
}

/// Resolve the dataset path: explicit flag/env, then config, then the
/// platform default.
pub fn resolve_dataset_path(file: Option<PathBuf>, config: &Config) -> PathBuf {
    file.or_else(|| config.data_file.clone())
        .unwrap_or_else(dataset::default_path)
}

fn load_context(file: Option<PathBuf>) -> Result<Context> {
    let cwd = std::env::current_dir()?;
    let config = Config::load_from_dir(&cwd);
    let path = resolve_dataset_path(file, &config);
    let tasks = dataset::load(&path)?;
    Ok(Context {
        store: TaskStore::from_tasks(tasks),
        config,
        path,
    })
}

/// Parse a filter value where "all" means no constraint.
pub fn parse_filter<T>(value: &str) -> Result<Option<T>>
where
    T: FromStr<Err = Error>,
{
    if value.trim().eq_ignore_ascii_case("all") {
        Ok(None)
    } else {
        value.parse().map(Some)
    }
}

/// Parse a due date given as `YYYY-MM-DD` (midnight UTC) or RFC 3339.
pub fn parse_due(value: &str) -> Result<DateTime<Utc>> {
    let trimmed = value.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(parsed.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        let midnight = date.and_hms_opt(0, 0, 0).expect("midnight is valid");
        return Ok(DateTime::from_naive_utc_and_offset(midnight, Utc));
    }
    Err(Error::InvalidArgument(format!(
        "invalid due date '{trimmed}' (expected YYYY-MM-DD or RFC 3339)"
    )))
}

/// Task as presented to CLI consumers, with the derived flags spelled out.
#[derive(Debug, Serialize)]
pub struct TaskView {
    #[serde(flatten)]
    pub task: Task,
    pub completed: bool,
    pub overdue: bool,
}

impl TaskView {
    pub fn at(task: &Task, now: DateTime<Utc>) -> Self {
        Self {
            completed: task.completed(),
            overdue: task.is_overdue(now),
            task: task.clone(),
        }
    }
}

impl Cli {
    /// Execute the CLI command
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Init { empty, force } => init::run(init::InitOptions {
                empty,
                force,
                file: self.file,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::List {
                status,
                priority,
                category,
                search,
                sort,
                limit,
            } => {
                let ctx = load_context(self.file)?;
                list::run(
                    ctx,
                    list::ListOptions {
                        status,
                        priority,
                        category,
                        search,
                        sort,
                        limit,
                        json: self.json,
                        quiet: self.quiet,
                    },
                )
            }
            Commands::Stats => {
                let ctx = load_context(self.file)?;
                stats::run(
                    ctx,
                    stats::StatsOptions {
                        json: self.json,
                        quiet: self.quiet,
                    },
                )
            }
            Commands::Show { id } => {
                let ctx = load_context(self.file)?;
                show::run(
                    ctx,
                    show::ShowOptions {
                        id,
                        json: self.json,
                        quiet: self.quiet,
                    },
                )
            }
            Commands::Add {
                title,
                description,
                priority,
                category,
                due,
                tags,
            } => {
                let ctx = load_context(self.file)?;
                add::run(
                    ctx,
                    add::AddOptions {
                        title,
                        description,
                        priority,
                        category,
                        due,
                        tags,
                        json: self.json,
                        quiet: self.quiet,
                    },
                )
            }
            Commands::Edit {
                id,
                title,
                description,
                priority,
                category,
                due,
                clear_due,
                tags,
            } => {
                let ctx = load_context(self.file)?;
                edit::run(
                    ctx,
                    edit::EditOptions {
                        id,
                        title,
                        description,
                        priority,
                        category,
                        due,
                        clear_due,
                        tags,
                        json: self.json,
                        quiet: self.quiet,
                    },
                )
            }
            Commands::Status { id, status } => {
                let ctx = load_context(self.file)?;
                status::run(
                    ctx,
                    status::StatusOptions {
                        id,
                        status,
                        json: self.json,
                        quiet: self.quiet,
                    },
                )
            }
            Commands::Done { id } => {
                let ctx = load_context(self.file)?;
                status::run_done(
                    ctx,
                    status::DoneOptions {
                        id,
                        json: self.json,
                        quiet: self.quiet,
                    },
                )
            }
            Commands::Rm { id } => {
                let ctx = load_context(self.file)?;
                rm::run(
                    ctx,
                    rm::RmOptions {
                        id,
                        json: self.json,
                        quiet: self.quiet,
                    },
                )
            }
        }
    }
}
