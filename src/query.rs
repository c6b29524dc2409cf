//! Task query engine: filter, sort, and aggregate statistics.
//!
//! All functions here are pure and total: they never mutate their input,
//! never fail, and hold no state. Callers re-run them after any mutation.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::Error;
use crate::task::{Category, Priority, Status, Task};

/// Filter criteria. A `None` field means "no constraint" (the UI's "all"
/// sentinel). All active constraints must match; a non-empty search string
/// additionally requires a case-insensitive substring match in the title,
/// description, or any tag.
#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    pub status: Option<Status>,
    pub priority: Option<Priority>,
    pub category: Option<Category>,
    pub search: Option<String>,
}

impl TaskFilter {
    fn matches(&self, task: &Task) -> bool {
        if let Some(status) = self.status {
            if task.status != status {
                return false;
            }
        }

        if let Some(priority) = self.priority {
            if task.priority != priority {
                return false;
            }
        }

        if let Some(category) = self.category {
            if task.category != category {
                return false;
            }
        }

        match self.search.as_deref().map(str::trim) {
            Some(query) if !query.is_empty() => {
                let query = query.to_lowercase();
                task.title.to_lowercase().contains(&query)
                    || task.description.to_lowercase().contains(&query)
                    || task.tags.iter().any(|tag| tag.to_lowercase().contains(&query))
            }
            _ => true,
        }
    }
}

/// Sort criterion for a task list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Ascending; tasks with no due date sort after all dated tasks.
    DueDate,
    /// High before medium before low.
    Priority,
    /// Case-insensitive lexicographic ascending.
    Title,
    /// Todo before in-progress before completed.
    Status,
    /// Descending, newest first.
    Created,
}

impl SortKey {
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::DueDate => "due-date",
            SortKey::Priority => "priority",
            SortKey::Title => "title",
            SortKey::Status => "status",
            SortKey::Created => "created",
        }
    }
}

impl FromStr for SortKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s.trim().to_ascii_lowercase().as_str() {
            "due-date" | "due_date" | "duedate" => Ok(SortKey::DueDate),
            "priority" => Ok(SortKey::Priority),
            "title" => Ok(SortKey::Title),
            "status" => Ok(SortKey::Status),
            "created" => Ok(SortKey::Created),
            other => Err(Error::InvalidArgument(format!(
                "unknown sort key '{other}' (expected due-date|priority|title|status|created)"
            ))),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Aggregate task statistics. Derived on demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub overdue: usize,
    pub high_priority: usize,
}

/// Return the tasks matching `filter`, in input order.
pub fn filter_tasks(tasks: &[Task], filter: &TaskFilter) -> Vec<Task> {
    tasks
        .iter()
        .filter(|task| filter.matches(task))
        .cloned()
        .collect()
}

/// Return a copy of `tasks` ordered by `key`. `None` preserves the input
/// order. Equal-key tasks retain their relative input order.
pub fn sort_tasks(tasks: &[Task], key: Option<SortKey>) -> Vec<Task> {
    let mut sorted = tasks.to_vec();
    let Some(key) = key else {
        return sorted;
    };

    // Vec::sort_by is stable, so no tie-breakers: ties keep input order.
    match key {
        SortKey::DueDate => sorted.sort_by(|a, b| compare_due(a.due_date, b.due_date)),
        SortKey::Priority => sorted.sort_by(|a, b| a.priority.rank().cmp(&b.priority.rank())),
        SortKey::Title => sorted.sort_by(|a, b| {
            a.title.to_lowercase().cmp(&b.title.to_lowercase())
        }),
        SortKey::Status => sorted.sort_by(|a, b| a.status.rank().cmp(&b.status.rank())),
        SortKey::Created => sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
    }

    sorted
}

fn compare_due(a: Option<DateTime<Utc>>, b: Option<DateTime<Utc>>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Compute aggregate statistics at wall-clock now.
pub fn task_stats(tasks: &[Task]) -> TaskStats {
    task_stats_at(tasks, Utc::now())
}

/// Compute aggregate statistics with an explicit evaluation instant.
pub fn task_stats_at(tasks: &[Task], now: DateTime<Utc>) -> TaskStats {
    let mut stats = TaskStats {
        total: tasks.len(),
        completed: 0,
        overdue: 0,
        high_priority: 0,
    };

    for task in tasks {
        if task.completed() {
            stats.completed += 1;
        }
        if task.is_overdue(now) {
            stats.overdue += 1;
        }
        if task.priority == Priority::High {
            stats.high_priority += 1;
        }
    }

    stats
}
