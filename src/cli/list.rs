//! taskopia list command implementation.

use chrono::Utc;
use serde::Serialize;

use crate::cli::{parse_filter, Context, TaskView};
use crate::error::Result;
use crate::output::{emit_success, format_due, status_label, HumanOutput, OutputOptions};
use crate::query::{filter_tasks, sort_tasks, SortKey, TaskFilter};

pub struct ListOptions {
    pub status: String,
    pub priority: String,
    pub category: String,
    pub search: Option<String>,
    pub sort: Option<String>,
    pub limit: Option<usize>,
    pub json: bool,
    pub quiet: bool,
}

#[derive(Serialize)]
struct ListOutput {
    total: usize,
    shown: usize,
    sort: SortKey,
    tasks: Vec<TaskView>,
}

pub fn run(ctx: Context, options: ListOptions) -> Result<()> {
    let filter = TaskFilter {
        status: parse_filter(&options.status)?,
        priority: parse_filter(&options.priority)?,
        category: parse_filter(&options.category)?,
        search: options.search,
    };
    let sort = match options.sort.as_deref() {
        Some(value) => value.parse()?,
        None => ctx.config.default_sort(),
    };

    let total = ctx.store.len();
    let mut tasks = sort_tasks(&filter_tasks(ctx.store.tasks(), &filter), Some(sort));
    if let Some(limit) = options.limit {
        tasks.truncate(limit);
    }

    let now = Utc::now();
    let output = ListOutput {
        total,
        shown: tasks.len(),
        sort,
        tasks: tasks.iter().map(|task| TaskView::at(task, now)).collect(),
    };

    let mut human = HumanOutput::new(format!("Tasks ({} of {})", output.shown, total));
    human.push_summary("Sort", sort.to_string());
    for task in &tasks {
        let overdue = if task.is_overdue(now) { " OVERDUE" } else { "" };
        human.push_detail(format!(
            "{}  [{}] {} ({}) due {}{} - {}",
            &task.id[..8.min(task.id.len())],
            task.priority,
            status_label(task.status),
            task.category,
            format_due(task.due_date),
            overdue,
            task.title,
        ));
    }
    if tasks.is_empty() {
        human.push_detail("no matching tasks".to_string());
    }

    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "list",
        &output,
        Some(&human),
    )
}
