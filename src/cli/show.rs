//! taskopia show command implementation.

use chrono::Utc;

use crate::cli::{Context, TaskView};
use crate::error::{Error, Result};
use crate::output::{emit_success, format_due, status_label, HumanOutput, OutputOptions};

pub struct ShowOptions {
    pub id: String,
    pub json: bool,
    pub quiet: bool,
}

pub fn run(ctx: Context, options: ShowOptions) -> Result<()> {
    let id = ctx.store.resolve_id(&options.id)?;
    let task = ctx
        .store
        .get(&id)
        .ok_or_else(|| Error::TaskNotFound(id.clone()))?;

    let now = Utc::now();
    let view = TaskView::at(task, now);

    let mut human = HumanOutput::new(task.title.clone());
    human.push_summary("ID", task.id.clone());
    human.push_summary("Status", status_label(task.status));
    human.push_summary("Priority", task.priority.to_string());
    human.push_summary("Category", task.category.to_string());
    human.push_summary("Due", format_due(task.due_date));
    if !task.tags.is_empty() {
        human.push_summary("Tags", task.tags.join(", "));
    }
    if !task.description.is_empty() {
        human.push_detail(task.description.clone());
    }
    if task.is_overdue(now) {
        human.push_warning("this task is overdue".to_string());
    }

    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "show",
        &view,
        Some(&human),
    )
}
