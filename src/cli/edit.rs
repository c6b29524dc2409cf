//! taskopia edit command implementation.

use chrono::Utc;

use crate::cli::{parse_due, Context, TaskView};
use crate::error::Result;
use crate::output::{emit_success, HumanOutput, OutputOptions};
use crate::store::TaskEdit;

pub struct EditOptions {
    pub id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<String>,
    pub category: Option<String>,
    pub due: Option<String>,
    pub clear_due: bool,
    pub tags: Vec<String>,
    pub json: bool,
    pub quiet: bool,
}

pub fn run(mut ctx: Context, options: EditOptions) -> Result<()> {
    let id = ctx.store.resolve_id(&options.id)?;

    let due_date = if options.clear_due {
        Some(None)
    } else {
        options
            .due
            .as_deref()
            .map(parse_due)
            .transpose()?
            .map(Some)
    };

    let edit = TaskEdit {
        title: options.title,
        description: options.description,
        priority: options.priority.as_deref().map(str::parse).transpose()?,
        category: options.category.as_deref().map(str::parse).transpose()?,
        due_date,
        tags: if options.tags.is_empty() {
            None
        } else {
            Some(options.tags)
        },
    };

    let view = {
        let task = ctx.store.edit(&id, edit)?;
        TaskView::at(task, Utc::now())
    };
    ctx.save()?;

    let mut human = HumanOutput::new("Task updated");
    human.push_summary("ID", view.task.id.clone());
    human.push_summary("Title", view.task.title.clone());

    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "edit",
        &view,
        Some(&human),
    )
}
