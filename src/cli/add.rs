//! taskopia add command implementation.

use serde::Serialize;

use crate::cli::{parse_due, Context};
use crate::error::Result;
use crate::output::{emit_success, HumanOutput, OutputOptions};
use crate::task::TaskDraft;

pub struct AddOptions {
    pub title: String,
    pub description: Option<String>,
    pub priority: Option<String>,
    pub category: Option<String>,
    pub due: Option<String>,
    pub tags: Vec<String>,
    pub json: bool,
    pub quiet: bool,
}

#[derive(Serialize)]
struct AddOutput {
    id: String,
    title: String,
}

pub fn run(mut ctx: Context, options: AddOptions) -> Result<()> {
    let priority = match options.priority.as_deref() {
        Some(value) => value.parse()?,
        None => ctx.config.default_priority(),
    };
    let category = match options.category.as_deref() {
        Some(value) => value.parse()?,
        None => ctx.config.default_category(),
    };
    let due_date = options.due.as_deref().map(parse_due).transpose()?;

    let draft = TaskDraft {
        title: options.title,
        description: options.description.unwrap_or_default(),
        priority,
        category,
        due_date,
        tags: options.tags,
    };
    let id = ctx.store.add(draft)?;
    ctx.save()?;

    let title = ctx
        .store
        .get(&id)
        .map(|task| task.title.clone())
        .unwrap_or_default();
    let output = AddOutput {
        id: id.clone(),
        title: title.clone(),
    };

    let mut human = HumanOutput::new("Task created");
    human.push_summary("ID", id);
    human.push_summary("Title", title);
    human.push_summary("Priority", priority.to_string());
    human.push_summary("Category", category.to_string());

    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "add",
        &output,
        Some(&human),
    )
}
