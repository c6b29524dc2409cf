//! taskopia status and done command implementations.

use serde::Serialize;

use crate::cli::Context;
use crate::error::Result;
use crate::output::{emit_success, status_label, HumanOutput, OutputOptions};
use crate::task::Status;

pub struct StatusOptions {
    pub id: String,
    pub status: String,
    pub json: bool,
    pub quiet: bool,
}

pub struct DoneOptions {
    pub id: String,
    pub json: bool,
    pub quiet: bool,
}

#[derive(Serialize)]
struct StatusOutput {
    id: String,
    status: Status,
    completed: bool,
}

pub fn run(ctx: Context, options: StatusOptions) -> Result<()> {
    let status = options.status.parse()?;
    set_status(ctx, &options.id, status, "status", options.json, options.quiet)
}

pub fn run_done(ctx: Context, options: DoneOptions) -> Result<()> {
    set_status(
        ctx,
        &options.id,
        Status::Completed,
        "done",
        options.json,
        options.quiet,
    )
}

fn set_status(
    mut ctx: Context,
    id: &str,
    status: Status,
    command: &str,
    json: bool,
    quiet: bool,
) -> Result<()> {
    let id = ctx.store.resolve_id(id)?;
    let (title, output) = {
        let task = ctx.store.set_status(&id, status)?;
        (
            task.title.clone(),
            StatusOutput {
                id: task.id.clone(),
                status: task.status,
                completed: task.completed(),
            },
        )
    };
    ctx.save()?;

    let mut human = HumanOutput::new("Task updated");
    human.push_summary("ID", output.id.clone());
    human.push_summary("Title", title);
    human.push_summary("Status", status_label(status));

    emit_success(
        OutputOptions { json, quiet },
        command,
        &output,
        Some(&human),
    )
}
