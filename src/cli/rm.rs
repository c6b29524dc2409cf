//! taskopia rm command implementation.

use serde::Serialize;

use crate::cli::Context;
use crate::error::Result;
use crate::output::{emit_success, HumanOutput, OutputOptions};

pub struct RmOptions {
    pub id: String,
    pub json: bool,
    pub quiet: bool,
}

#[derive(Serialize)]
struct RmOutput {
    id: String,
    title: String,
    remaining: usize,
}

pub fn run(mut ctx: Context, options: RmOptions) -> Result<()> {
    let id = ctx.store.resolve_id(&options.id)?;
    let removed = ctx.store.remove(&id)?;
    ctx.save()?;

    let output = RmOutput {
        id: removed.id,
        title: removed.title,
        remaining: ctx.store.len(),
    };

    let mut human = HumanOutput::new("Task deleted");
    human.push_summary("ID", output.id.clone());
    human.push_summary("Title", output.title.clone());
    human.push_summary("Remaining", output.remaining.to_string());

    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "rm",
        &output,
        Some(&human),
    )
}
