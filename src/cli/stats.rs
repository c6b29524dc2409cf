//! taskopia stats command implementation.

use crate::cli::Context;
use crate::error::Result;
use crate::output::{emit_success, HumanOutput, OutputOptions};
use crate::query::task_stats;

pub struct StatsOptions {
    pub json: bool,
    pub quiet: bool,
}

pub fn run(ctx: Context, options: StatsOptions) -> Result<()> {
    let stats = task_stats(ctx.store.tasks());

    let mut human = HumanOutput::new("Task statistics");
    human.push_summary("Total", stats.total.to_string());
    human.push_summary("Completed", stats.completed.to_string());
    human.push_summary("Overdue", stats.overdue.to_string());
    human.push_summary("High priority", stats.high_priority.to_string());

    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "stats",
        &stats,
        Some(&human),
    )
}
