//! taskopia init command implementation.

use std::path::PathBuf;

use chrono::Utc;
use serde::Serialize;

use crate::cli::resolve_dataset_path;
use crate::config::Config;
use crate::dataset;
use crate::error::{Error, Result};
use crate::output::{emit_success, HumanOutput, OutputOptions};

pub struct InitOptions {
    pub empty: bool,
    pub force: bool,
    pub file: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

#[derive(Serialize)]
struct InitOutput {
    path: PathBuf,
    tasks: usize,
}

pub fn run(options: InitOptions) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config = Config::load_from_dir(&cwd);
    let path = resolve_dataset_path(options.file, &config);

    if path.exists() && !options.force {
        return Err(Error::DatasetExists(path));
    }

    let tasks = if options.empty {
        Vec::new()
    } else {
        dataset::sample_tasks(Utc::now())
    };
    dataset::save(&path, &tasks)?;

    let output = InitOutput {
        path: path.clone(),
        tasks: tasks.len(),
    };

    let mut human = HumanOutput::new("Dataset created");
    human.push_summary("Path", path.display().to_string());
    human.push_summary("Tasks", tasks.len().to_string());
    human.push_next_step("taskopia list");

    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "init",
        &output,
        Some(&human),
    )
}
