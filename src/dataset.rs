//! Task dataset persistence.
//!
//! The task list lives in a single JSON document with a schema-version
//! envelope. Writes go through a temp file in the same directory followed by
//! an atomic rename, so a crash never leaves a half-written dataset behind.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::task::{generate_task_id, Category, Priority, Status, Task};

pub const DATASET_SCHEMA_VERSION: &str = "taskopia.tasks.v1";
const DATASET_FILE: &str = "tasks.json";

/// On-disk document wrapping the task list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    pub schema_version: String,
    pub generated_at: DateTime<Utc>,
    pub tasks: Vec<Task>,
}

impl Dataset {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self {
            schema_version: DATASET_SCHEMA_VERSION.to_string(),
            generated_at: Utc::now(),
            tasks,
        }
    }

}

/// Load the task list from `path`. A missing file is a user error so the
/// CLI can point at `taskopia init`.
pub fn load(path: &Path) -> Result<Vec<Task>> {
    if !path.exists() {
        return Err(Error::DatasetNotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)?;
    let dataset: Dataset = serde_json::from_str(&content)?;
    if dataset.schema_version != DATASET_SCHEMA_VERSION {
        return Err(Error::UnsupportedSchema(dataset.schema_version));
    }
    tracing::debug!(path = %path.display(), tasks = dataset.tasks.len(), "loaded dataset");
    Ok(dataset.tasks)
}

/// Write the task list to `path`, atomically.
pub fn save(path: &Path, tasks: &[Task]) -> Result<()> {
    let dataset = Dataset::new(tasks.to_vec());
    let json = serde_json::to_string_pretty(&dataset)?;
    tracing::debug!(path = %path.display(), tasks = tasks.len(), "writing dataset");
    write_atomic(path, json.as_bytes())
}

fn write_atomic(path: &Path, data: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    // Temp file in the same directory, so the rename stays on one filesystem.
    let temp_path = path.with_extension(format!(
        "{}.tmp.{}",
        path.extension().and_then(|e| e.to_str()).unwrap_or(""),
        std::process::id()
    ));

    let mut temp_file = File::create(&temp_path)?;
    temp_file.write_all(data)?;
    temp_file.sync_all()?;
    drop(temp_file);

    fs::rename(&temp_path, path)?;
    Ok(())
}

/// Default dataset location in the platform data directory.
pub fn default_path() -> PathBuf {
    directories::ProjectDirs::from("", "", "taskopia")
        .map(|dirs| dirs.data_dir().join(DATASET_FILE))
        .unwrap_or_else(|| PathBuf::from(DATASET_FILE))
}

/// The built-in starter tasks seeded by `taskopia init`. Due dates are
/// relative to `now` so the set always exercises every status, priority,
/// and an overdue-but-completed case.
pub fn sample_tasks(now: DateTime<Utc>) -> Vec<Task> {
    let entries: Vec<(&str, &str, Priority, Status, Category, Option<i64>, i64, &[&str])> = vec![
        (
            "Complete project proposal",
            "Finalize and submit the Q3 project proposal with budget estimates",
            Priority::High,
            Status::InProgress,
            Category::Work,
            Some(2),
            -5,
            &["project", "quarterly", "deadline"],
        ),
        (
            "Weekly team meeting",
            "Prepare agenda and discussion points for weekly team sync",
            Priority::Medium,
            Status::Todo,
            Category::Work,
            Some(1),
            -2,
            &["meeting", "weekly", "team"],
        ),
        (
            "Gym session",
            "One-hour workout focusing on cardio and upper body",
            Priority::Medium,
            Status::Todo,
            Category::Health,
            Some(0),
            -1,
            &["health", "fitness", "routine"],
        ),
        (
            "Pay utility bills",
            "Pay electricity, water, and internet bills",
            Priority::High,
            Status::Todo,
            Category::Finance,
            Some(3),
            -3,
            &["bills", "monthly", "finance"],
        ),
        (
            "Read current book chapter",
            "Continue reading 'Atomic Habits' chapters 7-8",
            Priority::Low,
            Status::Todo,
            Category::Personal,
            Some(5),
            -6,
            &["reading", "personal-development", "habit"],
        ),
        (
            "Order groceries",
            "Restock essentials and prepare for weekend meal prep",
            Priority::Medium,
            Status::Completed,
            Category::Personal,
            Some(-1),
            -4,
            &["shopping", "food", "weekly"],
        ),
        (
            "Update portfolio website",
            "Add recent projects and update skills section",
            Priority::Low,
            Status::InProgress,
            Category::Work,
            Some(10),
            -10,
            &["career", "development", "portfolio"],
        ),
    ];

    entries
        .into_iter()
        .map(
            |(title, description, priority, status, category, due_days, created_days, tags)| {
                Task {
                    id: generate_task_id(),
                    title: title.to_string(),
                    description: description.to_string(),
                    priority,
                    status,
                    category,
                    due_date: due_days.map(|days| now + Duration::days(days)),
                    created_at: now + Duration::days(created_days),
                    updated_at: now,
                    tags: tags.iter().map(|tag| tag.to_string()).collect(),
                }
            },
        )
        .collect()
}
