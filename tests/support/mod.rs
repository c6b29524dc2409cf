use std::path::PathBuf;

use assert_cmd::Command;
use chrono::{DateTime, Duration, Utc};
use tempfile::TempDir;

use taskopia::dataset;
use taskopia::task::{generate_task_id, Category, Priority, Status, Task};

/// A tempdir-backed dataset for driving the binary in tests.
pub struct TestDataset {
    dir: TempDir,
}

impl TestDataset {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("failed to create tempdir");
        Self { dir }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.path().join("tasks.json")
    }

    pub fn write_tasks(&self, tasks: &[Task]) {
        dataset::save(&self.path(), tasks).expect("write dataset");
    }

    pub fn read_tasks(&self) -> Vec<Task> {
        dataset::load(&self.path()).expect("read dataset")
    }

    /// Command pointed at this dataset via the TASKOPIA_FILE env var.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("taskopia").expect("binary");
        cmd.env("TASKOPIA_FILE", self.path());
        cmd.current_dir(self.dir.path());
        cmd
    }
}

pub struct TaskSeed {
    pub title: &'static str,
    pub priority: Priority,
    pub status: Status,
    pub category: Category,
    pub due_in_days: Option<i64>,
    pub tags: &'static [&'static str],
}

impl Default for TaskSeed {
    fn default() -> Self {
        Self {
            title: "task",
            priority: Priority::Medium,
            status: Status::Todo,
            category: Category::Other,
            due_in_days: None,
            tags: &[],
        }
    }
}

pub fn make_task(seed: TaskSeed, now: DateTime<Utc>) -> Task {
    Task {
        id: generate_task_id(),
        title: seed.title.to_string(),
        description: String::new(),
        priority: seed.priority,
        status: seed.status,
        category: seed.category,
        due_date: seed.due_in_days.map(|days| now + Duration::days(days)),
        created_at: now,
        updated_at: now,
        tags: seed.tags.iter().map(|tag| tag.to_string()).collect(),
    }
}
