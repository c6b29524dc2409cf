//! In-memory task store.
//!
//! The store owns the task list and is itself owned by the composition root
//! (the CLI); nothing here is global. Mutations bump `updated_at` on the
//! touched task. Reads hand out slices; the query engine never mutates.

use chrono::{DateTime, Utc};

use crate::error::{Error, Result};
use crate::task::{generate_task_id, Status, Task, TaskDraft};

/// Partial update applied by [`TaskStore::edit`]. `None` leaves the field
/// unchanged; `due_date` distinguishes "leave" from "clear".
#[derive(Debug, Clone, Default)]
pub struct TaskEdit {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<crate::task::Priority>,
    pub category: Option<crate::task::Category>,
    pub due_date: Option<Option<DateTime<Utc>>>,
    pub tags: Option<Vec<String>>,
}

impl TaskEdit {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.priority.is_none()
            && self.category.is_none()
            && self.due_date.is_none()
            && self.tags.is_none()
    }
}

#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn into_tasks(self) -> Vec<Task> {
        self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Create a task from a draft, generating its id and timestamps.
    /// Returns the new id.
    pub fn add(&mut self, draft: TaskDraft) -> Result<String> {
        let title = draft.title.trim();
        if title.is_empty() {
            return Err(Error::InvalidArgument("title cannot be empty".to_string()));
        }

        let now = Utc::now();
        let id = generate_task_id();
        self.tasks.push(Task {
            id: id.clone(),
            title: title.to_string(),
            description: draft.description,
            priority: draft.priority,
            status: Status::Todo,
            category: draft.category,
            due_date: draft.due_date,
            created_at: now,
            updated_at: now,
            tags: draft.tags,
        });
        Ok(id)
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Apply a partial edit and bump `updated_at`.
    pub fn edit(&mut self, id: &str, edit: TaskEdit) -> Result<&Task> {
        if edit.is_empty() {
            return Err(Error::InvalidArgument("nothing to change".to_string()));
        }
        if let Some(title) = edit.title.as_deref() {
            if title.trim().is_empty() {
                return Err(Error::InvalidArgument("title cannot be empty".to_string()));
            }
        }

        let task = self.get_mut(id)?;
        if let Some(title) = edit.title {
            task.title = title.trim().to_string();
        }
        if let Some(description) = edit.description {
            task.description = description;
        }
        if let Some(priority) = edit.priority {
            task.priority = priority;
        }
        if let Some(category) = edit.category {
            task.category = category;
        }
        if let Some(due_date) = edit.due_date {
            task.due_date = due_date;
        }
        if let Some(tags) = edit.tags {
            task.tags = tags;
        }
        task.updated_at = Utc::now();
        Ok(task)
    }

    /// Change the workflow status and bump `updated_at`. Completion is
    /// derived from status, so there is nothing else to keep in sync.
    pub fn set_status(&mut self, id: &str, status: Status) -> Result<&Task> {
        let task = self.get_mut(id)?;
        task.status = status;
        task.updated_at = Utc::now();
        Ok(task)
    }

    /// Remove a task by id, returning the removed record.
    pub fn remove(&mut self, id: &str) -> Result<Task> {
        let index = self
            .tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or_else(|| Error::TaskNotFound(id.to_string()))?;
        Ok(self.tasks.remove(index))
    }

    /// Resolve user input to a full task id: exact match first, then a
    /// unique id prefix. Ambiguous prefixes and unknown ids are user errors.
    pub fn resolve_id(&self, input: &str) -> Result<String> {
        let needle = input.trim().to_ascii_lowercase();
        if needle.is_empty() {
            return Err(Error::InvalidArgument("task id cannot be empty".to_string()));
        }

        if let Some(task) = self.tasks.iter().find(|task| task.id == needle) {
            return Ok(task.id.clone());
        }

        let mut matches: Vec<String> = self
            .tasks
            .iter()
            .filter(|task| task.id.starts_with(&needle))
            .map(|task| task.id.clone())
            .collect();

        match matches.len() {
            0 => Err(Error::TaskNotFound(input.trim().to_string())),
            1 => Ok(matches.remove(0)),
            _ => {
                matches.sort();
                Err(Error::AmbiguousTaskId {
                    input: input.trim().to_string(),
                    matches,
                })
            }
        }
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut Task> {
        self.tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or_else(|| Error::TaskNotFound(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::{Category, Priority};

    fn store_with(titles: &[&str]) -> TaskStore {
        let mut store = TaskStore::new();
        for title in titles {
            store.add(TaskDraft::new(*title)).expect("add");
        }
        store
    }

    #[test]
    fn add_generates_id_and_timestamps() {
        let mut store = TaskStore::new();
        let id = store.add(TaskDraft::new("Write docs")).expect("add");
        let task = store.get(&id).expect("task");
        assert_eq!(task.title, "Write docs");
        assert_eq!(task.status, Status::Todo);
        assert_eq!(task.created_at, task.updated_at);
    }

    #[test]
    fn add_rejects_blank_title() {
        let mut store = TaskStore::new();
        assert!(store.add(TaskDraft::new("   ")).is_err());
    }

    #[test]
    fn edit_applies_partial_update_and_touches_updated_at() {
        let mut store = TaskStore::new();
        let id = store.add(TaskDraft::new("Original")).expect("add");
        let created_at = store.get(&id).expect("task").created_at;

        let edit = TaskEdit {
            title: Some("Renamed".to_string()),
            priority: Some(Priority::High),
            due_date: Some(None),
            ..TaskEdit::default()
        };
        let task = store.edit(&id, edit).expect("edit");
        assert_eq!(task.title, "Renamed");
        assert_eq!(task.priority, Priority::High);
        assert_eq!(task.category, Category::Other);
        assert!(task.updated_at >= created_at);
    }

    #[test]
    fn edit_with_no_fields_is_rejected() {
        let mut store = store_with(&["a"]);
        let id = store.tasks()[0].id.clone();
        assert!(store.edit(&id, TaskEdit::default()).is_err());
    }

    #[test]
    fn set_status_marks_completion() {
        let mut store = store_with(&["a"]);
        let id = store.tasks()[0].id.clone();
        let task = store.set_status(&id, Status::Completed).expect("status");
        assert!(task.completed());
    }

    #[test]
    fn remove_returns_record_and_errors_on_unknown_id() {
        let mut store = store_with(&["a", "b"]);
        let id = store.tasks()[0].id.clone();
        let removed = store.remove(&id).expect("remove");
        assert_eq!(removed.title, "a");
        assert_eq!(store.len(), 1);
        assert!(matches!(store.remove(&id), Err(Error::TaskNotFound(_))));
    }

    #[test]
    fn resolve_id_accepts_exact_and_unique_prefix() {
        let mut store = TaskStore::new();
        let id = store.add(TaskDraft::new("a")).expect("add");
        assert_eq!(store.resolve_id(&id).expect("exact"), id);
        assert_eq!(store.resolve_id(&id[..6]).expect("prefix"), id);
        assert_eq!(
            store.resolve_id(&id[..6].to_ascii_uppercase()).expect("case"),
            id
        );
    }

    #[test]
    fn resolve_id_rejects_ambiguous_and_unknown_input() {
        let store = TaskStore::from_tasks(vec![]);
        assert!(matches!(store.resolve_id("zzz"), Err(Error::TaskNotFound(_))));

        let mut store = TaskStore::new();
        // ULIDs share a timestamp prefix when created back to back, so a
        // one-character needle is reliably ambiguous here.
        let a = store.add(TaskDraft::new("a")).expect("add");
        let b = store.add(TaskDraft::new("b")).expect("add");
        let shared: String = a
            .chars()
            .zip(b.chars())
            .take_while(|(x, y)| x == y)
            .map(|(x, _)| x)
            .collect();
        if !shared.is_empty() {
            assert!(matches!(
                store.resolve_id(&shared),
                Err(Error::AmbiguousTaskId { .. })
            ));
        }
    }
}
