mod support;

use chrono::Utc;
use serde_json::Value;

use support::{make_task, TaskSeed, TestDataset};
use taskopia::task::{Category, Priority, Status};

fn seeded_dataset() -> TestDataset {
    let now = Utc::now();
    let dataset = TestDataset::new();
    dataset.write_tasks(&[
        make_task(
            TaskSeed {
                title: "Ship release",
                priority: Priority::High,
                status: Status::InProgress,
                category: Category::Work,
                due_in_days: Some(1),
                tags: &["release"],
                ..TaskSeed::default()
            },
            now,
        ),
        make_task(
            TaskSeed {
                title: "Book dentist",
                priority: Priority::Low,
                status: Status::Todo,
                category: Category::Health,
                due_in_days: None,
                ..TaskSeed::default()
            },
            now,
        ),
        make_task(
            TaskSeed {
                title: "File taxes",
                priority: Priority::High,
                status: Status::Completed,
                category: Category::Finance,
                due_in_days: Some(-2),
                tags: &["paperwork"],
                ..TaskSeed::default()
            },
            now,
        ),
    ]);
    dataset
}

fn list_json(dataset: &TestDataset, args: &[&str]) -> Value {
    let mut full_args = vec!["list", "--json"];
    full_args.extend_from_slice(args);
    let output = dataset
        .cmd()
        .args(&full_args)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    serde_json::from_slice(&output).expect("list json")
}

fn shown_titles(value: &Value) -> Vec<String> {
    value["data"]["tasks"]
        .as_array()
        .expect("tasks array")
        .iter()
        .map(|task| task["title"].as_str().expect("title").to_string())
        .collect()
}

#[test]
fn list_without_filters_shows_everything() {
    let dataset = seeded_dataset();
    let value = list_json(&dataset, &[]);

    assert_eq!(value["schema_version"].as_str(), Some("taskopia.v1"));
    assert_eq!(value["command"].as_str(), Some("list"));
    assert_eq!(value["data"]["total"].as_u64(), Some(3));
    assert_eq!(value["data"]["shown"].as_u64(), Some(3));
}

#[test]
fn status_filter_narrows_results() {
    let dataset = seeded_dataset();
    let value = list_json(&dataset, &["--status", "completed"]);
    assert_eq!(shown_titles(&value), vec!["File taxes"]);
}

#[test]
fn all_sentinel_means_no_constraint() {
    let dataset = seeded_dataset();
    let value = list_json(
        &dataset,
        &["--status", "all", "--priority", "all", "--category", "all"],
    );
    assert_eq!(value["data"]["shown"].as_u64(), Some(3));
}

#[test]
fn search_is_anded_with_enum_filters() {
    let dataset = seeded_dataset();

    // "i" matches all three titles; the priority filter keeps two.
    let value = list_json(&dataset, &["--search", "i", "--priority", "high"]);
    let mut titles = shown_titles(&value);
    titles.sort();
    assert_eq!(titles, vec!["File taxes", "Ship release"]);
}

#[test]
fn search_matches_tags() {
    let dataset = seeded_dataset();
    let value = list_json(&dataset, &["--search", "PAPERWORK"]);
    assert_eq!(shown_titles(&value), vec!["File taxes"]);
}

#[test]
fn sort_by_priority_orders_high_first() {
    let dataset = seeded_dataset();
    let value = list_json(&dataset, &["--sort", "priority"]);
    let titles = shown_titles(&value);
    assert_eq!(titles.last().map(String::as_str), Some("Book dentist"));
}

#[test]
fn sort_by_due_date_puts_undated_last() {
    let dataset = seeded_dataset();
    let value = list_json(&dataset, &["--sort", "due-date"]);
    assert_eq!(
        shown_titles(&value),
        vec!["File taxes", "Ship release", "Book dentist"]
    );
}

#[test]
fn unknown_sort_key_is_rejected() {
    let dataset = seeded_dataset();
    dataset
        .cmd()
        .args(["list", "--sort", "alphabetical"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn limit_truncates_but_reports_full_total() {
    let dataset = seeded_dataset();
    let value = list_json(&dataset, &["--limit", "1"]);
    assert_eq!(value["data"]["total"].as_u64(), Some(3));
    assert_eq!(value["data"]["shown"].as_u64(), Some(1));
}

#[test]
fn completed_and_overdue_flags_are_derived() {
    let dataset = seeded_dataset();
    let value = list_json(&dataset, &["--status", "completed"]);
    let task = &value["data"]["tasks"][0];
    assert_eq!(task["completed"].as_bool(), Some(true));
    // Past due date but completed, so not overdue.
    assert_eq!(task["overdue"].as_bool(), Some(false));
}
