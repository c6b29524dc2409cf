mod support;

use serde_json::Value;

use support::TestDataset;
use taskopia::task::Status;

fn json_output(dataset: &TestDataset, args: &[&str]) -> Value {
    let output = dataset
        .cmd()
        .args(args)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    serde_json::from_slice(&output).expect("json output")
}

fn add_task(dataset: &TestDataset, title: &str, extra: &[&str]) -> String {
    let mut args = vec!["add", title, "--json"];
    args.extend_from_slice(extra);
    let value = json_output(dataset, &args);
    value["data"]["id"].as_str().expect("task id").to_string()
}

#[test]
fn init_seeds_sample_tasks() {
    let dataset = TestDataset::new();
    let value = json_output(&dataset, &["init", "--json"]);
    assert_eq!(value["data"]["tasks"].as_u64(), Some(7));
    assert_eq!(dataset.read_tasks().len(), 7);
}

#[test]
fn init_empty_creates_blank_dataset_and_refuses_overwrite() {
    let dataset = TestDataset::new();
    json_output(&dataset, &["init", "--empty", "--json"]);
    assert!(dataset.read_tasks().is_empty());

    dataset
        .cmd()
        .args(["init"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicates::str::contains("--force"));

    // --force replaces the empty dataset with the samples.
    json_output(&dataset, &["init", "--force", "--json"]);
    assert_eq!(dataset.read_tasks().len(), 7);
}

#[test]
fn add_show_edit_done_rm_round_trip() {
    let dataset = TestDataset::new();
    json_output(&dataset, &["init", "--empty", "--json"]);

    let id = add_task(
        &dataset,
        "Write changelog",
        &[
            "--priority",
            "high",
            "--category",
            "work",
            "--due",
            "2030-06-01",
            "--tag",
            "docs",
            "--tag",
            "release",
        ],
    );

    let shown = json_output(&dataset, &["show", &id, "--json"]);
    assert_eq!(shown["data"]["title"].as_str(), Some("Write changelog"));
    assert_eq!(shown["data"]["priority"].as_str(), Some("high"));
    assert_eq!(shown["data"]["status"].as_str(), Some("todo"));
    assert_eq!(shown["data"]["completed"].as_bool(), Some(false));
    assert_eq!(
        shown["data"]["tags"]
            .as_array()
            .map(|tags| tags.len()),
        Some(2)
    );

    // Prefix resolution: the first half of a ULID is unique in a
    // single-task dataset.
    let prefix = &id[..13];
    let edited = json_output(
        &dataset,
        &["edit", prefix, "--title", "Write release notes", "--json"],
    );
    assert_eq!(
        edited["data"]["title"].as_str(),
        Some("Write release notes")
    );

    json_output(&dataset, &["done", &id, "--json"]);
    let tasks = dataset.read_tasks();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].status, Status::Completed);
    assert!(tasks[0].completed());

    let removed = json_output(&dataset, &["rm", &id, "--json"]);
    assert_eq!(removed["data"]["remaining"].as_u64(), Some(0));
    assert!(dataset.read_tasks().is_empty());
}

#[test]
fn status_command_moves_task_through_workflow() {
    let dataset = TestDataset::new();
    json_output(&dataset, &["init", "--empty", "--json"]);
    let id = add_task(&dataset, "Refactor parser", &[]);

    let value = json_output(&dataset, &["status", &id, "in-progress", "--json"]);
    assert_eq!(value["data"]["status"].as_str(), Some("in-progress"));
    assert_eq!(value["data"]["completed"].as_bool(), Some(false));

    dataset
        .cmd()
        .args(["status", &id, "blocked"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn unknown_id_and_bad_arguments_are_user_errors() {
    let dataset = TestDataset::new();
    json_output(&dataset, &["init", "--empty", "--json"]);

    dataset
        .cmd()
        .args(["show", "zzzzzz"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicates::str::contains("Task not found"));

    dataset
        .cmd()
        .args(["add", "Bad due date", "--due", "whenever"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn edit_can_clear_the_due_date() {
    let dataset = TestDataset::new();
    json_output(&dataset, &["init", "--empty", "--json"]);
    let id = add_task(&dataset, "Flexible task", &["--due", "2030-01-01"]);

    json_output(&dataset, &["edit", &id, "--clear-due", "--json"]);
    let tasks = dataset.read_tasks();
    assert!(tasks[0].due_date.is_none());
}
