//! Shared output formatting for taskopia CLI commands.

use chrono::{DateTime, Datelike, Duration, Local, Utc};
use serde::Serialize;

use crate::error::Result;
use crate::task::Status;

pub const SCHEMA_VERSION: &str = "taskopia.v1";

#[derive(Debug, Clone, Copy)]
pub struct OutputOptions {
    pub json: bool,
    pub quiet: bool,
}

#[derive(Debug, Clone)]
pub struct HumanOutput {
    header: String,
    summary: Vec<(String, String)>,
    details: Vec<String>,
    warnings: Vec<String>,
    next_steps: Vec<String>,
}

impl HumanOutput {
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            summary: Vec::new(),
            details: Vec::new(),
            warnings: Vec::new(),
            next_steps: Vec::new(),
        }
    }

    pub fn push_summary(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.summary.push((key.into(), value.into()));
    }

    pub fn push_detail(&mut self, value: impl Into<String>) {
        self.details.push(value.into());
    }

    pub fn push_warning(&mut self, value: impl Into<String>) {
        self.warnings.push(value.into());
    }

    pub fn push_next_step(&mut self, value: impl Into<String>) {
        self.next_steps.push(value.into());
    }
}

pub fn emit_success<T: Serialize>(
    options: OutputOptions,
    command: &str,
    data: &T,
    human: Option<&HumanOutput>,
) -> Result<()> {
    if options.json {
        let warnings = human.map(|h| h.warnings.clone()).unwrap_or_default();
        let next_steps = human.map(|h| h.next_steps.clone()).unwrap_or_default();

        #[derive(Serialize)]
        struct Envelope<'a, T: Serialize> {
            schema_version: &'static str,
            command: &'a str,
            status: &'static str,
            data: &'a T,
            #[serde(skip_serializing_if = "Vec::is_empty")]
            warnings: Vec<String>,
            #[serde(skip_serializing_if = "Vec::is_empty")]
            next_steps: Vec<String>,
        }

        let payload = Envelope {
            schema_version: SCHEMA_VERSION,
            command,
            status: "success",
            data,
            warnings,
            next_steps,
        };

        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    if options.quiet {
        return Ok(());
    }

    if let Some(human) = human {
        println!("{}", format_human(human));
    }

    Ok(())
}

pub fn emit_error(command: &str, err: &crate::error::Error, json: bool) -> Result<()> {
    let next_steps = error_next_steps(err);
    let hint = next_steps.first().map(|step| step.as_str());
    if json {
        #[derive(Serialize)]
        struct ErrorBody<'a> {
            message: &'a str,
            code: i32,
            kind: &'static str,
        }

        #[derive(Serialize)]
        struct Envelope<'a> {
            schema_version: &'static str,
            command: &'a str,
            status: &'static str,
            error: ErrorBody<'a>,
            #[serde(skip_serializing_if = "Vec::is_empty")]
            next_steps: Vec<String>,
        }

        let payload = Envelope {
            schema_version: SCHEMA_VERSION,
            command,
            status: "error",
            error: ErrorBody {
                message: &err.to_string(),
                code: err.exit_code(),
                kind: error_kind(err),
            },
            next_steps,
        };

        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    eprintln!("error: {err}");
    if let Some(hint) = hint {
        eprintln!("hint: {hint}");
    }
    Ok(())
}

pub fn format_human(output: &HumanOutput) -> String {
    let mut lines = Vec::new();
    lines.push(output.header.clone());

    push_summary(&mut lines, &output.summary);
    push_section(&mut lines, "Details", &output.details);
    push_section(&mut lines, "Warnings", &output.warnings);
    push_section(&mut lines, "Next steps", &output.next_steps);

    lines.join("\n")
}

pub fn infer_command_name_from_args() -> String {
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg.starts_with('-') {
            continue;
        }
        return arg;
    }
    "taskopia".to_string()
}

/// Human-facing label for a status.
pub fn status_label(status: Status) -> &'static str {
    match status {
        Status::Todo => "To Do",
        Status::InProgress => "In Progress",
        Status::Completed => "Completed",
    }
}

/// Relative due-date rendering: "Today", "Tomorrow", "No date", or a short
/// calendar date (with the year only when it differs from the current one).
pub fn format_due(due: Option<DateTime<Utc>>) -> String {
    let Some(due) = due else {
        return "No date".to_string();
    };

    let due_local = due.with_timezone(&Local).date_naive();
    let today = Local::now().date_naive();
    let tomorrow = today + Duration::days(1);

    if due_local == today {
        "Today".to_string()
    } else if due_local == tomorrow {
        "Tomorrow".to_string()
    } else if due_local.year() == today.year() {
        due_local.format("%b %-d").to_string()
    } else {
        due_local.format("%b %-d, %Y").to_string()
    }
}

fn error_kind(err: &crate::error::Error) -> &'static str {
    match err.exit_code() {
        2 => "user_error",
        _ => "operation_failed",
    }
}

fn error_next_steps(err: &crate::error::Error) -> Vec<String> {
    use crate::error::Error;

    match err {
        Error::DatasetNotFound(_) => vec!["taskopia init".to_string()],
        Error::DatasetExists(_) => vec!["taskopia init --force".to_string()],
        Error::TaskNotFound(_) | Error::AmbiguousTaskId { .. } => {
            vec!["taskopia list".to_string()]
        }
        Error::InvalidConfig(_) => vec!["fix .taskopia.toml then retry".to_string()],
        _ => Vec::new(),
    }
}

fn push_summary(lines: &mut Vec<String>, summary: &[(String, String)]) {
    if summary.is_empty() {
        return;
    }

    lines.push(String::new());
    lines.push("Summary:".to_string());
    for (key, value) in summary {
        if value.is_empty() {
            lines.push(format!("- {key}"));
        } else {
            lines.push(format!("- {key}: {value}"));
        }
    }
}

fn push_section(lines: &mut Vec<String>, title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }

    lines.push(String::new());
    lines.push(format!("{title}:"));
    for item in items {
        lines.push(format!("- {item}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_human_includes_sections_in_order() {
        let mut output = HumanOutput::new("Header");
        output.push_summary("Count", "3");
        output.push_detail("a detail");
        output.push_next_step("taskopia list");

        let text = format_human(&output);
        assert!(text.starts_with("Header"));
        let summary_pos = text.find("Summary:").expect("summary");
        let details_pos = text.find("Details:").expect("details");
        let next_pos = text.find("Next steps:").expect("next steps");
        assert!(summary_pos < details_pos && details_pos < next_pos);
    }

    #[test]
    fn format_due_handles_missing_and_relative_dates() {
        assert_eq!(format_due(None), "No date");
        assert_eq!(format_due(Some(Utc::now())), "Today");
        assert_eq!(format_due(Some(Utc::now() + Duration::days(1))), "Tomorrow");
    }

    #[test]
    fn status_labels_match_ui_wording() {
        assert_eq!(status_label(Status::Todo), "To Do");
        assert_eq!(status_label(Status::InProgress), "In Progress");
        assert_eq!(status_label(Status::Completed), "Completed");
    }
}
