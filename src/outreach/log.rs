// ABOUTME: Contact log side channel — one record per accepted contact-form submission.
// ABOUTME: Emits a readable tracing event and optionally appends JSONL to a contacts file.

use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::outreach::form::ContactSubmission;

/// Shown in place of an empty question.
pub const NOT_PROVIDED: &str = "N/A";

/// The logged form of an accepted submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactRecord {
    pub timestamp: String,
    pub name: String,
    pub email: String,
    pub follow_up_requested: bool,
    pub updates_opt_in: bool,
    pub question: Option<String>,
}

impl ContactRecord {
    pub fn from_submission(submission: ContactSubmission, at: DateTime<Local>) -> Self {
        Self {
            timestamp: at.format("%Y-%m-%d %H:%M:%S").to_string(),
            name: submission.name,
            email: submission.email,
            follow_up_requested: submission.follow_up_requested,
            updates_opt_in: submission.updates_opt_in,
            question: submission.question,
        }
    }

    pub fn question_or_placeholder(&self) -> &str {
        self.question.as_deref().unwrap_or(NOT_PROVIDED)
    }

    /// Human-readable block written to the log.
    pub fn summary_lines(&self) -> Vec<String> {
        vec![
            format!("--- New Contact Request ({}) ---", self.timestamp),
            format!("Name: {}, Email: {}", self.name, self.email),
            format!(
                "Follow-up: {}, Opt-in: {}",
                self.follow_up_requested, self.updates_opt_in
            ),
            format!("Question: {}", self.question_or_placeholder()),
            "-".repeat(55),
        ]
    }
}

/// Receives accepted contact records.
pub trait ContactSink {
    fn record(&mut self, record: &ContactRecord) -> anyhow::Result<()>;
}

impl ContactSink for Vec<ContactRecord> {
    fn record(&mut self, record: &ContactRecord) -> anyhow::Result<()> {
        self.push(record.clone());
        Ok(())
    }
}

/// Default sink: logs every record through `tracing` and, when a path is set,
/// appends it as one JSON line.
pub struct ContactLogger {
    writer: Option<BufWriter<File>>,
    pub path: Option<PathBuf>,
}

impl ContactLogger {
    /// Open (or create) the JSONL file at `path`, creating parent directories.
    pub fn new(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::tracing_only());
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("failed to open contact log {}", path.display()))?;
        Ok(Self {
            writer: Some(BufWriter::new(file)),
            path: Some(path.to_path_buf()),
        })
    }

    pub fn tracing_only() -> Self {
        Self {
            writer: None,
            path: None,
        }
    }
}

impl ContactSink for ContactLogger {
    fn record(&mut self, record: &ContactRecord) -> anyhow::Result<()> {
        tracing::info!(
            name = %record.name,
            email = %record.email,
            follow_up = record.follow_up_requested,
            opt_in = record.updates_opt_in,
            "\n{}",
            record.summary_lines().join("\n")
        );

        if let Some(writer) = self.writer.as_mut() {
            let line = serde_json::to_string(record)?;
            writeln!(writer, "{}", line)?;
            writer.flush()?;
        }
        Ok(())
    }
}
