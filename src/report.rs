//! Frequency table output and run reports
//!
//! The two tables are written as plain text, one `<key> <count>` line per
//! entry, most frequent first. A JSON summary of the run can be exported
//! alongside them.

use crate::config::OutputConfig;
use crate::corpus::{CorpusSummary, SkippedFile};
use crate::keyboard::{FrequencyAccumulator, FrequencyTable, TableEntry};
use chrono::{DateTime, Utc};
use log::{error, info};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Error type for report output
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// Creating or writing an output file failed
    #[error("failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Serializing the summary failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// One or more table outputs failed
    #[error("{} output file(s) could not be written: {}", .0.len(), .0.join("; "))]
    Sinks(Vec<String>),
}

/// Renders a table as `<key> <count>` lines, most frequent first.
pub fn format_table(table: &FrequencyTable) -> String {
    let mut out = String::new();
    for entry in table.sorted() {
        out.push_str(&format!("{} {}\n", entry.key, entry.count));
    }
    out
}

/// Writes a table to `path`, replacing any existing file.
pub fn write_table(path: &Path, table: &FrequencyTable) -> Result<(), ReportError> {
    let io_err = |source: io::Error| ReportError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    for entry in table.sorted() {
        writeln!(writer, "{} {}", entry.key, entry.count).map_err(io_err)?;
    }
    writer.flush().map_err(io_err)?;
    Ok(())
}

/// Writes both tables to their configured files.
///
/// Each file is attempted even if the other fails; every failure is logged
/// and the collected failures are returned together.
pub fn write_outputs(acc: &FrequencyAccumulator, output: &OutputConfig) -> Result<(), ReportError> {
    let sinks = [
        (&output.chars_file, acc.singles()),
        (&output.digraphs_file, acc.digraphs()),
    ];

    let mut failures = Vec::new();
    for (path, table) in sinks {
        match write_table(path, table) {
            Ok(()) => info!("Wrote {} entries to {}", table.len(), path.display()),
            Err(e) => {
                error!("{}", e);
                failures.push(e.to_string());
            }
        }
    }

    if failures.is_empty() {
        Ok(())
    } else {
        Err(ReportError::Sinks(failures))
    }
}

/// Complete run report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrequencyReport {
    /// Report metadata
    pub metadata: ReportMetadata,
    /// Summary statistics
    pub summary: RunSummary,
    /// Most frequent single keystrokes
    pub top_chars: Vec<TableEntry>,
    /// Most frequent digraphs
    pub top_digraphs: Vec<TableEntry>,
    /// Files that could not be read
    pub skipped: Vec<SkippedFile>,
}

/// Report metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Report generation timestamp
    pub generated_at: String,
    /// Application version
    pub version: String,
    /// Corpus root
    pub root: PathBuf,
}

/// Run summary statistics
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RunSummary {
    pub files_found: usize,
    pub files_processed: usize,
    pub files_failed: usize,
    pub bytes_read: u64,
    /// Non-control characters counted
    pub chars_counted: u64,
    /// Characters typed through a dead key
    pub dead_keys: u64,
    /// Control characters skipped
    pub control_skipped: u64,
    /// Total keystrokes (sum of single counts)
    pub keystrokes: u64,
    /// Total digraph occurrences
    pub digraphs: u64,
    pub distinct_chars: usize,
    pub distinct_digraphs: usize,
}

impl FrequencyReport {
    /// Build a report from a finished run
    pub fn new(
        root: &Path,
        corpus: &CorpusSummary,
        acc: &FrequencyAccumulator,
        top: usize,
    ) -> Self {
        let now: DateTime<Utc> = Utc::now();

        Self {
            metadata: ReportMetadata {
                generated_at: now.to_rfc3339(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                root: root.to_path_buf(),
            },
            summary: RunSummary {
                files_found: corpus.files_found,
                files_processed: corpus.files_processed,
                files_failed: corpus.files_failed(),
                bytes_read: corpus.bytes_read,
                chars_counted: acc.chars_counted(),
                dead_keys: acc.dead_keys(),
                control_skipped: acc.control_skipped(),
                keystrokes: acc.singles().total(),
                digraphs: acc.digraphs().total(),
                distinct_chars: acc.singles().len(),
                distinct_digraphs: acc.digraphs().len(),
            },
            top_chars: acc.singles().top(top),
            top_digraphs: acc.digraphs().top(top),
            skipped: corpus.skipped.clone(),
        }
    }

    /// Export report to JSON file
    pub fn export_json(&self, path: &Path) -> Result<(), ReportError> {
        let json = self.to_json()?;
        let mut file = File::create(path).map_err(|source| ReportError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        file.write_all(json.as_bytes())
            .map_err(|source| ReportError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(())
    }

    /// Export report to JSON string
    pub fn to_json(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
