//! Corpus traversal and file ingestion
//!
//! Walks a root path, feeding every file into one shared
//! [`FrequencyAccumulator`]. Files are processed one at a time in the order
//! the walk yields them (sorted by name within each directory).
//!
//! A traversal failure aborts the run. A file that cannot be read is
//! reported, skipped, and leaves the accumulator untouched.

use crate::config::CorpusConfig;
use crate::keyboard::FrequencyAccumulator;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Error type for corpus operations
#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    /// Walking the corpus root failed
    #[error("failed to walk corpus: {0}")]
    Walk(#[from] walkdir::Error),
    /// A single file could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A file that was skipped and why
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

/// Outcome of ingesting a corpus
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusSummary {
    /// Files found under the root
    pub files_found: usize,
    /// Files read and counted
    pub files_processed: usize,
    /// Files that failed to read
    pub skipped: Vec<SkippedFile>,
    /// Bytes read across processed files
    pub bytes_read: u64,
}

impl CorpusSummary {
    pub fn files_failed(&self) -> usize {
        self.skipped.len()
    }
}

/// Every non-directory entry under `root`.
///
/// A root that is a file yields just that file. Symlinks to directories are
/// never listed: they are descended into when `follow_links` is set and
/// skipped otherwise. Other symlinks, dangling ones included, count as files.
/// Any walk error is returned.
pub fn collect_files(root: &Path, follow_links: bool) -> Result<Vec<PathBuf>, CorpusError> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root)
        .follow_links(follow_links)
        .sort_by_file_name()
    {
        let entry = entry?;
        if entry.file_type().is_dir() {
            continue;
        }
        if entry.path_is_symlink() && entry.path().is_dir() {
            debug!("Not following directory link {}", entry.path().display());
            continue;
        }
        files.push(entry.into_path());
    }
    Ok(files)
}

/// Reads `path` and feeds its characters into `acc`.
///
/// Invalid UTF-8 is decoded lossily. Returns the number of bytes read.
pub fn ingest_file(path: &Path, acc: &mut FrequencyAccumulator) -> Result<u64, CorpusError> {
    let bytes = fs::read(path).map_err(|source| CorpusError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8_lossy(&bytes);
    acc.ingest_stream(text.chars());
    Ok(bytes.len() as u64)
}

/// Walks `root` and ingests every file into `acc`.
///
/// Only a traversal failure is returned as an error; unreadable files are
/// logged and listed in the summary.
pub fn ingest_corpus(
    root: &Path,
    acc: &mut FrequencyAccumulator,
    options: &CorpusConfig,
) -> Result<CorpusSummary, CorpusError> {
    let files = collect_files(root, options.follow_links)?;
    info!("Found {} files under {}", files.len(), root.display());

    let mut summary = CorpusSummary {
        files_found: files.len(),
        ..Default::default()
    };

    for path in files {
        if options.isolate_files {
            acc.reset_boundary();
        }
        match ingest_file(&path, acc) {
            Ok(bytes) => {
                debug!("Ingested {} ({} bytes)", path.display(), bytes);
                summary.files_processed += 1;
                summary.bytes_read += bytes;
            }
            Err(e) => {
                warn!("Skipping file: {}", e);
                summary.skipped.push(SkippedFile {
                    path,
                    reason: e.to_string(),
                });
            }
        }
    }

    info!(
        "Processed {} of {} files ({} skipped)",
        summary.files_processed,
        summary.files_found,
        summary.files_failed()
    );
    Ok(summary)
}
