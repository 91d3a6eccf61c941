//! Shared test utilities for the keyboard modules
//!
//! Provides helpers for building accumulators and checking table contents.

use super::{FrequencyAccumulator, FrequencyTable};
use std::fs;
use std::path::{Path, PathBuf};

/// Runs `text` through a fresh accumulator as a single stream.
pub fn accumulate(text: &str) -> FrequencyAccumulator {
    let mut acc = FrequencyAccumulator::new();
    acc.ingest_str(text);
    acc
}

/// Asserts that `table` holds exactly `expected`, no more and no less.
pub fn assert_table(table: &FrequencyTable, expected: &[(&str, u64)]) {
    for (key, count) in expected {
        assert_eq!(table.get(key), *count, "count for {:?}", key);
    }
    assert_eq!(
        table.len(),
        expected.len(),
        "unexpected keys in {:?}",
        table.as_map()
    );
}

/// Creates an empty scratch directory unique to this process and `name`.
pub fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("keyfreq-{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).expect("Failed to create scratch dir");
    dir
}

/// Writes `contents` to `dir/rel`, creating parent directories.
pub fn write_file(dir: &Path, rel: &str, contents: &[u8]) -> PathBuf {
    let path = dir.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent dir");
    }
    fs::write(&path, contents).expect("Failed to write fixture");
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulate_counts_text() {
        let acc = accumulate("aa");
        assert_eq!(acc.singles().get("a"), 2);
    }

    #[test]
    fn scratch_dir_starts_empty() {
        let dir = scratch_dir("helpers");
        write_file(&dir, "nested/file.txt", b"x");
        let again = scratch_dir("helpers");
        assert_eq!(fs::read_dir(&again).unwrap().count(), 0);
        let _ = fs::remove_dir_all(&again);
    }
}
