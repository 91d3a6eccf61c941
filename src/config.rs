//! Configuration management for keyfreq
//!
//! Settings are read from a platform-specific TOML file when present and can
//! be overridden from the command line.
//!
//! ## Config File Locations
//!
//! | Platform | Path |
//! |----------|------|
//! | Linux | `~/.config/keyfreq/config.toml` |
//! | macOS | `~/Library/Application Support/keyfreq/config.toml` |
//! | Windows | `%APPDATA%\keyfreq\config.toml` |
//!
//! ## Example
//!
//! ```no_run
//! use keyfreq::Config;
//!
//! // Load existing config or use defaults
//! let mut config = Config::load().expect("Failed to load config");
//!
//! // Keep each file's digraphs to itself
//! config.corpus.isolate_files = true;
//!
//! // Save to disk
//! config.save().expect("Failed to save config");
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Error type for configuration operations
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to determine config directory
    #[error("Could not determine config directory")]
    NoConfigDir,
    /// IO error reading or writing config file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// Failed to parse config file
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Failed to serialize config
    #[error("Serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Returns the path to the config file.
///
/// Only resolves the path; nothing is created on disk.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
    Ok(config_dir.join("keyfreq").join("config.toml"))
}

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    /// Corpus traversal settings
    #[serde(default)]
    pub corpus: CorpusConfig,
    /// Output file settings
    #[serde(default)]
    pub output: OutputConfig,
}

/// Corpus traversal configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CorpusConfig {
    /// Reset the previous keystroke before each file, so no digraph
    /// spans two files
    #[serde(default)]
    pub isolate_files: bool,
    /// Follow symbolic links while walking the corpus root
    #[serde(default)]
    pub follow_links: bool,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
    /// Single keystroke counts
    pub chars_file: PathBuf,
    /// Digraph counts
    pub digraphs_file: PathBuf,
    /// Optional JSON run summary
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary_file: Option<PathBuf>,
    /// Entries per table listed in the summary
    #[serde(default = "default_summary_top")]
    pub summary_top: usize,
}

fn default_summary_top() -> usize {
    20
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            chars_file: PathBuf::from("chars.txt"),
            digraphs_file: PathBuf::from("digraphs.txt"),
            summary_file: None,
            summary_top: default_summary_top(),
        }
    }
}

impl Config {
    /// Load configuration from the default config file.
    ///
    /// Returns the default configuration if the file doesn't exist.
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_or_default(&config_path()?)
    }

    /// Load configuration from `path`, or the defaults if it doesn't exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(path)
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save configuration to the default config file.
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = config_path()?;
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        self.save_to(&path)
    }

    /// Save configuration to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn temp_config_path(name: &str) -> PathBuf {
        env::temp_dir().join(format!("keyfreq-{}-{}.toml", name, std::process::id()))
    }

    #[test]
    fn config_default_values() {
        let config = Config::default();
        assert!(!config.corpus.isolate_files);
        assert!(!config.corpus.follow_links);
        assert_eq!(config.output.chars_file, PathBuf::from("chars.txt"));
        assert_eq!(config.output.digraphs_file, PathBuf::from("digraphs.txt"));
        assert_eq!(config.output.summary_file, None);
        assert_eq!(config.output.summary_top, 20);
    }

    #[test]
    fn config_save_and_load_roundtrip() {
        let path = temp_config_path("roundtrip");

        let mut config = Config::default();
        config.corpus.isolate_files = true;
        config.output.summary_file = Some(PathBuf::from("run.json"));

        config.save_to(&path).expect("Failed to save config");
        let loaded = Config::load_from(&path).expect("Failed to load config");

        assert_eq!(loaded, config);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn config_load_missing_file_is_io_error() {
        let path = PathBuf::from("/nonexistent/path/config.toml");
        let result = Config::load_from(&path);
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn config_load_invalid_toml_is_parse_error() {
        let path = temp_config_path("invalid");
        fs::write(&path, "[corpus\nisolate_files = ").expect("Failed to write");
        let result = Config::load_from(&path);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn config_load_or_default_missing_file() {
        let path = temp_config_path("absent");
        let _ = fs::remove_file(&path);
        let config = Config::load_or_default(&path).expect("Failed to load");
        assert_eq!(config, Config::default());
        assert!(!path.exists());
    }

    #[test]
    fn config_load_or_default_reports_malformed_file() {
        let path = temp_config_path("malformed");
        fs::write(&path, "[output]\nchars_file = \"mine.txt\"\ndigraphs_file = \n")
            .expect("Failed to write");
        let result = Config::load_or_default(&path);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn config_path_points_into_app_dir() {
        if let Ok(path) = config_path() {
            assert!(path.ends_with("keyfreq/config.toml"));
        }
    }

    #[test]
    fn config_serializes_to_toml() {
        let config = Config::default();
        let toml_str = toml::to_string_pretty(&config).expect("Failed to serialize");

        assert!(toml_str.contains("[corpus]"));
        assert!(toml_str.contains("[output]"));
        assert!(toml_str.contains("isolate_files = false"));
        assert!(toml_str.contains("chars_file = \"chars.txt\""));
        assert!(!toml_str.contains("summary_file"));
    }

    #[test]
    fn config_deserializes_from_toml() {
        let toml_str = r#"
[corpus]
isolate_files = true
follow_links = true

[output]
chars_file = "out/c.txt"
digraphs_file = "out/d.txt"
summary_file = "out/summary.json"
summary_top = 5
"#;

        let config: Config = toml::from_str(toml_str).expect("Failed to deserialize");

        assert!(config.corpus.isolate_files);
        assert!(config.corpus.follow_links);
        assert_eq!(config.output.chars_file, PathBuf::from("out/c.txt"));
        assert_eq!(config.output.digraphs_file, PathBuf::from("out/d.txt"));
        assert_eq!(
            config.output.summary_file,
            Some(PathBuf::from("out/summary.json"))
        );
        assert_eq!(config.output.summary_top, 5);
    }

    #[test]
    fn config_partial_toml_uses_defaults() {
        let config: Config = toml::from_str("[corpus]\nisolate_files = true\n")
            .expect("Failed to deserialize");
        assert!(config.corpus.isolate_files);
        assert_eq!(config.output, OutputConfig::default());
    }

    #[test]
    fn config_error_display() {
        let err = ConfigError::NoConfigDir;
        assert_eq!(err.to_string(), "Could not determine config directory");

        let io_err = ConfigError::Io(io::Error::new(io::ErrorKind::NotFound, "file not found"));
        assert!(io_err.to_string().contains("IO error"));
    }
}
