//! keyfreq - keystroke and digraph frequency counter
//!
//! Walks a corpus directory and writes `chars.txt` and `digraphs.txt`.

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::info;
use std::path::PathBuf;

use keyfreq::{
    config::{Config, ConfigError},
    corpus::ingest_corpus,
    keyboard::FrequencyAccumulator,
    report::{write_outputs, FrequencyReport},
};

const USAGE: &str = "usage: keyfreq <root> [<ignored> ...]";

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Corpus root, walked recursively
    root: Option<PathBuf>,

    /// Extra paths, accepted and ignored
    #[arg(hide = true)]
    ignored: Vec<PathBuf>,

    /// Config file (defaults to the platform config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Keep digraphs from spanning two files
    #[arg(long)]
    isolate_files: bool,

    /// Follow symbolic links while walking
    #[arg(long)]
    follow_links: bool,

    /// Output file for single keystroke counts
    #[arg(long, value_name = "FILE")]
    chars_out: Option<PathBuf>,

    /// Output file for digraph counts
    #[arg(long, value_name = "FILE")]
    digraphs_out: Option<PathBuf>,

    /// Write a JSON run summary to FILE
    #[arg(long, value_name = "FILE")]
    summary: Option<PathBuf>,
}

impl Cli {
    /// Command-line flags take precedence over the config file
    fn apply(&self, config: &mut Config) {
        if self.isolate_files {
            config.corpus.isolate_files = true;
        }
        if self.follow_links {
            config.corpus.follow_links = true;
        }
        if let Some(path) = &self.chars_out {
            config.output.chars_file = path.clone();
        }
        if let Some(path) = &self.digraphs_out {
            config.output.digraphs_file = path.clone();
        }
        if let Some(path) = &self.summary {
            config.output.summary_file = Some(path.clone());
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let Some(root) = cli.root.clone() else {
        println!("{}", USAGE);
        return Ok(());
    };
    if !cli.ignored.is_empty() {
        info!("Ignoring {} extra argument(s)", cli.ignored.len());
    }

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => match Config::load() {
            Err(ConfigError::NoConfigDir) => Config::default(),
            other => other.context("loading config from the default location")?,
        },
    };
    cli.apply(&mut config);

    let mut acc = FrequencyAccumulator::new();
    let corpus = ingest_corpus(&root, &mut acc, &config.corpus)
        .with_context(|| format!("walking {}", root.display()))?;

    let outputs = write_outputs(&acc, &config.output);

    if let Some(path) = &config.output.summary_file {
        FrequencyReport::new(&root, &corpus, &acc, config.output.summary_top)
            .export_json(path)
            .context("exporting summary")?;
        info!("Summary written to {}", path.display());
    }

    outputs.context("writing output files")?;

    println!(
        "{} files, {} keystrokes, {} distinct digraphs",
        corpus.files_processed,
        acc.singles().total(),
        acc.digraphs().len()
    );
    if corpus.files_failed() > 0 {
        println!("{} file(s) could not be read", corpus.files_failed());
    }

    Ok(())
}
