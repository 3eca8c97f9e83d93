//! Command-line interface
//!
//! Parses arguments, merges them over the settings file and runs the filter
//! on a single input file.

use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Parser};
use shortseg_core::{Threshold, TrackingMode};
use shortseg_filter::{derive_output_path, filter_file, FilterOptions, FilterReport};
use shortseg_settings::FilterSettings;

const LONG_VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (built ", env!("BUILD_DATE"), ")");

/// Comment out very short G1 segments in sliced G-code
#[derive(Debug, Parser)]
#[command(name = "shortseg", version, long_version = LONG_VERSION, about)]
pub struct Cli {
    /// Path to G-code input file
    #[arg(short, long, value_name = "PATH")]
    pub input: PathBuf,

    /// Minimum move length to keep, default 0.08
    #[arg(short, long, value_name = "FLOAT")]
    pub threshold: Option<Threshold>,

    /// Output file, default <input-stem>-fixed<input-extension>
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Settings file (.toml or .json)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Keep the tracked position across non-G1 lines
    #[arg(long)]
    pub continuous: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Result of one run
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// File the filtered G-code was written to
    pub output: PathBuf,
    /// Counters from the filter pass
    pub report: FilterReport,
}

impl Cli {
    /// Settings file values with command-line overrides applied
    pub fn settings(&self) -> anyhow::Result<FilterSettings> {
        let mut settings = match &self.config {
            Some(path) => FilterSettings::load_from_file(path)
                .with_context(|| format!("Failed to load settings from {}", path.display()))?,
            None => FilterSettings::load_default().context("Failed to load default settings")?,
        };

        if let Some(threshold) = self.threshold {
            settings.threshold = threshold;
        }
        if self.continuous {
            settings.tracking_mode = TrackingMode::Continuous;
        }

        Ok(settings)
    }

    /// Output path, explicit or derived from the input name
    pub fn output_path(&self, settings: &FilterSettings) -> PathBuf {
        self.output.clone().unwrap_or_else(|| {
            derive_output_path(
                &self.input,
                &settings.output_suffix,
                &settings.default_extension,
            )
        })
    }
}

/// Filter the input file named on the command line
pub fn run(cli: &Cli) -> anyhow::Result<RunSummary> {
    let settings = cli.settings()?;
    let output = cli.output_path(&settings);
    let options =
        FilterOptions::new(settings.threshold).with_tracking_mode(settings.tracking_mode);

    let report = filter_file(&cli.input, &output, options)
        .with_context(|| format!("Failed to filter {}", cli.input.display()))?;

    Ok(RunSummary { output, report })
}
