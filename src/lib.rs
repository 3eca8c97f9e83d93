//! # shortseg
//!
//! Cleans 3D-printer G-code by commenting out `G1` moves that are too short
//! to be worth executing. Tiny segments emitted by slicers make the print
//! head stutter; removing them smooths the motion.
//!
//! ## Architecture
//!
//! shortseg is organized as a workspace with multiple crates:
//!
//! 1. **shortseg-core** - Errors, positions, threshold and tracking mode
//! 2. **shortseg-filter** - Line classifier, position tracker, streaming driver
//! 3. **shortseg-settings** - Settings file loading and validation
//! 4. **shortseg** - The command-line binary

pub mod cli;

pub use cli::{run, Cli, RunSummary};

pub use shortseg_core::{
    ConfigError, Error, GcodeError, PartialPosition, Position, Result, Threshold, TrackingMode,
};

pub use shortseg_filter::{
    classify, derive_output_path, filter_file, filter_lines, filter_str, filter_stream,
    FilterOptions, FilterReport, ParsedMove, SegmentFilter, TrackerState,
};

pub use shortseg_settings::{FilterSettings, SettingsError};

/// Initialize logging
///
/// Logs go to stderr so stdout only carries the run summary. The level
/// starts at WARN and each `-v` raises it one step; `RUST_LOG` directives
/// are honoured on top.
pub fn init_logging(verbosity: u8) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let level = match verbosity {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    let env_filter = EnvFilter::from_default_env().add_directive(level.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(verbosity >= 2);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
