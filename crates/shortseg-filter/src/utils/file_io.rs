//! File I/O for the segment filter
//!
//! Derives the output file name from the input and runs the streaming
//! filter between two files with buffered readers and writers.

use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter};
use std::path::{Path, PathBuf};
use std::time::Instant;

use shortseg_core::{Error, Result};

use crate::gcode::{filter_stream, FilterOptions, FilterReport};

/// Suffix appended to the input file stem
pub const DEFAULT_OUTPUT_SUFFIX: &str = "-fixed";

/// Extension used when the input file has none
pub const DEFAULT_EXTENSION: &str = ".gcode";

/// Buffer size for reading and writing (256 KB)
const IO_BUFFER_SIZE: usize = 256 * 1024;

/// Build the output path `<dir>/<stem><suffix><ext>`
///
/// `<ext>` is the input's own extension, or `default_extension` when the
/// input has none. The leading dot of `default_extension` is optional.
///
/// ```
/// use std::path::Path;
/// use shortseg_filter::derive_output_path;
///
/// let out = derive_output_path(Path::new("prints/benchy.gcode"), "-fixed", ".gcode");
/// assert_eq!(out, Path::new("prints/benchy-fixed.gcode"));
/// ```
pub fn derive_output_path(input: &Path, suffix: &str, default_extension: &str) -> PathBuf {
    let mut name = input.file_stem().map(|s| s.to_os_string()).unwrap_or_default();
    name.push(suffix);

    match input.extension() {
        Some(ext) => {
            name.push(".");
            name.push(ext);
        }
        None if default_extension.is_empty() => {}
        None => {
            if !default_extension.starts_with('.') {
                name.push(".");
            }
            name.push(default_extension);
        }
    }

    input.with_file_name(name)
}

/// Filter `input` into `output`
///
/// The input may be any readable path, named pipes included. Both files are
/// closed on every exit path. On error a partially written output file may
/// remain.
///
/// # Errors
/// Returns [`Error::Io`] if the input cannot be read, the output cannot be
/// written, or both paths name the same file. Returns [`Error::Gcode`] for a
/// malformed coordinate token.
pub fn filter_file(input: &Path, output: &Path, options: FilterOptions) -> Result<FilterReport> {
    if same_file(input, output)? {
        return Err(Error::Io(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("Output would overwrite the input file: {}", output.display()),
        )));
    }

    let start = Instant::now();
    let reader = BufReader::with_capacity(IO_BUFFER_SIZE, File::open(input)?);
    let writer = BufWriter::with_capacity(IO_BUFFER_SIZE, File::create(output)?);

    tracing::info!(
        input = %input.display(),
        output = %output.display(),
        threshold = %options.threshold,
        tracking_mode = %options.tracking_mode,
        "Filtering short segments"
    );

    let report = filter_stream(reader, writer, options)?;

    tracing::info!(
        lines = report.lines,
        short_segments = report.short_segments,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Wrote {}",
        output.display()
    );

    Ok(report)
}

fn same_file(input: &Path, output: &Path) -> Result<bool> {
    if !output.exists() {
        return Ok(false);
    }
    Ok(fs::canonicalize(input)? == fs::canonicalize(output)?)
}
