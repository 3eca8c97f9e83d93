//! # shortseg Filter
//!
//! Removes very short `G1` segments from slicer output by commenting them
//! out. Includes the line classifier, the position tracker, the streaming
//! driver and file helpers.

pub mod gcode;
pub mod utils;

pub use gcode::{
    classify, filter_lines, filter_str, filter_stream, Evaluation, FilterOptions, FilterReport,
    ParsedMove, SegmentFilter, TrackerState, COMMENT_MARKER, LINEAR_MOVE, MIN_MOVE_TOKENS,
};

pub use utils::{derive_output_path, filter_file, DEFAULT_EXTENSION, DEFAULT_OUTPUT_SUFFIX};
