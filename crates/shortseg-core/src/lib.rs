//! # shortseg Core
//!
//! Core types shared by the shortseg crates: error types, planar positions,
//! the segment threshold and the position tracking mode.

pub mod data;
pub mod error;
pub mod modes;
pub mod threshold;

pub use data::{PartialPosition, Position};
pub use error::{ConfigError, Error, GcodeError, Result};
pub use modes::TrackingMode;
pub use threshold::{Threshold, DEFAULT_THRESHOLD};
