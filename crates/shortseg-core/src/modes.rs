//! Position tracking modes
//!
//! Selects how the tracked XY position is carried from one line to the next.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How the tracked position is updated between lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackingMode {
    /// Every line overwrites the position with its extracted coordinates,
    /// using 0.0 for absent axes and for lines that are not `G1` moves.
    /// Output matches the historical cleaner byte for byte.
    Compatible,
    /// Only `G1` moves update the position, and only on the axes they name.
    Continuous,
}

impl Default for TrackingMode {
    fn default() -> Self {
        Self::Compatible
    }
}

impl fmt::Display for TrackingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Compatible => write!(f, "compatible"),
            Self::Continuous => write!(f, "continuous"),
        }
    }
}
