//! G-Code segment filtering
//!
//! This module provides:
//! - Line classification for `G1` linear moves
//! - Position tracking and segment length evaluation
//! - The streaming driver that comments out short segments

pub mod classifier;
pub mod driver;
pub mod tracker;

pub use classifier::*;
pub use driver::*;
pub use tracker::*;
