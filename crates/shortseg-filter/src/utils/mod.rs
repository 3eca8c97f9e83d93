//! File helpers around the segment filter

pub mod file_io;

pub use file_io::*;
