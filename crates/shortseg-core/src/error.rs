//! Error handling for shortseg
//!
//! Provides the error types shared by every layer of the tool:
//! - G-Code errors (malformed coordinate tokens)
//! - Configuration errors (threshold and naming validation)
//! - I/O errors from the input and output files
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// G-Code error type
///
/// Represents errors raised while reading the coordinates of a move.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GcodeError {
    /// A coordinate token whose remainder is not a number, e.g. `X` or `Xabc`.
    /// Raised by the classifier, which has no notion of line numbers.
    #[error("Malformed numeric token '{token}': {reason}")]
    MalformedNumericToken {
        /// The offending token, as written in the file.
        token: String,
        /// Why the remainder could not be parsed.
        reason: String,
    },

    /// Invalid parameter value
    #[error("Invalid parameter '{param}' at line {line_number}: {reason}")]
    InvalidParameter {
        /// The 1-based line number where the invalid parameter was found.
        line_number: u64,
        /// The parameter token.
        param: String,
        /// The reason the parameter is invalid.
        reason: String,
    },
}

impl GcodeError {
    /// Attach a line number to a token-level error.
    pub fn at_line(self, line_number: u64) -> Self {
        match self {
            GcodeError::MalformedNumericToken { token, reason } => GcodeError::InvalidParameter {
                line_number,
                param: token,
                reason,
            },
            other => other,
        }
    }

    /// Line number of the error, when known.
    pub fn line_number(&self) -> Option<u64> {
        match self {
            GcodeError::InvalidParameter { line_number, .. } => Some(*line_number),
            GcodeError::MalformedNumericToken { .. } => None,
        }
    }
}

/// Configuration error type
///
/// Raised before any stream processing begins.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Threshold is negative, NaN or infinite
    #[error("Invalid threshold {value}: must be a finite number >= 0")]
    InvalidThreshold {
        /// The rejected value.
        value: f64,
    },

    /// Threshold text is not a number
    #[error("Threshold '{0}' is not a number")]
    MalformedThreshold(String),

    /// Output suffix cannot be used to build a file name
    #[error("Invalid output suffix: {reason}")]
    InvalidSuffix {
        /// The reason the suffix was rejected.
        reason: String,
    },

    /// Settings file format not recognised
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),
}

/// Main error type for shortseg
///
/// A unified error type that can represent any error from all layers.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// G-Code error
    #[error(transparent)]
    Gcode(#[from] GcodeError),

    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a G-Code error
    pub fn is_gcode_error(&self) -> bool {
        matches!(self, Error::Gcode(_))
    }

    /// Check if this is a configuration error
    pub fn is_config_error(&self) -> bool {
        matches!(self, Error::Config(_))
    }

    /// Check if this is an I/O error
    pub fn is_io_error(&self) -> bool {
        matches!(self, Error::Io(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
