//! Line classification for linear moves

use shortseg_core::{GcodeError, PartialPosition, Position};

/// Command word of a controlled linear move
pub const LINEAR_MOVE: &str = "G1";

/// Minimum number of whitespace separated tokens for a line to be read as a move
pub const MIN_MOVE_TOKENS: usize = 3;

/// Result of classifying one line
///
/// Built per line and consumed immediately by the tracker.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ParsedMove {
    /// The line is a `G1` move whose X and Y are both non-zero
    pub qualifies: bool,
    /// Extracted X, 0.0 when absent
    pub x: f64,
    /// Extracted Y, 0.0 when absent
    pub y: f64,
    /// Axes actually written on the line. `None` when the line is not a
    /// `G1` move with enough tokens and no extraction was attempted.
    pub axes: Option<PartialPosition>,
}

impl ParsedMove {
    /// Extracted coordinates with 0.0 defaults
    pub fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }
}

/// Classify a line and extract its XY coordinates
///
/// Only lines whose first token is exactly `G1` and that carry at least
/// three tokens are scanned. `X` and `Y` tokens are parsed (last one wins),
/// everything else is ignored. A move only qualifies when both coordinates
/// are non-zero, so an absent axis and an explicit zero behave the same.
///
/// # Errors
/// Returns [`GcodeError::MalformedNumericToken`] when an `X` or `Y` token
/// has an empty or non-numeric remainder.
pub fn classify(line: &str) -> Result<ParsedMove, GcodeError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();

    if tokens.len() < MIN_MOVE_TOKENS || tokens[0] != LINEAR_MOVE {
        return Ok(ParsedMove::default());
    }

    let mut axes = PartialPosition::new();
    for token in &tokens[1..] {
        if let Some(value) = token.strip_prefix('X') {
            axes.x = Some(parse_coordinate(token, value)?);
        } else if let Some(value) = token.strip_prefix('Y') {
            axes.y = Some(parse_coordinate(token, value)?);
        }
    }

    let Position { x, y } = axes.or_zero();

    Ok(ParsedMove {
        qualifies: x != 0.0 && y != 0.0,
        x,
        y,
        axes: Some(axes),
    })
}

fn parse_coordinate(token: &str, value: &str) -> Result<f64, GcodeError> {
    value
        .parse::<f64>()
        .map_err(|e| GcodeError::MalformedNumericToken {
            token: token.to_string(),
            reason: e.to_string(),
        })
}
