//! Planar position types
//!
//! Only the XY plane matters for segment length; Z and extrusion are ignored.

use std::fmt;

/// Position in the XY plane
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Position {
    /// X-axis position
    pub x: f64,
    /// Y-axis position
    pub y: f64,
}

impl Position {
    /// Create a new position
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The machine origin
    pub fn origin() -> Self {
        Self::default()
    }

    /// Euclidean distance to another position, `sqrt(dx² + dy²)`
    ///
    /// Must stay the plain sum of squares. `f64::hypot` rounds differently in
    /// the last bit and flips moves lying exactly on the threshold.
    pub fn distance_to(&self, other: &Position) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Overwrite the axes that are set in `partial`, keeping the others
    pub fn apply(&mut self, partial: &PartialPosition) {
        if let Some(x) = partial.x {
            self.x = x;
        }
        if let Some(y) = partial.y {
            self.y = y;
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "X:{:.3} Y:{:.3}", self.x, self.y)
    }
}

/// Axes named by a single move. `None` means the line did not mention the axis.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PartialPosition {
    /// X-axis position, if present
    pub x: Option<f64>,
    /// Y-axis position, if present
    pub y: Option<f64>,
}

impl PartialPosition {
    /// Create a new empty partial position
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve to a full position, treating absent axes as 0.0
    pub fn or_zero(&self) -> Position {
        Position::new(self.x.unwrap_or(0.0), self.y.unwrap_or(0.0))
    }
}
