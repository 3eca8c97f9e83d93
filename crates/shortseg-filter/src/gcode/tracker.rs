//! Position tracking and segment length evaluation

use shortseg_core::{Position, Threshold, TrackingMode};

use super::ParsedMove;

/// Outcome of measuring one qualifying move
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    /// Planar distance from the tracked position
    pub distance: f64,
    /// `distance` is strictly below the threshold
    pub is_short: bool,
}

/// Last known XY position for one filtering pass
///
/// Starts at the origin. Each pass owns its own tracker.
#[derive(Debug, Clone, Default)]
pub struct TrackerState {
    position: Position,
    mode: TrackingMode,
}

impl TrackerState {
    /// Create a tracker at the origin
    pub fn new(mode: TrackingMode) -> Self {
        Self {
            position: Position::origin(),
            mode,
        }
    }

    /// Currently tracked position
    pub fn position(&self) -> Position {
        self.position
    }

    /// Distance from the tracked position to `target`
    pub fn distance_to(&self, target: Position) -> f64 {
        self.position.distance_to(&target)
    }

    /// Measure a move against the threshold. Does not update the position.
    pub fn evaluate(&self, parsed: &ParsedMove, threshold: Threshold) -> Evaluation {
        let distance = self.distance_to(parsed.position());
        Evaluation {
            distance,
            is_short: threshold.is_short(distance),
        }
    }

    /// Advance the tracked position past a line
    ///
    /// In compatible mode the position always becomes the line's extracted
    /// coordinates, including the 0.0 defaults of lines that were never
    /// scanned. In continuous mode only scanned `G1` lines move the
    /// position, and only on the axes they name.
    pub fn update(&mut self, parsed: &ParsedMove) {
        match self.mode {
            TrackingMode::Compatible => self.position = parsed.position(),
            TrackingMode::Continuous => {
                if let Some(axes) = &parsed.axes {
                    self.position.apply(axes);
                }
            }
        }
    }
}
