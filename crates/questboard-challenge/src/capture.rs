//! Freehand stroke capture.
//!
//! Draws the player's pointer movement into the surface as a chain of
//! round-capped ink segments. The only state is the last recorded
//! point; it is owned here and scoped to one session, never process-wide.
//! Coordinate mapping from device space to surface-local space is the
//! caller's job; out-of-bounds points are drawn and clip naturally.

use crate::shape::ShapeKind;
use crate::surface::Surface;
use crate::types::{ChallengeConfig, Point};

/// Incremental line-segment renderer for one pen-down/pen-up sub-path.
#[derive(Debug, Default)]
pub struct StrokeCapture {
    last_point: Option<Point>,
}

impl StrokeCapture {
    /// Create an inactive capture with no recorded point.
    #[must_use]
    pub const fn new() -> Self {
        Self { last_point: None }
    }

    /// Whether a pointer is currently down (a sub-path is open).
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.last_point.is_some()
    }

    /// Pointer down: record the starting point. Draws nothing.
    pub const fn pointer_down(&mut self, p: Point) {
        self.last_point = Some(p);
    }

    /// Pointer move: draw an ink segment from the last recorded point
    /// to `p`, then advance the cursor. No-op when the pointer is not
    /// down.
    pub fn pointer_move(
        &mut self,
        surface: &mut Surface,
        kind: ShapeKind,
        config: &ChallengeConfig,
        p: Point,
    ) {
        if let Some(last) = self.last_point {
            surface.stroke_segment(last, p, kind.ink(), config.ink_stroke_width);
            self.last_point = Some(p);
        }
    }

    /// Pointer up or leave: end the sub-path. The surface is untouched.
    pub const fn pointer_up(&mut self) {
        self.last_point = None;
    }
}
