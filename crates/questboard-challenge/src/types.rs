//! Shared types for the challenge evaluator.

use serde::{Deserialize, Serialize};

use crate::quest::QuestKind;

/// A 2D point in surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal position (pixels from left edge).
    pub x: f64,
    /// Vertical position (pixels from top edge).
    pub y: f64,
}

impl Point {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Round both coordinates to the nearest integer pixel.
    #[must_use]
    pub fn round_to_grid(self) -> GridPoint {
        #[allow(clippy::cast_possible_truncation)]
        GridPoint {
            x: self.x.round() as i32,
            y: self.y.round() as i32,
        }
    }
}

/// An integer pixel coordinate, the scorer's sampling domain.
///
/// Signed so that tolerance-disc offsets near the surface edge can go
/// negative before the bounds check rejects them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridPoint {
    /// Horizontal pixel index.
    pub x: i32,
    /// Vertical pixel index.
    pub y: i32,
}

/// A sequence of connected points forming a path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline(Vec<Point>);

impl Polyline {
    /// Create a new polyline from a vector of points.
    #[must_use]
    pub const fn new(points: Vec<Point>) -> Self {
        Self(points)
    }

    /// Returns `true` if the polyline has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of points in the polyline.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns a slice of all points.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.0
    }
}

/// Surface dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Dimensions {
    /// Geometric center of the surface.
    #[must_use]
    pub fn center(self) -> Point {
        Point::new(f64::from(self.width) / 2.0, f64::from(self.height) / 2.0)
    }
}

/// Configuration for one challenge attempt.
///
/// The same geometry parameters are consumed by the reference renderer
/// and the scorer; a session holds exactly one config so the two can
/// never diverge within an attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChallengeConfig {
    /// Drawing surface size in pixels.
    pub surface: Dimensions,

    /// Stroke width of the black reference outline.
    pub reference_stroke_width: f64,

    /// Stroke width of the player's ink strokes.
    ///
    /// Wider than the reference stroke so an exact trace covers the
    /// full tolerance disc around every sampled outline point.
    pub ink_stroke_width: f64,

    /// Radius of the tolerance disc expanded around each sampled
    /// outline point during scoring.
    pub tolerance_radius: i32,

    /// Countdown duration in seconds for the capturing phase.
    pub countdown_seconds: u32,

    /// Minimum percentage for a passing result. Quests may override
    /// this per attempt.
    pub pass_threshold: f64,
}

impl ChallengeConfig {
    /// Default surface edge length in pixels (square surface).
    pub const DEFAULT_SURFACE_SIZE: u32 = 300;
    /// Default reference outline stroke width.
    pub const DEFAULT_REFERENCE_STROKE_WIDTH: f64 = 10.0;
    /// Default ink stroke width.
    pub const DEFAULT_INK_STROKE_WIDTH: f64 = 24.0;
    /// Default tolerance disc radius.
    pub const DEFAULT_TOLERANCE_RADIUS: i32 = 10;
    /// Default countdown duration in seconds.
    pub const DEFAULT_COUNTDOWN_SECONDS: u32 = 20;
    /// Default pass threshold percentage.
    pub const DEFAULT_PASS_THRESHOLD: f64 = 70.0;
}

impl Default for ChallengeConfig {
    fn default() -> Self {
        Self {
            surface: Dimensions {
                width: Self::DEFAULT_SURFACE_SIZE,
                height: Self::DEFAULT_SURFACE_SIZE,
            },
            reference_stroke_width: Self::DEFAULT_REFERENCE_STROKE_WIDTH,
            ink_stroke_width: Self::DEFAULT_INK_STROKE_WIDTH,
            tolerance_radius: Self::DEFAULT_TOLERANCE_RADIUS,
            countdown_seconds: Self::DEFAULT_COUNTDOWN_SECONDS,
            pass_threshold: Self::DEFAULT_PASS_THRESHOLD,
        }
    }
}

/// Outcome of one scored challenge attempt.
///
/// Created once when a session transitions into `Scored`; never
/// mutated afterward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChallengeResult {
    /// Trace accuracy in `[0, 100]`.
    pub percentage: f64,
    /// Whether `percentage` met the attempt's pass threshold.
    pub passed: bool,
}

/// Errors that can occur while running a challenge.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChallengeError {
    /// The raster surface could not be created or is not mounted.
    #[error("drawing surface is unavailable")]
    SurfaceUnavailable,

    /// A quest of a non-tracing kind was used to arm a session.
    #[error("quest kind {0:?} is not an outline-tracing challenge")]
    NotATraceChallenge(QuestKind),
}
