//! questboard-challenge: Pure outline-tracing challenge evaluator (sans-IO).
//!
//! Implements the drawing mini-challenge used by the quest board:
//! a reference outline (heart, circle, or star) is stroked onto a
//! raster surface, the player traces it freehand, and a pixel-sampling
//! tolerance scorer grades the trace as a 0-100% accuracy value that
//! gates pass/fail reward logic.
//!
//! This crate has **no I/O dependencies** -- no timers, no pointer
//! devices, no filesystem. The countdown is an explicit tick protocol
//! and pointer input arrives as plain surface-local coordinates. All
//! transport and presentation live in the caller.

pub mod capture;
pub mod quest;
pub mod renderer;
pub mod scorer;
pub mod session;
pub mod shape;
pub mod surface;
pub mod types;

pub use capture::StrokeCapture;
pub use quest::{QuestKind, QuestRecord};
pub use renderer::render_reference;
pub use scorer::{ScoreBreakdown, score, score_breakdown};
pub use session::{ChallengeSession, SessionPhase};
pub use shape::ShapeKind;
pub use surface::Surface;
pub use types::{
    ChallengeConfig, ChallengeError, ChallengeResult, Dimensions, GridPoint, Point, Polyline,
};
