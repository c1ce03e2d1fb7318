//! Challenge session state machine.
//!
//! Sequences one challenge attempt through
//! `Idle -> Armed -> Capturing -> Scored` and owns every resource the
//! attempt touches: the raster surface, the stroke capture cursor, the
//! countdown, and the final result. The caller drives the countdown by
//! invoking [`ChallengeSession::tick`] once per second; ticks arriving
//! in any other phase are no-ops, so a stale timer can never score into
//! a surface that belongs to a different attempt.

use crate::capture::StrokeCapture;
use crate::quest::QuestRecord;
use crate::renderer::render_reference;
use crate::scorer::{ScoreBreakdown, score_breakdown};
use crate::shape::ShapeKind;
use crate::surface::Surface;
use crate::types::{ChallengeConfig, ChallengeError, ChallengeResult, Point};

/// The phase a session is currently in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// No attempt in progress; no surface exists.
    Idle,
    /// Reference outline rendered, waiting for the start trigger.
    Armed,
    /// Countdown running, pointer events draw ink.
    Capturing,
    /// Scored exactly once; result and snapshot available.
    Scored,
}

/// One outline-tracing challenge attempt.
///
/// Arming always tears down the previous attempt first and renders the
/// reference outline onto a fresh surface, so the outline is stroked
/// exactly once per `Armed` entry and leftover ink cannot survive into
/// a new attempt.
#[derive(Debug)]
pub struct ChallengeSession {
    config: ChallengeConfig,
    phase: SessionPhase,
    shape: Option<ShapeKind>,
    pass_threshold: f64,
    time_remaining: u32,
    surface: Option<Surface>,
    capture: StrokeCapture,
    result: Option<ChallengeResult>,
    breakdown: Option<ScoreBreakdown>,
    snapshot: Option<Surface>,
}

impl ChallengeSession {
    /// Create an idle session with the given configuration.
    #[must_use]
    pub const fn new(config: ChallengeConfig) -> Self {
        let pass_threshold = config.pass_threshold;
        Self {
            config,
            phase: SessionPhase::Idle,
            shape: None,
            pass_threshold,
            time_remaining: 0,
            surface: None,
            capture: StrokeCapture::new(),
            result: None,
            breakdown: None,
            snapshot: None,
        }
    }

    /// The session's configuration.
    #[must_use]
    pub const fn config(&self) -> &ChallengeConfig {
        &self.config
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// The armed shape, `None` while idle.
    #[must_use]
    pub const fn shape(&self) -> Option<ShapeKind> {
        self.shape
    }

    /// Seconds left on the countdown: the full duration while armed,
    /// the live value while capturing, zero otherwise.
    #[must_use]
    pub const fn time_remaining(&self) -> u32 {
        match self.phase {
            SessionPhase::Armed | SessionPhase::Capturing => self.time_remaining,
            SessionPhase::Idle | SessionPhase::Scored => 0,
        }
    }

    /// The attempt's result, `Some` only once scored.
    #[must_use]
    pub const fn result(&self) -> Option<ChallengeResult> {
        self.result
    }

    /// Raw scorer tallies, `Some` only once scored.
    #[must_use]
    pub const fn breakdown(&self) -> Option<ScoreBreakdown> {
        self.breakdown
    }

    /// Snapshot of the final drawn surface, blitted once after scoring.
    #[must_use]
    pub const fn snapshot(&self) -> Option<&Surface> {
        self.snapshot.as_ref()
    }

    /// Arm the session for `shape`: tear down any previous attempt,
    /// create a fresh surface, render the reference outline, and reset
    /// the countdown.
    ///
    /// # Errors
    ///
    /// Returns [`ChallengeError::SurfaceUnavailable`] if the surface
    /// cannot be created; the session is left idle.
    pub fn arm(
        &mut self,
        shape: ShapeKind,
        pass_threshold: Option<f64>,
    ) -> Result<(), ChallengeError> {
        self.close();
        let mut surface = Surface::new(self.config.surface)?;
        render_reference(&mut surface, shape, &self.config);
        self.surface = Some(surface);
        self.shape = Some(shape);
        self.pass_threshold = pass_threshold.unwrap_or(self.config.pass_threshold);
        self.time_remaining = self.config.countdown_seconds;
        self.phase = SessionPhase::Armed;
        Ok(())
    }

    /// Arm the session for a quest record, reading the shape from the
    /// quest's kind and honoring its pass-threshold override.
    ///
    /// # Errors
    ///
    /// Returns [`ChallengeError::NotATraceChallenge`] for photo or
    /// question quests, [`ChallengeError::SurfaceUnavailable`] if the
    /// surface cannot be created.
    pub fn arm_for_quest(&mut self, quest: &QuestRecord) -> Result<(), ChallengeError> {
        let shape = quest
            .kind
            .shape()
            .ok_or(ChallengeError::NotATraceChallenge(quest.kind))?;
        self.arm(shape, quest.pass_threshold)
    }

    /// Start the countdown: `Armed -> Capturing`. No-op in any other
    /// phase.
    pub const fn start(&mut self) {
        if matches!(self.phase, SessionPhase::Armed) {
            self.phase = SessionPhase::Capturing;
        }
    }

    /// Pointer down at a surface-local coordinate. No-op unless
    /// capturing.
    pub const fn pointer_down(&mut self, p: Point) {
        if matches!(self.phase, SessionPhase::Capturing) {
            self.capture.pointer_down(p);
        }
    }

    /// Pointer move: draws an ink segment while capturing with the
    /// pointer down. No-op otherwise.
    pub fn pointer_move(&mut self, p: Point) {
        if !matches!(self.phase, SessionPhase::Capturing) {
            return;
        }
        if let (Some(surface), Some(shape)) = (self.surface.as_mut(), self.shape) {
            self.capture.pointer_move(surface, shape, &self.config, p);
        }
    }

    /// Pointer up or leave: ends the current sub-path. No-op unless
    /// capturing.
    pub const fn pointer_up(&mut self) {
        if matches!(self.phase, SessionPhase::Capturing) {
            self.capture.pointer_up();
        }
    }

    /// Advance the countdown by one second. The tick that reaches zero
    /// scores the attempt exactly once and transitions to `Scored`.
    /// Ticks in any other phase are ignored.
    pub fn tick(&mut self) {
        if !matches!(self.phase, SessionPhase::Capturing) {
            return;
        }
        self.time_remaining = self.time_remaining.saturating_sub(1);
        if self.time_remaining == 0 {
            self.finish_scoring();
        }
    }

    /// Stop capturing early and score immediately. No-op unless
    /// capturing.
    pub fn stop(&mut self) {
        if matches!(self.phase, SessionPhase::Capturing) {
            self.finish_scoring();
        }
    }

    /// Tear down the attempt from any phase: discard the surface,
    /// capture state, countdown, and result.
    pub fn close(&mut self) {
        self.phase = SessionPhase::Idle;
        self.shape = None;
        self.pass_threshold = self.config.pass_threshold;
        self.time_remaining = 0;
        self.surface = None;
        self.capture = StrokeCapture::new();
        self.result = None;
        self.breakdown = None;
        self.snapshot = None;
    }

    fn finish_scoring(&mut self) {
        let (Some(surface), Some(shape)) = (self.surface.as_ref(), self.shape) else {
            return;
        };
        let breakdown = score_breakdown(surface, shape, &self.config);
        let percentage = breakdown.percentage();
        self.result = Some(ChallengeResult {
            percentage,
            passed: percentage >= self.pass_threshold,
        });
        self.breakdown = Some(breakdown);
        // One-shot blit of the final drawing into the display buffer.
        self.snapshot = Some(surface.clone());
        self.capture.pointer_up();
        self.time_remaining = 0;
        self.phase = SessionPhase::Scored;
    }
}
