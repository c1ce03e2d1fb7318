//! Outline scoring: pixel-sampling tolerance hit testing.
//!
//! Re-derives the ideal outline via [`shape::score_samples`], expands
//! every sample into a disc of the configured tolerance radius, and
//! classifies each in-bounds pixel in the disc against the shape's ink
//! signature. The score is the proportion of classified pixels.
//!
//! Overlapping discs from adjacent samples count their shared pixels
//! once per disc. This over-weights densely sampled curve regions and
//! is deliberate: deduplicating would change scores relative to every
//! previously recorded attempt.

use crate::shape::{self, ShapeKind};
use crate::surface::Surface;
use crate::types::ChallengeConfig;

/// Raw pixel tallies behind a percentage score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreBreakdown {
    /// Tolerance-disc pixels inspected (in bounds), counted per disc.
    pub total: u64,
    /// Inspected pixels whose color matched the ink signature.
    pub drawn: u64,
}

impl ScoreBreakdown {
    /// The percentage this breakdown represents, `0.0` when no pixels
    /// were inspected.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn percentage(self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        100.0 * self.drawn as f64 / self.total as f64
    }
}

/// Score the drawn strokes on `surface` against the ideal outline for
/// `kind`. Always returns a finite value in `[0, 100]`.
#[must_use]
pub fn score(surface: &Surface, kind: ShapeKind, config: &ChallengeConfig) -> f64 {
    score_breakdown(surface, kind, config).percentage()
}

/// Like [`score`], but exposes the raw pixel tallies.
#[must_use]
pub fn score_breakdown(surface: &Surface, kind: ShapeKind, config: &ChallengeConfig) -> ScoreBreakdown {
    let tolerance = config.tolerance_radius;
    let mut breakdown = ScoreBreakdown { total: 0, drawn: 0 };

    for sample in shape::score_samples(kind, surface.dimensions()) {
        for dx in -tolerance..=tolerance {
            for dy in -tolerance..=tolerance {
                if dx * dx + dy * dy > tolerance * tolerance {
                    continue;
                }
                let Some([r, g, b, _]) = surface.pixel(sample.x + dx, sample.y + dy) else {
                    continue;
                };
                breakdown.total += 1;
                if kind.matches_ink(r, g, b) {
                    breakdown.drawn += 1;
                }
            }
        }
    }

    breakdown
}
