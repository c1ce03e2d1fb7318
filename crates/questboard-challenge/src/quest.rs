//! Quest card records, the data a challenge session consumes.

use serde::{Deserialize, Serialize};

use crate::shape::ShapeKind;

/// The kind of mini-challenge a quest card runs.
///
/// Unknown `type` strings fail loudly at deserialization; quest data
/// is authored, not user input, so a typo is a bug worth surfacing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestKind {
    /// Trace the heart outline.
    HeartChallenge,
    /// Trace the circle outline.
    CircleChallenge,
    /// Trace the star outline.
    StarChallenge,
    /// Take a photo (evaluated elsewhere).
    Photo,
    /// Answer a multiple-choice question (evaluated elsewhere).
    Question,
}

impl QuestKind {
    /// The reference shape for tracing kinds, `None` for photo and
    /// question quests.
    #[must_use]
    pub const fn shape(self) -> Option<ShapeKind> {
        match self {
            Self::HeartChallenge => Some(ShapeKind::Heart),
            Self::CircleChallenge => Some(ShapeKind::Circle),
            Self::StarChallenge => Some(ShapeKind::Star),
            Self::Photo | Self::Question => None,
        }
    }

    /// Whether this kind runs the outline-tracing challenge.
    #[must_use]
    pub const fn is_trace_challenge(self) -> bool {
        self.shape().is_some()
    }
}

/// One quest card from the catalogue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestRecord {
    /// Which mini-challenge this card runs.
    #[serde(rename = "type")]
    pub kind: QuestKind,

    /// Card title shown to the player.
    pub title: String,

    /// Card body text.
    pub description: String,

    /// Reward text shown on a passing result.
    pub rewards: String,

    /// Punishment text shown on a failing result.
    pub punish: String,

    /// Per-quest pass threshold override; the session default applies
    /// when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pass_threshold: Option<f64>,

    /// Optional illustration asset path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Answer set for question quests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answers: Option<Vec<String>>,
}
