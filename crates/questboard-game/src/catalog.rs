//! Quest catalogue loading.

use questboard_challenge::QuestRecord;

/// The sample catalogue shipped with the crate, used by the simulator
/// and tests.
const EMBEDDED_CATALOG_JSON: &str = include_str!("../data/quests.json");

/// Errors raised while loading or consuming a catalogue.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The catalogue JSON is malformed or names an unknown quest kind.
    #[error("failed to parse quest catalogue: {0}")]
    Parse(#[from] serde_json::Error),

    /// The catalogue has no quests at all.
    #[error("quest catalogue is empty")]
    Empty,

    /// The catalogue is too small to deal a full round.
    #[error("not enough quests for a round: need {needed}, catalogue has {have}")]
    NotEnoughQuests {
        /// Quests a round requires.
        needed: usize,
        /// Quests the catalogue provides.
        have: usize,
    },
}

/// An immutable set of quest cards.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestCatalog {
    quests: Vec<QuestRecord>,
}

impl QuestCatalog {
    /// Parse a catalogue from JSON: an array of quest records.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] for malformed JSON or unknown
    /// quest kinds, [`CatalogError::Empty`] for an empty array.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let quests: Vec<QuestRecord> = serde_json::from_str(json)?;
        if quests.is_empty() {
            return Err(CatalogError::Empty);
        }
        log::debug!("loaded quest catalogue with {} quests", quests.len());
        Ok(Self { quests })
    }

    /// The sample catalogue embedded in the crate.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] if the embedded data is
    /// malformed (a packaging bug, covered by tests).
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json(EMBEDDED_CATALOG_JSON)
    }

    /// Number of quests in the catalogue.
    #[must_use]
    pub fn len(&self) -> usize {
        self.quests.len()
    }

    /// Returns `true` if the catalogue has no quests.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.quests.is_empty()
    }

    /// All quest records.
    #[must_use]
    pub fn quests(&self) -> &[QuestRecord] {
        &self.quests
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use questboard_challenge::QuestKind;

    #[test]
    fn embedded_catalog_parses() {
        let catalog = QuestCatalog::embedded().unwrap();
        assert!(
            catalog.len() >= 30,
            "embedded catalogue has only {} quests",
            catalog.len()
        );
    }

    #[test]
    fn embedded_catalog_covers_every_kind() {
        let catalog = QuestCatalog::embedded().unwrap();
        for kind in [
            QuestKind::HeartChallenge,
            QuestKind::CircleChallenge,
            QuestKind::StarChallenge,
            QuestKind::Photo,
            QuestKind::Question,
        ] {
            assert!(
                catalog.quests().iter().any(|q| q.kind == kind),
                "no {kind:?} quest in the embedded catalogue"
            );
        }
    }

    #[test]
    fn question_quests_carry_answers() {
        let catalog = QuestCatalog::embedded().unwrap();
        for quest in catalog.quests() {
            if quest.kind == QuestKind::Question {
                assert!(
                    quest.answers.as_ref().is_some_and(|a| !a.is_empty()),
                    "question quest '{}' has no answers",
                    quest.title
                );
            }
        }
    }

    #[test]
    fn empty_array_is_rejected() {
        let result = QuestCatalog::from_json("[]");
        assert!(matches!(result, Err(CatalogError::Empty)));
    }

    #[test]
    fn malformed_json_is_rejected() {
        let result = QuestCatalog::from_json("{not json");
        assert!(matches!(result, Err(CatalogError::Parse(_))));
    }

    #[test]
    fn unknown_quest_kind_fails_loudly() {
        let json = r#"[{
            "type": "limbo_challenge",
            "title": "Limbo",
            "description": "How low can you go?",
            "rewards": "A candy",
            "punish": "Go lower"
        }]"#;
        let result = QuestCatalog::from_json(json);
        assert!(matches!(result, Err(CatalogError::Parse(_))));
    }
}
