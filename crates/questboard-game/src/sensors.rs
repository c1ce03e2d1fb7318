//! Board sensor tracking and quest auto-triggering.
//!
//! The rig reports cell activations as integer ids `0..=47`; cell `id`
//! corresponds to board square `id + 1`. Activations are recorded into
//! a deduplicated, sorted active set, and every activation whose square
//! is one of the round's drawn numbers auto-triggers a quest pick --
//! repeats included, matching how the physical board behaves when a
//! piece is lifted and replaced.

use rand::Rng;

use questboard_challenge::QuestRecord;

use crate::round::{GameRound, SQUARE_COUNT};

/// Highest valid sensor cell id.
pub const MAX_CELL_ID: u8 = SQUARE_COUNT - 1;

/// Outcome of one sensor activation.
#[derive(Debug, Clone, PartialEq)]
pub enum SensorOutcome<'a> {
    /// The id does not name a board cell.
    OutOfRange,
    /// Valid cell, but its square is not one of the drawn numbers.
    Noted,
    /// The cell's square matched a drawn number and picked a quest.
    Matched {
        /// The matched board square (`cell id + 1`).
        number: u8,
        /// The quest picked from that number's pool.
        quest: &'a QuestRecord,
    },
}

/// The set of currently active board cells.
#[derive(Debug, Clone, Default)]
pub struct BoardSensors {
    active: Vec<u8>,
}

impl BoardSensors {
    /// Create an empty sensor set.
    #[must_use]
    pub const fn new() -> Self {
        Self { active: Vec::new() }
    }

    /// Active cell ids, deduplicated and sorted ascending.
    #[must_use]
    pub fn active_cells(&self) -> &[u8] {
        &self.active
    }

    /// Clear the active set.
    pub fn clear(&mut self) {
        self.active.clear();
    }

    /// Record a sensor activation and match it against the round's
    /// drawn numbers.
    pub fn sensor_activated<'a, R: Rng + ?Sized>(
        &mut self,
        id: u8,
        round: &'a GameRound,
        rng: &mut R,
    ) -> SensorOutcome<'a> {
        if id > MAX_CELL_ID {
            log::warn!("sensor id {id} out of range, ignoring");
            return SensorOutcome::OutOfRange;
        }

        if let Err(pos) = self.active.binary_search(&id) {
            self.active.insert(pos, id);
        }

        let number = id + 1;
        round.submit_number(number, rng).map_or_else(
            || {
                log::debug!("sensor {id} (square {number}) active, no drawn-number match");
                SensorOutcome::Noted
            },
            |quest| SensorOutcome::Matched { number, quest },
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::catalog::QuestCatalog;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn round(seed: u64) -> GameRound {
        let catalog = QuestCatalog::embedded().unwrap();
        let mut rng = StdRng::seed_from_u64(seed);
        GameRound::draw(&catalog, &mut rng).unwrap()
    }

    #[test]
    fn out_of_range_id_is_rejected_and_not_recorded() {
        let round = round(1);
        let mut rng = StdRng::seed_from_u64(2);
        let mut sensors = BoardSensors::new();
        assert_eq!(
            sensors.sensor_activated(48, &round, &mut rng),
            SensorOutcome::OutOfRange
        );
        assert!(sensors.active_cells().is_empty());
    }

    #[test]
    fn active_cells_are_deduplicated_and_sorted() {
        let round = round(1);
        let mut rng = StdRng::seed_from_u64(2);
        let mut sensors = BoardSensors::new();
        for id in [30, 5, 30, 12, 5] {
            sensors.sensor_activated(id, &round, &mut rng);
        }
        assert_eq!(sensors.active_cells(), &[5, 12, 30]);
    }

    #[test]
    fn activation_matching_a_drawn_number_triggers_a_quest() {
        let round = round(4);
        let mut rng = StdRng::seed_from_u64(5);
        let mut sensors = BoardSensors::new();
        let number = round.numbers()[0];
        match sensors.sensor_activated(number - 1, &round, &mut rng) {
            SensorOutcome::Matched { number: n, quest } => {
                assert_eq!(n, number);
                assert!(round.quests_for(number).unwrap().contains(quest));
            }
            other => panic!("expected a match, got {other:?}"),
        }
    }

    #[test]
    fn repeat_activation_matches_again() {
        // Lifting and replacing a piece fires the sensor again; every
        // matching event triggers a quest pick.
        let round = round(4);
        let mut rng = StdRng::seed_from_u64(5);
        let mut sensors = BoardSensors::new();
        let cell = round.numbers()[0] - 1;
        for _ in 0..3 {
            assert!(matches!(
                sensors.sensor_activated(cell, &round, &mut rng),
                SensorOutcome::Matched { .. }
            ));
        }
        assert_eq!(sensors.active_cells(), &[cell]);
    }

    #[test]
    fn unmatched_activation_is_noted() {
        let round = round(4);
        let mut rng = StdRng::seed_from_u64(5);
        let mut sensors = BoardSensors::new();
        let unmatched_cell = (0..=MAX_CELL_ID)
            .find(|id| !round.numbers().contains(&(id + 1)))
            .unwrap();
        assert_eq!(
            sensors.sensor_activated(unmatched_cell, &round, &mut rng),
            SensorOutcome::Noted
        );
        assert_eq!(sensors.active_cells(), &[unmatched_cell]);
    }

    #[test]
    fn clear_empties_the_active_set() {
        let round = round(1);
        let mut rng = StdRng::seed_from_u64(2);
        let mut sensors = BoardSensors::new();
        sensors.sensor_activated(10, &round, &mut rng);
        sensors.clear();
        assert!(sensors.active_cells().is_empty());
    }
}
