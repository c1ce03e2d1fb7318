//! Number draw and quest assignment for one round.

use rand::Rng;
use rand::seq::SliceRandom;

use questboard_challenge::QuestRecord;

use crate::catalog::{CatalogError, QuestCatalog};

/// Numbers drawn per round.
pub const NUMBER_COUNT: usize = 5;
/// Quests dealt to each drawn number.
pub const QUESTS_PER_NUMBER: usize = 6;
/// Board squares, numbered `1..=SQUARE_COUNT`.
pub const SQUARE_COUNT: u8 = 48;

/// One round's drawn numbers and their quest pools.
///
/// Pools are dealt once at draw time and never consumed; submitting
/// the same number twice may repeat a quest.
#[derive(Debug, Clone)]
pub struct GameRound {
    numbers: Vec<u8>,
    pools: Vec<(u8, Vec<QuestRecord>)>,
}

impl GameRound {
    /// Draw a new round: five unique numbers in `1..=48` (rejection
    /// draw), then six quests per number dealt from a shuffle of the
    /// whole catalogue.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotEnoughQuests`] when the catalogue
    /// cannot fill every pool.
    pub fn draw<R: Rng + ?Sized>(
        catalog: &QuestCatalog,
        rng: &mut R,
    ) -> Result<Self, CatalogError> {
        let needed = NUMBER_COUNT * QUESTS_PER_NUMBER;
        if catalog.len() < needed {
            return Err(CatalogError::NotEnoughQuests {
                needed,
                have: catalog.len(),
            });
        }

        let mut numbers: Vec<u8> = Vec::with_capacity(NUMBER_COUNT);
        while numbers.len() < NUMBER_COUNT {
            let candidate = rng.gen_range(1..=SQUARE_COUNT);
            if !numbers.contains(&candidate) {
                numbers.push(candidate);
            }
        }

        let mut shuffled: Vec<QuestRecord> = catalog.quests().to_vec();
        shuffled.shuffle(rng);

        let pools = numbers
            .iter()
            .zip(shuffled.chunks_exact(QUESTS_PER_NUMBER))
            .map(|(&number, chunk)| (number, chunk.to_vec()))
            .collect();

        log::info!("round started with numbers {numbers:?}");
        Ok(Self { numbers, pools })
    }

    /// The drawn numbers, in draw order.
    #[must_use]
    pub fn numbers(&self) -> &[u8] {
        &self.numbers
    }

    /// The quest pool dealt to a drawn number, `None` for numbers not
    /// in this round.
    #[must_use]
    pub fn quests_for(&self, number: u8) -> Option<&[QuestRecord]> {
        self.pools
            .iter()
            .find(|(n, _)| *n == number)
            .map(|(_, pool)| pool.as_slice())
    }

    /// Submit a number: when it is one of the round's drawn numbers,
    /// pick a random quest from its pool.
    pub fn submit_number<R: Rng + ?Sized>(&self, number: u8, rng: &mut R) -> Option<&QuestRecord> {
        let pool = self.quests_for(number)?;
        let quest = pool.get(rng.gen_range(0..pool.len()))?;
        log::info!("number {number} matched, quest '{}' selected", quest.title);
        Some(quest)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn catalog() -> QuestCatalog {
        QuestCatalog::embedded().unwrap()
    }

    #[test]
    fn draw_produces_five_unique_numbers_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let round = GameRound::draw(&catalog(), &mut rng).unwrap();
        let numbers = round.numbers();
        assert_eq!(numbers.len(), NUMBER_COUNT);
        for &n in numbers {
            assert!((1..=SQUARE_COUNT).contains(&n), "number {n} out of range");
        }
        let mut deduped = numbers.to_vec();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(deduped.len(), NUMBER_COUNT, "numbers must be unique");
    }

    #[test]
    fn draw_deals_six_distinct_quests_per_number() {
        let mut rng = StdRng::seed_from_u64(7);
        let round = GameRound::draw(&catalog(), &mut rng).unwrap();
        for &n in round.numbers() {
            let pool = round.quests_for(n).unwrap();
            assert_eq!(pool.len(), QUESTS_PER_NUMBER);
        }
        // Pools are disjoint: the shuffle deals each quest at most once.
        let mut titles: Vec<&str> = round
            .numbers()
            .iter()
            .flat_map(|&n| round.quests_for(n).unwrap())
            .map(|q| q.title.as_str())
            .collect();
        let before = titles.len();
        titles.sort_unstable();
        titles.dedup();
        assert_eq!(titles.len(), before, "a quest was dealt to two numbers");
    }

    #[test]
    fn draw_is_deterministic_for_a_seed() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        let round_a = GameRound::draw(&catalog(), &mut a).unwrap();
        let round_b = GameRound::draw(&catalog(), &mut b).unwrap();
        assert_eq!(round_a.numbers(), round_b.numbers());
    }

    #[test]
    fn undersized_catalog_is_rejected_up_front() {
        let json = r#"[{
            "type": "photo",
            "title": "Lonely",
            "description": "The only quest",
            "rewards": "A candy",
            "punish": "None"
        }]"#;
        let small = QuestCatalog::from_json(json).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let result = GameRound::draw(&small, &mut rng);
        assert!(matches!(
            result,
            Err(CatalogError::NotEnoughQuests { needed: 30, have: 1 })
        ));
    }

    #[test]
    fn submit_drawn_number_yields_quest_from_its_pool() {
        let mut rng = StdRng::seed_from_u64(3);
        let round = GameRound::draw(&catalog(), &mut rng).unwrap();
        let number = round.numbers()[0];
        let quest = round.submit_number(number, &mut rng).unwrap();
        assert!(
            round.quests_for(number).unwrap().contains(quest),
            "quest must come from the submitted number's pool"
        );
    }

    #[test]
    fn submit_undrawn_number_yields_nothing() {
        let mut rng = StdRng::seed_from_u64(3);
        let round = GameRound::draw(&catalog(), &mut rng).unwrap();
        let undrawn = (1..=SQUARE_COUNT)
            .find(|n| !round.numbers().contains(n))
            .unwrap();
        assert!(round.submit_number(undrawn, &mut rng).is_none());
    }

    #[test]
    fn pools_are_not_consumed_by_submission() {
        let mut rng = StdRng::seed_from_u64(9);
        let round = GameRound::draw(&catalog(), &mut rng).unwrap();
        let number = round.numbers()[0];
        for _ in 0..20 {
            assert!(round.submit_number(number, &mut rng).is_some());
        }
        assert_eq!(round.quests_for(number).unwrap().len(), QUESTS_PER_NUMBER);
    }
}
