//! questboard-game: Round orchestration for the quest board.
//!
//! A round draws five unique numbers in `1..=48`, shuffles the quest
//! catalogue, and deals six quests to each number. Submitting a drawn
//! number (typed in or auto-triggered by a board sensor) picks a random
//! quest from that number's pool. The challenge itself runs in
//! `questboard-challenge`; this crate only decides *which* quest runs.
//!
//! Randomness is caller-supplied (`rand::Rng`) so rounds are seedable
//! in tests and simulations.

pub mod catalog;
pub mod round;
pub mod sensors;

pub use catalog::{CatalogError, QuestCatalog};
pub use round::{GameRound, NUMBER_COUNT, QUESTS_PER_NUMBER, SQUARE_COUNT};
pub use sensors::{BoardSensors, SensorOutcome};
