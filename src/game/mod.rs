//! The Attack of the Orcs village scenario.

pub mod console;
pub mod hut;
pub mod scenario;

pub use hut::Hut;
pub use scenario::{AttackOfTheOrcs, GameResult};
