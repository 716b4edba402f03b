//! The Gold Hunt benchmark: count gold coins scattered in a circular field
//! as a search circle slides along the x axis.
//!
//! The searches come in several passes of increasing sophistication; all of
//! them must agree exactly on the counts. The bench harness times the passes
//! over one shared coin field.

pub mod bench;
pub mod field;
pub mod game;
pub mod search;

pub use bench::{run_benchmark, BenchConfig, BenchReport, PassTiming};
pub use field::{generate_random_points, CoinField};
pub use game::{CircleResult, GoldHunt, SweepResult};
pub use search::SearchPass;
