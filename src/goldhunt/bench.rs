//! Benchmark harness: run the search passes over one shared field and
//! report how long each took.

use crate::constants::{
    DEFAULT_FIELD_COINS, DEFAULT_FIELD_RADIUS, DEFAULT_GOLDHUNT_WORKERS, DEFAULT_SEARCH_RADIUS,
};
use crate::goldhunt::field::generate_random_points;
use crate::goldhunt::game::GoldHunt;
use crate::goldhunt::search::SearchPass;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use std::time::Instant;

/// Configuration for a benchmark run.
#[derive(Debug, Clone)]
pub struct BenchConfig {
    /// Number of coins scattered over the field
    pub field_coins: usize,
    /// Radius of the field
    pub field_radius: f64,
    /// Radius of each search circle
    pub search_radius: f64,
    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,
    /// Worker threads for the parallel pass
    pub workers: usize,
    /// The passes to run, in order
    pub passes: Vec<SearchPass>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            field_coins: DEFAULT_FIELD_COINS,
            field_radius: DEFAULT_FIELD_RADIUS,
            search_radius: DEFAULT_SEARCH_RADIUS,
            seed: None,
            workers: DEFAULT_GOLDHUNT_WORKERS,
            passes: vec![
                SearchPass::Scan,
                SearchPass::SquaredDistance,
                SearchPass::Parallel {
                    workers: DEFAULT_GOLDHUNT_WORKERS,
                },
            ],
        }
    }
}

/// Timing for one pass over the whole sweep.
#[derive(Debug, Clone, Serialize)]
pub struct PassTiming {
    pub pass: String,
    pub millis: f64,
    pub circles: usize,
    pub total_coins: usize,
}

/// The full benchmark report.
#[derive(Debug, Clone, Serialize)]
pub struct BenchReport {
    pub field_coins: usize,
    pub field_radius: f64,
    pub search_radius: f64,
    pub seed: Option<u64>,
    pub generated_at: String,
    pub passes: Vec<PassTiming>,
}

impl BenchReport {
    /// Plain-text report for the terminal.
    pub fn to_text(&self) -> String {
        let mut text = String::new();
        text.push_str(&format!(
            "Gold Hunt: {} coins in a field of radius {}, search radius {}\n",
            self.field_coins, self.field_radius, self.search_radius
        ));
        if let Some(seed) = self.seed {
            text.push_str(&format!("Seed: {}\n", seed));
        }
        text.push('\n');
        text.push_str(&format!(
            "{:<10} {:>12} {:>10} {:>14}\n",
            "pass", "millis", "circles", "total coins"
        ));
        for timing in &self.passes {
            text.push_str(&format!(
                "{:<10} {:>12.3} {:>10} {:>14}\n",
                timing.pass, timing.millis, timing.circles, timing.total_coins
            ));
        }
        text
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Whether every pass found the same number of coins.
    pub fn passes_agree(&self) -> bool {
        self.passes
            .windows(2)
            .all(|pair| pair[0].total_coins == pair[1].total_coins)
    }
}

/// Generates one coin field and times every configured pass over it.
pub fn run_benchmark(config: &BenchConfig) -> BenchReport {
    let mut rng = match config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    let field = generate_random_points(&mut rng, config.field_radius, config.field_coins);

    let mut hunt = GoldHunt::new(config.field_coins, config.field_radius, config.search_radius);
    let mut passes = Vec::with_capacity(config.passes.len());

    for &pass in &config.passes {
        let start = Instant::now();
        let sweep = hunt.play(&field, pass);
        let elapsed = start.elapsed();
        passes.push(PassTiming {
            pass: pass.name().to_string(),
            millis: elapsed.as_secs_f64() * 1000.0,
            circles: sweep.circles.len(),
            total_coins: sweep.total_coins,
        });
    }

    BenchReport {
        field_coins: config.field_coins,
        field_radius: config.field_radius,
        search_radius: config.search_radius,
        seed: config.seed,
        generated_at: chrono::Utc::now().to_rfc3339(),
        passes,
    }
}
