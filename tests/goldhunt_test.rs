//! Integration test: the Gold Hunt benchmark.
//!
//! The optimization passes must be interchangeable: same field, same
//! counts, regardless of how the search is computed.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use wargame::goldhunt::{
    generate_random_points, run_benchmark, BenchConfig, GoldHunt, SearchPass,
};

#[test]
fn test_passes_agree_on_a_large_field() {
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let field = generate_random_points(&mut rng, 10.0, 50_000);
    let mut hunt = GoldHunt::new(50_000, 10.0, 0.5);

    let baseline = hunt.play(&field, SearchPass::Scan);
    let squared = hunt.play(&field, SearchPass::SquaredDistance);
    let parallel = hunt.play(&field, SearchPass::Parallel { workers: 4 });

    assert_eq!(baseline, squared);
    assert_eq!(baseline, parallel);
    assert!(baseline.total_coins > 0);
}

#[test]
fn test_single_worker_parallel_equals_sequential() {
    let mut rng = ChaCha8Rng::seed_from_u64(77);
    let field = generate_random_points(&mut rng, 10.0, 10_000);
    let mut hunt = GoldHunt::default();

    let sequential = hunt.play(&field, SearchPass::SquaredDistance);
    let parallel = hunt.play(&field, SearchPass::Parallel { workers: 1 });
    assert_eq!(sequential, parallel);
}

#[test]
fn test_small_search_radius_sweep() {
    // The book-sized sweep: radius 0.1, step 0.2, from -9.9 while x <= 9.0.
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let field = generate_random_points(&mut rng, 10.0, 20_000);
    let mut hunt = GoldHunt::new(20_000, 10.0, 0.1);

    let sweep = hunt.play(&field, SearchPass::SquaredDistance);
    assert_eq!(sweep.circles.len(), 95);
    assert_eq!(sweep.circles[0].center_x, -9.9);
}

#[test]
fn test_every_coin_counted_with_touching_circles() {
    // With search radius 1.0 the circles touch along the x axis, so the
    // total can never exceed the number of coins in the swept band.
    let mut rng = ChaCha8Rng::seed_from_u64(12);
    let field = generate_random_points(&mut rng, 10.0, 5000);
    let mut hunt = GoldHunt::default();
    let sweep = hunt.play(&field, SearchPass::Scan);
    assert!(sweep.total_coins <= field.len());
}

#[test]
fn test_benchmark_report_round_trip() {
    let config = BenchConfig {
        field_coins: 5000,
        seed: Some(7),
        ..BenchConfig::default()
    };
    let report = run_benchmark(&config);

    assert!(report.passes_agree());
    assert_eq!(report.passes.len(), 3);
    for timing in &report.passes {
        assert_eq!(timing.circles, 10);
    }

    let json = report.to_json().expect("report serializes");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(value["field_coins"], 5000);
    assert_eq!(value["seed"], 7);
}

#[test]
fn test_seeded_runs_are_reproducible() {
    let config = BenchConfig {
        field_coins: 2000,
        seed: Some(31),
        ..BenchConfig::default()
    };
    let first = run_benchmark(&config);
    let second = run_benchmark(&config);
    for (a, b) in first.passes.iter().zip(&second.passes) {
        assert_eq!(a.total_coins, b.total_coins);
        assert_eq!(a.circles, b.circles);
    }
}
