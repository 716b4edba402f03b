//! Search passes: the same coin count computed three increasingly
//! optimized ways.

use crate::goldhunt::field::CoinField;
use std::thread;

/// Which optimization pass to run a search with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPass {
    /// Straightforward per-coin distance with a square root
    Scan,
    /// Squared-distance comparison behind a bounding-box pre-filter
    SquaredDistance,
    /// The squared-distance search split across a fixed pool of scoped
    /// worker threads
    Parallel { workers: usize },
}

impl SearchPass {
    pub fn name(&self) -> &'static str {
        match self {
            SearchPass::Scan => "scan",
            SearchPass::SquaredDistance => "squared",
            SearchPass::Parallel { .. } => "parallel",
        }
    }
}

/// Counts the coins within `radius` of `(x_ref, y_ref)` using the given pass.
pub fn find_coins(
    field: &CoinField,
    x_ref: f64,
    y_ref: f64,
    radius: f64,
    pass: SearchPass,
) -> usize {
    match pass {
        SearchPass::Scan => scan(&field.x, &field.y, x_ref, y_ref, radius),
        SearchPass::SquaredDistance => squared(&field.x, &field.y, x_ref, y_ref, radius),
        SearchPass::Parallel { workers } => parallel(field, x_ref, y_ref, radius, workers),
    }
}

fn scan(xs: &[f64], ys: &[f64], x_ref: f64, y_ref: f64, radius: f64) -> usize {
    let mut collected = 0;
    for (x, y) in xs.iter().zip(ys) {
        let delta_x = x_ref - x;
        let delta_y = y_ref - y;
        let dist = (delta_x * delta_x + delta_y * delta_y).sqrt();
        if dist <= radius {
            collected += 1;
        }
    }
    collected
}

fn squared(xs: &[f64], ys: &[f64], x_ref: f64, y_ref: f64, radius: f64) -> usize {
    let radius_sq = radius * radius;
    xs.iter()
        .zip(ys)
        .filter(|(x, y)| {
            // Most coins fail the cheap box check and never pay for the
            // squared distance.
            let delta_x = x_ref - **x;
            if delta_x.abs() > radius {
                return false;
            }
            let delta_y = y_ref - **y;
            if delta_y.abs() > radius {
                return false;
            }
            delta_x * delta_x + delta_y * delta_y <= radius_sq
        })
        .count()
}

/// Splits the field into one chunk per worker. Chunks are independent, so
/// the workers share nothing and their counts are summed once all of them
/// have joined.
fn parallel(field: &CoinField, x_ref: f64, y_ref: f64, radius: f64, workers: usize) -> usize {
    let workers = workers.max(1);
    if workers == 1 || field.len() < workers {
        return squared(&field.x, &field.y, x_ref, y_ref, radius);
    }

    let chunk_size = field.len().div_ceil(workers);
    thread::scope(|scope| {
        let handles: Vec<_> = field
            .x
            .chunks(chunk_size)
            .zip(field.y.chunks(chunk_size))
            .map(|(xs, ys)| scope.spawn(move || squared(xs, ys, x_ref, y_ref, radius)))
            .collect();

        handles.into_iter().map(|h| h.join().unwrap_or(0)).sum()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::goldhunt::field::generate_random_points;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn small_field() -> CoinField {
        let mut rng = ChaCha8Rng::seed_from_u64(17);
        generate_random_points(&mut rng, 10.0, 2000)
    }

    #[test]
    fn test_all_passes_agree() {
        let field = small_field();
        let baseline = find_coins(&field, -9.0, 0.0, 1.0, SearchPass::Scan);
        assert_eq!(
            find_coins(&field, -9.0, 0.0, 1.0, SearchPass::SquaredDistance),
            baseline
        );
        for workers in [1, 2, 4, 7] {
            assert_eq!(
                find_coins(&field, -9.0, 0.0, 1.0, SearchPass::Parallel { workers }),
                baseline,
                "parallel with {} workers disagrees",
                workers
            );
        }
    }

    #[test]
    fn test_radius_covering_the_field_finds_everything() {
        let field = small_field();
        let count = find_coins(&field, 0.0, 0.0, 20.0, SearchPass::SquaredDistance);
        assert_eq!(count, field.len());
    }

    #[test]
    fn test_zero_workers_falls_back_to_one() {
        let field = small_field();
        let baseline = find_coins(&field, 1.0, 0.0, 1.0, SearchPass::Scan);
        assert_eq!(
            find_coins(&field, 1.0, 0.0, 1.0, SearchPass::Parallel { workers: 0 }),
            baseline
        );
    }
}
