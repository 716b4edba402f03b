//! Random coin field generation.

use rand::Rng;
use std::f64::consts::PI;

/// Coordinates of every coin in the field, kept as parallel vectors so the
/// search passes can scan them without chasing pointers.
#[derive(Debug, Clone, PartialEq)]
pub struct CoinField {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl CoinField {
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// Generates random points inside a circle centered at the origin.
///
/// For each point an angle is drawn uniformly in 0..2π and a radius as
/// `ref_radius * sqrt(uniform)`, which distributes the points uniformly over
/// the disk area rather than clustering them at the center.
pub fn generate_random_points<R: Rng>(
    rng: &mut R,
    ref_radius: f64,
    total_points: usize,
) -> CoinField {
    let mut x = Vec::with_capacity(total_points);
    let mut y = Vec::with_capacity(total_points);

    for _ in 0..total_points {
        let theta = rng.gen_range(0.0..2.0 * PI);
        let radius = ref_radius * rng.gen_range(0.0..1.0f64).sqrt();
        x.push(radius * theta.cos());
        y.push(radius * theta.sin());
    }

    CoinField { x, y }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_points_stay_inside_the_field() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let field = generate_random_points(&mut rng, 10.0, 5000);
        assert_eq!(field.len(), 5000);
        for (x, y) in field.x.iter().zip(&field.y) {
            assert!(x * x + y * y <= 10.0 * 10.0 + 1e-9);
        }
    }

    #[test]
    fn test_same_seed_same_field() {
        let mut a = ChaCha8Rng::seed_from_u64(42);
        let mut b = ChaCha8Rng::seed_from_u64(42);
        let field_a = generate_random_points(&mut a, 10.0, 100);
        let field_b = generate_random_points(&mut b, 10.0, 100);
        assert_eq!(field_a, field_b);
    }
}
