//! The Gold Hunt sweep: slide the search circle across the field.

use crate::constants::{DEFAULT_FIELD_COINS, DEFAULT_FIELD_RADIUS, DEFAULT_SEARCH_RADIUS};
use crate::goldhunt::field::CoinField;
use crate::goldhunt::search::{find_coins, SearchPass};

/// The Gold Hunt scenario configuration.
///
/// Sir Foo starts at the western edge of the field and advances along the
/// positive x axis, searching a circle of `search_radius` around himself at
/// every stop.
#[derive(Debug, Clone)]
pub struct GoldHunt {
    /// Gold coins scattered over the circular field
    pub field_coins: usize,
    /// Radius of the circular field
    pub field_radius: f64,
    /// Radius of each search circle
    pub search_radius: f64,
    /// Current x coordinate of the searching unit
    pub x_ref: f64,
    /// Current y coordinate of the searching unit
    pub y_ref: f64,
    /// Distance advanced between searches
    pub move_distance: f64,
}

/// One stop of the sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleResult {
    pub center_x: f64,
    pub coins: usize,
}

/// All stops of a sweep plus the grand total.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepResult {
    pub circles: Vec<CircleResult>,
    pub total_coins: usize,
}

impl GoldHunt {
    pub fn new(field_coins: usize, field_radius: f64, search_radius: f64) -> Self {
        let mut hunt = Self {
            field_coins,
            field_radius,
            search_radius,
            x_ref: 0.0,
            y_ref: 0.0,
            move_distance: 0.0,
        };
        hunt.reset_params();
        hunt
    }

    /// Resets the dependent parameters to their computed defaults.
    pub fn reset_params(&mut self) {
        self.x_ref = -(self.field_radius - self.search_radius);
        self.y_ref = 0.0;
        self.move_distance = 2.0 * self.search_radius;
    }

    /// Eastern limit of the sweep. One search radius short of the eastern
    /// field edge at the default sizes.
    fn sweep_limit(&self) -> f64 {
        self.field_radius - 1.0
    }

    /// Runs the sweep over a generated field with the given search pass.
    pub fn play(&mut self, field: &CoinField, pass: SearchPass) -> SweepResult {
        self.reset_params();
        let mut circles = Vec::new();
        let mut total_coins = 0;

        while self.x_ref <= self.sweep_limit() {
            let coins = find_coins(field, self.x_ref, self.y_ref, self.search_radius, pass);
            circles.push(CircleResult {
                center_x: self.x_ref,
                coins,
            });
            total_coins += coins;
            self.x_ref += self.move_distance;
        }

        SweepResult {
            circles,
            total_coins,
        }
    }
}

impl Default for GoldHunt {
    fn default() -> Self {
        Self::new(
            DEFAULT_FIELD_COINS,
            DEFAULT_FIELD_RADIUS,
            DEFAULT_SEARCH_RADIUS,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::goldhunt::field::generate_random_points;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_default_start_and_step() {
        let hunt = GoldHunt::default();
        assert_eq!(hunt.x_ref, -9.0);
        assert_eq!(hunt.y_ref, 0.0);
        assert_eq!(hunt.move_distance, 2.0);
    }

    #[test]
    fn test_default_sweep_visits_ten_circles() {
        let mut hunt = GoldHunt::default();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let field = generate_random_points(&mut rng, hunt.field_radius, 1000);
        let sweep = hunt.play(&field, SearchPass::Scan);
        // Centers -9, -7, ... 9
        assert_eq!(sweep.circles.len(), 10);
        assert_eq!(sweep.circles[0].center_x, -9.0);
        assert_eq!(sweep.circles[9].center_x, 9.0);
    }

    #[test]
    fn test_play_resets_between_runs() {
        let mut hunt = GoldHunt::default();
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let field = generate_random_points(&mut rng, hunt.field_radius, 1000);
        let first = hunt.play(&field, SearchPass::Scan);
        let second = hunt.play(&field, SearchPass::Scan);
        assert_eq!(first, second);
    }

    #[test]
    fn test_total_is_sum_of_circles() {
        let mut hunt = GoldHunt::new(2000, 10.0, 0.5);
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let field = generate_random_points(&mut rng, hunt.field_radius, 2000);
        let sweep = hunt.play(&field, SearchPass::SquaredDistance);
        let sum: usize = sweep.circles.iter().map(|c| c.coins).sum();
        assert_eq!(sweep.total_coins, sum);
    }
}
