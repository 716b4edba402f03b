//! Game characters: the abstract unit trait and its concrete implementations.

pub mod knight;
pub mod orc_rider;

pub use knight::Knight;
pub use orc_rider::OrcRider;

use crate::constants::DEFAULT_HEAL_BY;
use crate::error::{GameUnitError, UnitErrorCode};

/// Whether a unit fights for or against the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitType {
    Friend,
    Enemy,
}

impl UnitType {
    pub fn label(&self) -> &'static str {
        match self {
            UnitType::Friend => "friend",
            UnitType::Enemy => "enemy",
        }
    }
}

/// A game character (a 'unit') with a name and a bounded health meter.
///
/// Concrete units provide the accessors; healing and status reporting are
/// shared behavior.
pub trait GameUnit {
    fn name(&self) -> &str;
    fn unit_type(&self) -> UnitType;
    fn max_hp(&self) -> u32;
    fn health(&self) -> u32;
    fn set_health(&mut self, hp: u32);

    /// One line of flavor text describing this unit.
    fn info(&self) -> String;

    /// Replenish hit points, either back to full or by `heal_by` points.
    ///
    /// Healing past `max_hp` is a bug in the calling code and reported as
    /// error code 101.
    fn heal(&mut self, heal_by: u32, full_healing: bool) -> Result<(), GameUnitError> {
        if self.health() == self.max_hp() {
            return Ok(());
        }
        if full_healing {
            self.set_health(self.max_hp());
        } else {
            self.set_health(self.health() + heal_by);
        }

        if self.health() > self.max_hp() {
            return Err(GameUnitError::new(
                UnitErrorCode::HealthMeter,
                "health_meter > max_hp!",
            ));
        }
        Ok(())
    }

    /// Heal with the default arguments (full healing).
    fn heal_default(&mut self) -> Result<(), GameUnitError> {
        self.heal(DEFAULT_HEAL_BY, true)
    }

    /// Reset the health meter back to the default hit points.
    fn reset_health(&mut self) {
        let max = self.max_hp();
        self.set_health(max);
    }

    /// Status line for the current health reading of this unit.
    fn health_line(&self) -> String {
        format!("Health: {}: {}", self.name(), self.health())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heal_at_full_health_is_noop() {
        let mut knight = Knight::default();
        assert!(knight.heal(10, false).is_ok());
        assert_eq!(knight.health(), knight.max_hp());
    }

    #[test]
    fn test_full_healing_restores_max_hp() {
        let mut knight = Knight::default();
        knight.set_health(5);
        knight.heal(2, true).unwrap();
        assert_eq!(knight.health(), knight.max_hp());
    }

    #[test]
    fn test_partial_heal_past_max_is_code_101() {
        let mut knight = Knight::default();
        knight.set_health(10);
        let err = knight.heal(100, false).unwrap_err();
        assert_eq!(err.code, UnitErrorCode::HealthMeter);
        assert_eq!(err.code.code(), 101);
    }

    #[test]
    fn test_reset_health() {
        let mut orc = OrcRider::new("orc-1");
        orc.set_health(0);
        orc.reset_health();
        assert_eq!(orc.health(), orc.max_hp());
    }

    #[test]
    fn test_health_line_format() {
        let knight = Knight::new("Sir Bar");
        assert_eq!(knight.health_line(), "Health: Sir Bar: 40");
    }
}
