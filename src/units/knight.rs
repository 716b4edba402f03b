use crate::constants::{DEFAULT_PLAYER_NAME, KNIGHT_MAX_HP};
use crate::units::{GameUnit, UnitType};

/// The game character 'Knight'.
///
/// The player is a knight. Other knights encountered in the village are
/// friends of the player.
#[derive(Debug, Clone)]
pub struct Knight {
    name: String,
    health: u32,
}

impl Knight {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            health: KNIGHT_MAX_HP,
        }
    }
}

impl Default for Knight {
    fn default() -> Self {
        Self::new(DEFAULT_PLAYER_NAME)
    }
}

impl GameUnit for Knight {
    fn name(&self) -> &str {
        &self.name
    }

    fn unit_type(&self) -> UnitType {
        UnitType::Friend
    }

    fn max_hp(&self) -> u32 {
        KNIGHT_MAX_HP
    }

    fn health(&self) -> u32 {
        self.health
    }

    fn set_health(&mut self, hp: u32) {
        self.health = hp;
    }

    fn info(&self) -> String {
        "I am a Knight!".to_string()
    }
}
