use crate::constants::ORC_RIDER_MAX_HP;
use crate::units::{GameUnit, UnitType};

/// The enemy character 'Orc Rider'.
#[derive(Debug, Clone)]
pub struct OrcRider {
    name: String,
    health: u32,
}

impl OrcRider {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            health: ORC_RIDER_MAX_HP,
        }
    }
}

impl GameUnit for OrcRider {
    fn name(&self) -> &str {
        &self.name
    }

    fn unit_type(&self) -> UnitType {
        UnitType::Enemy
    }

    fn max_hp(&self) -> u32 {
        ORC_RIDER_MAX_HP
    }

    fn health(&self) -> u32 {
        self.health
    }

    fn set_health(&mut self, hp: u32) {
        self.health = hp;
    }

    fn info(&self) -> String {
        "Grrrr..I am an Orc Rider. Don't mess with me.".to_string()
    }
}
