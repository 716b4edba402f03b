use crate::units::GameUnit;

/// A hut in the village, holding an enemy, a friend, or nothing.
pub struct Hut {
    /// Number assigned to this hut (1-based)
    pub number: usize,
    /// The occupant, if any
    pub occupant: Option<Box<dyn GameUnit>>,
    /// Whether the player has taken this hut. Viewed from the player's
    /// perspective in the current implementation.
    pub is_acquired: bool,
}

impl Hut {
    pub fn new(number: usize, occupant: Option<Box<dyn GameUnit>>) -> Self {
        Self {
            number,
            occupant,
            is_acquired: false,
        }
    }

    /// Updates the occupant of this hut and marks it acquired.
    pub fn acquire(&mut self, new_occupant: Box<dyn GameUnit>) {
        self.occupant = Some(new_occupant);
        self.is_acquired = true;
    }

    /// Info string on the hut occupant, used for the status display.
    ///
    /// One of: `ACQUIRED`, `unoccupied`, or the occupant's unit type.
    pub fn occupant_type(&self) -> &'static str {
        if self.is_acquired {
            "ACQUIRED"
        } else {
            match &self.occupant {
                None => "unoccupied",
                Some(unit) => unit.unit_type().label(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{Knight, OrcRider};

    #[test]
    fn test_acquire_hut_sets_occupant() {
        let mut hut = Hut::new(4, None);
        hut.acquire(Box::new(Knight::default()));
        assert!(hut.is_acquired);
        let occupant = hut.occupant.as_ref().unwrap();
        assert_eq!(occupant.name(), "Sir Foo");
    }

    #[test]
    fn test_occupant_type_strings() {
        let empty = Hut::new(1, None);
        assert_eq!(empty.occupant_type(), "unoccupied");

        let enemy = Hut::new(2, Some(Box::new(OrcRider::new("enemy-2"))));
        assert_eq!(enemy.occupant_type(), "enemy");

        let friend = Hut::new(3, Some(Box::new(Knight::new("knight-3"))));
        assert_eq!(friend.occupant_type(), "friend");

        let mut acquired = Hut::new(4, None);
        acquired.acquire(Box::new(Knight::default()));
        assert_eq!(acquired.occupant_type(), "ACQUIRED");
    }
}
