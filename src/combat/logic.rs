//! Attack resolution: weighted injury selection and the injury roll.

use crate::combat::types::{AttackOutcome, Side};
use crate::constants::{INJURY_ATTACKER_WEIGHT, INJURY_MAX, INJURY_MIN, INJURY_TOTAL_WEIGHT};
use crate::units::GameUnit;
use rand::Rng;

/// Picks the side injured by an exchange.
///
/// The split favors the defender being hit: out of [`INJURY_TOTAL_WEIGHT`]
/// draws, [`INJURY_ATTACKER_WEIGHT`] go against the attacker.
pub fn weighted_injury_selection<R: Rng>(rng: &mut R) -> Side {
    if rng.gen_range(0..INJURY_TOTAL_WEIGHT) < INJURY_ATTACKER_WEIGHT {
        Side::Attacker
    } else {
        Side::Defender
    }
}

/// Rolls the injury for one exchange, uniform in [`INJURY_MIN`]..=[`INJURY_MAX`].
pub fn injury_roll<R: Rng>(rng: &mut R) -> u32 {
    rng.gen_range(INJURY_MIN..=INJURY_MAX)
}

/// Resolves one attack exchange between two units.
///
/// One of the two units is injured by a random amount; its health is clamped
/// at zero. Both units' resulting health readings are reported back.
pub fn attack<R: Rng>(
    attacker: &mut dyn GameUnit,
    defender: &mut dyn GameUnit,
    rng: &mut R,
) -> AttackOutcome {
    let injured = weighted_injury_selection(rng);
    let injury = injury_roll(rng);

    let injured_unit: &mut dyn GameUnit = match injured {
        Side::Attacker => &mut *attacker,
        Side::Defender => &mut *defender,
    };
    injured_unit.set_health(injured_unit.health().saturating_sub(injury));

    AttackOutcome {
        injured,
        injury,
        attacker_health: attacker.health(),
        defender_health: defender.health(),
    }
}
