/// Which side of an exchange takes the injury.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Attacker,
    Defender,
}

/// Result of a single attack exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackOutcome {
    /// The side that was injured this exchange
    pub injured: Side,
    /// Hit points subtracted from the injured unit
    pub injury: u32,
    /// Attacker health after the exchange
    pub attacker_health: u32,
    /// Defender health after the exchange
    pub defender_health: u32,
}

/// Events produced while fighting over a hut.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CombatEvent {
    /// An attack exchange landed
    Attack(AttackOutcome),
    /// The defending enemy was defeated
    EnemyDefeated { name: String },
    /// The player was defeated
    PlayerDefeated,
    /// The player abandoned the fight
    RanAway,
}
