// Game units
pub const KNIGHT_MAX_HP: u32 = 40;
pub const ORC_RIDER_MAX_HP: u32 = 30;
pub const DEFAULT_PLAYER_NAME: &str = "Sir Foo";
pub const DEFAULT_HEAL_BY: u32 = 2;

// Combat
// Injury rolls are uniform in INJURY_MIN..=INJURY_MAX. The attacker takes
// the hit INJURY_ATTACKER_WEIGHT times out of INJURY_TOTAL_WEIGHT.
pub const INJURY_MIN: u32 = 10;
pub const INJURY_MAX: u32 = 15;
pub const INJURY_ATTACKER_WEIGHT: u32 = 3;
pub const INJURY_TOTAL_WEIGHT: u32 = 10;

// Village scenario
pub const HUT_COUNT: usize = 5;

// Gold Hunt benchmark
pub const DEFAULT_FIELD_COINS: usize = 5000;
pub const DEFAULT_FIELD_RADIUS: f64 = 10.0;
pub const DEFAULT_SEARCH_RADIUS: f64 = 1.0;
pub const DEFAULT_GOLDHUNT_WORKERS: usize = 4;

// Records save format
pub const RECORDS_VERSION_MAGIC: u64 = 0x5741_5247_414d_4531; // "WARGAME1"
