//! Monster turn engine constants (from Angband's monster/melee2.c and
//! monster/mon-util.h)

/// Maximum sight range, in grid cells.
pub const MAX_SIGHT: i32 = 20;

/// Maximum range any spell/projection can reach.
pub const MAX_RANGE: i32 = 20;

/// Cost ceiling the flow field is considered meaningful out to.
pub const MONSTER_FLOW_DEPTH: i32 = 32;

/// Denominator used when deciding whether a pack monster multiplies:
/// chance is `1 / (adjacent_count * MON_MULT_ADJ)`.
pub const MON_MULT_ADJ: u32 = 3;

/// Hard cap on how many times a single monster may multiply per level.
pub const MAX_REPRO: u16 = 100;

/// Divisor for the per-call chance a monster breaks a glyph of warding:
/// probability is `race.level / BREAK_GLYPH` in 1.
pub const BREAK_GLYPH: i32 = 550;

/// Maximum number of blows in a single race's attack routine.
pub const MONSTER_BLOW_MAX: usize = 4;

/// Experience-drain scaling factor: a drain blow's base amount is
/// topped up by `(player.exp / 100) * MON_DRAIN_LIFE`.
pub const MON_DRAIN_LIFE: i64 = 2;
