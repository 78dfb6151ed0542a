//! Scoring module - line bonuses, leveling and gravity speed
//!
//! Rules:
//! - Each cleared line is worth a flat configurable bonus (no level
//!   multiplier, matching the reference behavior).
//! - Level starts at 1 and increases by one for every `lines_per_level`
//!   cleared lines.
//! - The drop interval shrinks linearly with level and is floor-bounded:
//!   `max(min_drop_ms, base_drop_ms - drop_step_ms * (level - 1))`.

/// Score for clearing `lines` rows in a single lock.
pub fn line_clear_score(lines: usize, line_bonus: u32) -> u32 {
    line_bonus.saturating_mul(lines as u32)
}

/// Level derived from the total cleared-line count (1-based).
pub fn level_for_lines(total_lines: u32, lines_per_level: u32) -> u32 {
    if lines_per_level == 0 {
        return 1;
    }
    1 + total_lines / lines_per_level
}

/// Gravity interval for a level, in milliseconds. Monotonically
/// non-increasing in `level`, never below `min_drop_ms`.
pub fn drop_interval_ms(level: u32, base_drop_ms: u32, drop_step_ms: u32, min_drop_ms: u32) -> u32 {
    base_drop_ms
        .saturating_sub(drop_step_ms.saturating_mul(level.saturating_sub(1)))
        .max(min_drop_ms)
}
