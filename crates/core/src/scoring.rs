//! Scoring module - points for cleared lines and the gravity speed-up
//!
//! A cleared line is worth one point per column. Every cleared line also
//! shortens the gravity interval, down to the configured floor.

use crate::rules::GameRules;

/// Points for clearing `lines` rows on a board `width` columns wide
pub fn line_clear_points(lines: u32, width: u8) -> u32 {
    lines.saturating_mul(width as u32)
}

/// Gravity interval after `total_lines` cleared lines
pub fn gravity_interval_ms(rules: &GameRules, total_lines: u32) -> u32 {
    rules
        .start_interval_ms
        .saturating_sub(rules.speedup_per_line_ms.saturating_mul(total_lines))
        .max(rules.min_interval_ms)
}
