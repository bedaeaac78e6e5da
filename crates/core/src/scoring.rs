//! Scoring module - placement points, line bonus and combo multiplier
//!
//! All functions are pure so a caller can re-derive the points of any turn
//! from its inputs alone:
//!
//! ```text
//! points = placement_points(cells) + line_bonus(lines) * multiplier
//! ```
//!
//! The numeric tables are tuning, not rules, and live in [`ScoringConfig`].

use serde::{Deserialize, Serialize};

/// Default points awarded per placed cell
pub const DEFAULT_POINTS_PER_CELL: u32 = 1;

/// Default line bonus base (1 line = 10, 2 = 30, 3 = 60, 4 = 100, ...)
pub const DEFAULT_LINE_BASE: u32 = 10;

/// Default cap on the combo multiplier
pub const DEFAULT_MAX_COMBO_MULTIPLIER: u32 = 8;

/// Tunable scoring constants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub points_per_cell: u32,
    pub line_base: u32,
    pub max_combo_multiplier: u32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            points_per_cell: DEFAULT_POINTS_PER_CELL,
            line_base: DEFAULT_LINE_BASE,
            max_combo_multiplier: DEFAULT_MAX_COMBO_MULTIPLIER,
        }
    }
}

/// Per-turn score breakdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub placement: u32,
    /// Line bonus after the combo multiplier was applied
    pub line_bonus: u32,
    pub multiplier: u32,
    pub total: u32,
}

impl ScoringConfig {
    /// Points for placing `cells` cells
    pub fn placement_points(&self, cells: u32) -> u32 {
        cells.saturating_mul(self.points_per_cell)
    }

    /// Bonus for clearing `lines` lines at once: `line_base * n(n+1)/2`
    pub fn line_bonus(&self, lines: u32) -> u32 {
        let triangle = lines.saturating_mul(lines.saturating_add(1)) / 2;
        triangle.saturating_mul(self.line_base)
    }

    /// Multiplier for a streak of consecutive clearing turns.
    ///
    /// A streak of 0 or 1 gives the base value 1; it then grows by one per
    /// turn up to `max_combo_multiplier`.
    pub fn combo_multiplier(&self, streak: u32) -> u32 {
        streak.clamp(1, self.max_combo_multiplier.max(1))
    }

    /// Total points for one turn
    pub fn calculate_points(&self, cells: u32, lines: u32, multiplier: u32) -> u32 {
        self.score_turn(cells, lines, multiplier).total
    }

    /// Total points for one turn, itemized
    pub fn score_turn(&self, cells: u32, lines: u32, multiplier: u32) -> ScoreBreakdown {
        let placement = self.placement_points(cells);
        let line_bonus = self.line_bonus(lines).saturating_mul(multiplier);
        ScoreBreakdown {
            placement,
            line_bonus,
            multiplier,
            total: placement.saturating_add(line_bonus),
        }
    }
}

/// [`ScoringConfig::calculate_points`] with the default tables
pub fn calculate_points(cells: u32, lines: u32, multiplier: u32) -> u32 {
    ScoringConfig::default().calculate_points(cells, lines, multiplier)
}

/// [`ScoringConfig::combo_multiplier`] with the default cap
pub fn get_combo_multiplier(streak: u32) -> u32 {
    ScoringConfig::default().combo_multiplier(streak)
}
