//! Environment-driven configuration for the command layer

use tracing::warn;

use crate::core::ScoringConfig;
use crate::engine::{EngineConfig, RefillPolicy};

pub const ENV_REFILL: &str = "BLOCK_PUZZLE_REFILL";
pub const ENV_POINTS_PER_CELL: &str = "BLOCK_PUZZLE_POINTS_PER_CELL";
pub const ENV_LINE_BASE: &str = "BLOCK_PUZZLE_LINE_BASE";
pub const ENV_MAX_COMBO: &str = "BLOCK_PUZZLE_MAX_COMBO";
pub const ENV_DEFAULT_SEED: &str = "BLOCK_PUZZLE_DEFAULT_SEED";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdapterConfig {
    pub engine: EngineConfig,
    /// Seed for `new_game` requests that omit one. `None` seeds from the clock.
    pub default_seed: Option<u64>,
}

impl AdapterConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unparseable values fall back to
    /// the defaults with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let defaults = ScoringConfig::default();
        let scoring = ScoringConfig {
            points_per_cell: parse_or(ENV_POINTS_PER_CELL, get(ENV_POINTS_PER_CELL), defaults.points_per_cell),
            line_base: parse_or(ENV_LINE_BASE, get(ENV_LINE_BASE), defaults.line_base),
            max_combo_multiplier: parse_or(
                ENV_MAX_COMBO,
                get(ENV_MAX_COMBO),
                defaults.max_combo_multiplier,
            ),
        };

        let refill = match get(ENV_REFILL) {
            None => RefillPolicy::default(),
            Some(raw) => RefillPolicy::from_str(&raw).unwrap_or_else(|| {
                warn!(key = ENV_REFILL, value = %raw, "unknown refill policy, using default");
                RefillPolicy::default()
            }),
        };

        let default_seed = get(ENV_DEFAULT_SEED).and_then(|raw| match raw.parse() {
            Ok(seed) => Some(seed),
            Err(_) => {
                warn!(key = ENV_DEFAULT_SEED, value = %raw, "ignoring unparseable seed");
                None
            }
        });

        Self {
            engine: EngineConfig { scoring, refill },
            default_seed,
        }
    }
}

fn parse_or<T: std::str::FromStr + Copy>(key: &str, raw: Option<String>, default: T) -> T {
    match raw {
        None => default,
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            warn!(key, value = %raw, "ignoring unparseable value");
            default
        }),
    }
}
