//! Engine configuration
//!
//! Everything that changes play feel without changing the rules lives here
//! as plain values with defaults. Callers that load configuration from files
//! can deserialize these directly.

use serde::{Deserialize, Serialize};

use crate::core::ScoringConfig;

/// When the hand is refilled from the bag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefillPolicy {
    /// Draw three new pieces only after all three slots were played
    #[default]
    WholeHand,
    /// Refill the played slot immediately
    EachPiece,
}

impl RefillPolicy {
    /// Parse from a config string (`"hand"`/`"whole_hand"` or `"piece"`/`"each_piece"`)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "hand" | "whole_hand" => Some(RefillPolicy::WholeHand),
            "piece" | "each_piece" => Some(RefillPolicy::EachPiece),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub scoring: ScoringConfig,
    pub refill: RefillPolicy,
}
