//! Engine error taxonomy
//!
//! | Error | Class | State |
//! |-------|-------|-------|
//! | [`EngineError::Validation`] | recoverable, reported | unchanged |
//! | [`EngineError::IllegalTransition`] | recoverable, reported | unchanged |
//! | [`EngineError::StateCorruption`] | fatal, never retried | no state produced |

use thiserror::Error;

use crate::core::{BagStateError, BoardDecodeError, PlacementError};
use crate::types::HAND_SIZE;

/// A turn request that cannot be applied to an otherwise valid game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("piece index {0} is outside the hand (0..{size})", size = HAND_SIZE)]
    PieceIndexOutOfRange(i32),
    #[error("hand slot {0} has already been played")]
    EmptySlot(usize),
    #[error(transparent)]
    Placement(#[from] PlacementError),
}

/// A persisted snapshot that no sequence of legal turns could have produced
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CorruptionError {
    #[error("board: {0}")]
    Board(#[from] BoardDecodeError),
    #[error("bag: {0}")]
    Bag(#[from] BagStateError),
    #[error("hand has {0} slots, expected {size}", size = HAND_SIZE)]
    HandSize(usize),
    #[error("unknown piece id {0}")]
    UnknownPiece(u8),
    #[error("game is playing but every hand slot is empty")]
    EmptyHand,
    #[error("malformed snapshot: {0}")]
    Malformed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("invalid move: {0}")]
    Validation(#[from] ValidationError),
    #[error("game has already ended")]
    IllegalTransition,
    #[error("corrupt game state: {0}")]
    StateCorruption(#[from] CorruptionError),
}

impl EngineError {
    /// Whether the caller may report the error and keep using its stored state
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, EngineError::StateCorruption(_))
    }

    /// Stable machine-readable error code
    pub fn code(&self) -> &'static str {
        match self {
            EngineError::Validation(_) => "validation_failed",
            EngineError::IllegalTransition => "game_ended",
            EngineError::StateCorruption(_) => "state_corrupt",
        }
    }
}

impl From<PlacementError> for EngineError {
    fn from(value: PlacementError) -> Self {
        EngineError::Validation(value.into())
    }
}
