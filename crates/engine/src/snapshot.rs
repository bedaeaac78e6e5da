//! Transport-ready snapshot of a [`GameState`]
//!
//! The snapshot uses only numbers, so any storage layer can hold it:
//!
//! - `board`: 100 cells row-major, `0` empty, otherwise a color id
//! - `hand`: 3 slots holding a piece id or `null`
//! - `bag`: unplayed piece ids of the current bag plus the shuffle state word
//!
//! Decoding validates everything and never repairs input.

use serde::{Deserialize, Serialize};

use crate::core::{Board, PieceBag, PieceBagState};
use crate::error::CorruptionError;
use crate::state::{GameState, Hand};
use crate::types::{GameStatus, PieceType, HAND_SIZE};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BagSnapshot {
    pub remaining: Vec<u8>,
    pub rng_state: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub board: Vec<u8>,
    pub hand: Vec<Option<u8>>,
    pub bag: BagSnapshot,
    pub score: u64,
    pub combo: u32,
    pub turn: u32,
    pub status: GameStatus,
}

fn piece_from_id(id: u8) -> Result<PieceType, CorruptionError> {
    PieceType::from_id(id).ok_or(CorruptionError::UnknownPiece(id))
}

impl GameState {
    pub fn snapshot(&self) -> GameSnapshot {
        let bag = self.bag.to_state();
        GameSnapshot {
            board: self.board.to_array().to_vec(),
            hand: self.hand.iter().map(|slot| slot.map(PieceType::id)).collect(),
            bag: BagSnapshot {
                remaining: bag.remaining.iter().map(|p| p.id()).collect(),
                rng_state: bag.rng_state,
            },
            score: self.score,
            combo: self.combo,
            turn: self.turn,
            status: self.status,
        }
    }

    /// Rebuild a game from a snapshot, rejecting anything structurally invalid
    pub fn from_snapshot(snapshot: &GameSnapshot) -> Result<Self, CorruptionError> {
        let board = Board::from_array(&snapshot.board)?;

        if snapshot.hand.len() != HAND_SIZE {
            return Err(CorruptionError::HandSize(snapshot.hand.len()));
        }
        let mut hand: Hand = [None; HAND_SIZE];
        for (dst, slot) in hand.iter_mut().zip(&snapshot.hand) {
            *dst = slot.map(piece_from_id).transpose()?;
        }

        let remaining = snapshot
            .bag
            .remaining
            .iter()
            .map(|&id| piece_from_id(id))
            .collect::<Result<Vec<_>, _>>()?;
        let bag = PieceBag::from_state(&PieceBagState {
            remaining,
            rng_state: snapshot.bag.rng_state,
        })?;

        if snapshot.status.is_playing() && hand.iter().all(Option::is_none) {
            return Err(CorruptionError::EmptyHand);
        }

        Ok(Self {
            board,
            hand,
            bag,
            score: snapshot.score,
            combo: snapshot.combo,
            turn: snapshot.turn,
            status: snapshot.status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::BoardDecodeError;
    use crate::types::PieceColor;

    #[test]
    fn snapshot_round_trip_is_exact() {
        let mut state = GameState::new(42);
        state.board_mut().set(3, 4, Some(PieceColor::Teal));
        state.hand[1] = None;
        state.score = 1234;
        state.combo = 2;
        state.turn = 9;

        let snap = state.snapshot();
        assert_eq!(snap.board.len(), 100);
        assert_eq!(snap.board[34], PieceColor::Teal.id());
        assert_eq!(snap.hand[1], None);

        let restored = GameState::from_snapshot(&snap).unwrap();
        assert_eq!(restored, state);
    }

    #[test]
    fn rejects_short_board() {
        let mut snap = GameState::new(1).snapshot();
        snap.board.pop();
        assert_eq!(
            GameState::from_snapshot(&snap),
            Err(CorruptionError::Board(BoardDecodeError::WrongLength(99)))
        );
    }

    #[test]
    fn rejects_unknown_piece_in_hand() {
        let mut snap = GameState::new(1).snapshot();
        snap.hand[0] = Some(15);
        assert_eq!(
            GameState::from_snapshot(&snap),
            Err(CorruptionError::UnknownPiece(15))
        );
    }

    #[test]
    fn rejects_wrong_hand_size() {
        let mut snap = GameState::new(1).snapshot();
        snap.hand.push(None);
        assert_eq!(
            GameState::from_snapshot(&snap),
            Err(CorruptionError::HandSize(4))
        );
    }

    #[test]
    fn rejects_playing_game_with_empty_hand() {
        let mut snap = GameState::new(1).snapshot();
        snap.hand = vec![None; HAND_SIZE];
        assert_eq!(GameState::from_snapshot(&snap), Err(CorruptionError::EmptyHand));

        // An ended game may legitimately have nothing left to play.
        snap.status = GameStatus::Ended;
        assert!(GameState::from_snapshot(&snap).is_ok());
    }

    #[test]
    fn rejects_duplicate_bag_entries() {
        let mut snap = GameState::new(1).snapshot();
        let first = snap.bag.remaining[0];
        snap.bag.remaining.push(first);
        assert!(matches!(
            GameState::from_snapshot(&snap),
            Err(CorruptionError::Bag(_))
        ));
    }

    #[test]
    fn snapshot_json_shape() {
        let snap = GameState::new(3).snapshot();
        let value = serde_json::to_value(&snap).unwrap();
        assert_eq!(value["status"], "playing");
        assert_eq!(value["board"].as_array().unwrap().len(), 100);
        assert_eq!(value["hand"].as_array().unwrap().len(), 3);

        let back: GameSnapshot = serde_json::from_value(value).unwrap();
        assert_eq!(back, snap);
    }

    #[test]
    fn missing_field_is_not_filled_in() {
        let mut value = serde_json::to_value(GameState::new(3).snapshot()).unwrap();
        value.as_object_mut().unwrap().remove("turn");
        assert!(serde_json::from_value::<GameSnapshot>(value).is_err());
    }
}
