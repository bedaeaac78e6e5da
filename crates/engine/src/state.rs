//! Game state - the aggregate persisted between requests
//!
//! A `GameState` is plain data. It is only ever advanced by
//! [`GameEngine::place_piece`](crate::GameEngine::place_piece), which borrows
//! the old state and returns a new one.

use crate::core::{Board, PieceBag};
use crate::types::{GameStatus, PieceType, HAND_SIZE};

/// The offered pieces. A slot is `None` once its piece has been played.
pub type Hand = [Option<PieceType>; HAND_SIZE];

/// Complete game state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) hand: Hand,
    pub(crate) bag: PieceBag,
    pub(crate) score: u64,
    /// Consecutive turns that cleared at least one line
    pub(crate) combo: u32,
    /// Number of successful placements so far
    pub(crate) turn: u32,
    pub(crate) status: GameStatus,
}

impl GameState {
    /// Start a game: empty board, zero score, first hand drawn from a fresh bag
    pub fn new(seed: u64) -> Self {
        let mut bag = PieceBag::new(seed);
        let hand = draw_hand(&mut bag);

        Self {
            board: Board::new(),
            hand,
            bag,
            score: 0,
            combo: 0,
            turn: 0,
            status: GameStatus::Playing,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn bag(&self) -> &PieceBag {
        &self.bag
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn combo(&self) -> u32 {
        self.combo
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status == GameStatus::Ended
    }

    /// Pieces still waiting in the hand, with their slot index
    pub fn hand_pieces(&self) -> impl Iterator<Item = (usize, PieceType)> + '_ {
        self.hand
            .iter()
            .enumerate()
            .filter_map(|(slot, piece)| piece.map(|p| (slot, p)))
    }

    /// Whether at least one piece in the hand fits somewhere on the board
    pub fn has_legal_move(&self) -> bool {
        self.hand_pieces()
            .any(|(_, piece)| self.board.can_place_piece_anywhere(piece))
    }

    /// Mutable board access for test setups
    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}

pub(crate) fn draw_hand(bag: &mut PieceBag) -> Hand {
    let mut hand = [None; HAND_SIZE];
    for slot in &mut hand {
        *slot = Some(bag.draw());
    }
    hand
}
