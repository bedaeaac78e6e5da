//! RNG module - 15-bag random piece generation
//!
//! Generalizes the "7-bag" randomizer to all fifteen piece types.
//! Each bag contains one of each piece, shuffled. Pieces are drawn from the
//! front until the bag is empty, then a new bag is shuffled.
//!
//! The generator is rebuilt from storage on every request, so its whole
//! state is two things: the unplayed remainder of the current bag and a
//! 64-bit state word. Each refill seeds a PCG generator from the state word,
//! shuffles, and draws the next state word from the same generator. Equal
//! states therefore always produce equal futures.

use rand::seq::SliceRandom;
use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg64;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{PieceType, PIECE_TYPE_COUNT};

/// Flat, storable form of a [`PieceBag`]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PieceBagState {
    /// Unplayed pieces of the current bag, next piece first
    pub remaining: Vec<PieceType>,
    /// Seed for the next bag shuffle
    pub rng_state: u64,
}

/// Why a stored bag state was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BagStateError {
    #[error("bag holds {0} pieces, at most {max} allowed", max = PIECE_TYPE_COUNT)]
    TooManyPieces(usize),
    #[error("piece {0} appears twice in one bag")]
    DuplicatePiece(PieceType),
}

/// Shuffle a fresh bag from `state`, returning the bag and the next state word
fn shuffle_bag(state: u64) -> ([PieceType; PIECE_TYPE_COUNT], u64) {
    let mut rng = Pcg64::seed_from_u64(state);
    let mut bag = PieceType::ALL;
    bag.shuffle(&mut rng);
    (bag, rng.next_u64())
}

/// 15-bag piece generator
#[derive(Debug, Clone)]
pub struct PieceBag {
    /// Current bag of pieces
    bag: [PieceType; PIECE_TYPE_COUNT],
    /// Index of the next piece in `bag`
    bag_index: usize,
    /// Seed for the next refill
    rng_state: u64,
}

impl PieceBag {
    /// Create a new generator and shuffle its first bag
    pub fn new(seed: u64) -> Self {
        let mut queue = Self {
            bag: PieceType::ALL,
            bag_index: PIECE_TYPE_COUNT,
            rng_state: seed,
        };
        queue.refill_bag();
        queue
    }

    /// Generate a new shuffled bag
    fn refill_bag(&mut self) {
        let (bag, next_state) = shuffle_bag(self.rng_state);
        self.bag = bag;
        self.bag_index = 0;
        self.rng_state = next_state;
    }

    /// Draw the next piece, starting a new bag when the current one is empty
    pub fn draw(&mut self) -> PieceType {
        if self.bag_index >= PIECE_TYPE_COUNT {
            self.refill_bag();
        }

        let piece = self.bag[self.bag_index];
        self.bag_index += 1;
        piece
    }

    /// Consume and return the next `n` pieces, crossing bag boundaries as needed
    pub fn next_pieces(&mut self, n: usize) -> Vec<PieceType> {
        (0..n).map(|_| self.draw()).collect()
    }

    /// The next `n` pieces [`PieceBag::next_pieces`] would return, without consuming them
    pub fn peek_next_pieces(&self, n: usize) -> Vec<PieceType> {
        self.clone().next_pieces(n)
    }

    /// Pieces left in the current bag, next first
    pub fn remaining(&self) -> &[PieceType] {
        &self.bag[self.bag_index..]
    }

    /// Export the generator for storage
    pub fn to_state(&self) -> PieceBagState {
        PieceBagState {
            remaining: self.remaining().to_vec(),
            rng_state: self.rng_state,
        }
    }

    /// Rebuild a generator from [`PieceBag::to_state`] output.
    ///
    /// `remaining` must be a duplicate-free subset of the piece types, since
    /// anything else could never come out of a real bag.
    pub fn from_state(state: &PieceBagState) -> Result<Self, BagStateError> {
        let len = state.remaining.len();
        if len > PIECE_TYPE_COUNT {
            return Err(BagStateError::TooManyPieces(len));
        }

        let mut seen = [false; PIECE_TYPE_COUNT];
        for &piece in &state.remaining {
            let slot = &mut seen[piece.id() as usize];
            if *slot {
                return Err(BagStateError::DuplicatePiece(piece));
            }
            *slot = true;
        }

        // Already-drawn pieces fill the consumed prefix; only the suffix is ever read.
        let bag_index = PIECE_TYPE_COUNT - len;
        let mut bag = PieceType::ALL;
        let drawn = PieceType::ALL.into_iter().filter(|p| !seen[p.id() as usize]);
        for (dst, piece) in bag.iter_mut().zip(drawn.chain(state.remaining.iter().copied())) {
            *dst = piece;
        }

        Ok(Self {
            bag,
            bag_index,
            rng_state: state.rng_state,
        })
    }
}

/// Two bags are equal when they will deal the same future: same unplayed
/// pieces and same state word. The consumed prefix is not compared.
impl PartialEq for PieceBag {
    fn eq(&self, other: &Self) -> bool {
        self.remaining() == other.remaining() && self.rng_state == other.rng_state
    }
}

impl Eq for PieceBag {}

impl Default for PieceBag {
    fn default() -> Self {
        Self::new(1)
    }
}
