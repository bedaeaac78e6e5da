//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the rules of the block puzzle: what pieces look like,
//! where they may go, which lines clear, how turns score and which pieces
//! come next. It has **no** dependencies on UI, networking, storage or I/O:
//!
//! - **Deterministic**: the same bag state always yields the same pieces
//! - **Pure**: validation never mutates, and failed placements leave the board untouched
//! - **Bounded**: every operation is at most a scan of the 10x10 grid
//!
//! # Module Structure
//!
//! - [`pieces`]: static shape, color and dimension catalog for the 15 piece types
//! - [`board`]: 10x10 grid with placement validation and mutation
//! - [`lines`]: simultaneous row and column clearing
//! - [`scoring`]: placement points, line bonus and combo multiplier
//! - [`rng`]: 15-bag randomizer with storable state
//!
//! # Example
//!
//! ```
//! use block_puzzle_core::{clear_lines, Board, PieceBag, ScoringConfig};
//!
//! let mut bag = PieceBag::new(12345);
//! let mut board = Board::new();
//!
//! let piece = bag.draw();
//! let placement = board.try_place_piece(piece, 0, 0).unwrap();
//! let cleared = clear_lines(&mut board);
//!
//! let points = ScoringConfig::default().calculate_points(
//!     placement.cell_count(),
//!     cleared.line_count(),
//!     1,
//! );
//! assert!(points > 0);
//! ```

pub mod board;
pub mod lines;
pub mod pieces;
pub mod rng;
pub mod scoring;

pub use block_puzzle_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, BoardDecodeError, Placement, PlacementError};
pub use lines::{clear_lines, find_full_lines, ClearResult};
pub use pieces::{get_cell_count, get_color, get_dimensions, get_shape, PieceShape};
pub use rng::{BagStateError, PieceBag, PieceBagState};
pub use scoring::{calculate_points, get_combo_multiplier, ScoreBreakdown, ScoringConfig};
