//! Shared types and constants for the block puzzle engine.
//!
//! Everything here is plain data: piece kinds, display colors, grid cells and
//! coordinates. The crates above (`core`, `engine`, `adapter`) build on these
//! without any crate pulling in a UI, storage or network dependency.
//!
//! # Grid
//!
//! The playfield is a square 10x10 grid addressed as `(row, col)`, with
//! `(0, 0)` in the top-left corner. A piece is placed by its *anchor*, the
//! top-left cell of its bounding box.
//!
//! # Wire ids
//!
//! | Value | Encoding |
//! |-------|----------|
//! | `PieceType::id()` | `0..15`, declaration order |
//! | `PieceColor::id()` | `1..=15`, `0` is reserved for an empty cell |
//!
//! # Examples
//!
//! ```
//! use block_puzzle_types::{PieceType, BOARD_SIZE, HAND_SIZE};
//!
//! let piece = PieceType::from_str("line5").unwrap();
//! assert_eq!(piece, PieceType::Line5);
//! assert_eq!(PieceType::from_id(piece.id()), Some(piece));
//!
//! assert_eq!(BOARD_SIZE, 10);
//! assert_eq!(HAND_SIZE, 3);
//! ```

use serde::{Deserialize, Serialize};

/// Board width and height in cells
pub const BOARD_SIZE: usize = 10;

/// Total number of cells on the board
pub const BOARD_CELLS: usize = BOARD_SIZE * BOARD_SIZE;

/// Number of pieces offered to the player at once
pub const HAND_SIZE: usize = 3;

/// Number of distinct piece types (and the size of one bag)
pub const PIECE_TYPE_COUNT: usize = 15;

/// The fifteen placeable piece types
///
/// Seven tetrominoes (the `O` piece doubles as the 2x2 square) plus eight
/// extended shapes. Pieces never rotate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PieceType {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
    Dot,
    Line2,
    Line3,
    Line5,
    Corner,
    BigCorner,
    Square3,
    Rect2x3,
}

impl PieceType {
    /// Every piece type in declaration (id) order
    pub const ALL: [PieceType; PIECE_TYPE_COUNT] = [
        PieceType::I,
        PieceType::O,
        PieceType::T,
        PieceType::S,
        PieceType::Z,
        PieceType::J,
        PieceType::L,
        PieceType::Dot,
        PieceType::Line2,
        PieceType::Line3,
        PieceType::Line5,
        PieceType::Corner,
        PieceType::BigCorner,
        PieceType::Square3,
        PieceType::Rect2x3,
    ];

    /// Stable numeric id used by the flat snapshot encoding
    pub fn id(self) -> u8 {
        match self {
            PieceType::I => 0,
            PieceType::O => 1,
            PieceType::T => 2,
            PieceType::S => 3,
            PieceType::Z => 4,
            PieceType::J => 5,
            PieceType::L => 6,
            PieceType::Dot => 7,
            PieceType::Line2 => 8,
            PieceType::Line3 => 9,
            PieceType::Line5 => 10,
            PieceType::Corner => 11,
            PieceType::BigCorner => 12,
            PieceType::Square3 => 13,
            PieceType::Rect2x3 => 14,
        }
    }

    /// Inverse of [`PieceType::id`]. Returns `None` for unknown ids.
    pub fn from_id(id: u8) -> Option<Self> {
        Self::ALL.get(id as usize).copied()
    }

    /// Parse piece type from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use block_puzzle_types::PieceType;
    ///
    /// assert_eq!(PieceType::from_str("t"), Some(PieceType::T));
    /// assert_eq!(PieceType::from_str("Big_Corner"), Some(PieceType::BigCorner));
    /// assert_eq!(PieceType::from_str("hexomino"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        let lower = s.to_lowercase();
        Self::ALL.into_iter().find(|p| p.as_str() == lower)
    }

    /// Convert to lowercase string representation
    pub fn as_str(self) -> &'static str {
        match self {
            PieceType::I => "i",
            PieceType::O => "o",
            PieceType::T => "t",
            PieceType::S => "s",
            PieceType::Z => "z",
            PieceType::J => "j",
            PieceType::L => "l",
            PieceType::Dot => "dot",
            PieceType::Line2 => "line2",
            PieceType::Line3 => "line3",
            PieceType::Line5 => "line5",
            PieceType::Corner => "corner",
            PieceType::BigCorner => "big_corner",
            PieceType::Square3 => "square3",
            PieceType::Rect2x3 => "rect2x3",
        }
    }
}

impl std::fmt::Display for PieceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display color tag stored in filled board cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PieceColor {
    Cyan,
    Yellow,
    Purple,
    Green,
    Red,
    Blue,
    Orange,
    Gray,
    Teal,
    Lime,
    Navy,
    Pink,
    Magenta,
    Brown,
    Gold,
}

impl PieceColor {
    /// Non-zero id used by the flat grid encoding
    pub fn id(self) -> u8 {
        match self {
            PieceColor::Cyan => 1,
            PieceColor::Yellow => 2,
            PieceColor::Purple => 3,
            PieceColor::Green => 4,
            PieceColor::Red => 5,
            PieceColor::Blue => 6,
            PieceColor::Orange => 7,
            PieceColor::Gray => 8,
            PieceColor::Teal => 9,
            PieceColor::Lime => 10,
            PieceColor::Navy => 11,
            PieceColor::Pink => 12,
            PieceColor::Magenta => 13,
            PieceColor::Brown => 14,
            PieceColor::Gold => 15,
        }
    }

    /// Inverse of [`PieceColor::id`]. `0` (empty) and unknown ids give `None`.
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(PieceColor::Cyan),
            2 => Some(PieceColor::Yellow),
            3 => Some(PieceColor::Purple),
            4 => Some(PieceColor::Green),
            5 => Some(PieceColor::Red),
            6 => Some(PieceColor::Blue),
            7 => Some(PieceColor::Orange),
            8 => Some(PieceColor::Gray),
            9 => Some(PieceColor::Teal),
            10 => Some(PieceColor::Lime),
            11 => Some(PieceColor::Navy),
            12 => Some(PieceColor::Pink),
            13 => Some(PieceColor::Magenta),
            14 => Some(PieceColor::Brown),
            15 => Some(PieceColor::Gold),
            _ => None,
        }
    }
}

/// A cell on the board
///
/// - `None`: empty
/// - `Some(color)`: filled by a piece of that color
pub type Cell = Option<PieceColor>;

/// A cell coordinate on the board (always in bounds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Flat row-major index into a `BOARD_CELLS` array
    #[inline]
    pub fn index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }
}

/// Lifecycle status of a game
///
/// The only transition is `Playing -> Ended`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    #[default]
    Playing,
    Ended,
}

impl GameStatus {
    pub fn is_playing(self) -> bool {
        matches!(self, GameStatus::Playing)
    }
}
