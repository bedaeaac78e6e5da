//! Board module - manages the placement grid
//!
//! The board is a 10x10 grid where each cell is empty or filled with a piece color.
//! Uses a flat array for cache locality and zero-allocation validation.
//! Coordinates: (row, col), both 0..9, row 0 at the top.
//!
//! Request coordinates are `i32` so that negative or overlarge anchors can be
//! expressed and rejected. They are never clamped into range.

use std::fmt;

use arrayvec::ArrayVec;
use thiserror::Error;

use crate::pieces::get_shape;
use crate::types::{Cell, PieceColor, PieceType, Position, BOARD_CELLS, BOARD_SIZE};

/// Largest number of cells a single piece can fill (3x3 square)
pub const MAX_PIECE_CELLS: usize = 9;

/// Why a placement was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlacementError {
    #[error("cell ({row}, {col}) is outside the board")]
    OutOfBounds { row: i32, col: i32 },
    #[error("cell ({row}, {col}) is already filled")]
    Occupied { row: i32, col: i32 },
}

/// Why a flat grid could not be decoded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoardDecodeError {
    #[error("grid has {0} cells, expected {expected}", expected = BOARD_CELLS)]
    WrongLength(usize),
    #[error("unknown color id {value} at index {index}")]
    UnknownColor { index: usize, value: u8 },
}

/// Cells filled by one successful placement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub piece: PieceType,
    pub cells: ArrayVec<Position, MAX_PIECE_CELLS>,
}

impl Placement {
    pub fn cell_count(&self) -> u32 {
        self.cells.len() as u32
    }
}

/// The game board - 10 x 10 cells using flat array storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    /// Flat array of cells, row-major order (row * SIZE + col)
    cells: [Cell; BOARD_CELLS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_CELLS],
        }
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(row: i32, col: i32) -> Option<usize> {
        if !Self::is_in_bounds(row, col) {
            return None;
        }
        Some(row as usize * BOARD_SIZE + col as usize)
    }

    /// True iff both coordinates are in `[0, 10)`
    #[inline]
    pub fn is_in_bounds(row: i32, col: i32) -> bool {
        (0..BOARD_SIZE as i32).contains(&row) && (0..BOARD_SIZE as i32).contains(&col)
    }

    /// Get cell at (row, col). Returns None if out of bounds.
    pub fn get(&self, row: i32, col: i32) -> Option<Cell> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at (row, col). Returns false if out of bounds.
    pub fn set(&mut self, row: i32, col: i32, cell: Cell) -> bool {
        match Self::index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and empty
    pub fn is_empty_at(&self, row: i32, col: i32) -> bool {
        matches!(self.get(row, col), Some(None))
    }

    /// Check if position is within bounds and filled
    pub fn is_occupied(&self, row: i32, col: i32) -> bool {
        matches!(self.get(row, col), Some(Some(_)))
    }

    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= BOARD_SIZE {
            return false;
        }
        let start = row * BOARD_SIZE;
        self.cells[start..start + BOARD_SIZE]
            .iter()
            .all(|cell| cell.is_some())
    }

    pub fn is_col_full(&self, col: usize) -> bool {
        if col >= BOARD_SIZE {
            return false;
        }
        (0..BOARD_SIZE).all(|row| self.cells[row * BOARD_SIZE + col].is_some())
    }

    /// Empty a whole row without shifting anything
    pub fn clear_row(&mut self, row: usize) {
        if row >= BOARD_SIZE {
            return;
        }
        let start = row * BOARD_SIZE;
        for cell in &mut self.cells[start..start + BOARD_SIZE] {
            *cell = None;
        }
    }

    /// Empty a whole column without shifting anything
    pub fn clear_col(&mut self, col: usize) {
        if col >= BOARD_SIZE {
            return;
        }
        for row in 0..BOARD_SIZE {
            self.cells[row * BOARD_SIZE + col] = None;
        }
    }

    /// Validate a placement, reporting the first violating cell
    pub fn check_placement(&self, piece: PieceType, row: i32, col: i32) -> Result<(), PlacementError> {
        for (dr, dc) in get_shape(piece).filled_offsets() {
            let r = row.saturating_add(dr as i32);
            let c = col.saturating_add(dc as i32);
            match self.get(r, c) {
                None => return Err(PlacementError::OutOfBounds { row: r, col: c }),
                Some(Some(_)) => return Err(PlacementError::Occupied { row: r, col: c }),
                Some(None) => {}
            }
        }
        Ok(())
    }

    /// Whether `piece` fits with its anchor at (row, col). Never mutates.
    pub fn can_place_piece(&self, piece: PieceType, row: i32, col: i32) -> bool {
        self.check_placement(piece, row, col).is_ok()
    }

    /// Place a piece, filling its cells with the piece color.
    ///
    /// Validation happens before any write, so on error the board is unchanged.
    pub fn try_place_piece(
        &mut self,
        piece: PieceType,
        row: i32,
        col: i32,
    ) -> Result<Placement, PlacementError> {
        self.check_placement(piece, row, col)?;

        let shape = get_shape(piece);
        let mut cells = ArrayVec::new();
        for (dr, dc) in shape.filled_offsets() {
            let pos = Position::new(row as u8 + dr, col as u8 + dc);
            self.cells[pos.index()] = Some(shape.color());
            cells.push(pos);
        }

        Ok(Placement { piece, cells })
    }

    /// Whether some anchor on the board accepts `piece`
    pub fn can_place_piece_anywhere(&self, piece: PieceType) -> bool {
        self.anchors().any(|(r, c)| self.can_place_piece(piece, r, c))
    }

    /// Every legal anchor for `piece`, row-major
    pub fn valid_positions(&self, piece: PieceType) -> Vec<Position> {
        self.anchors()
            .filter(|&(r, c)| self.can_place_piece(piece, r, c))
            .map(|(r, c)| Position::new(r as u8, c as u8))
            .collect()
    }

    fn anchors(&self) -> impl Iterator<Item = (i32, i32)> {
        (0..BOARD_SIZE as i32).flat_map(|r| (0..BOARD_SIZE as i32).map(move |c| (r, c)))
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| c.is_none())
    }

    /// Flat row-major encoding: 0 = empty, otherwise the color id
    pub fn to_array(&self) -> [u8; BOARD_CELLS] {
        let mut out = [0u8; BOARD_CELLS];
        for (dst, cell) in out.iter_mut().zip(self.cells.iter()) {
            *dst = cell.map_or(0, PieceColor::id);
        }
        out
    }

    /// Decode the flat encoding produced by [`Board::to_array`]
    pub fn from_array(data: &[u8]) -> Result<Self, BoardDecodeError> {
        if data.len() != BOARD_CELLS {
            return Err(BoardDecodeError::WrongLength(data.len()));
        }
        let mut board = Self::new();
        for (index, &value) in data.iter().enumerate() {
            board.cells[index] = match value {
                0 => None,
                _ => Some(
                    PieceColor::from_id(value)
                        .ok_or(BoardDecodeError::UnknownColor { index, value })?,
                ),
            };
        }
        Ok(board)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(BOARD_SIZE) {
            for cell in row {
                f.write_str(if cell.is_some() { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
