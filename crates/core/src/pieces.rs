//! Pieces module - static shape and color catalog
//!
//! Every piece type maps to one fixed bounding-box pattern. Pieces do not
//! rotate, so each type has exactly one shape. Patterns are written as row
//! literals where `#` is a filled cell and `.` is empty.

use crate::types::{PieceColor, PieceType};

/// Immutable shape of a piece: a rectangular boolean matrix plus its color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceShape {
    pattern: &'static [&'static str],
    color: PieceColor,
}

impl PieceShape {
    /// Number of rows in the bounding box
    pub fn rows(&self) -> u8 {
        self.pattern.len() as u8
    }

    /// Number of columns in the bounding box
    pub fn cols(&self) -> u8 {
        self.pattern[0].len() as u8
    }

    /// Display color tag for cells filled by this piece
    pub fn color(&self) -> PieceColor {
        self.color
    }

    /// Whether the bounding-box cell `(row, col)` is part of the piece.
    /// Cells outside the bounding box are never filled.
    pub fn is_filled(&self, row: u8, col: u8) -> bool {
        self.pattern
            .get(row as usize)
            .and_then(|line| line.as_bytes().get(col as usize))
            .is_some_and(|&b| b == b'#')
    }

    /// Offsets `(dr, dc)` of every filled cell, row-major
    pub fn filled_offsets(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        self.pattern.iter().enumerate().flat_map(|(r, line)| {
            line.bytes()
                .enumerate()
                .filter(|&(_, b)| b == b'#')
                .map(move |(c, _)| (r as u8, c as u8))
        })
    }

    /// Number of filled cells
    pub fn cell_count(&self) -> u32 {
        self.filled_offsets().count() as u32
    }
}

const fn shape(pattern: &'static [&'static str], color: PieceColor) -> PieceShape {
    PieceShape { pattern, color }
}

const I_SHAPE: PieceShape = shape(&["####"], PieceColor::Cyan);
const O_SHAPE: PieceShape = shape(&["##", "##"], PieceColor::Yellow);
const T_SHAPE: PieceShape = shape(&["###", ".#."], PieceColor::Purple);
const S_SHAPE: PieceShape = shape(&[".##", "##."], PieceColor::Green);
const Z_SHAPE: PieceShape = shape(&["##.", ".##"], PieceColor::Red);
const J_SHAPE: PieceShape = shape(&["#..", "###"], PieceColor::Blue);
const L_SHAPE: PieceShape = shape(&["..#", "###"], PieceColor::Orange);
const DOT_SHAPE: PieceShape = shape(&["#"], PieceColor::Gray);
const LINE2_SHAPE: PieceShape = shape(&["##"], PieceColor::Teal);
const LINE3_SHAPE: PieceShape = shape(&["###"], PieceColor::Lime);
const LINE5_SHAPE: PieceShape = shape(&["#####"], PieceColor::Navy);
const CORNER_SHAPE: PieceShape = shape(&["#.", "##"], PieceColor::Pink);
const BIG_CORNER_SHAPE: PieceShape = shape(&["#..", "#..", "###"], PieceColor::Magenta);
const SQUARE3_SHAPE: PieceShape = shape(&["###", "###", "###"], PieceColor::Brown);
const RECT2X3_SHAPE: PieceShape = shape(&["###", "###"], PieceColor::Gold);

/// Get the shape for a piece type
pub fn get_shape(kind: PieceType) -> &'static PieceShape {
    match kind {
        PieceType::I => &I_SHAPE,
        PieceType::O => &O_SHAPE,
        PieceType::T => &T_SHAPE,
        PieceType::S => &S_SHAPE,
        PieceType::Z => &Z_SHAPE,
        PieceType::J => &J_SHAPE,
        PieceType::L => &L_SHAPE,
        PieceType::Dot => &DOT_SHAPE,
        PieceType::Line2 => &LINE2_SHAPE,
        PieceType::Line3 => &LINE3_SHAPE,
        PieceType::Line5 => &LINE5_SHAPE,
        PieceType::Corner => &CORNER_SHAPE,
        PieceType::BigCorner => &BIG_CORNER_SHAPE,
        PieceType::Square3 => &SQUARE3_SHAPE,
        PieceType::Rect2x3 => &RECT2X3_SHAPE,
    }
}

/// Get the display color for a piece type
pub fn get_color(kind: PieceType) -> PieceColor {
    get_shape(kind).color()
}

/// Bounding-box dimensions as `(rows, cols)`
pub fn get_dimensions(kind: PieceType) -> (u8, u8) {
    let shape = get_shape(kind);
    (shape.rows(), shape.cols())
}

/// Number of filled cells in the piece
pub fn get_cell_count(kind: PieceType) -> u32 {
    get_shape(kind).cell_count()
}
