//! Line clearing - simultaneous row and column removal
//!
//! Full rows and full columns are found in one scan and then emptied
//! together. Nothing shifts afterwards. A cell at the crossing of a full row
//! and a full column is emptied once but both lines count toward scoring.

use arrayvec::ArrayVec;
use serde::Serialize;

use crate::board::Board;
use crate::types::BOARD_SIZE;

/// Indices of the rows and columns removed by one clear
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ClearResult {
    pub rows: ArrayVec<u8, BOARD_SIZE>,
    pub cols: ArrayVec<u8, BOARD_SIZE>,
}

impl ClearResult {
    /// Rows plus columns. An intersection counts twice.
    pub fn line_count(&self) -> u32 {
        (self.rows.len() + self.cols.len()) as u32
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() && self.cols.is_empty()
    }
}

/// Find every full row and column without touching the board
pub fn find_full_lines(board: &Board) -> ClearResult {
    let mut result = ClearResult::default();
    for i in 0..BOARD_SIZE {
        if board.is_row_full(i) {
            result.rows.push(i as u8);
        }
        if board.is_col_full(i) {
            result.cols.push(i as u8);
        }
    }
    result
}

/// Clear every full row and column at once and report what was cleared
pub fn clear_lines(board: &mut Board) -> ClearResult {
    // Scan before clearing: emptying a row first would hide the columns it completed.
    let result = find_full_lines(board);
    for &row in &result.rows {
        board.clear_row(row as usize);
    }
    for &col in &result.cols {
        board.clear_col(col as usize);
    }
    result
}
