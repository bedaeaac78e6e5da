use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::{EngineConfig, RefillPolicy};
use crate::core::{clear_lines, ScoreBreakdown};
use crate::error::{EngineError, ValidationError};
use crate::snapshot::GameSnapshot;
use crate::state::{draw_hand, GameState, Hand};
use crate::types::{GameStatus, PieceType, Position, HAND_SIZE};

/// One turn as sent by the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlaceRequest {
    pub piece_index: i32,
    pub row: i32,
    pub col: i32,
}

impl PlaceRequest {
    pub fn new(piece_index: i32, row: i32, col: i32) -> Self {
        Self {
            piece_index,
            row,
            col,
        }
    }
}

/// What happened during one successful turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnSummary {
    pub piece: PieceType,
    pub placed_cells: Vec<Position>,
    pub cleared_rows: Vec<u8>,
    pub cleared_cols: Vec<u8>,
    pub lines_cleared: u32,
    pub points_awarded: u32,
    pub breakdown: ScoreBreakdown,
    pub combo: u32,
    pub hand: Hand,
    pub game_over: bool,
}

/// Result of [`GameEngine::place_piece`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnOutcome {
    pub state: GameState,
    pub summary: TurnSummary,
}

/// Legal anchors for one hand slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandHint {
    pub slot: usize,
    pub piece: PieceType,
    pub positions: Vec<Position>,
}

/// Stateless turn orchestrator
///
/// Holds configuration only. Every operation takes the current state by
/// reference and returns a new value, so one engine can serve any number of
/// independent games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameEngine {
    config: EngineConfig,
}

impl GameEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn new_game(&self, seed: u64) -> GameState {
        GameState::new(seed)
    }

    /// Play one piece from the hand.
    ///
    /// Order: place, clear lines, score, refill hand, check for game over.
    /// On any error `state` is left exactly as it was.
    pub fn place_piece(
        &self,
        state: &GameState,
        request: PlaceRequest,
    ) -> Result<TurnOutcome, EngineError> {
        if state.status != GameStatus::Playing {
            return Err(EngineError::IllegalTransition);
        }

        let slot = usize::try_from(request.piece_index)
            .ok()
            .filter(|&i| i < HAND_SIZE)
            .ok_or(ValidationError::PieceIndexOutOfRange(request.piece_index))?;
        let piece = state.hand[slot].ok_or(ValidationError::EmptySlot(slot))?;

        let mut next = state.clone();
        let placement = next
            .board
            .try_place_piece(piece, request.row, request.col)
            .map_err(ValidationError::from)?;

        let cleared = clear_lines(&mut next.board);
        let lines = cleared.line_count();

        next.combo = if lines > 0 { next.combo.saturating_add(1) } else { 0 };
        let scoring = &self.config.scoring;
        let multiplier = scoring.combo_multiplier(next.combo);
        let breakdown = scoring.score_turn(placement.cell_count(), lines, multiplier);
        next.score = next.score.saturating_add(u64::from(breakdown.total));
        next.turn = next.turn.saturating_add(1);

        next.hand[slot] = None;
        self.refill_hand(&mut next, slot);

        if !next.has_legal_move() {
            next.status = GameStatus::Ended;
            info!(
                turn = next.turn,
                score = next.score,
                "game over: no piece in hand fits the board"
            );
        }

        debug!(
            turn = next.turn,
            piece = %piece,
            row = request.row,
            col = request.col,
            lines,
            combo = next.combo,
            points = breakdown.total,
            "piece placed"
        );

        let summary = TurnSummary {
            piece,
            placed_cells: placement.cells.to_vec(),
            cleared_rows: cleared.rows.to_vec(),
            cleared_cols: cleared.cols.to_vec(),
            lines_cleared: lines,
            points_awarded: breakdown.total,
            breakdown,
            combo: next.combo,
            hand: next.hand,
            game_over: next.is_over(),
        };

        Ok(TurnOutcome {
            state: next,
            summary,
        })
    }

    fn refill_hand(&self, state: &mut GameState, played_slot: usize) {
        match self.config.refill {
            RefillPolicy::WholeHand => {
                if state.hand.iter().all(Option::is_none) {
                    state.hand = draw_hand(&mut state.bag);
                }
            }
            RefillPolicy::EachPiece => {
                state.hand[played_slot] = Some(state.bag.draw());
            }
        }
    }

    /// Transport-ready snapshot of `state`
    pub fn get_state(&self, state: &GameState) -> GameSnapshot {
        state.snapshot()
    }

    /// Rebuild a game from storage. Malformed snapshots are fatal.
    pub fn from_state(&self, snapshot: &GameSnapshot) -> Result<GameState, EngineError> {
        GameState::from_snapshot(snapshot).map_err(|err| {
            warn!(error = %err, "rejected corrupt game snapshot");
            EngineError::StateCorruption(err)
        })
    }

    /// Legal anchors for every piece still in the hand
    pub fn hints(&self, state: &GameState) -> Vec<HandHint> {
        state
            .hand_pieces()
            .map(|(slot, piece)| HandHint {
                slot,
                piece,
                positions: state.board.valid_positions(piece),
            })
            .collect()
    }

    /// The next `count` pieces the bag will deal, without consuming them
    pub fn preview(&self, state: &GameState, count: usize) -> Vec<PieceType> {
        state.bag.peek_next_pieces(count)
    }
}
