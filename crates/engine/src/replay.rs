//! Deterministic replay of a recorded game
//!
//! Given the seed a game started from and the ordered list of turn requests
//! a client claims to have played, the engine re-runs every turn and returns
//! the resulting state. A verifier compares that state (usually the score)
//! with what the client reported.

use thiserror::Error;
use tracing::debug;

use crate::error::EngineError;
use crate::place::{GameEngine, PlaceRequest, TurnSummary};
use crate::state::GameState;

/// Final state and per-turn summaries of a replayed game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayReport {
    pub state: GameState,
    pub turns: Vec<TurnSummary>,
}

/// The first recorded move that could not be applied
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("move {move_index} rejected: {source}")]
pub struct ReplayError {
    pub move_index: usize,
    #[source]
    pub source: EngineError,
}

impl GameEngine {
    /// Replay `moves` on a fresh game started from `seed`
    pub fn replay(&self, seed: u64, moves: &[PlaceRequest]) -> Result<ReplayReport, ReplayError> {
        self.replay_from(&self.new_game(seed), moves)
    }

    /// Replay `moves` starting at an arbitrary state
    pub fn replay_from(
        &self,
        start: &GameState,
        moves: &[PlaceRequest],
    ) -> Result<ReplayReport, ReplayError> {
        let mut state = start.clone();
        let mut turns = Vec::with_capacity(moves.len());

        for (move_index, &request) in moves.iter().enumerate() {
            let outcome = self
                .place_piece(&state, request)
                .map_err(|source| ReplayError { move_index, source })?;
            state = outcome.state;
            turns.push(outcome.summary);
        }

        debug!(moves = moves.len(), score = state.score(), "replay finished");
        Ok(ReplayReport { state, turns })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    /// Play greedily: first slot, first legal anchor
    fn play_greedy(engine: &GameEngine, seed: u64, max_turns: usize) -> (GameState, Vec<PlaceRequest>) {
        let mut state = engine.new_game(seed);
        let mut moves = Vec::new();
        while !state.is_over() && moves.len() < max_turns {
            let hint = engine
                .hints(&state)
                .into_iter()
                .find(|h| !h.positions.is_empty())
                .expect("a playing game has a legal move");
            let pos = hint.positions[0];
            let request = PlaceRequest::new(hint.slot as i32, pos.row as i32, pos.col as i32);
            state = engine.place_piece(&state, request).unwrap().state;
            moves.push(request);
        }
        (state, moves)
    }

    #[test]
    fn replay_reproduces_live_game() {
        let engine = GameEngine::default();
        let (live, moves) = play_greedy(&engine, 31337, 40);

        let report = engine.replay(31337, &moves).unwrap();
        assert_eq!(report.state, live);
        assert_eq!(report.turns.len(), moves.len());

        let summed: u64 = report.turns.iter().map(|t| u64::from(t.points_awarded)).sum();
        assert_eq!(summed, live.score());
    }

    #[test]
    fn replay_with_wrong_seed_diverges_or_fails() {
        let engine = GameEngine::default();
        let (live, moves) = play_greedy(&engine, 1, 30);

        match engine.replay(2, &moves) {
            Ok(report) => assert_ne!(report.state, live),
            Err(err) => assert!(err.move_index < moves.len()),
        }
    }

    #[test]
    fn replay_reports_first_bad_move() {
        let engine = GameEngine::default();
        let moves = [PlaceRequest::new(0, 0, 0), PlaceRequest::new(0, 0, 0)];

        // Slot 0 was played by the first move and the hand is not refilled yet.
        let err = engine.replay(9, &moves).unwrap_err();
        assert_eq!(err.move_index, 1);
        assert_eq!(
            err.source,
            EngineError::Validation(ValidationError::EmptySlot(0))
        );
    }
}
