//! Request dispatch
//!
//! Maps each protocol request onto one [`GameEngine`] call. The handler holds
//! no game state: every request that acts on a game carries its snapshot.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::AdapterConfig;
use crate::engine::{
    CorruptionError, EngineError, GameEngine, GameSnapshot, GameState, PlaceRequest,
};
use crate::protocol::{
    parse_request, recover_seq, ErrorCode, Request, RequestEnvelope, Response, ResponseBody,
    MAX_PREVIEW_COUNT,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct Handler {
    engine: GameEngine,
    default_seed: Option<u64>,
}

impl Handler {
    pub fn new(config: &AdapterConfig) -> Self {
        Self {
            engine: GameEngine::new(config.engine),
            default_seed: config.default_seed,
        }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Handle one raw request line
    pub fn handle_line(&self, line: &str) -> Response {
        match parse_request(line) {
            Ok(envelope) => self.handle(envelope),
            Err(err) => {
                let seq = recover_seq(line);
                warn!(seq, error = %err, "invalid request");
                Response::error(seq, ErrorCode::InvalidRequest, err.to_string())
            }
        }
    }

    pub fn handle(&self, envelope: RequestEnvelope) -> Response {
        let seq = envelope.seq;
        match envelope.request {
            Request::NewGame { seed } => {
                let seed = seed.or(self.default_seed).unwrap_or_else(clock_seed);
                debug!(seq, seed, "new game");
                let state = self.engine.new_game(seed);
                Response::success(
                    seq,
                    ResponseBody::State {
                        state: self.engine.get_state(&state),
                    },
                )
            }
            Request::Place {
                state,
                piece_index,
                row,
                col,
            } => {
                let request = PlaceRequest::new(piece_index, row, col);
                let result = self
                    .load(state)
                    .and_then(|game| self.engine.place_piece(&game, request));
                match result {
                    Ok(outcome) => Response::success(
                        seq,
                        ResponseBody::Turn {
                            state: self.engine.get_state(&outcome.state),
                            summary: outcome.summary,
                        },
                    ),
                    Err(err) => self.rejected(seq, &err),
                }
            }
            Request::Hints { state } => match self.load(state) {
                Ok(game) => Response::success(
                    seq,
                    ResponseBody::Hints {
                        hints: self.engine.hints(&game),
                    },
                ),
                Err(err) => self.rejected(seq, &err),
            },
            Request::Preview { state, count } => {
                if count > MAX_PREVIEW_COUNT {
                    return Response::error(
                        seq,
                        ErrorCode::InvalidRequest,
                        format!("preview count {count} exceeds {MAX_PREVIEW_COUNT}"),
                    );
                }
                match self.load(state) {
                    Ok(game) => Response::success(
                        seq,
                        ResponseBody::Preview {
                            pieces: self.engine.preview(&game, count),
                        },
                    ),
                    Err(err) => self.rejected(seq, &err),
                }
            }
            Request::Replay { seed, moves } => match self.engine.replay(seed, &moves) {
                Ok(report) => Response::success(
                    seq,
                    ResponseBody::Replay {
                        score: report.state.score(),
                        turns: report.turns.len(),
                        state: self.engine.get_state(&report.state),
                    },
                ),
                Err(err) => {
                    debug!(seq, move_index = err.move_index, error = %err.source, "replay rejected");
                    Response {
                        seq,
                        ok: false,
                        body: ResponseBody::Error {
                            code: ErrorCode::from(&err.source),
                            message: err.to_string(),
                            move_index: Some(err.move_index),
                        },
                    }
                }
            },
        }
    }

    /// Decode a snapshot from raw JSON. Any shape error is corruption.
    fn load(&self, raw: serde_json::Value) -> Result<GameState, EngineError> {
        let snapshot = GameSnapshot::deserialize(raw).map_err(|err| {
            warn!(error = %err, "malformed game snapshot");
            EngineError::StateCorruption(CorruptionError::Malformed(err.to_string()))
        })?;
        self.engine.from_state(&snapshot)
    }

    fn rejected(&self, seq: u64, err: &EngineError) -> Response {
        debug!(seq, code = err.code(), error = %err, "request rejected");
        Response::engine_error(seq, err)
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
