//! Protocol module - JSON message types for the command layer
//!
//! One request per line, one response per line. Every message is an object
//! with a `type` tag and a caller-chosen `seq` that the response echoes.
//! Game state travels as the engine's [`GameSnapshot`].

use serde::{Deserialize, Serialize};

use crate::engine::{EngineError, GameSnapshot, HandHint, PlaceRequest, TurnSummary};
use crate::types::PieceType;

/// Number of upcoming pieces returned by `preview` when `count` is omitted
pub const DEFAULT_PREVIEW_COUNT: usize = 3;

/// Upper bound on `preview.count`
pub const MAX_PREVIEW_COUNT: usize = 45;

// ============== Client -> Engine Messages ==============

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RequestEnvelope {
    #[serde(default)]
    pub seq: u64,
    #[serde(flatten)]
    pub request: Request,
}

/// Snapshots arrive as raw JSON so that a malformed state is reported as
/// corruption rather than as an unparseable request.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Request {
    NewGame {
        #[serde(default)]
        seed: Option<u64>,
    },
    Place {
        state: serde_json::Value,
        piece_index: i32,
        row: i32,
        col: i32,
    },
    Hints {
        state: serde_json::Value,
    },
    Preview {
        state: serde_json::Value,
        #[serde(default = "default_preview_count")]
        count: usize,
    },
    Replay {
        seed: u64,
        moves: Vec<PlaceRequest>,
    },
}

fn default_preview_count() -> usize {
    DEFAULT_PREVIEW_COUNT
}

// ============== Engine -> Client Messages ==============

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    InvalidRequest,
    ValidationFailed,
    GameEnded,
    StateCorrupt,
}

impl From<&EngineError> for ErrorCode {
    fn from(err: &EngineError) -> Self {
        match err {
            EngineError::Validation(_) => ErrorCode::ValidationFailed,
            EngineError::IllegalTransition => ErrorCode::GameEnded,
            EngineError::StateCorruption(_) => ErrorCode::StateCorrupt,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub seq: u64,
    pub ok: bool,
    #[serde(flatten)]
    pub body: ResponseBody,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResponseBody {
    State {
        state: GameSnapshot,
    },
    Turn {
        state: GameSnapshot,
        summary: TurnSummary,
    },
    Hints {
        hints: Vec<HandHint>,
    },
    Preview {
        pieces: Vec<PieceType>,
    },
    Replay {
        state: GameSnapshot,
        score: u64,
        turns: usize,
    },
    Error {
        code: ErrorCode,
        message: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        move_index: Option<usize>,
    },
}

impl Response {
    pub fn success(seq: u64, body: ResponseBody) -> Self {
        Self { seq, ok: true, body }
    }

    pub fn error(seq: u64, code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            seq,
            ok: false,
            body: ResponseBody::Error {
                code,
                message: message.into(),
                move_index: None,
            },
        }
    }

    pub fn engine_error(seq: u64, err: &EngineError) -> Self {
        Self::error(seq, err.into(), err.to_string())
    }
}

/// Parse one request line
pub fn parse_request(line: &str) -> Result<RequestEnvelope, serde_json::Error> {
    serde_json::from_str(line)
}

/// Best-effort `seq` of a line that failed to parse, so the error can still be matched up
pub fn recover_seq(line: &str) -> u64 {
    #[derive(Deserialize)]
    struct SeqOnly {
        #[serde(default)]
        seq: u64,
    }
    serde_json::from_str::<SeqOnly>(line)
        .map(|s| s.seq)
        .unwrap_or(0)
}
