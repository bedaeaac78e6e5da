//! Adapter module - line-delimited JSON command layer over the engine
//!
//! External callers (a game server, a replay verifier, a test harness) drive
//! games by sending one JSON request per line and reading one JSON response
//! per line. The adapter is stateless: requests that act on a game carry its
//! snapshot, responses carry the next one.
//!
//! # Message Types
//!
//! ## Client → Engine
//!
//! - **new_game**: start a game from `seed` (or the configured default)
//! - **place**: play `piece_index` at (`row`, `col`) on `state`
//! - **hints**: legal anchors for every piece in hand
//! - **preview**: the next `count` pieces of the bag
//! - **replay**: re-run a recorded move list from `seed`
//!
//! ## Engine → Client
//!
//! - **state**, **turn**, **hints**, **preview**, **replay** on success
//! - **error** with a `code`: `invalid_request`, `validation_failed`,
//!   `game_ended` or `state_corrupt`
//!
//! Every response carries `ok` and echoes the request's `seq`.
//!
//! # Environment Variables
//!
//! - `BLOCK_PUZZLE_REFILL`: `hand` (default) or `piece`
//! - `BLOCK_PUZZLE_POINTS_PER_CELL`, `BLOCK_PUZZLE_LINE_BASE`,
//!   `BLOCK_PUZZLE_MAX_COMBO`: scoring tables
//! - `BLOCK_PUZZLE_DEFAULT_SEED`: seed for `new_game` without one

pub mod config;
pub mod handler;
pub mod protocol;
pub mod server;

pub use block_puzzle_core as core;
pub use block_puzzle_engine as engine;
pub use block_puzzle_types as types;

pub use config::AdapterConfig;
pub use handler::Handler;
pub use protocol::{ErrorCode, Request, RequestEnvelope, Response, ResponseBody};
pub use server::serve;
