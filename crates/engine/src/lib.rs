//! Turn orchestration for the block puzzle
//!
//! [`GameEngine`] composes the core rules into one atomic turn:
//!
//! 1. validate the request against the game status and the hand
//! 2. place the piece on a copy of the board
//! 3. clear completed rows and columns
//! 4. update combo and score
//! 5. refill the hand per [`RefillPolicy`]
//! 6. end the game when no piece in hand fits anywhere
//!
//! The engine keeps no per-game state. A caller loads a [`GameSnapshot`],
//! rebuilds the [`GameState`] with [`GameEngine::from_state`], plays a turn
//! and stores the snapshot of the returned state. Serializing access to one
//! game across concurrent requests is the caller's responsibility.
//!
//! # Example
//!
//! ```
//! use block_puzzle_engine::{GameEngine, PlaceRequest};
//!
//! let engine = GameEngine::default();
//! let game = engine.new_game(2024);
//!
//! let outcome = engine.place_piece(&game, PlaceRequest::new(0, 0, 0)).unwrap();
//! assert_eq!(outcome.state.turn(), 1);
//! assert!(outcome.summary.points_awarded > 0);
//!
//! // Failed turns leave the input untouched.
//! let err = engine.place_piece(&game, PlaceRequest::new(0, -1, 0)).unwrap_err();
//! assert!(err.is_recoverable());
//! assert_eq!(game.turn(), 0);
//!
//! // Storage round trip.
//! let stored = engine.get_state(&outcome.state);
//! assert_eq!(engine.from_state(&stored).unwrap(), outcome.state);
//! ```

pub mod config;
pub mod error;
pub mod place;
pub mod replay;
pub mod snapshot;
pub mod state;

pub use block_puzzle_core as core;
pub use block_puzzle_types as types;

pub use config::{EngineConfig, RefillPolicy};
pub use error::{CorruptionError, EngineError, ValidationError};
pub use place::{GameEngine, HandHint, PlaceRequest, TurnOutcome, TurnSummary};
pub use replay::{ReplayError, ReplayReport};
pub use snapshot::{BagSnapshot, GameSnapshot};
pub use state::{GameState, Hand};
