//! Block puzzle (workspace facade crate).
//!
//! Re-exports the workspace crates as `block_puzzle::{adapter,core,engine,types}`
//! so callers and the integration tests depend on one package.

pub use block_puzzle_adapter as adapter;
pub use block_puzzle_core as core;
pub use block_puzzle_engine as engine;
pub use block_puzzle_types as types;
