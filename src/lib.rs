//! Tetris reserve (workspace facade crate).
//!
//! Re-exports `tetris_reserve::{core,input,term,types}` from the crates under
//! `crates/`, and holds the pieces only the binary needs: environment
//! configuration and the interactive menu loop.

pub mod config;
pub mod session;

pub use tetris_reserve_core as core;
pub use tetris_reserve_input as input;
pub use tetris_reserve_term as term;
pub use tetris_reserve_types as types;

pub use config::SessionConfig;
pub use session::{run, SessionSummary};
