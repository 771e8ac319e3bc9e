//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the piece containers and the actions that move pieces
//! between them. It has **no dependencies** on the terminal or on stdin, making it:
//!
//! - **Deterministic**: Same seed produces identical piece sequences
//! - **Testable**: Unit tests for every container operation and action
//! - **Allocation-free**: Both containers live in fixed-size arrays
//!
//! # Module Structure
//!
//! - [`queue`]: 5-slot ring buffer of upcoming pieces
//! - [`stack`]: 3-slot reserve stack
//! - [`exchange`]: in-place swaps between queue and stack
//! - [`game_state`]: the actions offered by the menu
//! - [`rng`]: seeded piece generation
//!
//! # Example
//!
//! ```
//! use tetris_reserve_core::GameState;
//! use tetris_reserve_types::MenuAction;
//!
//! let mut game = GameState::new(12345);
//!
//! game.apply(MenuAction::Reserve).unwrap();
//! game.apply(MenuAction::Play).unwrap();
//!
//! assert!(game.queue().is_full());
//! assert_eq!(game.reserve_stack().len(), 1);
//! assert!(game.apply(MenuAction::SwapThree).is_err());
//! ```

pub mod error;
pub mod exchange;
pub mod game_state;
pub mod queue;
pub mod rng;
pub mod snapshot;
pub mod stack;

pub use tetris_reserve_types as types;

// Re-export commonly used types for convenience
pub use error::ActionError;
pub use exchange::{swap_front_top, swap_triple};
pub use game_state::{ActionOutcome, GameState};
pub use queue::PieceQueue;
pub use rng::{seed_from_time, PieceGenerator, SimpleRng};
pub use snapshot::GameSnapshot;
pub use stack::ReserveStack;
