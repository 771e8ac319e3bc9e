//! Terminal text rendering module.
//!
//! The view turns a [`core::GameSnapshot`] (plus menu and action results)
//! into a [`TextFrame`]; the renderer flushes frames through crossterm so
//! piece kinds can be colored.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep the view pure so its output can be asserted on in tests

pub mod frame;
pub mod game_view;
pub mod renderer;

pub use tetris_reserve_core as core;
pub use tetris_reserve_types as types;

pub use frame::{piece_color, Line, Rgb, Span, TextFrame};
pub use game_view::{invalid_option_frame, menu_frame, outcome_frame, StateView};
pub use renderer::{encode_frame_into, TerminalRenderer};
