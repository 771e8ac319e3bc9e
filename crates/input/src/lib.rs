//! Menu input module.
//!
//! This module is independent of any terminal library. It maps one line of
//! user input onto a [`crate::types::MenuAction`].

pub mod map;

pub use tetris_reserve_types as types;

pub use map::parse_menu_line;
