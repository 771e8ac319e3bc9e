//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, text rendering, input mapping).
//!
//! # Capacities
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `QUEUE_CAPACITY` | 5 | Upcoming pieces held by the queue |
//! | `STACK_CAPACITY` | 3 | Pieces held by the reserve stack |
//! | `TRIPLE_SWAP_LEN` | 3 | Slots exchanged by a multi-swap |
//!
//! # Examples
//!
//! ```
//! use tetris_reserve_types::{MenuAction, Piece, PieceKind, QUEUE_CAPACITY, STACK_CAPACITY};
//!
//! // Kinds print as single uppercase symbols
//! assert_eq!(PieceKind::T.symbol(), 'T');
//!
//! // Pieces print as `[kind id]`
//! let piece = Piece::new(PieceKind::L, 7);
//! assert_eq!(piece.to_string(), "[L 7]");
//!
//! // Menu options map onto actions
//! assert_eq!(MenuAction::from_option(2), Some(MenuAction::Reserve));
//!
//! assert_eq!(QUEUE_CAPACITY, 5);
//! assert_eq!(STACK_CAPACITY, 3);
//! ```

use std::fmt;

/// Capacity of the upcoming-piece queue (5 pieces)
pub const QUEUE_CAPACITY: usize = 5;

/// Capacity of the reserve stack (3 pieces)
pub const STACK_CAPACITY: usize = 3;

/// Number of queue/stack slot pairs exchanged by a multi-swap
pub const TRIPLE_SWAP_LEN: usize = 3;


/// The four piece kinds produced by the generator
///
/// - **I**: straight bar
/// - **O**: 2x2 square
/// - **T**: T-shaped
/// - **L**: L-shaped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    L,
}

impl PieceKind {
    /// Every kind, in generator order
    pub const ALL: [PieceKind; 4] = [PieceKind::I, PieceKind::O, PieceKind::T, PieceKind::L];

    /// Uppercase display symbol
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_reserve_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::T.symbol(), 'T');
    /// ```
    pub fn symbol(&self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::O => 'O',
            PieceKind::T => 'T',
            PieceKind::L => 'L',
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::L => "l",
        }
    }
}

/// A piece moving between the queue and the reserve stack
///
/// Pieces are plain values: containers copy them in and out, nothing
/// shares ownership. The `id` is unique for the lifetime of a game and
/// grows with creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub id: u32,
}

impl Piece {
    pub const fn new(kind: PieceKind, id: u32) -> Self {
        Self { kind, id }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {}]", self.kind.symbol(), self.id)
    }
}

/// Menu selections offered by the interactive loop
///
/// Each variant corresponds to one numbered menu option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuAction {
    /// Option 1: play the front piece, refill the queue
    Play,
    /// Option 2: move the front piece onto the reserve stack, refill the queue
    Reserve,
    /// Option 3: pop a piece from the reserve stack
    UseReserved,
    /// Option 4: swap queue front with stack top
    SwapOne,
    /// Option 5: swap the first three queue slots with the three stack slots
    SwapThree,
    /// Option 0: leave the loop
    Quit,
}

impl MenuAction {
    /// Menu display order
    pub const ALL: [MenuAction; 6] = [
        MenuAction::Play,
        MenuAction::Reserve,
        MenuAction::UseReserved,
        MenuAction::SwapOne,
        MenuAction::SwapThree,
        MenuAction::Quit,
    ];

    /// Look up an action by its menu number
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_reserve_types::MenuAction;
    ///
    /// assert_eq!(MenuAction::from_option(0), Some(MenuAction::Quit));
    /// assert_eq!(MenuAction::from_option(5), Some(MenuAction::SwapThree));
    /// assert_eq!(MenuAction::from_option(9), None);
    /// ```
    pub fn from_option(option: u8) -> Option<Self> {
        match option {
            1 => Some(MenuAction::Play),
            2 => Some(MenuAction::Reserve),
            3 => Some(MenuAction::UseReserved),
            4 => Some(MenuAction::SwapOne),
            5 => Some(MenuAction::SwapThree),
            0 => Some(MenuAction::Quit),
            _ => None,
        }
    }

    /// Menu number for this action
    pub fn option(&self) -> u8 {
        match self {
            MenuAction::Play => 1,
            MenuAction::Reserve => 2,
            MenuAction::UseReserved => 3,
            MenuAction::SwapOne => 4,
            MenuAction::SwapThree => 5,
            MenuAction::Quit => 0,
        }
    }

    /// Human-readable menu label
    pub fn label(&self) -> &'static str {
        match self {
            MenuAction::Play => "Play the piece at the front of the queue",
            MenuAction::Reserve => "Send the front piece to the reserve stack",
            MenuAction::UseReserved => "Use a piece from the reserve stack",
            MenuAction::SwapOne => "Swap the queue front with the stack top",
            MenuAction::SwapThree => "Swap the first 3 queue pieces with the 3 stack pieces",
            MenuAction::Quit => "Quit",
        }
    }

    /// Convert to camelCase string (used in log output)
    pub fn as_str(&self) -> &'static str {
        match self {
            MenuAction::Play => "play",
            MenuAction::Reserve => "reserve",
            MenuAction::UseReserved => "useReserved",
            MenuAction::SwapOne => "swapOne",
            MenuAction::SwapThree => "swapThree",
            MenuAction::Quit => "quit",
        }
    }
}
