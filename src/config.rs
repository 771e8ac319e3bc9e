//! Session configuration read from the environment.
//!
//! - `TETRIS_RESERVE_SEED`: fixed RNG seed (unset or unparsable: time-based)
//! - `TETRIS_RESERVE_COLOR`: `0`/`false`/`no` disables colored output, any
//!   other value enables it (unset: on only when stdout is a terminal)
//! - `TETRIS_RESERVE_DETAILS`: `1`/`true` prints next id and seed under the state
//!
//! Log filtering uses the usual `RUST_LOG` variable.

use std::io::IsTerminal;

use crate::core::seed_from_time;

pub const SEED_VAR: &str = "TETRIS_RESERVE_SEED";
pub const COLOR_VAR: &str = "TETRIS_RESERVE_COLOR";
pub const DETAILS_VAR: &str = "TETRIS_RESERVE_DETAILS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Fixed seed; `None` means seed from the clock.
    pub seed: Option<u32>,
    pub color: bool,
    pub show_details: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: None,
            color: true,
            show_details: false,
        }
    }
}

impl SessionConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let stdout_is_terminal = std::io::stdout().is_terminal();
        Self::from_lookup(|key| std::env::var(key).ok(), stdout_is_terminal)
    }

    /// Create from any key lookup (the environment, or a map in tests).
    ///
    /// `stdout_is_terminal` picks the color default when `TETRIS_RESERVE_COLOR`
    /// is unset, so piped output carries no escape codes.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>, stdout_is_terminal: bool) -> Self {
        let seed = lookup(SEED_VAR).and_then(|s| s.trim().parse().ok());
        let color = lookup(COLOR_VAR)
            .map(|v| !is_falsy(&v))
            .unwrap_or(stdout_is_terminal);
        let show_details = lookup(DETAILS_VAR).map(|v| is_truthy(&v)).unwrap_or(false);

        Self {
            seed,
            color,
            show_details,
        }
    }

    /// The configured seed, or a fresh clock-based one.
    pub fn resolve_seed(&self) -> u32 {
        self.seed.unwrap_or_else(seed_from_time)
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(value.trim().to_lowercase().as_str(), "1" | "true" | "yes")
}

fn is_falsy(value: &str) -> bool {
    matches!(value.trim().to_lowercase().as_str(), "0" | "false" | "no")
}
