//! The interactive menu loop.
//!
//! Generic over the input reader and the output writer so integration tests
//! can drive a whole session from a string.

use std::io::{BufRead, Write};

use anyhow::Result;

use crate::core::{ActionOutcome, GameState};
use crate::input::parse_menu_line;
use crate::term::{invalid_option_frame, menu_frame, outcome_frame, StateView, TerminalRenderer};
use crate::types::MenuAction;

pub const PROMPT: &str = "Option: ";

/// Counters reported when the loop ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionSummary {
    /// Menu actions that were dispatched (including quit).
    pub actions: u32,
    /// Dispatched actions that were refused.
    pub rejected: u32,
    /// Lines that were not a menu option.
    pub invalid: u32,
}

/// Run the menu loop until option 0 or end of input.
///
/// The state is rendered before every prompt.
pub fn run<R: BufRead, W: Write>(
    game: &mut GameState,
    view: StateView,
    input: &mut R,
    term: &mut TerminalRenderer<W>,
) -> Result<SessionSummary> {
    let mut summary = SessionSummary::default();
    let mut buf = Vec::new();

    loop {
        term.draw(&view.render(&game.snapshot()))?;
        term.draw(&menu_frame())?;
        term.prompt(PROMPT)?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            log::info!("end of input, leaving");
            term.draw(&outcome_frame(MenuAction::Quit, &Ok(ActionOutcome::Quit)))?;
            return Ok(summary);
        }

        // Undecodable bytes become U+FFFD and fall through to the invalid-option path.
        let line = String::from_utf8_lossy(&buf);
        let Some(action) = parse_menu_line(&line) else {
            log::warn!("invalid menu input {:?}", line.trim());
            summary.invalid += 1;
            term.draw(&invalid_option_frame(&line))?;
            continue;
        };

        summary.actions += 1;
        let result = game.apply(action);
        if result.is_err() {
            summary.rejected += 1;
        }
        term.draw(&outcome_frame(action, &result))?;

        if action == MenuAction::Quit {
            return Ok(summary);
        }
    }
}
