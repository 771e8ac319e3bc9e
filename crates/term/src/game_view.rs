//! StateView: maps `core::GameSnapshot` into a text frame.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{ActionError, ActionOutcome, GameSnapshot};
use crate::frame::{Line, Span, TextFrame};
use crate::types::{MenuAction, Piece};

/// Renders the queue and the reserve stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StateView {
    /// Also print the next id and the seed (useful when replaying a seed).
    pub show_details: bool,
}

impl StateView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_details(mut self, show_details: bool) -> Self {
        self.show_details = show_details;
        self
    }

    /// Render the queue front-to-back and the reserve top-to-base.
    pub fn render(&self, snap: &GameSnapshot) -> TextFrame {
        let mut frame = TextFrame::new();
        frame.push_blank();
        frame.push_line(vec![Span::bold("Current state:")]);
        frame.push_line(pieces_line("Queue: ", &snap.queue));
        frame.push_line(pieces_line("Reserve (top -> base): ", &snap.reserve));
        if self.show_details {
            frame.push_text(format!("Next id: {}  Seed: {}", snap.next_id, snap.seed));
        }
        frame
    }
}

fn pieces_line(label: &str, pieces: &[Piece]) -> Line {
    let mut line = vec![Span::bold(label)];
    if pieces.is_empty() {
        line.push(Span::plain("empty"));
        return line;
    }
    for (i, piece) in pieces.iter().enumerate() {
        if i > 0 {
            line.push(Span::plain(" "));
        }
        line.push(Span::piece(piece.kind, piece.to_string()));
    }
    line
}

/// The numbered option list.
pub fn menu_frame() -> TextFrame {
    let mut frame = TextFrame::new();
    frame.push_blank();
    frame.push_line(vec![Span::bold("Options:")]);
    for action in MenuAction::ALL {
        frame.push_text(format!("{} - {}", action.option(), action.label()));
    }
    frame
}

/// Report the result of an action.
pub fn outcome_frame(action: MenuAction, result: &Result<ActionOutcome, ActionError>) -> TextFrame {
    let mut frame = TextFrame::new();
    match result {
        Ok(ActionOutcome::Played(piece)) => frame.push_line(piece_message("Played piece: ", piece)),
        Ok(ActionOutcome::Reserved(piece)) => {
            frame.push_line(piece_message("Reserved piece: ", piece))
        }
        Ok(ActionOutcome::Used(piece)) => {
            frame.push_line(piece_message("Used reserved piece: ", piece))
        }
        Ok(ActionOutcome::SwappedOne) => {
            frame.push_text("Swapped the front of the queue with the top of the reserve.")
        }
        Ok(ActionOutcome::SwappedThree) => {
            frame.push_text("Swapped the first 3 queue pieces with the 3 reserve pieces.")
        }
        Ok(ActionOutcome::Quit) => frame.push_text("Exiting..."),
        Err(err) => frame.push_text(format!("Cannot {}: {}.", action_verb(action), err)),
    }
    frame
}

/// Message for a line that is not a menu option.
pub fn invalid_option_frame(line: &str) -> TextFrame {
    let mut frame = TextFrame::new();
    frame.push_text(format!("Invalid option {:?}! Try again.", line.trim()));
    frame
}

fn piece_message(prefix: &str, piece: &Piece) -> Line {
    vec![Span::plain(prefix), Span::piece(piece.kind, piece.to_string())]
}

fn action_verb(action: MenuAction) -> &'static str {
    match action {
        MenuAction::Play => "play a piece",
        MenuAction::Reserve => "reserve a piece",
        MenuAction::UseReserved => "use a reserved piece",
        MenuAction::SwapOne => "swap the front piece",
        MenuAction::SwapThree => "swap three pieces",
        MenuAction::Quit => "quit",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameState;
    use crate::types::PieceKind;

    #[test]
    fn empty_reserve_is_labelled() {
        let snap = GameState::new(1).snapshot();
        let text = StateView::default().render(&snap).to_plain_string();
        assert!(text.contains("Reserve (top -> base): empty"), "{}", text);
    }

    #[test]
    fn piece_spans_carry_their_kind() {
        let mut snap = GameSnapshot::default();
        snap.queue.push(Piece::new(PieceKind::O, 3));
        let frame = StateView::default().render(&snap);

        let span = frame
            .lines()
            .iter()
            .flatten()
            .find(|s| s.text == "[O 3]")
            .unwrap();
        assert_eq!(span.piece, Some(PieceKind::O));
    }

    #[test]
    fn details_are_opt_in() {
        let snap = GameState::new(77).snapshot();
        let plain = StateView::new().render(&snap).to_plain_string();
        let detailed = StateView::new().with_details(true).render(&snap).to_plain_string();
        assert!(!plain.contains("Seed"));
        assert!(detailed.contains("Next id: 5  Seed: 77"));
    }

    #[test]
    fn failure_message_names_the_action() {
        let frame = outcome_frame(MenuAction::UseReserved, &Err(ActionError::StackEmpty));
        assert_eq!(
            frame.to_plain_string(),
            "Cannot use a reserved piece: the reserve stack is empty.\n"
        );
    }
}
