use tetris_reserve::core::{ActionError, ActionOutcome, GameSnapshot, GameState};
use tetris_reserve::term::{menu_frame, outcome_frame, StateView};
use tetris_reserve::types::{MenuAction, Piece, PieceKind};

#[test]
fn term_view_lists_queue_front_to_back() {
    let mut snap = GameSnapshot::default();
    snap.queue.push(Piece::new(PieceKind::I, 0));
    snap.queue.push(Piece::new(PieceKind::O, 1));
    snap.queue.push(Piece::new(PieceKind::T, 2));

    let text = StateView::default().render(&snap).to_plain_string();
    assert!(text.contains("Queue: [I 0] [O 1] [T 2]\n"), "{}", text);
}

#[test]
fn term_view_lists_reserve_top_to_base() {
    let mut game = GameState::new(1);
    for _ in 0..3 {
        game.reserve().unwrap();
    }
    let snap = game.snapshot();
    let text = StateView::default().render(&snap).to_plain_string();

    let expected: Vec<String> = snap.reserve.iter().map(|p| p.to_string()).collect();
    assert_eq!(
        snap.reserve_ids().collect::<Vec<_>>(),
        vec![2, 1, 0]
    );
    assert!(
        text.contains(&format!("Reserve (top -> base): {}\n", expected.join(" "))),
        "{}",
        text
    );
}

#[test]
fn term_menu_lists_every_option_in_order() {
    let text = menu_frame().to_plain_string();
    let positions: Vec<usize> = ["1 - ", "2 - ", "3 - ", "4 - ", "5 - ", "0 - "]
        .iter()
        .map(|needle| text.find(needle).unwrap())
        .collect();

    let mut sorted = positions.clone();
    sorted.sort();
    assert_eq!(positions, sorted);
}

#[test]
fn term_outcome_messages() {
    let piece = Piece::new(PieceKind::L, 12);
    let played = outcome_frame(MenuAction::Play, &Ok(ActionOutcome::Played(piece)));
    assert_eq!(played.to_plain_string(), "Played piece: [L 12]\n");

    let full = outcome_frame(MenuAction::Reserve, &Err(ActionError::StackFull));
    assert_eq!(
        full.to_plain_string(),
        "Cannot reserve a piece: the reserve stack is full.\n"
    );

    let triple = outcome_frame(
        MenuAction::SwapThree,
        &Err(ActionError::NotEnoughForTriple { queue: 5, stack: 1 }),
    );
    assert!(triple
        .to_plain_string()
        .contains("at least 3 pieces in each container (queue has 5, stack has 1)"));
}
