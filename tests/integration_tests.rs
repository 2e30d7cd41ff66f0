//! Integration tests for goban
//!
//! Positions are written with GTP vertices on a 9x9 board ("A1" is the
//! bottom-left corner, columns skip "I").

use goban::board::{Board, Cell, Color, Point};
use goban::error::MoveError;
use goban::game::Game;
use goban::gtp::{GtpEngine, parse_vertex};
use goban::legality::Legality;

// =============================================================================
// Helper functions for setting up test positions
// =============================================================================

const SIZE: usize = 9;

fn pt(vertex: &str) -> Point {
    parse_vertex(vertex, SIZE, SIZE).unwrap()
}

/// Set up stones on the board by placing them directly, then hand the
/// position to a game with `to_move` on turn.
/// Example: setpos(&["C8", "C9"], &["B8"], Color::Black) places black at
/// C8, C9 and white at B8.
fn setpos(black: &[&str], white: &[&str], to_move: Color) -> Game {
    let mut board = Board::new(SIZE, SIZE);
    for v in black {
        board.set(pt(v), Cell::Black);
    }
    for v in white {
        board.set(pt(v), Cell::White);
    }
    if to_move == Color::White {
        let mut game = Game::with_board(board);
        game.end_turn();
        return game;
    }
    Game::with_board(board)
}

fn is_legal(game: &mut Game, vertex: &str) -> bool {
    let (row, col) = pt(vertex);
    game.is_legal(row, col)
}

fn play(game: &mut Game, vertex: &str) -> Result<Vec<Point>, MoveError> {
    let (row, col) = pt(vertex);
    game.commit_move(row, col).map(|outcome| outcome.captured)
}

fn cell(game: &Game, vertex: &str) -> Cell {
    let (row, col) = pt(vertex);
    game.cell_at(row, col)
}

// =============================================================================
// Legality on simple boards
// =============================================================================

#[test]
fn test_empty_board_everything_legal() {
    let mut game = Game::new(SIZE, SIZE);
    for row in 0..SIZE {
        for col in 0..SIZE {
            assert!(game.is_legal(row, col), "({row}, {col}) should be legal");
        }
    }
}

#[test]
fn test_empty_rectangular_board_everything_legal() {
    let mut game = Game::new(5, 13);
    assert_eq!(game.legal_moves().len(), 65);
    assert!(!game.is_legal(5, 0));
    assert!(!game.is_legal(0, 13));
}

#[test]
fn test_occupied_always_illegal() {
    let mut game = setpos(&["D4"], &["E5"], Color::Black);
    assert!(!is_legal(&mut game, "D4"));
    assert!(!is_legal(&mut game, "E5"));

    game.end_turn();
    assert_eq!(game.active_player(), Color::White);
    assert!(!is_legal(&mut game, "D4"));
    assert!(!is_legal(&mut game, "E5"));
}

#[test]
fn test_out_of_bounds_is_illegal() {
    let mut game = Game::new(SIZE, SIZE);
    assert!(!game.is_legal(SIZE, 0));
    assert!(!game.is_legal(0, SIZE));
    assert!(!game.is_legal(usize::MAX, usize::MAX));
    assert_eq!(game.cache().evaluated_count(), 0);
}

// =============================================================================
// Suicide rule
// =============================================================================

#[test]
fn test_corner_suicide_rejected() {
    let mut game = setpos(&[], &["A2", "B1"], Color::Black);
    assert_eq!(game.classify(8, 0), Legality::Suicide);
}

#[test]
fn test_suicide_of_larger_group_rejected() {
    // Black A1-B1 would join A2 with its last liberty filled.
    let mut game = setpos(&["A2", "B1"], &["A3", "B2", "C1"], Color::Black);
    assert!(!is_legal(&mut game, "A1"));
}

#[test]
fn test_capture_relieves_suicide() {
    // White B1 has one liberty left at A1; Black A1 is surrounded but captures.
    let mut game = setpos(&["C1", "B2"], &["A2", "B1"], Color::Black);
    assert!(is_legal(&mut game, "A1"));

    let captured = play(&mut game, "A1").unwrap();
    assert_eq!(captured, vec![pt("B1")]);
    assert_eq!(cell(&game, "A1"), Cell::Black);
    assert_eq!(cell(&game, "B1"), Cell::Empty);
    assert_eq!(cell(&game, "A2"), Cell::White);
}

#[test]
fn test_white_suicide_rejected() {
    let mut game = setpos(&["H9", "J8"], &[], Color::White);
    assert!(!is_legal(&mut game, "J9"));
    assert!(is_legal(&mut game, "H8"));
}

// =============================================================================
// Cache behavior
// =============================================================================

#[test]
fn test_repeated_queries_agree() {
    let mut game = setpos(&["C1", "B2"], &["A2", "B1"], Color::Black);
    for vertex in ["A1", "D4", "J9"] {
        let first = is_legal(&mut game, vertex);
        let evaluated = game.cache().evaluated_count();
        let second = is_legal(&mut game, vertex);
        assert_eq!(first, second, "{vertex} answered differently");
        assert_eq!(game.cache().evaluated_count(), evaluated);
    }
    assert_eq!(game.cache().evaluated_count(), 3);
}

#[test]
fn test_commit_alternates_and_resets_cache() {
    let mut game = Game::new(SIZE, SIZE);
    assert!(is_legal(&mut game, "E5"));
    assert!(is_legal(&mut game, "C3"));

    play(&mut game, "E5").unwrap();
    assert_eq!(game.active_player(), Color::White);
    assert_eq!(game.cache().lookup(pt("C3")), None);

    play(&mut game, "C3").unwrap();
    assert_eq!(game.active_player(), Color::Black);
}

#[test]
fn test_cache_reset_reflects_new_position() {
    // Before White fills B1, A1 is fine for Black; afterwards it is suicide.
    let mut game = setpos(&[], &["A2"], Color::White);
    play(&mut game, "H8").unwrap();
    assert!(is_legal(&mut game, "A1"));

    play(&mut game, "J9").unwrap();
    play(&mut game, "B1").unwrap();
    assert!(!is_legal(&mut game, "A1"));
}

// =============================================================================
// Capture resolution
// =============================================================================

#[test]
fn test_capture_enclosed_group_end_to_end() {
    // White E5-E6 has exactly one liberty at E4.
    let mut game = setpos(&["D5", "D6", "F5", "F6", "E7"], &["E5", "E6"], Color::Black);
    let before = game.board().clone();

    assert!(is_legal(&mut game, "E4"));
    let mut captured = play(&mut game, "E4").unwrap();
    captured.sort();

    let mut expected = vec![pt("E5"), pt("E6")];
    expected.sort();
    assert_eq!(captured, expected);

    assert_eq!(cell(&game, "E4"), Cell::Black);
    assert_eq!(cell(&game, "E5"), Cell::Empty);
    assert_eq!(cell(&game, "E6"), Cell::Empty);
    assert_eq!(game.active_player(), Color::White);

    // Nothing else on the board moved.
    for p in before.points() {
        if p == pt("E4") || captured.contains(&p) {
            continue;
        }
        assert_eq!(game.board().get(p), before.get(p), "{p:?} changed");
    }
}

#[test]
fn test_suicide_end_to_end_leaves_game_untouched() {
    let mut game = setpos(&["E5"], &["A2", "B1", "B3", "C2"], Color::Black);
    let before = game.board().clone();

    assert!(!is_legal(&mut game, "A1"));
    assert_eq!(play(&mut game, "A1"), Err(MoveError::Suicide(pt("A1"))));
    assert_eq!(game.board(), &before);
    assert_eq!(game.active_player(), Color::Black);
}

#[test]
fn test_multiple_groups_captured_in_one_move() {
    // E5 is the last liberty of both D5 and F5. E4 and E6 keep liberties.
    let mut game = setpos(
        &["C5", "D4", "D6", "G5", "F4", "F6"],
        &["D5", "F5", "E4", "E6"],
        Color::Black,
    );
    assert!(is_legal(&mut game, "E5"));

    let captured = play(&mut game, "E5").unwrap();
    assert_eq!(captured, vec![pt("D5"), pt("F5")]);
    assert_eq!(cell(&game, "E4"), Cell::White);
    assert_eq!(cell(&game, "E6"), Cell::White);
    assert_eq!(cell(&game, "E5"), Cell::Black);
}

#[test]
fn test_played_sequence_captures_corner_stone() {
    let mut game = Game::new(SIZE, SIZE);
    for vertex in ["A2", "A1", "J9"] {
        play(&mut game, vertex).unwrap();
    }
    // White A1 now has only B1 left; Black takes it.
    play(&mut game, "H9").unwrap();
    let captured = play(&mut game, "B1").unwrap();
    assert_eq!(captured, vec![pt("A1")]);

    // White may not refill A1: it is surrounded and captures nothing.
    assert_eq!(game.active_player(), Color::White);
    assert!(!is_legal(&mut game, "A1"));
}

#[test]
fn test_capture_then_recapture_allowed_without_ko() {
    // Classic ko shape. Without a ko rule White may retake immediately.
    let mut game = setpos(&["B5", "C4", "C6"], &["D4", "D6", "E5", "C5"], Color::Black);
    let captured = play(&mut game, "D5").unwrap();
    assert_eq!(captured, vec![pt("C5")]);

    let captured = play(&mut game, "C5").unwrap();
    assert_eq!(captured, vec![pt("D5")]);
}

// =============================================================================
// GTP session
// =============================================================================

#[test]
fn test_gtp_session() {
    let mut engine = GtpEngine::with_size(SIZE).unwrap();
    let input = "\
boardsize 9
clear_board
play b A2
play w A1
play b J9
10 is_legal w B1
play w H9
play b B1
11 is_legal w A1
12 play w A1
quit
";
    let mut output = Vec::new();
    engine.serve(input.as_bytes(), &mut output).unwrap();
    let output = String::from_utf8(output).unwrap();
    let responses: Vec<&str> = output.split("\n\n").filter(|s| !s.is_empty()).collect();

    assert_eq!(responses.len(), 11);
    assert_eq!(responses[5], "=10 1");
    assert_eq!(responses[8], "=11 0");
    assert!(responses[9].starts_with("?12 "), "got {:?}", responses[9]);
    assert_eq!(engine.game().cell_at(8, 0), Cell::Empty);
    assert_eq!(engine.game().cell_at(8, 1), Cell::Black);
}
