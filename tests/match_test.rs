//! Tests for the match state machine.

use tictactoe_engine::{Cell, CellState, CoordError, Mark, Match, MatchStatus, PlaceOutcome};

#[test]
fn new_match_starts_empty_with_x_to_move() {
    let game = Match::new();
    assert_eq!(game.status(), MatchStatus::InProgress);
    assert_eq!(game.current_player(), Mark::X);
    for row in 0..3 {
        for col in 0..3 {
            assert_eq!(game.cell(row, col).unwrap(), CellState::Empty);
        }
    }
}

#[test]
fn turns_alternate_after_each_legal_move() {
    let mut game = Match::new();

    let outcome = game.place_mark(0, 0).unwrap();
    assert_eq!(outcome, PlaceOutcome::TurnAdvanced(Mark::O));
    assert_eq!(game.current_player(), Mark::O);

    let outcome = game.place_mark(1, 1).unwrap();
    assert_eq!(outcome, PlaceOutcome::TurnAdvanced(Mark::X));
    assert_eq!(game.current_player(), Mark::X);
}

#[test]
fn occupied_cell_is_a_no_op() {
    let mut game = Match::new();
    game.place_mark(0, 0).unwrap();
    let snapshot = game.clone();

    // Same cell again: O's attempt changes nothing
    let outcome = game.place_mark(0, 0).unwrap();
    assert_eq!(outcome, PlaceOutcome::Ignored);
    assert_eq!(game, snapshot);
    assert_eq!(game.cell(0, 0).unwrap(), CellState::Marked(Mark::X));
    assert_eq!(game.current_player(), Mark::O);
}

#[test]
fn moves_after_match_end_are_ignored() {
    let mut game = Match::new();
    // X: (0,0) (0,1) (0,2) wins the top row; O: (1,0) (1,1)
    for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
        game.place_mark(row, col).unwrap();
    }
    assert_eq!(game.place_mark(0, 2).unwrap(), PlaceOutcome::Won(Mark::X));

    let snapshot = game.clone();
    let outcome = game.place_mark(2, 2).unwrap();
    assert_eq!(outcome, PlaceOutcome::Ignored);
    assert_eq!(game, snapshot);
    assert_eq!(game.cell(2, 2).unwrap(), CellState::Empty);
}

#[test]
fn out_of_range_coordinates_fail_fast() {
    let mut game = Match::new();
    assert_eq!(
        game.place_mark(3, 0),
        Err(CoordError { row: 3, col: 0 })
    );
    assert_eq!(game.cell(0, 9), Err(CoordError { row: 0, col: 9 }));
    // Nothing changed
    assert_eq!(game, Match::new());
}

/// Plays out the given moves, asserting all but the last keep the match in
/// progress, and returns the outcome of the last one.
fn play(game: &mut Match, moves: &[(usize, usize)]) -> PlaceOutcome {
    let (last, prefix) = moves.split_last().unwrap();
    for &(row, col) in prefix {
        let outcome = game.place_mark(row, col).unwrap();
        assert!(matches!(outcome, PlaceOutcome::TurnAdvanced(_)));
    }
    game.place_mark(last.0, last.1).unwrap()
}

#[test]
fn each_of_the_eight_lines_wins() {
    // For each line: X takes the line while O fills cells off the line.
    let cases: [([(usize, usize); 3], [(usize, usize); 2]); 8] = [
        // Rows
        ([(0, 0), (0, 1), (0, 2)], [(1, 0), (1, 1)]),
        ([(1, 0), (1, 1), (1, 2)], [(0, 0), (0, 1)]),
        ([(2, 0), (2, 1), (2, 2)], [(0, 0), (0, 1)]),
        // Columns
        ([(0, 0), (1, 0), (2, 0)], [(0, 1), (0, 2)]),
        ([(0, 1), (1, 1), (2, 1)], [(0, 0), (0, 2)]),
        ([(0, 2), (1, 2), (2, 2)], [(0, 0), (0, 1)]),
        // Diagonals
        ([(0, 0), (1, 1), (2, 2)], [(0, 1), (0, 2)]),
        ([(0, 2), (1, 1), (2, 0)], [(0, 0), (0, 1)]),
    ];

    for (x_line, o_fill) in cases {
        let mut game = Match::new();
        let moves = [
            x_line[0], o_fill[0], x_line[1], o_fill[1], x_line[2],
        ];
        let outcome = play(&mut game, &moves);
        assert_eq!(outcome, PlaceOutcome::Won(Mark::X), "line {x_line:?}");
        assert_eq!(game.status(), MatchStatus::Won(Mark::X));
    }
}

#[test]
fn full_board_without_a_line_ties() {
    let mut game = Match::new();
    // Fills as X O X / X O O / O X X
    let moves = [
        (0, 0), // X
        (0, 1), // O
        (0, 2), // X
        (1, 1), // O
        (1, 0), // X
        (1, 2), // O
        (2, 1), // X
        (2, 0), // O
        (2, 2), // X
    ];
    let outcome = play(&mut game, &moves);
    assert_eq!(outcome, PlaceOutcome::Tied);
    assert_eq!(game.status(), MatchStatus::Tied);
}

#[test]
fn scripted_top_row_win() {
    // (X:0,0) (O:1,1) (X:0,1) (O:2,2) (X:0,2)
    let mut game = Match::new();
    let outcome = play(&mut game, &[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)]);
    assert_eq!(outcome, PlaceOutcome::Won(Mark::X));
    for col in 0..3 {
        assert_eq!(game.cell(0, col).unwrap(), CellState::Marked(Mark::X));
    }
}

#[test]
fn reset_restores_the_initial_state() {
    let mut game = Match::new();
    play(&mut game, &[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)]);
    assert!(game.status().is_terminal());

    game.reset();
    assert_eq!(game, Match::new());
}

#[test]
fn cell_typed_entry_point_matches_coordinates() {
    let mut game = Match::new();
    let outcome = game.place(Cell::Center);
    assert_eq!(outcome, PlaceOutcome::TurnAdvanced(Mark::O));
    assert_eq!(game.cell(1, 1).unwrap(), CellState::Marked(Mark::X));
}

#[test]
fn winning_move_does_not_toggle_the_player() {
    let mut game = Match::new();
    play(&mut game, &[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)]);
    // X just won; the turn never passed to O
    assert_eq!(game.current_player(), Mark::X);
}
