//! End-to-end tests for playing, jumping and branching.

use timetravel_tictactoe::{
    Board, GameState, GameStatus, JumpError, Mark, MoveError, Position, SortOrder,
};

fn play(game: &mut GameState, cells: &[usize]) {
    for &cell in cells {
        game.apply_move(cell).expect("Valid move");
    }
}

#[test]
fn test_diagonal_win() {
    let mut game = GameState::new();
    play(&mut game, &[0, 1, 4, 3, 8]);

    assert_eq!(game.winning_cells(), Some([0, 4, 8]));
    assert_eq!(game.current_status(), "The Winner is X");
    assert!(matches!(game.status(), GameStatus::Won(line) if line.winner == Mark::X));
}

#[test]
fn test_centre_taken_by_o_blocks_diagonal() {
    // O holds the centre, so X's corners and top edge complete nothing.
    let mut game = GameState::new();
    play(&mut game, &[0, 4, 1, 3, 8]);

    assert_eq!(game.winning_cells(), None);
    assert_eq!(game.current_status(), "Next player is O");
}

#[test]
fn test_full_board_draw() {
    // X O X / X O O / O X X
    let mut game = GameState::new();
    play(&mut game, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

    assert_eq!(game.current_status(), "draw");
    assert_eq!(game.winning_cells(), None);
    assert_eq!(game.status(), GameStatus::Draw);
    assert_eq!(game.history_len(), 10);
}

#[test]
fn test_rejected_moves_leave_state_untouched() {
    let mut game = GameState::new();
    play(&mut game, &[4, 0]);
    let before = game.clone();

    assert_eq!(
        game.apply_move(4),
        Err(MoveError::SquareOccupied(Position::Center))
    );
    assert_eq!(game.apply_move(42), Err(MoveError::OutOfBounds(42)));
    assert_eq!(game, before);

    play(&mut game, &[1, 8, 7]);
    let decided = game.clone();
    assert_eq!(game.apply_move(2), Err(MoveError::GameOver));
    assert_eq!(game.history_len(), decided.history_len());
    assert_eq!(game.current_step(), decided.current_step());
}

#[test]
fn test_jump_reports_snapshot_status() {
    let mut game = GameState::new();
    play(&mut game, &[0, 3, 1, 4, 2]);
    assert_eq!(game.current_status(), "The Winner is X");

    for step in 0..game.history_len() {
        game.jump_to_step(step).expect("Valid step");
        let board = game.history().get(step).expect("Recorded step").board();
        let expected = GameStatus::evaluate(&board, Mark::for_step(step));
        assert_eq!(game.current_status(), expected.to_string());
        assert_eq!(game.current_board(), board);
    }

    game.jump_to_step(3).expect("Valid step");
    assert_eq!(game.current_status(), "Next player is O");
    assert_eq!(game.winning_cells(), None);
}

#[test]
fn test_move_after_jump_truncates_future() {
    let mut game = GameState::new();
    play(&mut game, &[0, 1, 2, 3, 4]);

    for k in 0..5 {
        let mut branched = game.clone();
        branched.jump_to_step(k).expect("Valid step");
        let free = Position::ALL
            .iter()
            .find(|&&p| branched.current_board().is_empty(p))
            .expect("Free square")
            .to_index();
        branched.apply_move(free).expect("Valid move");

        assert_eq!(branched.history_len(), k + 2);
        assert_eq!(branched.current_step(), k + 1);
        for step in 0..=k {
            assert_eq!(branched.history().get(step), game.history().get(step));
        }
    }
}

#[test]
fn test_finished_game_can_branch_from_the_past() {
    let mut game = GameState::new();
    play(&mut game, &[0, 3, 1, 4, 2]);
    assert_eq!(game.apply_move(8), Err(MoveError::GameOver));

    game.jump_to_step(3).expect("Valid step");
    play(&mut game, &[4, 8, 5]);
    assert_eq!(game.current_status(), "The Winner is O");
    assert_eq!(game.winning_cells(), Some([3, 4, 5]));
    assert_eq!(game.history_len(), 7);
}

#[test]
fn test_jump_out_of_range_rejected() {
    let mut game = GameState::new();
    play(&mut game, &[0, 1]);
    let before = game.clone();

    assert_eq!(
        game.jump_to_step(3),
        Err(JumpError::StepOutOfRange { step: 3, len: 3 })
    );
    assert_eq!(game, before);
}

#[test]
fn test_turn_derived_from_cursor() {
    let mut game = GameState::new();
    play(&mut game, &[0, 1, 2]);

    game.jump_to_step(2).expect("Valid step");
    assert_eq!(game.next_mark(), Mark::X);
    game.jump_to_step(1).expect("Valid step");
    assert_eq!(game.next_mark(), Mark::O);
    assert_eq!(game.current_status(), "Next player is O");
}

#[test]
fn test_mark_counts_stay_balanced() {
    // Walk a fixed pseudo-random sequence of cells, jumping back now and then.
    let mut game = GameState::new();
    let mut seed = 7usize;
    for round in 0..200 {
        seed = (seed * 31 + 17) % 997;
        if round % 7 == 6 {
            let step = seed % game.history_len();
            game.jump_to_step(step).expect("Valid step");
        } else {
            let _ = game.apply_move(seed % 9);
        }

        let board: Board = game.current_board();
        let diff = board.count(Mark::X) as isize - board.count(Mark::O) as isize;
        assert!(diff == 0 || diff == 1, "board:\n{}", board.display());
        if game.status().is_over() {
            game.reset();
        }
    }
}

#[test]
fn test_reset_returns_to_start() {
    let mut game = GameState::with_order(SortOrder::Descending);
    play(&mut game, &[0, 4, 8]);
    game.reset();

    assert_eq!(game.history_len(), 1);
    assert_eq!(game.current_step(), 0);
    assert_eq!(game.current_board(), Board::new());
    assert!(!game.is_ascending());
}
