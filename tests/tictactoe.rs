//! Tic-Tac-Toe integration tests.

use parlor::tictactoe::heuristic::completing_square;
use parlor::tictactoe::{COMPUTER_NAMES, FIRST_TO_MOVE, MOVE_RULES, computer_move};
use parlor::{
    Board, Marker, MarkerChoice, Match, MatchOptions, MoveError, MoveRule, Position, RoundResult,
    Side,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn pos(number: u8) -> Position {
    Position::new(number).unwrap()
}

fn board_with(xs: &[u8], os: &[u8]) -> Board {
    let mut board = Board::new();
    for &number in xs {
        board.mark(pos(number), Marker::X).unwrap();
    }
    for &number in os {
        board.mark(pos(number), Marker::O).unwrap();
    }
    board
}

#[test]
fn positions_outside_one_to_nine_are_rejected() {
    assert_eq!(Position::new(0), None);
    assert_eq!(Position::new(10), None);
    assert_eq!(Position::new(5), Some(Position::CENTER));
    assert_eq!(pos(7).number(), 7);
}

#[test]
fn top_row_of_x_wins() {
    let board = board_with(&[1, 2, 3], &[]);
    assert_eq!(board.winning_marker(), Some(Marker::X));
    assert!(board.someone_won());
    assert!(!board.is_full());
}

#[test]
fn columns_and_diagonals_win() {
    assert_eq!(
        board_with(&[], &[2, 5, 8]).winning_marker(),
        Some(Marker::O)
    );
    assert_eq!(
        board_with(&[3, 5, 7], &[1, 2]).winning_marker(),
        Some(Marker::X)
    );
}

#[test]
fn mixed_line_does_not_win() {
    let board = board_with(&[1, 2], &[3]);
    assert_eq!(board.winning_marker(), None);
    assert!(!board.someone_won());
}

#[test]
fn full_board_without_line_is_a_draw() {
    // X O X
    // X O O
    // O X X
    let board = board_with(&[1, 3, 4, 8, 9], &[2, 5, 6, 7]);
    assert!(board.is_full());
    assert_eq!(board.winning_marker(), None);
    assert!(!board.someone_won());
    assert!(board.unmarked_positions().is_empty());
}

#[test]
fn marking_a_taken_square_fails() {
    let mut board = board_with(&[4], &[]);
    assert_eq!(
        board.mark(pos(4), Marker::O),
        Err(MoveError::SquareTaken(pos(4)))
    );
    assert_eq!(board.square(pos(4)).marker(), Some(Marker::X));

    board.reset();
    assert!(board.square(pos(4)).is_unmarked());
    assert_eq!(board.unmarked_positions().len(), 9);
}

#[test]
fn board_renders_as_grid() {
    let rendered = board_with(&[1], &[5]).to_string();
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines.len(), 11);
    assert_eq!(lines[1], "  X  |     |   ");
    assert_eq!(lines[3], "-----+-----+-----");
    assert_eq!(lines[5], "     |  O  |   ");
}

#[test]
fn computer_completes_its_own_line() {
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let board = board_with(&[4, 7], &[1, 2]);

    let (square, rule) = computer_move(&board, Marker::O, &mut rng).unwrap();
    assert_eq!(square, pos(3));
    assert_eq!(rule, MoveRule::WinNow);
}

#[test]
fn winning_beats_blocking() {
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    // X threatens 3, O can complete the middle row at 4.
    let board = board_with(&[1, 2, 8], &[5, 6]);

    let (square, rule) = computer_move(&board, Marker::O, &mut rng).unwrap();
    assert_eq!(rule, MoveRule::WinNow);
    assert_eq!(square, pos(4));
}

#[test]
fn computer_blocks_before_taking_center() {
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let board = board_with(&[1, 2], &[]);

    let (square, rule) = computer_move(&board, Marker::O, &mut rng).unwrap();
    assert_eq!(square, pos(3));
    assert_eq!(rule, MoveRule::Block);
}

#[test]
fn computer_takes_center_when_nothing_is_urgent() {
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let board = board_with(&[1], &[]);

    let (square, rule) = computer_move(&board, Marker::O, &mut rng).unwrap();
    assert_eq!(square, Position::CENTER);
    assert_eq!(rule, MoveRule::TakeCenter);
}

#[test]
fn computer_falls_back_to_an_unmarked_square() {
    let board = board_with(&[5], &[]);
    for seed in 0..20 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let (square, rule) = computer_move(&board, Marker::O, &mut rng).unwrap();
        assert_eq!(rule, MoveRule::Random);
        assert!(board.square(square).is_unmarked());
    }
}

#[test]
fn computer_has_no_move_on_full_board() {
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let board = board_with(&[1, 3, 4, 8, 9], &[2, 5, 6, 7]);
    assert_eq!(computer_move(&board, Marker::X, &mut rng), None);
}

#[test]
fn rules_are_consulted_in_fixed_order() {
    assert_eq!(
        MOVE_RULES,
        [
            MoveRule::WinNow,
            MoveRule::Block,
            MoveRule::TakeCenter,
            MoveRule::Random
        ]
    );

    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let board = board_with(&[1, 2], &[]);
    assert_eq!(MoveRule::WinNow.pick(&board, Marker::O, &mut rng), None);
    assert_eq!(MoveRule::Block.pick(&board, Marker::O, &mut rng), Some(pos(3)));
    assert_eq!(
        MoveRule::TakeCenter.pick(&board, Marker::O, &mut rng),
        Some(Position::CENTER)
    );
}

#[test]
fn completing_square_ignores_blocked_lines() {
    assert_eq!(completing_square(&board_with(&[1, 2], &[3]), Marker::X), None);
    assert_eq!(
        completing_square(&board_with(&[1, 5], &[3]), Marker::X),
        Some(pos(9))
    );
}

#[test]
fn x_always_moves_first_and_turns_alternate() {
    let mut game = Match::new(MarkerChoice::X, MatchOptions::default(), 1);
    assert_eq!(FIRST_TO_MOVE, Marker::X);
    assert_eq!(game.player(Side::Human).marker, Marker::X);
    assert_eq!(game.player(Side::Computer).marker, Marker::O);
    assert!(COMPUTER_NAMES.contains(&game.computer_name()));

    assert_eq!(game.computer_moves(), Err(MoveError::NotYourTurn));
    game.human_moves(pos(1)).unwrap();
    assert_eq!(game.side_to_move(), Side::Computer);
    assert_eq!(game.human_moves(pos(2)), Err(MoveError::NotYourTurn));

    assert_eq!(game.computer_moves(), Ok(Position::CENTER));
    assert_eq!(game.side_to_move(), Side::Human);
}

#[test]
fn computer_chosen_marker_is_one_of_the_two() {
    for seed in 0..10 {
        let game = Match::new(MarkerChoice::ComputerChooses, MatchOptions::default(), seed);
        let human = game.player(Side::Human).marker;
        assert_eq!(game.player(Side::Computer).marker, human.opposite());
        assert_eq!(game.is_human_turn(), human == Marker::X);
    }
}

#[test]
fn marker_choice_parses_case_insensitively() {
    assert_eq!(MarkerChoice::parse("x"), Some(MarkerChoice::X));
    assert_eq!(MarkerChoice::parse("O"), Some(MarkerChoice::O));
    assert_eq!(MarkerChoice::parse(" c "), Some(MarkerChoice::ComputerChooses));
    assert_eq!(MarkerChoice::parse("z"), None);
    assert_eq!(MarkerChoice::parse(""), None);
}

#[test]
fn computer_wins_when_human_leaves_line_open() {
    let mut game = Match::new(MarkerChoice::X, MatchOptions::default(), 4);

    game.human_moves(pos(1)).unwrap();
    assert_eq!(game.computer_moves(), Ok(pos(5)));
    game.human_moves(pos(2)).unwrap();
    assert_eq!(game.computer_moves(), Ok(pos(3)));
    game.human_moves(pos(9)).unwrap();
    assert_eq!(game.computer_moves(), Ok(pos(7)));

    assert!(game.is_round_over());
    assert_eq!(game.tally(), RoundResult::Winner(Side::Computer));
    assert_eq!(game.player(Side::Computer).score, 1);
    assert_eq!(game.player(Side::Human).score, 0);
}

#[test]
fn tie_awards_nobody() {
    let mut game = Match::new(MarkerChoice::O, MatchOptions::default(), 2);
    game.board = board_with(&[1, 3, 4, 8, 9], &[2, 5, 6, 7]);

    assert!(game.is_round_over());
    assert_eq!(game.tally(), RoundResult::Tie);
    assert_eq!(game.player(Side::Human).score, 0);
    assert_eq!(game.player(Side::Computer).score, 0);
}

#[test]
fn three_wins_make_a_grand_champion() {
    let mut game = Match::new(MarkerChoice::X, MatchOptions::default(), 8);

    for round in 1..=3 {
        assert_eq!(game.grand_champion(), None);
        game.board = board_with(&[1, 2, 3], &[4, 5]);
        assert_eq!(game.tally(), RoundResult::Winner(Side::Human));
        assert_eq!(game.player(Side::Human).score, round);
        game.reset_board();
    }

    assert_eq!(game.grand_champion(), Some(Side::Human));
    assert!(game.player(Side::Computer).score < 3);

    game.reset_scores();
    assert_eq!(game.grand_champion(), None);
    assert_eq!(game.player(Side::Human).score, 0);
}

#[test]
fn score_threshold_is_configurable() {
    let options = MatchOptions::default().with_score_to_win(1);
    let mut game = Match::new(MarkerChoice::O, options, 8);

    game.board = board_with(&[1, 2, 3], &[4, 5]);
    assert_eq!(game.tally(), RoundResult::Winner(Side::Computer));
    assert_eq!(game.grand_champion(), Some(Side::Computer));
}

#[test]
fn reset_board_gives_x_the_first_move() {
    let mut game = Match::new(MarkerChoice::O, MatchOptions::default(), 6);
    game.computer_moves().unwrap();
    assert!(game.is_human_turn());

    game.reset_board();
    assert!(!game.is_human_turn());
    assert_eq!(game.board.unmarked_positions().len(), 9);
}
