//! Tic-Tac-Toe against a heuristic computer opponent.

pub mod board;
pub mod heuristic;
pub mod round;
pub mod scoreboard;

pub use board::{Board, Marker, Position, Square, WINNING_LINES};
pub use heuristic::{MOVE_RULES, MoveRule, computer_move};
pub use round::{COMPUTER_NAMES, FIRST_TO_MOVE, Match};
pub use scoreboard::{MarkerChoice, Player, RoundResult, Side};
