//! The computer opponent's move policy.
//!
//! The policy is a fixed list of rules tried in order; the first rule that
//! finds a square decides the move. It looks one move ahead and no further.

use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::debug;

use super::board::{Board, Marker, Position, WINNING_LINES};

/// A single rule of the computer's move policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveRule {
    /// Complete a line holding two of the computer's markers.
    WinNow,
    /// Fill the gap in a line holding two of the opponent's markers.
    Block,
    /// Take the center square.
    TakeCenter,
    /// Take any unmarked square, uniformly at random.
    Random,
}

/// The rules in the order they are consulted.
pub const MOVE_RULES: [MoveRule; 4] = [
    MoveRule::WinNow,
    MoveRule::Block,
    MoveRule::TakeCenter,
    MoveRule::Random,
];

impl MoveRule {
    /// Returns the square this rule would play for `computer`, if any.
    pub fn pick<R: Rng + ?Sized>(
        self,
        board: &Board,
        computer: Marker,
        rng: &mut R,
    ) -> Option<Position> {
        match self {
            Self::WinNow => completing_square(board, computer),
            Self::Block => completing_square(board, computer.opposite()),
            Self::TakeCenter => board
                .square(Position::CENTER)
                .is_unmarked()
                .then_some(Position::CENTER),
            Self::Random => board.unmarked_positions().choose(rng).copied(),
        }
    }
}

/// Returns the empty square of the first line holding two `marker`s and
/// one unmarked square.
#[must_use]
pub fn completing_square(board: &Board, marker: Marker) -> Option<Position> {
    WINNING_LINES.iter().find_map(|line| {
        let mut owned = 0;
        let mut gap = None;
        for &position in line {
            match board.square(position).marker() {
                Some(found) if found == marker => owned += 1,
                Some(_) => return None,
                None => gap = Some(position),
            }
        }
        if owned == 2 { gap } else { None }
    })
}

/// Chooses the computer's move and the rule that produced it.
///
/// Returns `None` only when the board is full.
pub fn computer_move<R: Rng + ?Sized>(
    board: &Board,
    computer: Marker,
    rng: &mut R,
) -> Option<(Position, MoveRule)> {
    let choice = MOVE_RULES
        .into_iter()
        .find_map(|rule| rule.pick(board, computer, rng).map(|position| (position, rule)));

    if let Some((position, rule)) = choice {
        debug!(%position, ?rule, %computer, "computer picked a square");
    }

    choice
}
