//! Error types for game operations.

use thiserror::Error;

use crate::tictactoe::Position;

/// Errors that can occur when dealing from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    EmptyDeck,
}

/// Errors that can occur during a hand of 21.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    NoCards,
}

impl From<DealError> for ActionError {
    fn from(err: DealError) -> Self {
        match err {
            DealError::EmptyDeck => Self::NoCards,
        }
    }
}

/// Errors that can occur when marking the Tic-Tac-Toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    /// The square already holds a marker.
    #[error("square {0} is already taken")]
    SquareTaken(Position),
    /// The other side is to move.
    #[error("not this side's turn")]
    NotYourTurn,
    /// Every square is marked.
    #[error("no unmarked squares left")]
    NoSquaresLeft,
}

/// Errors that end a console session.
///
/// Invalid input never ends up here; the console reprompts instead.
#[cfg(feature = "std")]
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Reading or writing the terminal failed.
    #[error("terminal i/o failed")]
    Io(#[from] std::io::Error),
    /// Standard input was closed while waiting for an answer.
    #[error("input closed while waiting for an answer")]
    InputClosed,
    /// The 21 engine rejected an action.
    #[error(transparent)]
    Action(#[from] ActionError),
    /// The Tic-Tac-Toe engine rejected a move.
    #[error(transparent)]
    Move(#[from] MoveError),
}
