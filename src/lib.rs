//! Console 21 and Tic-Tac-Toe with rule engines that build without `std`.
//!
//! The crate provides a [`TwentyOne`] engine that deals and plays out a hand
//! of 21 against the dealer, and a [`Match`] engine that runs Tic-Tac-Toe
//! rounds against a heuristic computer opponent until one side becomes
//! grand champion. With the `std` feature, the [`console`] module drives
//! either engine over any line-oriented reader and writer.
//!
//! # Example
//!
//! ```
//! use parlor::{HandOutcome, TwentyOne};
//!
//! let mut game = TwentyOne::new(42);
//! game.deal().unwrap();
//! game.stay().unwrap();
//! game.dealer_play().unwrap();
//! let result = game.showdown().unwrap();
//! assert_ne!(result.outcome, HandOutcome::PlayerBusted);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod console;
pub mod deck;
pub mod error;
pub mod hand;
pub mod listing;
pub mod options;
pub mod result;
pub mod tictactoe;
pub mod twenty_one;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
#[cfg(feature = "std")]
pub use console::{Console, MatchTable, TwentyOneTable};
#[cfg(feature = "std")]
pub use error::ConsoleError;
pub use deck::Deck;
pub use error::{ActionError, DealError, MoveError};
pub use hand::{Hand, MAX_HAND_VALUE};
pub use options::MatchOptions;
pub use result::{HandOutcome, ShowdownResult};
pub use tictactoe::{
    Board, Marker, MarkerChoice, Match, MoveRule, Player, Position, RoundResult, Side, Square,
};
pub use twenty_one::{DEALER_STANDS_AT, DealerAction, TurnState, TwentyOne};
