//! Match engine: alternating turns, scoring and the grand champion.

use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::error::MoveError;
use crate::options::MatchOptions;

use super::board::{Board, Marker, Position};
use super::heuristic::computer_move;
use super::scoreboard::{MarkerChoice, Player, RoundResult, Side};

/// The marker that opens every round.
pub const FIRST_TO_MOVE: Marker = Marker::X;

/// Names the computer opponent may go by.
pub const COMPUTER_NAMES: [&str; 5] = ["R2D2", "C3PO", "BB8", "K2SO", "B2EMO"];

/// A match of Tic-Tac-Toe rounds between the human and the computer.
#[derive(Debug, Clone)]
pub struct Match {
    /// The board for the current round.
    pub board: Board,
    /// Match options.
    pub options: MatchOptions,
    human: Player,
    computer: Player,
    computer_name: &'static str,
    /// Marker of the side to move.
    current: Marker,
    rng: ChaCha8Rng,
}

impl Match {
    /// Creates a match, resolving the human's marker choice.
    ///
    /// The computer takes the other marker and a random name.
    ///
    /// # Example
    ///
    /// ```
    /// use parlor::{Marker, MarkerChoice, Match, MatchOptions, Side};
    ///
    /// let game = Match::new(MarkerChoice::O, MatchOptions::default(), 7);
    /// assert_eq!(game.player(Side::Computer).marker, Marker::X);
    /// assert_eq!(game.side_to_move(), Side::Computer);
    /// ```
    #[must_use]
    pub fn new(choice: MarkerChoice, options: MatchOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let computer_name = COMPUTER_NAMES.choose(&mut rng).copied().unwrap_or("R2D2");
        let human_marker = match choice {
            MarkerChoice::X => Marker::X,
            MarkerChoice::O => Marker::O,
            MarkerChoice::ComputerChooses => {
                if rng.random_bool(0.5) {
                    Marker::X
                } else {
                    Marker::O
                }
            }
        };
        debug!(%human_marker, computer_name, "match created");

        Self {
            board: Board::new(),
            options,
            human: Player::new(Side::Human, human_marker),
            computer: Player::new(Side::Computer, human_marker.opposite()),
            computer_name,
            current: FIRST_TO_MOVE,
            rng,
        }
    }

    /// Returns the player on `side`.
    #[must_use]
    pub const fn player(&self, side: Side) -> &Player {
        match side {
            Side::Human => &self.human,
            Side::Computer => &self.computer,
        }
    }

    /// Returns the computer's display name.
    #[must_use]
    pub const fn computer_name(&self) -> &'static str {
        self.computer_name
    }

    /// Returns the side whose turn it is.
    #[must_use]
    pub fn side_to_move(&self) -> Side {
        if self.current == self.human.marker {
            Side::Human
        } else {
            Side::Computer
        }
    }

    /// Returns whether it is the human's turn.
    #[must_use]
    pub fn is_human_turn(&self) -> bool {
        self.side_to_move() == Side::Human
    }

    /// Marks `position` for the human and passes the turn.
    ///
    /// # Errors
    ///
    /// Returns an error if it is the computer's turn or the square is taken.
    pub fn human_moves(&mut self, position: Position) -> Result<(), MoveError> {
        if !self.is_human_turn() {
            return Err(MoveError::NotYourTurn);
        }
        self.board.mark(position, self.human.marker)?;
        self.current = self.computer.marker;
        Ok(())
    }

    /// Lets the computer pick and mark a square, then passes the turn.
    ///
    /// Returns the square the computer played.
    ///
    /// # Errors
    ///
    /// Returns an error if it is the human's turn or the board is full.
    pub fn computer_moves(&mut self) -> Result<Position, MoveError> {
        if self.is_human_turn() {
            return Err(MoveError::NotYourTurn);
        }
        let (position, _) = computer_move(&self.board, self.computer.marker, &mut self.rng)
            .ok_or(MoveError::NoSquaresLeft)?;
        self.board.mark(position, self.computer.marker)?;
        self.current = self.human.marker;
        Ok(position)
    }

    /// Returns whether the current round has a winner or a full board.
    #[must_use]
    pub fn is_round_over(&self) -> bool {
        self.board.someone_won() || self.board.is_full()
    }

    /// Returns the result of the current board without scoring it.
    #[must_use]
    pub fn round_result(&self) -> RoundResult {
        match self.board.winning_marker() {
            Some(marker) if marker == self.human.marker => RoundResult::Winner(Side::Human),
            Some(_) => RoundResult::Winner(Side::Computer),
            None => RoundResult::Tie,
        }
    }

    /// Scores the current board: one point to the winning side, none on a tie.
    pub fn tally(&mut self) -> RoundResult {
        let result = self.round_result();
        match result {
            RoundResult::Winner(Side::Human) => self.human.score += 1,
            RoundResult::Winner(Side::Computer) => self.computer.score += 1,
            RoundResult::Tie => {}
        }
        info!(
            ?result,
            human = self.human.score,
            computer = self.computer.score,
            "round tallied"
        );
        result
    }

    /// Returns the side that reached the win threshold, if any.
    #[must_use]
    pub const fn grand_champion(&self) -> Option<Side> {
        if self.human.score >= self.options.score_to_win {
            Some(Side::Human)
        } else if self.computer.score >= self.options.score_to_win {
            Some(Side::Computer)
        } else {
            None
        }
    }

    /// Clears the board for a new round with X to move.
    pub fn reset_board(&mut self) {
        self.board.reset();
        self.current = FIRST_TO_MOVE;
    }

    /// Sets both scores back to zero.
    pub const fn reset_scores(&mut self) {
        self.human.score = 0;
        self.computer.score = 0;
    }
}
