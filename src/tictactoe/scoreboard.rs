//! Participants and round results.

use super::board::Marker;

/// Which side of the table a participant sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The person at the keyboard.
    Human,
    /// The heuristic opponent.
    Computer,
}

/// A participant: side, marker and round wins so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player {
    /// Which side this player is.
    pub side: Side,
    /// The marker this player places.
    pub marker: Marker,
    /// Rounds won since the last score reset.
    pub score: u32,
}

impl Player {
    /// Creates a player with no wins.
    #[must_use]
    pub const fn new(side: Side, marker: Marker) -> Self {
        Self {
            side,
            marker,
            score: 0,
        }
    }
}

/// How the human picks a marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerChoice {
    /// Play as X.
    X,
    /// Play as O.
    O,
    /// Let the computer pick at random.
    ComputerChooses,
}

impl MarkerChoice {
    /// Parses "X", "O" or "C", ignoring case and surrounding whitespace.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "x" | "X" => Some(Self::X),
            "o" | "O" => Some(Self::O),
            "c" | "C" => Some(Self::ComputerChooses),
            _ => None,
        }
    }
}

/// Result of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundResult {
    /// This side completed a line.
    Winner(Side),
    /// The board filled with no line.
    Tie,
}
