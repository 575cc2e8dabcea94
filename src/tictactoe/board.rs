//! The 3x3 board, its squares and the winning lines.

use alloc::vec::Vec;
use core::fmt;

use crate::error::MoveError;

/// One of the two markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    /// X, always first to move.
    X,
    /// O.
    O,
}

impl Marker {
    /// Returns the other marker.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::X => Self::O,
            Self::O => Self::X,
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => write!(f, "X"),
            Self::O => write!(f, "O"),
        }
    }
}

/// A board cell, either unmarked or holding one marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Square {
    marker: Option<Marker>,
}

impl Square {
    /// Returns the marker in this square, if any.
    #[must_use]
    pub const fn marker(&self) -> Option<Marker> {
        self.marker
    }

    /// Returns whether a marker has been placed here.
    #[must_use]
    pub const fn is_marked(&self) -> bool {
        self.marker.is_some()
    }

    /// Returns whether the square is still empty.
    #[must_use]
    pub const fn is_unmarked(&self) -> bool {
        self.marker.is_none()
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.marker {
            Some(marker) => write!(f, "{marker}"),
            None => write!(f, " "),
        }
    }
}

/// A board position numbered 1 to 9, row by row from the top left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position(u8);

impl Position {
    /// The middle square.
    pub const CENTER: Self = Self(5);

    /// Every position in ascending order.
    pub const ALL: [Self; 9] = [
        Self(1),
        Self(2),
        Self(3),
        Self(4),
        Self(5),
        Self(6),
        Self(7),
        Self(8),
        Self(9),
    ];

    /// Returns the position numbered `number`, or `None` outside 1..=9.
    #[must_use]
    pub const fn new(number: u8) -> Option<Self> {
        match number {
            1..=9 => Some(Self(number)),
            _ => None,
        }
    }

    /// Returns the position's number (1..=9).
    #[must_use]
    pub const fn number(self) -> u8 {
        self.0
    }

    const fn index(self) -> usize {
        self.0 as usize - 1
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The eight winning lines: rows, then columns, then diagonals.
pub const WINNING_LINES: [[Position; 3]; 8] = [
    [Position(1), Position(2), Position(3)],
    [Position(4), Position(5), Position(6)],
    [Position(7), Position(8), Position(9)],
    [Position(1), Position(4), Position(7)],
    [Position(2), Position(5), Position(8)],
    [Position(3), Position(6), Position(9)],
    [Position(1), Position(5), Position(9)],
    [Position(3), Position(5), Position(7)],
];

/// A Tic-Tac-Toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    squares: [Square; 9],
}

impl Board {
    /// Creates an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Unmarks every square.
    pub fn reset(&mut self) {
        self.squares = [Square::default(); 9];
    }

    /// Returns the square at `position`.
    #[must_use]
    pub const fn square(&self, position: Position) -> Square {
        self.squares[position.index()]
    }

    /// Places `marker` at `position`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::SquareTaken`] if the square is already marked.
    pub const fn mark(&mut self, position: Position, marker: Marker) -> Result<(), MoveError> {
        let square = &mut self.squares[position.index()];
        if square.is_marked() {
            return Err(MoveError::SquareTaken(position));
        }
        square.marker = Some(marker);
        Ok(())
    }

    /// Returns the unmarked positions in ascending order.
    #[must_use]
    pub fn unmarked_positions(&self) -> Vec<Position> {
        Position::ALL
            .into_iter()
            .filter(|&position| self.square(position).is_unmarked())
            .collect()
    }

    /// Returns whether no unmarked squares remain.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(Square::is_marked)
    }

    /// Returns the marker of the first winning line holding three of it.
    ///
    /// Lines are scanned in [`WINNING_LINES`] order.
    #[must_use]
    pub fn winning_marker(&self) -> Option<Marker> {
        WINNING_LINES.into_iter().find_map(|line| {
            let [a, b, c] = line.map(|position| self.square(position).marker());
            match (a, b, c) {
                (Some(first), Some(second), Some(third)) if first == second && second == third => {
                    Some(first)
                }
                _ => None,
            }
        })
    }

    /// Returns whether any line has three identical markers.
    #[must_use]
    pub fn someone_won(&self) -> bool {
        self.winning_marker().is_some()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.squares.chunks(3).enumerate() {
            if row > 0 {
                writeln!(f, "-----+-----+-----")?;
            }
            writeln!(f, "     |     |")?;
            writeln!(f, "  {}  |  {}  |  {}", cells[0], cells[1], cells[2])?;
            writeln!(f, "     |     |")?;
        }
        Ok(())
    }
}
