//! Match configuration options.

/// Configuration options for a Tic-Tac-Toe match.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use parlor::MatchOptions;
///
/// let options = MatchOptions::default().with_score_to_win(5);
/// assert_eq!(options.score_to_win, 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MatchOptions {
    /// Round wins needed to become grand champion.
    pub score_to_win: u32,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self { score_to_win: 3 }
    }
}

impl MatchOptions {
    /// Sets the number of round wins needed to become grand champion.
    ///
    /// A threshold of zero is raised to one.
    ///
    /// # Example
    ///
    /// ```
    /// use parlor::MatchOptions;
    ///
    /// let options = MatchOptions::default().with_score_to_win(0);
    /// assert_eq!(options.score_to_win, 1);
    /// ```
    #[must_use]
    pub const fn with_score_to_win(mut self, score: u32) -> Self {
        self.score_to_win = if score == 0 { 1 } else { score };
        self
    }
}
