//! Showdown result types for 21.

/// How a hand of 21 ended, from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandOutcome {
    /// Player went over 21; the dealer wins without playing.
    PlayerBusted,
    /// Dealer went over 21; the player wins.
    DealerBusted,
    /// Player has the higher total.
    PlayerWins,
    /// Dealer has the higher total.
    DealerWins,
    /// Totals are equal.
    Tie,
}

impl HandOutcome {
    /// Returns whether the player won the hand.
    #[must_use]
    pub const fn player_won(self) -> bool {
        matches!(self, Self::DealerBusted | Self::PlayerWins)
    }
}

/// Result of a hand after showdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShowdownResult {
    /// The outcome of the hand.
    pub outcome: HandOutcome,
    /// The player's hand total.
    pub player_value: u8,
    /// The dealer's hand total.
    pub dealer_value: u8,
}
