//! Turn states for a hand of 21.

/// Where a hand of 21 currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TurnState {
    /// Waiting for the initial deal.
    #[default]
    Dealing,
    /// Waiting for the player to hit or stay.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Hand is over and the result can be read.
    Showdown,
}

/// A single dealer decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealerAction {
    /// Dealer drew this card.
    Hit(crate::card::Card),
    /// Dealer stood on their total.
    Stand,
}
