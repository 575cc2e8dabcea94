//! Turn engine for a hand of 21 between one player and the dealer.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::deck::Deck;
use crate::hand::Hand;

mod actions;
mod dealer;
pub mod state;

pub use dealer::DEALER_STANDS_AT;
pub use state::{DealerAction, TurnState};

/// A game of 21 that owns the deck, both hands and the turn state.
///
/// The engine performs no I/O; a front end drives it through
/// [`deal`](Self::deal), [`hit`](Self::hit), [`stay`](Self::stay),
/// [`dealer_step`](Self::dealer_step) and [`showdown`](Self::showdown).
#[derive(Debug, Clone)]
pub struct TwentyOne {
    /// Cards left to deal.
    pub deck: Deck,
    /// Current turn state.
    state: TurnState,
    /// The player's hand.
    player: Hand,
    /// The dealer's hand. The first card is the one shown face up.
    dealer: Hand,
    /// Random number generator used for every shuffle.
    rng: ChaCha8Rng,
}

impl TwentyOne {
    /// Creates a new game with a freshly shuffled deck.
    ///
    /// # Example
    ///
    /// ```
    /// use parlor::{TurnState, TwentyOne};
    ///
    /// let game = TwentyOne::new(42);
    /// assert_eq!(game.state(), TurnState::Dealing);
    /// assert_eq!(game.deck.len(), 52);
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Deck::new(&mut rng);

        Self {
            deck,
            state: TurnState::Dealing,
            player: Hand::new(),
            dealer: Hand::new(),
            rng,
        }
    }

    /// Starts over with a full shuffled deck and empty hands.
    pub fn reset(&mut self) {
        self.deck = Deck::new(&mut self.rng);
        self.player.clear();
        self.dealer.clear();
        self.state = TurnState::Dealing;
        debug!("table reset with a fresh deck");
    }

    /// Returns the current turn state.
    #[must_use]
    pub const fn state(&self) -> TurnState {
        self.state
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer(&self) -> &Hand {
        &self.dealer
    }
}
