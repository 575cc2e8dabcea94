use alloc::vec::Vec;

use tracing::{debug, info};

use crate::card::Card;
use crate::error::ActionError;
use crate::result::{HandOutcome, ShowdownResult};

use super::{DealerAction, TurnState, TwentyOne};

/// The dealer stands once their total reaches this value.
pub const DEALER_STANDS_AT: u8 = 17;

impl TwentyOne {
    /// Makes one dealer decision.
    ///
    /// The dealer stands at 17 or more and hits below that. A standing
    /// dealer, or a hit that busts, ends the hand.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the dealer's turn or the deck is empty.
    pub fn dealer_step(&mut self) -> Result<DealerAction, ActionError> {
        if self.state != TurnState::DealerTurn {
            return Err(ActionError::InvalidState);
        }

        if self.dealer.total() >= DEALER_STANDS_AT {
            debug!(total = self.dealer.total(), "dealer stands");
            self.state = TurnState::Showdown;
            return Ok(DealerAction::Stand);
        }

        let card = self.dealer.hit(&mut self.deck)?;
        debug!(%card, total = self.dealer.total(), "dealer hits");

        if self.dealer.is_busted() {
            self.state = TurnState::Showdown;
        }

        Ok(DealerAction::Hit(card))
    }

    /// Dealer plays out their hand.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the dealer's turn or the deck is empty
    /// while the dealer must draw.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, ActionError> {
        if self.state != TurnState::DealerTurn {
            return Err(ActionError::InvalidState);
        }

        let mut drawn_cards = Vec::new();
        while self.state == TurnState::DealerTurn {
            if let DealerAction::Hit(card) = self.dealer_step()? {
                drawn_cards.push(card);
            }
        }

        Ok(drawn_cards)
    }

    /// Returns whether the dealer's full hand is shown at showdown.
    ///
    /// The hand is shown when the player busted, or when the dealer finished
    /// on 17 or more without busting. A dealer who busted has already shown
    /// every card while drawing.
    #[must_use]
    pub fn reveals_dealer_at_showdown(&self) -> bool {
        self.player.is_busted()
            || (self.dealer.total() >= DEALER_STANDS_AT && !self.dealer.is_busted())
    }

    /// Compares the hands and returns the result.
    ///
    /// A busted player loses even if the dealer would also have busted.
    ///
    /// # Errors
    ///
    /// Returns an error if the hand is not over.
    pub fn showdown(&self) -> Result<ShowdownResult, ActionError> {
        if self.state != TurnState::Showdown {
            return Err(ActionError::InvalidState);
        }

        let player_value = self.player.total();
        let dealer_value = self.dealer.total();

        let outcome = if self.player.is_busted() {
            HandOutcome::PlayerBusted
        } else if self.dealer.is_busted() {
            HandOutcome::DealerBusted
        } else if player_value > dealer_value {
            HandOutcome::PlayerWins
        } else if dealer_value > player_value {
            HandOutcome::DealerWins
        } else {
            HandOutcome::Tie
        };

        info!(?outcome, player_value, dealer_value, "showdown");

        Ok(ShowdownResult {
            outcome,
            player_value,
            dealer_value,
        })
    }
}
