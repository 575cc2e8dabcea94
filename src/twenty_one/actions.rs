use tracing::debug;

use crate::card::Card;
use crate::error::ActionError;

use super::{TurnState, TwentyOne};

impl TwentyOne {
    fn ensure_state(&self, expected: TurnState) -> Result<(), ActionError> {
        if self.state == expected {
            Ok(())
        } else {
            Err(ActionError::InvalidState)
        }
    }

    /// Deals two cards each, alternating player then dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the hand has already been dealt or the deck runs
    /// out of cards.
    pub fn deal(&mut self) -> Result<(), ActionError> {
        self.ensure_state(TurnState::Dealing)?;

        for _ in 0..2 {
            self.player.hit(&mut self.deck)?;
            self.dealer.hit(&mut self.deck)?;
        }

        debug!(
            player = self.player.total(),
            dealer_up = ?self.dealer.first(),
            "initial cards dealt"
        );
        self.state = TurnState::PlayerTurn;
        Ok(())
    }

    /// Player action: Hit (draw a card).
    ///
    /// A hit that busts the player ends the hand without a dealer turn.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the deck is empty.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        self.ensure_state(TurnState::PlayerTurn)?;

        let card = self.player.hit(&mut self.deck)?;
        debug!(%card, total = self.player.total(), "player hits");

        if self.player.is_busted() {
            self.state = TurnState::Showdown;
        }

        Ok(card)
    }

    /// Player action: Stay (keep the current hand).
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn stay(&mut self) -> Result<(), ActionError> {
        self.ensure_state(TurnState::PlayerTurn)?;

        debug!(total = self.player.total(), "player stays");
        self.state = TurnState::DealerTurn;
        Ok(())
    }
}
