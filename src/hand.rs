//! Hand valuation for 21.

use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::DealError;
use crate::listing::join_and;

/// Highest total a hand can have without busting.
pub const MAX_HAND_VALUE: u8 = 21;

fn evaluate_cards(cards: &[Card]) -> (u8, bool) {
    let mut value: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        value = value.saturating_add(card.value());
    }

    while value > MAX_HAND_VALUE && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    let is_soft = aces > 0 && value <= MAX_HAND_VALUE;
    (value, is_soft)
}

/// The cards held by the player or the dealer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Deals one card from `deck` into the hand and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::EmptyDeck`] if the deck is exhausted.
    pub fn hit(&mut self, deck: &mut Deck) -> Result<Card, DealError> {
        let card = deck.deal()?;
        self.add_card(card);
        Ok(card)
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the first card dealt, if any.
    #[must_use]
    pub fn first(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Calculates the best total of the hand.
    ///
    /// Aces count as 11 and are demoted to 1, one at a time, while the total
    /// exceeds 21.
    ///
    /// ```
    /// use parlor::{Card, Hand, Suit};
    ///
    /// let mut hand = Hand::new();
    /// hand.add_card(Card::new(Suit::Hearts, 1));
    /// hand.add_card(Card::new(Suit::Clubs, 1));
    /// hand.add_card(Card::new(Suit::Spades, 9));
    /// assert_eq!(hand.total(), 21);
    /// ```
    #[must_use]
    pub fn total(&self) -> u8 {
        evaluate_cards(&self.cards).0
    }

    /// Returns whether the total exceeds 21.
    #[must_use]
    pub fn is_busted(&self) -> bool {
        self.total() > MAX_HAND_VALUE
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(&self.cards).1
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new deal.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (total: {})", join_and(&self.cards), self.total())
    }
}
