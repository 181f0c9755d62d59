use alloc::vec::Vec;

use crate::card::Card;
use crate::error::{CardError, SourceError};

use super::{CardSource, Draw, pop_cards};

/// A source that deals a fixed list of cards in order.
///
/// Useful for scripted games and tests: the first card of the list is the
/// first card drawn.
#[derive(Debug, Clone, Default)]
pub struct StackedDeck {
    // Stored reversed so the next card is at the end.
    cards: Vec<Card>,
}

impl StackedDeck {
    /// Creates a source that deals `cards` front to back.
    #[must_use]
    pub fn new(cards: impl IntoIterator<Item = Card>) -> Self {
        let mut cards: Vec<Card> = cards.into_iter().collect();
        cards.reverse();
        Self { cards }
    }

    /// Creates a source from card codes such as `"AS"` or `"0H"`.
    ///
    /// # Errors
    ///
    /// Returns an error if any code is malformed.
    ///
    /// # Example
    ///
    /// ```
    /// use deckjack::{CardSource, StackedDeck};
    ///
    /// let mut deck = StackedDeck::from_codes(&["AS", "0H", "5C"]).unwrap();
    /// let draw = deck.draw(2).unwrap();
    /// assert_eq!(draw.cards[0].to_string(), "AS");
    /// assert_eq!(draw.remaining, 1);
    /// ```
    pub fn from_codes(codes: &[&str]) -> Result<Self, CardError> {
        let cards = codes
            .iter()
            .map(|code| code.parse::<Card>())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(cards))
    }
}

impl CardSource for StackedDeck {
    fn remaining(&self) -> usize {
        self.cards.len()
    }

    fn draw(&mut self, count: usize) -> Result<Draw, SourceError> {
        pop_cards(&mut self.cards, count)
    }
}
