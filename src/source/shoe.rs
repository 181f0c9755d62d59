use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Suit};
use crate::error::SourceError;

use super::{CardSource, Draw, pop_cards};

/// An in-memory shoe shuffled from a seed.
///
/// The same seed and deck count always produce the same card order.
#[derive(Debug, Clone)]
pub struct ShuffledShoe {
    cards: Vec<Card>,
}

impl ShuffledShoe {
    /// Builds and shuffles a shoe of `decks` standard decks.
    ///
    /// # Example
    ///
    /// ```
    /// use deckjack::{CardSource, ShuffledShoe};
    ///
    /// let shoe = ShuffledShoe::new(6, 42);
    /// assert_eq!(shoe.remaining(), 312);
    /// ```
    #[must_use]
    pub fn new(decks: u8, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut cards = Vec::with_capacity(decks as usize * DECK_SIZE);

        for _ in 0..decks {
            for suit in Suit::ALL {
                for rank in 1..=13 {
                    cards.push(Card::new(suit, rank));
                }
            }
        }

        cards.shuffle(&mut rng);
        log::debug!("shuffled a {decks}-deck shoe ({} cards)", cards.len());
        Self { cards }
    }
}

impl CardSource for ShuffledShoe {
    fn remaining(&self) -> usize {
        self.cards.len()
    }

    fn draw(&mut self, count: usize) -> Result<Draw, SourceError> {
        pop_cards(&mut self.cards, count)
    }
}
