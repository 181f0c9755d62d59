//! Card sources.
//!
//! The engine never shuffles or stores a shoe itself. It asks a
//! [`CardSource`] for cards and keeps the remaining count the source reports
//! alongside them.

use alloc::vec::Vec;

use crate::card::Card;
use crate::error::SourceError;

#[cfg(feature = "http")]
#[cfg_attr(docsrs, doc(cfg(feature = "http")))]
pub mod deck_api;
mod shoe;
mod stacked;

#[cfg(feature = "http")]
pub use deck_api::DeckApi;
pub use shoe::ShuffledShoe;
pub use stacked::StackedDeck;

/// Cards handed out by a single draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draw {
    /// The drawn cards, in the order they came off the shoe.
    pub cards: Vec<Card>,
    /// Cards left in the source after this draw.
    pub remaining: usize,
}

/// A shuffled supply of cards.
pub trait CardSource {
    /// Returns the number of cards left.
    fn remaining(&self) -> usize;

    /// Draws `count` cards.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot hand out the cards. A failed draw
    /// must not consume any cards.
    fn draw(&mut self, count: usize) -> Result<Draw, SourceError>;
}

impl<S: CardSource + ?Sized> CardSource for &mut S {
    fn remaining(&self) -> usize {
        (**self).remaining()
    }

    fn draw(&mut self, count: usize) -> Result<Draw, SourceError> {
        (**self).draw(count)
    }
}

/// Pops `count` cards off the end of `cards`, the end being the top of the shoe.
pub(crate) fn pop_cards(cards: &mut Vec<Card>, count: usize) -> Result<Draw, SourceError> {
    if count > cards.len() {
        return Err(SourceError::NotEnoughCards {
            requested: count,
            remaining: cards.len(),
        });
    }

    let drawn = cards.split_off(cards.len() - count).into_iter().rev().collect();
    Ok(Draw {
        cards: drawn,
        remaining: cards.len(),
    })
}
