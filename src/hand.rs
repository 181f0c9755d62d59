//! Player hands and scoring.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;

/// Highest total that does not bust.
pub const TWENTY_ONE: u32 = 21;

/// A scored hand total that keeps track of how its Aces were counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandTotal {
    /// Exactly two cards totalling 21.
    Blackjack,
    /// At least one Ace is still counted as 11.
    Soft(u32),
    /// Every Ace had to be counted as 1 to bring the total down.
    Hard(u32),
    /// No Aces in the hand.
    Total(u32),
}

impl HandTotal {
    /// Returns the numeric total.
    #[must_use]
    pub const fn value(self) -> u32 {
        match self {
            Self::Blackjack => TWENTY_ONE,
            Self::Soft(n) | Self::Hard(n) | Self::Total(n) => n,
        }
    }

    /// Returns whether the total is over 21.
    #[must_use]
    pub const fn is_bust(self) -> bool {
        self.value() > TWENTY_ONE
    }
}

impl fmt::Display for HandTotal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blackjack => f.write_str("blackjack"),
            Self::Soft(n) => write!(f, "soft {n}"),
            Self::Hard(n) => write!(f, "hard {n}"),
            Self::Total(n) => write!(f, "{n}"),
        }
    }
}

/// Scores a sequence of cards.
///
/// Every Ace starts at 11. While the total is over 21 and an Ace is still
/// counted high, one Ace drops to 1. The order in which Aces are demoted does
/// not matter. Totals beyond `u32::MAX` saturate.
#[must_use]
pub fn score(cards: &[Card]) -> HandTotal {
    let mut value: u64 = 0;
    let mut aces: usize = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        value = value.saturating_add(u64::from(card.value()));
    }

    let mut soft_aces = aces;
    while value > u64::from(TWENTY_ONE) && soft_aces > 0 {
        value -= 10;
        soft_aces -= 1;
    }
    let value = u32::try_from(value).unwrap_or(u32::MAX);

    if aces == 0 {
        HandTotal::Total(value)
    } else if cards.len() == 2 && value == TWENTY_ONE {
        HandTotal::Blackjack
    } else if soft_aces > 0 {
        HandTotal::Soft(value)
    } else {
        HandTotal::Hard(value)
    }
}

/// A player's hand.
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

    /// Returns the cards in the hand, in the order they were dealt.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the tagged total of the hand.
    #[must_use]
    pub fn total(&self) -> HandTotal {
        score(&self.cards)
    }

    /// Returns the numeric value of the hand.
    #[must_use]
    pub fn value(&self) -> u32 {
        self.total().value()
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.total().is_bust()
    }

    /// Returns whether the hand is a two-card 21.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.total() == HandTotal::Blackjack
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        matches!(self.total(), HandTotal::Soft(_) | HandTotal::Blackjack)
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
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Hand {
    /// Formats the hand as a bracketed list of card codes, e.g. `[AS, 0H]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (index, card) in self.cards.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{card}")?;
        }
        f.write_str("]")
    }
}
