//! Card types and card-code conversion.
//!
//! Cards travel between the engine and its card source as two-character
//! codes: a rank (`2`-`9`, `0` for ten, `J`, `Q`, `K`, `A`) followed by a
//! suit letter (`S`, `H`, `D`, `C`).

use core::fmt;
use core::str::FromStr;

use crate::error::CardError;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl Suit {
    /// All four suits, in shoe-building order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];

    /// Returns the single-letter code for this suit.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Hearts => 'H',
            Self::Diamonds => 'D',
            Self::Clubs => 'C',
            Self::Spades => 'S',
        }
    }

    const fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'H' => Some(Self::Hearts),
            'D' => Some(Self::Diamonds),
            'C' => Some(Self::Clubs),
            'S' => Some(Self::Spades),
            _ => None,
        }
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Values outside 1..=13
    /// are accepted but count as zero when scoring a hand.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// Returns whether the card is an Ace.
    #[must_use]
    pub const fn is_ace(&self) -> bool {
        self.rank == 1
    }

    /// Returns the base blackjack value, counting an Ace as 11.
    #[must_use]
    pub const fn value(&self) -> u8 {
        match self.rank {
            1 => 11,
            2..=10 => self.rank,
            11..=13 => 10,
            _ => 0,
        }
    }

    const fn rank_char(&self) -> char {
        match self.rank {
            1 => 'A',
            10 => '0',
            11 => 'J',
            12 => 'Q',
            13 => 'K',
            // 2..=9 map straight onto their digit
            2..=9 => (b'0' + self.rank) as char,
            _ => '?',
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank_char(), self.suit.letter())
    }
}

impl FromStr for Card {
    type Err = CardError;

    /// Parses a card code such as `"AS"` or `"0H"`.
    ///
    /// `T` and `10` are accepted as alternative spellings of ten, and letters
    /// are matched case-insensitively.
    fn from_str(code: &str) -> Result<Self, Self::Err> {
        let code = code.trim();
        let mut chars = code.chars();

        let (rank, suit_char) = match (chars.next(), chars.next(), chars.next(), chars.next()) {
            (Some(rank), Some(suit), None, _) => (rank_from_char(rank)?, suit),
            (Some('1'), Some('0'), Some(suit), None) => (10, suit),
            _ => return Err(CardError::InvalidLength(code.chars().count())),
        };

        let suit = Suit::from_letter(suit_char).ok_or(CardError::InvalidSuit(suit_char))?;
        Ok(Self::new(suit, rank))
    }
}

const fn rank_from_char(c: char) -> Result<u8, CardError> {
    match c.to_ascii_uppercase() {
        'A' => Ok(1),
        d @ '2'..='9' => Ok(d as u8 - b'0'),
        '0' | 'T' => Ok(10),
        'J' => Ok(11),
        'Q' => Ok(12),
        'K' => Ok(13),
        other => Err(CardError::InvalidRank(other)),
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
