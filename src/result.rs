//! Action and end-of-game result types.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use crate::hand::{Hand, HandTotal};

/// Outcome of a single hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitResult {
    /// The hand reached exactly 21.
    TwentyOne,
    /// The hand is still under 21; the player may hit again.
    Drawn(HandTotal),
    /// The hand went over 21 and the seat is out.
    Bust(HandTotal),
}

impl HitResult {
    /// Returns whether the hit busted the hand.
    #[must_use]
    pub const fn is_bust(&self) -> bool {
        matches!(self, Self::Bust(_))
    }
}

impl fmt::Display for HitResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TwentyOne => f.write_str("Blackjack!"),
            Self::Drawn(total) => write!(f, "{total}"),
            Self::Bust(_) => f.write_str("Bust"),
        }
    }
}

/// Final standing of one seat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerResult {
    /// Zero-based seat index.
    pub seat: usize,
    /// The player's final hand.
    pub hand: Hand,
    /// The tagged total of the hand.
    pub total: HandTotal,
    /// Whether the seat went bust.
    pub busted: bool,
}

/// Who takes the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The seat with the best non-busted total.
    Player(usize),
    /// Nobody qualified.
    House,
}

/// Result of the whole game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Results for each seat, in seat order.
    pub players: Vec<PlayerResult>,
    /// The winner.
    pub verdict: Verdict,
}

impl RoundResult {
    /// Returns the winning seat, if any player won.
    #[must_use]
    pub const fn winner(&self) -> Option<usize> {
        match self.verdict {
            Verdict::Player(seat) => Some(seat),
            Verdict::House => None,
        }
    }
}

impl fmt::Display for RoundResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for player in &self.players {
            writeln!(
                f,
                "Player {}'s hand: {} total: {}",
                player.seat + 1,
                player.hand,
                player.total.value()
            )?;
        }

        match self.verdict {
            Verdict::Player(seat) => write!(f, "Player {} is the winner!", seat + 1),
            Verdict::House => f.write_str("The house wins!"),
        }
    }
}
