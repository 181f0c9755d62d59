//! Turn state types.

/// Why the game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameOverReason {
    /// The card source has no cards left.
    DeckExhausted,
    /// Every seat went bust.
    AllBusted,
    /// Every seat has taken its turn.
    RoundComplete,
}

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    /// Waiting for the given seat to hit or stand.
    AwaitingAction(usize),
    /// The game has ended.
    GameOver(GameOverReason),
}

/// Result of moving the turn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Advance {
    /// The turn passed to the given seat.
    Continue(usize),
    /// No seat is left to act.
    Finished(GameOverReason),
}
