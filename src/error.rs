//! Error types for card parsing, card sources and game operations.

use alloc::string::String;

use thiserror::Error;

/// Errors that can occur while parsing a card code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// The code does not have the shape rank + suit.
    #[error("card code has {0} characters, expected 2")]
    InvalidLength(usize),
    /// Unknown rank character.
    #[error("unknown card rank `{0}`")]
    InvalidRank(char),
    /// Unknown suit character.
    #[error("unknown card suit `{0}`")]
    InvalidSuit(char),
}

/// Errors reported by a card source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    /// The source answered with a non-success status.
    #[error("card source unavailable: {status}: {message}")]
    Unavailable {
        /// Status code returned by the source.
        status: u16,
        /// Response body or reason text.
        message: String,
    },
    /// The source answered but flagged the request as failed.
    #[error("card source rejected the request: {message}")]
    Rejected {
        /// Reason given by the source.
        message: String,
    },
    /// The request never produced a usable response.
    #[error("card source transport error: {0}")]
    Transport(String),
    /// The source returned a card code that could not be parsed.
    #[error("card source returned a malformed card: {0}")]
    Malformed(#[from] CardError),
    /// More cards were requested than are left.
    #[error("requested {requested} cards but only {remaining} remain")]
    NotEnoughCards {
        /// Number of cards asked for.
        requested: usize,
        /// Number of cards left in the source.
        remaining: usize,
    },
}

/// Errors that can occur while starting a game.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DealError {
    /// A game needs at least one player.
    #[error("a game needs at least one player")]
    NoPlayers,
    /// The table has more seats than cards could ever be counted for.
    #[error("{0} players is too many to deal to")]
    TooManyPlayers(usize),
    /// The source handed out fewer cards than the initial deal needs.
    #[error("initial deal needs {needed} cards but only {drawn} were drawn")]
    NotEnoughCards {
        /// Cards required for two per player.
        needed: usize,
        /// Cards actually received.
        drawn: usize,
    },
    /// The card source failed.
    #[error(transparent)]
    Source(#[from] SourceError),
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The game has already ended.
    #[error("the game is over")]
    GameOver,
    /// The current seat has gone bust and must pass the turn on.
    #[error("the current player has gone bust")]
    Busted,
    /// The source returned no card.
    #[error("no cards left in the source")]
    NoCards,
    /// The card source failed.
    #[error(transparent)]
    Source(#[from] SourceError),
}
