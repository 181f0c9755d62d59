//! A multi-seat blackjack engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that deals from any [`CardSource`],
//! scores hands with soft and hard Aces, passes the turn around the table
//! skipping busted seats, and names the winner once the game ends.
//!
//! With the `http` feature, [`DeckApi`] draws from the deck-of-cards web
//! service; [`ShuffledShoe`] and [`StackedDeck`] work offline.
//!
//! # Example
//!
//! ```
//! use deckjack::{Advance, Game, GameOptions, ShuffledShoe};
//!
//! let shoe = ShuffledShoe::new(1, 42);
//! let mut game = Game::start(shoe, GameOptions::default().with_players(2)).unwrap();
//!
//! while let Advance::Continue(_) = game.stand().unwrap() {}
//! println!("{}", game.showdown());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
pub mod source;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use error::{ActionError, CardError, DealError, SourceError};
pub use game::{Advance, Game, GameOverReason, TurnState};
pub use hand::{Hand, HandTotal, score};
pub use options::GameOptions;
pub use result::{HitResult, PlayerResult, RoundResult, Verdict};
#[cfg(feature = "http")]
pub use source::DeckApi;
pub use source::{CardSource, Draw, ShuffledShoe, StackedDeck};
