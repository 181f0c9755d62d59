//! Game engine and state management.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashSet;
#[cfg(feature = "std")]
use std::collections::HashSet;

use crate::card::Card;
use crate::error::{DealError, SourceError};
use crate::hand::Hand;
use crate::options::GameOptions;
use crate::source::{CardSource, Draw};

mod actions;
mod showdown;
pub mod state;

pub use state::{Advance, GameOverReason, TurnState};

/// A blackjack table of `N` seats playing against a card source.
///
/// The game owns its [`CardSource`]: every card it deals comes from there, and
/// the remaining count the source reports decides when the session is over.
pub struct Game<S> {
    /// Where cards come from.
    source: S,
    /// Game options.
    options: GameOptions,
    /// Hands by seat.
    hands: Vec<Hand>,
    /// Seat whose turn it is.
    current_player: usize,
    /// Seats that went over 21.
    busted: HashSet<usize>,
    /// Cards left in the source, as of the last draw.
    remaining: usize,
    /// Current turn state.
    state: TurnState,
}

impl<S: CardSource> Game<S> {
    /// Deals two cards to every seat and starts the game.
    ///
    /// All `2 * players` cards are drawn in one request and dealt round-robin,
    /// so seat 0 gets the 1st and `players + 1`th card.
    ///
    /// # Example
    ///
    /// ```
    /// use deckjack::{Game, GameOptions, StackedDeck, TurnState};
    ///
    /// let deck = StackedDeck::from_codes(&["9H", "5C", "7D", "KS", "2H"]).unwrap();
    /// let game = Game::start(deck, GameOptions::default().with_players(2)).unwrap();
    /// assert_eq!(game.state(), TurnState::AwaitingAction(0));
    /// assert_eq!(game.hand(1).unwrap().value(), 15);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if there are no players, there are too many players
    /// to count two cards each, the source fails, or it hands out fewer cards
    /// than requested.
    pub fn start(mut source: S, options: GameOptions) -> Result<Self, DealError> {
        if options.players == 0 {
            return Err(DealError::NoPlayers);
        }

        let needed = options
            .initial_deal_size()
            .ok_or(DealError::TooManyPlayers(options.players))?;
        let Draw { cards, remaining } = source.draw(needed).inspect_err(log_source_error)?;
        if cards.len() < needed {
            return Err(DealError::NotEnoughCards {
                needed,
                drawn: cards.len(),
            });
        }

        let mut hands = alloc::vec![Hand::new(); options.players];
        for (index, card) in cards.into_iter().take(needed).enumerate() {
            hands[index % options.players].add_card(card);
        }
        log::debug!(
            "dealt {needed} cards to {} players, {remaining} left",
            options.players
        );

        Ok(Self {
            source,
            options,
            hands,
            current_player: 0,
            busted: HashSet::new(),
            remaining,
            state: TurnState::AwaitingAction(0),
        })
    }

    /// Draws a single card and records the new remaining count.
    fn draw_one(&mut self) -> Result<Option<Card>, SourceError> {
        let Draw { cards, remaining } = self.source.draw(1).inspect_err(log_source_error)?;
        self.remaining = remaining;
        Ok(cards.into_iter().next())
    }
}

impl<S> Game<S> {
    /// Returns the game options.
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the card source.
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Returns the number of seats.
    pub fn player_count(&self) -> usize {
        self.hands.len()
    }

    /// Returns the seat whose turn it is.
    pub const fn current_player(&self) -> usize {
        self.current_player
    }

    /// Returns the hand at `seat`.
    pub fn hand(&self, seat: usize) -> Option<&Hand> {
        self.hands.get(seat)
    }

    /// Returns every hand, in seat order.
    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    /// Returns whether `seat` has gone bust.
    pub fn is_busted(&self, seat: usize) -> bool {
        self.busted.contains(&seat)
    }

    /// Returns the number of busted seats.
    pub fn busted_count(&self) -> usize {
        self.busted.len()
    }

    /// Returns the number of cards left in the source, as last reported.
    pub const fn cards_remaining(&self) -> usize {
        self.remaining
    }

    /// Returns whether the card source has run dry.
    ///
    /// This is the condition a driving loop should stop on; it holds no
    /// matter whose turn it is.
    pub const fn finished(&self) -> bool {
        self.remaining == 0
    }

    /// Returns the current game state.
    ///
    /// An exhausted source always reads as
    /// [`GameOver(DeckExhausted)`](GameOverReason::DeckExhausted).
    pub const fn state(&self) -> TurnState {
        if self.finished() {
            TurnState::GameOver(GameOverReason::DeckExhausted)
        } else {
            self.state
        }
    }

    /// Describes whose turn it is, e.g. `It is player 2's turn (soft 17)`.
    pub fn turn_status(&self) -> String {
        let total = self
            .hands
            .get(self.current_player)
            .map(Hand::total)
            .map_or_else(String::new, |total| format!("{total}"));
        format!("It is player {}'s turn ({total})", self.current_player + 1)
    }
}

fn log_source_error(err: &SourceError) {
    log::error!("card source failed: {err}");
}
