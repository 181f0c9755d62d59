use crate::error::ActionError;
use crate::hand::TWENTY_ONE;
use crate::result::HitResult;
use crate::source::CardSource;

use super::{Advance, Game, GameOverReason, TurnState};

impl<S: CardSource> Game<S> {
    fn ensure_active(&self) -> Result<usize, ActionError> {
        match self.state() {
            TurnState::AwaitingAction(seat) => Ok(seat),
            TurnState::GameOver(_) => Err(ActionError::GameOver),
        }
    }

    fn ensure_can_hit(&self) -> Result<usize, ActionError> {
        let seat = self.ensure_active()?;
        if self.busted.contains(&seat) {
            return Err(ActionError::Busted);
        }
        Ok(seat)
    }

    /// Player action: Hit (draw a card for the current player).
    ///
    /// A hit never passes the turn on by itself. After a
    /// [`Bust`](HitResult::Bust) the seat is marked busted and the caller is
    /// expected to [`advance`](Self::advance).
    ///
    /// # Errors
    ///
    /// Returns an error if the game is over, the current seat has already
    /// busted, the source fails, or it hands out no card. The hand is left
    /// untouched in every error case.
    pub fn hit(&mut self) -> Result<HitResult, ActionError> {
        let seat = self.ensure_can_hit()?;

        let card = self.draw_one()?.ok_or(ActionError::NoCards)?;
        let hand = &mut self.hands[seat];
        hand.add_card(card);
        let total = hand.total();

        let result = if total.value() == TWENTY_ONE {
            HitResult::TwentyOne
        } else if total.is_bust() {
            self.busted.insert(seat);
            HitResult::Bust(total)
        } else {
            HitResult::Drawn(total)
        };
        log::debug!("player {} drew {card}: {result}", seat + 1);

        Ok(result)
    }

    /// Player action: Stand (keep the current hand and pass the turn on).
    ///
    /// # Errors
    ///
    /// Returns an error if the game is already over.
    pub fn stand(&mut self) -> Result<Advance, ActionError> {
        self.ensure_active()?;
        Ok(self.advance())
    }
}

impl<S> Game<S> {
    /// Passes the turn to the next seat that has not gone bust.
    ///
    /// Seats are visited in increasing order and never wrap. The loop takes at
    /// most one step per seat and checks for an all-busted table before every
    /// step. Once it returns [`Advance::Finished`] the game is over and later
    /// calls return the same reason. An exhausted source ends the game too:
    /// the turn stays put and the result is
    /// [`Finished(DeckExhausted)`](GameOverReason::DeckExhausted).
    pub fn advance(&mut self) -> Advance {
        if let TurnState::GameOver(reason) = self.state() {
            return Advance::Finished(reason);
        }

        let players = self.hands.len();
        for _ in 0..players {
            if self.busted.len() == players {
                return self.finish(GameOverReason::AllBusted);
            }

            let next = self.current_player + 1;
            if next >= players {
                return self.finish(GameOverReason::RoundComplete);
            }
            self.current_player = next;

            if !self.busted.contains(&next) {
                log::debug!("turn passes to player {}", next + 1);
                self.state = TurnState::AwaitingAction(next);
                return Advance::Continue(next);
            }
            log::debug!("skipping busted player {}", next + 1);
        }

        self.finish(GameOverReason::RoundComplete)
    }

    fn finish(&mut self, reason: GameOverReason) -> Advance {
        if reason == GameOverReason::AllBusted {
            log::warn!("every player went bust");
        }
        log::info!("game over: {reason:?}");
        self.state = TurnState::GameOver(reason);
        Advance::Finished(reason)
    }
}
