use alloc::vec::Vec;

use crate::result::{PlayerResult, RoundResult, Verdict};

use super::Game;

impl<S> Game<S> {
    /// Scores every seat and picks the winner.
    ///
    /// Busted seats never win. Among the rest the highest total takes the
    /// game; on a tie the lower seat keeps the lead. If nobody qualifies the
    /// house wins.
    ///
    /// This does not check the turn state, so it can be called on a game that
    /// ended for any reason.
    pub fn showdown(&self) -> RoundResult {
        let mut best: Option<(usize, u32)> = None;
        let mut players = Vec::with_capacity(self.hands.len());

        for (seat, hand) in self.hands.iter().enumerate() {
            let total = hand.total();
            let busted = self.busted.contains(&seat);
            let value = total.value();

            if !busted && value > best.map_or(0, |(_, best_value)| best_value) {
                best = Some((seat, value));
            }

            players.push(PlayerResult {
                seat,
                hand: hand.clone(),
                total,
                busted,
            });
        }

        let verdict = best.map_or(Verdict::House, |(seat, _)| Verdict::Player(seat));
        log::info!("showdown verdict: {verdict:?}");

        RoundResult { players, verdict }
    }
}
