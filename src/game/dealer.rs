use alloc::vec::Vec;

use crate::error::ActionError;
use crate::result::{RoundOutcome, RoundResult};

use super::{Game, RoundState, Transition};

/// The dealer stands on this total or higher, soft or hard.
pub const DEALER_STANDS_ON: u8 = 17;

impl Game {
    /// Dealer plays their hand and the round is settled.
    ///
    /// The dealer draws while below 17 and stands on any 17, including soft 17.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in dealer turn state or the shoe is
    /// empty while the dealer must draw.
    pub fn dealer_play(&mut self) -> Result<RoundResult, ActionError> {
        self.ensure_state(RoundState::DealerTurn)?;

        let mut drawn_cards = Vec::new();
        while self.dealer.value() < DEALER_STANDS_ON {
            let card = self.draw()?;
            tracing::debug!(%card, "dealer draws");
            self.dealer.add_card(card);
            drawn_cards.push(card);
        }

        let outcome = self.outcome();
        self.transition(Transition::DealerDone)?;

        Ok(self.settle(outcome, drawn_cards))
    }

    /// Compares the finished hands; a tie goes to the dealer.
    fn outcome(&self) -> RoundOutcome {
        if self.player.is_bust() {
            RoundOutcome::PlayerBust
        } else if self.dealer.is_bust() {
            RoundOutcome::DealerBust
        } else if self.dealer.value() >= self.player.value() {
            RoundOutcome::DealerWins
        } else {
            RoundOutcome::PlayerWins
        }
    }
}
