use crate::error::ActionError;
use crate::result::DealResult;

use super::{Game, RoundState, Transition};

/// Cards dealt at the start of every round.
const INITIAL_CARDS: usize = 4;

impl Game {
    /// Starts a new round: clears both hands and deals two cards each,
    /// alternating player, dealer, player, dealer.
    ///
    /// The shoe is reshuffled first if it is low.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress or the shoe cannot supply
    /// the initial cards (only possible with reshuffling disabled).
    pub fn deal(&mut self) -> Result<DealResult, ActionError> {
        if !self.state.can_deal() {
            return Err(ActionError::InvalidState);
        }

        let reshuffles_before = self.shoe.reshuffles();
        self.shoe.check_and_reshuffle();
        if !self.shoe.can_draw(INITIAL_CARDS) {
            return Err(ActionError::NoCards);
        }

        if self.state == RoundState::Settled {
            self.transition(Transition::NextRound)?;
        }

        self.player.clear();
        self.dealer.clear();

        for _ in 0..INITIAL_CARDS / 2 {
            let card = self.draw()?;
            self.player.add_card(card);
            let card = self.draw()?;
            self.dealer.add_card(card);
        }

        self.transition(Transition::Dealt)?;

        let result = DealResult {
            reshuffled: self.shoe.reshuffles() != reshuffles_before,
            player_value: self.player.value(),
        };

        tracing::debug!(
            player = result.player_value,
            dealer_up = ?self.dealer.up_card(),
            remaining = self.shoe.len(),
            "dealt round"
        );

        Ok(result)
    }
}
