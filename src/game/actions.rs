use core::str::FromStr;

use alloc::vec::Vec;

use crate::error::{ActionError, UnknownAction};
use crate::hand::BLACKJACK;
use crate::result::{HitResult, RoundOutcome, RoundResult};

use super::{Game, RoundState, Transition};

/// A player decision during their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    /// Draw one more card.
    Hit,
    /// End the turn.
    Stand,
}

/// Accepts exactly `h` or `s`, ignoring surrounding whitespace.
impl FromStr for PlayerAction {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "h" => Ok(Self::Hit),
            "s" => Ok(Self::Stand),
            _ => Err(UnknownAction),
        }
    }
}

/// What happened after a player action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Turn {
    /// The player hit.
    Hit(HitResult),
    /// The player stood and the round was played out.
    Stand(RoundResult),
}

impl Game {
    /// Player action: Hit (draw a card).
    ///
    /// Going over 21 settles the round as a loss immediately.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the shoe is empty.
    pub fn hit(&mut self) -> Result<HitResult, ActionError> {
        self.ensure_state(RoundState::PlayerTurn)?;

        let card = self.draw()?;
        self.player.add_card(card);

        let value = self.player.value();
        let bust = value > BLACKJACK;
        self.transition(Transition::Hit { bust })?;

        let settled = bust.then(|| self.settle(RoundOutcome::PlayerBust, Vec::new()));

        Ok(HitResult {
            card,
            value,
            settled,
        })
    }

    /// Player action: Stand (keep current hand).
    ///
    /// Reveals the dealer's hole card and plays out the dealer's hand.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the shoe runs dry
    /// while the dealer must draw. In the latter case the game stays in
    /// [`RoundState::DealerTurn`] and [`dealer_play`](Self::dealer_play) can
    /// be retried.
    pub fn stand(&mut self) -> Result<RoundResult, ActionError> {
        self.transition(Transition::Stand)?;
        self.dealer.reveal_hole();
        self.dealer_play()
    }

    /// Applies a parsed player action.
    ///
    /// # Errors
    ///
    /// Propagates the errors of [`hit`](Self::hit) and [`stand`](Self::stand).
    pub fn apply(&mut self, action: PlayerAction) -> Result<Turn, ActionError> {
        match action {
            PlayerAction::Hit => self.hit().map(Turn::Hit),
            PlayerAction::Stand => self.stand().map(Turn::Stand),
        }
    }
}
