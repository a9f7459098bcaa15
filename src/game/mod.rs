//! Game session and round flow.

use alloc::vec::Vec;

use crate::card::Card;
use crate::error::ActionError;
use crate::hand::{DealerHand, Hand};
use crate::options::GameOptions;
use crate::result::{RoundOutcome, RoundResult};
use crate::shoe::Shoe;

mod actions;
mod deal;
mod dealer;
pub mod state;

pub use actions::{PlayerAction, Turn};
pub use dealer::DEALER_STANDS_ON;
pub use state::{RoundState, Transition};

/// A single-player blackjack session.
///
/// The game owns the shoe, both hands and the running balance. Rounds are
/// driven through [`deal`](Self::deal), [`hit`](Self::hit) and
/// [`stand`](Self::stand); each call checks the current [`RoundState`].
#[derive(Debug, Clone)]
pub struct Game {
    options: GameOptions,
    shoe: Shoe,
    state: RoundState,
    player: Hand,
    dealer: DealerHand,
    balance: i64,
    rounds_played: u64,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bjterm::{Game, GameOptions, RoundState};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.balance(), 20);
    /// assert_eq!(game.state(), RoundState::Dealing);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let shoe = Shoe::new(options.decks, seed).with_reshuffle_below(options.reshuffle_below);

        Self {
            balance: options.starting_balance,
            options,
            shoe,
            state: RoundState::Dealing,
            player: Hand::new(),
            dealer: DealerHand::new(),
            rounds_played: 0,
        }
    }

    /// Applies `transition` to the round state.
    fn transition(&mut self, transition: Transition) -> Result<(), ActionError> {
        self.state = self
            .state
            .next(transition)
            .ok_or(ActionError::InvalidState)?;
        Ok(())
    }

    fn ensure_state(&self, expected: RoundState) -> Result<(), ActionError> {
        if self.state == expected {
            Ok(())
        } else {
            Err(ActionError::InvalidState)
        }
    }

    /// Draws a card from the shoe.
    fn draw(&mut self) -> Result<Card, ActionError> {
        self.shoe.draw().ok_or(ActionError::NoCards)
    }

    /// Applies the outcome to the balance and closes the round.
    fn settle(&mut self, outcome: RoundOutcome, dealer_drew: Vec<Card>) -> RoundResult {
        let delta = outcome.delta();
        self.balance += delta;
        self.rounds_played += 1;

        let result = RoundResult {
            outcome,
            player_value: self.player.value(),
            dealer_value: self.dealer.value(),
            dealer_drew,
            delta,
            balance: self.balance,
        };

        tracing::info!(
            round = self.rounds_played,
            outcome = ?result.outcome,
            player = result.player_value,
            dealer = result.dealer_value,
            balance = result.balance,
            "round settled"
        );

        result
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the current balance.
    #[must_use]
    pub const fn balance(&self) -> i64 {
        self.balance
    }

    /// Returns the number of settled rounds.
    #[must_use]
    pub const fn rounds_played(&self) -> u64 {
        self.rounds_played
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &DealerHand {
        &self.dealer
    }

    /// Returns the shoe.
    #[must_use]
    pub const fn shoe(&self) -> &Shoe {
        &self.shoe
    }

    /// Returns the shoe mutably, e.g. to stack it.
    pub const fn shoe_mut(&mut self) -> &mut Shoe {
        &mut self.shoe
    }

    /// Returns the number of cards remaining in the shoe.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.shoe.len()
    }
}
