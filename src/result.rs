//! Round result types.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::options::BET;

/// How a round was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Player went over 21; the dealer never played.
    PlayerBust,
    /// Dealer went over 21.
    DealerBust,
    /// Dealer matched or beat the player.
    DealerWins,
    /// Player beat the dealer.
    PlayerWins,
}

impl RoundOutcome {
    /// Returns whether the player won.
    #[must_use]
    pub const fn player_won(self) -> bool {
        matches!(self, Self::DealerBust | Self::PlayerWins)
    }

    /// Returns the balance change for this outcome.
    #[must_use]
    pub const fn delta(self) -> i64 {
        if self.player_won() { BET } else { -BET }
    }
}

/// Result of a settled round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// The outcome of the round.
    pub outcome: RoundOutcome,
    /// The player's final hand value.
    pub player_value: u8,
    /// The dealer's final hand value.
    pub dealer_value: u8,
    /// Cards the dealer drew after revealing the hole card.
    pub dealer_drew: Vec<Card>,
    /// Balance change applied for this round.
    pub delta: i64,
    /// Balance after the round.
    pub balance: i64,
}

/// Result of a single hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HitResult {
    /// The card drawn.
    pub card: Card,
    /// The player's hand value after the draw.
    pub value: u8,
    /// The settled round if the card busted the player.
    pub settled: Option<RoundResult>,
}

/// Result of the initial deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DealResult {
    /// Whether the shoe was reshuffled before dealing.
    pub reshuffled: bool,
    /// The player's hand value after the deal.
    pub player_value: u8,
}
