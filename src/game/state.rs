//! Round state machine.

/// Round state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoundState {
    /// Waiting for the initial deal.
    #[default]
    Dealing,
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round has been resolved; the next deal starts a new round.
    Settled,
}

/// An event that moves a round between states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Initial cards were dealt.
    Dealt,
    /// The player drew a card.
    Hit {
        /// Whether the card took the player over 21.
        bust: bool,
    },
    /// The player stood.
    Stand,
    /// The dealer finished drawing and the round was settled.
    DealerDone,
    /// A new round begins.
    NextRound,
}

impl RoundState {
    /// Returns the state reached by applying `transition`, or `None` if the
    /// transition is not allowed from this state.
    ///
    /// ```
    /// use bjterm::game::{RoundState, Transition};
    ///
    /// assert_eq!(
    ///     RoundState::PlayerTurn.next(Transition::Stand),
    ///     Some(RoundState::DealerTurn)
    /// );
    /// assert_eq!(RoundState::DealerTurn.next(Transition::Stand), None);
    /// ```
    #[must_use]
    pub const fn next(self, transition: Transition) -> Option<Self> {
        match (self, transition) {
            (Self::Dealing, Transition::Dealt) => Some(Self::PlayerTurn),
            (Self::PlayerTurn, Transition::Hit { bust: false }) => Some(Self::PlayerTurn),
            (Self::PlayerTurn, Transition::Hit { bust: true })
            | (Self::DealerTurn, Transition::DealerDone) => Some(Self::Settled),
            (Self::PlayerTurn, Transition::Stand) => Some(Self::DealerTurn),
            (Self::Settled, Transition::NextRound) => Some(Self::Dealing),
            _ => None,
        }
    }

    /// Returns whether a deal may start from this state.
    #[must_use]
    pub const fn can_deal(self) -> bool {
        matches!(self, Self::Dealing | Self::Settled)
    }
}
