//! A single-player console blackjack game with an optional `no_std` engine.
//!
//! The crate provides a [`Game`] type that owns the shoe, both hands and the
//! running balance, and moves each round through dealing, the player's turn,
//! the dealer's turn and settlement. With the `std` feature the
//! [`console`] module drives a game from any line-based reader.
//!
//! # Example
//!
//! ```
//! use bjterm::{Game, GameOptions, RoundState};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! game.deal().unwrap();
//! assert_eq!(game.state(), RoundState::PlayerTurn);
//!
//! let result = game.stand().unwrap();
//! assert_eq!(game.balance(), 20 + result.delta);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod console;
pub mod display;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
pub mod shoe;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use error::{ActionError, DeckCountError, UnknownAction};
pub use game::{Game, PlayerAction, RoundState, Transition, Turn};
pub use hand::{DealerHand, Hand, hand_value};
pub use options::{BET, GameOptions};
pub use result::{DealResult, HitResult, RoundOutcome, RoundResult};
pub use shoe::Shoe;
