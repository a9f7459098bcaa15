//! The shoe cards are dealt from.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::options::{DEFAULT_RESHUFFLE_BELOW, checked_decks};

/// One or more shuffled decks, drawn from the front.
#[derive(Debug, Clone)]
pub struct Shoe {
    cards: VecDeque<Card>,
    decks: u8,
    reshuffle_below: usize,
    reshuffles: u64,
    rng: ChaCha8Rng,
}

impl Shoe {
    /// Builds a shuffled shoe of `decks` decks.
    ///
    /// Deck counts outside 1..=6 fall back to 6.
    ///
    /// # Example
    ///
    /// ```
    /// use bjterm::Shoe;
    ///
    /// let shoe = Shoe::new(2, 42);
    /// assert_eq!(shoe.len(), 104);
    /// ```
    #[must_use]
    pub fn new(decks: u8, seed: u64) -> Self {
        let decks = checked_decks(decks);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let cards = Self::create_cards(decks, &mut rng);

        tracing::debug!(decks, cards = cards.len(), "built shoe");

        Self {
            cards,
            decks,
            reshuffle_below: DEFAULT_RESHUFFLE_BELOW,
            reshuffles: 0,
            rng,
        }
    }

    /// Sets the reshuffle threshold. 0 disables reshuffling.
    #[must_use]
    pub const fn with_reshuffle_below(mut self, cards: usize) -> Self {
        self.reshuffle_below = cards;
        self
    }

    /// Creates and shuffles the cards of `decks` standard decks.
    fn create_cards(decks: u8, rng: &mut ChaCha8Rng) -> VecDeque<Card> {
        let mut cards = Vec::with_capacity(decks as usize * DECK_SIZE);

        for _ in 0..decks {
            for suit in Suit::ALL {
                for rank in Rank::ALL {
                    cards.push(Card::new(rank, suit));
                }
            }
        }

        cards.shuffle(rng);
        cards.into()
    }

    /// Replaces the shoe with a freshly shuffled one of the same size.
    pub fn reshuffle(&mut self) {
        self.cards = Self::create_cards(self.decks, &mut self.rng);
        self.reshuffles += 1;
        tracing::debug!(cards = self.cards.len(), reshuffles = self.reshuffles, "shoe reshuffled");
    }

    /// Returns whether the shoe holds fewer cards than the reshuffle threshold.
    ///
    /// Always `false` when the threshold is 0.
    #[must_use]
    pub fn needs_reshuffle(&self) -> bool {
        self.cards.len() < self.reshuffle_below
    }

    /// Reshuffles if needed, returning whether a reshuffle was performed.
    pub fn check_and_reshuffle(&mut self) -> bool {
        if self.needs_reshuffle() {
            self.reshuffle();
            true
        } else {
            false
        }
    }

    /// Draws the front card.
    ///
    /// The low-shoe check belongs at round start; mid-round the shoe is only
    /// rebuilt once it is empty. Returns `None` when the shoe is empty and
    /// reshuffling is disabled.
    pub fn draw(&mut self) -> Option<Card> {
        if self.cards.is_empty() && self.reshuffle_below > 0 {
            tracing::debug!("shoe ran dry mid-round");
            self.reshuffle();
        }
        self.cards.pop_front()
    }

    /// Returns whether `count` cards can be drawn without running dry.
    #[must_use]
    pub fn can_draw(&self, count: usize) -> bool {
        self.reshuffle_below > 0 || self.cards.len() >= count
    }

    /// Replaces the contents of the shoe; `draws` are dealt in the given order.
    ///
    /// Meant for stacking a shoe in tests and demos. The next reshuffle restores
    /// a full random shoe.
    pub fn set_cards(&mut self, draws: impl IntoIterator<Item = Card>) {
        self.cards = draws.into_iter().collect();
    }

    /// Returns the cards in draw order.
    pub fn cards(&self) -> impl ExactSizeIterator<Item = &Card> {
        self.cards.iter()
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the shoe is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the number of reshuffles since the shoe was built.
    #[must_use]
    pub const fn reshuffles(&self) -> u64 {
        self.reshuffles
    }

    /// Returns the reshuffle threshold.
    #[must_use]
    pub const fn reshuffle_below(&self) -> usize {
        self.reshuffle_below
    }

    /// Returns the number of decks the shoe is built from.
    #[must_use]
    pub const fn decks(&self) -> u8 {
        self.decks
    }

    /// Returns the number of cards in a full shoe.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.decks as usize * DECK_SIZE
    }
}
