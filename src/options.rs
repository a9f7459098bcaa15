//! Game configuration options.

use crate::error::DeckCountError;

/// Fewest decks a shoe may be built from.
pub const MIN_DECKS: u8 = 1;
/// Most decks a shoe may be built from.
pub const MAX_DECKS: u8 = 6;
/// Deck count used when the requested one is invalid.
pub const DEFAULT_DECKS: u8 = 6;
/// Balance a new session starts with.
pub const DEFAULT_BALANCE: i64 = 20;
/// The shoe is rebuilt before a draw once it holds fewer cards than this.
pub const DEFAULT_RESHUFFLE_BELOW: usize = 20;
/// Units won or lost per round.
pub const BET: i64 = 1;

/// Parses a line of user input as a deck count.
///
/// Surrounding whitespace is ignored.
///
/// # Errors
///
/// Returns [`DeckCountError::Malformed`] when the input is not an integer and
/// [`DeckCountError::OutOfRange`] when it is outside 1..=6.
///
/// ```
/// use bjterm::error::DeckCountError;
/// use bjterm::options::parse_decks;
///
/// assert_eq!(parse_decks(" 4\n"), Ok(4));
/// assert_eq!(parse_decks("abc"), Err(DeckCountError::Malformed));
/// assert_eq!(parse_decks("9"), Err(DeckCountError::OutOfRange(9)));
/// ```
pub fn parse_decks(input: &str) -> Result<u8, DeckCountError> {
    let decks: i64 = input
        .trim()
        .parse()
        .map_err(|_| DeckCountError::Malformed)?;

    if !(i64::from(MIN_DECKS)..=i64::from(MAX_DECKS)).contains(&decks) {
        return Err(DeckCountError::OutOfRange(decks));
    }

    Ok(decks as u8)
}

/// Returns `decks` if it is a valid deck count, otherwise [`DEFAULT_DECKS`].
pub(crate) fn checked_decks(decks: u8) -> u8 {
    if (MIN_DECKS..=MAX_DECKS).contains(&decks) {
        decks
    } else {
        tracing::warn!(decks, fallback = DEFAULT_DECKS, "invalid deck count");
        DEFAULT_DECKS
    }
}

/// Configuration options for a blackjack session.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjterm::GameOptions;
///
/// let options = GameOptions::default()
///     .with_decks(2)
///     .with_starting_balance(50);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Number of decks in the shoe.
    pub decks: u8,
    /// Balance before the first round.
    pub starting_balance: i64,
    /// Reshuffle before a draw when fewer cards remain. 0 disables reshuffling.
    pub reshuffle_below: usize,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            decks: DEFAULT_DECKS,
            starting_balance: DEFAULT_BALANCE,
            reshuffle_below: DEFAULT_RESHUFFLE_BELOW,
        }
    }
}

impl GameOptions {
    /// Sets the number of decks.
    ///
    /// Counts outside 1..=6 fall back to the default of 6.
    ///
    /// # Example
    ///
    /// ```
    /// use bjterm::GameOptions;
    ///
    /// assert_eq!(GameOptions::default().with_decks(3).decks, 3);
    /// assert_eq!(GameOptions::default().with_decks(0).decks, 6);
    /// ```
    #[must_use]
    pub fn with_decks(mut self, decks: u8) -> Self {
        self.decks = checked_decks(decks);
        self
    }

    /// Sets the starting balance.
    ///
    /// # Example
    ///
    /// ```
    /// use bjterm::GameOptions;
    ///
    /// let options = GameOptions::default().with_starting_balance(100);
    /// assert_eq!(options.starting_balance, 100);
    /// ```
    #[must_use]
    pub const fn with_starting_balance(mut self, balance: i64) -> Self {
        self.starting_balance = balance;
        self
    }

    /// Sets the reshuffle threshold.
    ///
    /// # Example
    ///
    /// ```
    /// use bjterm::GameOptions;
    ///
    /// let options = GameOptions::default().with_reshuffle_below(0);
    /// assert_eq!(options.reshuffle_below, 0);
    /// ```
    #[must_use]
    pub const fn with_reshuffle_below(mut self, cards: usize) -> Self {
        self.reshuffle_below = cards;
        self
    }
}
