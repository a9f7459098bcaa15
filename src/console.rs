//! Terminal read-eval-print loop.
//!
//! [`Console`] works over any [`BufRead`] and [`Write`] pair, so a whole
//! session can be scripted:
//!
//! ```
//! use bjterm::console::run;
//!
//! let mut output = Vec::new();
//! let game = run(&b"2\ns\n"[..], &mut output, 7).unwrap();
//! assert_eq!(game.shoe().decks(), 2);
//! assert_eq!(game.rounds_played(), 1);
//! ```

use std::io::{self, BufRead, Write};

use crate::display::{render_cards, render_dealer, render_player};
use crate::game::{Game, PlayerAction, Turn};
use crate::options::{DEFAULT_DECKS, GameOptions, parse_decks};
use crate::result::{RoundOutcome, RoundResult};

const MOVE_HINT: &str = "(h)it, (s)tand";

/// Drives a [`Game`] from line-based input.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console reading from `input` and printing to `output`.
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consumes the console, returning the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Reads one line, returning `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.output, "{text}")?;
        self.output.flush()
    }

    /// Asks for the number of decks, falling back to 6 on invalid input.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails.
    pub fn read_decks(&mut self) -> io::Result<u8> {
        self.prompt("Enter number of decks (1-6): ")?;
        let line = self.read_line()?.unwrap_or_default();

        match parse_decks(&line) {
            Ok(decks) => Ok(decks),
            Err(err) => {
                tracing::warn!(%err, input = line.trim(), "falling back to default deck count");
                writeln!(
                    self.output,
                    "Invalid input. Using default of {DEFAULT_DECKS} decks."
                )?;
                Ok(DEFAULT_DECKS)
            }
        }
    }

    /// Plays rounds until the input ends.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails, or if the
    /// game rejects an action (only possible with reshuffling disabled).
    pub fn play(&mut self, game: &mut Game) -> io::Result<()> {
        while self.play_round(game)? {}
        Ok(())
    }

    /// Plays one round. Returns `false` if the input ended mid-round.
    fn play_round(&mut self, game: &mut Game) -> io::Result<bool> {
        let deal = game.deal().map_err(io::Error::other)?;
        if deal.reshuffled {
            writeln!(self.output, "Shoe reshuffled.")?;
        }

        writeln!(self.output, "Game has started.")?;
        writeln!(self.output, "Your hand: {}", render_player(game.player_hand()))?;
        writeln!(self.output, "Dealer's hand: {}", render_dealer(game.dealer_hand()))?;
        writeln!(self.output, "Your move: {MOVE_HINT}")?;

        loop {
            let Some(line) = self.read_line()? else {
                return Ok(false);
            };

            match line.parse::<PlayerAction>() {
                Ok(action) => match self.apply(game, action)? {
                    Turn::Hit(hit) => {
                        writeln!(self.output, "You drew: {}", hit.card)?;
                        if let Some(result) = hit.settled {
                            writeln!(self.output, "Bust! Your hand: {}", hit.value)?;
                            self.print_balance(&result)?;
                            return Ok(true);
                        }
                    }
                    Turn::Stand(result) => {
                        self.print_dealer_turn(game, &result)?;
                        return Ok(true);
                    }
                },
                Err(_) => {
                    writeln!(self.output, "Invalid action. Please choose {MOVE_HINT}.")?;
                }
            }

            writeln!(self.output, "Your hand value: {}", game.player_hand().value())?;
            writeln!(self.output, "Waiting for your move: {MOVE_HINT}")?;
        }
    }

    /// Applies `action`, announcing a reshuffle of a shoe that ran dry.
    fn apply(&mut self, game: &mut Game, action: PlayerAction) -> io::Result<Turn> {
        let reshuffles = game.shoe().reshuffles();
        let turn = game.apply(action).map_err(io::Error::other)?;
        if game.shoe().reshuffles() != reshuffles {
            writeln!(self.output, "Shoe reshuffled.")?;
        }
        Ok(turn)
    }

    fn print_dealer_turn(&mut self, game: &Game, result: &RoundResult) -> io::Result<()> {
        let cards = game.dealer_hand().cards();
        let dealt = cards.len().saturating_sub(result.dealer_drew.len());
        writeln!(self.output, "Dealer's hand: {}", render_cards(&cards[..dealt], false))?;

        for card in &result.dealer_drew {
            writeln!(self.output, "Dealer draws: {card}")?;
        }

        let message = match result.outcome {
            RoundOutcome::DealerBust => "Dealer busts. You win!",
            RoundOutcome::DealerWins => "Dealer wins. Your loss.",
            RoundOutcome::PlayerWins => "You win!",
            RoundOutcome::PlayerBust => "Bust!",
        };
        writeln!(self.output, "{message}")?;
        self.print_balance(result)
    }

    fn print_balance(&mut self, result: &RoundResult) -> io::Result<()> {
        writeln!(self.output, "Balance: {}", result.balance)
    }
}

/// Runs a full session: greets, asks for the deck count, then plays until
/// `input` ends. Returns the finished game.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run<R: BufRead, W: Write>(input: R, output: W, seed: u64) -> io::Result<Game> {
    let mut console = Console::new(input, output);
    writeln!(console.output, "Welcome to Blackjack!")?;

    let decks = console.read_decks()?;
    let mut game = Game::new(GameOptions::default().with_decks(decks), seed);
    console.play(&mut game)?;

    Ok(game)
}
