//! Text rendering of hands.

use alloc::string::String;

use crate::card::Card;
use crate::hand::{DealerHand, Hand};

/// Placeholder printed for the dealer's face-down card.
pub const HIDDEN_CARD: &str = "[ ]";

/// Renders `cards` as comma separated rank labels, optionally masking the second card.
///
/// ```
/// use bjterm::card::{Card, Rank, Suit};
/// use bjterm::display::render_cards;
///
/// let cards = [Card::new(Rank::Ten, Suit::Clubs), Card::new(Rank::Six, Suit::Hearts)];
/// assert_eq!(render_cards(&cards, false), "10, 6");
/// assert_eq!(render_cards(&cards, true), "10, [ ]");
/// ```
#[must_use]
pub fn render_cards(cards: &[Card], mask_hole: bool) -> String {
    let mut out = String::new();
    for (i, card) in cards.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        if mask_hole && i == 1 {
            out.push_str(HIDDEN_CARD);
        } else {
            out.push_str(card.rank.label());
        }
    }
    out
}

/// Renders the player's hand in full.
#[must_use]
pub fn render_player(hand: &Hand) -> String {
    render_cards(hand.cards(), false)
}

/// Renders the dealer's hand, masking the hole card until it is revealed.
#[must_use]
pub fn render_dealer(hand: &DealerHand) -> String {
    render_cards(hand.cards(), !hand.is_hole_revealed())
}
