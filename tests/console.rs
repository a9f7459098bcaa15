//! Scripted console sessions.

use bjterm::console::{Console, run};
use bjterm::{Card, Game, GameOptions, Rank, Suit};

/// A game that deals `draws` first, followed by enough cards to avoid a reshuffle.
fn scripted_game(draws: &[Rank]) -> Game {
    let mut game = Game::new(GameOptions::default(), 1);
    let filler: Vec<Card> = game.shoe().cards().take(40).copied().collect();
    let stacked = draws.iter().map(|&rank| Card::new(rank, Suit::Hearts));
    game.shoe_mut().set_cards(stacked.chain(filler));
    game
}

fn play(game: &mut Game, input: &str) -> String {
    let mut console = Console::new(input.as_bytes(), Vec::new());
    console.play(game).unwrap();
    String::from_utf8(console.into_output()).unwrap()
}

#[test]
fn stand_on_nineteen_against_dealer_bust() {
    let mut game = scripted_game(&[Rank::Ten, Rank::Ten, Rank::Nine, Rank::Six, Rank::King]);
    let output = play(&mut game, "s\n");

    assert!(output.contains("Your hand: 10, 9\n"));
    assert!(output.contains("Dealer's hand: 10, [ ]\n"));
    assert!(output.contains("Your move: (h)it, (s)tand\n"));
    assert!(output.contains("Dealer's hand: 10, 6\n"));
    assert!(output.contains("Dealer draws: K\n"));
    assert!(output.contains("Dealer busts. You win!\n"));
    assert!(output.contains("Balance: 21\n"));
    assert_eq!(output.matches("Game has started.").count(), 2);
    assert_eq!(game.balance(), 21);
}

#[test]
fn hit_into_bust_starts_next_round() {
    let mut game = scripted_game(&[Rank::Ten, Rank::Seven, Rank::Nine, Rank::Eight, Rank::Five]);
    let output = play(&mut game, "h\n");

    assert!(output.contains("You drew: 5\n"));
    assert!(output.contains("Bust! Your hand: 24\n"));
    assert!(output.contains("Balance: 19\n"));
    assert!(!output.contains("Your hand value"));
    assert_eq!(output.matches("Game has started.").count(), 2);
    assert_eq!(game.balance(), 19);
    assert_eq!(game.rounds_played(), 1);
}

#[test]
fn hit_without_bust_reprompts() {
    let mut game = scripted_game(&[Rank::Two, Rank::Ten, Rank::Three, Rank::Seven, Rank::Four]);
    let output = play(&mut game, "h\n");

    assert!(output.contains("You drew: 4\nYour hand value: 9\n"));
    assert!(output.contains("Waiting for your move: (h)it, (s)tand\n"));
    assert_eq!(game.rounds_played(), 0);
    assert_eq!(game.balance(), 20);
}

#[test]
fn invalid_actions_are_rejected_without_changing_the_round() {
    let mut game = scripted_game(&[Rank::Ten, Rank::Ten, Rank::Nine, Rank::Nine]);
    let output = play(&mut game, "x\nhit\n\ns\n");

    assert_eq!(
        output
            .matches("Invalid action. Please choose (h)it or (s)tand.\n")
            .count(),
        3
    );
    assert_eq!(output.matches("Your hand value: 19\n").count(), 3);
    assert!(!output.contains("You drew"));
    assert!(output.contains("Dealer wins. Your loss.\n"));
    assert_eq!(game.balance(), 19);
    assert_eq!(game.rounds_played(), 1);
}

#[test]
fn player_beats_dealer() {
    let mut game = scripted_game(&[Rank::Ten, Rank::Ten, Rank::Ace, Rank::Seven]);
    let output = play(&mut game, "s\n");

    assert!(output.contains("Dealer's hand: 10, 7\nYou win!\n"));
    assert_eq!(game.balance(), 21);
}

#[test]
fn end_of_input_mid_round_leaves_balance() {
    let mut game = scripted_game(&[Rank::Ten, Rank::Ten, Rank::Nine, Rank::Six, Rank::King]);
    let output = play(&mut game, "");

    assert_eq!(output.matches("Game has started.").count(), 1);
    assert_eq!(game.balance(), 20);
    assert_eq!(game.rounds_played(), 0);
}

#[test]
fn malformed_deck_count_uses_six_decks() {
    let mut output = Vec::new();
    let game = run("abc\n".as_bytes(), &mut output, 3).unwrap();
    let output = String::from_utf8(output).unwrap();

    assert!(output.starts_with("Welcome to Blackjack!\nEnter number of decks (1-6): "));
    assert!(output.contains("Invalid input. Using default of 6 decks.\n"));
    assert!(output.contains("Game has started."));
    assert_eq!(game.shoe().decks(), 6);
}

#[test]
fn out_of_range_deck_count_uses_six_decks() {
    let mut output = Vec::new();
    let game = run("9\n".as_bytes(), &mut output, 3).unwrap();
    let output = String::from_utf8(output).unwrap();

    assert!(output.contains("Invalid input. Using default of 6 decks.\n"));
    assert_eq!(game.shoe().decks(), 6);
}

#[test]
fn valid_deck_count_is_used() {
    let mut output = Vec::new();
    let game = run("3\ns\n".as_bytes(), &mut output, 3).unwrap();
    let output = String::from_utf8(output).unwrap();

    assert!(!output.contains("Invalid input"));
    assert_eq!(game.shoe().decks(), 3);
    assert_eq!(game.rounds_played(), 1);
    assert!(output.contains("Balance: "));
}

#[test]
fn empty_input_ends_after_first_deal() {
    let mut output = Vec::new();
    let game = run("".as_bytes(), &mut output, 3).unwrap();
    let output = String::from_utf8(output).unwrap();

    assert!(output.contains("Invalid input. Using default of 6 decks.\n"));
    assert_eq!(output.matches("Game has started.").count(), 1);
    assert_eq!(game.rounds_played(), 0);
}

#[test]
fn low_shoe_is_reshuffled_before_the_deal() {
    let mut game = Game::new(GameOptions::default().with_decks(1), 4);
    let low: Vec<Card> = game.shoe().cards().take(10).copied().collect();
    game.shoe_mut().set_cards(low);

    let output = play(&mut game, "");
    assert!(output.starts_with("Shoe reshuffled.\nGame has started.\n"));
    assert_eq!(game.cards_remaining(), 48);
}

#[test]
fn shoe_running_dry_mid_round_is_announced() {
    let mut game = Game::new(GameOptions::default().with_reshuffle_below(1), 2);
    let stacked = [Rank::Ten, Rank::Ten, Rank::Nine, Rank::Six];
    game.shoe_mut().set_cards(stacked.map(|rank| Card::new(rank, Suit::Clubs)));

    let output = play(&mut game, "s\n");
    assert!(output.contains("Shoe reshuffled.\nDealer's hand: 10, 6\nDealer draws: "));
    assert_eq!(output.matches("Shoe reshuffled.").count(), 1);
    assert_eq!(game.rounds_played(), 1);
}
