//! Player churn tests.
//!
//! Players join and leave at any time. These tests check that the judge,
//! suspension, and card piles stay consistent while they do.

use party_cards::cards::{Card, CardKind, Deck};
use party_cards::core::{ConditionError, GameError, HouseRules, PlayerId};
use party_cards::game::{Game, GameBuilder, Outcome};

fn new_game(players: &[PlayerId]) -> Game {
    let deck = Deck::from_cards(
        (0..10).map(|i| Card::prompt(format!("Prompt {i}"), 0, 1)),
        (0..90).map(|i| Card::response(format!("Response {i}"))),
    )
    .unwrap();
    GameBuilder::new("churn")
        .deck(deck)
        .players(players.iter().copied())
        .rules(HouseRules::default().with_hand_size(6))
        .seed(17)
        .build()
        .unwrap()
}

fn abc() -> [PlayerId; 3] {
    [PlayerId::new(10), PlayerId::new(20), PlayerId::new(30)]
}

fn response_cards_in_play(game: &Game) -> usize {
    let pile = game.pile(CardKind::Response);
    let held: usize = game
        .players()
        .iter()
        .map(|&p| game.hand(p).unwrap().len() + game.played(p).unwrap().len())
        .sum();
    pile.draw_pile().len() + pile.discard_pile().len() + held
}

/// Test that removing the judge elects the next player in join order.
#[test]
fn test_removing_judge_elects_next() {
    let [a, b, c] = abc();
    let mut game = new_game(&[a, b, c]);
    assert_eq!(game.judge(), Some(a));

    assert_eq!(game.remove_player(a), Ok(None));
    assert_eq!(game.judge(), Some(b));
    assert!(!game.is_suspended());

    // Mid-round removal of the judge works the same way.
    let mut game = new_game(&[a, b, c]);
    game.start_round().unwrap();
    game.end_round(Some(c)).unwrap();
    assert_eq!(game.judge(), Some(b));

    game.start_round().unwrap();
    game.remove_player(b).unwrap();
    assert_eq!(game.judge(), Some(c));
    assert!(game.is_in_round());
}

/// Test that dropping to one player suspends without finishing.
#[test]
fn test_down_to_one_player_suspends() {
    let [a, b, c] = abc();
    let mut game = new_game(&[a, b, c]);

    game.remove_player(b).unwrap();
    game.remove_player(c).unwrap();

    assert!(game.is_suspended());
    assert!(!game.is_finished());
    assert_eq!(game.judge(), None);

    let err = game.start_round().unwrap_err();
    assert!(err.is_condition());
    assert_eq!(err, GameError::Condition(ConditionError::Suspended));

    // A newcomer gets the game going again.
    game.add_player(PlayerId::new(40)).unwrap();
    assert!(!game.is_suspended());
    game.start_round().unwrap();
}

/// Test that a round in progress can be finished after players leave.
#[test]
fn test_round_survives_departures() {
    let [a, b, c] = abc();
    let mut game = new_game(&[a, b, c]);
    game.start_round().unwrap();
    let card = game.hand(c).unwrap()[0];
    game.submit_play(c, &[card]).unwrap();

    game.remove_player(b).unwrap();
    let result = game.end_round(Some(c)).unwrap();
    assert_eq!(result.round(), &Outcome::Winner(c));
    assert_eq!(game.judge(), Some(c));
}

/// Test that the last player leaving purges the game.
#[test]
fn test_last_player_out_purges() {
    let [a, b, _] = abc();
    let mut game = new_game(&[a, b]);
    game.start_round().unwrap();

    game.remove_player(a).unwrap();
    let result = game.remove_player(b).unwrap();

    assert_eq!(result, Some(Outcome::NoContest));
    assert!(game.is_finished());
    assert!(game.registry().is_empty());
    assert!(game.pile(CardKind::Prompt).is_exhausted());
    assert!(game.pile(CardKind::Response).is_exhausted());
}

/// Test that leaving players' cards go back to the piles.
#[test]
fn test_departures_conserve_cards() {
    let [a, b, c] = abc();
    let mut game = new_game(&[a, b, c]);
    game.start_round().unwrap();
    let card = game.hand(b).unwrap()[0];
    game.submit_play(b, &[card]).unwrap();

    assert_eq!(response_cards_in_play(&game), 90);
    game.remove_player(b).unwrap();
    assert_eq!(response_cards_in_play(&game), 90);

    game.add_player(PlayerId::new(40)).unwrap();
    game.end_round(Some(c)).unwrap();
    assert_eq!(response_cards_in_play(&game), 90);
    assert_eq!(game.hand(PlayerId::new(40)).unwrap().len(), 6);
}
