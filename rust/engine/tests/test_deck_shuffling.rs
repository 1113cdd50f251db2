use std::collections::HashSet;

use showdown_engine::cards::Card;
use showdown_engine::deck::Deck;
use showdown_engine::errors::EngineError;

#[test]
fn fresh_shuffle_has_52_unique_cards() {
    let mut deck = Deck::new_with_seed(42);
    deck.shuffle();
    assert_eq!(deck.remaining(), 52);
    let mut set = HashSet::new();
    for i in 0..52 {
        let c = deck.deal_card().expect("should have 52 cards");
        assert!(set.insert(c), "card {} duplicated at position {}", c, i);
    }
    assert!(deck.deal_card().is_none(), "after 52 cards, deck should be empty");
}

#[test]
fn shuffle_is_deterministic_with_same_seed() {
    let mut d1 = Deck::new_with_seed(12345);
    let mut d2 = Deck::new_with_seed(12345);
    d1.shuffle();
    d2.shuffle();
    assert_eq!(d1.remaining_cards(), d2.remaining_cards());

    // and stays in step across reshuffles
    d1.shuffle();
    d2.shuffle();
    assert_eq!(d1.deal(10).unwrap(), d2.deal(10).unwrap());
}

#[test]
fn shuffle_differs_with_different_seed() {
    let mut d1 = Deck::new_with_seed(1);
    let mut d2 = Deck::new_with_seed(2);
    d1.shuffle();
    d2.shuffle();
    assert_ne!(
        d1.deal(10).unwrap(),
        d2.deal(10).unwrap(),
        "different seeds should produce different orders (high probability)"
    );
}

#[test]
fn deal_removes_cards_and_keeps_the_partition() {
    let mut deck = Deck::new_with_seed(777);
    deck.shuffle();

    let hole = deck.deal(4).unwrap();
    let flop = deck.deal(3).unwrap();
    assert_eq!(deck.remaining(), 45);

    let mut all: HashSet<Card> = hole.iter().chain(flop.iter()).copied().collect();
    assert_eq!(all.len(), 7);
    for c in deck.remaining_cards() {
        assert!(all.insert(*c), "{} both dealt and remaining", c);
    }
    assert_eq!(all.len(), 52);
}

#[test]
fn deal_more_than_remaining_fails_without_consuming() {
    let mut deck = Deck::new_with_seed(9);
    deck.shuffle();
    deck.deal(50).unwrap();

    let err = deck.deal(3).unwrap_err();
    assert_eq!(
        err,
        EngineError::InsufficientCards {
            requested: 3,
            remaining: 2
        }
    );
    assert_eq!(deck.remaining(), 2);
    assert_eq!(deck.deal(2).unwrap().len(), 2);
}

#[test]
fn deal_zero_is_empty() {
    let mut deck = Deck::new_with_seed(3);
    deck.shuffle();
    assert!(deck.deal(0).unwrap().is_empty());
    assert_eq!(deck.remaining(), 52);
}
