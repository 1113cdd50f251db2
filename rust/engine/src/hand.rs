use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};
use crate::errors::EngineError;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl Category {
    pub fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
        }
    }
}

/// Total-order comparison key for a made hand.
///
/// Fields compare in declaration order, so the derived `Ord` is the
/// lexicographic comparison of
/// `(category, multiplicities, ranks grouped by multiplicity, ranks descending)`.
/// A greater key is a strictly better hand; equal keys are an exact tie.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct HandKey {
    pub category: Category,
    // multiplicities sorted by (count desc, rank desc), e.g. [3, 2] for a full house
    pub counts: Vec<u8>,
    // distinct ranks in the same grouped order as `counts`
    pub grouped_ranks: Vec<u8>,
    // all five ranks, high to low
    pub ranks: [u8; 5],
}

impl fmt::Display for HandKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ranks: Vec<String> = self
            .grouped_ranks
            .iter()
            .filter_map(|&r| Rank::from_u8(r))
            .map(|r| r.symbol().to_string())
            .collect();
        write!(f, "{} ({})", self.category.name(), ranks.join(" "))
    }
}

/// Evaluates the best five-card hand out of exactly seven cards
/// (two hole cards plus five community cards).
pub fn evaluate(cards: &[Card]) -> Result<HandKey, EngineError> {
    let seven: &[Card; 7] = cards.try_into().map_err(|_| EngineError::InvalidHandSize {
        expected: 7,
        actual: cards.len(),
    })?;
    Ok(evaluate_hand(seven))
}

pub fn evaluate_hand(cards: &[Card; 7]) -> HandKey {
    best_key(cards)
}

/// Best five-card key out of 5, 6 or 7 cards.
///
/// Used for strength estimates before the board is complete; showdowns go
/// through [`evaluate`].
pub fn best_of(cards: &[Card]) -> Result<HandKey, EngineError> {
    if !(5..=7).contains(&cards.len()) {
        return Err(EngineError::InvalidHandSize {
            expected: 5,
            actual: cards.len(),
        });
    }
    Ok(best_key(cards))
}

pub fn compare_hands(a: &HandKey, b: &HandKey) -> Ordering {
    a.cmp(b)
}

fn best_key(cards: &[Card]) -> HandKey {
    let n = cards.len();
    let mut best: Option<HandKey> = None;
    // every subset of exactly five cards: C(7,5) = 21 for a full hand
    for mask in 0u32..(1 << n) {
        if mask.count_ones() != 5 {
            continue;
        }
        let mut five = [cards[0]; 5];
        let mut k = 0;
        for (i, &c) in cards.iter().enumerate() {
            if mask & (1 << i) != 0 {
                five[k] = c;
                k += 1;
            }
        }
        let key = rank_five(&five);
        if best.as_ref().is_none_or(|b| key > *b) {
            best = Some(key);
        }
    }
    // callers guarantee at least five cards
    best.unwrap_or_else(|| rank_five(&[cards[0]; 5]))
}

fn rank_five(hand: &[Card; 5]) -> HandKey {
    let mut ranks = [0u8; 5];
    for (slot, c) in ranks.iter_mut().zip(hand.iter()) {
        *slot = c.rank.value();
    }
    ranks.sort_unstable_by(|a, b| b.cmp(a));

    let is_flush = hand.iter().all(|c| c.suit == hand[0].suit);
    // Ace is 14 only: A-2-3-4-5 is not a straight
    let is_straight = ranks.windows(2).all(|w| w[0] == w[1] + 1);

    let mut rank_counts = [0u8; 15];
    for &r in &ranks {
        rank_counts[r as usize] += 1;
    }
    let mut groups: Vec<(u8, u8)> = (2..=14u8)
        .filter(|&r| rank_counts[r as usize] > 0)
        .map(|r| (rank_counts[r as usize], r))
        .collect();
    groups.sort_unstable_by(|a, b| b.cmp(a));

    let counts: Vec<u8> = groups.iter().map(|&(c, _)| c).collect();
    let grouped_ranks: Vec<u8> = groups.iter().map(|&(_, r)| r).collect();

    let pairs = counts.iter().filter(|&&c| c == 2).count();
    let category = if is_straight && is_flush {
        Category::StraightFlush
    } else if counts.contains(&4) {
        Category::FourOfAKind
    } else if counts == [3, 2] {
        Category::FullHouse
    } else if is_flush {
        Category::Flush
    } else if is_straight {
        Category::Straight
    } else if counts.contains(&3) {
        Category::ThreeOfAKind
    } else if pairs == 2 {
        Category::TwoPair
    } else if pairs == 1 {
        Category::OnePair
    } else {
        Category::HighCard
    };

    HandKey {
        category,
        counts,
        grouped_ranks,
        ranks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(s: &str) -> Vec<Card> {
        s.split_whitespace().map(|c| c.parse().unwrap()).collect()
    }

    #[test]
    fn five_card_key_layout() {
        let hand: [Card; 5] = cards("Kh Kd 9s 9c 2h").try_into().unwrap();
        let key = rank_five(&hand);
        assert_eq!(key.category, Category::TwoPair);
        assert_eq!(key.counts, vec![2, 2, 1]);
        assert_eq!(key.grouped_ranks, vec![13, 9, 2]);
        assert_eq!(key.ranks, [13, 13, 9, 9, 2]);
    }

    #[test]
    fn display_uses_grouped_ranks() {
        let key = evaluate(&cards("Ac Ad 2s 5h 9c Jd 3s")).unwrap();
        assert_eq!(key.to_string(), "One Pair (A J 9 5)");
    }
}
