use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Represents one of the four suits in a standard 52-card deck.
/// Used as a component of [`Card`] to fully define a playing card.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit (♣)
    Clubs,
    /// Diamonds suit (♦)
    Diamonds,
    /// Hearts suit (♥)
    Hearts,
    /// Spades suit (♠)
    Spades,
}

impl Suit {
    pub fn symbol(self) -> char {
        match self {
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
            Suit::Hearts => '♥',
            Suit::Spades => '♠',
        }
    }

    fn from_char(c: char) -> Option<Suit> {
        match c {
            '♣' | 'c' | 'C' => Some(Suit::Clubs),
            '♦' | 'd' | 'D' => Some(Suit::Diamonds),
            '♥' | 'h' | 'H' => Some(Suit::Hearts),
            '♠' | 's' | 'S' => Some(Suit::Spades),
            _ => None,
        }
    }
}

/// Represents the rank (face value) of a playing card from Two through Ace.
/// Numeric values are assigned for comparison and hand evaluation purposes;
/// the Ace only ever counts as 14.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    /// Rank 2
    Two = 2,
    /// Rank 3
    Three,
    /// Rank 4
    Four,
    /// Rank 5
    Five,
    /// Rank 6
    Six,
    /// Rank 7
    Seven,
    /// Rank 8
    Eight,
    /// Rank 9
    Nine,
    /// Rank 10
    Ten,
    /// Jack (11)
    Jack,
    /// Queen (12)
    Queen,
    /// King (13)
    King,
    /// Ace (14)
    Ace,
}

impl Rank {
    /// Converts a numeric rank in `2..=14` back into a [`Rank`].
    pub fn from_u8(v: u8) -> Option<Rank> {
        let rank = match v {
            2 => Rank::Two,
            3 => Rank::Three,
            4 => Rank::Four,
            5 => Rank::Five,
            6 => Rank::Six,
            7 => Rank::Seven,
            8 => Rank::Eight,
            9 => Rank::Nine,
            10 => Rank::Ten,
            11 => Rank::Jack,
            12 => Rank::Queen,
            13 => Rank::King,
            14 => Rank::Ace,
            _ => return None,
        };
        Some(rank)
    }

    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn symbol(self) -> char {
        match self {
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
            r => char::from(b'0' + r.value()),
        }
    }
}

/// Represents a single playing card with a rank and suit.
///
/// Cards order by rank first, then suit, which is the canonical deck order
/// produced by [`new_deck`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Card {
    /// The rank of the card (Two through Ace)
    pub rank: Rank,
    /// The suit of the card (Clubs, Diamonds, Hearts, or Spades)
    pub suit: Suit,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }
}

/// Numeric rank of a card (2..=14).
pub fn rank_of(card: Card) -> u8 {
    card.rank.value()
}

pub fn suit_of(card: Card) -> Suit {
    card.suit
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.symbol(), self.suit.symbol())
    }
}

/// Error returned when a string cannot be parsed into a [`Card`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid card: {0:?}")]
pub struct ParseCardError(pub String);

impl FromStr for Card {
    type Err = ParseCardError;

    /// Accepts `As`, `Td`, `10h` and `14♥` style notations.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let err = || ParseCardError(s.to_string());
        let suit_char = s.chars().last().ok_or_else(err)?;
        let suit = Suit::from_char(suit_char).ok_or_else(err)?;
        let rank_part = &s[..s.len() - suit_char.len_utf8()];
        let rank = match rank_part.to_ascii_uppercase().as_str() {
            "T" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            "A" => Rank::Ace,
            digits => digits
                .parse::<u8>()
                .ok()
                .and_then(Rank::from_u8)
                .ok_or_else(err)?,
        };
        Ok(Card { rank, suit })
    }
}

/// Formats a card slice as `[A♠, K♦]`.
pub fn format_cards(cards: &[Card]) -> String {
    let inner: Vec<String> = cards.iter().map(|c| c.to_string()).collect();
    format!("[{}]", inner.join(", "))
}

pub fn all_suits() -> [Suit; 4] {
    [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades]
}

pub fn all_ranks() -> [Rank; 13] {
    [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ]
}

/// Builds the 52-card deck in canonical order: every rank from Two to Ace,
/// each crossed with the four suits.
pub fn new_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(52);
    for &r in &all_ranks() {
        for &s in &all_suits() {
            v.push(Card { rank: r, suit: s });
        }
    }
    v
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_common_notations() {
        let ace: Card = "As".parse().unwrap();
        assert_eq!(ace, Card::new(Rank::Ace, Suit::Spades));
        assert_eq!("10h".parse::<Card>().unwrap().rank, Rank::Ten);
        assert_eq!("14♥".parse::<Card>().unwrap(), Card::new(Rank::Ace, Suit::Hearts));
        assert_eq!("td".parse::<Card>().unwrap(), Card::new(Rank::Ten, Suit::Diamonds));
    }

    #[test]
    fn rejects_garbage() {
        assert!("1s".parse::<Card>().is_err());
        assert!("Ax".parse::<Card>().is_err());
        assert!("".parse::<Card>().is_err());
        assert!("15♣".parse::<Card>().is_err());
    }

    #[test]
    fn display_round_trips_through_parse() {
        for c in new_deck() {
            let shown = c.to_string();
            assert_eq!(shown.parse::<Card>().unwrap(), c, "{}", shown);
        }
    }

    #[test]
    fn canonical_order_is_rank_major() {
        let deck = new_deck();
        assert_eq!(deck[0], Card::new(Rank::Two, Suit::Clubs));
        assert_eq!(deck[1], Card::new(Rank::Two, Suit::Diamonds));
        assert_eq!(deck[51], Card::new(Rank::Ace, Suit::Spades));
        assert!(deck.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn projections() {
        let c = Card::new(Rank::Queen, Suit::Hearts);
        assert_eq!(rank_of(c), 12);
        assert_eq!(suit_of(c), Suit::Hearts);
    }
}
