//! Card, board and standings formatters for terminal output.
//!
//! Suits print as ♥ ♦ ♣ ♠ where the terminal can be expected to render them
//! and as h d c s otherwise (older Windows consoles).
//!
//! ```rust
//! use showdown_engine::cards::{Card, Rank, Suit};
//! use showdown_cli::formatters::{format_card, format_board};
//!
//! let ace_spades = Card { rank: Rank::Ace, suit: Suit::Spades };
//! assert!(format_card(&ace_spades) == "A♠" || format_card(&ace_spades) == "As");
//! assert!(format_board(&[ace_spades]).starts_with("[A"));
//! ```

use showdown_engine::cards::{Card, Suit};
use showdown_engine::session::Standing;

pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: Suit) -> char {
    if supports_unicode() {
        suit.symbol()
    } else {
        match suit {
            Suit::Hearts => 'h',
            Suit::Diamonds => 'd',
            Suit::Clubs => 'c',
            Suit::Spades => 's',
        }
    }
}

pub fn format_card(card: &Card) -> String {
    format!("{}{}", card.rank.symbol(), format_suit(card.suit))
}

/// `[A♠ K♥]`; `[]` for no cards.
pub fn format_board(cards: &[Card]) -> String {
    let formatted: Vec<String> = cards.iter().map(format_card).collect();
    format!("[{}]", formatted.join(" "))
}

/// `1. Player_2 (baseline): $10150`
pub fn format_standing(standing: &Standing) -> String {
    format!(
        "{}. {} ({}): ${}",
        standing.position, standing.name, standing.source, standing.stack
    )
}
