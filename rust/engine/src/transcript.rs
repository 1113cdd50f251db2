use std::fmt;

use serde::{Deserialize, Serialize};

use crate::agent::ActionKind;
use crate::cards::{format_cards, Card};
use crate::hand::HandKey;

/// Represents a betting street in Texas Hold'em poker.
/// Defines the four stages of a poker hand.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Street {
    /// Before flop (hole cards dealt)
    Preflop,
    /// After flop (3 community cards)
    Flop,
    /// After turn (4th community card)
    Turn,
    /// After river (5th community card)
    River,
}

impl Street {
    pub const ALL: [Street; 4] = [Street::Preflop, Street::Flop, Street::Turn, Street::River];

    pub fn name(self) -> &'static str {
        match self {
            Street::Preflop => "preflop",
            Street::Flop => "flop",
            Street::Turn => "turn",
            Street::River => "river",
        }
    }

    /// Community cards revealed when this street begins.
    pub fn cards_revealed(self) -> usize {
        match self {
            Street::Preflop => 0,
            Street::Flop => 3,
            Street::Turn | Street::River => 1,
        }
    }
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Blind {
    Small,
    Big,
}

/// A single entry of the hand transcript.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HandEvent {
    HandStarted {
        hand_no: u32,
        button: usize,
    },
    HoleCards {
        seat: usize,
        name: String,
        cards: Vec<Card>,
    },
    PostBlind {
        seat: usize,
        name: String,
        blind: Blind,
        amount: u32,
    },
    Fold {
        seat: usize,
        name: String,
        street: Street,
    },
    Call {
        seat: usize,
        name: String,
        street: Street,
        amount: u32,
    },
    Raise {
        seat: usize,
        name: String,
        street: Street,
        total: u32,
    },
    /// The seat asked to call or raise but could not cover the amount.
    ForcedFold {
        seat: usize,
        name: String,
        street: Street,
        attempted: ActionKind,
        amount: u32,
    },
    Board {
        street: Street,
        cards: Vec<Card>,
    },
    ShowdownReveal {
        seat: usize,
        name: String,
        cards: Vec<Card>,
        hand: HandKey,
    },
    Uncontested {
        seat: usize,
        name: String,
        pot: u32,
    },
    ShowdownWin {
        seat: usize,
        name: String,
        pot: u32,
    },
    SplitPot {
        names: Vec<String>,
        share: u32,
        odd_chips: u32,
        odd_chip_seat: Option<String>,
    },
    Unclaimed {
        pot: u32,
    },
}

impl fmt::Display for HandEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandEvent::HandStarted { hand_no, button } => write!(
                f,
                "=== NEW HAND #{} (button at seat {}) ===",
                hand_no,
                button + 1
            ),
            HandEvent::HoleCards { name, cards, .. } => {
                write!(f, "{} hole cards: {}", name, format_cards(cards))
            }
            HandEvent::PostBlind {
                name,
                blind,
                amount,
                ..
            } => {
                let tag = match blind {
                    Blind::Small => "SB",
                    Blind::Big => "BB",
                };
                write!(f, "{} posts {} {}.", name, tag, amount)
            }
            HandEvent::Fold { name, .. } => write!(f, "{} folds.", name),
            HandEvent::Call { name, amount, .. } => write!(f, "{} calls {}.", name, amount),
            HandEvent::Raise { name, total, .. } => {
                write!(f, "{} raises total to {}.", name, total)
            }
            HandEvent::ForcedFold {
                name,
                attempted,
                amount,
                ..
            } => match attempted {
                ActionKind::Raise => write!(
                    f,
                    "{} tries raising to {} but lacks chips => folds.",
                    name, amount
                ),
                _ => write!(
                    f,
                    "{} tries calling {} but lacks chips => folds.",
                    name, amount
                ),
            },
            HandEvent::Board { street, cards } => write!(
                f,
                "{}: {}",
                street.name().to_uppercase(),
                format_cards(cards)
            ),
            HandEvent::ShowdownReveal {
                name, cards, hand, ..
            } => write!(
                f,
                "At showdown, {} hole cards: {} => {}",
                name,
                format_cards(cards),
                hand
            ),
            HandEvent::Uncontested { name, pot, .. } => {
                write!(f, "Only {} remains, wins pot of {}.", name, pot)
            }
            HandEvent::ShowdownWin { name, pot, .. } => {
                write!(f, "Showdown: {} wins pot of {}.", name, pot)
            }
            HandEvent::SplitPot {
                names,
                share,
                odd_chips,
                odd_chip_seat,
            } => {
                write!(
                    f,
                    "Showdown tie among [{}]; each gets {}.",
                    names.join(", "),
                    share
                )?;
                if let (Some(name), true) = (odd_chip_seat, *odd_chips > 0) {
                    write!(f, " {} takes the odd {}.", name, odd_chips)?;
                }
                Ok(())
            }
            HandEvent::Unclaimed { .. } => write!(f, "All folded => pot unclaimed."),
        }
    }
}

/// Append-only record of one hand, in the order things happened.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Transcript {
    events: Vec<HandEvent>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: HandEvent) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[HandEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Full text of the hand, one event per line.
    pub fn render(&self) -> String {
        self.render_filtered(|_| true)
    }

    /// The hand as `seat` may see it: identical ordering, but other seats'
    /// hole cards stay hidden until they are shown down.
    pub fn render_for(&self, seat: usize) -> String {
        self.render_filtered(|e| match e {
            HandEvent::HoleCards { seat: owner, .. } => *owner == seat,
            _ => true,
        })
    }

    fn render_filtered(&self, keep: impl Fn(&HandEvent) -> bool) -> String {
        let lines: Vec<String> = self
            .events
            .iter()
            .filter(|e| keep(e))
            .map(|e| e.to_string())
            .collect();
        lines.join("\n")
    }
}
