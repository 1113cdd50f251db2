//! Baseline policy: hand strength plus pot odds.
//!
//! Deterministic and rule-based, meant as a reference opponent when
//! comparing model-driven seats.

use showdown_engine::agent::Action;
use showdown_engine::cards::Card;
use showdown_engine::hand::{Category, best_of};

use crate::TextSource;
use crate::error::ProviderError;
use crate::policies::respond;
use crate::prompt::{GameSnapshot, Prompt};

/// Rule-based text source.
///
/// # Strategy
///
/// **Preflop:** pairs and broadway cards rate high, suited connectors
/// medium, unconnected low cards weak.
///
/// **Postflop:** the best hand out of hole cards and board, by category,
/// with a point for a queen-or-better top card.
///
/// Strong hands (9-10) raise by half the pot (at least the minimum), 7-8
/// call, 3-6 call when the price is right, the rest fold. A call of 0 is a
/// free check and is always taken.
///
/// # Example
///
/// ```rust
/// use showdown_ai::baseline::BaselineSource;
/// use showdown_ai::TextSource;
///
/// let source = BaselineSource::new();
/// assert_eq!(source.model_id(), "baseline");
/// ```
#[derive(Debug, Clone, Default)]
pub struct BaselineSource;

impl BaselineSource {
    pub fn new() -> Self {
        Self
    }

    /// Preflop strength on a 0-10 scale.
    fn preflop_strength(c1: Card, c2: Card) -> u8 {
        let r1 = c1.rank.value();
        let r2 = c2.rank.value();
        let (high, low) = if r1 > r2 { (r1, r2) } else { (r2, r1) };
        let suited = c1.suit == c2.suit;
        let pick = |s: u8, o: u8| if suited { s } else { o };

        if r1 == r2 {
            return match high {
                13..=14 => 10,
                11..=12 => 9,
                10 => 8,
                9 => 7,
                8 => 6,
                7 => 5,
                _ => 4,
            };
        }

        match (high, low) {
            (14, 13) => pick(10, 8),
            (14, 12) => pick(8, 7),
            (14, 11) => pick(7, 6),
            (14, 10) => pick(6, 5),
            (14, _) => pick(5, 4),
            (13, 12) => pick(7, 6),
            (13, 11) => pick(6, 5),
            (13, 10) => pick(5, 4),
            (12, 11) => pick(6, 5),
            (12, 10) => pick(5, 4),
            _ if suited && high - low <= 2 => {
                if high >= 9 {
                    5
                } else {
                    4
                }
            }
            _ if high >= 11 && low >= 9 => 4,
            _ => 2,
        }
    }

    /// Postflop strength on a 0-10 scale, or `None` before the flop.
    fn postflop_strength(hole: &[Card], board: &[Card]) -> Option<u8> {
        if board.len() < 3 {
            return None;
        }
        let mut cards = hole.to_vec();
        cards.extend_from_slice(board);
        let key = best_of(&cards).ok()?;

        let base = match key.category {
            Category::HighCard => 1,
            Category::OnePair => 3,
            Category::TwoPair => 5,
            Category::ThreeOfAKind => 6,
            Category::Straight => 7,
            Category::Flush => 8,
            Category::FullHouse => 9,
            Category::FourOfAKind | Category::StraightFlush => 10,
        };
        let kicker = u8::from(key.ranks[0] >= 12);
        Some((base + kicker).min(10))
    }

    fn strength(state: &GameSnapshot) -> u8 {
        match state.hole_cards.as_slice() {
            [c1, c2] => Self::postflop_strength(&state.hole_cards, &state.community_cards)
                .unwrap_or_else(|| Self::preflop_strength(*c1, *c2)),
            _ => 0,
        }
    }

    /// Pot share won by calling: `pot / (pot + call)`.
    fn pot_odds(pot: u32, call_amount: u32) -> f32 {
        if call_amount == 0 {
            return 1.0;
        }
        pot as f32 / (pot + call_amount) as f32
    }

    fn decide(strength: u8, state: &GameSnapshot) -> Action {
        let call = state.call_amount;
        let pot = state.pot;
        if call > state.stack {
            return Action::fold();
        }
        if call == 0 {
            return Action::call();
        }

        let odds = Self::pot_odds(pot, call);
        match strength {
            9..=10 => {
                let total = call + (pot / 2).max(state.min_raise);
                if total <= state.stack {
                    Action::raise_to(total)
                } else {
                    Action::call()
                }
            }
            7..=8 => Action::call(),
            5..=6 if odds >= 0.3 || call <= pot / 4 => Action::call(),
            3..=4 if odds >= 0.4 || call <= pot / 6 => Action::call(),
            _ => Action::fold(),
        }
    }
}

impl TextSource for BaselineSource {
    fn model_id(&self) -> &str {
        "baseline"
    }

    fn complete(&mut self, prompt: &Prompt) -> Result<String, ProviderError> {
        let state = &prompt.state;
        let strength = Self::strength(state);
        let action = Self::decide(strength, state);
        let reasoning = format!(
            "Hand strength {}/10 on the {}; pot {}, {} to call (pot odds {:.2}).",
            strength,
            state.street,
            state.pot,
            state.call_amount,
            Self::pot_odds(state.pot, state.call_amount)
        );
        Ok(respond(&reasoning, &action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_action;
    use showdown_engine::transcript::Street;

    fn cards(s: &str) -> Vec<Card> {
        s.split_whitespace().map(|c| c.parse().unwrap()).collect()
    }

    fn state(hole: &str, board: &str, pot: u32, call_amount: u32, stack: u32) -> GameSnapshot {
        let community_cards = cards(board);
        let street = match community_cards.len() {
            0 => Street::Preflop,
            3 => Street::Flop,
            4 => Street::Turn,
            _ => Street::River,
        };
        GameSnapshot {
            seat_name: "B".into(),
            stack,
            hole_cards: cards(hole),
            street,
            community_cards,
            pot,
            call_amount,
            min_raise: 500,
        }
    }

    #[test]
    fn preflop_strength_table() {
        let s = |h: &str| {
            let c = cards(h);
            BaselineSource::preflop_strength(c[0], c[1])
        };
        assert_eq!(s("Ah As"), 10);
        assert_eq!(s("Kh Ks"), 10);
        assert_eq!(s("Ah Kh"), 10);
        assert_eq!(s("Ah Ks"), 8);
        assert!(s("7h 2s") <= 3);
        assert!((4..=6).contains(&s("9h 8h")));
    }

    #[test]
    fn pot_odds_calculation() {
        assert!((BaselineSource::pot_odds(100, 50) - 0.667).abs() < 0.01);
        assert_eq!(BaselineSource::pot_odds(100, 0), 1.0);
    }

    #[test]
    fn postflop_uses_board() {
        let strength = BaselineSource::postflop_strength(&cards("Ah As"), &cards("Ad Kc Qh"));
        assert!(strength.unwrap() >= 6);
        assert_eq!(BaselineSource::postflop_strength(&cards("Ah As"), &[]), None);
    }

    #[test]
    fn premium_hand_raises_half_pot() {
        let st = state("Ah As", "", 1_500, 100, 10_000);
        let action = BaselineSource::decide(BaselineSource::strength(&st), &st);
        assert_eq!(action, Action::raise_to(850));
    }

    #[test]
    fn weak_hand_folds_to_a_bet() {
        let st = state("7h 2s", "", 150, 100, 10_000);
        assert_eq!(
            BaselineSource::decide(BaselineSource::strength(&st), &st),
            Action::fold()
        );
    }

    #[test]
    fn never_asks_for_more_than_the_stack() {
        let st = state("Ah As", "", 150, 300, 200);
        assert_eq!(
            BaselineSource::decide(BaselineSource::strength(&st), &st),
            Action::fold()
        );
    }

    #[test]
    fn answer_is_parseable() {
        let mut source = BaselineSource::new();
        let prompt = Prompt {
            text: String::new(),
            state: state("Kh Qh", "Jh Th 2c", 400, 100, 5_000),
        };
        let raw = source.complete(&prompt).unwrap();
        assert!(raw.contains("on the flop"));
        assert!(parse_action(&raw).is_ok());
    }
}
