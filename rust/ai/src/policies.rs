//! Scripted text sources.
//!
//! These stand in for a language model: each one reads the structured state
//! carried by the [`Prompt`] and answers in the same reasoning-plus-JSON
//! format a model is asked for, so the whole parsing path is exercised.

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use showdown_engine::agent::Action;

use crate::TextSource;
use crate::error::ProviderError;
use crate::prompt::{GameSnapshot, Prompt};

/// Formats an answer the way a model is asked to: reasoning, then JSON.
pub fn respond(reasoning: &str, action: &Action) -> String {
    // Action always serializes; the fallback keeps this infallible
    let json = serde_json::to_string_pretty(action)
        .unwrap_or_else(|_| format!("{{\"action\": \"{}\", \"raise_amount\": null}}", action.kind));
    format!("<poker_reasoning>\n{}\n</poker_reasoning>\n{}", reasoning, json)
}

/// Calls whenever the call is affordable, folds otherwise.
#[derive(Debug, Clone, Default)]
pub struct CallingSource;

impl TextSource for CallingSource {
    fn model_id(&self) -> &str {
        "calling"
    }

    fn complete(&mut self, prompt: &Prompt) -> Result<String, ProviderError> {
        let state = &prompt.state;
        let (reasoning, action) = if state.call_amount <= state.stack {
            (format!("Calling {} keeps me in the hand.", state.call_amount), Action::call())
        } else {
            (format!("I cannot cover {}.", state.call_amount), Action::fold())
        };
        Ok(respond(&reasoning, &action))
    }
}

/// Folds every decision.
#[derive(Debug, Clone, Default)]
pub struct FoldingSource;

impl TextSource for FoldingSource {
    fn model_id(&self) -> &str {
        "folding"
    }

    fn complete(&mut self, _prompt: &Prompt) -> Result<String, ProviderError> {
        Ok(respond("Nothing worth playing.", &Action::fold()))
    }
}

/// Raises the minimum while it can afford to, then calls.
#[derive(Debug, Clone, Default)]
pub struct RaisingSource;

impl TextSource for RaisingSource {
    fn model_id(&self) -> &str {
        "raising"
    }

    fn complete(&mut self, prompt: &Prompt) -> Result<String, ProviderError> {
        let state = &prompt.state;
        let total = state.minimum_raise_total();
        let (reasoning, action) = if total <= state.stack {
            (format!("Pressure: raise to {}.", total), Action::raise_to(total))
        } else if state.call_amount <= state.stack {
            ("Too short to raise, calling.".to_string(), Action::call())
        } else {
            ("Too short to continue.".to_string(), Action::fold())
        };
        Ok(respond(&reasoning, &action))
    }
}

/// Picks a random legal-looking action from a seeded generator.
#[derive(Debug, Clone)]
pub struct RandomSource {
    rng: ChaCha20Rng,
}

impl RandomSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    fn choose(&mut self, state: &GameSnapshot) -> Action {
        let minimum = state.minimum_raise_total();
        match self.rng.random_range(0..10u8) {
            0..=1 => Action::fold(),
            2..=7 => Action::call(),
            _ if minimum <= state.stack => {
                Action::raise_to(self.rng.random_range(minimum..=state.stack))
            }
            _ => Action::call(),
        }
    }
}

impl TextSource for RandomSource {
    fn model_id(&self) -> &str {
        "random"
    }

    fn complete(&mut self, prompt: &Prompt) -> Result<String, ProviderError> {
        let action = self.choose(&prompt.state);
        Ok(respond("Rolled the dice.", &action))
    }
}

/// Replays a fixed list of raw responses, verbatim.
#[derive(Debug, Clone)]
pub struct CannedSource {
    model_id: String,
    responses: VecDeque<String>,
}

impl CannedSource {
    pub fn new<S: Into<String>>(
        model_id: impl Into<String>,
        responses: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            model_id: model_id.into(),
            responses: responses.into_iter().map(Into::into).collect(),
        }
    }

    pub fn then(mut self, response: impl Into<String>) -> Self {
        self.responses.push_back(response.into());
        self
    }

    pub fn remaining(&self) -> usize {
        self.responses.len()
    }
}

impl TextSource for CannedSource {
    fn model_id(&self) -> &str {
        &self.model_id
    }

    fn complete(&mut self, _prompt: &Prompt) -> Result<String, ProviderError> {
        self.responses
            .pop_front()
            .ok_or_else(|| ProviderError::Unavailable("no canned responses left".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_action;
    use showdown_engine::transcript::Street;

    fn prompt(stack: u32, call_amount: u32) -> Prompt {
        Prompt {
            text: String::new(),
            state: GameSnapshot {
                seat_name: "P".into(),
                stack,
                hole_cards: Vec::new(),
                street: Street::Preflop,
                community_cards: Vec::new(),
                pot: 150,
                call_amount,
                min_raise: 500,
            },
        }
    }

    fn decide(source: &mut dyn TextSource, p: &Prompt) -> Action {
        parse_action(&source.complete(p).unwrap()).unwrap()
    }

    #[test]
    fn responses_parse_back() {
        let raw = respond("thinking", &Action::raise_to(700));
        assert!(raw.starts_with("<poker_reasoning>\nthinking\n</poker_reasoning>\n{"));
        assert_eq!(parse_action(&raw).unwrap(), Action::raise_to(700));
    }

    #[test]
    fn calling_source_folds_when_short() {
        let mut s = CallingSource;
        assert_eq!(decide(&mut s, &prompt(1_000, 100)), Action::call());
        assert_eq!(decide(&mut s, &prompt(50, 100)), Action::fold());
    }

    #[test]
    fn raising_source_steps_down() {
        let mut s = RaisingSource;
        assert_eq!(decide(&mut s, &prompt(1_000, 100)), Action::raise_to(600));
        assert_eq!(decide(&mut s, &prompt(300, 100)), Action::call());
        assert_eq!(decide(&mut s, &prompt(60, 100)), Action::fold());
    }

    #[test]
    fn random_source_is_reproducible() {
        let p = prompt(5_000, 100);
        let mut a = RandomSource::new(7);
        let mut b = RandomSource::new(7);
        for _ in 0..20 {
            let x = decide(&mut a, &p);
            assert_eq!(x, decide(&mut b, &p));
            if let Some(total) = x.raise_amount {
                assert!((600..=5_000).contains(&total));
            }
        }
    }

    #[test]
    fn canned_source_runs_dry() {
        let mut s = CannedSource::new("canned", ["a"]);
        assert_eq!(s.complete(&prompt(1, 1)).unwrap(), "a");
        assert_eq!(s.remaining(), 0);
        assert!(s.complete(&prompt(1, 1)).is_err());
    }
}
