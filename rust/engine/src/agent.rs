//! The decision-source contract consumed by the betting round.
//!
//! The table never knows whether a seat is played by a person or by a model;
//! it only calls [`Agent::request_action`] and applies the returned
//! [`Action`] under the betting rules.

use std::collections::VecDeque;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::AgentError;
use crate::transcript::Street;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Fold,
    Call,
    Raise,
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ActionKind::Fold => "fold",
            ActionKind::Call => "call",
            ActionKind::Raise => "raise",
        };
        f.write_str(s)
    }
}

/// A seat's decision.
///
/// For raises, `raise_amount` is the requested *total* bet; `None` means
/// "raise by the minimum". The serde form is the JSON object model agents
/// are asked to produce: `{"action": "raise", "raise_amount": 600}`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct Action {
    #[serde(rename = "action")]
    pub kind: ActionKind,
    #[serde(default)]
    pub raise_amount: Option<u32>,
}

impl Action {
    pub fn fold() -> Self {
        Self {
            kind: ActionKind::Fold,
            raise_amount: None,
        }
    }

    pub fn call() -> Self {
        Self {
            kind: ActionKind::Call,
            raise_amount: None,
        }
    }

    pub fn raise_to(total: u32) -> Self {
        Self {
            kind: ActionKind::Raise,
            raise_amount: Some(total),
        }
    }

    pub fn min_raise() -> Self {
        Self {
            kind: ActionKind::Raise,
            raise_amount: None,
        }
    }
}

/// Everything a seat is shown when it is asked to act: the public state of
/// the hand plus its own private cards and stack.
#[derive(Debug, Clone, Copy)]
pub struct ActionRequest<'a> {
    pub seat: usize,
    pub seat_name: &'a str,
    pub hole_cards: &'a [Card],
    pub stack: u32,
    pub street: Street,
    pub community_cards: &'a [Card],
    pub pot: u32,
    /// Chips required to call (the current highest bet on this street).
    pub call_amount: u32,
    /// Minimum increment over `call_amount` for a raise.
    pub min_raise: u32,
    /// Transcript of the hand so far, as this seat is allowed to see it.
    pub history: &'a str,
}

/// Who (or what) makes the decisions for a seat.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum DecisionSource {
    Human,
    Model(String),
}

impl DecisionSource {
    pub fn identifier(&self) -> &str {
        match self {
            DecisionSource::Human => "Human",
            DecisionSource::Model(id) => id,
        }
    }
}

impl fmt::Display for DecisionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

/// A decision source for one seat.
///
/// Calls are synchronous. Implementations may retry internally; an `Err`
/// is terminal for the session.
pub trait Agent {
    fn request_action(&mut self, request: &ActionRequest<'_>) -> Result<Action, AgentError>;

    fn source(&self) -> DecisionSource;
}

/// Replays a fixed list of actions, then fails with
/// [`AgentError::ScriptExhausted`] (or repeats a fallback, if one is set).
#[derive(Debug, Clone)]
pub struct ScriptedAgent {
    name: String,
    actions: VecDeque<Action>,
    fallback: Option<Action>,
}

impl ScriptedAgent {
    pub fn new(name: impl Into<String>, actions: impl IntoIterator<Item = Action>) -> Self {
        Self {
            name: name.into(),
            actions: actions.into_iter().collect(),
            fallback: None,
        }
    }

    /// An agent that answers `action` forever.
    pub fn repeating(name: impl Into<String>, action: Action) -> Self {
        Self::new(name, []).with_fallback(action)
    }

    pub fn with_fallback(mut self, action: Action) -> Self {
        self.fallback = Some(action);
        self
    }
}

impl Agent for ScriptedAgent {
    fn request_action(&mut self, _request: &ActionRequest<'_>) -> Result<Action, AgentError> {
        self.actions
            .pop_front()
            .or(self.fallback)
            .ok_or_else(|| AgentError::ScriptExhausted {
                agent: self.name.clone(),
            })
    }

    fn source(&self) -> DecisionSource {
        DecisionSource::Model(format!("scripted:{}", self.name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_json_shape() {
        let json = serde_json::to_string(&Action::raise_to(600)).unwrap();
        assert_eq!(json, r#"{"action":"raise","raise_amount":600}"#);
        let parsed: Action = serde_json::from_str(r#"{"action":"call"}"#).unwrap();
        assert_eq!(parsed, Action::call());
    }

    #[test]
    fn source_identifiers() {
        assert_eq!(DecisionSource::Human.identifier(), "Human");
        assert_eq!(DecisionSource::Model("gpt-4o".into()).to_string(), "gpt-4o");
    }
}
