//! The natural-language request sent to a text source.

use showdown_engine::agent::ActionRequest;
use showdown_engine::cards::{Card, format_cards};
use showdown_engine::transcript::Street;

/// Owned copy of the state a seat is shown when asked to act.
///
/// Scripted sources read this directly; a language model only sees the
/// rendered [`Prompt::text`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub seat_name: String,
    pub stack: u32,
    pub hole_cards: Vec<Card>,
    pub street: Street,
    pub community_cards: Vec<Card>,
    pub pot: u32,
    pub call_amount: u32,
    pub min_raise: u32,
}

impl GameSnapshot {
    pub fn from_request(request: &ActionRequest<'_>) -> Self {
        Self {
            seat_name: request.seat_name.to_string(),
            stack: request.stack,
            hole_cards: request.hole_cards.to_vec(),
            street: request.street,
            community_cards: request.community_cards.to_vec(),
            pot: request.pot,
            call_amount: request.call_amount,
            min_raise: request.min_raise,
        }
    }

    /// Smallest total a raise may name right now.
    pub fn minimum_raise_total(&self) -> u32 {
        self.call_amount.saturating_add(self.min_raise)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub text: String,
    pub state: GameSnapshot,
}

impl Prompt {
    pub fn for_request(request: &ActionRequest<'_>) -> Self {
        Self {
            text: build_action_prompt(request),
            state: GameSnapshot::from_request(request),
        }
    }
}

/// Renders the decision request for a language model.
///
/// The answer format it asks for (a `<poker_reasoning>` block followed by a
/// JSON object) is what [`crate::parse::parse_action`] reads back.
pub fn build_action_prompt(request: &ActionRequest<'_>) -> String {
    format!(
        "You are a strong Texas Hold'em player and you are playing to win.\n\
         \n\
         Hand so far:\n\
         {history}\n\
         \n\
         You are {name} with {stack} chips.\n\
         Hole cards: {hole}\n\
         Community cards: {board}\n\
         Street: {street}\n\
         Pot: {pot}\n\
         Amount to call: {call}\n\
         Minimum raise over the amount to call: {min_raise}\n\
         \n\
         Rules of this table:\n\
         - Calling costs the full amount to call. If it is 0, \"call\" means check.\n\
         - A raise names the total bet; anything below {min_total} is raised to {min_total}.\n\
         - You cannot bet more than your stack. A call or raise you cannot cover is a fold.\n\
         - Only \"fold\", \"call\" and \"raise\" are valid actions. Never answer \"check\".\n\
         \n\
         Think it through first inside <poker_reasoning></poker_reasoning> tags:\n\
         hand strength, pot odds, position, and what the history says about the others.\n\
         \n\
         Then answer with one JSON object with two keys:\n\
         - \"action\": \"fold\", \"call\" or \"raise\"\n\
         - \"raise_amount\": an integer total when raising, otherwise null\n\
         \n\
         For example:\n\
         {{\n  \"action\": \"call\",\n  \"raise_amount\": null\n}}\n",
        history = request.history,
        name = request.seat_name,
        stack = request.stack,
        hole = format_cards(request.hole_cards),
        board = format_cards(request.community_cards),
        street = request.street,
        pot = request.pot,
        call = request.call_amount,
        min_raise = request.min_raise,
        min_total = request.call_amount.saturating_add(request.min_raise),
    )
}
