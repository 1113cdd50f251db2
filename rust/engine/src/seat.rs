use std::fmt;

use crate::agent::{Action, ActionRequest, Agent, DecisionSource};
use crate::betting::TableView;
use crate::cards::Card;
use crate::errors::AgentError;

/// Default starting stack size for each seat in chips
pub const STARTING_STACK: u32 = 10_000;

/// One seat of the roster: a named chip stack, its private cards for the
/// current hand, and the agent that decides for it.
pub struct Seat {
    name: String,
    stack: u32,
    hole: Vec<Card>,
    folded: bool,
    source: DecisionSource,
    agent: Box<dyn Agent>,
}

impl Seat {
    pub fn new(name: impl Into<String>, stack: u32, agent: Box<dyn Agent>) -> Self {
        let source = agent.source();
        Self {
            name: name.into(),
            stack,
            hole: Vec::with_capacity(2),
            folded: false,
            source,
            agent,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn stack(&self) -> u32 {
        self.stack
    }
    pub fn hole_cards(&self) -> &[Card] {
        &self.hole
    }
    pub fn is_folded(&self) -> bool {
        self.folded
    }
    pub fn source(&self) -> &DecisionSource {
        &self.source
    }

    /// Busted seats have no chips left and sit out every remaining hand.
    pub fn is_busted(&self) -> bool {
        self.stack == 0
    }

    /// Still allowed to act this hand: not folded and holding chips.
    pub fn can_act(&self) -> bool {
        !self.folded && self.stack > 0
    }

    pub(crate) fn reset_for_new_hand(&mut self) {
        self.hole.clear();
        self.folded = self.is_busted();
    }

    pub(crate) fn give_cards(&mut self, cards: &[Card]) {
        self.hole.extend_from_slice(cards);
    }

    pub(crate) fn fold(&mut self) {
        self.folded = true;
    }

    pub(crate) fn add_chips(&mut self, amount: u32) {
        self.stack = self.stack.saturating_add(amount);
    }

    /// Moves `amount` out of the stack. Callers check affordability first.
    pub(crate) fn take_chips(&mut self, amount: u32) -> u32 {
        let taken = amount.min(self.stack);
        self.stack -= taken;
        taken
    }

    /// Asks this seat's agent to act, combining the public view of the hand
    /// with the seat's own cards and stack.
    pub(crate) fn request_action(
        &mut self,
        seat: usize,
        view: &TableView<'_>,
    ) -> Result<Action, AgentError> {
        let request = ActionRequest {
            seat,
            seat_name: &self.name,
            hole_cards: &self.hole,
            stack: self.stack,
            street: view.street,
            community_cards: view.community_cards,
            pot: view.pot,
            call_amount: view.call_amount,
            min_raise: view.min_raise,
            history: view.history,
        };
        self.agent.request_action(&request)
    }

    /// Marks a zero-stack seat as permanently out.
    pub(crate) fn mark_busted(&mut self) {
        if self.is_busted() {
            self.folded = true;
        }
    }
}

impl fmt::Debug for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Seat")
            .field("name", &self.name)
            .field("stack", &self.stack)
            .field("hole", &self.hole)
            .field("folded", &self.folded)
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}
