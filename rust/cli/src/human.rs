//! Interactive seat driven by a person at the terminal.

use std::io::{BufRead, Write};

use showdown_engine::agent::{Action, ActionKind, ActionRequest, Agent, DecisionSource};
use showdown_engine::errors::AgentError;

use crate::formatters::format_board;
use crate::io_utils::read_stdin_line;
use crate::validation::{ParseResult, check_raise_amount, parse_menu_choice, parse_raise_amount};

/// Shows the decision state on `output` and reads the answer from `input`,
/// reprompting until it is usable. End of input fails the decision with
/// [`AgentError::InputClosed`].
pub struct HumanAgent<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanAgent<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn show_state(&mut self, request: &ActionRequest<'_>) -> std::io::Result<()> {
        let out = &mut self.output;
        writeln!(out, "\n=== Your Turn ({}) ===", request.seat_name)?;
        writeln!(out, "Street: {}", request.street)?;
        writeln!(out, "Your hole cards: {}", format_board(request.hole_cards))?;
        writeln!(out, "Community cards: {}", format_board(request.community_cards))?;
        writeln!(out, "Current pot: {}", request.pot)?;
        writeln!(out, "Amount to call: {}", request.call_amount)?;
        writeln!(out, "Minimum raise: {}", request.min_raise)?;
        writeln!(out, "Your stack: {}", request.stack)?;
        writeln!(out, "\nGame history:")?;
        writeln!(out, "{}", request.history.trim_end())?;
        Ok(())
    }

    fn read_line(&mut self, prompt: &str, seat_name: &str) -> Result<String, AgentError> {
        write!(self.output, "{}", prompt).map_err(io_error)?;
        self.output.flush().map_err(io_error)?;
        read_stdin_line(&mut self.input).ok_or_else(|| AgentError::InputClosed {
            agent: seat_name.to_string(),
        })
    }

    fn say(&mut self, msg: &str) -> Result<(), AgentError> {
        writeln!(self.output, "{}", msg).map_err(io_error)
    }

    fn read_raise(&mut self, request: &ActionRequest<'_>) -> Result<u32, AgentError> {
        loop {
            let prompt = format!("Enter raise amount (minimum {}): ", request.min_raise);
            let line = self.read_line(&prompt, request.seat_name)?;
            match parse_raise_amount(&line, request.min_raise, request.stack) {
                Ok(amount) => return Ok(amount),
                Err(msg) => self.say(&msg)?,
            }
        }
    }
}

fn io_error(e: std::io::Error) -> AgentError {
    AgentError::Io(e.to_string())
}

impl<R: BufRead, W: Write> Agent for HumanAgent<R, W> {
    fn request_action(&mut self, request: &ActionRequest<'_>) -> Result<Action, AgentError> {
        self.show_state(request).map_err(io_error)?;

        loop {
            self.say("\nAvailable actions:\n1. fold\n2. call\n3. raise")?;
            let line = self.read_line("\nEnter your action (1/2/3): ", request.seat_name)?;
            match parse_menu_choice(&line) {
                ParseResult::Choice(ActionKind::Fold, _) => return Ok(Action::fold()),
                ParseResult::Choice(ActionKind::Call, _) => return Ok(Action::call()),
                ParseResult::Choice(ActionKind::Raise, Some(amount)) => {
                    match check_raise_amount(amount, request.min_raise, request.stack) {
                        Ok(amount) => return Ok(Action::raise_to(amount)),
                        Err(msg) => self.say(&msg)?,
                    }
                }
                ParseResult::Choice(ActionKind::Raise, None) => {
                    return Ok(Action::raise_to(self.read_raise(request)?));
                }
                ParseResult::Invalid(msg) => self.say(&format!("{}. Please try again.", msg))?,
            }
        }
    }

    fn source(&self) -> DecisionSource {
        DecisionSource::Human
    }
}
