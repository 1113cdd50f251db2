//! Parsing of interactive seat input.
//!
//! A human answers a three-item menu (`1. fold`, `2. call`, `3. raise`) and,
//! for a raise, a total amount. Both parsers return a message suitable for
//! reprompting instead of failing.

use showdown_engine::agent::ActionKind;
use showdown_engine::errors::EngineError;
use showdown_engine::rules::validate_raise_amount;

/// Outcome of reading one menu answer.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    /// A menu item, plus the amount when typed inline (`raise 800`).
    Choice(ActionKind, Option<u32>),
    Invalid(String),
}

/// Parses a menu answer (case-insensitive).
///
/// - `1`, `f`, `fold` → fold
/// - `2`, `c`, `call` → call
/// - `3`, `r`, `raise`, optionally followed by an amount → raise
///
/// # Example
///
/// ```rust
/// # use showdown_cli::validation::{parse_menu_choice, ParseResult};
/// use showdown_engine::agent::ActionKind;
///
/// assert_eq!(parse_menu_choice("2"), ParseResult::Choice(ActionKind::Call, None));
/// assert_eq!(
///     parse_menu_choice("Raise 900"),
///     ParseResult::Choice(ActionKind::Raise, Some(900))
/// );
/// assert!(matches!(parse_menu_choice("check"), ParseResult::Invalid(_)));
/// ```
pub fn parse_menu_choice(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    let parts: Vec<&str> = input.split_whitespace().collect();

    let Some(first) = parts.first() else {
        return ParseResult::Invalid("Empty input".to_string());
    };

    let kind = match *first {
        "1" | "f" | "fold" => ActionKind::Fold,
        "2" | "c" | "call" => ActionKind::Call,
        "3" | "r" | "raise" => ActionKind::Raise,
        other => {
            return ParseResult::Invalid(format!(
                "Unrecognized choice '{}'. Enter 1 (fold), 2 (call) or 3 (raise)",
                other
            ));
        }
    };

    match (kind, parts.get(1)) {
        (_, None) => ParseResult::Choice(kind, None),
        (ActionKind::Raise, Some(amount)) => match amount.parse::<u32>() {
            Ok(amount) => ParseResult::Choice(kind, Some(amount)),
            Err(_) => ParseResult::Invalid(format!("Invalid raise amount '{}'", amount)),
        },
        (_, Some(_)) => ParseResult::Invalid(format!("'{}' takes no amount", first)),
    }
}

/// Parses and bounds-checks a raise total: at least `min_raise`, at most
/// `stack`.
///
/// ```rust
/// # use showdown_cli::validation::parse_raise_amount;
/// assert_eq!(parse_raise_amount("600", 500, 1_000), Ok(600));
/// assert!(parse_raise_amount("400", 500, 1_000).is_err());
/// assert!(parse_raise_amount("lots", 500, 1_000).is_err());
/// ```
pub fn parse_raise_amount(input: &str, min_raise: u32, stack: u32) -> Result<u32, String> {
    let amount: u32 = input
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", input.trim()))?;
    check_raise_amount(amount, min_raise, stack)
}

/// Bounds check for an amount that is already numeric.
pub fn check_raise_amount(amount: u32, min_raise: u32, stack: u32) -> Result<u32, String> {
    validate_raise_amount(amount, min_raise, stack).map_err(|e| match e {
        EngineError::InvalidRaise { minimum, .. } => {
            format!("Raise must be at least {}", minimum)
        }
        EngineError::RaiseExceedsStack { stack, .. } => {
            format!("Raise cannot exceed your stack of {}", stack)
        }
        other => other.to_string(),
    })
}
