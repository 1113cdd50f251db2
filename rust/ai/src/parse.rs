//! Extraction and validation of the JSON decision embedded in free-form
//! model output.

use serde::Deserialize;
use thiserror::Error;

use showdown_engine::agent::{Action, ActionKind};

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("no JSON object found in output")]
    NoJsonFound,
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("response does not match the action schema: {0}")]
    Schema(String),
}

/// Wire shape before validation: field types are loose so that schema
/// violations get a readable message instead of a serde error.
#[derive(Debug, Deserialize)]
struct RawAction {
    action: String,
    #[serde(default)]
    raise_amount: Option<i64>,
}

/// Returns the text from the first `{` to the last `}`, inclusive.
///
/// ```
/// use showdown_ai::parse::extract_json_snippet;
///
/// let raw = "<poker_reasoning>fold equity</poker_reasoning>\n{\"action\": \"call\"}";
/// assert_eq!(extract_json_snippet(raw).unwrap(), "{\"action\": \"call\"}");
/// assert!(extract_json_snippet("I fold.").is_err());
/// ```
pub fn extract_json_snippet(text: &str) -> Result<&str, ParseError> {
    let start = text.find('{').ok_or(ParseError::NoJsonFound)?;
    let end = text.rfind('}').ok_or(ParseError::NoJsonFound)?;
    if end < start {
        return Err(ParseError::NoJsonFound);
    }
    Ok(&text[start..=end])
}

/// Parses a raw model answer into an [`Action`].
///
/// `action` must be one of `fold`, `call`, `raise` (any case);
/// `raise_amount` must be a non-negative integer, `null`, or absent.
pub fn parse_action(raw: &str) -> Result<Action, ParseError> {
    let snippet = extract_json_snippet(raw)?;
    let parsed: RawAction = serde_json::from_str(snippet)?;

    let kind = match parsed.action.trim().to_ascii_lowercase().as_str() {
        "fold" => ActionKind::Fold,
        "call" => ActionKind::Call,
        "raise" => ActionKind::Raise,
        other => {
            return Err(ParseError::Schema(format!(
                "action must be fold, call or raise, got {:?}",
                other
            )));
        }
    };

    let raise_amount = match parsed.raise_amount {
        None => None,
        Some(n) => Some(u32::try_from(n).map_err(|_| {
            ParseError::Schema(format!("raise_amount out of range: {}", n))
        })?),
    };

    Ok(Action { kind, raise_amount })
}
