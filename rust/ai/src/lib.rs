//! # showdown-ai: automated decision sources
//!
//! Turns anything that can answer a prompt with text into a seat agent for
//! `showdown-engine`.
//!
//! ## Core Components
//!
//! - [`TextSource`] - Prompt in, free-form text out (a language model or a script)
//! - [`ModelAgent`] - Prompt, parse, validate and retry on top of a text source
//! - [`policies`] - Scripted sources: calling, folding, raising, random, canned
//! - [`baseline`] - Hand-strength and pot-odds reference policy
//! - [`TimeoutSource`] - Deadline wrapper around any text source
//! - [`create_agent`] / [`create_source`] - Factories keyed by model identifier
//!
//! ## Quick Start
//!
//! ```rust
//! use showdown_ai::create_agent;
//! use showdown_engine::agent::{Agent, DecisionSource};
//!
//! let agent = create_agent("baseline", 42).unwrap();
//! assert_eq!(agent.source(), DecisionSource::Model("baseline".into()));
//! assert!(create_agent("gpt-4o", 42).is_err());
//! ```

pub mod baseline;
pub mod error;
pub mod model;
pub mod parse;
pub mod policies;
pub mod prompt;
pub mod timeout;

pub use error::{FactoryError, ProviderError};
pub use model::{MAX_ATTEMPTS, ModelAgent};
pub use prompt::Prompt;
pub use timeout::TimeoutSource;

/// Model identifiers understood by [`create_agent`].
pub const KNOWN_MODELS: &[&str] = &["baseline", "calling", "folding", "raising", "random"];

/// Something that answers a decision prompt with free-form text.
///
/// The answer is expected to end with a JSON object such as
/// `{"action": "raise", "raise_amount": 600}`; anything before it (a
/// reasoning block, for instance) is ignored by the parser.
pub trait TextSource {
    /// Identifier reported as the seat's decision source.
    fn model_id(&self) -> &str;

    fn complete(&mut self, prompt: &Prompt) -> Result<String, ProviderError>;
}

impl<T: TextSource + ?Sized> TextSource for Box<T> {
    fn model_id(&self) -> &str {
        (**self).model_id()
    }

    fn complete(&mut self, prompt: &Prompt) -> Result<String, ProviderError> {
        (**self).complete(prompt)
    }
}

/// Builds the text source behind a model identifier.
///
/// `seed` only matters for sources with randomness (`random`).
///
/// # Errors
///
/// [`FactoryError::UnknownModel`] for identifiers not in [`KNOWN_MODELS`].
pub fn create_source(
    model_id: &str,
    seed: u64,
) -> Result<Box<dyn TextSource + Send>, FactoryError> {
    let source: Box<dyn TextSource + Send> = match model_id.trim().to_ascii_lowercase().as_str() {
        "baseline" => Box::new(baseline::BaselineSource::new()),
        "calling" => Box::new(policies::CallingSource),
        "folding" => Box::new(policies::FoldingSource),
        "raising" => Box::new(policies::RaisingSource),
        "random" => Box::new(policies::RandomSource::new(seed)),
        _ => return Err(FactoryError::UnknownModel(model_id.to_string())),
    };
    Ok(source)
}

/// Builds the agent for a model identifier. See [`create_source`].
pub fn create_agent(model_id: &str, seed: u64) -> Result<ModelAgent, FactoryError> {
    Ok(ModelAgent::new(create_source(model_id, seed)?))
}
