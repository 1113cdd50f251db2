use std::fmt;

use tracing::{debug, warn};

use showdown_engine::agent::{Action, ActionRequest, Agent, DecisionSource};
use showdown_engine::errors::AgentError;

use crate::TextSource;
use crate::parse::parse_action;
use crate::prompt::Prompt;

/// Attempts per decision before the agent gives up.
pub const MAX_ATTEMPTS: u32 = 5;

/// An [`Agent`] backed by a [`TextSource`].
///
/// Every decision renders a prompt, asks the source for text, and pulls the
/// JSON action out of it. Unusable answers (no JSON, bad JSON, wrong schema,
/// provider failure) are retried up to `max_attempts` times; after that the
/// agent fails with [`AgentError::TooManyInvalidResponses`].
pub struct ModelAgent {
    source: Box<dyn TextSource>,
    max_attempts: u32,
}

impl ModelAgent {
    pub fn new(source: Box<dyn TextSource>) -> Self {
        Self {
            source,
            max_attempts: MAX_ATTEMPTS,
        }
    }

    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts.max(1);
        self
    }

    pub fn model_id(&self) -> &str {
        self.source.model_id()
    }
}

impl fmt::Debug for ModelAgent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelAgent")
            .field("model_id", &self.model_id())
            .field("max_attempts", &self.max_attempts)
            .finish()
    }
}

impl Agent for ModelAgent {
    fn request_action(&mut self, request: &ActionRequest<'_>) -> Result<Action, AgentError> {
        let prompt = Prompt::for_request(request);
        let model = self.source.model_id().to_string();

        for attempt in 1..=self.max_attempts {
            let raw = match self.source.complete(&prompt) {
                Ok(text) => text,
                Err(err) => {
                    warn!(seat = request.seat_name, %model, attempt, error = %err, "text source failed");
                    continue;
                }
            };
            debug!(seat = request.seat_name, %model, attempt, raw = raw.trim(), "raw model output");

            match parse_action(raw.trim()) {
                Ok(action) => return Ok(action),
                Err(err) => {
                    warn!(seat = request.seat_name, %model, attempt, error = %err, "invalid model response");
                }
            }
        }

        Err(AgentError::TooManyInvalidResponses {
            agent: request.seat_name.to_string(),
            attempts: self.max_attempts,
        })
    }

    fn source(&self) -> DecisionSource {
        DecisionSource::Model(self.source.model_id().to_string())
    }
}
