use std::time::Duration;

use thiserror::Error;

/// Failure of a single [`TextSource`](crate::TextSource) call.
///
/// The model agent treats these like an unparseable answer: the attempt is
/// counted and retried.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("no response within {0:?}")]
    Timeout(Duration),
    #[error("text source unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FactoryError {
    #[error("unknown model {0:?} (known: {known})", known = crate::KNOWN_MODELS.join(", "))]
    UnknownModel(String),
}
