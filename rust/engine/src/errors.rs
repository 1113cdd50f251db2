use thiserror::Error;

/// Failures raised by the decision source behind a seat.
///
/// Any of these reaching the table aborts the whole session: there is no
/// well-defined default action to substitute.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AgentError {
    #[error("{agent} gave too many invalid responses ({attempts} attempts)")]
    TooManyInvalidResponses { agent: String, attempts: u32 },
    #[error("input closed while waiting for {agent}")]
    InputClosed { agent: String },
    #[error("I/O error: {0}")]
    Io(String),
    #[error("decision provider failed: {0}")]
    Provider(String),
    #[error("action script for {agent} is exhausted")]
    ScriptExhausted { agent: String },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("cannot deal {requested} cards, only {remaining} remain")]
    InsufficientCards { requested: usize, remaining: usize },
    #[error("hand evaluation needs {expected} cards, got {actual}")]
    InvalidHandSize { expected: usize, actual: usize },
    #[error("Invalid raise amount: {amount}, minimum: {minimum}")]
    InvalidRaise { amount: u32, minimum: u32 },
    #[error("raise of {amount} exceeds stack of {stack}")]
    RaiseExceedsStack { amount: u32, stack: u32 },
    #[error("a session needs at least 2 seats, got {0}")]
    NotEnoughSeats(usize),
    #[error("seat name {0:?} is used twice")]
    DuplicateSeatName(String),
    #[error(transparent)]
    Agent(#[from] AgentError),
}
