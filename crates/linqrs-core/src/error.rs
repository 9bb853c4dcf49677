use thiserror::Error;

/// Canonical result for core and operators.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A strict accessor (`min`, `max`) was called on a sequence with no elements.
    #[error("{op}: sequence contains no elements")]
    EmptySequence { op: &'static str },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Config(e.to_string())
    }
}
