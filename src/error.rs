//! Error type shared by the readers, the learners, and the evaluators.
use std::io;

/// Alias of `std::result::Result` with [`Error`].
pub type Result<T> = std::result::Result<T, Error>;


/// Errors reported by this crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Failed to read or write a file.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The input table is malformed.
    #[error("parse error at line {line}: {message}")]
    Parse {
        /// 1-based line number of the offending row.
        line: usize,
        /// What went wrong.
        message: String,
    },

    /// An example holds a value that was never observed in training.
    #[error("unknown value `{value}` for feature `{feature}`")]
    UnknownValue {
        /// Feature name.
        feature: String,
        /// The unseen value.
        value: String,
    },

    /// Two sequences that must agree in length do not.
    #[error("shape mismatch: expected {expected}, got {got}")]
    ShapeMismatch {
        /// Expected length.
        expected: usize,
        /// Actual length.
        got: usize,
    },

    /// A probability could not be computed (division by zero).
    #[error("probability is undefined: {0}")]
    ProbabilityUndefined(String),

    /// An operation needs at least one example.
    #[error("no data: {0}")]
    NoData(String),

    /// A builder received an invalid parameter.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Failed to (de)serialize a model.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}


impl Error {
    pub(crate) fn parse<S: Into<String>>(line: usize, message: S) -> Self {
        Self::Parse { line, message: message.into() }
    }
}
