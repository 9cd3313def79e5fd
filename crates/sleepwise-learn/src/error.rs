//! Encoding and training errors

use thiserror::Error;

/// A value outside the vocabulary fitted on the training table.
///
/// The console only offers fixed menus, so reaching this is a bug in the
/// caller rather than bad user input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    #[error("unknown {column} category: {value:?}")]
    UnknownCategory { column: String, value: String },

    #[error("unknown {column} code: {code}")]
    UnknownCode { column: String, code: usize },
}

#[derive(Debug, Error)]
pub enum LearnError {
    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error("cannot train on an empty dataset")]
    EmptyDataset,

    #[error("{features} feature rows but {labels} labels")]
    LengthMismatch { features: usize, labels: usize },

    #[error("expected {expected} features, got {actual}")]
    FeatureCount { expected: usize, actual: usize },

    #[error("classifier has not been fitted")]
    NotFitted,

    #[error("invalid training configuration: {0}")]
    InvalidConfig(String),
}
