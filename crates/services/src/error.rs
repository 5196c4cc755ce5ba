//! Shared error types for the services crate.

use thiserror::Error;

/// Rejected progression transitions.
///
/// Every variant is a user-recoverable policy violation: the requested
/// transition is refused, state is left untouched, nothing is fatal.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("stage {requested} is locked; finish stage {required} first")]
    LockedStage { requested: usize, required: usize },

    #[error("stage {requested} does not exist")]
    UnknownStage { requested: usize },

    #[error("answer the current question correctly before moving on")]
    MustAnswerCorrectly,

    #[error("there is no incorrect answer to retry")]
    NothingToRetry,

    #[error("the current stage is not finished yet")]
    StageNotFinished,

    #[error("there is no stage after this one")]
    NoNextStage,
}

/// Errors emitted while loading a catalog.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogLoadError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Invalid(#[from] quiz_core::model::CatalogError),
}
