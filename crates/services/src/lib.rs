#![forbid(unsafe_code)]

pub mod catalog_loader;
pub mod error;
pub mod quiz;

pub use quiz_core::Clock;

pub use catalog_loader::{load_catalog_from_path, load_catalog_from_str};
pub use error::{CatalogLoadError, QuizError};
pub use quiz::{
    AnswerState, QuizEngine, QuizEvent, Screen, StageOverview, StageProgress, StageStatus,
};
