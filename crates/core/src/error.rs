use thiserror::Error;

use crate::model::{CatalogError, QuestionError, StageError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    Stage(#[from] StageError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
