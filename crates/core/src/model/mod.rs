mod catalog;
mod ids;
mod question;
mod stage;

pub use catalog::{Catalog, CatalogDraft, CatalogError};
pub use ids::StageId;
pub use question::{Question, QuestionDraft, QuestionError};
pub use stage::{Stage, StageDraft, StageError};
