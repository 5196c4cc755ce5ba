use std::collections::BTreeSet;

use serde::Deserialize;
use thiserror::Error;

use crate::model::ids::StageId;
use crate::model::stage::{Stage, StageDraft, StageError};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("a catalog needs at least one stage")]
    NoStages,

    #[error("duplicate stage id {id}")]
    DuplicateStageId { id: StageId },

    #[error("invalid stage {index}: {source}")]
    Stage {
        index: usize,
        #[source]
        source: StageError,
    },
}

//
// ─── CATALOG ───────────────────────────────────────────────────────────────────
//

/// Raw catalog shape as it appears in catalog JSON.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatalogDraft {
    pub stages: Vec<StageDraft>,
}

impl CatalogDraft {
    /// Validates the draft into an immutable `Catalog`.
    ///
    /// The resulting catalog is the integrity precondition the progression
    /// engine relies on: non-empty, every stage valid, stage ids unique.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NoStages`, `CatalogError::DuplicateStageId`,
    /// or `CatalogError::Stage` carrying the index of the first invalid
    /// stage.
    pub fn validate(self) -> Result<Catalog, CatalogError> {
        if self.stages.is_empty() {
            return Err(CatalogError::NoStages);
        }

        let mut seen = BTreeSet::new();
        let mut stages = Vec::with_capacity(self.stages.len());
        for (index, stage) in self.stages.into_iter().enumerate() {
            let stage = stage
                .validate()
                .map_err(|source| CatalogError::Stage { index, source })?;
            if !seen.insert(stage.id()) {
                return Err(CatalogError::DuplicateStageId { id: stage.id() });
            }
            stages.push(stage);
        }

        Ok(Catalog { stages })
    }
}

/// The read-only dataset the quiz runs over.
///
/// Supplied once at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    stages: Vec<Stage>,
}

impl Catalog {
    #[must_use]
    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    #[must_use]
    pub fn stage(&self, index: usize) -> Option<&Stage> {
        self.stages.get(index)
    }

    /// Number of stages. Always at least one.
    #[must_use]
    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
