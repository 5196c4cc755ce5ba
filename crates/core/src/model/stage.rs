use serde::Deserialize;
use thiserror::Error;

use crate::model::ids::StageId;
use crate::model::question::{Question, QuestionDraft, QuestionError};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StageError {
    #[error("stage title cannot be empty")]
    EmptyTitle,

    #[error("a stage needs at least one question")]
    NoQuestions,

    #[error("invalid question {index}: {source}")]
    Question {
        index: usize,
        #[source]
        source: QuestionError,
    },
}

//
// ─── STAGE ─────────────────────────────────────────────────────────────────────
//

/// Raw stage shape as it appears in catalog JSON.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StageDraft {
    pub id: StageId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub questions: Vec<QuestionDraft>,
}

impl StageDraft {
    /// Validates the draft into an immutable `Stage`.
    ///
    /// # Errors
    ///
    /// Returns `StageError::EmptyTitle` or `StageError::NoQuestions` for the
    /// stage itself, or `StageError::Question` carrying the index of the
    /// first invalid question.
    pub fn validate(self) -> Result<Stage, StageError> {
        let title = self.title.trim().to_owned();
        if title.is_empty() {
            return Err(StageError::EmptyTitle);
        }

        if self.questions.is_empty() {
            return Err(StageError::NoQuestions);
        }

        let description = self
            .description
            .map(|text| text.trim().to_owned())
            .filter(|text| !text.is_empty());

        let mut questions = Vec::with_capacity(self.questions.len());
        for (index, question) in self.questions.into_iter().enumerate() {
            let question = question
                .validate()
                .map_err(|source| StageError::Question { index, source })?;
            questions.push(question);
        }

        Ok(Stage {
            id: self.id,
            title,
            description,
            questions,
        })
    }
}

/// An ordered group of questions gating access to the next stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stage {
    id: StageId,
    title: String,
    description: Option<String>,
    questions: Vec<Question>,
}

impl Stage {
    #[must_use]
    pub fn id(&self) -> StageId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// Number of questions in this stage. Always at least one.
    #[must_use]
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
