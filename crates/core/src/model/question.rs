use serde::Deserialize;
use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question prompt cannot be empty")]
    EmptyPrompt,

    #[error("a question needs at least two options, got {len}")]
    NotEnoughOptions { len: usize },

    #[error("option {index} cannot be empty")]
    EmptyOption { index: usize },

    #[error("correct option index {index} is out of range for {len} options")]
    CorrectOptionOutOfRange { index: usize, len: usize },
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// Raw question shape as it appears in catalog JSON.
///
/// `correctAnswer` is accepted as an alias for `correct_option` to keep
/// catalogs exported from the older web quiz loadable as-is.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QuestionDraft {
    pub prompt: String,
    pub options: Vec<String>,
    #[serde(alias = "correctAnswer")]
    pub correct_option: usize,
    #[serde(default)]
    pub explanation: Option<String>,
}

impl QuestionDraft {
    /// Validates the draft into an immutable `Question`.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if the prompt or any option is empty, fewer
    /// than two options are given, or the correct-option index does not
    /// point into the options list.
    pub fn validate(self) -> Result<Question, QuestionError> {
        let prompt = self.prompt.trim().to_owned();
        if prompt.is_empty() {
            return Err(QuestionError::EmptyPrompt);
        }

        if self.options.len() < 2 {
            return Err(QuestionError::NotEnoughOptions {
                len: self.options.len(),
            });
        }

        let mut options = Vec::with_capacity(self.options.len());
        for (index, option) in self.options.into_iter().enumerate() {
            let option = option.trim().to_owned();
            if option.is_empty() {
                return Err(QuestionError::EmptyOption { index });
            }
            options.push(option);
        }

        if self.correct_option >= options.len() {
            return Err(QuestionError::CorrectOptionOutOfRange {
                index: self.correct_option,
                len: options.len(),
            });
        }

        let explanation = self
            .explanation
            .map(|text| text.trim().to_owned())
            .filter(|text| !text.is_empty());

        Ok(Question {
            prompt,
            options,
            correct_option: self.correct_option,
            explanation,
        })
    }
}

/// A single multiple-choice question.
///
/// Immutable once validated; the correct-option index is guaranteed to be a
/// valid index into `options`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    prompt: String,
    options: Vec<String>,
    correct_option: usize,
    explanation: Option<String>,
}

impl Question {
    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn option(&self, index: usize) -> Option<&str> {
        self.options.get(index).map(String::as_str)
    }

    #[must_use]
    pub fn correct_option(&self) -> usize {
        self.correct_option
    }

    /// Whether the given option index is the correct one.
    ///
    /// An out-of-range index is simply not correct.
    #[must_use]
    pub fn is_correct(&self, option: usize) -> bool {
        option == self.correct_option
    }

    #[must_use]
    pub fn explanation(&self) -> Option<&str> {
        self.explanation.as_deref()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
