use chrono::{DateTime, Duration, Utc};
use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use quiz_core::Clock;
use quiz_core::model::{Catalog, Question, Stage};

use super::event::QuizEvent;
use super::overview::{StageOverview, StageStatus};
use super::progress::StageProgress;
use crate::error::QuizError;

//
// ─── ANSWER STATE ──────────────────────────────────────────────────────────────
//

/// Answer state of the current question, including the terminal sub-state a
/// stage enters after its last question is passed.
///
/// A tagged variant instead of answered/correct booleans, so the illegal
/// combinations cannot be represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerState {
    Unanswered,
    Correct { selected: usize },
    Incorrect { selected: usize },
    StageComplete,
}

impl AnswerState {
    /// The option index recorded for the current question, if any.
    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        match self {
            AnswerState::Correct { selected } | AnswerState::Incorrect { selected } => {
                Some(*selected)
            }
            AnswerState::Unanswered | AnswerState::StageComplete => None,
        }
    }

    /// Whether an answer is pending for the current question.
    #[must_use]
    pub fn is_answered(&self) -> bool {
        matches!(
            self,
            AnswerState::Correct { .. } | AnswerState::Incorrect { .. }
        )
    }
}

/// Which top-level view-model is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    StageSelect,
    Stage,
}

//
// ─── ENGINE ────────────────────────────────────────────────────────────────────
//

/// Deterministic progression state machine over a static stage catalog.
///
/// The engine is the single mutable object of a session. Each transition is
/// triggered by one discrete input event and runs to completion: it either
/// applies and returns the emitted `QuizEvent`, or rejects with a
/// `QuizError` and leaves state untouched. The catalog is read-only and its
/// integrity (validated questions, in-range correct indices) is guaranteed
/// by `CatalogDraft::validate` before an engine exists.
pub struct QuizEngine {
    catalog: Arc<Catalog>,
    clock: Clock,
    screen: Screen,
    stage: usize,
    question: usize,
    score: u32,
    answer: AnswerState,
    completed: BTreeSet<usize>,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl QuizEngine {
    /// Creates an engine positioned on stage 0, question 0, with nothing
    /// completed, showing the stage-selection view.
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, clock: Clock) -> Self {
        let started_at = clock.now();
        Self {
            catalog,
            clock,
            screen: Screen::StageSelect,
            stage: 0,
            question: 0,
            score: 0,
            answer: AnswerState::Unanswered,
            completed: BTreeSet::new(),
            started_at,
            completed_at: None,
        }
    }

    //
    // ─── ACCESSORS ─────────────────────────────────────────────────────────
    //

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    #[must_use]
    pub fn stage_index(&self) -> usize {
        self.stage
    }

    #[must_use]
    pub fn current_stage(&self) -> &Stage {
        // `stage` is kept in bounds by every transition.
        &self.catalog.stages()[self.stage]
    }

    /// The question being shown, or `None` once the stage is complete.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.current_stage().question(self.question)
    }

    /// Index of the current question; equals the stage's question count
    /// exactly when the stage is complete.
    #[must_use]
    pub fn question_index(&self) -> usize {
        self.question
    }

    /// Committed correct-answer count for the current stage attempt.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn answer(&self) -> AnswerState {
        self.answer
    }

    #[must_use]
    pub fn completed_stages(&self) -> &BTreeSet<usize> {
        &self.completed
    }

    #[must_use]
    pub fn is_stage_complete(&self) -> bool {
        self.answer == AnswerState::StageComplete
    }

    #[must_use]
    pub fn has_next_stage(&self) -> bool {
        self.stage + 1 < self.catalog.stage_count()
    }

    /// When the current stage attempt started.
    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Time spent on the current stage attempt, once it is complete.
    #[must_use]
    pub fn elapsed(&self) -> Option<Duration> {
        self.completed_at.map(|at| at - self.started_at)
    }

    /// Progress through the current stage for the progress bar.
    #[must_use]
    pub fn progress(&self) -> StageProgress {
        let total = self.current_stage().question_count();
        StageProgress {
            position: (self.question + 1).min(total),
            total,
            is_complete: self.is_stage_complete(),
        }
    }

    /// Selectability of the given stage index.
    ///
    /// A stage is unlocked when it is first, or its predecessor has been
    /// completed; completed stages stay selectable for replay.
    #[must_use]
    pub fn stage_status(&self, index: usize) -> StageStatus {
        if self.completed.contains(&index) {
            StageStatus::Completed
        } else if index == 0 || self.completed.contains(&(index - 1)) {
            StageStatus::Unlocked
        } else {
            StageStatus::Locked
        }
    }

    /// Per-stage rows for the stage-selection view.
    #[must_use]
    pub fn stage_overviews(&self) -> Vec<StageOverview> {
        self.catalog
            .stages()
            .iter()
            .enumerate()
            .map(|(index, stage)| StageOverview {
                index,
                id: stage.id(),
                title: stage.title().to_owned(),
                description: stage.description().map(str::to_owned),
                question_count: stage.question_count(),
                status: self.stage_status(index),
                is_current: index == self.stage,
            })
            .collect()
    }

    //
    // ─── TRANSITIONS ───────────────────────────────────────────────────────
    //

    /// Enters the given stage fresh and switches to the quiz view.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::UnknownStage` for an index outside the catalog
    /// (checked first: once the final stage is completed the unlock rule
    /// alone would admit the one-past-the-end index), or
    /// `QuizError::LockedStage` when the predecessor stage has not been
    /// completed. State is unchanged on error.
    pub fn select_stage(&mut self, index: usize) -> Result<QuizEvent, QuizError> {
        if index >= self.catalog.stage_count() {
            return Err(QuizError::UnknownStage { requested: index });
        }
        if index > 0 && !self.completed.contains(&(index - 1)) {
            return Err(QuizError::LockedStage {
                requested: index,
                required: index - 1,
            });
        }

        self.enter_stage(index);
        self.screen = Screen::Stage;
        Ok(QuizEvent::StageEntered { stage: index })
    }

    /// Records an answer for the current question and grades it.
    ///
    /// Never an error: a submission while an answer is already pending, or
    /// while the stage is complete, is a side-effect-free no-op reported as
    /// `QuizEvent::AnswerIgnored`, so duplicate input events are tolerated.
    /// An out-of-range option index is graded as incorrect.
    pub fn submit_answer(&mut self, option: usize) -> QuizEvent {
        if self.answer.is_answered() || self.is_stage_complete() {
            return QuizEvent::AnswerIgnored;
        }
        let Some(question) = self.current_question() else {
            return QuizEvent::AnswerIgnored;
        };

        let correct = question.is_correct(option);
        let explanation = question.explanation().map(str::to_owned);

        if correct {
            self.answer = AnswerState::Correct { selected: option };
            self.score += 1;
            tracing::debug!(
                stage = self.stage,
                question = self.question,
                option,
                "answer correct"
            );
            QuizEvent::AnswerCorrect { explanation }
        } else {
            self.answer = AnswerState::Incorrect { selected: option };
            tracing::debug!(
                stage = self.stage,
                question = self.question,
                option,
                "answer incorrect"
            );
            QuizEvent::AnswerIncorrect { explanation }
        }
    }

    /// Moves past a correctly answered question.
    ///
    /// On the last question this completes the stage: the question index
    /// becomes the one-past-the-end sentinel and the stage index joins the
    /// completed set.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::MustAnswerCorrectly` unless the pending answer is
    /// correct. This includes the already-complete stage, so a duplicate
    /// call in the terminal state cannot re-insert into the completed set.
    pub fn advance(&mut self) -> Result<QuizEvent, QuizError> {
        if !matches!(self.answer, AnswerState::Correct { .. }) {
            return Err(QuizError::MustAnswerCorrectly);
        }

        let total = self.current_stage().question_count();
        if self.question + 1 < total {
            self.question += 1;
            self.answer = AnswerState::Unanswered;
            return Ok(QuizEvent::QuestionAdvanced {
                question: self.question,
            });
        }

        self.question = total;
        self.answer = AnswerState::StageComplete;
        self.completed.insert(self.stage);
        self.completed_at = Some(self.clock.now());
        tracing::info!(stage = self.stage, score = self.score, "stage completed");
        Ok(QuizEvent::StageCompleted {
            stage: self.stage,
            title: self.current_stage().title().to_owned(),
            score: self.score,
            total: u32::try_from(total).unwrap_or(u32::MAX),
        })
    }

    /// Clears an incorrect answer for another attempt.
    ///
    /// Question index and score are untouched; the only penalty for a wrong
    /// answer is having to answer correctly before moving on.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NothingToRetry` unless the pending answer is
    /// incorrect.
    pub fn retry(&mut self) -> Result<QuizEvent, QuizError> {
        match self.answer {
            AnswerState::Incorrect { .. } => {
                self.answer = AnswerState::Unanswered;
                Ok(QuizEvent::QuestionReset)
            }
            _ => Err(QuizError::NothingToRetry),
        }
    }

    /// Moves from a completed stage into the next one.
    ///
    /// No unlock check is needed: the current stage was just completed, so
    /// the next one is unlocked by definition.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::StageNotFinished` outside the terminal state and
    /// `QuizError::NoNextStage` on the final stage.
    pub fn advance_stage(&mut self) -> Result<QuizEvent, QuizError> {
        if !self.is_stage_complete() {
            return Err(QuizError::StageNotFinished);
        }
        let next = self.stage + 1;
        if next >= self.catalog.stage_count() {
            return Err(QuizError::NoNextStage);
        }

        self.enter_stage(next);
        Ok(QuizEvent::StageEntered { stage: next })
    }

    /// Returns control to the stage-selection view.
    ///
    /// Unconditional; completed stages and the current attempt are left
    /// untouched (re-entering a stage resets them via `select_stage`).
    pub fn exit_to_stage_select(&mut self) -> QuizEvent {
        self.screen = Screen::StageSelect;
        QuizEvent::LeftStage
    }

    fn enter_stage(&mut self, index: usize) {
        self.stage = index;
        self.question = 0;
        self.score = 0;
        self.answer = AnswerState::Unanswered;
        self.started_at = self.clock.now();
        self.completed_at = None;
        tracing::debug!(stage = index, "stage entered");
    }
}

impl fmt::Debug for QuizEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizEngine")
            .field("screen", &self.screen)
            .field("stage", &self.stage)
            .field("question", &self.question)
            .field("score", &self.score)
            .field("answer", &self.answer)
            .field("completed", &self.completed)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
