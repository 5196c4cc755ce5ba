/// Discrete outcome events emitted by engine transitions.
///
/// Transitions return these instead of performing side effects, so the
/// engine can be exercised without any UI harness. The presentation layer
/// decides which events become transient notices and how they are worded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizEvent {
    /// A stage was entered fresh (via selection or after completing the
    /// previous one).
    StageEntered { stage: usize },
    /// The submitted option matched the question's correct option.
    AnswerCorrect { explanation: Option<String> },
    /// The submitted option did not match the question's correct option.
    AnswerIncorrect { explanation: Option<String> },
    /// A duplicate submission arrived while an answer was already pending;
    /// nothing changed.
    AnswerIgnored,
    /// Moved on to the next question within the stage.
    QuestionAdvanced { question: usize },
    /// An incorrect answer was cleared for another attempt.
    QuestionReset,
    /// The last question of the stage was passed.
    StageCompleted {
        stage: usize,
        title: String,
        score: u32,
        total: u32,
    },
    /// Control returned to the stage-selection view.
    LeftStage,
}
