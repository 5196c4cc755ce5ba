use services::{AnswerState, QuizEngine};

use crate::vm::time_fmt::format_elapsed;

//
// ─── OPTION TONES ──────────────────────────────────────────────────────────────
//

/// Visual treatment of one option button.
///
/// Before grading every option is `Neutral`; after grading the correct
/// option is highlighted, a wrong pick is called out, and the rest fade.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionTone {
    Neutral,
    Correct,
    WrongPick,
    Dimmed,
}

impl OptionTone {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            OptionTone::Neutral => "option",
            OptionTone::Correct => "option option--correct",
            OptionTone::WrongPick => "option option--wrong",
            OptionTone::Dimmed => "option option--dimmed",
        }
    }
}

fn option_tone(answer: AnswerState, correct_option: usize, index: usize) -> OptionTone {
    match answer {
        AnswerState::Unanswered => OptionTone::Neutral,
        AnswerState::Correct { .. } | AnswerState::Incorrect { .. } => {
            if index == correct_option {
                OptionTone::Correct
            } else if answer.selected() == Some(index) {
                OptionTone::WrongPick
            } else {
                OptionTone::Dimmed
            }
        }
        AnswerState::StageComplete => OptionTone::Dimmed,
    }
}

fn option_label(index: usize) -> String {
    match u8::try_from(index) {
        Ok(i) if i < 26 => char::from(b'A' + i).to_string(),
        _ => (index + 1).to_string(),
    }
}

//
// ─── VIEW MODELS ───────────────────────────────────────────────────────────────
//

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizHeaderVm {
    pub stage_title: String,
    pub position_label: String,
    /// Committed score only; an answered-but-not-advanced question does not
    /// show up here until `advance` commits it into the next position.
    pub score_label: String,
    pub percent: u8,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub index: usize,
    pub label: String,
    pub text: String,
    pub tone: OptionTone,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub prompt: String,
    pub options: Vec<OptionVm>,
    pub explanation: Option<String>,
    pub show_explanation: bool,
    pub advance_label: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompletionVm {
    pub title: String,
    pub score_label: String,
    pub percent_label: String,
    pub elapsed_label: Option<String>,
    pub has_next_stage: bool,
}

//
// ─── MAPPING ───────────────────────────────────────────────────────────────────
//

#[must_use]
pub fn map_header(engine: &QuizEngine) -> QuizHeaderVm {
    let progress = engine.progress();
    QuizHeaderVm {
        stage_title: engine.current_stage().title().to_owned(),
        position_label: format!("Question {} of {}", progress.position, progress.total),
        score_label: engine.score().to_string(),
        percent: (progress.fraction() * 100.0).round() as u8,
    }
}

/// Maps the current question, or `None` once the stage is complete.
#[must_use]
pub fn map_question(engine: &QuizEngine) -> Option<QuestionVm> {
    let question = engine.current_question()?;
    let answer = engine.answer();
    let total = engine.current_stage().question_count();

    let options = question
        .options()
        .iter()
        .enumerate()
        .map(|(index, text)| OptionVm {
            index,
            label: option_label(index),
            text: text.clone(),
            tone: option_tone(answer, question.correct_option(), index),
        })
        .collect();

    Some(QuestionVm {
        prompt: question.prompt().to_owned(),
        options,
        explanation: question.explanation().map(str::to_owned),
        show_explanation: answer.is_answered(),
        advance_label: if engine.question_index() + 1 < total {
            "Next question"
        } else {
            "Finish stage"
        },
    })
}

/// Maps the stage-complete panel, or `None` while questions remain.
#[must_use]
pub fn map_completion(engine: &QuizEngine) -> Option<CompletionVm> {
    if !engine.is_stage_complete() {
        return None;
    }

    let total = u32::try_from(engine.current_stage().question_count()).unwrap_or(u32::MAX);
    let score = engine.score();
    let percent = if total == 0 {
        0
    } else {
        (score * 100 + total / 2) / total
    };

    Some(CompletionVm {
        title: format!("You completed {}", engine.current_stage().title()),
        score_label: format!("{score} / {total}"),
        percent_label: format!("{percent}%"),
        elapsed_label: engine.elapsed().map(format_elapsed),
        has_next_stage: engine.has_next_stage(),
    })
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
