use services::{QuizError, QuizEvent};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeTone {
    Success,
    Error,
}

impl NoticeTone {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            NoticeTone::Success => "notice notice--success",
            NoticeTone::Error => "notice notice--error",
        }
    }
}

/// Wording for one transient notice, before it gets a stack id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NoticeContent {
    pub title: String,
    pub body: Option<String>,
    pub tone: NoticeTone,
}

/// A notice currently on screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NoticeVm {
    pub id: u64,
    pub title: String,
    pub body: Option<String>,
    pub tone: NoticeTone,
}

/// Stack of transient notices with stable ids for dismissal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoticeStack {
    next_id: u64,
    items: Vec<NoticeVm>,
}

impl NoticeStack {
    pub fn push(&mut self, content: NoticeContent) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(NoticeVm {
            id,
            title: content.title,
            body: content.body,
            tone: content.tone,
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|notice| notice.id != id);
    }

    #[must_use]
    pub fn items(&self) -> &[NoticeVm] {
        &self.items
    }
}

/// Wording for an engine event; quiet events return `None`.
#[must_use]
pub fn notice_for_event(event: &QuizEvent) -> Option<NoticeContent> {
    match event {
        QuizEvent::AnswerCorrect { .. } => Some(NoticeContent {
            title: "Correct!".into(),
            body: Some("Nice one. You can move on to the next question.".into()),
            tone: NoticeTone::Success,
        }),
        QuizEvent::AnswerIncorrect { .. } => Some(NoticeContent {
            title: "Not quite".into(),
            body: Some("You need the right answer to continue. Try again.".into()),
            tone: NoticeTone::Error,
        }),
        QuizEvent::StageCompleted {
            title,
            score,
            total,
            ..
        } => Some(NoticeContent {
            title: "Stage complete!".into(),
            body: Some(format!("You finished {title} with {score} / {total}.")),
            tone: NoticeTone::Success,
        }),
        QuizEvent::StageEntered { .. }
        | QuizEvent::AnswerIgnored
        | QuizEvent::QuestionAdvanced { .. }
        | QuizEvent::QuestionReset
        | QuizEvent::LeftStage => None,
    }
}

/// Wording for a rejected transition.
#[must_use]
pub fn notice_for_error(error: &QuizError) -> NoticeContent {
    match error {
        QuizError::LockedStage { .. } => NoticeContent {
            title: "Stage locked".into(),
            body: Some("Complete the previous stage first.".into()),
            tone: NoticeTone::Error,
        },
        QuizError::MustAnswerCorrectly => NoticeContent {
            title: "Can't continue".into(),
            body: Some("Answer the question correctly to move on.".into()),
            tone: NoticeTone::Error,
        },
        other => NoticeContent {
            title: other.to_string(),
            body: None,
            tone: NoticeTone::Error,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stack_assigns_unique_ids_and_dismisses() {
        let mut stack = NoticeStack::default();
        let first = stack.push(notice_for_error(&QuizError::MustAnswerCorrectly));
        let second = stack.push(notice_for_error(&QuizError::NothingToRetry));
        assert_ne!(first, second);
        assert_eq!(stack.items().len(), 2);

        stack.dismiss(first);
        assert_eq!(stack.items().len(), 1);
        assert_eq!(stack.items()[0].id, second);
    }

    #[test]
    fn quiet_events_produce_no_notice() {
        assert!(notice_for_event(&QuizEvent::AnswerIgnored).is_none());
        assert!(notice_for_event(&QuizEvent::QuestionReset).is_none());
        assert!(notice_for_event(&QuizEvent::StageEntered { stage: 0 }).is_none());
    }

    #[test]
    fn stage_completion_mentions_title_and_score() {
        let notice = notice_for_event(&QuizEvent::StageCompleted {
            stage: 0,
            title: "Warm-up".into(),
            score: 2,
            total: 3,
        })
        .unwrap();
        assert_eq!(notice.tone, NoticeTone::Success);
        assert_eq!(
            notice.body.as_deref(),
            Some("You finished Warm-up with 2 / 3.")
        );
    }

    #[test]
    fn locked_stage_reads_as_an_error() {
        let notice = notice_for_error(&QuizError::LockedStage {
            requested: 2,
            required: 1,
        });
        assert_eq!(notice.tone, NoticeTone::Error);
        assert_eq!(notice.title, "Stage locked");
    }
}
