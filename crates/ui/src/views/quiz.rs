use dioxus::prelude::*;
use dioxus_router::use_navigator;
use keyboard_types::Key;

use services::{AnswerState, QuizEngine, QuizEvent, Screen};

use crate::routes::Route;
use crate::views::push_notice;
use crate::vm::{
    NoticeStack, OptionVm, map_completion, map_header, map_question, notice_for_error,
    notice_for_event,
};

/// User intents the quiz view dispatches into the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum QuizIntent {
    Answer(usize),
    Advance,
    Retry,
    NextStage,
    Exit,
}

#[component]
pub fn QuizView() -> Element {
    let mut engine = use_context::<Signal<QuizEngine>>();
    let notices = use_context::<Signal<NoticeStack>>();
    let navigator = use_navigator();

    let dispatch = use_callback(move |intent: QuizIntent| {
        let result = match intent {
            QuizIntent::Answer(option) => Ok(engine.write().submit_answer(option)),
            QuizIntent::Advance => engine.write().advance(),
            QuizIntent::Retry => engine.write().retry(),
            QuizIntent::NextStage => engine.write().advance_stage(),
            QuizIntent::Exit => Ok(engine.write().exit_to_stage_select()),
        };

        match result {
            Ok(event) => {
                if event == QuizEvent::LeftStage {
                    navigator.push(Route::Stages {});
                }
                if let Some(content) = notice_for_event(&event) {
                    push_notice(notices, content);
                }
            }
            Err(err) => push_notice(notices, notice_for_error(&err)),
        }
    });

    let on_key = use_callback(move |evt: KeyboardEvent| {
        if evt.data.key() == Key::Escape {
            evt.prevent_default();
            dispatch.call(QuizIntent::Exit);
            return;
        }

        if evt.data.key() == Key::Enter {
            let intent = match engine.read().answer() {
                AnswerState::Correct { .. } => Some(QuizIntent::Advance),
                AnswerState::Incorrect { .. } => Some(QuizIntent::Retry),
                AnswerState::StageComplete if engine.read().has_next_stage() => {
                    Some(QuizIntent::NextStage)
                }
                _ => None,
            };
            if let Some(intent) = intent {
                evt.prevent_default();
                dispatch.call(intent);
            }
            return;
        }

        // Digit keys pick the matching option.
        if let Key::Character(value) = evt.data.key() {
            if let Ok(number) = value.as_str().parse::<usize>() {
                if number == 0 {
                    return;
                }
                let option = number - 1;
                let in_range = engine
                    .read()
                    .current_question()
                    .is_some_and(|question| option < question.options().len());
                if in_range {
                    evt.prevent_default();
                    dispatch.call(QuizIntent::Answer(option));
                }
            }
        }
    });

    let engine_guard = engine.read();
    if engine_guard.screen() == Screen::StageSelect {
        // Reached /quiz without entering a stage.
        return rsx! {
            div { class: "page quiz-page",
                div { class: "empty-state",
                    p { "No stage in progress." }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| {
                            navigator.push(Route::Stages {});
                        },
                        "Pick a stage"
                    }
                }
            }
        };
    }

    let header = map_header(&engine_guard);
    let question = map_question(&engine_guard);
    let completion = map_completion(&engine_guard);
    let answer = engine_guard.answer();
    drop(engine_guard);

    rsx! {
        div { class: "page quiz-page", tabindex: "0", onkeydown: on_key,
            header { class: "quiz-header",
                button {
                    class: "btn btn-ghost",
                    id: "quiz-exit",
                    r#type: "button",
                    onclick: move |_| dispatch.call(QuizIntent::Exit),
                    "Back to stages"
                }
                div { class: "quiz-header__stage",
                    h2 { class: "quiz-title", "{header.stage_title}" }
                    p { class: "quiz-subtitle", "{header.position_label}" }
                }
                div { class: "quiz-header__score",
                    p { class: "quiz-score-caption", "Score" }
                    p { class: "quiz-score", "{header.score_label}" }
                }
            }
            div { class: "progress-track",
                div { class: "progress-fill", style: "width: {header.percent}%" }
            }

            if let Some(done) = completion {
                section { class: "stage-complete",
                    h3 { class: "stage-complete__title", "{done.title}" }
                    p { class: "stage-complete__score", "{done.score_label}" }
                    p { class: "stage-complete__percent", "Success rate: {done.percent_label}" }
                    if let Some(elapsed) = done.elapsed_label.as_deref() {
                        p { class: "stage-complete__elapsed", "Time: {elapsed}" }
                    }
                    div { class: "stage-complete__actions",
                        button {
                            class: "btn btn-secondary",
                            id: "stage-complete-back",
                            r#type: "button",
                            onclick: move |_| dispatch.call(QuizIntent::Exit),
                            "Back to stages"
                        }
                        if done.has_next_stage {
                            button {
                                class: "btn btn-primary",
                                id: "stage-complete-next",
                                r#type: "button",
                                onclick: move |_| dispatch.call(QuizIntent::NextStage),
                                "Next stage"
                            }
                        }
                    }
                }
            } else if let Some(q) = question {
                section { class: "question-card",
                    h3 { class: "question-prompt", "{q.prompt}" }
                    div { class: "option-list",
                        for option in q.options.clone() {
                            OptionButton { key: "{option.index}", option, on_intent: dispatch }
                        }
                    }
                    if q.show_explanation {
                        if let Some(text) = q.explanation.as_deref() {
                            div { class: "explanation",
                                p { "{text}" }
                            }
                        }
                    }
                    div { class: "question-actions",
                        match answer {
                            AnswerState::Correct { .. } => rsx! {
                                button {
                                    class: "btn btn-primary",
                                    id: "quiz-advance",
                                    r#type: "button",
                                    onclick: move |_| dispatch.call(QuizIntent::Advance),
                                    "{q.advance_label}"
                                }
                            },
                            AnswerState::Incorrect { .. } => rsx! {
                                button {
                                    class: "btn btn-retry",
                                    id: "quiz-retry",
                                    r#type: "button",
                                    onclick: move |_| dispatch.call(QuizIntent::Retry),
                                    "Try again"
                                }
                            },
                            AnswerState::Unanswered | AnswerState::StageComplete => rsx! {},
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn OptionButton(option: OptionVm, on_intent: EventHandler<QuizIntent>) -> Element {
    let index = option.index;

    rsx! {
        button {
            class: "{option.tone.class()}",
            r#type: "button",
            onclick: move |_| on_intent.call(QuizIntent::Answer(index)),
            span { class: "option__label", "{option.label}" }
            span { class: "option__text", "{option.text}" }
        }
    }
}
