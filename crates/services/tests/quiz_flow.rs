use std::sync::Arc;

use quiz_core::Clock;
use quiz_core::time::fixed_now;
use services::{QuizEngine, QuizError, QuizEvent, StageStatus, load_catalog_from_str};

const CATALOG: &str = r#"{
    "stages": [
        {
            "id": 1,
            "title": "Warm-up",
            "description": "Easy openers",
            "questions": [
                {
                    "prompt": "Which planet is closest to the sun?",
                    "options": ["Venus", "Mercury", "Earth"],
                    "correct_option": 1,
                    "explanation": "Mercury orbits at about 58 million km."
                },
                {
                    "prompt": "How many continents are there?",
                    "options": ["Five", "Six", "Seven"],
                    "correct_option": 2
                }
            ]
        },
        {
            "id": 2,
            "title": "Final round",
            "questions": [
                {
                    "prompt": "What is the chemical symbol for gold?",
                    "options": ["Au", "Ag", "Gd"],
                    "correct_option": 0
                }
            ]
        }
    ]
}"#;

#[test]
fn full_playthrough_unlocks_and_completes_every_stage() {
    let catalog = Arc::new(load_catalog_from_str(CATALOG).unwrap());
    let mut engine = QuizEngine::new(Arc::clone(&catalog), Clock::fixed(fixed_now()));

    // The second stage is gated behind the first.
    assert_eq!(
        engine.select_stage(1).unwrap_err(),
        QuizError::LockedStage {
            requested: 1,
            required: 0
        }
    );

    engine.select_stage(0).unwrap();

    // First question: miss once, retry, then pass.
    assert!(matches!(
        engine.submit_answer(0),
        QuizEvent::AnswerIncorrect { .. }
    ));
    assert_eq!(engine.advance().unwrap_err(), QuizError::MustAnswerCorrectly);
    engine.retry().unwrap();
    assert!(matches!(
        engine.submit_answer(1),
        QuizEvent::AnswerCorrect { .. }
    ));
    engine.advance().unwrap();

    // Second question completes the stage.
    engine.submit_answer(2);
    let event = engine.advance().unwrap();
    assert_eq!(
        event,
        QuizEvent::StageCompleted {
            stage: 0,
            title: "Warm-up".into(),
            score: 2,
            total: 2,
        }
    );
    assert_eq!(engine.stage_status(1), StageStatus::Unlocked);

    // Straight into the final stage and through it.
    engine.advance_stage().unwrap();
    assert_eq!(engine.stage_index(), 1);
    assert_eq!(engine.score(), 0);
    engine.submit_answer(0);
    let event = engine.advance().unwrap();
    assert!(matches!(
        event,
        QuizEvent::StageCompleted {
            stage: 1,
            score: 1,
            ..
        }
    ));

    assert_eq!(engine.advance_stage().unwrap_err(), QuizError::NoNextStage);
    assert_eq!(engine.completed_stages().len(), catalog.stage_count());

    // Back at stage select everything reads as completed.
    engine.exit_to_stage_select();
    let overviews = engine.stage_overviews();
    assert!(
        overviews
            .iter()
            .all(|overview| overview.status == StageStatus::Completed)
    );
}

#[test]
fn replaying_a_completed_stage_starts_from_scratch() {
    let catalog = Arc::new(load_catalog_from_str(CATALOG).unwrap());
    let mut engine = QuizEngine::new(catalog, Clock::fixed(fixed_now()));

    engine.select_stage(0).unwrap();
    engine.submit_answer(1);
    engine.advance().unwrap();
    engine.submit_answer(2);
    engine.advance().unwrap();
    assert_eq!(engine.score(), 2);

    engine.exit_to_stage_select();
    engine.select_stage(0).unwrap();
    assert_eq!(engine.score(), 0);
    assert_eq!(engine.question_index(), 0);
    assert_eq!(engine.stage_status(0), StageStatus::Completed);
}
