use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use quiz_core::Clock;
use quiz_core::model::Catalog;
use quiz_core::time::fixed_now;
use services::{QuizEngine, load_catalog_from_str};

use crate::context::{UiApp, build_app_context};
use crate::views::{NoticeHost, QuizView, StagesView};
use crate::vm::NoticeStack;

pub const SAMPLE_CATALOG: &str = r#"{
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

#[derive(Clone)]
struct TestApp {
    catalog: Arc<Catalog>,
}

impl UiApp for TestApp {
    fn catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    fn clock(&self) -> Clock {
        Clock::fixed(fixed_now())
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Stages,
    Quiz,
}

/// Engine state applied before the first render, standing in for the
/// interactions a user would have performed to get there.
#[derive(Clone, Copy)]
pub struct EngineSetup(pub fn(&mut QuizEngine));

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    setup: EngineSetup,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    use_context_provider(|| props.setup);
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    let setup = use_context::<EngineSetup>();
    let ctx = use_context::<crate::context::AppContext>();

    // Mirror the production layout: engine + notices provided above the views.
    use_context_provider(|| {
        let mut engine = QuizEngine::new(ctx.catalog(), ctx.clock());
        (setup.0)(&mut engine);
        Signal::new(engine)
    });
    use_context_provider(|| Signal::new(NoticeStack::default()));

    rsx! {
        match view {
            ViewKind::Stages => rsx! { StagesView {} },
            ViewKind::Quiz => rsx! { QuizView {} },
        }
        NoticeHost {}
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind, setup: fn(&mut QuizEngine)) -> ViewHarness {
    let catalog = Arc::new(load_catalog_from_str(SAMPLE_CATALOG).expect("sample catalog"));
    let app = Arc::new(TestApp { catalog });

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            setup: EngineSetup(setup),
        },
    );

    ViewHarness { dom }
}
