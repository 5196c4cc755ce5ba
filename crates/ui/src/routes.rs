use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use services::QuizEngine;

use crate::context::AppContext;
use crate::views::{NoticeHost, QuizView, StagesView};
use crate::vm::NoticeStack;

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", StagesView)] Stages {},
        #[route("/quiz", QuizView)] Quiz {},
}

#[component]
fn Layout() -> Element {
    let ctx = use_context::<AppContext>();
    // The engine is the single mutable object of the session. It lives in
    // the layout so it survives route changes; views share this signal.
    use_context_provider(|| Signal::new(QuizEngine::new(ctx.catalog(), ctx.clock())));
    use_context_provider(|| Signal::new(NoticeStack::default()));

    rsx! {
        div { class: "app",
            main { class: "content",
                Outlet::<Route> {}
            }
            NoticeHost {}
        }
    }
}
