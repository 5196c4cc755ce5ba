use dioxus::prelude::*;
use dioxus_router::use_navigator;

use services::QuizEngine;

use crate::routes::Route;
use crate::views::push_notice;
use crate::vm::{NoticeStack, StageTileVm, map_stage_tile, notice_for_error};

#[component]
pub fn StagesView() -> Element {
    let mut engine = use_context::<Signal<QuizEngine>>();
    let notices = use_context::<Signal<NoticeStack>>();
    let navigator = use_navigator();

    let tiles: Vec<StageTileVm> = engine
        .read()
        .stage_overviews()
        .iter()
        .map(map_stage_tile)
        .collect();

    // Locked tiles stay clickable: the engine rejects the selection and the
    // rejection surfaces as a notice, same as any other blocked transition.
    let on_select = use_callback(move |index: usize| {
        let result = engine.write().select_stage(index);
        match result {
            Ok(_) => {
                navigator.push(Route::Quiz {});
            }
            Err(err) => push_notice(notices, notice_for_error(&err)),
        }
    });

    rsx! {
        div { class: "page stages-page",
            header { class: "view-header",
                h2 { class: "view-title", "Pick a stage" }
                p { class: "view-subtitle", "Finish a stage to unlock the next one." }
            }
            div { class: "stage-grid",
                for tile in tiles {
                    StageTile { key: "{tile.index}", tile, on_select }
                }
            }
        }
    }
}

#[component]
fn StageTile(tile: StageTileVm, on_select: EventHandler<usize>) -> Element {
    let index = tile.index;

    rsx! {
        button {
            class: "{tile.class()}",
            r#type: "button",
            onclick: move |_| on_select.call(index),
            p { class: "stage-tile__heading", "{tile.heading}" }
            h3 { class: "stage-tile__title", "{tile.title}" }
            if let Some(description) = tile.description.as_deref() {
                p { class: "stage-tile__desc", "{description}" }
            }
            div { class: "stage-tile__meta",
                span { class: "stage-tile__count", "{tile.count_label}" }
                if let Some(badge) = tile.badge {
                    span { class: "{tile.badge_class()}", "{badge}" }
                }
            }
        }
    }
}
