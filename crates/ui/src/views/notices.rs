use std::time::Duration;

use dioxus::prelude::*;

use crate::vm::{NoticeContent, NoticeStack, NoticeVm};

const NOTICE_TTL: Duration = Duration::from_millis(3500);

/// Pushes a notice and schedules its dismissal.
///
/// Must be called from component scope (event handlers qualify); the
/// dismissal timer runs on the desktop runtime.
pub(crate) fn push_notice(mut notices: Signal<NoticeStack>, content: NoticeContent) {
    let id = notices.write().push(content);
    spawn(async move {
        tokio::time::sleep(NOTICE_TTL).await;
        notices.write().dismiss(id);
    });
}

#[component]
pub fn NoticeHost() -> Element {
    let notices = use_context::<Signal<NoticeStack>>();
    let items = notices.read().items().to_vec();

    rsx! {
        div { class: "notice-area",
            for notice in items {
                NoticeCard { key: "{notice.id}", notice }
            }
        }
    }
}

#[component]
fn NoticeCard(notice: NoticeVm) -> Element {
    let mut notices = use_context::<Signal<NoticeStack>>();
    let id = notice.id;

    rsx! {
        div {
            class: "{notice.tone.class()}",
            onclick: move |_| notices.write().dismiss(id),
            p { class: "notice__title", "{notice.title}" }
            if let Some(body) = notice.body.as_deref() {
                p { class: "notice__body", "{body}" }
            }
        }
    }
}
