//! Notice Bar Component
//!
//! Shows the latest success or error message. Dismissed by click or after
//! a timeout.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::NOTICE_TIMEOUT_MS;
use crate::store::{store_dismiss_notice, use_app_store, AppStateStoreFields, NoticeKind};

#[component]
pub fn NoticeBar() -> impl IntoView {
    let store = use_app_store();

    // Auto-dismiss; a newer notice outlives the timer of an older one
    Effect::new(move |_| {
        let Some(serial) = store.notice().with(|n| n.as_ref().map(|n| n.serial)) else {
            return;
        };
        spawn_local(async move {
            TimeoutFuture::new(NOTICE_TIMEOUT_MS).await;
            let current = store.notice().with_untracked(|n| n.as_ref().map(|n| n.serial));
            if current == Some(serial) {
                store_dismiss_notice(&store);
            }
        });
    });

    view! {
        {move || store.notice().get().map(|notice| {
            let class = match notice.kind {
                NoticeKind::Success => "notice notice-success",
                NoticeKind::Error => "notice notice-error",
            };
            view! {
                <div class=class role="status">
                    <span class="notice-text">{notice.message}</span>
                    <button class="notice-close" on:click=move |_| store_dismiss_notice(&store)>"×"</button>
                </div>
            }
        })}
    }
}
