//! Range Trainer Frontend App
//!
//! Sidebar tree on the left, editor or trainer on the right.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use range_core::shell::Tab;

use crate::commands;
use crate::components::{NoticeBar, RangeEditorView, RangeTrainerView, RangeTree, TabBar};
use crate::context::AppContext;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::new());
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let ctx = AppContext::new(store, (reload_trigger, set_reload_trigger));

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    // Load the library on mount and whenever a reload is requested
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        log::debug!("loading library, trigger={}", trigger);
        store.loading().set(true);
        spawn_local(async move {
            let result = commands::load_library().await;
            store.loading().set(false);
            ctx.settle(result, None);
        });
    });

    let sidebar_open = move || store.shell().with(|s| s.sidebar_open);
    let tab = move || store.shell().with(|s| s.tab);

    view! {
        <div class="app-layout" class:sidebar-open=sidebar_open>
            <aside class="sidebar">
                <RangeTree />
            </aside>

            // Tap outside the drawer to close it on narrow screens
            <Show when=sidebar_open>
                <div
                    class="sidebar-backdrop"
                    on:click=move |_| store.shell().update(|s| *s = s.close_sidebar())
                />
            </Show>

            <main class="main-content">
                <TabBar />
                <NoticeBar />

                <Show when=move || store.loading().get()>
                    <p class="loading">"Loading library..."</p>
                </Show>

                {move || match tab() {
                    Tab::Editor => view! { <RangeEditorView /> }.into_any(),
                    Tab::Trainer => view! { <RangeTrainerView /> }.into_any(),
                }}
            </main>
        </div>
    }
}
