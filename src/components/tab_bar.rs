//! Tab Bar Component
//!
//! Switches between the editor and the trainer. The menu button opens the
//! sidebar drawer on narrow screens.

use leptos::prelude::*;

use range_core::shell::Tab;

use crate::context::use_app_context;
use crate::store::AppStateStoreFields;

const TABS: &[(Tab, &str)] = &[(Tab::Editor, "Range Editor"), (Tab::Trainer, "Range Trainer")];

#[component]
pub fn TabBar() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    view! {
        <nav class="tab-bar">
            <button
                class="menu-btn"
                title="Ranges"
                on:click=move |_| store.shell().update(|s| *s = s.open_sidebar())
            >
                "☰"
            </button>

            {TABS.iter().map(|(tab, label)| {
                let tab = *tab;
                let is_active = move || store.shell().with(|s| s.tab == tab);
                view! {
                    <button
                        class=move || if is_active() { "tab-btn active" } else { "tab-btn" }
                        on:click=move |_| ctx.switch_tab(tab)
                    >
                        {*label}
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}
