//! Action Buttons Component
//!
//! One button per action of the palette; the active one is the brush.

use leptos::prelude::*;

use range_core::domain::{Action, ActionId, MAX_ACTIONS};

#[component]
pub fn ActionButtons(
    #[prop(into)] actions: Signal<Vec<Action>>,
    #[prop(into)] active: Signal<Option<ActionId>>,
    #[prop(into)] on_select: Callback<ActionId>,
    /// Shown only in the editor
    #[prop(optional)] on_add: Option<Callback<()>>,
) -> impl IntoView {
    let is_full = move || actions.with(|a| a.len() >= MAX_ACTIONS);

    view! {
        <div class="action-buttons">
            <For
                each=move || actions.get()
                key=|action| (action.id, action.name.clone(), action.color.clone())
                children=move |action| {
                    let id = action.id;
                    let is_active = move || active.get() == Some(id);
                    view! {
                        <button
                            class=move || if is_active() { "action-btn active" } else { "action-btn" }
                            style=format!("--action-color: {};", action.color)
                            on:click=move |_| on_select.run(id)
                        >
                            <span class="action-swatch" />
                            {action.name.clone()}
                        </button>
                    }
                }
            />
            {on_add.map(|on_add| view! {
                <button
                    class="action-add-btn"
                    title="Add action"
                    disabled=is_full
                    on:click=move |_| on_add.run(())
                >
                    "+"
                </button>
            })}
        </div>
    }
}
