//! Action Editor Component
//!
//! Rename/recolor form for the action being edited in the range editor.

use leptos::prelude::*;

use range_core::domain::{ActionId, Color};

use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;
use crate::store::store_report_error;

#[component]
pub fn ActionEditor(id: ActionId) -> impl IntoView {
    let ctx = use_app_context();

    let (initial_name, initial_color) = ctx.editor.with_untracked(|e| {
        e.palette()
            .get(id)
            .map(|a| (a.name.clone(), a.color.to_string()))
            .unwrap_or_default()
    });
    let (name, set_name) = signal(initial_name);
    let (color, set_color) = signal(initial_color);

    let on_save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let result = ctx
            .editor
            .try_update(|e| e.edit_action(id, &name.get_untracked(), Color::new(color.get_untracked())));
        match result {
            Some(Ok(recolored)) => {
                log::debug!("action {} saved, {} cells recolored", id, recolored);
                ctx.editor.update(|e| e.close_action_editor());
            }
            Some(Err(err)) => store_report_error(&ctx.store, &err),
            None => {}
        }
    };

    view! {
        <form class="action-editor" on:submit=on_save>
            <input
                type="text"
                class="action-name-input"
                placeholder="Action name"
                prop:value=move || name.get()
                on:input=move |ev| set_name.set(event_target_value(&ev))
            />
            <input
                type="color"
                class="action-color-input"
                prop:value=move || color.get()
                on:input=move |ev| set_color.set(event_target_value(&ev))
            />
            <button type="submit">"Save"</button>
            {(id != ActionId::PRIMARY).then(|| view! {
                <DeleteConfirmButton
                    button_class="action-delete-btn"
                    label="Delete"
                    on_confirm=move |_: ()| {
                        ctx.editor.update(|e| {
                            e.delete_action(id);
                        });
                    }
                />
            })}
            <button type="button" class="cancel-btn" on:click=move |_| ctx.editor.update(|e| e.close_action_editor())>
                "Close"
            </button>
        </form>
    }
}
