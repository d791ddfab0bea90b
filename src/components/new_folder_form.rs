//! New Folder Form Component
//!
//! Creates a folder inside the folder currently selected in the sidebar.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::use_app_context;
use crate::store::AppStateStoreFields;

#[component]
pub fn NewFolderForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let (new_name, set_new_name) = signal(String::new());
    let (busy, set_busy) = signal(false);

    let parent_name = move || {
        let parent = store.shell().with(|s| s.current_folder)?;
        store.catalog().with(|c| c.folder(parent).map(|f| f.name.clone()))
    };

    let create_folder = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let name = new_name.get_untracked();
        let parent = store.shell().with_untracked(|s| s.current_folder);
        let catalog = store.catalog().get_untracked();

        set_busy.set(true);
        spawn_local(async move {
            let result = commands::create_folder(catalog, name, parent).await;
            set_busy.set(false);
            if ctx.settle(result, None) {
                set_new_name.set(String::new());
            }
        });
    };

    view! {
        <form class="new-folder-form" on:submit=create_folder>
            <input
                type="text"
                placeholder=move || match parent_name() {
                    Some(name) => format!("New folder in {}...", name),
                    None => "New folder...".to_string(),
                }
                prop:value=move || new_name.get()
                on:input=move |ev| set_new_name.set(event_target_value(&ev))
            />
            <button type="submit" disabled=move || busy.get()>"Add"</button>
        </form>
    }
}
