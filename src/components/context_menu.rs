//! Context Menu Component
//!
//! Right-click actions for a tree row. Clicks bubble to the window listener
//! in the tree, which closes the menu.

use leptos::prelude::*;
use leptos::task::spawn_local;

use range_core::catalog::TreeNode;
use range_core::domain::{FolderId, RangeId};
use range_core::shell::Tab;

use crate::commands;
use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;
use crate::store::AppStateStoreFields;

#[component]
pub fn ContextMenu(node: TreeNode) -> impl IntoView {
    match node {
        TreeNode::Range(id) => view! { <RangeMenu id=id /> }.into_any(),
        TreeNode::Folder(id) => view! { <FolderMenu id=id /> }.into_any(),
    }
}

#[component]
fn RangeMenu(id: RangeId) -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let on_duplicate = move |_| {
        let catalog = store.catalog().get_untracked();
        spawn_local(async move {
            let result = commands::duplicate_range(catalog, id).await;
            ctx.settle(result, Some("Range duplicated".to_string()));
        });
    };

    let on_delete = move |_: ()| {
        let catalog = store.catalog().get_untracked();
        spawn_local(async move {
            let result = commands::delete_range(catalog, id).await;
            ctx.settle(result, Some("Range deleted".to_string()));
        });
    };

    view! {
        <div class="context-menu">
            <button class="menu-item" on:click=move |_| ctx.edit_range(id)>"Edit"</button>
            <button
                class="menu-item"
                on:click=move |_| {
                    ctx.switch_tab(Tab::Trainer);
                    ctx.open_range(id);
                }
            >
                "Train"
            </button>
            <button class="menu-item" on:click=on_duplicate>"Duplicate"</button>
            <DeleteConfirmButton button_class="menu-item danger" label="Delete" on_confirm=on_delete />
        </div>
    }
}

#[component]
fn FolderMenu(id: FolderId) -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let on_delete = move |_: ()| {
        let catalog = store.catalog().get_untracked();
        spawn_local(async move {
            let result = commands::delete_folder(catalog, id).await;
            ctx.settle(result, Some("Folder deleted".to_string()));
        });
    };

    view! {
        <div class="context-menu">
            <button class="menu-item" on:click=move |_| ctx.new_range(Some(id))>"New range here"</button>
            <button
                class="menu-item"
                on:click=move |_| store.catalog().update(|c| c.toggle_expanded(id))
            >
                {move || if store.catalog().with(|c| c.is_expanded(id)) { "Collapse" } else { "Expand" }}
            </button>
            <DeleteConfirmButton button_class="menu-item danger" label="Delete" on_confirm=on_delete />
        </div>
    }
}
