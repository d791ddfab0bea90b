//! Drop Zone Component
//!
//! Top-level row of the tree. Clicking it targets the root folder for new
//! ranges; dropping on it moves an item out of its folder.

use leptos::prelude::*;

use range_core::catalog::{DragItem, DropTarget};

use leptos_dragdrop::*;

use super::range_tree::SidebarDragSink;
use crate::context::use_app_context;
use crate::store::AppStateStoreFields;

#[component]
pub fn DropZone(dnd: DndSignals<DragItem, DropTarget>, sink: SidebarDragSink) -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let on_mouseenter = make_on_mouseenter(dnd, DropTarget::Root, sink);
    let on_mouseleave = make_on_mouseleave(dnd, DropTarget::Root, sink);

    let zone_class = move || {
        let mut c = String::from("drop-zone root");
        if store.shell().with(|s| s.current_folder.is_none()) {
            c.push_str(" selected");
        }
        if dnd.is_dragging() {
            c.push_str(" visible");
        }
        match ctx.drag.with(|d| d.hover_state(DropTarget::Root)) {
            Some(true) => c.push_str(" active"),
            Some(false) => c.push_str(" invalid"),
            None => {}
        }
        c
    };

    view! {
        <div
            class=zone_class
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
            on:click=move |_| {
                if !dnd.drag_just_ended.get_untracked() {
                    store.shell().update(|s| *s = s.select_folder(None));
                }
            }
        >
            "Top level"
        </div>
    }
}
