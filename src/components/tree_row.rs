//! Tree Row Component
//!
//! One folder or range line of the sidebar tree.

use leptos::prelude::*;

use range_core::catalog::{DragItem, DropTarget, TreeNode, TreeRow};

use leptos_dragdrop::*;

use super::range_tree::SidebarDragSink;
use crate::components::ContextMenu;
use crate::context::use_app_context;
use crate::store::AppStateStoreFields;

#[component]
pub fn TreeRowView(
    row: TreeRow,
    dnd: DndSignals<DragItem, DropTarget>,
    sink: SidebarDragSink,
    menu: RwSignal<Option<TreeNode>>,
) -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let node = row.node;
    let (item, target) = match node {
        TreeNode::Folder(id) => (DragItem::Folder(id), DropTarget::Folder(id)),
        TreeNode::Range(id) => (DragItem::Range(id), DropTarget::Range(id)),
    };
    let indent = row.depth * 16;

    // DnD handlers
    let on_mousedown = make_on_mousedown(dnd, item);
    let on_mouseenter = make_on_mouseenter(dnd, target, sink);
    let on_mouseleave = make_on_mouseleave(dnd, target, sink);

    let is_selected = move || {
        store.shell().with(|s| match node {
            TreeNode::Folder(id) => s.current_folder == Some(id),
            TreeNode::Range(id) => s.open_range == Some(id),
        })
    };

    let row_class = move || {
        let mut c = String::from(match node {
            TreeNode::Folder(_) => "tree-row folder",
            TreeNode::Range(_) => "tree-row range",
        });
        if is_selected() { c.push_str(" selected"); }
        if dnd.is_dragged(item) { c.push_str(" dragging"); }
        match ctx.drag.with(|d| d.hover_state(target)) {
            Some(true) => c.push_str(" drop-target"),
            Some(false) => c.push_str(" drop-invalid"),
            None => {}
        }
        c
    };

    let on_click = move |_| {
        // the mouseup that ends a drag also fires a click
        if dnd.drag_just_ended.get_untracked() {
            return;
        }
        match node {
            TreeNode::Folder(id) => store.shell().update(|s| *s = s.select_folder(Some(id))),
            TreeNode::Range(id) => ctx.open_range(id),
        }
    };

    let on_contextmenu = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        menu.set(Some(node));
    };

    let on_toggle = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        if let TreeNode::Folder(id) = node {
            store.catalog().update(|c| c.toggle_expanded(id));
        }
    };

    let marker = match node {
        TreeNode::Folder(_) if row.has_children => view! {
            <button class="collapse-btn" on:click=on_toggle>
                {if row.expanded { "▼" } else { "▶" }}
            </button>
        }.into_any(),
        TreeNode::Folder(_) => view! { <span class="collapse-placeholder">"·"</span> }.into_any(),
        TreeNode::Range(_) => view! { <span class="range-icon">"▦"</span> }.into_any(),
    };

    view! {
        <div
            class=row_class
            style=format!("padding-left: {}px;", indent)
            on:mousedown=on_mousedown
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
            on:click=on_click
            on:contextmenu=on_contextmenu
        >
            {marker}
            <span class="tree-name">{row.name}</span>
        </div>
        <Show when=move || menu.get() == Some(node)>
            <ContextMenu node=node />
        </Show>
    }
}
