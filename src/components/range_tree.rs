//! Range Tree Component
//!
//! Sidebar folder/range tree with drag-and-drop moves.
//! Uses leptos-dragdrop for pointer tracking; the catalog decides whether a
//! drop is allowed.

use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;

use range_core::catalog::{DragItem, DropTarget, TreeNode};

use leptos_dragdrop::*;

use crate::commands;
use crate::components::{DropZone, LogPanel, NewFolderForm, TreeRowView};
use crate::context::{use_app_context, AppContext};
use crate::store::AppStateStoreFields;

/// Feeds pointer events from leptos-dragdrop into the drag session
#[derive(Clone, Copy)]
pub struct SidebarDragSink {
    ctx: AppContext,
}

impl DragSink<DragItem, DropTarget> for SidebarDragSink {
    fn started(&self, item: DragItem) {
        log::debug!("drag started: {:?}", item);
        self.ctx.drag.update(|d| d.start(item));
    }

    fn entered(&self, _item: DragItem, target: DropTarget) {
        let ctx = self.ctx;
        ctx.store
            .catalog()
            .with_untracked(|c| ctx.drag.update(|d| d.hover(target, c)));
    }

    fn left(&self, target: DropTarget) {
        self.ctx.drag.update(|d| d.leave(target));
    }

    fn dropped(&self, item: DragItem, target: DropTarget) {
        let ctx = self.ctx;
        let catalog = ctx.store.catalog().get_untracked();
        let verdict = ctx.drag.try_update(|d| d.drop_on(target, &catalog)).flatten();

        match verdict {
            Some(Ok(intent)) => {
                log::debug!("drop accepted: {:?}", intent);
                spawn_local(async move {
                    let result = commands::drop_item(catalog, item, target).await;
                    ctx.settle(result, None);
                });
            }
            Some(Err(rejection)) => {
                log::debug!("drop of {:?} on {:?} refused: {:?}", item, target, rejection);
            }
            None => {}
        }
    }

    fn cancelled(&self) {
        self.ctx.drag.update(|d| d.cancel());
    }
}

#[component]
pub fn RangeTree() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    // Create DnD signals and bind the document-level handlers once
    let dnd = create_dnd_signals::<DragItem, DropTarget>();
    let sink = SidebarDragSink { ctx };
    bind_global_handlers(dnd, sink);

    // Node whose context menu is open; any click elsewhere closes it
    let menu = RwSignal::new(None::<TreeNode>);
    let close_menu = window_event_listener(ev::click, move |_| {
        if menu.with_untracked(Option::is_some) {
            menu.set(None);
        }
    });
    on_cleanup(move || close_menu.remove());

    let rows = Memo::new(move |_| store.catalog().with(|c| c.flatten()));
    let is_empty = move || store.catalog().with(|c| c.is_empty()) && !store.loading().get();

    view! {
        <div class="range-tree">
            <div class="sidebar-header">
                <h3>"Ranges"</h3>
                <button class="refresh-btn" title="Reload" on:click=move |_| ctx.reload()>"↻"</button>
                <button
                    class="close-sidebar-btn"
                    on:click=move |_| store.shell().update(|s| *s = s.close_sidebar())
                >
                    "×"
                </button>
            </div>

            <button
                class="new-range-btn"
                on:click=move |_| ctx.new_range(store.shell().with_untracked(|s| s.current_folder))
            >
                "+ New Range"
            </button>

            <NewFolderForm />

            // Top level: select it to save new ranges at root, drop here to move out of folders
            <DropZone dnd=dnd sink=sink />

            <div class="tree-view">
                <For
                    each=move || rows.get()
                    key=|row| (row.node, row.name.clone(), row.depth, row.expanded, row.has_children)
                    children=move |row| {
                        view! { <TreeRowView row=row dnd=dnd sink=sink menu=menu /> }
                    }
                />
            </div>

            <Show when=is_empty>
                <p class="empty-hint">"No folders or ranges yet."</p>
            </Show>

            <LogPanel />
        </div>
    }
}
