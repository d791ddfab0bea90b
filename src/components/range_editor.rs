//! Range Editor Component
//!
//! Name, action palette and matrix for creating or updating a range.

use leptos::prelude::*;
use leptos::task::spawn_local;

use range_core::catalog::CatalogChange;
use range_core::domain::{ActionId, CELL_COUNT};

use crate::commands;
use crate::components::{ActionButtons, ActionEditor, PokerMatrix};
use crate::context::use_app_context;
use crate::store::{store_report_error, AppStateStoreFields};

#[component]
pub fn RangeEditorView() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let (saving, set_saving) = signal(false);

    let engine = Memo::new(move |_| ctx.editor.with(|e| e.engine().clone()));
    let actions = Memo::new(move |_| ctx.editor.with(|e| e.palette().actions().to_vec()));
    let active = Signal::derive(move || ctx.editor.with(|e| Some(e.palette().active())));
    let editing = Memo::new(move |_| ctx.editor.with(|e| e.palette().editing()));
    let painted = move || ctx.editor.with(|e| e.grid().painted_count());
    let is_update = move || ctx.editor.with(|e| e.editing_id().is_some());

    // New ranges land in the folder selected in the sidebar
    let target_folder = move || {
        let folder = store.shell().with(|s| s.current_folder)?;
        store.catalog().with(|c| c.folder(folder).map(|f| f.name.clone()))
    };

    let on_save = move |_| {
        if saving.get_untracked() {
            return;
        }
        let folder = store.shell().with_untracked(|s| s.current_folder);
        let request = match ctx.editor.with_untracked(|e| e.save_request(folder)) {
            Ok(request) => request,
            Err(err) => {
                store_report_error(&store, &err);
                return;
            }
        };
        let session = ctx.editor.with_untracked(|e| e.session());
        let message = if ctx.editor.with_untracked(|e| e.editing_id().is_some()) {
            "Range updated"
        } else {
            "Range saved"
        };

        set_saving.set(true);
        spawn_local(async move {
            let result = commands::save_range(request).await;
            set_saving.set(false);
            if let Ok(CatalogChange::RangeSaved(range)) = &result {
                ctx.editor.update(|e| e.saved(session, range));
            }
            ctx.settle(result, Some(message.to_string()));
        });
    };

    let on_new = move |_| {
        ctx.new_range(store.shell().with_untracked(|s| s.current_folder));
    };

    view! {
        <section class="range-editor">
            <div class="editor-header">
                <input
                    type="text"
                    class="range-name-input"
                    placeholder="Range name"
                    prop:value=move || ctx.editor.with(|e| e.name().to_string())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        ctx.editor.update(|e| e.set_name(value));
                    }
                />
                <button class="save-btn" disabled=move || saving.get() on:click=on_save>
                    {move || if is_update() { "Update Range" } else { "Save Range" }}
                </button>
                <button class="new-range-btn" on:click=on_new>"New Range"</button>
            </div>

            <Show when=move || !is_update()>
                <p class="target-folder">
                    {move || match target_folder() {
                        Some(name) => format!("Saving into \"{}\"", name),
                        None => "Saving at top level".to_string(),
                    }}
                </p>
            </Show>

            <ActionButtons
                actions=actions
                active=active
                on_select=move |id: ActionId| {
                    ctx.editor.update(|e| {
                        e.set_active(id);
                    });
                }
                on_add=Callback::new(move |_: ()| {
                    ctx.editor.update(|e| {
                        e.add_action();
                    });
                })
            />

            // Keyed by the edited action so typing does not reset the form
            {move || editing.get().map(|id| view! { <ActionEditor id=id /> })}

            <PokerMatrix
                engine=engine
                on_begin=move |(row, col): (usize, usize)| {
                    ctx.editor.update(|e| {
                        e.begin_stroke(row, col);
                    });
                }
                on_continue=move |(row, col): (usize, usize)| {
                    ctx.editor.update(|e| {
                        e.continue_stroke(row, col);
                    });
                }
                on_end=move |_: ()| ctx.editor.update(|e| e.end_stroke())
            />

            <p class="painted-count">{move || format!("{} / {} hands painted", painted(), CELL_COUNT)}</p>
        </section>
    }
}
