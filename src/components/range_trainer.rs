//! Range Trainer Component
//!
//! Pick a saved range, repaint it from memory, then check the attempt.

use leptos::prelude::*;
use leptos::task::spawn_local;

use range_core::domain::{ActionId, RangeId};
use range_core::engine::Grade;

use crate::commands;
use crate::components::{ActionButtons, PokerMatrix};
use crate::context::use_app_context;
use crate::store::AppStateStoreFields;

fn grade_class(grade: Grade) -> &'static str {
    match grade {
        Grade::Strong => "score-banner strong",
        Grade::Fair => "score-banner fair",
        Grade::Weak => "score-banner weak",
    }
}

#[component]
pub fn RangeTrainerView() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let ranges = Memo::new(move |_| {
        store
            .catalog()
            .with(|c| c.ranges().map(|r| (r.id, r.name.clone())).collect::<Vec<_>>())
    });
    let reference = Memo::new(move |_| ctx.trainer.with(|t| t.reference().map(|r| (r.id, r.name.clone()))));
    let engine = Memo::new(move |_| ctx.trainer.with(|t| t.engine().clone()));
    let actions = Memo::new(move |_| ctx.trainer.with(|t| t.actions().to_vec()));
    let active = Signal::derive(move || ctx.trainer.with(|t| t.active()));
    let report = Memo::new(move |_| ctx.trainer.with(|t| t.report().copied()));
    let is_checked = move || ctx.trainer.with(|t| t.is_checked());

    let on_check = move |_| {
        if let Some(Some(result)) = ctx.trainer.try_update(|t| t.check()) {
            log::info!("checked attempt: {}/{} ({}%)", result.matches, result.total, result.percent);
        }
    };

    let on_duplicate = move |id: RangeId| {
        let catalog = store.catalog().get_untracked();
        spawn_local(async move {
            let result = commands::duplicate_range(catalog, id).await;
            ctx.settle(result, Some("Range duplicated".to_string()));
        });
    };

    view! {
        <section class="range-trainer">
            <div class="trainer-range-list">
                <Show
                    when=move || !ranges.with(|r| r.is_empty())
                    fallback=|| view! { <p class="empty-hint">"No saved ranges yet. Build one in the editor first."</p> }
                >
                    <For
                        each=move || ranges.get()
                        key=|(id, name)| (*id, name.clone())
                        children=move |(id, name)| {
                            let is_selected = move || reference.with(|r| r.as_ref().map(|(rid, _)| *rid) == Some(id));
                            view! {
                                <button
                                    class=move || if is_selected() { "trainer-range-btn active" } else { "trainer-range-btn" }
                                    on:click=move |_| ctx.open_range(id)
                                >
                                    {name}
                                </button>
                            }
                        }
                    />
                </Show>
            </div>

            {move || match reference.get() {
                None => view! {
                    <p class="empty-hint">"Choose a range to train."</p>
                }.into_any(),
                Some((id, name)) => view! {
                    <div class="trainer-header">
                        <h2>{name}</h2>
                        <button class="edit-btn" on:click=move |_| ctx.edit_range(id)>
                            "Edit"
                        </button>
                        <button class="duplicate-btn" on:click=move |_| on_duplicate(id)>"Duplicate"</button>
                    </div>
                }.into_any(),
            }}

            <ActionButtons
                actions=actions
                active=active
                on_select=move |id: ActionId| {
                    ctx.trainer.update(|t| {
                        t.set_active(id);
                    });
                }
            />

            <PokerMatrix
                engine=engine
                on_begin=move |(row, col): (usize, usize)| {
                    ctx.trainer.update(|t| {
                        t.begin_stroke(row, col);
                    });
                }
                on_continue=move |(row, col): (usize, usize)| {
                    ctx.trainer.update(|t| {
                        t.continue_stroke(row, col);
                    });
                }
                on_end=move |_: ()| ctx.trainer.update(|t| t.end_stroke())
            />

            <div class="trainer-controls">
                <button
                    class="check-btn"
                    disabled=move || reference.with(Option::is_none) || is_checked()
                    on:click=on_check
                >
                    "Check"
                </button>
                <button
                    class="reset-btn"
                    disabled=move || reference.with(Option::is_none)
                    on:click=move |_| ctx.trainer.update(|t| t.reset())
                >
                    "Reset"
                </button>
            </div>

            {move || report.get().map(|r| view! {
                <div class=grade_class(r.grade())>
                    {format!("{} / {} correct ({}%)", r.matches, r.total, r.percent)}
                </div>
            })}
        </section>
    }
}
