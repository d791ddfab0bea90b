//! Poker Matrix Component
//!
//! 13x13 starting-hand grid painted by click, mouse drag and touch drag.
//! Stroke state lives in the session's paint engine; this component only
//! turns pointer events into begin/continue/end calls.

use leptos::ev;
use leptos::html::Div;
use leptos::prelude::*;

use range_core::domain::{hand, HandKind, GRID_SIZE};
use range_core::engine::{cell_at, CellStatus, GridRect, PaintEngine};

/// Space between cells; the grid's inline style uses the same value
const CELL_GAP_PX: f64 = 2.0;

fn hand_class(kind: HandKind) -> &'static str {
    match kind {
        HandKind::Pair => "pair",
        HandKind::Suited => "suited",
        HandKind::Offsuit => "offsuit",
    }
}

fn status_class(status: Option<CellStatus>) -> &'static str {
    match status {
        Some(CellStatus::Correct) => " correct",
        Some(CellStatus::Incorrect) => " incorrect",
        Some(CellStatus::Neutral) => " neutral",
        None => "",
    }
}

/// Cell under the first touch point, if it is over the grid
fn touched_cell(grid: &web_sys::Element, ev: &web_sys::TouchEvent) -> Option<(usize, usize)> {
    let touch = ev.touches().get(0)?;
    let bounds = grid.get_bounding_client_rect();
    let rect = GridRect {
        left: bounds.left(),
        top: bounds.top(),
        width: bounds.width(),
        height: bounds.height(),
        gap: CELL_GAP_PX,
    };
    cell_at(&rect, touch.client_x() as f64, touch.client_y() as f64)
}

#[component]
pub fn PokerMatrix(
    #[prop(into)] engine: Signal<PaintEngine>,
    #[prop(into)] on_begin: Callback<(usize, usize)>,
    #[prop(into)] on_continue: Callback<(usize, usize)>,
    #[prop(into)] on_end: Callback<()>,
) -> impl IntoView {
    let grid_ref = NodeRef::<Div>::new();

    // Strokes end wherever the pointer is released, or when it leaves the window
    let end_if_dragging = move || {
        if engine.with_untracked(|e| e.is_dragging()) {
            on_end.run(());
        }
    };
    let handles = [
        window_event_listener(ev::mouseup, move |_| end_if_dragging()),
        window_event_listener(ev::touchend, move |_| end_if_dragging()),
        window_event_listener(ev::touchcancel, move |_| end_if_dragging()),
        window_event_listener(ev::blur, move |_| end_if_dragging()),
        window_event_listener(ev::mouseout, move |ev| {
            if ev.related_target().is_none() {
                end_if_dragging();
            }
        }),
    ];
    on_cleanup(move || {
        for handle in handles {
            handle.remove();
        }
    });

    let on_touchmove = move |ev: web_sys::TouchEvent| {
        if !engine.with_untracked(|e| e.is_dragging()) {
            return;
        }
        ev.prevent_default();
        let Some(grid) = grid_ref.get_untracked() else { return };
        if let Some(cell) = touched_cell(&grid, &ev) {
            on_continue.run(cell);
        }
    };

    let locked = move || engine.with(|e| e.is_locked());

    view! {
        <div
            class=move || if locked() { "poker-matrix locked" } else { "poker-matrix" }
            style=format!("gap: {}px;", CELL_GAP_PX)
            node_ref=grid_ref
            on:touchmove=on_touchmove
            on:touchend=move |_| on_end.run(())
        >
            {(0..GRID_SIZE).map(move |row| {
                (0..GRID_SIZE).map(move |col| {
                    let label = hand::HandLabel::at(row, col);
                    let base = hand_class(label.kind());
                    let index = hand::index(row, col);

                    let class = move || engine.with(|e| {
                        let painted = e.grid().get(index).is_some_and(|c| c.is_painted());
                        format!(
                            "matrix-cell {}{}{}",
                            base,
                            if painted { " painted" } else { "" },
                            status_class(e.cell_status(index)),
                        )
                    });
                    let style = move || engine.with(|e| {
                        e.grid()
                            .get(index)
                            .and_then(|c| c.color())
                            .map(|color| format!("background-color: {};", color))
                            .unwrap_or_default()
                    });

                    view! {
                        <div
                            class=class
                            style=style
                            on:mousedown=move |ev: web_sys::MouseEvent| {
                                if ev.button() == 0 {
                                    ev.prevent_default();
                                    on_begin.run((row, col));
                                }
                            }
                            on:mouseenter=move |_| {
                                if engine.with_untracked(|e| e.is_dragging()) {
                                    on_continue.run((row, col));
                                }
                            }
                            on:mouseup=move |_| on_end.run(())
                            on:touchstart=move |ev: web_sys::TouchEvent| {
                                ev.prevent_default();
                                on_begin.run((row, col));
                            }
                        >
                            {label.to_string()}
                        </div>
                    }
                }).collect_view()
            }).collect_view()}
        </div>
    }
}
