//! Leptos DragDrop Utilities
//!
//! Simple drag-and-drop for Leptos using mouse events.
//! Uses movement threshold to distinguish click from drag.
//!
//! Generic over the dragged item `I` and the drop target `T`. The crate only
//! tracks pointer state; deciding what a drop means is left to a [`DragSink`].

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Receives drag lifecycle events
pub trait DragSink<I, T>: Clone + 'static {
    /// Pointer moved past the threshold with `item` pressed
    fn started(&self, _item: I) {}

    /// Pointer entered `target` while dragging `item`
    fn entered(&self, _item: I, _target: T) {}

    /// Pointer left `target`
    fn left(&self, _target: T) {}

    /// Released over `target`
    fn dropped(&self, item: I, target: T);

    /// Released outside any target, or the window lost focus
    fn cancelled(&self) {}
}

/// DnD state signals
pub struct DndSignals<I: 'static, T: 'static> {
    pub dragging: RwSignal<Option<I>>,
    pub drop_target: RwSignal<Option<T>>,
    pub drag_just_ended: RwSignal<bool>,
    /// Pending item (mousedown but not yet dragging)
    pub pending: RwSignal<Option<I>>,
    /// Start position for movement detection
    pub start: RwSignal<(i32, i32)>,
}

impl<I, T> Clone for DndSignals<I, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<I, T> Copy for DndSignals<I, T> {}

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

/// Whether the pointer moved far enough from `start` to begin a drag
pub fn exceeds_threshold(start: (i32, i32), current: (i32, i32)) -> bool {
    let dx = (current.0 - start.0).abs();
    let dy = (current.1 - start.1).abs();
    dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX
}

pub fn create_dnd_signals<I, T>() -> DndSignals<I, T>
where
    I: Copy + Send + Sync + 'static,
    T: Copy + Send + Sync + 'static,
{
    DndSignals {
        dragging: RwSignal::new(None),
        drop_target: RwSignal::new(None),
        drag_just_ended: RwSignal::new(false),
        pending: RwSignal::new(None),
        start: RwSignal::new((0, 0)),
    }
}

impl<I, T> DndSignals<I, T>
where
    I: Copy + PartialEq + Send + Sync + 'static,
    T: Copy + PartialEq + Send + Sync + 'static,
{
    pub fn is_dragging(&self) -> bool {
        self.dragging.with(Option::is_some)
    }

    /// Whether `item` is the one being dragged (tracked, for styling)
    pub fn is_dragged(&self, item: I) -> bool {
        self.dragging.with(|d| *d == Some(item))
    }

    /// Whether `target` is hovered (tracked, for styling)
    pub fn is_target(&self, target: T) -> bool {
        self.drop_target.with(|t| *t == Some(target))
    }
}

/// End drag operation
pub fn end_drag<I, T>(dnd: &DndSignals<I, T>)
where
    I: Send + Sync + 'static,
    T: Send + Sync + 'static,
{
    dnd.dragging.set(None);
    dnd.drop_target.set(None);
    dnd.pending.set(None);
    dnd.drag_just_ended.set(true);

    // swallow the click that follows the mouseup of a drag
    if let Some(win) = web_sys::window() {
        let clear = dnd.drag_just_ended;
        let cb = wasm_bindgen::closure::Closure::<dyn FnMut()>::new(move || {
            clear.set(false);
        });
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), 100);
        cb.forget();
    }
}

/// Create mousedown handler for draggable items
/// Records pending drag with start position
pub fn make_on_mousedown<I, T>(dnd: DndSignals<I, T>, item: I) -> impl Fn(web_sys::MouseEvent) + Copy + 'static
where
    I: Copy + Send + Sync + 'static,
    T: Send + Sync + 'static,
{
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 {
            // Ignore if target is input or button
            if let Some(target) = ev.target() {
                if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
            }
            dnd.pending.set(Some(item));
            dnd.start.set((ev.client_x(), ev.client_y()));
        }
    }
}

/// Create mouseenter handler for drop targets
pub fn make_on_mouseenter<I, T, S>(dnd: DndSignals<I, T>, target: T, sink: S) -> impl Fn(web_sys::MouseEvent) + Clone + 'static
where
    I: Copy + Send + Sync + 'static,
    T: Copy + Send + Sync + 'static,
    S: DragSink<I, T>,
{
    move |_ev: web_sys::MouseEvent| {
        if let Some(item) = dnd.dragging.get_untracked() {
            dnd.drop_target.set(Some(target));
            sink.entered(item, target);
        }
    }
}

/// Create mouseleave handler for drop targets
pub fn make_on_mouseleave<I, T, S>(dnd: DndSignals<I, T>, target: T, sink: S) -> impl Fn(web_sys::MouseEvent) + Clone + 'static
where
    I: Copy + Send + Sync + 'static,
    T: Copy + PartialEq + Send + Sync + 'static,
    S: DragSink<I, T>,
{
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging.get_untracked().is_some() && dnd.drop_target.get_untracked() == Some(target) {
            dnd.drop_target.set(None);
            sink.left(target);
        }
    }
}

/// Bind document mousemove: starts the drag once the pointer moved enough
fn bind_global_mousemove<I, T, S>(dnd: DndSignals<I, T>, sink: S)
where
    I: Copy + Send + Sync + 'static,
    T: Send + Sync + 'static,
    S: DragSink<I, T>,
{
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let Some(pending) = dnd.pending.get_untracked() else { return };
        if dnd.dragging.with_untracked(Option::is_some) {
            return;
        }
        if exceeds_threshold(dnd.start.get_untracked(), (ev.client_x(), ev.client_y())) {
            dnd.dragging.set(Some(pending));
            sink.started(pending);
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
        }
    }
    on_mousemove.forget();
}

/// Bind document mouseup (drop detection), document mousemove (drag start)
/// and window blur (cancel)
pub fn bind_global_handlers<I, T, S>(dnd: DndSignals<I, T>, sink: S)
where
    I: Copy + Send + Sync + 'static,
    T: Copy + Send + Sync + 'static,
    S: DragSink<I, T>,
{
    use wasm_bindgen::closure::Closure;

    let up_sink = sink.clone();
    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let dragging = dnd.dragging.get_untracked();
        let target = dnd.drop_target.get_untracked();

        match (dragging, target) {
            (Some(item), Some(target)) => {
                end_drag(&dnd);
                up_sink.dropped(item, target);
            }
            (Some(_), None) => {
                end_drag(&dnd);
                up_sink.cancelled();
            }
            // plain click: the click event fires on the element as usual
            (None, _) => dnd.pending.set(None),
        }
    });

    let blur_sink = sink.clone();
    let on_blur = Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| {
        if dnd.dragging.get_untracked().is_some() || dnd.pending.get_untracked().is_some() {
            end_drag(&dnd);
            blur_sink.cancelled();
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
        }
        let _ = win.add_event_listener_with_callback("blur", on_blur.as_ref().unchecked_ref());
    }
    on_mouseup.forget();
    on_blur.forget();

    bind_global_mousemove(dnd, sink);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold() {
        assert!(!exceeds_threshold((10, 10), (10, 10)));
        assert!(!exceeds_threshold((10, 10), (15, 5)));
        assert!(exceeds_threshold((10, 10), (16, 10)));
        assert!(exceeds_threshold((10, 10), (10, 4)));
    }
}
