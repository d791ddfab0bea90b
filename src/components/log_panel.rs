//! Log Panel Component
//!
//! Tail of the in-memory log at the foot of the sidebar. Useful on phones,
//! where there is no console to read store errors from.

use leptos::prelude::*;

/// Lines shown; the buffer itself keeps more
const TAIL: usize = 100;

#[component]
pub fn LogPanel() -> impl IntoView {
    let (lines, set_lines) = signal(Vec::<String>::new());

    let refresh = move || {
        let mut recent = rolling_logger::recent_lines();
        let skip = recent.len().saturating_sub(TAIL);
        recent.drain(..skip);
        set_lines.set(recent);
    };

    view! {
        <details class="log-panel" on:toggle=move |_| refresh()>
            <summary>"Recent log"</summary>
            <button class="refresh-btn" on:click=move |_| refresh()>"Refresh"</button>
            <pre class="log-lines">{move || lines.with(|l| l.join("\n"))}</pre>
        </details>
    }
}
