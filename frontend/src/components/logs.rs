//! Activity log panel.
//!
//! Keeps a bounded, timestamped trail of what happened in this session
//! (selections, uploads, backend status changes) with auto-scroll support.

use leptos::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::config::MAX_LOG_ENTRIES;
use crate::types::{push_log, LogEntry, LogLevel};

/// Request animation frame helper for smooth scrolling
fn request_animation_frame(f: impl FnOnce() + 'static) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let closure = Closure::once(f);
    if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
        log::warn!("requestAnimationFrame failed: {:?}", e);
    }
    closure.forget();
}

/// Append a message to the activity log and mirror it to the console.
pub fn add_log(set_logs: WriteSignal<Vec<LogEntry>>, level: LogLevel, message: &str) {
    set_logs.update(|logs| {
        push_log(logs, LogEntry::now(level, message), MAX_LOG_ENTRIES);
    });

    log::info!("{}", message);
}

#[component]
pub fn LogsPanel(
    /// Signal for logs data
    logs: ReadSignal<Vec<LogEntry>>,
    /// Set logs signal (for clearing)
    set_logs: WriteSignal<Vec<LogEntry>>,
) -> impl IntoView {
    let logs_container = create_node_ref::<leptos::html::Div>();

    create_effect(move |_| {
        let _ = logs.get();
        if let Some(container) = logs_container.get() {
            request_animation_frame(move || {
                container.set_scroll_top(container.scroll_height());
            });
        }
    });

    view! {
        <div class="logs-panel">
            <div class="logs-header">
                <span class="logs-title">"📋 Activity"</span>
                <button
                    class="logs-clear"
                    on:click=move |_| set_logs.set(vec![])
                >
                    "Clear"
                </button>
            </div>
            <div class="logs-content" node_ref=logs_container>
                {move || logs.get().into_iter().map(|entry| {
                    view! {
                        <div class=format!("log-entry {}", entry.level.css_class())>
                            <span class="log-time">"[" {entry.timestamp} "] "</span>
                            {entry.message}
                        </div>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
