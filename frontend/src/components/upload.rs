//! PDF upload component with drag & drop support.
//!
//! Handles file selection, upload to backend, and cancellation.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{AbortController, Event, File, HtmlInputElement};

use crate::components::add_log;
use crate::services::upload_pdf;
use crate::state::{ReviewState, Selection, SelectionSource};
use crate::types::{LogEntry, LogLevel};

fn selection_from_file(file: File) -> Selection<File> {
    Selection {
        name: file.name(),
        media_type: file.type_(),
        size_bytes: file.size().max(0.0) as u64,
        file,
    }
}

/// Human readable file size.
pub fn format_size(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    let b = bytes as f64;
    if b >= MB {
        format!("{:.1} MB", b / MB)
    } else if b >= KB {
        format!("{:.0} KB", b / KB)
    } else {
        format!("{} B", bytes)
    }
}

#[component]
pub fn UploadSection(
    review: RwSignal<ReviewState<File>>,
    set_logs: WriteSignal<Vec<LogEntry>>,
) -> impl IntoView {
    let (drag_over, set_drag_over) = create_signal(false);
    let abort = store_value(None::<AbortController>);

    let is_busy = move || review.with(|state| state.is_busy());

    let select = move |file: File, source: SelectionSource| {
        let selection = selection_from_file(file);
        let summary = format!("📄 Selected {} ({})", selection.name, format_size(selection.size_bytes));

        match review.try_update(|state| state.select_file(selection, source)) {
            Some(Ok(())) => add_log(set_logs, LogLevel::Info, &summary),
            Some(Err(e)) => {
                log::warn!("Selection rejected: {}", e);
                add_log(set_logs, LogLevel::Warning, &format!("⚠️ {}", e.user_message()));
            }
            None => {}
        }
    };

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            select(file, SelectionSource::Picker);
        }
        // Lets the same file be picked again after a failure
        input.set_value("");
    };

    let on_drop = move |ev: ev::DragEvent| {
        ev.prevent_default();
        set_drag_over.set(false);
        if let Some(file) = ev
            .data_transfer()
            .and_then(|transfer| transfer.files())
            .and_then(|files| files.get(0))
        {
            select(file, SelectionSource::Drop);
        }
    };

    let on_drag_over = move |ev: ev::DragEvent| {
        ev.prevent_default();
        set_drag_over.set(true);
    };

    let on_analyze = move |_| {
        let Some(ticket) = review.try_update(|state| state.begin_upload()).flatten() else {
            return;
        };

        let controller = match AbortController::new() {
            Ok(controller) => Some(controller),
            Err(e) => {
                log::warn!("AbortController unavailable, upload cannot be cancelled: {:?}", e);
                None
            }
        };
        let signal = controller.as_ref().map(|c| c.signal());
        abort.set_value(controller);

        add_log(set_logs, LogLevel::Info, &format!("📤 Uploading {}...", ticket.name));

        spawn_local(async move {
            let outcome = upload_pdf(ticket.file, signal.as_ref()).await;

            let (level, message) = match &outcome {
                Ok(articles) => (
                    LogLevel::Success,
                    format!("✅ {} articles extracted and stored", articles.len()),
                ),
                Err(e) => {
                    log::error!("Upload failed: {}", e);
                    (LogLevel::Error, format!("❌ Upload failed: {}", e.user_message()))
                }
            };

            let applied = review
                .try_update(|state| state.finish_upload(ticket.request, outcome))
                .unwrap_or(false);

            if applied {
                abort.set_value(None);
                add_log(set_logs, level, &message);
            } else {
                log::info!("Dropping response of abandoned request #{}", ticket.request);
            }
        });
    };

    let on_cancel = move |_| {
        if let Some(request) = review.try_update(|state| state.cancel_upload()).flatten() {
            abort.update_value(|controller| {
                if let Some(controller) = controller.take() {
                    controller.abort();
                }
            });
            log::warn!("🚫 Request #{} cancelled", request);
            add_log(set_logs, LogLevel::Warning, "🚫 Upload cancelled");
        }
    };

    // Picking or dropping mid-flight only replaces the selection
    let trigger_file_input = move |_| {
        if let Some(input) = document()
            .get_element_by_id("fileInput")
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        {
            input.click();
        }
    };

    view! {
        <div class="upload-section">
            <h2 class="upload-title">"Import Code"</h2>

            <div
                class="upload-zone"
                class:drag-over=move || drag_over.get()
                on:click=trigger_file_input
                on:dragover=on_drag_over
                on:dragleave=move |_| set_drag_over.set(false)
                on:drop=on_drop
            >
                <div class="upload-icon">"📄"</div>
                <div class="upload-text">
                    {move || review.with(|state| match state.selection() {
                        Some(selection) => format!("{} • {}", selection.name, format_size(selection.size_bytes)),
                        None => "Drop a PDF here".to_string(),
                    })}
                </div>
                <div class="upload-hint">"or click to browse"</div>
            </div>

            <Show
                when=move || review.with(|state| state.selection_error().is_some())
                fallback=|| view! { }
            >
                <div class="error-message">
                    {move || review.with(|state| state.selection_error().unwrap_or_default().to_string())}
                </div>
            </Show>

            <input
                type="file"
                id="fileInput"
                accept="application/pdf,.pdf"
                style="display:none"
                on:change=on_file_change
            />

            <button
                class="btn btn-primary"
                on:click=on_analyze
                disabled=move || !review.with(|state| state.can_submit())
            >
                {move || if is_busy() { "Analyzing..." } else { "Analyze & Store" }}
            </button>

            <Show
                when=is_busy
                fallback=|| view! { }
            >
                <button class="btn btn-secondary" on:click=on_cancel>"Cancel"</button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2 KB");
        assert_eq!(format_size(5 * 1024 * 1024 + 512 * 1024), "5.5 MB");
    }
}
