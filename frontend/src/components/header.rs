use gloo_timers::future::TimeoutFuture;
use leptos::*;

use crate::components::add_log;
use crate::config::{APP_NAME, HEALTH_POLL_INTERVAL_MS};
use crate::services::{check_health, BackendStatus};
use crate::types::{LogEntry, LogLevel};

/// Probe the backend once and publish the result.
///
/// Only transitions reach the activity log, so periodic polling stays quiet.
async fn refresh_status(
    status: ReadSignal<BackendStatus>,
    set_status: WriteSignal<BackendStatus>,
    set_logs: WriteSignal<Vec<LogEntry>>,
) {
    let result = check_health().await;
    let next = BackendStatus::from_result(&result);

    if next != status.get_untracked() {
        match &result {
            Ok(report) => {
                log::info!("Backend health: {}", report.status);
                let level = if report.is_configured() { LogLevel::Success } else { LogLevel::Warning };
                add_log(set_logs, level, &format!("🩺 {}", next.label()));
            }
            Err(e) => {
                log::warn!("Backend health check failed: {}", e);
                add_log(set_logs, LogLevel::Warning, &format!("🩺 {}", next.label()));
            }
        }
        set_status.set(next);
    }
}

#[component]
pub fn Header(set_logs: WriteSignal<Vec<LogEntry>>) -> impl IntoView {
    let (status, set_status) = create_signal(BackendStatus::Checking);

    spawn_local(async move {
        loop {
            refresh_status(status, set_status, set_logs).await;
            TimeoutFuture::new(HEALTH_POLL_INTERVAL_MS).await;
        }
    });

    let on_status_click = move |_| {
        log::info!("🩺 Re-checking backend...");
        spawn_local(refresh_status(status, set_status, set_logs));
    };

    view! {
        <header>
            <div class="header-left">
                <a href="#" class="logo">{APP_NAME}</a>
            </div>
            <div class="header-right">
                <div
                    class="backend-status"
                    on:click=on_status_click
                    style="cursor: pointer;"
                    title=move || match status.get() {
                        BackendStatus::Offline(reason) => reason,
                        _ => "Click to re-check".to_string(),
                    }
                >
                    <span class=move || status.with(BackendStatus::css_class)></span>
                    <span>{move || status.with(BackendStatus::label)}</span>
                </div>
            </div>
        </header>
    }
}
