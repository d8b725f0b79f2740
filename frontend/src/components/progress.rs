use leptos::*;

/// Shown while the backend is extracting articles.
#[component]
pub fn BusyIndicator() -> impl IntoView {
    view! {
        <div class="busy-indicator">
            <div class="progress-bar">
                <div class="progress-fill indeterminate"></div>
            </div>
            <p class="busy-text">"AI is extracting articles... please wait."</p>
        </div>
    }
}
