//! Legal Knowledge Base - Article Review Frontend
//!
//! A WebAssembly frontend for uploading legal code PDFs to the extraction
//! backend and reviewing the articles it returns.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (backend status)                                     │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── Hero (title, description)                              │
//! │  ├── UploadSection + LogsPanel                              │
//! │  └── ResultsSection (prompt | busy | error | articles)      │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Article records, API replies, logs, errors
//! - [`state`] - The upload-and-review state machine
//! - [`components`] - UI components (Header, Upload, Results, etc.)
//! - [`services`] - Backend communication (upload, health)

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use web_sys::File;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod state;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Articles
    ArticleRecord, ArticleMetadata,
    // Logs
    LogEntry, LogLevel,
    // API
    UploadReply, HealthReport, EnvCheck,
    // Errors
    AppError, AppResult,
};

// State
pub use state::{Panel, Phase, ReviewState, Selection, SelectionSource, UploadTicket};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application
// =============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_NAME/>
        <Router>
            <main>
                <Routes>
                    <Route path="/*any" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    let review = create_rw_signal(ReviewState::<File>::new());
    let (logs, set_logs) = create_signal(Vec::<LogEntry>::new());

    view! {
        <Header set_logs=set_logs/>

        <div class="container">
            <Hero/>

            <div class="workspace">
                <aside class="sidebar">
                    <UploadSection review=review set_logs=set_logs/>

                    <Show
                        when=move || !logs.with(Vec::is_empty)
                        fallback=|| view! { }
                    >
                        <LogsPanel logs=logs set_logs=set_logs/>
                    </Show>
                </aside>

                <ResultsSection review=review/>
            </div>
        </div>

        <Footer/>
    }
}
