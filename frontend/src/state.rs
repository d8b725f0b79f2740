//! Upload-and-review view state.
//!
//! Everything the page shows is derived from one [`ReviewState`]. Event
//! handlers mutate it through the methods below; the components only read
//! it. The type is generic over the file handle so the transitions can be
//! tested without a browser (`web_sys::File` in the app, plain values in
//! tests).

use crate::config::{PDF_MIME_TYPE, UNSUPPORTED_FILE_MESSAGE};
use crate::types::{AppError, AppResult, ArticleRecord};

/// Where a file selection came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionSource {
    /// The hidden `<input type="file">`
    Picker,
    /// Drag & drop onto the upload zone
    Drop,
}

/// The file currently chosen for upload.
#[derive(Clone, Debug, PartialEq)]
pub struct Selection<F> {
    pub file: F,
    pub name: String,
    pub media_type: String,
    pub size_bytes: u64,
}

/// Request lifecycle phase.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Nothing submitted yet
    Idle,
    /// A request is outstanding
    Loading { request: u64 },
    /// Last request returned articles
    Success,
    /// Last request failed; holds the banner text
    Error(String),
}

/// Which panel the results area shows. Exactly one at a time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Panel {
    EmptyPrompt,
    Busy,
    ErrorBanner(String),
    ArticleList,
}

/// Handle for one submitted upload.
#[derive(Clone, Debug, PartialEq)]
pub struct UploadTicket<F> {
    pub request: u64,
    pub file: F,
    pub name: String,
}

/// State of the upload-and-review page.
#[derive(Clone, Debug)]
pub struct ReviewState<F> {
    selection: Option<Selection<F>>,
    selection_error: Option<String>,
    phase: Phase,
    articles: Vec<ArticleRecord>,
    next_request: u64,
}

impl<F> Default for ReviewState<F> {
    fn default() -> Self {
        Self {
            selection: None,
            selection_error: None,
            phase: Phase::Idle,
            articles: Vec::new(),
            next_request: 0,
        }
    }
}

impl<F: Clone> ReviewState<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> Option<&Selection<F>> {
        self.selection.as_ref()
    }

    pub fn selection_error(&self) -> Option<&str> {
        self.selection_error.as_deref()
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn articles(&self) -> &[ArticleRecord] {
        &self.articles
    }

    pub fn is_busy(&self) -> bool {
        matches!(self.phase, Phase::Loading { .. })
    }

    /// Whether the analyze control should be enabled.
    pub fn can_submit(&self) -> bool {
        self.selection.is_some() && !self.is_busy()
    }

    /// Replace the selected file.
    ///
    /// Dropped files must declare exactly `application/pdf`; anything else is
    /// rejected without touching the current selection or the articles.
    /// Picking a file also dismisses the banner of a previous failure.
    pub fn select_file(
        &mut self,
        selection: Selection<F>,
        source: SelectionSource,
    ) -> AppResult<()> {
        if source == SelectionSource::Drop && selection.media_type != PDF_MIME_TYPE {
            self.selection_error = Some(UNSUPPORTED_FILE_MESSAGE.to_string());
            return Err(AppError::UnsupportedFile {
                name: selection.name,
                media_type: selection.media_type,
            });
        }

        self.selection = Some(selection);
        self.selection_error = None;
        if matches!(self.phase, Phase::Error(_)) {
            self.phase = Phase::Idle;
        }
        Ok(())
    }

    /// Start an upload of the selected file.
    ///
    /// Returns `None` (and changes nothing) when no file is selected or a
    /// request is already in flight.
    pub fn begin_upload(&mut self) -> Option<UploadTicket<F>> {
        if self.is_busy() {
            return None;
        }
        let selection = self.selection.as_ref()?;

        self.next_request += 1;
        let ticket = UploadTicket {
            request: self.next_request,
            file: selection.file.clone(),
            name: selection.name.clone(),
        };
        self.phase = Phase::Loading { request: ticket.request };
        Some(ticket)
    }

    /// Apply the outcome of request `request`.
    ///
    /// Outcomes of requests that are no longer current (cancelled, or
    /// superseded) are dropped and `false` is returned. On failure the
    /// article list keeps its previous content.
    pub fn finish_upload(&mut self, request: u64, outcome: AppResult<Vec<ArticleRecord>>) -> bool {
        if self.phase != (Phase::Loading { request }) {
            return false;
        }
        match outcome {
            Ok(articles) => {
                self.articles = articles;
                self.phase = Phase::Success;
            }
            Err(err) => {
                self.phase = Phase::Error(err.user_message());
            }
        }
        true
    }

    /// Abandon the in-flight request, if any, returning its id.
    pub fn cancel_upload(&mut self) -> Option<u64> {
        match self.phase {
            Phase::Loading { request } => {
                self.phase = Phase::Error(AppError::Cancelled.user_message());
                Some(request)
            }
            _ => None,
        }
    }

    /// Panel to render for the current state.
    pub fn panel(&self) -> Panel {
        match &self.phase {
            Phase::Loading { .. } => Panel::Busy,
            Phase::Error(message) => Panel::ErrorBanner(message.clone()),
            Phase::Idle | Phase::Success if self.articles.is_empty() => Panel::EmptyPrompt,
            Phase::Idle | Phase::Success => Panel::ArticleList,
        }
    }
}
