//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **Article Types** - Records extracted by the backend
//! - **Log Types** - Client-side activity log
//! - **API Types** - Backend response structures
//! - **Error Types** - Frontend error handling

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::config::{CANCELLED_MESSAGE, FALLBACK_ERROR, UNSUPPORTED_FILE_MESSAGE};

// =============================================================================
// Article Types
// =============================================================================

/// Category shown when the backend sends none.
pub const DEFAULT_CATEGORY: &str = "General";

/// One legal code section extracted from the uploaded document.
///
/// Fields are displayed as received. Article numbers arrive as integers from
/// some backends and as strings (`"10A"`, `"PREAMBLE"`) from others, so both
/// are kept as text. Off-type values degrade to defaults instead of failing
/// the whole reply.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawArticleRecord")]
pub struct ArticleRecord {
    /// Article or section identifier
    pub article_number: String,
    /// Number before renumbering, if any
    pub old_article_number: Option<String>,
    /// Heading line
    pub title: String,
    /// Body text, newlines significant
    pub content: String,
    /// Whether the section was repealed
    pub is_repealed: bool,
    /// Source metadata
    pub metadata: Option<ArticleMetadata>,
    /// Extraction time, as sent by the backend
    pub timestamp: Option<String>,
}

/// Wire form of [`ArticleRecord`]; `section_id` is the ordinance backend's
/// name for the article number.
#[derive(Deserialize)]
struct RawArticleRecord {
    #[serde(default, deserialize_with = "optional_label")]
    article_number: Option<String>,
    #[serde(default, deserialize_with = "optional_label")]
    section_id: Option<String>,
    #[serde(default, deserialize_with = "optional_label")]
    old_article_number: Option<String>,
    #[serde(default, deserialize_with = "label")]
    title: String,
    #[serde(default, deserialize_with = "label")]
    content: String,
    #[serde(default, deserialize_with = "flag")]
    is_repealed: bool,
    #[serde(default, deserialize_with = "lenient_metadata")]
    metadata: Option<ArticleMetadata>,
    #[serde(default, deserialize_with = "optional_label")]
    timestamp: Option<String>,
}

impl From<RawArticleRecord> for ArticleRecord {
    fn from(raw: RawArticleRecord) -> Self {
        let article_number = raw
            .article_number
            .filter(|n| !n.is_empty())
            .or(raw.section_id)
            .unwrap_or_default();

        Self {
            article_number,
            old_article_number: raw.old_article_number,
            title: raw.title,
            content: raw.content,
            is_repealed: raw.is_repealed,
            metadata: raw.metadata,
            timestamp: raw.timestamp,
        }
    }
}

impl ArticleRecord {
    /// Corpus category, `"General"` when absent.
    pub fn category(&self) -> &str {
        self.metadata
            .as_ref()
            .and_then(|m| m.corpus_category.as_deref())
            .filter(|c| !c.is_empty())
            .unwrap_or(DEFAULT_CATEGORY)
    }

    /// Source page, `0` when absent.
    pub fn page_number(&self) -> u32 {
        self.metadata
            .as_ref()
            .and_then(|m| m.page_number)
            .unwrap_or(0)
    }

    /// True when the backend reports a previous number for this article.
    pub fn is_renumbered(&self) -> bool {
        self.old_article_number
            .as_deref()
            .is_some_and(|old| !old.is_empty() && old != self.article_number)
    }
}

/// Metadata attached to an article.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ArticleMetadata {
    #[serde(default, deserialize_with = "optional_label")]
    pub corpus_category: Option<String>,
    #[serde(default, deserialize_with = "page")]
    pub page_number: Option<u32>,
    #[serde(default, deserialize_with = "optional_label")]
    pub source_file: Option<String>,
    #[serde(default, deserialize_with = "optional_label")]
    pub jurisdiction: Option<String>,
    #[serde(default, deserialize_with = "optional_label")]
    pub file_type: Option<String>,
}

/// JavaScript truthiness of a JSON value.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|v| v != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
        Value::Null => false,
    }
}

fn label_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

/// Page number from an integer, float or numeric string; anything else is absent.
fn page_from_value(value: &Value) -> Option<u32> {
    let page = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    (page.is_finite() && page >= 0.0 && page <= u32::MAX as f64).then(|| page as u32)
}

fn label<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(label_text(Value::deserialize(deserializer)?).unwrap_or_default())
}

fn optional_label<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Ok(label_text(Value::deserialize(deserializer)?))
}

fn flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(is_truthy(&Value::deserialize(deserializer)?))
}

fn page<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u32>, D::Error> {
    Ok(page_from_value(&Value::deserialize(deserializer)?))
}

fn lenient_metadata<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<ArticleMetadata>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    if value.is_object() {
        Ok(serde_json::from_value(value).ok())
    } else {
        Ok(None)
    }
}

// =============================================================================
// Log Types
// =============================================================================

/// Log severity level.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum LogLevel {
    /// Informational message
    Info,
    /// Success/completion message
    Success,
    /// Error message
    Error,
    /// Warning message
    Warning,
}

impl LogLevel {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            LogLevel::Info => "log-info",
            LogLevel::Success => "log-success",
            LogLevel::Error => "log-error",
            LogLevel::Warning => "log-warning",
        }
    }
}

/// A single entry of the activity log.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Severity level
    pub level: LogLevel,
    /// Log message
    pub message: String,
    /// Timestamp string (HH:MM:SS)
    pub timestamp: String,
}

impl LogEntry {
    /// Entry stamped with the local wall clock.
    pub fn now(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            timestamp: chrono::Local::now().format("%H:%M:%S").to_string(),
        }
    }
}

/// Append an entry, dropping the oldest ones beyond `max`.
pub fn push_log(logs: &mut Vec<LogEntry>, entry: LogEntry, max: usize) {
    logs.push(entry);
    if logs.len() > max {
        let excess = logs.len() - max;
        logs.drain(..excess);
    }
}

// =============================================================================
// API Response Types
// =============================================================================

/// Body of `POST /api/upload`, success or failure alike.
///
/// Every field is optional: the backend reports failures through `detail`
/// and may omit `success` entirely.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct UploadReply {
    #[serde(default)]
    pub success: Value,
    #[serde(default)]
    pub articles: Option<Vec<ArticleRecord>>,
    #[serde(default)]
    pub detail: Value,
}

impl UploadReply {
    /// Truthiness of `success`, JavaScript style.
    pub fn succeeded(&self) -> bool {
        is_truthy(&self.success)
    }

    /// Human readable failure reason, if the server gave one.
    pub fn detail_message(&self) -> Option<String> {
        detail_message(&self.detail)
    }
}

/// Extract a message from a `detail` field.
///
/// Accepts a plain string or a list of `{ "msg": ... }` objects.
pub fn detail_message(detail: &Value) -> Option<String> {
    match detail {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Array(items) => {
            let parts: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str).or(item.as_str()))
                .collect();
            if parts.is_empty() {
                None
            } else {
                Some(parts.join("; "))
            }
        }
        _ => None,
    }
}

/// Body of `GET /api/health`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct HealthReport {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub env_check: Option<EnvCheck>,
}

/// Backend configuration flags reported by the health endpoint.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct EnvCheck {
    #[serde(default)]
    pub api_key_loaded: bool,
    #[serde(default)]
    pub db_url_loaded: bool,
}

impl HealthReport {
    /// True unless the backend says a credential is missing.
    pub fn is_configured(&self) -> bool {
        self.env_check
            .as_ref()
            .map_or(true, |env| env.api_key_loaded && env.db_url_loaded)
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// `Display` is the diagnostic form written to the console;
/// [`AppError::user_message`] is what the error banner shows.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum AppError {
    /// A dropped file was not a PDF.
    #[error("Unsupported file type '{media_type}' for {name}")]
    UnsupportedFile { name: String, media_type: String },

    /// The request never produced a response.
    #[error("HTTP request failed: {0}")]
    Transport(String),

    /// The server answered but did not report success.
    #[error("Server rejected upload ({status}): {}", .detail.as_deref().unwrap_or("no detail"))]
    Rejected { status: u16, detail: Option<String> },

    /// The response body could not be decoded.
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// The user aborted the request.
    #[error("Upload cancelled by user")]
    Cancelled,

    /// A browser API call failed.
    #[error("Browser API error: {0}")]
    Browser(String),
}

impl AppError {
    /// Text shown to the user for this failure.
    pub fn user_message(&self) -> String {
        match self {
            AppError::UnsupportedFile { .. } => UNSUPPORTED_FILE_MESSAGE.to_string(),
            AppError::Rejected { detail: Some(detail), .. } => detail.clone(),
            AppError::Cancelled => CANCELLED_MESSAGE.to_string(),
            _ => FALLBACK_ERROR.to_string(),
        }
    }
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;
