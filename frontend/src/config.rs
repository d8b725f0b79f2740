//! Application configuration.
//!
//! Centralized configuration for the article review front end.
//! Values are fixed at build time; `LKB_API_BASE` may be set when running
//! `trunk build` to point the client at a backend on another origin.

/// Backend API base URL.
///
/// Empty means same origin, which is how the app is served in production
/// (the static bundle and `/api/*` live behind the same host).
pub const API_BASE: &str = match option_env!("LKB_API_BASE") {
    Some(base) => base,
    None => "",
};

/// Upload endpoint path.
pub const UPLOAD_PATH: &str = "/api/upload";

/// Health endpoint path.
pub const HEALTH_PATH: &str = "/api/health";

/// Multipart field name carrying the document.
pub const UPLOAD_FIELD: &str = "file";

/// The only media type accepted from drag & drop.
pub const PDF_MIME_TYPE: &str = "application/pdf";

/// Banner text when the server gives no `detail`.
pub const FALLBACK_ERROR: &str = "Parsing failed";

/// Banner text after the user aborts an upload.
pub const CANCELLED_MESSAGE: &str = "Upload cancelled";

/// Inline text when a dropped file is not a PDF.
pub const UNSUPPORTED_FILE_MESSAGE: &str = "Only PDF files can be analyzed";

/// Application name, shown in the header and page title.
pub const APP_NAME: &str = "Labor Law AI Cloud";

/// Delay between two backend health checks.
pub const HEALTH_POLL_INTERVAL_MS: u32 = 30_000;

/// Maximum logs to keep in memory.
pub const MAX_LOG_ENTRIES: usize = 100;

/// Full URL of the upload endpoint.
pub fn upload_url() -> String {
    join_url(API_BASE, UPLOAD_PATH)
}

/// Full URL of the health endpoint.
pub fn health_url() -> String {
    join_url(API_BASE, HEALTH_PATH)
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url_same_origin() {
        assert_eq!(join_url("", UPLOAD_PATH), "/api/upload");
    }

    #[test]
    fn test_join_url_strips_trailing_slash() {
        assert_eq!(
            join_url("http://localhost:8000/", HEALTH_PATH),
            "http://localhost:8000/api/health"
        );
    }
}
