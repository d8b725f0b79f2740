//! HTTP service uploading a PDF to the extraction backend.

use gloo_net::http::Request;
use web_sys::{AbortSignal, File, FormData};

use crate::config::{upload_url, UPLOAD_FIELD};
use crate::types::{AppError, AppResult, ArticleRecord, UploadReply};

/// Upload a PDF and return the articles the backend extracted.
///
/// One `POST` with a single multipart field, no extra headers and no retry.
/// Passing an `AbortSignal` lets the caller cancel the request; an aborted
/// request resolves to [`AppError::Cancelled`].
pub async fn upload_pdf(file: File, signal: Option<&AbortSignal>) -> AppResult<Vec<ArticleRecord>> {
    let form_data =
        FormData::new().map_err(|e| AppError::Browser(format!("Failed to create FormData: {:?}", e)))?;

    form_data
        .append_with_blob(UPLOAD_FIELD, &file)
        .map_err(|e| AppError::Browser(format!("Failed to append file: {:?}", e)))?;

    let url = upload_url();
    log::debug!("POST {} ({} bytes)", url, file.size());

    let request = Request::post(&url)
        .abort_signal(signal)
        .body(form_data)
        .map_err(|e| AppError::Browser(format!("Failed to build request: {}", e)))?;

    let response = request.send().await.map_err(|e| {
        if signal.is_some_and(|s| s.aborted()) {
            AppError::Cancelled
        } else {
            AppError::Transport(e.to_string())
        }
    })?;

    let status = response.status();
    let body = response.text().await.map_err(|e| {
        if signal.is_some_and(|s| s.aborted()) {
            AppError::Cancelled
        } else {
            AppError::Transport(e.to_string())
        }
    })?;

    interpret_reply(response.ok(), status, &body)
}

/// Map an upload response to articles or an error.
///
/// Only a 2xx response whose JSON body has a truthy `success` counts as a
/// success; `articles` defaults to empty. Everything else is rejected with
/// the server's `detail` when one can be found.
pub fn interpret_reply(ok: bool, status: u16, body: &str) -> AppResult<Vec<ArticleRecord>> {
    let reply = serde_json::from_str::<UploadReply>(body);

    if !ok {
        let detail = reply.ok().and_then(|r| r.detail_message());
        return Err(AppError::Rejected { status, detail });
    }

    let reply = reply.map_err(|e| AppError::Decode(e.to_string()))?;
    if reply.succeeded() {
        Ok(reply.articles.unwrap_or_default())
    } else {
        Err(AppError::Rejected {
            status,
            detail: reply.detail_message(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FALLBACK_ERROR;

    #[test]
    fn test_success_response() {
        let json = r#"{
            "success": true,
            "articles": [
                {
                    "article_number": "1",
                    "title": "Scope",
                    "content": "...",
                    "is_repealed": false,
                    "metadata": {"corpus_category": "General", "page_number": 3}
                },
                {
                    "article_number": 2,
                    "old_article_number": 4,
                    "title": "Definitions",
                    "content": "As used in this Code:\n(a) ...",
                    "is_repealed": true
                }
            ]
        }"#;

        let articles = interpret_reply(true, 200, json).unwrap();
        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].title, "Scope");
        assert_eq!(articles[0].page_number(), 3);
        assert_eq!(articles[1].article_number, "2");
        assert!(articles[1].is_repealed);
    }

    #[test]
    fn test_off_type_record_keeps_whole_reply() {
        let json = r#"{
            "success": true,
            "articles": [
                {"article_number": "1", "title": "Scope", "content": "...", "metadata": {"page_number": 3}},
                {"article_number": "2", "title": "Coverage", "content": "...", "is_repealed": 0,
                 "metadata": {"page_number": "4", "corpus_category": null}}
            ]
        }"#;

        let articles = interpret_reply(true, 200, json).unwrap();
        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].page_number(), 3);
        assert_eq!(articles[1].page_number(), 4);
        assert!(!articles[1].is_repealed);
        assert_eq!(articles[1].category(), "General");
    }

    #[test]
    fn test_record_with_both_number_keys_is_accepted() {
        let json = r#"{"success": true, "articles": [{"article_number": 5, "section_id": "5", "title": "Rest"}]}"#;
        let articles = interpret_reply(true, 200, json).unwrap();
        assert_eq!(articles[0].article_number, "5");
    }

    #[test]
    fn test_success_without_articles_is_empty() {
        let articles = interpret_reply(true, 200, r#"{"success": true}"#).unwrap();
        assert!(articles.is_empty());
    }

    #[test]
    fn test_missing_success_flag_is_error() {
        let err = interpret_reply(true, 200, r#"{"articles": []}"#).unwrap_err();
        assert_eq!(err, AppError::Rejected { status: 200, detail: None });
        assert_eq!(err.user_message(), FALLBACK_ERROR);
    }

    #[test]
    fn test_falsy_success_with_detail() {
        let err = interpret_reply(true, 200, r#"{"success": false, "detail": "AI rejected document"}"#)
            .unwrap_err();
        assert_eq!(err.user_message(), "AI rejected document");
    }

    #[test]
    fn test_server_error_detail_is_shown_verbatim() {
        let err = interpret_reply(false, 500, r#"{"detail":"Regex failed"}"#).unwrap_err();
        assert_eq!(err.user_message(), "Regex failed");
        assert!(err.to_string().contains("500"));
    }

    #[test]
    fn test_non_json_error_body() {
        let err = interpret_reply(false, 502, "<html>Bad Gateway</html>").unwrap_err();
        assert_eq!(err, AppError::Rejected { status: 502, detail: None });
        assert_eq!(err.user_message(), FALLBACK_ERROR);
    }

    #[test]
    fn test_undecodable_success_body() {
        let err = interpret_reply(true, 200, "not json").unwrap_err();
        assert!(matches!(err, AppError::Decode(_)));
        assert_eq!(err.user_message(), FALLBACK_ERROR);
    }

    #[test]
    fn test_validation_error_list() {
        let body = r#"{"detail": [{"loc": ["body", "file"], "msg": "field required", "type": "value_error.missing"}]}"#;
        let err = interpret_reply(false, 422, body).unwrap_err();
        assert_eq!(err.user_message(), "field required");
    }
}
