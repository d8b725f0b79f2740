//! Backend health probe.

use gloo_net::http::Request;

use crate::config::health_url;
use crate::types::{AppError, AppResult, HealthReport};

/// What the header badge shows about the backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BackendStatus {
    /// First probe not answered yet
    Checking,
    /// Reachable; `configured` is false when a credential is missing
    Online { configured: bool },
    /// Unreachable or unhealthy
    Offline(String),
}

impl BackendStatus {
    pub fn from_result(result: &AppResult<HealthReport>) -> Self {
        match result {
            Ok(report) => BackendStatus::Online {
                configured: report.is_configured(),
            },
            Err(err) => BackendStatus::Offline(err.to_string()),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BackendStatus::Checking => "Checking backend...",
            BackendStatus::Online { configured: true } => "Backend online",
            BackendStatus::Online { configured: false } => "Backend misconfigured",
            BackendStatus::Offline(_) => "Backend offline",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            BackendStatus::Checking => "status-dot checking",
            BackendStatus::Online { configured: true } => "status-dot online",
            BackendStatus::Online { configured: false } => "status-dot degraded",
            BackendStatus::Offline(_) => "status-dot offline",
        }
    }
}

/// Query `GET /api/health`.
pub async fn check_health() -> AppResult<HealthReport> {
    let response = Request::get(&health_url())
        .send()
        .await
        .map_err(|e| AppError::Transport(e.to_string()))?;

    if !response.ok() {
        return Err(AppError::Rejected {
            status: response.status(),
            detail: None,
        });
    }

    response
        .json::<HealthReport>()
        .await
        .map_err(|e| AppError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EnvCheck;

    #[test]
    fn test_status_from_result() {
        let healthy = Ok(HealthReport {
            status: "Backend Active".into(),
            env_check: Some(EnvCheck { api_key_loaded: true, db_url_loaded: true }),
        });
        assert_eq!(BackendStatus::from_result(&healthy), BackendStatus::Online { configured: true });

        let missing_key = Ok(HealthReport {
            status: "Backend Active".into(),
            env_check: Some(EnvCheck { api_key_loaded: false, db_url_loaded: true }),
        });
        let status = BackendStatus::from_result(&missing_key);
        assert_eq!(status, BackendStatus::Online { configured: false });
        assert_eq!(status.label(), "Backend misconfigured");

        let down = Err(AppError::Transport("connection refused".into()));
        let status = BackendStatus::from_result(&down);
        assert!(matches!(status, BackendStatus::Offline(ref reason) if reason.contains("connection refused")));
        assert_eq!(status.css_class(), "status-dot offline");
    }
}
