// ── Core error types ──
//
// User-facing errors from lr-core. These are NOT API-specific --
// consumers never see HTTP status codes or JSON parse failures directly.
// The `From<lr_api::Error>` impl translates transport-layer errors
// into domain-appropriate variants.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Connection errors ────────────────────────────────────────────
    #[error("Cannot connect to {url}: {reason}")]
    ConnectionFailed { url: String, reason: String },

    #[error("Authentication failed: {message}")]
    AuthenticationFailed { message: String },

    #[error("Request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    // ── Lookup errors ────────────────────────────────────────────────
    #[error("There is no site with App ID {app_id}")]
    SiteNotFound { app_id: i64 },

    #[error("Active site {app_id} is not among your own or shared sites")]
    ActiveSiteNotFound { app_id: i64 },

    #[error("No active site selected")]
    NoActiveSite,

    // ── API errors (wrapped, not exposed raw) ────────────────────────
    #[error("API error: {message}")]
    Api {
        message: String,
        /// The console error code, if one was returned.
        code: Option<String>,
        /// HTTP status code (if applicable).
        status: Option<u16>,
    },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    // ── Internal errors ──────────────────────────────────────────────
    #[error("Internal error: {0}")]
    Internal(String),
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<lr_api::Error> for CoreError {
    fn from(err: lr_api::Error) -> Self {
        match err {
            lr_api::Error::Authentication { message } => {
                CoreError::AuthenticationFailed { message }
            }
            lr_api::Error::Transport(ref e) => {
                // AdminClient already turns timeouts into `Error::Timeout`
                if e.is_connect() {
                    CoreError::ConnectionFailed {
                        url: e
                            .url()
                            .map_or_else(|| "<unknown>".into(), ToString::to_string),
                        reason: e.to_string(),
                    }
                } else {
                    CoreError::Api {
                        message: e.to_string(),
                        code: None,
                        status: e.status().map(|s| s.as_u16()),
                    }
                }
            }
            lr_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            lr_api::Error::InvalidHeader { header } => CoreError::Config {
                message: format!("credential is not a valid {header} header value"),
            },
            lr_api::Error::Timeout { timeout_secs } => CoreError::Timeout { timeout_secs },
            lr_api::Error::Api {
                message,
                code,
                status,
            } => CoreError::Api {
                message,
                code,
                status: Some(status),
            },
            lr_api::Error::Deserialization { message, body: _ } => {
                CoreError::Internal(format!("Deserialization error: {message}"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_keeps_configured_limit() {
        let err = CoreError::from(lr_api::Error::Timeout { timeout_secs: 7 });
        assert!(matches!(err, CoreError::Timeout { timeout_secs: 7 }));
        assert_eq!(err.to_string(), "Request timed out after 7s");
    }

    #[test]
    fn api_error_keeps_code_and_status() {
        let err = CoreError::from(lr_api::Error::Api {
            message: "boom".into(),
            code: Some("1000".into()),
            status: 500,
        });
        assert!(matches!(
            err,
            CoreError::Api { ref code, status: Some(500), .. } if code.as_deref() == Some("1000")
        ));
    }
}
