//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` variants into user-facing errors with
//! actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use lr_config::ConfigError;
use lr_core::CoreError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not connect to the admin console at {url}")]
    #[diagnostic(
        code(lr::connection_failed),
        help(
            "Check your network connection and the configured API domain.\n\
             URL: {url}\n\
             Override it with --api-domain or LR_API_DOMAIN."
        )
    )]
    ConnectionFailed {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    // ── Authentication ───────────────────────────────────────────────
    #[error("Authentication failed: {message}")]
    #[diagnostic(
        code(lr::auth_failed),
        help(
            "Your console session token may have expired.\n\
             Run: lr config set-token"
        )
    )]
    AuthFailed { message: String },

    #[error("No credentials configured for profile '{profile}'")]
    #[diagnostic(
        code(lr::no_credentials),
        help(
            "Configure credentials with: lr config init\n\
             Or set the LR_TOKEN environment variable."
        )
    )]
    NoCredentials { profile: String },

    // ── Sites ────────────────────────────────────────────────────────
    #[error("There is no site with App ID {app_id}")]
    #[diagnostic(
        code(lr::site_not_found),
        help("Run: lr get site --all to see available sites")
    )]
    SiteNotFound { app_id: i64 },

    #[error("Active site {app_id} is not among your own or shared sites")]
    #[diagnostic(
        code(lr::active_site_not_found),
        help(
            "Select another site with: lr config set app_id <APP_ID>\n\
             Run: lr get site --all to see available sites"
        )
    )]
    ActiveSiteNotFound { app_id: i64 },

    #[error("No active site selected")]
    #[diagnostic(
        code(lr::no_active_site),
        help("Select one with: lr config set app_id <APP_ID>, or pass --site <APP_ID>")
    )]
    NoActiveSite,

    // ── API ──────────────────────────────────────────────────────────
    #[error("API error ({code}): {message}")]
    #[diagnostic(code(lr::api_error))]
    ApiError { code: String, message: String },

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(lr::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(
        code(lr::profile_not_found),
        help(
            "Available profiles: {available}\n\
             Create one with: lr config init"
        )
    )]
    ProfileNotFound { name: String, available: String },

    #[error("Configuration file not found")]
    #[diagnostic(
        code(lr::no_config),
        help(
            "Create one with: lr config init\n\
             Expected at: {path}\n\
             Or set LR_TOKEN (and optionally LR_API_DOMAIN, LR_SITE)."
        )
    )]
    NoConfig { path: String },

    #[error(transparent)]
    #[diagnostic(code(lr::config))]
    Config(Box<figment::Error>),

    // ── Timeout ──────────────────────────────────────────────────────
    #[error("Request timed out after {seconds}s")]
    #[diagnostic(
        code(lr::timeout),
        help("Increase timeout with --timeout or try again later.")
    )]
    Timeout { seconds: u64 },

    // ── IO / Serialization ───────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Failed to render JSON: {0}")]
    #[diagnostic(code(lr::json))]
    Json(#[from] serde_json::Error),

    #[error("Failed to render YAML: {0}")]
    #[diagnostic(code(lr::yaml))]
    Yaml(#[from] serde_yaml::Error),

    #[error("Failed to write config: {message}")]
    #[diagnostic(code(lr::serialize))]
    Serialize { message: String },
}

impl From<figment::Error> for CliError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::AuthFailed { .. } | Self::NoCredentials { .. } => exit_code::AUTH,
            Self::SiteNotFound { .. } | Self::ActiveSiteNotFound { .. } => exit_code::NOT_FOUND,
            Self::Timeout { .. } => exit_code::TIMEOUT,
            Self::Validation { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ConnectionFailed { url, reason } => CliError::ConnectionFailed {
                url,
                source: reason.into(),
            },
            CoreError::AuthenticationFailed { message } => CliError::AuthFailed { message },
            CoreError::Timeout { timeout_secs } => CliError::Timeout {
                seconds: timeout_secs,
            },
            CoreError::SiteNotFound { app_id } => CliError::SiteNotFound { app_id },
            CoreError::ActiveSiteNotFound { app_id } => CliError::ActiveSiteNotFound { app_id },
            CoreError::NoActiveSite => CliError::NoActiveSite,
            CoreError::Api {
                message,
                code,
                status,
            } => CliError::ApiError {
                code: code
                    .or_else(|| status.map(|s| s.to_string()))
                    .unwrap_or_else(|| "unknown".into()),
                message,
            },
            CoreError::Config { message } => CliError::Validation {
                field: "config".into(),
                reason: message,
            },
            CoreError::Internal(message) => CliError::ApiError {
                code: "internal".into(),
                message,
            },
        }
    }
}

// ── ConfigError → CliError mapping ───────────────────────────────────

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Validation { field, reason } => CliError::Validation { field, reason },
            ConfigError::NoCredentials { profile } => CliError::NoCredentials { profile },
            ConfigError::Serialization(e) => CliError::Serialize {
                message: e.to_string(),
            },
            ConfigError::Figment(e) => CliError::Config(e),
            ConfigError::Io(e) => CliError::Io(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookups_map_to_not_found() {
        let err = CliError::from(CoreError::SiteNotFound { app_id: 3 });
        assert_eq!(err.exit_code(), exit_code::NOT_FOUND);
        assert_eq!(err.to_string(), "There is no site with App ID 3");

        let err = CliError::from(CoreError::ActiveSiteNotFound { app_id: 9 });
        assert_eq!(err.exit_code(), exit_code::NOT_FOUND);
    }

    #[test]
    fn auth_and_transport_codes() {
        let auth = CliError::from(CoreError::AuthenticationFailed {
            message: "expired".into(),
        });
        assert_eq!(auth.exit_code(), exit_code::AUTH);

        let timeout = CliError::from(CoreError::Timeout { timeout_secs: 5 });
        assert_eq!(timeout.exit_code(), exit_code::TIMEOUT);

        let conn = CliError::from(CoreError::ConnectionFailed {
            url: "https://x".into(),
            reason: "refused".into(),
        });
        assert_eq!(conn.exit_code(), exit_code::CONNECTION);
    }

    #[test]
    fn api_error_falls_back_to_status_code() {
        let err = CliError::from(CoreError::Api {
            message: "boom".into(),
            code: None,
            status: Some(500),
        });
        assert_eq!(err.to_string(), "API error (500): boom");
        assert_eq!(err.exit_code(), exit_code::GENERAL);
    }

    #[test]
    fn missing_credentials_is_an_auth_failure() {
        let err = CliError::from(ConfigError::NoCredentials {
            profile: "work".into(),
        });
        assert_eq!(err.exit_code(), exit_code::AUTH);
    }
}
