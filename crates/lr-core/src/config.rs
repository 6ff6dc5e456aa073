// ── Runtime connection configuration ──
//
// These types describe *how* to talk to the admin console. They carry
// credential data and connection tuning, but never touch disk. The CLI
// constructs a `PlatformConfig` and hands it in.

use secrecy::SecretString;
use url::Url;

/// Console session credentials.
#[derive(Debug, Clone)]
pub struct Credentials {
    /// Session token (`x-is-loginradius--token`).
    pub token: SecretString,
    /// Request signature (`x-is-loginradius--sign`), if the account uses one.
    pub sign: Option<SecretString>,
}

/// Configuration for one console session.
///
/// Built by the CLI, passed to `Platform` -- core never reads config files.
#[derive(Debug, Clone)]
pub struct PlatformConfig {
    /// Admin-console API base URL.
    pub api_domain: Url,
    /// Authentication credentials.
    pub credentials: Credentials,
    /// The active site (app id), if one has been selected.
    pub app_id: Option<i64>,
    /// Request timeout.
    pub timeout: std::time::Duration,
}
