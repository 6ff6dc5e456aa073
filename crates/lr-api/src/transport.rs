// Shared transport configuration for building reqwest::Client instances.
//
// Timeout, user agent and the console auth headers are set once here so
// every endpoint method goes through an identically configured client.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};

use crate::error::Error;

/// Header carrying the console session token.
pub const TOKEN_HEADER: &str = "x-is-loginradius--token";
/// Header carrying the console request signature.
pub const SIGN_HEADER: &str = "x-is-loginradius--sign";
/// Marks requests as console XHR calls.
pub const AJAX_HEADER: &str = "x-is-loginradius-ajax";

const USER_AGENT: &str = concat!("lr-cli/", env!("CARGO_PKG_VERSION"));

/// Shared transport configuration for building HTTP clients.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub timeout: Duration,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
        }
    }
}

impl TransportConfig {
    /// Build a `reqwest::Client` with additional default headers.
    pub fn build_client_with_headers(&self, headers: HeaderMap) -> Result<reqwest::Client, Error> {
        reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()
            .map_err(Error::Transport)
    }
}

/// Build the default header set for an authenticated console session.
///
/// The token is mandatory; the sign header is only sent when present.
pub fn auth_headers(token: &SecretString, sign: Option<&SecretString>) -> Result<HeaderMap, Error> {
    let mut headers = HeaderMap::new();

    let mut token_value = HeaderValue::from_str(token.expose_secret())
        .map_err(|_| Error::InvalidHeader { header: TOKEN_HEADER })?;
    token_value.set_sensitive(true);
    headers.insert(TOKEN_HEADER, token_value);

    if let Some(sign) = sign {
        let mut sign_value = HeaderValue::from_str(sign.expose_secret())
            .map_err(|_| Error::InvalidHeader { header: SIGN_HEADER })?;
        sign_value.set_sensitive(true);
        headers.insert(SIGN_HEADER, sign_value);
    }

    headers.insert(AJAX_HEADER, HeaderValue::from_static("true"));
    Ok(headers)
}
