// Admin-console HTTP client
//
// Wraps `reqwest::Client` with console URL construction, auth headers and
// envelope unwrapping. Endpoint methods live in sibling modules (`schema`,
// `apps`) as inherent impls so this file stays focused on transport.

use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::models::{ApiErrorBody, DataEnvelope};
use crate::transport::{self, TransportConfig};

/// Raw HTTP client for the admin-console API.
///
/// All methods return the unwrapped `Data` payload; the envelope is
/// stripped before the caller sees it.
pub struct AdminClient {
    http: reqwest::Client,
    base_url: Url,
    timeout_secs: u64,
}

impl AdminClient {
    /// Create a client authenticated with a console token and optional sign.
    pub fn new(
        base_url: Url,
        token: &secrecy::SecretString,
        sign: Option<&secrecy::SecretString>,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let headers = transport::auth_headers(token, sign)?;
        let http = transport.build_client_with_headers(headers)?;
        Ok(Self {
            http,
            base_url,
            timeout_secs: transport.timeout.as_secs(),
        })
    }

    /// Create a client from a pre-built `reqwest::Client`.
    ///
    /// The caller is responsible for any auth headers.
    pub fn with_client(http: reqwest::Client, base_url: Url) -> Self {
        Self {
            http,
            base_url,
            timeout_secs: TransportConfig::default().timeout.as_secs(),
        }
    }

    /// The console base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── URL builders ─────────────────────────────────────────────────

    /// Join an API path onto the base URL, tolerating a base with or
    /// without a trailing slash.
    pub(crate) fn api_url(&self, path: &str) -> Result<Url, Error> {
        let base = self.base_url.as_str().trim_end_matches('/');
        let full = format!("{base}/{}", path.trim_start_matches('/'));
        Ok(Url::parse(&full)?)
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// Send a GET request and unwrap the `Data` envelope.
    pub(crate) async fn get_data<T>(&self, path: &str) -> Result<T, Error>
    where
        T: DeserializeOwned + Default,
    {
        let url = self.api_url(path)?;
        debug!("GET {}", url);

        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let envelope: DataEnvelope<T> = self.parse_response(resp).await?;
        Ok(envelope.data)
    }

    /// Timeouts carry the configured limit; everything else stays a transport error.
    fn transport_error(&self, err: reqwest::Error) -> Error {
        if err.is_timeout() {
            Error::Timeout {
                timeout_secs: self.timeout_secs,
            }
        } else {
            Error::Transport(err)
        }
    }

    /// Check the status, then decode the body.
    ///
    /// 401/403 become `Error::Authentication`; any other non-2xx status is
    /// decoded as the console error body when possible.
    async fn parse_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, Error> {
        let status = resp.status();
        let body = resp.text().await.map_err(|e| self.transport_error(e))?;

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN
        {
            return Err(Error::Authentication {
                message: error_message(&body)
                    .unwrap_or_else(|| "session expired or invalid token".into()),
            });
        }

        if !status.is_success() {
            let parsed: ApiErrorBody = serde_json::from_str(&body).unwrap_or_default();
            return Err(Error::Api {
                message: parsed
                    .description
                    .or(parsed.message)
                    .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown").into()),
                code: parsed.error_code.map(|c| match c {
                    serde_json::Value::String(s) => s,
                    other => other.to_string(),
                }),
                status: status.as_u16(),
            });
        }

        serde_json::from_str(&body).map_err(|e| Error::Deserialization {
            message: e.to_string(),
            body,
        })
    }
}

fn error_message(body: &str) -> Option<String> {
    let parsed: ApiErrorBody = serde_json::from_str(body).ok()?;
    parsed.description.or(parsed.message)
}
