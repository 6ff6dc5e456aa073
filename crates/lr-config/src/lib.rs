//! Shared configuration for the `lr` CLI.
//!
//! TOML profiles and credential resolution (env, keyring, plaintext).
//! The CLI layers `GlobalOpts` overrides on top and builds the
//! `lr_core::PlatformConfig` itself.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;


/// Service name used for every keyring entry.
pub const KEYRING_SERVICE: &str = "lr";

/// Admin-console API used when a profile doesn't override it.
pub const DEFAULT_API_DOMAIN: &str = "https://devapi.lrinternal.com";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("no credentials configured for profile '{profile}'")]
    NoCredentials { profile: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// Default profile name.
    pub default_profile: Option<String>,

    /// Global defaults.
    #[serde(default)]
    pub defaults: Defaults,

    /// Named console profiles.
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: Some("default".into()),
            defaults: Defaults::default(),
            profiles: HashMap::new(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default = "default_color")]
    pub color: String,

    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            color: default_color(),
            timeout: default_timeout(),
        }
    }
}

fn default_output() -> String {
    "table".into()
}
fn default_color() -> String {
    "auto".into()
}
fn default_timeout() -> u64 {
    30
}

/// A named console profile.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Profile {
    /// Admin-console API base URL.
    #[serde(default = "default_api_domain")]
    pub api_domain: String,

    /// Active site (app id) for commands that act on "the current site".
    pub app_id: Option<i64>,

    /// Session token (plaintext; prefer keyring or env var).
    pub token: Option<String>,

    /// Environment variable name containing the session token.
    pub token_env: Option<String>,

    /// Request signature (plaintext; prefer keyring).
    pub sign: Option<String>,

    /// Override timeout.
    pub timeout: Option<u64>,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            api_domain: default_api_domain(),
            app_id: None,
            token: None,
            token_env: None,
            sign: None,
            timeout: None,
        }
    }
}

fn default_api_domain() -> String {
    DEFAULT_API_DOMAIN.into()
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "loginradius", "lr").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("lr");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from the canonical file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load a Config from `path`, layered over defaults and under `LR_*`
/// environment overrides (`__` separates nested keys).
///
/// A missing file yields the defaults. A file that exists but fails to
/// parse is an error, so callers never save defaults over it.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("LR_").split("__"));

    let config: Config = figment.extract()?;
    Ok(config)
}


// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    save_config_to(cfg, &config_path())
}

pub fn save_config_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}

// ── Credential resolution (without CLI flags) ───────────────────────

/// Keyring entry name for a profile secret (`<profile>/token`, `<profile>/sign`).
pub fn keyring_key(profile_name: &str, secret: &str) -> String {
    format!("{profile_name}/{secret}")
}

fn keyring_lookup(profile_name: &str, secret: &str) -> Option<SecretString> {
    let entry = keyring::Entry::new(KEYRING_SERVICE, &keyring_key(profile_name, secret)).ok()?;
    entry.get_password().ok().map(SecretString::from)
}

/// Resolve the session token from the credential chain (no CLI flag step).
pub fn resolve_token(profile: &Profile, profile_name: &str) -> Result<SecretString, ConfigError> {
    // 1. Profile's token_env → env var lookup
    if let Some(ref env_name) = profile.token_env {
        if let Ok(val) = std::env::var(env_name) {
            return Ok(SecretString::from(val));
        }
    }

    // 2. System keyring
    if let Some(secret) = keyring_lookup(profile_name, "token") {
        return Ok(secret);
    }

    // 3. Plaintext in config
    if let Some(ref token) = profile.token {
        return Ok(SecretString::from(token.clone()));
    }

    Err(ConfigError::NoCredentials {
        profile: profile_name.into(),
    })
}

/// Resolve the optional request signature: `LR_SIGN`, keyring, plaintext.
pub fn resolve_sign(profile: &Profile, profile_name: &str) -> Option<SecretString> {
    if let Ok(sign) = std::env::var("LR_SIGN") {
        return Some(SecretString::from(sign));
    }
    keyring_lookup(profile_name, "sign").or_else(|| profile.sign.clone().map(SecretString::from))
}

/// Parse and validate an API domain.
pub fn parse_api_domain(raw: &str) -> Result<url::Url, ConfigError> {
    let url: url::Url = raw.parse().map_err(|_| ConfigError::Validation {
        field: "api_domain".into(),
        reason: format!("invalid URL: {raw}"),
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::Validation {
            field: "api_domain".into(),
            reason: format!("expected an http(s) URL, got '{raw}'"),
        });
    }
    Ok(url)
}
