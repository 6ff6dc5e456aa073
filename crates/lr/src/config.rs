//! CLI configuration -- thin wrapper around `lr_config` shared types.
//!
//! Re-exports the shared types and adds CLI-specific resolution that
//! respects `GlobalOpts` flag overrides (--api-domain, --token, --site, ...).

use std::time::Duration;

use secrecy::SecretString;

use lr_core::{Credentials, PlatformConfig};

use crate::cli::GlobalOpts;
use crate::error::CliError;

// ── Re-exports from shared crate ────────────────────────────────────

pub use lr_config::{
    Config, DEFAULT_API_DOMAIN, Defaults, KEYRING_SERVICE, Profile, config_path, keyring_key,
    load_config, parse_api_domain, save_config,
};

// ── CLI-specific helpers ────────────────────────────────────────────

/// Resolve the active profile name from CLI flags and config.
pub fn active_profile_name(global: &GlobalOpts, config: &Config) -> String {
    global
        .profile
        .clone()
        .or_else(|| config.default_profile.clone())
        .unwrap_or_else(|| "default".into())
}

/// Translate a `Profile` + global flags into a `PlatformConfig`.
///
/// CLI flag overrides take priority over profile values.
pub fn resolve_profile(
    profile: &Profile,
    profile_name: &str,
    global: &GlobalOpts,
    defaults: &Defaults,
) -> Result<PlatformConfig, CliError> {
    // 1. API domain (flag > env > profile)
    let domain = global.api_domain.as_deref().unwrap_or(&profile.api_domain);
    let api_domain = parse_api_domain(domain)?;

    // 2. Token (flag > env > token_env > keyring > plaintext)
    let token = match global.token {
        Some(ref token) => SecretString::from(token.clone()),
        None => lr_config::resolve_token(profile, profile_name)?,
    };
    let sign = lr_config::resolve_sign(profile, profile_name);

    // 3. Active site (flag > env > profile)
    let app_id = global.site.or(profile.app_id);

    // 4. Timeout (flag > env > profile > defaults)
    let timeout = Duration::from_secs(
        global
            .timeout
            .or(profile.timeout)
            .unwrap_or(defaults.timeout),
    );

    Ok(PlatformConfig {
        api_domain,
        credentials: Credentials { token, sign },
        app_id,
        timeout,
    })
}

/// Build a `PlatformConfig` from the config file, profile, and CLI overrides.
pub fn build_platform_config(global: &GlobalOpts) -> Result<PlatformConfig, CliError> {
    let cfg = load_config()?;
    let profile_name = active_profile_name(global, &cfg);

    // If a profile exists, use it with CLI flag overrides
    if let Some(profile) = cfg.profiles.get(&profile_name) {
        return resolve_profile(profile, &profile_name, global, &cfg.defaults);
    }

    // An explicitly requested profile must exist
    if global.profile.is_some() && !cfg.profiles.is_empty() {
        return Err(CliError::ProfileNotFound {
            name: profile_name,
            available: available_profiles(&cfg),
        });
    }

    // No profile found -- try to build from CLI flags / env vars alone
    let token = global.token.as_deref().ok_or_else(|| CliError::NoConfig {
        path: config_path().display().to_string(),
    })?;

    let domain = global.api_domain.as_deref().unwrap_or(DEFAULT_API_DOMAIN);
    let api_domain = parse_api_domain(domain)?;
    let sign = std::env::var("LR_SIGN").ok().map(SecretString::from);

    Ok(PlatformConfig {
        api_domain,
        credentials: Credentials {
            token: SecretString::from(token.to_owned()),
            sign,
        },
        app_id: global.site,
        timeout: Duration::from_secs(global.timeout.unwrap_or(cfg.defaults.timeout)),
    })
}

/// Comma-separated profile names for help text.
pub fn available_profiles(cfg: &Config) -> String {
    let mut names: Vec<_> = cfg.profiles.keys().cloned().collect();
    if names.is_empty() {
        return "(none)".into();
    }
    names.sort();
    names.join(", ")
}
