//! Config subcommand handlers.

use std::collections::HashMap;

use dialoguer::{Input, Select};
use serde::Serialize;

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::config::{self, Config, Defaults, Profile};
use crate::error::CliError;
use crate::output;

const REDACTED: &str = "****";

// ── Helpers ─────────────────────────────────────────────────────────

/// Serializable copy of the config with secrets masked.
#[derive(Serialize)]
struct RedactedConfig {
    default_profile: Option<String>,
    defaults: RedactedDefaults,
    profiles: Vec<RedactedProfile>,
}

#[derive(Serialize)]
struct RedactedDefaults {
    output: String,
    color: String,
    timeout: u64,
}

#[derive(Serialize)]
struct RedactedProfile {
    name: String,
    api_domain: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    app_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    token: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    token_env: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sign: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    timeout: Option<u64>,
}

impl From<&Config> for RedactedConfig {
    fn from(cfg: &Config) -> Self {
        let mut names: Vec<_> = cfg.profiles.keys().collect();
        names.sort();
        let profiles = names
            .into_iter()
            .map(|name| {
                let p = &cfg.profiles[name];
                RedactedProfile {
                    name: name.clone(),
                    api_domain: p.api_domain.clone(),
                    app_id: p.app_id,
                    token: p.token.as_ref().map(|_| REDACTED),
                    token_env: p.token_env.clone(),
                    sign: p.sign.as_ref().map(|_| REDACTED),
                    timeout: p.timeout,
                }
            })
            .collect();

        Self {
            default_profile: cfg.default_profile.clone(),
            defaults: RedactedDefaults {
                output: cfg.defaults.output.clone(),
                color: cfg.defaults.color.clone(),
                timeout: cfg.defaults.timeout,
            },
            profiles,
        }
    }
}

/// Format config as TOML-ish text, masking sensitive fields.
fn format_config_redacted(cfg: &RedactedConfig) -> String {
    use std::fmt::Write;
    let mut out = String::new();

    if let Some(ref default) = cfg.default_profile {
        let _ = writeln!(out, "default_profile = \"{default}\"");
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "[defaults]");
    let _ = writeln!(out, "output = \"{}\"", cfg.defaults.output);
    let _ = writeln!(out, "color = \"{}\"", cfg.defaults.color);
    let _ = writeln!(out, "timeout = {}", cfg.defaults.timeout);

    for p in &cfg.profiles {
        let _ = writeln!(out);
        let _ = writeln!(out, "[profiles.{}]", p.name);
        let _ = writeln!(out, "api_domain = \"{}\"", p.api_domain);
        if let Some(app_id) = p.app_id {
            let _ = writeln!(out, "app_id = {app_id}");
        }
        if let Some(token) = p.token {
            let _ = writeln!(out, "token = \"{token}\"");
        }
        if let Some(ref env) = p.token_env {
            let _ = writeln!(out, "token_env = \"{env}\"");
        }
        if let Some(sign) = p.sign {
            let _ = writeln!(out, "sign = \"{sign}\"");
        }
        if let Some(timeout) = p.timeout {
            let _ = writeln!(out, "timeout = {timeout}");
        }
    }

    out.trim_end().to_owned()
}

/// Map a dialoguer / interactive I/O failure into CliError.
fn prompt_err(e: impl std::fmt::Display) -> CliError {
    CliError::Validation {
        field: "interactive".into(),
        reason: format!("prompt failed: {e}"),
    }
}

/// Write a secret to the system keyring under `<profile>/<secret>`.
fn store_in_keyring(profile_name: &str, secret: &str, value: &str) -> Result<(), CliError> {
    let entry = keyring::Entry::new(
        config::KEYRING_SERVICE,
        &config::keyring_key(profile_name, secret),
    )
    .map_err(|e| CliError::Validation {
        field: "keyring".into(),
        reason: format!("failed to access keyring: {e}"),
    })?;
    entry
        .set_password(value)
        .map_err(|e| CliError::Validation {
            field: "keyring".into(),
            reason: format!("failed to store {secret} in keyring: {e}"),
        })
}

/// Offer to store a secret in the system keyring or return it for plaintext config.
///
/// Returns `Some(secret)` if the user chose plaintext, `None` if stored in keyring.
fn prompt_keyring_storage(
    value: &str,
    profile_name: &str,
    secret: &str,
    label: &str,
) -> Result<Option<String>, CliError> {
    let choices = &[
        "Store in system keyring (recommended)",
        "Save to config file (plaintext)",
    ];
    let selection = Select::new()
        .with_prompt(format!("Where to store the {label}?"))
        .items(choices)
        .default(0)
        .interact()
        .map_err(prompt_err)?;

    if selection == 0 {
        store_in_keyring(profile_name, secret, value)?;
        eprintln!("   ✓ {label} stored in system keyring");
        Ok(None)
    } else {
        Ok(Some(value.to_owned()))
    }
}

fn parse_number<T: std::str::FromStr>(field: &str, value: &str) -> Result<T, CliError> {
    value.parse().map_err(|_| CliError::Validation {
        field: field.into(),
        reason: "must be a number".into(),
    })
}

/// Apply `lr config set <key> <value>` to a profile.
fn set_profile_key(profile: &mut Profile, key: &str, value: String) -> Result<(), CliError> {
    match key {
        "api_domain" | "api-domain" => {
            config::parse_api_domain(&value)?;
            profile.api_domain = value;
        }
        "app_id" | "app-id" | "site" => profile.app_id = Some(parse_number(key, &value)?),
        "token" => profile.token = Some(value),
        "token_env" | "token-env" => profile.token_env = Some(value),
        "sign" => profile.sign = Some(value),
        "timeout" => profile.timeout = Some(parse_number(key, &value)?),
        other => {
            return Err(CliError::Validation {
                field: other.into(),
                reason: format!(
                    "unknown config key '{other}'. Valid keys: api_domain, app_id, \
                     token, token_env, sign, timeout"
                ),
            });
        }
    }
    Ok(())
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        // ── Init: interactive wizard ────────────────────────────────
        ConfigCommand::Init => {
            let config_path = config::config_path();
            eprintln!("✨ lr -- configuration wizard");
            eprintln!("   Config path: {}\n", config_path.display());

            // 1. Profile name
            let profile_name: String = Input::new()
                .with_prompt("Profile name")
                .default("default".into())
                .interact_text()
                .map_err(prompt_err)?;

            // 2. API domain
            let api_domain: String = Input::new()
                .with_prompt("Admin console API")
                .default(config::DEFAULT_API_DOMAIN.into())
                .interact_text()
                .map_err(prompt_err)?;
            config::parse_api_domain(&api_domain)?;

            // 3. Session token
            let token = rpassword::prompt_password("Session token: ").map_err(prompt_err)?;
            if token.is_empty() {
                return Err(CliError::Validation {
                    field: "token".into(),
                    reason: "token cannot be empty".into(),
                });
            }
            let token_field = prompt_keyring_storage(&token, &profile_name, "token", "token")?;

            // 4. Optional request signature
            let sign = rpassword::prompt_password("Request signature (leave empty to skip): ")
                .map_err(prompt_err)?;
            let sign_field = if sign.is_empty() {
                None
            } else {
                prompt_keyring_storage(&sign, &profile_name, "sign", "signature")?
            };

            // 5. Active site
            let app_id: String = Input::new()
                .with_prompt("Active site app ID (leave empty to skip)")
                .allow_empty(true)
                .interact_text()
                .map_err(prompt_err)?;
            let app_id = if app_id.trim().is_empty() {
                None
            } else {
                Some(parse_number("app_id", app_id.trim())?)
            };

            // 6. Build profile and config
            let profile = Profile {
                api_domain,
                app_id,
                token: token_field,
                token_env: None,
                sign: sign_field,
                timeout: None,
            };

            let mut profiles = HashMap::new();
            profiles.insert(profile_name.clone(), profile);

            let cfg = Config {
                default_profile: Some(profile_name.clone()),
                defaults: Defaults::default(),
                profiles,
            };

            // 7. Write config
            config::save_config(&cfg)?;

            eprintln!("\n✓ Configuration written to {}", config_path.display());
            eprintln!("  Active profile: {profile_name}");
            eprintln!("\n  Test it: lr get site --active");

            Ok(())
        }

        // ── Show ────────────────────────────────────────────────────
        ConfigCommand::Show => {
            let cfg = config::load_config()?;
            let redacted = RedactedConfig::from(&cfg);
            let out = output::render_single(
                &global.output,
                &redacted,
                format_config_redacted,
                |c| {
                    c.profiles
                        .iter()
                        .map(|p| p.name.clone())
                        .collect::<Vec<_>>()
                        .join("\n")
                },
            )?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        // ── Set <key> <value> ───────────────────────────────────────
        ConfigCommand::Set { key, value } => {
            let mut cfg = config::load_config()?;
            let profile_name = config::active_profile_name(global, &cfg);

            let profile = cfg.profiles.entry(profile_name.clone()).or_default();
            set_profile_key(profile, &key, value)?;

            config::save_config(&cfg)?;
            eprintln!("✓ Set {key} on profile '{profile_name}'");
            Ok(())
        }

        // ── Profiles ────────────────────────────────────────────────
        ConfigCommand::Profiles => {
            let cfg = config::load_config()?;
            let default = cfg.default_profile.as_deref().unwrap_or("default");
            if cfg.profiles.is_empty() {
                eprintln!("No profiles configured. Run: lr config init");
            } else {
                let mut names: Vec<_> = cfg.profiles.keys().collect();
                names.sort();
                for name in names {
                    let marker = if name == default { " *" } else { "" };
                    println!("{name}{marker}");
                }
            }
            Ok(())
        }

        // ── Use <name> ─────────────────────────────────────────────
        ConfigCommand::Use { name } => {
            let mut cfg = config::load_config()?;

            if !cfg.profiles.contains_key(&name) {
                return Err(CliError::ProfileNotFound {
                    name,
                    available: config::available_profiles(&cfg),
                });
            }

            cfg.default_profile = Some(name.clone());
            config::save_config(&cfg)?;
            eprintln!("✓ Default profile set to '{name}'");
            Ok(())
        }

        // ── SetToken ────────────────────────────────────────────────
        ConfigCommand::SetToken { profile } => {
            let cfg = config::load_config()?;
            let profile_name = profile.unwrap_or_else(|| config::active_profile_name(global, &cfg));

            if !cfg.profiles.contains_key(&profile_name) {
                return Err(CliError::ProfileNotFound {
                    name: profile_name,
                    available: config::available_profiles(&cfg),
                });
            }

            let token = rpassword::prompt_password("Session token: ").map_err(prompt_err)?;
            if token.is_empty() {
                return Err(CliError::Validation {
                    field: "token".into(),
                    reason: "value cannot be empty".into(),
                });
            }
            store_in_keyring(&profile_name, "token", &token)?;

            let sign = rpassword::prompt_password("Request signature (leave empty to keep): ")
                .map_err(prompt_err)?;
            if !sign.is_empty() {
                store_in_keyring(&profile_name, "sign", &sign)?;
            }

            eprintln!("✓ Secret(s) stored in system keyring for profile '{profile_name}'");
            Ok(())
        }

        // ── Path ────────────────────────────────────────────────────
        ConfigCommand::Path => {
            println!("{}", config::config_path().display());
            Ok(())
        }
    }
}
