//! Clap derive structures for the `lr` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.
//! Depends on nothing but clap so `build.rs` can include it for man pages.

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// lr -- command-line client for the LoginRadius admin console
#[derive(Debug, Parser)]
#[command(
    name = "lr",
    version,
    about = "Inspect LoginRadius sites and registration schema from the command line",
    long_about = "A CLI for the LoginRadius admin console.\n\n\
        Reads site, feature and registration-schema configuration through the\n\
        admin-console API using the token stored in your active profile.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Configuration profile to use
    #[arg(long, short = 'p', env = "LR_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Admin-console API URL (overrides profile)
    #[arg(long, env = "LR_API_DOMAIN", global = true)]
    pub api_domain: Option<String>,

    /// Active site app ID (overrides profile)
    #[arg(long, env = "LR_SITE", global = true, value_name = "APP_ID")]
    pub site: Option<i64>,

    /// Console session token
    #[arg(long, env = "LR_TOKEN", global = true, hide_env = true)]
    pub token: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "LR_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Request timeout in seconds [default: 30]
    #[arg(long, env = "LR_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show site and registration-schema configuration
    Get(GetArgs),

    /// Manage CLI configuration and profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  GET
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct GetArgs {
    #[command(subcommand)]
    pub command: GetCommand,
}

#[derive(Debug, Subcommand)]
pub enum GetCommand {
    /// Gets schema
    #[command(
        long_about = "Use this command to get the list of configured registration schema fields.",
        after_long_help = "Example:\n\
            $ lr get schema\n\
            +-----------+---------------+----------+---------+\n\
            | NAME      | DISPLAY       | TYPE     | ENABLED |\n\
            +-----------+---------------+----------+---------+\n\
            | emailid   | Email Id      | email    | true    |\n\
            | password  | Password      | password | true    |\n\
            | birthdate | Date of Birth | string   | false   |\n\
            | lastname  | Last Name     | string   | false   |\n\
            +-----------+---------------+----------+---------+\n\
            +---------------+--------+---------+\n\
            | CUSTOM FIELDS | TYPE   | ENABLED |\n\
            +---------------+--------+---------+\n\
            | MyCF          | string | false   |\n\
            +---------------+--------+---------+"
    )]
    Schema,

    /// Shows Current/All sites
    Site(SiteArgs),
}

#[derive(Debug, Args)]
#[command(
    long_about = "Use this command to get the information about the:\n  \
        - Current site/app (--active)\n  \
        - All sites/app (--all)\n  \
        - Specific site based on the appid (--appid)",
    after_long_help = "Examples:\n\
        $ lr get site --all\n\
        $ lr get site --active\n\
        $ lr get site --appid <appid>"
)]
pub struct SiteArgs {
    /// Lists all sites
    #[arg(long)]
    pub all: bool,

    /// Shows active site
    #[arg(long)]
    pub active: bool,

    /// Filters sites based on ID
    #[arg(
        long,
        short = 'i',
        default_value_t = -1,
        allow_negative_numbers = true,
        value_name = "APP_ID"
    )]
    pub appid: i64,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  CONFIG
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Create initial config file with guided setup
    Init,

    /// Display current configuration (secrets redacted)
    Show,

    /// Set a value on the active profile
    Set {
        /// Profile key (api_domain, app_id, token, token_env, sign, timeout)
        key: String,

        /// Value to set
        value: String,
    },

    /// List configured profiles
    Profiles,

    /// Set the default profile
    Use {
        /// Profile name to set as default
        name: String,
    },

    /// Store the session token (and optional sign) in the system keyring
    SetToken {
        /// Profile name
        #[arg(long)]
        profile: Option<String>,
    },

    /// Print the config file location
    Path,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  COMPLETIONS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
