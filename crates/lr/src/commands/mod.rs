//! Command dispatch: bridges CLI args -> platform reads -> output formatting.

pub mod config_cmd;
pub mod schema;
pub mod site;

use lr_core::Platform;

use crate::cli::{GetArgs, GetCommand, GlobalOpts};
use crate::config;
use crate::error::CliError;

/// Dispatch a `get` subcommand to its handler.
pub async fn dispatch(args: GetArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        GetCommand::Schema => schema::handle(global).await,
        GetCommand::Site(args) => site::handle(args, global).await,
    }
}

/// Open a console session from the config file, profile and CLI overrides.
pub(crate) fn connect(global: &GlobalOpts) -> Result<Platform, CliError> {
    let platform_config = config::build_platform_config(global)?;
    tracing::debug!(
        api_domain = %platform_config.api_domain,
        app_id = ?platform_config.app_id,
        "opening console session"
    );
    Ok(Platform::new(platform_config)?)
}
