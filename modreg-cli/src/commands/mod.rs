//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod account;
mod module;

pub use account::AccountCommands;
pub use module::ModuleCommands;

use anyhow::Result;
use clap::Subcommand;
use modreg_client::{ModuleCatalog, QueryState};

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Browse modules
    #[command(flatten)]
    Module(ModuleCommands),
    /// Account management
    Account {
        #[command(subcommand)]
        command: AccountCommands,
    },
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
///
/// # Arguments
/// * `command` - The command to execute
/// * `catalog` - The catalog shared by all commands
pub async fn handle_command(command: Commands, catalog: &ModuleCatalog) -> Result<()> {
    match command {
        Commands::Module(command) => module::handle_module_command(command, catalog).await,
        Commands::Account { command } => account::handle_account_command(command, catalog).await,
    }
}

/// Unwrap a finished query, turning its error into the message shown to the user
fn settled<T>(state: QueryState<T>) -> Result<T> {
    match state.into_result() {
        Some(Ok(data)) => Ok(data),
        Some(Err(err)) => Err(err.into()),
        None => anyhow::bail!("query did not complete"),
    }
}
