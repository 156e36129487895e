//! Account command handlers

use anyhow::Result;
use clap::Subcommand;
use colored::*;
use modreg_client::{ModuleCatalog, QueryState};
use modreg_core::dto::register::RegisterUser;

use super::settled;

/// Account subcommands
#[derive(Subcommand)]
pub enum AccountCommands {
    /// Register a new account
    Register {
        #[arg(short, long)]
        username: String,

        #[arg(short, long)]
        email: String,

        /// At least 6 characters
        #[arg(short, long, env = "MODREG_PASSWORD", hide_env_values = true)]
        password: String,
    },
}

/// Handle account commands
pub async fn handle_account_command(
    command: AccountCommands,
    catalog: &ModuleCatalog,
) -> Result<()> {
    match command {
        AccountCommands::Register {
            username,
            email,
            password,
        } => register(catalog, RegisterUser::new(username, email, password)).await,
    }
}

async fn register(catalog: &ModuleCatalog, user: RegisterUser) -> Result<()> {
    let mut state = QueryState::default();
    state.run(catalog.register(&user)).await;
    settled(state)?;

    println!("{}", "✓ Registration successful!".green().bold());
    println!("  Username: {}", user.username.cyan());
    println!("  Email:    {}", user.email.dimmed());

    Ok(())
}
