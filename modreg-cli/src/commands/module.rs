//! Module command handlers
//!
//! Handles searching the registry, listing versions and showing the details
//! of a module's latest version.

use anyhow::Result;
use clap::Subcommand;
use colored::*;
use modreg_client::{ModuleCatalog, QueryState};
use modreg_core::domain::module::{ModuleDetail, ModuleRef, ModuleSummary};
use modreg_core::dto::search::{DEFAULT_LIMIT, SearchParams};

use super::settled;

/// Module subcommands
#[derive(Subcommand)]
pub enum ModuleCommands {
    /// Search modules
    Search {
        /// Search text (empty lists everything)
        #[arg(default_value = "")]
        query: String,

        /// Only modules for this provider
        #[arg(short, long)]
        provider: Option<String>,

        /// Only modules in this namespace
        #[arg(short, long)]
        namespace: Option<String>,

        /// Page size
        #[arg(long, default_value_t = DEFAULT_LIMIT)]
        limit: u32,

        /// Results to skip
        #[arg(long, default_value_t = 0)]
        offset: u32,
    },
    /// List published versions of a module
    Versions {
        /// Module as namespace/name/provider
        #[arg(value_parser = parse_module)]
        module: ModuleRef,
    },
    /// Show the latest version of a module
    Show {
        /// Module as namespace/name/provider
        #[arg(value_parser = parse_module)]
        module: ModuleRef,

        /// Also print the downloaded module content
        #[arg(long)]
        content: bool,
    },
}

fn parse_module(s: &str) -> Result<ModuleRef> {
    Ok(ModuleRef::parse(s)?)
}

/// Handle module commands
///
/// Routes module subcommands to their respective handlers.
///
/// # Arguments
/// * `command` - The module command to execute
/// * `catalog` - The shared module catalog
pub async fn handle_module_command(
    command: ModuleCommands,
    catalog: &ModuleCatalog,
) -> Result<()> {
    match command {
        ModuleCommands::Search {
            query,
            provider,
            namespace,
            limit,
            offset,
        } => {
            let params = SearchParams {
                query,
                provider: provider.filter(|p| !p.is_empty()),
                namespace: namespace.filter(|n| !n.is_empty()),
                limit,
                offset,
            };
            search_modules(catalog, &params).await
        }
        ModuleCommands::Versions { module } => list_versions(catalog, &module).await,
        ModuleCommands::Show { module, content } => show_module(catalog, &module, content).await,
    }
}

/// Search and list matching modules
async fn search_modules(catalog: &ModuleCatalog, params: &SearchParams) -> Result<()> {
    let mut state = QueryState::default();
    state.run(catalog.search_modules(params)).await;
    let modules = settled(state)?;

    if modules.is_empty() {
        println!("{}", "No modules found.".yellow());
    } else {
        println!("{}", format!("Found {} module(s):", modules.len()).bold());
        println!();
        for module in &modules {
            print_module_summary(module);
        }
    }

    Ok(())
}

/// List the versions of a module
async fn list_versions(catalog: &ModuleCatalog, module: &ModuleRef) -> Result<()> {
    let mut state = QueryState::default();
    state.run(catalog.get_module_versions(module)).await;
    let versions = settled(state)?;

    if versions.is_empty() {
        println!("{}", "No versions available.".yellow());
    } else {
        println!("{}", format!("Versions of {}:", module).bold());
        for version in versions {
            println!("  {} {}", "▸".cyan(), version);
        }
    }

    Ok(())
}

/// Show details of the latest version of a module
async fn show_module(catalog: &ModuleCatalog, module: &ModuleRef, content: bool) -> Result<()> {
    let mut state = QueryState::default();
    state.run(catalog.get_module_details(module)).await;
    let detail = settled(state)?;

    print_module_details(&detail);

    if content {
        println!("\n{}", "Content:".bold());
        println!("{}", "─".repeat(80).dimmed());
        if detail.content.is_empty() {
            println!("{}", "No content returned".dimmed());
        } else {
            println!("{}", detail.content);
        }
        println!("{}", "─".repeat(80).dimmed());
    }

    Ok(())
}

/// Print a module summary
fn print_module_summary(module: &ModuleSummary) {
    // Without a full identity there is nothing to navigate to
    let title = match module.reference() {
        Some(reference) => reference.to_string().bold(),
        None => module.name.as_str().bold(),
    };

    println!("  {} {}", "▸".cyan(), title);
    if !module.version.is_empty() {
        println!("    Version:     {}", module.version.dimmed());
    }
    println!(
        "    Description: {}",
        or_placeholder(&module.description, "No description available").dimmed()
    );
    if !module.owner.is_empty() {
        println!("    Owner:       {}", module.owner.dimmed());
    }
    if !module.source.is_empty() {
        println!("    Source:      {}", module.source.dimmed());
    }
    println!();
}

/// Print detailed module information
fn print_module_details(detail: &ModuleDetail) {
    println!("{}", detail.name.bold());
    println!(
        "  Provider: {}   Version: {}",
        detail.provider.cyan(),
        detail.version.magenta()
    );
    if let Some(reference) = detail.reference() {
        println!("  Module:   {}", reference.to_string().dimmed());
    }
    if !detail.download_url.is_empty() {
        println!("  Download: {}", detail.download_url.dimmed());
    }
    println!();
    println!("{}", or_placeholder(&detail.description, "No description available"));

    section("README");
    println!("{}", or_placeholder(&detail.readme, "No README available"));

    section("Inputs");
    if detail.inputs.is_empty() {
        println!("No inputs defined");
    }
    for input in &detail.inputs {
        println!("  {} {}", "▸".cyan(), input.name.bold());
        println!("    Type: {}", input.input_type.dimmed());
        if !input.description.is_empty() {
            println!("    {}", input.description);
        }
        if let Some(default) = &input.default {
            println!("    Default: {}", default.to_string().dimmed());
        }
    }

    section("Outputs");
    if detail.outputs.is_empty() {
        println!("No outputs defined");
    }
    for output in &detail.outputs {
        println!("  {} {}", "▸".cyan(), output.name.bold());
        if !output.description.is_empty() {
            println!("    {}", output.description);
        }
    }

    section("Dependencies");
    if detail.dependencies.is_empty() {
        println!("No dependencies");
    }
    for dependency in &detail.dependencies {
        println!("  {} {}", "▸".cyan(), dependency.source.underline());
        println!("    Version: {}", dependency.version.dimmed());
    }
}

fn section(title: &str) {
    println!("\n{}", title.bold());
    println!("{}", "─".repeat(80).dimmed());
}

fn or_placeholder<'a>(text: &'a str, placeholder: &'a str) -> &'a str {
    if text.is_empty() { placeholder } else { text }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(subcommand)]
        command: ModuleCommands,
    }

    #[test]
    fn test_search_defaults() {
        let cli = TestCli::parse_from(["modreg", "search", "vpc", "--provider", "aws"]);
        let ModuleCommands::Search {
            query,
            provider,
            namespace,
            limit,
            offset,
        } = cli.command
        else {
            panic!("expected search");
        };
        assert_eq!(query, "vpc");
        assert_eq!(provider.as_deref(), Some("aws"));
        assert!(namespace.is_none());
        assert_eq!(limit, 10);
        assert_eq!(offset, 0);
    }

    #[test]
    fn test_module_argument_is_validated() {
        let cli = TestCli::parse_from(["modreg", "show", "hashicorp/consul/aws", "--content"]);
        let ModuleCommands::Show { module, content } = cli.command else {
            panic!("expected show");
        };
        assert_eq!(module.to_string(), "hashicorp/consul/aws");
        assert!(content);

        assert!(TestCli::try_parse_from(["modreg", "versions", "hashicorp/consul"]).is_err());
    }

    #[test]
    fn test_or_placeholder() {
        assert_eq!(or_placeholder("", "none"), "none");
        assert_eq!(or_placeholder("text", "none"), "text");
    }
}
