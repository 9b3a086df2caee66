//! xguide CLI: browse the X Algorithm Guide template catalog from a terminal.
//!
//! Every invocation builds the catalog in-process from the bundled templates
//! plus any template directories named in the config.

mod cli;
mod cmd;
mod table;
mod ui;

use crate::cli::*;
use clap::Parser;
use tracing::debug;
use xguide_catalog::config::load_config;
use xguide_catalog::{CatalogConfig, TemplateStore};

/// Trace to stderr so JSON and table output on stdout stay clean.
/// Defaults to `warn`; set `RUST_LOG=xguide_catalog=debug` for load details.
fn init_tracing_stderr() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Build the catalog or exit with an error.
fn load_store(config: &CatalogConfig) -> TemplateStore {
    match TemplateStore::from_config(config) {
        Ok(store) => {
            debug!(templates = store.len(), "Template store built");
            store
        }
        Err(e) => {
            ui::error(&format!("Failed to load template catalog: {e}"));
            std::process::exit(1);
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing_stderr();

    let Some(command) = cli.command else {
        use clap::CommandFactory;
        let _ = Cli::command().print_help();
        println!();
        return;
    };

    let config = load_config(cli.config.as_deref());
    debug!(
        include_bundled = config.include_bundled,
        template_dirs = config.template_dirs.len(),
        policy = ?config.duplicate_policy,
        "Configuration loaded"
    );

    match command {
        Commands::Categories { json } => cmd::template::cmd_categories(&load_store(&config), json),
        Commands::List {
            category,
            difficulty,
            chapter,
            query,
            json,
        } => cmd::template::cmd_list(
            &load_store(&config),
            category.as_deref(),
            difficulty.as_deref(),
            chapter,
            query,
            json,
        ),
        Commands::Show { id, json } => cmd::template::cmd_show(&load_store(&config), &id, json),
        Commands::Related { id, json } => {
            cmd::template::cmd_related(&load_store(&config), &id, json)
        }
        Commands::Search { query, json } => {
            cmd::template::cmd_search(&load_store(&config), &query, json)
        }
        Commands::Validate { json } => {
            cmd::system::cmd_validate(&load_store(&config), &config, json)
        }
        Commands::Stats { json } => cmd::system::cmd_stats(&load_store(&config), json),
        Commands::Config => cmd::system::cmd_config(&config),
        Commands::Completion { shell } => cmd::system::cmd_completion(shell),
    }
}
