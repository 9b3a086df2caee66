//! Clap CLI definitions for xguide.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub const AFTER_HELP: &str = "\
\x1b[1;36mExamples:\x1b[0m
  xguide categories                     List the 14 template categories
  xguide list --category value          Templates in one category
  xguide list --difficulty beginner     Templates for beginners
  xguide list --chapter 3               Templates tied to guide chapter 3
  xguide show engagement-01             Full template with related templates
  xguide search ブックマーク            Search titles, descriptions and effects
  xguide validate                       Check relations and chapter references

\x1b[1;36mConfig:\x1b[0m
  ~/.xguide/config.toml (override the directory with XGUIDE_HOME)";

/// xguide: browse the X Algorithm Guide template catalog.
#[derive(Parser)]
#[command(
    name = "xguide",
    version,
    about = "X Algorithm Guide \u{2014} post template catalog",
    after_help = AFTER_HELP,
)]
pub struct Cli {
    /// Path to config file.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List template categories with their template counts.
    Categories {
        /// Output as JSON for scripting.
        #[arg(long)]
        json: bool,
    },
    /// List templates, optionally filtered.
    List {
        /// Category id (e.g. "value").
        #[arg(long, short = 'c')]
        category: Option<String>,
        /// beginner, intermediate or advanced.
        #[arg(long, short = 'd')]
        difficulty: Option<String>,
        /// Guide chapter number.
        #[arg(long)]
        chapter: Option<u32>,
        /// Free-text query over title, description and effects.
        #[arg(long, short = 'q')]
        query: Option<String>,
        /// Output as JSON for scripting.
        #[arg(long)]
        json: bool,
    },
    /// Show one template in full.
    Show {
        /// Template id (e.g. "engagement-01").
        id: String,
        /// Output as JSON for scripting.
        #[arg(long)]
        json: bool,
    },
    /// List the templates a template points to.
    Related {
        /// Template id.
        id: String,
        /// Output as JSON for scripting.
        #[arg(long)]
        json: bool,
    },
    /// Search titles, descriptions and effects (case-insensitive).
    Search {
        query: String,
        /// Output as JSON for scripting.
        #[arg(long)]
        json: bool,
    },
    /// Check related templates, chapters and required fields.
    Validate {
        /// Output as JSON for scripting.
        #[arg(long)]
        json: bool,
    },
    /// Show catalog counts by category and difficulty.
    Stats {
        /// Output as JSON for scripting.
        #[arg(long)]
        json: bool,
    },
    /// Print the effective configuration.
    Config,
    /// Generate shell completion scripts.
    Completion {
        /// Shell to generate completions for.
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
