//! CLI module - command-line interface definitions and handlers
//!
//! Uses clap v4 with derive macros for argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use output::OutputFormat;

pub mod card;
pub mod commands;
pub mod output;

/// s24 - Browse and get recommendations for skills learnable in 24 hours
#[derive(Parser, Debug)]
#[command(name = "s24")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable machine-readable JSON output
    #[arg(long, short = 'm', global = true)]
    pub machine: bool,

    /// Output format (human, json, plain)
    #[arg(long, short = 'O', global = true, value_enum)]
    pub output_format: Option<OutputFormat>,

    /// Force plain output (no colors, no Unicode)
    #[arg(long, global = true)]
    pub plain: bool,

    /// Color mode: auto, always, never
    #[arg(long, global = true, value_name = "WHEN")]
    pub color: Option<ColorMode>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Config file path (default: ~/.config/s24/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorMode {
    /// Auto-detect based on terminal
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl Cli {
    /// Get the effective output format.
    ///
    /// Priority order:
    /// 1. `--plain` → Plain format
    /// 2. `--output-format` → explicit format
    /// 3. `--machine` → JSON format (shorthand)
    /// 4. Default → Human format
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        if self.plain {
            return OutputFormat::Plain;
        }

        if let Some(fmt) = self.output_format {
            return fmt;
        }

        if self.machine {
            return OutputFormat::Json;
        }

        OutputFormat::Human
    }

    /// Check if plain mode is forced via CLI flags or color mode.
    #[must_use]
    pub fn force_plain(&self) -> bool {
        self.plain || self.color == Some(ColorMode::Never)
    }

    /// Check if rich mode is forced via CLI flags.
    #[must_use]
    pub fn force_rich(&self) -> bool {
        self.color == Some(ColorMode::Always)
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the skill catalog
    List(commands::list::ListArgs),

    /// Search the catalog by free text and category
    Search(commands::search::SearchArgs),

    /// List categories with skill counts
    Categories(commands::categories::CategoriesArgs),

    /// Show skill details
    Show(commands::show::ShowArgs),

    /// Recommend skills for an available-hours budget
    Recommend(commands::recommend::RecommendArgs),

    /// Total tracked activity hours and the share of a timeframe they use
    Budget(commands::budget::BudgetArgs),

    /// Open a learning-course search for a skill in the browser
    Learn(commands::learn::LearnArgs),

    /// Generate shell completions
    Completions(commands::completions::CompletionsArgs),
}
