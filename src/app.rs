//! Application context shared by all CLI commands.

use tracing::warn;

use crate::catalog::SkillCatalog;
use crate::cli::{Cli, OutputFormat};
use crate::config::Config;
use crate::error::Result;
use crate::recommend::RecommendParams;

/// Everything a command handler needs: config, the loaded catalog and the
/// resolved output mode.
pub struct AppContext {
    pub config: Config,
    pub catalog: SkillCatalog,
    pub output_format: OutputFormat,
}

impl AppContext {
    /// Build the context from parsed CLI flags.
    ///
    /// A catalog load failure is logged and degrades to an empty catalog;
    /// commands then render their empty states instead of crashing.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let config = Config::load(cli.config.as_deref())?;

        if cli.force_plain() {
            colored::control::set_override(false);
            console::set_colors_enabled(false);
        } else if cli.force_rich() {
            colored::control::set_override(true);
            console::set_colors_enabled(true);
        }

        let catalog = SkillCatalog::load().unwrap_or_else(|err| {
            warn!(error = %err, "failed to load skill catalog, continuing with empty catalog");
            SkillCatalog::default()
        });

        Ok(Self {
            config,
            catalog,
            output_format: cli.output_format(),
        })
    }

    /// Recommendation parameters derived from config.
    #[must_use]
    pub fn recommend_params(&self) -> RecommendParams {
        RecommendParams {
            hours_per_language: self.config.recommend.hours_per_language,
            quick_win_categories: self.config.recommend.quick_win_categories,
            achievable_categories: self.config.recommend.achievable_categories,
            stretch_categories: self.config.recommend.stretch_categories,
        }
    }

    /// Whether output should be machine-readable JSON.
    #[must_use]
    pub const fn robot_mode(&self) -> bool {
        self.output_format.is_machine_readable()
    }
}
