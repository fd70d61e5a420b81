//! Configuration loading and merging.
//!
//! Config is assembled from defaults, then a TOML file (an explicit
//! `--config` path, the `S24_CONFIG` env var, or the global
//! `<config dir>/s24/config.toml`), then environment overrides. File
//! sections are partial: only the keys present in the file are merged.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, S24Error};
use crate::launch::SearchEngine;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub recommend: RecommendConfig,
    #[serde(default)]
    pub learn: LearnConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Recommendation engine tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendConfig {
    /// Flat hour cost assumed per language skill.
    pub hours_per_language: f64,
    /// Category cap for the quick-win tier.
    pub quick_win_categories: usize,
    /// Category cap for the achievable tier.
    pub achievable_categories: usize,
    /// Category cap for the stretch tier.
    pub stretch_categories: usize,
}

impl Default for RecommendConfig {
    fn default() -> Self {
        Self {
            hours_per_language: 300.0,
            quick_win_categories: 3,
            achievable_categories: 4,
            stretch_categories: 2,
        }
    }
}

/// Learn-launcher defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LearnConfig {
    /// Search engine used when `--engine` is not passed.
    #[serde(default)]
    pub engine: SearchEngine,
}

/// Display defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Default row cap for `list` and `search` output.
    pub list_limit: usize,
    /// Recommendations shown before `--all` is required.
    pub recommend_limit: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            list_limit: 50,
            recommend_limit: 10,
        }
    }
}

impl Config {
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let mut config = Self::default();

        let explicit = explicit_path
            .map(PathBuf::from)
            .or_else(|| std::env::var("S24_CONFIG").ok().map(PathBuf::from));

        if let Some(path) = explicit {
            if let Some(patch) = Self::load_patch(&path)? {
                config.merge_patch(patch);
            }
        } else if let Some(global) = Self::load_global()? {
            config.merge_patch(global);
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    fn load_global() -> Result<Option<ConfigPatch>> {
        // No config directory (e.g. bare containers) just means no global file
        let Some(dir) = dirs::config_dir() else {
            return Ok(None);
        };
        Self::load_patch(&dir.join("s24/config.toml"))
    }

    fn load_patch(path: &Path) -> Result<Option<ConfigPatch>> {
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|err| S24Error::Config(format!("read config {}: {err}", path.display())))?;
        let patch = toml::from_str(&raw)
            .map_err(|err| S24Error::Config(format!("parse config {}: {err}", path.display())))?;
        Ok(Some(patch))
    }

    fn merge_patch(&mut self, patch: ConfigPatch) {
        if let Some(patch) = patch.recommend {
            if let Some(v) = patch.hours_per_language {
                self.recommend.hours_per_language = v;
            }
            if let Some(v) = patch.quick_win_categories {
                self.recommend.quick_win_categories = v;
            }
            if let Some(v) = patch.achievable_categories {
                self.recommend.achievable_categories = v;
            }
            if let Some(v) = patch.stretch_categories {
                self.recommend.stretch_categories = v;
            }
        }
        if let Some(patch) = patch.learn {
            if let Some(v) = patch.engine {
                self.learn.engine = v;
            }
        }
        if let Some(patch) = patch.display {
            if let Some(v) = patch.list_limit {
                self.display.list_limit = v;
            }
            if let Some(v) = patch.recommend_limit {
                self.display.recommend_limit = v;
            }
        }
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(raw) = std::env::var("S24_HOURS_PER_LANGUAGE") {
            self.recommend.hours_per_language = raw.parse().map_err(|_| {
                S24Error::Config(format!("S24_HOURS_PER_LANGUAGE: invalid number '{raw}'"))
            })?;
        }
        if let Ok(raw) = std::env::var("S24_LEARN_ENGINE") {
            self.learn.engine =
                clap::ValueEnum::from_str(&raw, true).map_err(|_| {
                    S24Error::Config(format!("S24_LEARN_ENGINE: unknown engine '{raw}'"))
                })?;
        }
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.recommend.hours_per_language <= 0.0 {
            return Err(S24Error::Config(
                "recommend.hours_per_language must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
struct ConfigPatch {
    recommend: Option<RecommendPatch>,
    learn: Option<LearnPatch>,
    display: Option<DisplayPatch>,
}

#[derive(Debug, Deserialize)]
struct RecommendPatch {
    hours_per_language: Option<f64>,
    quick_win_categories: Option<usize>,
    achievable_categories: Option<usize>,
    stretch_categories: Option<usize>,
}

#[derive(Debug, Deserialize)]
struct LearnPatch {
    engine: Option<SearchEngine>,
}

#[derive(Debug, Deserialize)]
struct DisplayPatch {
    list_limit: Option<usize>,
    recommend_limit: Option<usize>,
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn defaults_are_sane() {
        let config = Config::default();
        assert!((config.recommend.hours_per_language - 300.0).abs() < f64::EPSILON);
        assert_eq!(config.recommend.quick_win_categories, 3);
        assert_eq!(config.recommend.achievable_categories, 4);
        assert_eq!(config.recommend.stretch_categories, 2);
        assert_eq!(config.learn.engine, SearchEngine::Google);
        assert_eq!(config.display.recommend_limit, 10);
    }

    #[test]
    fn partial_file_merges_over_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[recommend]\nhours_per_language = 250.0\n\n[learn]\nengine = \"youtube\"\n"
        )
        .unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert!((config.recommend.hours_per_language - 250.0).abs() < f64::EPSILON);
        assert_eq!(config.learn.engine, SearchEngine::Youtube);
        // Untouched sections keep defaults
        assert_eq!(config.display.list_limit, 50);
    }

    #[test]
    fn missing_explicit_file_falls_back_to_defaults() {
        let config = Config::load(Some(Path::new("/nonexistent/s24.toml"))).unwrap();
        assert_eq!(config.display.list_limit, 50);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "recommend = \"not a table\"").unwrap();

        let err = Config::load(Some(file.path())).unwrap_err();
        assert!(err.to_string().contains("parse config"));
    }

    #[test]
    fn nonpositive_language_hours_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[recommend]\nhours_per_language = 0.0").unwrap();

        assert!(Config::load(Some(file.path())).is_err());
    }
}
