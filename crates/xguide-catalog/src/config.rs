//! Configuration loading from `~/.xguide/config.toml` with defaults.
//!
//! `XGUIDE_HOME` overrides the home directory. A missing, unreadable or
//! malformed config never aborts startup: the loader warns and uses defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// What to do when a registered template id is already present in the store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// Replace the existing record in place; registration is idempotent per id.
    #[default]
    Replace,
    /// Reject the whole batch with `CatalogError::DuplicateId`.
    Reject,
}

/// Catalog configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Register the compile-time bundled templates.
    pub include_bundled: bool,
    /// Extra directories of `*.toml` template files, registered after the bundle.
    pub template_dirs: Vec<PathBuf>,
    pub duplicate_policy: DuplicatePolicy,
    /// Fail store construction when validation reports any issue.
    pub strict_relations: bool,
    /// Number of chapters in the guide; related chapters must fall in `1..=chapter_count`.
    pub chapter_count: u32,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            include_bundled: true,
            template_dirs: Vec::new(),
            duplicate_policy: DuplicatePolicy::Replace,
            strict_relations: false,
            chapter_count: 12,
        }
    }
}

/// Resolve the xguide home directory (`$XGUIDE_HOME` or `~/.xguide`).
pub fn xguide_home() -> PathBuf {
    if let Ok(home) = std::env::var("XGUIDE_HOME") {
        return PathBuf::from(home);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".xguide")
}

pub fn default_config_path() -> PathBuf {
    xguide_home().join("config.toml")
}

/// Load catalog configuration from a TOML file, with defaults.
pub fn load_config(path: Option<&Path>) -> CatalogConfig {
    let config_path = path
        .map(|p| p.to_path_buf())
        .unwrap_or_else(default_config_path);

    if !config_path.exists() {
        info!(
            path = %config_path.display(),
            "Config file not found, using defaults"
        );
        return CatalogConfig::default();
    }

    let contents = match std::fs::read_to_string(&config_path) {
        Ok(c) => c,
        Err(e) => {
            warn!(
                error = %e,
                path = %config_path.display(),
                "Failed to read config file, using defaults"
            );
            return CatalogConfig::default();
        }
    };

    match toml::from_str::<CatalogConfig>(&contents) {
        Ok(mut config) => {
            // Relative template dirs are resolved against the config file's directory.
            let base = config_path.parent().unwrap_or_else(|| Path::new("."));
            for dir in &mut config.template_dirs {
                if dir.is_relative() {
                    *dir = base.join(&*dir);
                }
            }
            info!(path = %config_path.display(), "Loaded configuration");
            config
        }
        Err(e) => {
            warn!(
                error = %e,
                path = %config_path.display(),
                "Failed to parse config, using defaults"
            );
            CatalogConfig::default()
        }
    }
}
