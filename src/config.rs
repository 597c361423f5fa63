//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/lswizard/lswizard.toml`
//! 3. Environment variables: `LSWIZARD_*` prefix

use std::path::PathBuf;

use config::{Config, ConfigError, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;

/// Unified configuration for lswizard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Directory instruction documents are fetched from
    pub instructions_dir: PathBuf,
    /// Decision tree TOML file (the built-in catalog is used when unset)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tree_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            instructions_dir: PathBuf::from("instructions"),
            tree_file: None,
        }
    }
}

/// Get the XDG config directory for lswizard.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "lswizard").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("lswizard.toml"))
}

impl Settings {
    /// Load settings with layered precedence.
    pub fn load() -> Result<Self, ApplicationError> {
        let defaults = Settings::default();
        let mut builder = Config::builder().set_default(
            "instructions_dir",
            defaults.instructions_dir.to_string_lossy().to_string(),
        )
        .map_err(config_err)?;

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                builder = builder.add_source(File::from(global_path).required(false));
            }
        }

        builder = builder.add_source(Environment::with_prefix("LSWIZARD").separator("__"));

        let config = builder.build().map_err(config_err)?;
        let mut settings: Self = config.try_deserialize().map_err(config_err)?;

        // Expand ~ and $VAR in path-like fields
        settings.expand_paths();

        Ok(settings)
    }

    /// Expand shell variables and tilde in path-like fields.
    ///
    /// Handles `~`, `$VAR`, and `${VAR}` syntax.
    fn expand_paths(&mut self) {
        self.instructions_dir = PathBuf::from(expand(&self.instructions_dir.to_string_lossy()));
        self.tree_file = self
            .tree_file
            .take()
            .map(|p| PathBuf::from(expand(&p.to_string_lossy())));
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# lswizard configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/lswizard/lswizard.toml
#   Env:    LSWIZARD_* environment variables (explicit overrides)

# Directory instruction documents are fetched from, for tree leaves that
# reference an external file instead of carrying inline text.
# instructions_dir = "instructions"

# Decision tree to navigate. Falls back to the built-in editor catalog.
# tree_file = "~/.config/lswizard/editors.toml"
"#
        .to_string()
    }
}

/// Expand environment variables in a path string, leaving it untouched on
/// failure.
fn expand(path: &str) -> String {
    shellexpand::full(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_no_config_when_loading_then_uses_defaults() {
        let settings = Settings::load().expect("load defaults");
        assert!(!settings.instructions_dir.as_os_str().is_empty());
    }

    #[test]
    fn given_tilde_in_paths_when_expand_paths_then_expands_to_home() {
        let mut settings = Settings {
            instructions_dir: PathBuf::from("~/.local/share/lswizard/instructions"),
            tree_file: Some(PathBuf::from("$HOME/editors.toml")),
        };

        settings.expand_paths();

        let home = std::env::var("HOME").expect("HOME should be set");
        assert!(
            settings.instructions_dir.to_string_lossy().starts_with(&home),
            "instructions_dir should expand tilde: {}",
            settings.instructions_dir.display()
        );
        assert!(
            settings
                .tree_file
                .as_ref()
                .unwrap()
                .to_string_lossy()
                .starts_with(&home),
            "tree_file should expand $HOME"
        );
    }

    #[test]
    fn given_settings_when_serializing_then_round_trips_through_toml() {
        let settings = Settings::default();
        let toml = settings.to_toml().expect("serialize");
        assert!(toml.contains("instructions_dir"));
    }
}
