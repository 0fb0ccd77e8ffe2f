//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `ARCHFORGE_<SECTION>__<KEY>`,
//!    e.g. `ARCHFORGE_DEFAULTS__MODULE`
//! 3. Config file (`--config`, else the platform config directory)
//! 4. Built-in defaults

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Module path offered when the user just presses Enter.
pub const DEFAULT_MODULE: &str = "github.com/user/project";

const ENV_PREFIX: &str = "ARCHFORGE";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Values offered at the interactive prompts.
    pub defaults: Defaults,
    /// How `generate` behaves.
    pub generate: GenerateConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// Module path suggested by the module prompt.
    pub module: String,
    /// Architecture highlighted first in the selection menus.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub architecture: Option<String>,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            module: DEFAULT_MODULE.into(),
            architecture: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateConfig {
    /// Try the fuzzy finders before the numbered menu.
    pub fuzzy: bool,
    /// Always write through a staging directory.
    pub staged: bool,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            fuzzy: true,
            staged: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration from file and environment on top of the defaults.
    ///
    /// A missing file is not an error: `init` is how it gets created.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let path = config_file.cloned().unwrap_or_else(Self::config_path);
        Self::load_from(&path, Environment::with_prefix(ENV_PREFIX))
    }

    fn load_from(path: &Path, env: Environment) -> anyhow::Result<Self> {
        debug!(path = %path.display(), exists = path.exists(), "Loading configuration");

        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml).required(false))
            .add_source(env.prefix_separator("_").separator("__").try_parsing(true))
            .build()
            .with_context(|| format!("failed to read configuration from {}", path.display()))?;

        settings
            .try_deserialize()
            .context("configuration has invalid values")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.archforge.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "archforge", "archforge")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".archforge.toml"))
    }

    /// Look up a dotted key, e.g. `generate.fuzzy`.
    pub fn get(&self, key: &str) -> Option<String> {
        let value = match key {
            "defaults.module" => self.defaults.module.clone(),
            "defaults.architecture" => self.defaults.architecture.clone().unwrap_or_default(),
            "generate.fuzzy" => self.generate.fuzzy.to_string(),
            "generate.staged" => self.generate.staged.to_string(),
            "output.no_color" => self.output.no_color.to_string(),
            "output.format" => self.output.format.clone(),
            _ => return None,
        };
        Some(value)
    }

    /// Every key accepted by [`get`](Self::get).
    pub const KEYS: [&'static str; 6] = [
        "defaults.module",
        "defaults.architecture",
        "generate.fuzzy",
        "generate.staged",
        "output.no_color",
        "output.format",
    ];
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn no_env() -> Environment {
        Environment::with_prefix(ENV_PREFIX).source(Some(HashMap::new()))
    }

    #[test]
    fn defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.defaults.module, DEFAULT_MODULE);
        assert!(cfg.generate.fuzzy);
        assert!(!cfg.generate.staged);
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let tmp = TempDir::new().unwrap();
        let cfg = AppConfig::load_from(&tmp.path().join("absent.toml"), no_env()).unwrap();
        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn file_values_override_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(
            &path,
            "[defaults]\nmodule = \"gitlab.com/team/svc\"\n\n[generate]\nstaged = true\n",
        )
        .unwrap();

        let cfg = AppConfig::load_from(&path, no_env()).unwrap();
        assert_eq!(cfg.defaults.module, "gitlab.com/team/svc");
        assert!(cfg.generate.staged);
        assert!(cfg.generate.fuzzy);
    }

    #[test]
    fn environment_overrides_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "[generate]\nfuzzy = true\n").unwrap();

        let env = Environment::with_prefix(ENV_PREFIX).source(Some(HashMap::from([
            ("ARCHFORGE_GENERATE__FUZZY".to_string(), "false".to_string()),
            ("ARCHFORGE_DEFAULTS__MODULE".to_string(), "example.com/env".to_string()),
        ])));

        let cfg = AppConfig::load_from(&path, env).unwrap();
        assert!(!cfg.generate.fuzzy);
        assert_eq!(cfg.defaults.module, "example.com/env");
    }

    #[test]
    fn serialised_defaults_load_back() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, toml::to_string_pretty(&AppConfig::default()).unwrap()).unwrap();

        assert_eq!(
            AppConfig::load_from(&path, no_env()).unwrap(),
            AppConfig::default()
        );
    }

    #[test]
    fn get_known_and_unknown_keys() {
        let cfg = AppConfig::default();
        for key in AppConfig::KEYS {
            assert!(cfg.get(key).is_some(), "{key}");
        }
        assert_eq!(cfg.get("generate.fuzzy").as_deref(), Some("true"));
        assert!(cfg.get("does.not.exist").is_none());
    }
}
