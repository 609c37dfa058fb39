use crate::domain::Version;
use crate::error::{Result, VtagError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the project-local configuration file
pub const CONFIG_FILE_NAME: &str = "vtag.toml";

/// Represents the complete configuration for vtag.
///
/// Only the command-line front end reads it; the version rules themselves
/// have no knobs.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub behavior: BehaviorConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

fn default_include_release_candidates() -> bool {
    true
}

fn default_initial_tag() -> String {
    "v0.1.0".to_string()
}

/// Configuration for tag selection behavior.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct BehaviorConfig {
    /// Consider release candidates when picking the latest tag
    #[serde(default = "default_include_release_candidates")]
    pub include_release_candidates: bool,

    /// Tag used by `next` when no prior tag exists
    #[serde(default = "default_initial_tag")]
    pub initial_tag: String,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        BehaviorConfig {
            include_release_candidates: default_include_release_candidates(),
            initial_tag: default_initial_tag(),
        }
    }
}

impl BehaviorConfig {
    /// Parse the configured initial tag
    pub fn initial_version(&self) -> Result<Version> {
        Version::parse(&self.initial_tag).map_err(|_| {
            VtagError::config(format!(
                "initial_tag '{}' is not a valid version tag",
                self.initial_tag
            ))
        })
    }
}

/// Configuration for printed output.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct OutputConfig {
    /// Print versions without the leading `v`
    #[serde(default)]
    pub plain: bool,
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `vtag.toml` in current directory
/// 3. `.vtag.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let path = match config_path {
        Some(path) => Some(PathBuf::from(path)),
        None => discover_config_path(),
    };

    let Some(path) = path else {
        tracing::debug!("no configuration file found, using defaults");
        return Ok(Config::default());
    };

    tracing::debug!(path = %path.display(), "loading configuration");
    let config_str = fs::read_to_string(&path)?;
    let config: Config = toml::from_str(&config_str)?;
    Ok(config)
}

fn discover_config_path() -> Option<PathBuf> {
    let local = Path::new(".").join(CONFIG_FILE_NAME);
    if local.exists() {
        return Some(local);
    }

    let global = dirs::config_dir()?.join(format!(".{}", CONFIG_FILE_NAME));
    global.exists().then_some(global)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.behavior.include_release_candidates);
        assert_eq!(config.behavior.initial_tag, "v0.1.0");
        assert!(!config.output.plain);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: Config = toml::from_str("[output]\nplain = true\n").unwrap();
        assert!(config.output.plain);
        assert_eq!(config.behavior, BehaviorConfig::default());
    }

    #[test]
    fn test_initial_version() {
        let behavior = BehaviorConfig::default();
        assert_eq!(behavior.initial_version().unwrap(), Version::new(0, 1, 0));
    }

    #[test]
    fn test_initial_version_invalid() {
        let behavior = BehaviorConfig {
            initial_tag: "0.1.0".to_string(),
            ..BehaviorConfig::default()
        };
        let err = behavior.initial_version().unwrap_err();
        assert!(matches!(err, VtagError::Config(_)));
        assert!(err.to_string().contains("0.1.0"));
    }
}
