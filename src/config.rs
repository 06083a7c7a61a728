use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub log_level: Option<String>,
    pub paths: PathsConfig,
    pub tui: TuiConfig,
}

/// Directory overrides; unset fields fall back to the detected locations
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub source_dir: Option<PathBuf>,
    pub runtime_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    pub tick_rate_ms: u64,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self { tick_rate_ms: 250 }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: Some("info".to_string()),
            paths: PathsConfig::default(),
            tui: TuiConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // If explicit config path provided, try to load it
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        let project_name = env!("CARGO_PKG_NAME");

        // Try primary location: ~/.config/<project>/<project>.yml
        if let Some(config_dir) = dirs::config_dir() {
            let primary_config = config_dir.join(project_name).join(format!("{}.yml", project_name));
            if primary_config.exists() {
                match Self::load_from_file(&primary_config) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        log::warn!("Failed to load config from {}: {}", primary_config.display(), e);
                    }
                }
            }
        }

        // Try fallback location: ./<project>.yml
        let fallback_config = PathBuf::from(format!("{}.yml", project_name));
        if fallback_config.exists() {
            match Self::load_from_file(&fallback_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    log::warn!("Failed to load config from {}: {}", fallback_config.display(), e);
                }
            }
        }

        log::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Log filter to use when RUST_LOG is not set
    ///
    /// `verbose` (the `-v` flag) wins over the configured level.
    pub fn log_filter(&self, verbose: bool) -> &str {
        if verbose {
            return "debug";
        }
        self.log_level.as_deref().unwrap_or("info")
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        log::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.log_filter(false), "info");
        assert!(config.paths.source_dir.is_none());
        assert!(config.paths.runtime_dir.is_none());
        assert_eq!(config.tui.tick_rate_ms, 250);
    }

    #[test]
    fn test_verbose_raises_log_filter() {
        let mut config = Config::default();
        assert_eq!(config.log_filter(true), "debug");

        config.log_level = Some("warn".to_string());
        assert_eq!(config.log_filter(false), "warn");
        assert_eq!(config.log_filter(true), "debug");
    }

    #[test]
    fn test_load_explicit_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("toolbox.yml");
        fs::write(
            &path,
            "log_level: debug\npaths:\n  source_dir: /opt/toolbox/tools\ntui:\n  tick_rate_ms: 100\n",
        )
        .unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.log_filter(false), "debug");
        assert_eq!(config.paths.source_dir, Some(PathBuf::from("/opt/toolbox/tools")));
        assert!(config.paths.runtime_dir.is_none());
        assert_eq!(config.tui.tick_rate_ms, 100);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: Config = serde_yaml::from_str("paths:\n  runtime_dir: /var/tmp/tools\n").unwrap();
        assert_eq!(config.paths.runtime_dir, Some(PathBuf::from("/var/tmp/tools")));
        assert_eq!(config.tui.tick_rate_ms, 250);
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("absent.yml");
        assert!(Config::load(Some(&path)).is_err());
    }

    #[test]
    fn test_malformed_file_is_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("bad.yml");
        fs::write(&path, "tui: [not, a, map]\n").unwrap();
        assert!(Config::load(Some(&path)).is_err());
    }
}
