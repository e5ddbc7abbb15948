use serde::{Deserialize, Serialize};
use std::path::Path;

/// Config file picked up from the working directory when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "sqft.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    // How results are printed
    #[serde(default)]
    pub output: OutputFormat,

    // Interactive mode converts as you type instead of on submit
    #[serde(default)]
    pub live: bool,

    // env_logger filter, overridden by RUST_LOG
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self::empty()
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config {}: {}", path.display(), e))?;
        Self::load_from_str(&content)
    }

    pub fn load_from_str(content: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    /// Explicit path if given, else `sqft.toml` in `dir` if present, else defaults
    pub fn discover<P: AsRef<Path>>(
        explicit: Option<&str>,
        dir: P,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        if let Some(path) = explicit {
            return Self::load_from_file(path);
        }

        let default_path = dir.as_ref().join(DEFAULT_CONFIG_FILE);
        if default_path.exists() {
            Self::load_from_file(default_path)
        } else {
            Ok(Self::empty())
        }
    }

    pub fn empty() -> Self {
        Self {
            output: OutputFormat::Text,
            live: false,
            log_level: default_log_level(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config() {
        let config = Config::load_from_str("").unwrap();
        assert_eq!(config, Config::empty());
        assert_eq!(config.output, OutputFormat::Text);
        assert!(!config.live);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_full_config() {
        let config = Config::load_from_str(
            r#"
output = "json"
live = true
log_level = "debug"
"#,
        )
        .unwrap();
        assert_eq!(config.output, OutputFormat::Json);
        assert!(config.live);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_invalid_output_format() {
        assert!(Config::load_from_str(r#"output = "xml""#).is_err());
    }

    #[test]
    fn test_discover_without_file() {
        let dir = std::env::temp_dir().join("sqft-config-test-missing");
        let config = Config::discover(None, &dir).unwrap();
        assert_eq!(config, Config::empty());
    }

    #[test]
    fn test_discover_explicit_missing_file() {
        let result = Config::discover(Some("/nonexistent/sqft.toml"), ".");
        assert!(result.is_err());
    }

    #[test]
    fn test_discover_reads_default_file() {
        let dir = std::env::temp_dir().join(format!("sqft-config-test-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(DEFAULT_CONFIG_FILE), "output = \"json\"\n").unwrap();

        let config = Config::discover(None, &dir).unwrap();
        assert_eq!(config.output, OutputFormat::Json);

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
