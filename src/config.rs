use crate::error::ConfigError;
use crate::numbers::NumberRange;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// First number to print
pub const STARTING_NUMBER_VAR: &str = "EXERCISE_01_STARTING_NUMBER";
/// Last number to print (inclusive)
pub const TOTAL_NUMBERS_VAR: &str = "EXERCISE_01_TOTAL_NUMBERS";
/// JSON file with the country records
pub const DATA_PATH_VAR: &str = "EXERCISE_02_DATA_PATH";
/// Comma separated country codes for the listed-countries query
pub const LISTED_COUNTRIES_VAR: &str = "EXERCISE_02_LISTED_COUNTRIES";

/// File name looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "visual-nuts.toml";

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Settings for the number printer
    #[serde(default)]
    pub numbers: NumbersConfig,

    /// Settings for the country language statistics
    #[serde(default)]
    pub languages: LanguagesConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumbersConfig {
    #[serde(default = "default_start")]
    pub start: i64,

    #[serde(default = "default_end")]
    pub end: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguagesConfig {
    /// JSON file holding an array of `{country, languages}` records
    #[serde(default = "default_data_path")]
    pub data_path: PathBuf,

    /// Countries whose languages are collected
    #[serde(default = "default_listed_countries")]
    pub listed_countries: Vec<String>,
}

// Default value helpers
fn default_start() -> i64 {
    1
}
fn default_end() -> i64 {
    100
}
fn default_data_path() -> PathBuf {
    PathBuf::from("assets/countries.json")
}
fn default_listed_countries() -> Vec<String> {
    vec!["BE".to_string(), "DE".to_string()]
}

impl Default for NumbersConfig {
    fn default() -> Self {
        Self {
            start: default_start(),
            end: default_end(),
        }
    }
}

impl Default for LanguagesConfig {
    fn default() -> Self {
        Self {
            data_path: default_data_path(),
            listed_countries: default_listed_countries(),
        }
    }
}

impl NumbersConfig {
    pub fn range(&self) -> NumberRange {
        NumberRange::new(self.start, self.end)
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config
            .validate()
            .with_context(|| format!("Invalid configuration in: {}", path.as_ref().display()))?;

        Ok(config)
    }

    /// Load the file layer of the configuration.
    ///
    /// An explicit path must exist. Otherwise `visual-nuts.toml` in
    /// `search_dir` is used, then the user-level config file, then defaults.
    pub fn load<P: AsRef<Path>>(explicit: Option<&Path>, search_dir: P) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        let local = search_dir.as_ref().join(CONFIG_FILE_NAME);
        if local.is_file() {
            debug!(path = %local.display(), "Using config file");
            return Self::from_file(&local);
        }

        if let Some(global) = Self::global_config_path().filter(|path| path.is_file()) {
            debug!(path = %global.display(), "Using global config file");
            return Self::from_file(&global);
        }

        Ok(Self::default())
    }

    /// Get the global configuration file path
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("visual-nuts").join("config.toml"))
    }

    /// Override settings from the process environment
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_env_with(|key| std::env::var(key).ok())
    }

    /// Override settings from `lookup`, which maps a variable name to its value.
    ///
    /// Unset and blank variables leave the current value alone.
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(value) = get(STARTING_NUMBER_VAR) {
            self.numbers.start = parse_bound(STARTING_NUMBER_VAR, &value)?;
        }
        if let Some(value) = get(TOTAL_NUMBERS_VAR) {
            self.numbers.end = parse_bound(TOTAL_NUMBERS_VAR, &value)?;
        }
        if let Some(value) = get(DATA_PATH_VAR) {
            self.languages.data_path = PathBuf::from(value.trim());
        }
        if let Some(value) = get(LISTED_COUNTRIES_VAR) {
            self.languages.listed_countries = parse_country_list(&value);
        }

        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.languages.data_path.as_os_str().is_empty() {
            return Err(ConfigError::EmptyDataPath);
        }

        if self
            .languages
            .listed_countries
            .iter()
            .any(|code| code.trim().is_empty())
        {
            return Err(ConfigError::EmptyCountryCode);
        }

        Ok(())
    }

    /// Create a template configuration
    pub fn template() -> String {
        r#"# Visual Nuts Configuration File
#
# Environment variables override these values:
#   EXERCISE_01_STARTING_NUMBER, EXERCISE_01_TOTAL_NUMBERS,
#   EXERCISE_02_DATA_PATH, EXERCISE_02_LISTED_COUNTRIES

[numbers]
start = 1      # First number to print
end = 100      # Last number to print (inclusive)

[languages]
data_path = "assets/countries.json"   # JSON array of {country, languages}
listed_countries = ["BE", "DE"]       # Countries whose languages are collected
"#
        .to_string()
    }
}

/// Parse a range bound, keeping the variable name for the error message
pub fn parse_bound(name: &str, value: &str) -> Result<i64, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|source| ConfigError::InvalidBound {
            name: name.to_string(),
            value: value.to_string(),
            source,
        })
}

/// Split "BE, DE" into ["BE", "DE"], dropping empty entries
pub fn parse_country_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;
    use std::fs;
    use tempfile::tempdir;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> + use<> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.numbers.range(), NumberRange::new(1, 100));
        assert_eq!(
            config.languages.data_path,
            PathBuf::from("assets/countries.json")
        );
        assert_eq!(config.languages.listed_countries, vec!["BE", "DE"]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_template_parses_to_defaults() {
        let template = Config::template();
        assert!(template.contains("[numbers]"));
        assert!(template.contains("[languages]"));

        let parsed: Config = toml::from_str(&template).unwrap();
        assert_eq!(parsed, Config::default());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: Config = toml::from_str("[numbers]\nend = 500\n").unwrap();
        assert_eq!(config.numbers.start, 1);
        assert_eq!(config.numbers.end, 500);
        assert_eq!(config.languages, LanguagesConfig::default());
    }

    #[test]
    fn test_from_file_rejects_non_numeric_bound() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "[numbers]\nstart = \"one\"\n").unwrap();

        let error = Config::from_file(&path).unwrap_err();
        assert!(error.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_load_prefers_explicit_path() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), "[numbers]\nend = 20\n").unwrap();
        let explicit = dir.path().join("other.toml");
        fs::write(&explicit, "[numbers]\nend = 30\n").unwrap();

        let config = Config::load(Some(&explicit), dir.path()).unwrap();
        assert_eq!(config.numbers.end, 30);

        let config = Config::load(None, dir.path()).unwrap();
        assert_eq!(config.numbers.end, 20);
    }

    #[test]
    fn test_load_missing_explicit_path_fails() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(Config::load(Some(&missing), dir.path()).is_err());
    }

    #[test]
    fn test_apply_env_overrides() {
        let mut config = Config::default();
        config
            .apply_env_with(env(&[
                (STARTING_NUMBER_VAR, "5"),
                (TOTAL_NUMBERS_VAR, " 500 "),
                (DATA_PATH_VAR, "data/world.json"),
                (LISTED_COUNTRIES_VAR, "NL, ,ES"),
            ]))
            .unwrap();

        assert_eq!(config.numbers.range(), NumberRange::new(5, 500));
        assert_eq!(config.languages.data_path, PathBuf::from("data/world.json"));
        assert_eq!(config.languages.listed_countries, vec!["NL", "ES"]);
    }

    #[test]
    fn test_apply_env_ignores_blank_values() {
        let mut config = Config::default();
        config
            .apply_env_with(env(&[(STARTING_NUMBER_VAR, "  ")]))
            .unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_apply_env_rejects_non_numeric_bound() {
        let mut config = Config::default();
        let error = config
            .apply_env_with(env(&[(TOTAL_NUMBERS_VAR, "a hundred")]))
            .unwrap_err();

        assert!(matches!(error, ConfigError::InvalidBound { .. }));
        assert_eq!(
            error.to_string(),
            "EXERCISE_01_TOTAL_NUMBERS must be a whole number, got 'a hundred'"
        );
        assert_eq!(config.numbers.end, 100);
    }

    #[test]
    fn test_validation() {
        let mut config = Config::default();
        config.languages.listed_countries = vec!["BE".to_string(), " ".to_string()];
        assert!(matches!(
            config.validate(),
            Err(ConfigError::EmptyCountryCode)
        ));

        let mut config = Config::default();
        config.languages.data_path = PathBuf::new();
        assert!(matches!(config.validate(), Err(ConfigError::EmptyDataPath)));
    }

    #[test]
    fn test_parse_bound_accepts_negative_numbers() {
        assert_eq!(parse_bound("start", "-15").unwrap(), -15);
        assert!(parse_bound("start", "1.5").is_err());
    }
}
