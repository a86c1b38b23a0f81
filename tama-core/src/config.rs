//! Configuration for the pet simulation.
//!
//! Maps directly to `tama.toml`. Every section and field has a default, so an
//! empty file is a valid configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Top-level configuration, loadable from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TamaConfig {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Pet stats, capacity, and decay timing.
    #[serde(default)]
    pub pets: PetsConfig,
    /// Random-name provider settings.
    #[serde(default)]
    pub names: NamesConfig,
}

impl TamaConfig {
    /// Load configuration from a TOML string.
    ///
    /// # Errors
    /// Returns `PetError::Config` if the TOML is invalid or fails validation.
    pub fn from_toml(toml_str: &str) -> crate::error::Result<Self> {
        let config: Self =
            toml::from_str(toml_str).map_err(|e| crate::PetError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Reject settings the engine cannot run with.
    ///
    /// # Errors
    /// Returns `PetError::Config` describing the first offending field.
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.pets.capacity == 0 {
            return Err(crate::PetError::Config(
                "pets.capacity must be at least 1".into(),
            ));
        }
        if self.pets.initial_stat == 0 {
            return Err(crate::PetError::Config(
                "pets.initial_stat must be at least 1".into(),
            ));
        }
        if self.pets.decay_period_ms == 0 {
            return Err(crate::PetError::Config(
                "pets.decay_period_ms must be greater than 0".into(),
            ));
        }
        if self.names.fallback_name.trim().is_empty() {
            return Err(crate::PetError::Config(
                "names.fallback_name must not be blank".into(),
            ));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Sub-configs
// ---------------------------------------------------------------------------

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level: trace, debug, info, warn, error.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Emit logs as JSON lines instead of plain text.
    #[serde(default)]
    pub log_json: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_json: false,
        }
    }
}

/// Pet stat and lifecycle tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PetsConfig {
    /// Maximum number of simultaneously live pets.
    #[serde(default = "default_capacity")]
    pub capacity: usize,
    /// Value every stat starts at for a new pet.
    #[serde(default = "default_initial_stat")]
    pub initial_stat: u8,
    /// Milliseconds between passive decay firings.
    #[serde(default = "default_decay_period_ms")]
    pub decay_period_ms: u64,
    /// How much each stat drops per decay firing.
    #[serde(default = "default_decay_amount")]
    pub decay_amount: u8,
}

impl PetsConfig {
    /// Decay period as a `Duration`.
    #[must_use]
    pub fn decay_period(&self) -> Duration {
        Duration::from_millis(self.decay_period_ms)
    }
}

impl Default for PetsConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
            initial_stat: default_initial_stat(),
            decay_period_ms: default_decay_period_ms(),
            decay_amount: default_decay_amount(),
        }
    }
}

/// Where random pet names come from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamesConfig {
    /// Provider: "randomuser", "roster", "none".
    #[serde(default = "default_provider")]
    pub provider: String,
    /// Endpoint of the random-user API.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Hard timeout for a single name request in milliseconds.
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
    /// Retries after the first failed request.
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    /// Name used when the provider fails.
    #[serde(default = "default_fallback_name")]
    pub fallback_name: String,
    /// Names the offline "roster" provider picks from.
    #[serde(default = "default_roster")]
    pub roster: Vec<String>,
}

impl Default for NamesConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            base_url: default_base_url(),
            request_timeout_ms: default_request_timeout_ms(),
            max_retries: default_max_retries(),
            fallback_name: default_fallback_name(),
            roster: default_roster(),
        }
    }
}

// ---------------------------------------------------------------------------
// Serde default helpers
// ---------------------------------------------------------------------------

fn default_log_level() -> String { "info".to_string() }
fn default_provider() -> String { "randomuser".to_string() }
fn default_base_url() -> String { "https://randomuser.me/api/0.8".to_string() }
fn default_fallback_name() -> String { "Not-API".to_string() }
fn default_roster() -> Vec<String> {
    ["Biscuit", "Pepper", "Mochi", "Waffles", "Clover", "Nugget", "Juniper", "Pickles"]
        .into_iter()
        .map(String::from)
        .collect()
}
fn default_capacity() -> usize { 4 }
fn default_initial_stat() -> u8 { 50 }
fn default_decay_amount() -> u8 { 10 }
fn default_decay_period_ms() -> u64 { 10_000 }
fn default_request_timeout_ms() -> u64 { 5000 }
fn default_max_retries() -> u32 { 1 }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_gives_defaults() {
        let config = TamaConfig::from_toml("").expect("empty config is valid");
        assert_eq!(config.pets.capacity, 4);
        assert_eq!(config.pets.initial_stat, 50);
        assert_eq!(config.pets.decay_period(), Duration::from_secs(10));
        assert_eq!(config.names.fallback_name, "Not-API");
        assert_eq!(config.general.log_level, "info");
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = TamaConfig::from_toml(
            r#"
            [pets]
            capacity = 2
            decay_period_ms = 500

            [names]
            provider = "roster"
            roster = ["Rex"]
            "#,
        )
        .expect("valid config");
        assert_eq!(config.pets.capacity, 2);
        assert_eq!(config.pets.decay_amount, 10);
        assert_eq!(config.names.provider, "roster");
        assert_eq!(config.names.roster, vec!["Rex".to_string()]);
        assert_eq!(config.names.max_retries, 1);
    }

    #[test]
    fn zero_capacity_is_rejected() {
        let err = TamaConfig::from_toml("[pets]\ncapacity = 0").expect_err("must fail");
        assert!(err.to_string().contains("capacity"));
    }

    #[test]
    fn zero_initial_stat_is_rejected() {
        let err = TamaConfig::from_toml("[pets]\ninitial_stat = 0").expect_err("must fail");
        assert!(err.to_string().contains("initial_stat"));
    }

    #[test]
    fn shipped_sample_matches_defaults() {
        let config = TamaConfig::from_toml(include_str!("../../tama.toml")).expect("sample parses");
        let defaults = TamaConfig::default();
        assert_eq!(config.pets.capacity, defaults.pets.capacity);
        assert_eq!(config.pets.decay_period_ms, defaults.pets.decay_period_ms);
        assert_eq!(config.names.fallback_name, defaults.names.fallback_name);
        assert_eq!(config.names.roster, defaults.names.roster);
    }

    #[test]
    fn zero_decay_period_is_rejected() {
        assert!(TamaConfig::from_toml("[pets]\ndecay_period_ms = 0").is_err());
    }

    #[test]
    fn malformed_toml_is_a_config_error() {
        let err = TamaConfig::from_toml("[pets\ncapacity = ").expect_err("must fail");
        assert!(matches!(err, crate::PetError::Config(_)));
    }

    #[test]
    fn loads_from_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("tama.toml");
        std::fs::write(&path, "[general]\nlog_level = \"debug\"\n").expect("write");

        let config = TamaConfig::from_file(&path).expect("load");
        assert_eq!(config.general.log_level, "debug");
        assert!(!config.general.log_json);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = TamaConfig::from_file(&dir.path().join("absent.toml")).expect_err("must fail");
        assert!(matches!(err, crate::PetError::Io(_)));
    }
}
