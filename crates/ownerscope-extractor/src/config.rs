//! Configuration for the finder pipeline

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for [`OwnerFinder`](crate::OwnerFinder)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinderConfig {
    /// Maximum time for a single remote call (seconds)
    pub request_timeout_secs: u64,

    /// Completion token budget per remote call
    pub max_tokens: u32,

    /// Sampling temperature
    pub temperature: f32,

    /// Nucleus sampling parameter
    pub top_p: f32,

    /// Whether to issue the owners-only follow-up query when the first
    /// pass finds no owners
    pub second_pass: bool,
}

impl FinderConfig {
    /// Get the request timeout as a Duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.request_timeout_secs == 0 {
            return Err("request_timeout_secs must be greater than 0".to_string());
        }
        if self.max_tokens == 0 {
            return Err("max_tokens must be greater than 0".to_string());
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(format!(
                "temperature {} out of range [0.0, 2.0]",
                self.temperature
            ));
        }
        if !(0.0..=1.0).contains(&self.top_p) || self.top_p == 0.0 {
            return Err(format!("top_p {} out of range (0.0, 1.0]", self.top_p));
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: 30,
            max_tokens: 1000,
            temperature: 0.2,
            top_p: 0.9,
            second_pass: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = FinderConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert!(config.second_pass);
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = FinderConfig::default();
        config.request_timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_out_of_range_sampling_rejected() {
        let mut config = FinderConfig::default();
        config.temperature = 3.0;
        assert!(config.validate().is_err());

        let mut config = FinderConfig::default();
        config.top_p = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = FinderConfig::default();
        let toml_str = config.to_toml().unwrap();
        let parsed = FinderConfig::from_toml(&toml_str).unwrap();

        assert_eq!(config.request_timeout_secs, parsed.request_timeout_secs);
        assert_eq!(config.max_tokens, parsed.max_tokens);
        assert_eq!(config.second_pass, parsed.second_pass);
    }
}
