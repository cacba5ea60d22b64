//! Configuration validation with range checks.

use crate::error::ConfigError;

use super::Config;

impl Config {
    /// Validate configuration values are within acceptable ranges.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.reference.name.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "reference.name must not be empty".into(),
            ));
        }
        if !self.reference.length_cm.is_finite() || self.reference.length_cm <= 0.0 {
            return Err(ConfigError::ValidationError(
                "reference.length_cm must be > 0".into(),
            ));
        }
        if self.analysis.language.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "analysis.language must not be empty".into(),
            ));
        }
        if self.inference.endpoint.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "inference.endpoint must not be empty".into(),
            ));
        }
        if self.inference.vision_model.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "inference.vision_model must not be empty".into(),
            ));
        }
        if self.inference.suggestion_model.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "inference.suggestion_model must not be empty".into(),
            ));
        }
        if self.inference.vision_max_tokens == 0 {
            return Err(ConfigError::ValidationError(
                "inference.vision_max_tokens must be > 0".into(),
            ));
        }
        if self.inference.suggestion_max_tokens == 0 {
            return Err(ConfigError::ValidationError(
                "inference.suggestion_max_tokens must be > 0".into(),
            ));
        }
        if self.inference.timeout_ms == 0 {
            return Err(ConfigError::ValidationError(
                "inference.timeout_ms must be > 0".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_passes_validation() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_nonpositive_reference_length() {
        let mut config = Config::default();
        config.reference.length_cm = 0.0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("length_cm"));

        config.reference.length_cm = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_model() {
        let mut config = Config::default();
        config.inference.vision_model = String::new();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("vision_model"));
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let mut config = Config::default();
        config.inference.timeout_ms = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("timeout_ms"));
    }

    #[test]
    fn test_validate_rejects_empty_language() {
        let mut config = Config::default();
        config.analysis.language = "  ".into();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("language"));
    }
}
