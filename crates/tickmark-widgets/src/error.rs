//! Error types for tickmark-widgets.

use thiserror::Error;

/// Errors from loading widget configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// YAML did not parse into a config.
    #[error("invalid YAML config: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// JSON did not parse into a config.
    #[error("invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),

    /// The input name is empty or blank.
    #[error("toggle input name must not be empty")]
    EmptyName,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            ConfigError::EmptyName.to_string(),
            "toggle input name must not be empty"
        );
        let json_err = serde_json::from_str::<u8>("x").unwrap_err();
        assert!(ConfigError::from(json_err)
            .to_string()
            .starts_with("invalid JSON config:"));
    }
}
