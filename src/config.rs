//! Input Configuration
//!
//! Runtime-tunable flags for the translators, loadable from TOML. Both flags
//! default to off and can also be flipped at runtime through the facade
//! setters, so embedders without a config file never need this module.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Input translation settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InputConfig {
    /// Forward client scancodes to the injector instead of zero
    ///
    /// When off, raw key events carry a zero scancode and the backend
    /// resolves keys from the keycode alone.
    pub prefer_scancodes: bool,

    /// Treat the pointer as captured by the remote session
    ///
    /// While set, releasing Escape asks the capture host to drop the grab
    /// before the key is forwarded.
    pub pointer_capture: bool,
}

impl InputConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .context(format!("Failed to read input config file: {}", path))?;

        let config: InputConfig =
            toml::from_str(&content).context("Failed to parse input config file")?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    ///
    /// The current fields are plain flags with no invalid states; parsing
    /// already rejects unknown keys and wrong types.
    pub fn validate(&self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = InputConfig::default();
        assert!(!config.prefer_scancodes);
        assert!(!config.pointer_capture);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.toml");
        std::fs::write(&path, "prefer_scancodes = true\npointer_capture = true\n").unwrap();

        let config = InputConfig::load(path.to_str().unwrap()).unwrap();
        assert!(config.prefer_scancodes);
        assert!(config.pointer_capture);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.toml");
        std::fs::write(&path, "prefer_scancodes = true\n").unwrap();

        let config = InputConfig::load(path.to_str().unwrap()).unwrap();
        assert!(config.prefer_scancodes);
        assert!(!config.pointer_capture);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.toml");
        std::fs::write(&path, "no_such_flag = true\n").unwrap();

        assert!(InputConfig::load(path.to_str().unwrap()).is_err());
    }

    #[test]
    fn test_missing_file_errors() {
        assert!(InputConfig::load("/nonexistent/input.toml").is_err());
    }

    #[test]
    fn test_serialization_round_trip() {
        let config = InputConfig {
            prefer_scancodes: true,
            pointer_capture: false,
        };

        let toml_text = toml::to_string(&config).unwrap();
        let parsed: InputConfig = toml::from_str(&toml_text).unwrap();
        assert_eq!(parsed, config);
    }
}
