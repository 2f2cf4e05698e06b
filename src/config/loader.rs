//! Configuration loading functionality.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::LetterheadConfig;

/// Loads and provides access to the letterhead configuration.
///
/// # Directory Structure
///
/// The configuration directory contains a single file:
/// ```text
/// config/
/// └── letterhead.yaml   # Brand block, contacts, optional logo, disclaimer
/// ```
///
/// # Example
///
/// ```no_run
/// use compenso_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config").unwrap();
/// println!("Brand: {}", loader.letterhead().brand_name);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    letterhead: LetterheadConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigNotFound` when `letterhead.yaml` is missing and
    /// `ConfigParseError` when it contains invalid YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let file = path.as_ref().join("letterhead.yaml");
        let display = file.display().to_string();

        let raw = fs::read_to_string(&file).map_err(|_| EngineError::ConfigNotFound {
            path: display.clone(),
        })?;

        let letterhead: LetterheadConfig =
            serde_yaml::from_str(&raw).map_err(|err| EngineError::ConfigParseError {
                path: display,
                message: err.to_string(),
            })?;

        Ok(Self { letterhead })
    }

    /// Creates a loader around the built-in default letterhead.
    pub fn with_defaults() -> Self {
        Self {
            letterhead: LetterheadConfig::default(),
        }
    }

    /// Returns the loaded letterhead configuration.
    pub fn letterhead(&self) -> &LetterheadConfig {
        &self.letterhead
    }
}
