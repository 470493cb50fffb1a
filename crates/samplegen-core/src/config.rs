//! Generation configuration loaded from `samplegen.yml`.
//!
//! All fields are optional in the file; unset fields fall back to
//! defaults. Placeholder values from the file sit between the built-in
//! stand-in defaults and any command-line overrides.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::key::{AuthMode, Capability, Language};

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "samplegen.yml";

/// Generation configuration.
///
/// # Examples
///
/// ```
/// use samplegen_core::GenConfig;
///
/// // Create with defaults
/// let config = GenConfig::default();
/// assert_eq!(config.output_dir.to_str(), Some("generated-samples"));
/// assert!(config.values.is_empty());
///
/// // Deserialize from YAML
/// let yaml = serde_yaml_ng::to_string(&config).unwrap();
/// let loaded: GenConfig = serde_yaml_ng::from_str(&yaml).unwrap();
/// assert_eq!(loaded.output_dir, config.output_dir);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenConfig {
    /// Directory samples are written into.
    pub output_dir: PathBuf,

    /// Placeholder values (`placeholder name` → `literal text`).
    pub values: BTreeMap<String, String>,

    /// Languages to generate; empty means all.
    pub languages: Vec<Language>,

    /// Capabilities to generate; empty means all.
    pub capabilities: Vec<Capability>,

    /// Auth modes to generate; empty means all.
    pub auth_modes: Vec<AuthMode>,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("generated-samples"),
            values: BTreeMap::new(),
            languages: Vec::new(),
            capabilities: Vec::new(),
            auth_modes: Vec::new(),
        }
    }
}

impl GenConfig {
    /// Loads the configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::ConfigError` if the file cannot be read or does
    /// not parse as a valid configuration.
    pub fn load(path: &Path) -> Result<Self, CoreError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| CoreError::ConfigError(format!("Cannot read {}: {e}", path.display())))?;
        serde_yaml_ng::from_str(&content).map_err(|e| {
            CoreError::ConfigError(format!("Invalid config at {}: {e}", path.display()))
        })
    }

    /// Loads the configuration, falling back to defaults when the file
    /// does not exist.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::ConfigError` only for files that exist but
    /// cannot be read or parsed.
    pub fn load_or_default(path: &Path) -> Result<Self, CoreError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Returns `true` if the sample's axes pass this config's filter lists.
    ///
    /// Empty lists do not constrain their axis.
    pub fn allows(&self, language: Language, capability: Capability, auth_mode: AuthMode) -> bool {
        (self.languages.is_empty() || self.languages.contains(&language))
            && (self.capabilities.is_empty() || self.capabilities.contains(&capability))
            && (self.auth_modes.is_empty() || self.auth_modes.contains(&auth_mode))
    }
}
