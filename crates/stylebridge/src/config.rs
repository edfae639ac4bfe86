//! `.styleci.yml` document schema and loading.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;

/// File name the linting service reads from the repository root.
pub const CONFIG_FILE: &str = ".styleci.yml";

/// Parsed StyleCI configuration document.
///
/// `preset` is required by validation, not by parsing, so a missing field
/// reports [`ConfigError::MissingPreset`] instead of a serde error.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleCiConfig {
    pub preset: Option<String>,

    /// Whether the service lints before fixing. Carried through for
    /// consumers; the bridge itself does not lint.
    pub linting: bool,

    pub enabled: Vec<String>,
    pub disabled: Vec<String>,

    /// Raw finder filters, key order preserved deterministically. Keys are
    /// translated (and checked) by the finder module, not here.
    pub finder: BTreeMap<String, Vec<String>>,
}

impl Default for StyleCiConfig {
    fn default() -> Self {
        Self {
            preset: None,
            linting: true,
            enabled: Vec::new(),
            disabled: Vec::new(),
            finder: BTreeMap::new(),
        }
    }
}

impl StyleCiConfig {
    /// Parse a configuration from YAML text.
    pub fn from_str(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Read `<dir>/.styleci.yml`.
    pub fn from_dir(dir: &Path) -> Result<Self, ConfigError> {
        Self::from_path(&dir.join(CONFIG_FILE))
    }

    /// Read a configuration from an explicit file path.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_str(&contents)
    }
}
