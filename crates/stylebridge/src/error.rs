//! Error types for configuration loading and validation.

use thiserror::Error;

/// Errors raised while loading or validating a StyleCI configuration.
///
/// All variants are fatal: no rule set is produced once one of these
/// surfaces. Non-fatal conditions (unavailable rules, unknown finder keys in
/// lenient mode) go through [`crate::warnings::WarningSink`] instead.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("you must define a preset in the StyleCI configuration file")]
    MissingPreset,

    #[error("invalid preset \"{preset}\", must be one of \"{}\"", .valid.join("\", \""))]
    InvalidPreset { preset: String, valid: Vec<String> },

    #[error("the following fixers are invalid: \"{}\"", .names.join("\", \""))]
    InvalidFixers { names: Vec<String> },

    #[error("conflicting fixers \"{first}\" and \"{second}\" cannot both be enabled")]
    Conflict { first: String, second: String },

    #[error("unsupported finder filter \"{key}\"")]
    UnsupportedFinderKey { key: String },

    #[error("failed to read StyleCI configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse StyleCI configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
