//! Translate declarative finder filters into file-finder operations.
//!
//! The service config spells filter keys with hyphens or underscores
//! (`not-name`, `not_name`); the consuming tool wants concrete operations.
//! Keys are checked against a fixed allow-list rather than dispatched
//! reflectively.

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::error::ConfigError;
use crate::warnings::{Warning, WarningSink};

/// File-finder operations the consuming tool supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinderOp {
    Exclude,
    Name,
    NotName,
    Contains,
    NotContains,
    Path,
    NotPath,
    Depth,
}

impl FinderOp {
    /// Canonical operation for a config key. Hyphenated and snake_case
    /// spellings are equivalent.
    pub fn from_key(key: &str) -> Option<FinderOp> {
        match key.replace('-', "_").as_str() {
            "exclude" => Some(FinderOp::Exclude),
            "name" => Some(FinderOp::Name),
            "not_name" => Some(FinderOp::NotName),
            "contains" => Some(FinderOp::Contains),
            "not_contains" => Some(FinderOp::NotContains),
            "path" => Some(FinderOp::Path),
            "not_path" => Some(FinderOp::NotPath),
            "depth" => Some(FinderOp::Depth),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FinderOp::Exclude => "exclude",
            FinderOp::Name => "name",
            FinderOp::NotName => "not_name",
            FinderOp::Contains => "contains",
            FinderOp::NotContains => "not_contains",
            FinderOp::Path => "path",
            FinderOp::NotPath => "not_path",
            FinderOp::Depth => "depth",
        }
    }
}

/// How to treat finder keys with no corresponding operation.
///
/// Historical tool versions differ: the validation tree rejected unknown
/// keys, the runtime bridge silently dispatched whatever was spelled. Both
/// behaviours are kept explicit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strictness {
    Strict,
    #[default]
    Lenient,
}

/// File-inclusion filter handed to the consuming tool.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FinderSpec {
    /// Directories the finder searches in.
    pub dirs: Vec<PathBuf>,
    /// Filter operations in config key order.
    pub filters: Vec<(FinderOp, Vec<String>)>,
}

/// Translate raw finder filters into operations.
///
/// Unknown keys are rejected in [`Strictness::Strict`] mode and skipped with
/// an [`Warning::UnsupportedFinderFilter`] in [`Strictness::Lenient`] mode.
pub fn translate_finder(
    raw: &BTreeMap<String, Vec<String>>,
    dirs: Vec<PathBuf>,
    strictness: Strictness,
    sink: &dyn WarningSink,
) -> Result<FinderSpec, ConfigError> {
    let mut filters = Vec::new();

    for (key, patterns) in raw {
        match FinderOp::from_key(key) {
            Some(op) => filters.push((op, patterns.clone())),
            None => match strictness {
                Strictness::Strict => {
                    return Err(ConfigError::UnsupportedFinderKey { key: key.clone() })
                }
                Strictness::Lenient => {
                    sink.warn(Warning::UnsupportedFinderFilter { key: key.clone() });
                }
            },
        }
    }

    Ok(FinderSpec { dirs, filters })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::warnings::CollectSink;

    fn raw(entries: &[(&str, &[&str])]) -> BTreeMap<String, Vec<String>> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.iter().map(|s| s.to_string()).collect()))
            .collect()
    }

    #[test]
    fn hyphen_and_underscore_spellings_are_equivalent() {
        assert_eq!(FinderOp::from_key("not-name"), Some(FinderOp::NotName));
        assert_eq!(FinderOp::from_key("not_name"), Some(FinderOp::NotName));
        assert_eq!(FinderOp::from_key("not-contains"), Some(FinderOp::NotContains));
        assert_eq!(FinderOp::from_key("size"), None);
    }

    #[test]
    fn translates_known_keys() {
        let sink = CollectSink::new();
        let spec = translate_finder(
            &raw(&[("not-name", &["*.dummy"]), ("exclude", &["vendor"])]),
            vec![PathBuf::from(".")],
            Strictness::Strict,
            &sink,
        )
        .unwrap();

        assert_eq!(spec.dirs, vec![PathBuf::from(".")]);
        assert_eq!(
            spec.filters,
            vec![
                (FinderOp::Exclude, vec!["vendor".to_string()]),
                (FinderOp::NotName, vec!["*.dummy".to_string()]),
            ]
        );
        assert!(sink.is_empty());
    }

    #[test]
    fn strict_mode_rejects_unknown_keys() {
        let sink = CollectSink::new();
        let result = translate_finder(
            &raw(&[("not-existing-method", &["*.dummy"])]),
            vec![],
            Strictness::Strict,
            &sink,
        );
        assert!(matches!(
            result,
            Err(ConfigError::UnsupportedFinderKey { key }) if key == "not-existing-method"
        ));
    }

    #[test]
    fn lenient_mode_warns_and_skips_unknown_keys() {
        let sink = CollectSink::new();
        let spec = translate_finder(
            &raw(&[("not-existing-method", &["*.dummy"]), ("name", &["*.php"])]),
            vec![],
            Strictness::Lenient,
            &sink,
        )
        .unwrap();

        assert_eq!(spec.filters, vec![(FinderOp::Name, vec!["*.php".to_string()])]);
        assert_eq!(
            sink.warnings(),
            vec![Warning::UnsupportedFinderFilter {
                key: "not-existing-method".to_string()
            }]
        );
    }
}
