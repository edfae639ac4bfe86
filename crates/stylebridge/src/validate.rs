//! Pure schema validation against the rule catalog.

use crate::catalog::RuleCatalog;
use crate::config::StyleCiConfig;
use crate::error::ConfigError;

/// Validate a parsed configuration against the catalog.
///
/// Checks, in order: preset presence, preset validity, every `enabled` and
/// `disabled` name known (all offenders reported in one error), and no
/// conflict pair fully enabled after merging preset defaults with the
/// overrides. Pure; emits nothing.
pub fn validate(config: &StyleCiConfig, catalog: &RuleCatalog) -> Result<(), ConfigError> {
    let preset = required_preset(config, catalog)?;

    let invalid: Vec<String> = config
        .enabled
        .iter()
        .chain(config.disabled.iter())
        .filter(|name| !catalog.is_known(name))
        .cloned()
        .collect();
    if !invalid.is_empty() {
        return Err(ConfigError::InvalidFixers { names: invalid });
    }

    check_conflicts(preset, config, catalog)
}

/// The configured preset's rule list, or the appropriate preset error.
pub fn required_preset<'a>(
    config: &StyleCiConfig,
    catalog: &'a RuleCatalog,
) -> Result<&'a [String], ConfigError> {
    let name = match config.preset.as_deref() {
        Some(name) if !name.is_empty() => name,
        _ => return Err(ConfigError::MissingPreset),
    };

    catalog.preset(name).ok_or_else(|| ConfigError::InvalidPreset {
        preset: name.to_string(),
        valid: catalog.preset_names().iter().map(|s| s.to_string()).collect(),
    })
}

/// Conflict detection over `(preset entries + enabled) - disabled`.
///
/// Comparison is textual: a preset entry carrying the disabled marker
/// (`-psr0`) never matches a bare conflict name, so disabled-by-default
/// preset entries cannot trigger a conflict.
fn check_conflicts(
    preset: &[String],
    config: &StyleCiConfig,
    catalog: &RuleCatalog,
) -> Result<(), ConfigError> {
    let enabled_after_merge: Vec<&str> = preset
        .iter()
        .chain(config.enabled.iter())
        .map(String::as_str)
        .filter(|name| !config.disabled.iter().any(|d| d == name))
        .collect();

    for (first, second) in catalog.conflicts() {
        if enabled_after_merge.iter().any(|n| n == first)
            && enabled_after_merge.iter().any(|n| n == second)
        {
            return Err(ConfigError::Conflict {
                first: first.clone(),
                second: second.clone(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(preset: Option<&str>, enabled: &[&str], disabled: &[&str]) -> StyleCiConfig {
        StyleCiConfig {
            preset: preset.map(String::from),
            enabled: enabled.iter().map(|s| s.to_string()).collect(),
            disabled: disabled.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn missing_preset_is_rejected() {
        let catalog = RuleCatalog::builtin();
        match validate(&config(None, &[], &[]), &catalog) {
            Err(ConfigError::MissingPreset) => {}
            other => panic!("expected MissingPreset, got {other:?}"),
        }
    }

    #[test]
    fn unknown_preset_is_rejected_with_valid_list() {
        let catalog = RuleCatalog::builtin();
        match validate(&config(Some("dummy"), &[], &[]), &catalog) {
            Err(ConfigError::InvalidPreset { preset, valid }) => {
                assert_eq!(preset, "dummy");
                assert!(valid.contains(&"symfony".to_string()));
            }
            other => panic!("expected InvalidPreset, got {other:?}"),
        }
    }

    #[test]
    fn all_valid_presets_pass() {
        let catalog = RuleCatalog::builtin();
        for preset in ["psr1", "psr2", "symfony", "laravel", "recommended"] {
            validate(&config(Some(preset), &[], &[]), &catalog).unwrap();
        }
    }

    #[test]
    fn reports_every_invalid_fixer_at_once() {
        let catalog = RuleCatalog::builtin();
        let cfg = config(Some("symfony"), &["dummy", "phpdoc_params"], &["bogus"]);
        match validate(&cfg, &catalog) {
            Err(ConfigError::InvalidFixers { names }) => {
                assert_eq!(names, vec!["dummy", "bogus"]);
            }
            other => panic!("expected InvalidFixers, got {other:?}"),
        }
    }

    #[test]
    fn alias_names_are_accepted() {
        let catalog = RuleCatalog::builtin();
        // "ordered_imports" only appears as an alias counterpart.
        validate(
            &config(Some("psr2"), &["ordered_imports"], &[]),
            &catalog,
        )
        .unwrap();
    }

    #[test]
    fn conflict_with_preset_default_is_rejected() {
        let catalog = RuleCatalog::builtin();
        // symfony ships unalign_double_arrow enabled.
        match validate(&config(Some("symfony"), &["align_double_arrow"], &[]), &catalog) {
            Err(ConfigError::Conflict { first, second }) => {
                assert_eq!(first, "align_double_arrow");
                assert_eq!(second, "unalign_double_arrow");
            }
            other => panic!("expected Conflict, got {other:?}"),
        }
    }

    #[test]
    fn disabling_one_side_resolves_the_conflict() {
        let catalog = RuleCatalog::builtin();
        validate(
            &config(
                Some("symfony"),
                &["align_double_arrow"],
                &["unalign_double_arrow"],
            ),
            &catalog,
        )
        .unwrap();
    }

    #[test]
    fn conflict_between_two_enabled_names() {
        let catalog = RuleCatalog::builtin();
        let cfg = config(
            Some("psr1"),
            &[
                "no_blank_lines_before_namespace",
                "single_blank_line_before_namespace",
            ],
            &[],
        );
        assert!(matches!(
            validate(&cfg, &catalog),
            Err(ConfigError::Conflict { .. })
        ));
    }

    #[test]
    fn negated_preset_entries_do_not_count_as_enabled() {
        // A preset that disables one side of a pair by default must not
        // conflict with the other side being enabled.
        let catalog = RuleCatalog::new(
            vec!["a".into(), "b".into()],
            vec![],
            vec![("p".into(), vec!["-b".into()])],
            vec![("a".into(), "b".into())],
        );
        validate(&config(Some("p"), &["a"], &[]), &catalog).unwrap();
    }
}
