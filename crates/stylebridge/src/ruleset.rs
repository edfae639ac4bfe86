//! Merge preset defaults with enabled/disabled overrides into the final
//! ordered rule set.

use crate::availability::RuleAvailability;
use crate::catalog::{RuleCatalog, DISABLED_MARKER};
use crate::config::StyleCiConfig;
use crate::error::ConfigError;
use crate::resolver::resolve_aliases;
use crate::validate::{required_preset, validate};
use crate::warnings::{Warning, WarningSink};

/// Rule name appended when a header comment is configured.
pub const HEADER_COMMENT_RULE: &str = "header_comment";

/// Prefix a name with the disabled marker.
pub fn negate(name: &str) -> String {
    format!("{DISABLED_MARKER}{name}")
}

/// Split a marker entry into (bare name, enabled).
pub fn split_marker(entry: &str) -> (&str, bool) {
    match entry.strip_prefix(DISABLED_MARKER) {
        Some(name) => (name, false),
        None => (entry, true),
    }
}

/// Build the ordered marker list consumed by v1 tools.
///
/// Order: explicit enabled, negated disabled, then preset defaults minus the
/// disabled names, preserving the preset's declared order. Aliases are
/// resolved independently on each of the three lists first. Duplicates keep
/// their first occurrence. When `header` is set, `header_comment` is
/// appended unconditionally.
pub fn build_fixers(
    config: &StyleCiConfig,
    catalog: &RuleCatalog,
    availability: &dyn RuleAvailability,
    header: Option<&str>,
) -> Result<Vec<String>, ConfigError> {
    validate(config, catalog)?;
    let preset = required_preset(config, catalog)?;

    let preset_fixers = resolve_aliases(preset, catalog, availability);
    let enabled = resolve_aliases(&config.enabled, catalog, availability);
    let disabled = resolve_aliases(&config.disabled, catalog, availability);

    let mut fixers: Vec<String> = Vec::new();
    let push_unique = |entry: String, fixers: &mut Vec<String>| {
        if !fixers.contains(&entry) {
            fixers.push(entry);
        }
    };

    for name in &enabled {
        push_unique(name.clone(), &mut fixers);
    }
    for name in &disabled {
        push_unique(negate(name), &mut fixers);
    }
    // Textual difference: a negated preset entry like "-psr0" is never
    // removed by a bare disabled name.
    for entry in &preset_fixers {
        if !disabled.iter().any(|d| d == entry) {
            push_unique(entry.clone(), &mut fixers);
        }
    }

    if header.is_some() {
        push_unique(HEADER_COMMENT_RULE.to_string(), &mut fixers);
    }

    Ok(fixers)
}

/// Fold a marker list into the ordered name-to-enabled map consumed by v2
/// tools.
///
/// A name listed both ways resolves to disabled, regardless of entry order.
/// Names the current tool does not ship are skipped with an
/// [`Warning::UnavailableRule`].
pub fn build_rules(
    fixers: &[String],
    availability: &dyn RuleAvailability,
    sink: &dyn WarningSink,
) -> Vec<(String, bool)> {
    let mut rules: Vec<(String, bool)> = Vec::new();

    for entry in fixers {
        let (name, enabled) = split_marker(entry);

        if !availability.is_available(name) {
            sink.warn(Warning::UnavailableRule {
                name: name.to_string(),
            });
            continue;
        }

        match rules.iter_mut().find(|(n, _)| n == name) {
            Some((_, state)) => {
                // Disabled always wins for a name that appears both ways.
                if !enabled {
                    *state = false;
                }
            }
            None => rules.push((name.to_string(), enabled)),
        }
    }

    rules
}
