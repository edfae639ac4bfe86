//! Static rule catalog: valid fixer names, alias pairs, presets, conflicts.
//!
//! The built-in tables live in `data.rs`, a generated file regenerated by
//! `stylebridge catalog update`. The catalog is immutable after construction.

mod data;

/// Marker prefix carried by disabled entries in preset tables and resolved
/// rule lists (`-psr0`).
pub const DISABLED_MARKER: char = '-';

/// Immutable rule tables the validator and resolver work against.
#[derive(Debug, Clone)]
pub struct RuleCatalog {
    valid: Vec<String>,
    aliases: Vec<(String, String)>,
    presets: Vec<(String, Vec<String>)>,
    conflicts: Vec<(String, String)>,
}

impl RuleCatalog {
    /// The catalog shipped with this crate, generated from the upstream
    /// StyleCI configuration source.
    pub fn builtin() -> Self {
        Self {
            valid: data::VALID.iter().map(|s| s.to_string()).collect(),
            aliases: data::ALIASES
                .iter()
                .map(|(a, b)| (a.to_string(), b.to_string()))
                .collect(),
            presets: data::PRESETS
                .iter()
                .map(|(name, rules)| {
                    (
                        name.to_string(),
                        rules.iter().map(|s| s.to_string()).collect(),
                    )
                })
                .collect(),
            conflicts: data::CONFLICTS
                .iter()
                .map(|(a, b)| (a.to_string(), b.to_string()))
                .collect(),
        }
    }

    /// Build a catalog from explicit tables. Used by tests and by embedders
    /// that carry their own rule vocabulary.
    pub fn new(
        valid: Vec<String>,
        aliases: Vec<(String, String)>,
        presets: Vec<(String, Vec<String>)>,
        conflicts: Vec<(String, String)>,
    ) -> Self {
        Self {
            valid,
            aliases,
            presets,
            conflicts,
        }
    }

    pub fn valid(&self) -> &[String] {
        &self.valid
    }

    pub fn aliases(&self) -> &[(String, String)] {
        &self.aliases
    }

    pub fn conflicts(&self) -> &[(String, String)] {
        &self.conflicts
    }

    /// Ordered rule list for a preset, if the preset exists. Entries may
    /// carry the [`DISABLED_MARKER`] prefix.
    pub fn preset(&self, name: &str) -> Option<&[String]> {
        self.presets
            .iter()
            .find(|(preset, _)| preset == name)
            .map(|(_, rules)| rules.as_slice())
    }

    pub fn preset_names(&self) -> Vec<&str> {
        self.presets.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Whether a name may appear in `enabled`/`disabled`: canonical names
    /// plus both sides of every alias pair.
    pub fn is_known(&self, name: &str) -> bool {
        self.valid.iter().any(|v| v == name)
            || self
                .aliases
                .iter()
                .any(|(a, b)| a == name || b == name)
    }

    /// The other name of an alias pair, if `name` participates in one.
    pub fn alias_counterpart(&self, name: &str) -> Option<&str> {
        for (a, b) in &self.aliases {
            if a == name {
                return Some(b);
            }
            if b == name {
                return Some(a);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_expected_presets() {
        let catalog = RuleCatalog::builtin();
        for preset in ["psr1", "psr2", "symfony", "laravel", "recommended"] {
            assert!(catalog.preset(preset).is_some(), "missing preset {preset}");
        }
        assert!(catalog.preset("dummy").is_none());
    }

    #[test]
    fn symfony_extends_psr2() {
        let catalog = RuleCatalog::builtin();
        let psr2 = catalog.preset("psr2").unwrap();
        let symfony = catalog.preset("symfony").unwrap();
        for rule in psr2 {
            assert!(symfony.contains(rule), "symfony is missing psr2 rule {rule}");
        }
    }

    #[test]
    fn alias_counterpart_is_symmetric() {
        let catalog = RuleCatalog::builtin();
        assert_eq!(catalog.alias_counterpart("ordered_use"), Some("ordered_imports"));
        assert_eq!(catalog.alias_counterpart("ordered_imports"), Some("ordered_use"));
        assert_eq!(catalog.alias_counterpart("encoding"), None);
    }

    #[test]
    fn alias_names_are_known() {
        let catalog = RuleCatalog::builtin();
        assert!(catalog.is_known("ordered_use"));
        assert!(catalog.is_known("ordered_imports"));
        assert!(!catalog.is_known("dummy"));
    }

    #[test]
    fn preset_tables_do_not_enable_conflicting_pairs() {
        let catalog = RuleCatalog::builtin();
        for name in catalog.preset_names() {
            let rules = catalog.preset(name).unwrap();
            for (first, second) in catalog.conflicts() {
                assert!(
                    !(rules.contains(first) && rules.contains(second)),
                    "preset {name} enables both {first} and {second}"
                );
            }
        }
    }

    #[test]
    fn preset_entries_are_valid_names() {
        let catalog = RuleCatalog::builtin();
        for name in catalog.preset_names() {
            for entry in catalog.preset(name).unwrap() {
                let bare = entry.trim_start_matches(DISABLED_MARKER);
                assert!(catalog.is_known(bare), "preset {name} lists unknown rule {bare}");
            }
        }
    }
}
