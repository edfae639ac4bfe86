//! Symmetric alias expansion.

use crate::availability::RuleAvailability;
use crate::catalog::RuleCatalog;

/// Expand a rule-name list with the alias counterparts of its entries.
///
/// For every alias pair (a, b): if a is present and b absent, b is appended,
/// and symmetrically. A counterpart is only added when it exists in the
/// currently loaded fixer tool, so a config written for one tool version
/// keeps working on another. Already-present names are never duplicated.
/// Entries carrying the disabled marker are matched textually and therefore
/// never expand.
pub fn resolve_aliases(
    names: &[String],
    catalog: &RuleCatalog,
    availability: &dyn RuleAvailability,
) -> Vec<String> {
    let mut resolved: Vec<String> = names.to_vec();

    for (alias, canonical) in catalog.aliases() {
        let has_alias = resolved.iter().any(|n| n == alias);
        let has_canonical = resolved.iter().any(|n| n == canonical);

        if has_alias && !has_canonical && availability.is_available(canonical) {
            resolved.push(canonical.clone());
        }
        if has_canonical && !has_alias && availability.is_available(alias) {
            resolved.push(alias.clone());
        }
    }

    resolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::availability::{AllRules, RegisteredRules};

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn adds_counterpart_when_available() {
        let catalog = RuleCatalog::builtin();
        let resolved = resolve_aliases(&names(&["ordered_use"]), &catalog, &AllRules);
        assert_eq!(resolved, names(&["ordered_use", "ordered_imports"]));
    }

    #[test]
    fn adds_historical_name_for_current_name() {
        let catalog = RuleCatalog::builtin();
        let resolved = resolve_aliases(&names(&["ordered_imports"]), &catalog, &AllRules);
        assert_eq!(resolved, names(&["ordered_imports", "ordered_use"]));
    }

    #[test]
    fn never_duplicates_present_names() {
        let catalog = RuleCatalog::builtin();
        let resolved = resolve_aliases(
            &names(&["ordered_use", "ordered_imports"]),
            &catalog,
            &AllRules,
        );
        assert_eq!(resolved, names(&["ordered_use", "ordered_imports"]));
    }

    #[test]
    fn skips_counterparts_the_tool_does_not_ship() {
        let catalog = RuleCatalog::builtin();
        let registry = RegisteredRules::new(["ordered_use"]);
        let resolved = resolve_aliases(&names(&["ordered_use"]), &catalog, &registry);
        assert_eq!(resolved, names(&["ordered_use"]));
    }

    #[test]
    fn negated_entries_do_not_expand() {
        let catalog = RuleCatalog::builtin();
        let resolved = resolve_aliases(&names(&["-ordered_use"]), &catalog, &AllRules);
        assert_eq!(resolved, names(&["-ordered_use"]));
    }

    #[test]
    fn non_alias_names_pass_through() {
        let catalog = RuleCatalog::builtin();
        let resolved = resolve_aliases(&names(&["encoding", "psr0"]), &catalog, &AllRules);
        assert_eq!(resolved, names(&["encoding", "psr0"]));
    }
}
