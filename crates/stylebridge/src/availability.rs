//! Capability queries against the fixer tool's registered-rule set.
//!
//! Not every tool version ships every rule. Alias expansion and the final
//! rule map consult an injected [`RuleAvailability`] collaborator instead of
//! probing a loaded third-party registry at runtime.

use std::collections::HashSet;

use crate::catalog::RuleCatalog;

/// Queries whether a rule name exists in the currently loaded fixer tool.
pub trait RuleAvailability {
    fn is_available(&self, name: &str) -> bool;
}

/// Every name is available.
///
/// Models legacy tool versions that expose no queryable registry; the bridge
/// historically treated all names as present on those versions.
#[derive(Debug, Default)]
pub struct AllRules;

impl RuleAvailability for AllRules {
    fn is_available(&self, _name: &str) -> bool {
        true
    }
}

/// Set-backed availability built from an explicit name list.
#[derive(Debug, Default)]
pub struct RegisteredRules {
    names: HashSet<String>,
}

impl RegisteredRules {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Registry covering everything the catalog knows: canonical names plus
    /// both sides of every alias pair. Models a fully shipped modern tool.
    pub fn from_catalog(catalog: &RuleCatalog) -> Self {
        let mut names: HashSet<String> = catalog.valid().iter().cloned().collect();
        for (alias, canonical) in catalog.aliases() {
            names.insert(alias.clone());
            names.insert(canonical.clone());
        }
        Self { names }
    }
}

impl RuleAvailability for RegisteredRules {
    fn is_available(&self, name: &str) -> bool {
        self.names.contains(name)
    }
}

/// Major version of the consuming fixer tool.
///
/// Collapses the runtime method-existence branching the bridge historically
/// did into one explicit capabilities value. V1 consumes the marker list and
/// has no queryable registry; V2 consumes the name-to-bool rule map and can
/// report which rules it ships.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToolVersion {
    V1,
    #[default]
    V2,
}

impl ToolVersion {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "1" | "v1" => Some(ToolVersion::V1),
            "2" | "v2" => Some(ToolVersion::V2),
            _ => None,
        }
    }

    /// Default availability collaborator for this version, used when the
    /// embedder does not inject its own registry.
    pub fn default_availability(self, catalog: &RuleCatalog) -> Box<dyn RuleAvailability> {
        match self {
            ToolVersion::V1 => Box::new(AllRules),
            ToolVersion::V2 => Box::new(RegisteredRules::from_catalog(catalog)),
        }
    }
}
