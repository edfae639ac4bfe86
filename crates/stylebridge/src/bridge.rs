//! Bridge facade tying config, catalog, availability, and finder together.

use std::path::{Path, PathBuf};

use crate::availability::{AllRules, RuleAvailability};
use crate::catalog::RuleCatalog;
use crate::config::StyleCiConfig;
use crate::error::ConfigError;
use crate::finder::{translate_finder, FinderSpec, Strictness};
use crate::ruleset::{build_fixers, build_rules};
use crate::warnings::{NullSink, WarningSink};

/// Translates one parsed StyleCI configuration for a consuming fixer tool.
///
/// Collaborators default to: built-in catalog, every rule available, warnings
/// dropped, lenient finder handling, current directory as the finder root.
/// Each has a `with_*` override.
pub struct ConfigBridge {
    config: StyleCiConfig,
    catalog: RuleCatalog,
    availability: Box<dyn RuleAvailability>,
    sink: Box<dyn WarningSink>,
    strictness: Strictness,
    finder_dirs: Vec<PathBuf>,
    header: Option<String>,
}

impl ConfigBridge {
    pub fn new(config: StyleCiConfig) -> Self {
        Self {
            config,
            catalog: RuleCatalog::builtin(),
            availability: Box::new(AllRules),
            sink: Box::new(NullSink),
            strictness: Strictness::default(),
            finder_dirs: vec![PathBuf::from(".")],
            header: None,
        }
    }

    /// Read `<dir>/.styleci.yml` and point the finder at the same directory.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let dir = dir.as_ref();
        let config = StyleCiConfig::from_dir(dir)?;
        Ok(Self::new(config).with_finder_dirs(vec![dir.to_path_buf()]))
    }

    pub fn with_catalog(mut self, catalog: RuleCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn with_availability(mut self, availability: Box<dyn RuleAvailability>) -> Self {
        self.availability = availability;
        self
    }

    pub fn with_sink(mut self, sink: Box<dyn WarningSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn with_strictness(mut self, strictness: Strictness) -> Self {
        self.strictness = strictness;
        self
    }

    pub fn with_finder_dirs(mut self, dirs: Vec<PathBuf>) -> Self {
        self.finder_dirs = dirs;
        self
    }

    /// Header comment text to prepend to files; configuring one appends the
    /// `header_comment` rule to the set.
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    pub fn config(&self) -> &StyleCiConfig {
        &self.config
    }

    pub fn linting(&self) -> bool {
        self.config.linting
    }

    pub fn header(&self) -> Option<&str> {
        self.header.as_deref()
    }

    /// Ordered marker list (v1 tool consumers).
    pub fn fixers(&self) -> Result<Vec<String>, ConfigError> {
        build_fixers(
            &self.config,
            &self.catalog,
            self.availability.as_ref(),
            self.header.as_deref(),
        )
    }

    /// Ordered name-to-enabled map (v2 tool consumers). Unavailable rules
    /// are skipped with a warning to the sink.
    pub fn rules(&self) -> Result<Vec<(String, bool)>, ConfigError> {
        let fixers = self.fixers()?;
        Ok(build_rules(
            &fixers,
            self.availability.as_ref(),
            self.sink.as_ref(),
        ))
    }

    /// File-inclusion filter for the consuming tool's finder.
    pub fn finder(&self) -> Result<FinderSpec, ConfigError> {
        translate_finder(
            &self.config.finder,
            self.finder_dirs.clone(),
            self.strictness,
            self.sink.as_ref(),
        )
    }
}
