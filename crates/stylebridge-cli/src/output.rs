//! Output formatting for the stylebridge CLI.
//!
//! Supports text (colored terminal) and JSON output formats.

use colored::*;
use serde::Serialize;
use stylebridge::{FinderSpec, Warning, WarningSink};

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Option<OutputFormat> {
        match s.to_lowercase().as_str() {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

/// Warning sink that prints yellow diagnostics to stderr.
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl WarningSink for ConsoleSink {
    fn warn(&self, warning: Warning) {
        eprintln!("{}: {}", "Warning".yellow(), warning);
    }
}

#[derive(Debug, Serialize)]
pub struct JsonRule {
    pub name: String,
    pub enabled: bool,
}

#[derive(Debug, Serialize)]
pub struct JsonFilter {
    pub op: &'static str,
    pub patterns: Vec<String>,
}

/// Full JSON output structure for `show`
#[derive(Debug, Serialize)]
pub struct JsonOutput {
    pub preset: String,
    pub linting: bool,
    pub rules: Vec<JsonRule>,
    pub finder: JsonFinder,
}

#[derive(Debug, Serialize)]
pub struct JsonFinder {
    pub dirs: Vec<String>,
    pub filters: Vec<JsonFilter>,
}

impl JsonOutput {
    pub fn new(
        preset: &str,
        linting: bool,
        rules: &[(String, bool)],
        finder: &FinderSpec,
    ) -> Self {
        Self {
            preset: preset.to_string(),
            linting,
            rules: rules
                .iter()
                .map(|(name, enabled)| JsonRule {
                    name: name.clone(),
                    enabled: *enabled,
                })
                .collect(),
            finder: JsonFinder {
                dirs: finder
                    .dirs
                    .iter()
                    .map(|d| d.display().to_string())
                    .collect(),
                filters: finder
                    .filters
                    .iter()
                    .map(|(op, patterns)| JsonFilter {
                        op: op.as_str(),
                        patterns: patterns.clone(),
                    })
                    .collect(),
            },
        }
    }
}

/// Print the resolved configuration as colored text.
pub fn print_text(preset: &str, linting: bool, rules: &[(String, bool)], finder: &FinderSpec) {
    println!("{}: {}", "Preset".bold(), preset);
    println!(
        "{}: {}",
        "Linting".bold(),
        if linting { "enabled" } else { "disabled" }
    );

    println!("{}:", "Rules".bold());
    for (name, enabled) in rules {
        if *enabled {
            println!("  {} {}", "+".green(), name);
        } else {
            println!("  {} {}", "-".red(), name);
        }
    }

    if !finder.filters.is_empty() {
        println!("{}:", "Finder".bold());
        for (op, patterns) in &finder.filters {
            println!("  {}: {}", op.as_str(), patterns.join(", "));
        }
    }
}
