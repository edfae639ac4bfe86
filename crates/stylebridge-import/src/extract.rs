//! Extract rule tables from the upstream PHP configuration source.
//!
//! The upstream file is a PHP class whose const arrays hold the rule
//! vocabulary. A handful of regex patterns is enough to read flat string
//! arrays and `'key' => 'value'` pairs; there is no need for a full PHP
//! parser here.

use convert_case::{Case, Casing};
use regex::Regex;

use crate::{ConfigTables, ImportError};

/// One entry of a const array: a plain string, or a key/value pair.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Entry {
    Simple(String),
    Pair(String, String),
}

/// Extract every recognized table from the PHP source.
///
/// Const names map as: `VALID`/`VALID_FIXERS` to the valid list, `ALIASES`
/// to alias pairs, `CONFLICTS` to conflict pairs, `<NAME>_FIXERS` to the
/// preset named `<name>` (lowercased). Anything else is recorded in
/// `skipped`. If the source carries no explicit valid list, it is derived
/// from the union of preset entries, alias names, and conflict members.
pub fn extract_tables(php: &str) -> Result<ConfigTables, ImportError> {
    let mut tables = ConfigTables::default();

    for (name, body) in const_arrays(php) {
        let entries = parse_entries(&body);

        match name.as_str() {
            "VALID" | "VALID_FIXERS" => {
                tables.valid = entries.into_iter().filter_map(simple).collect();
            }
            "ALIASES" => {
                tables.aliases = entries.into_iter().filter_map(pair).collect();
            }
            "CONFLICTS" => {
                tables.conflicts = entries.into_iter().filter_map(pair).collect();
            }
            _ => match name.strip_suffix("_FIXERS") {
                Some(preset) => {
                    let key = preset.to_case(Case::Flat);
                    let rules = entries.into_iter().filter_map(simple).collect();
                    tables.presets.push((key, rules));
                }
                None => tables.skipped.push(name),
            },
        }
    }

    if tables.presets.is_empty() && tables.aliases.is_empty() && tables.conflicts.is_empty() {
        return Err(ImportError::NoTables);
    }

    if tables.valid.is_empty() {
        tables.valid = derive_valid(&tables);
    }

    Ok(tables)
}

/// All `const NAME = [ ... ];` (or legacy `array( ... )`) blocks.
fn const_arrays(php: &str) -> Vec<(String, String)> {
    let re = Regex::new(
        r"(?s)const\s+([A-Z0-9_]+)\s*=\s*(?:\[|array\s*\()(.*?)(?:\]|\))\s*;",
    )
    .expect("const array pattern");

    re.captures_iter(php)
        .map(|caps| (caps[1].to_string(), caps[2].to_string()))
        .collect()
}

/// Parse array entries: `'name',` and `'key' => 'value',`.
fn parse_entries(body: &str) -> Vec<Entry> {
    let re = Regex::new(r"'([^']+)'(?:\s*=>\s*'([^']+)')?").expect("entry pattern");

    re.captures_iter(body)
        .map(|caps| match caps.get(2) {
            Some(value) => Entry::Pair(caps[1].to_string(), value.as_str().to_string()),
            None => Entry::Simple(caps[1].to_string()),
        })
        .collect()
}

fn simple(entry: Entry) -> Option<String> {
    match entry {
        Entry::Simple(name) => Some(name),
        Entry::Pair(..) => None,
    }
}

fn pair(entry: Entry) -> Option<(String, String)> {
    match entry {
        Entry::Pair(left, right) => Some((left, right)),
        Entry::Simple(_) => None,
    }
}

fn derive_valid(tables: &ConfigTables) -> Vec<String> {
    let mut valid: Vec<String> = Vec::new();
    let mut push = |name: &str| {
        let bare = name.trim_start_matches('-').to_string();
        if !valid.contains(&bare) {
            valid.push(bare);
        }
    };

    for (_, rules) in &tables.presets {
        for rule in rules {
            push(rule);
        }
    }
    for (left, right) in tables.aliases.iter().chain(tables.conflicts.iter()) {
        push(left);
        push(right);
    }

    valid.sort();
    valid
}
