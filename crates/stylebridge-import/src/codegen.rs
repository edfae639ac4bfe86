//! Render the generated catalog data file from extracted tables.

use std::path::Path;

use convert_case::{Case, Casing};
use handlebars::Handlebars;
use serde_json::json;

use crate::templates::DATA_TEMPLATE;
use crate::{ConfigTables, ImportError};

/// Renders `catalog/data.rs` sources.
pub struct CatalogGenerator {
    handlebars: Handlebars<'static>,
}

impl Default for CatalogGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogGenerator {
    pub fn new() -> Self {
        let mut handlebars = Handlebars::new();

        // Generating Rust, not HTML.
        handlebars.register_escape_fn(handlebars::no_escape);
        handlebars
            .register_template_string("data", DATA_TEMPLATE)
            .expect("failed to register data template");

        Self { handlebars }
    }

    /// Generate the full `catalog/data.rs` source text.
    pub fn generate(&self, tables: &ConfigTables) -> Result<String, ImportError> {
        let presets: Vec<_> = tables
            .presets
            .iter()
            .map(|(name, entries)| {
                json!({
                    "name": name,
                    "const_name": format!("{}_FIXERS", name.to_case(Case::UpperFlat)),
                    "entries": entries,
                })
            })
            .collect();

        let data = json!({
            "valid": tables.valid,
            "aliases": pairs(&tables.aliases),
            "conflicts": pairs(&tables.conflicts),
            "presets": presets,
        });

        Ok(self.handlebars.render("data", &data)?)
    }
}

fn pairs(table: &[(String, String)]) -> Vec<serde_json::Value> {
    table
        .iter()
        .map(|(left, right)| json!({ "left": left, "right": right }))
        .collect()
}

/// Whether the on-disk generated catalog matches freshly generated source.
pub fn catalog_is_current(generated: &str, path: &Path) -> Result<bool, ImportError> {
    let on_disk = std::fs::read_to_string(path)?;
    Ok(on_disk == generated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn sample_tables() -> ConfigTables {
        ConfigTables {
            valid: vec!["encoding".into(), "ordered_use".into(), "psr0".into()],
            aliases: vec![("ordered_use".into(), "ordered_imports".into())],
            conflicts: vec![("long_array_syntax".into(), "short_array_syntax".into())],
            presets: vec![
                ("psr1".into(), vec!["encoding".into()]),
                ("symfony".into(), vec!["encoding".into(), "-psr0".into()]),
            ],
            skipped: vec![],
        }
    }

    #[test]
    fn generates_all_tables() {
        let source = CatalogGenerator::new().generate(&sample_tables()).unwrap();

        assert!(source.starts_with("//! StyleCI rule tables."));
        assert!(source.contains("pub(crate) static VALID: &[&str] = &[\n    \"encoding\",\n"));
        assert!(source.contains("(\"ordered_use\", \"ordered_imports\"),"));
        assert!(source.contains("(\"long_array_syntax\", \"short_array_syntax\"),"));
        assert!(source.contains("pub(crate) static PSR1_FIXERS: &[&str] = &[\n    \"encoding\",\n];"));
        assert!(source.contains("    \"-psr0\",\n"));
        assert!(source.contains("(\"psr1\", PSR1_FIXERS),"));
        assert!(source.contains("(\"symfony\", SYMFONY_FIXERS),"));
    }

    #[test]
    fn generation_is_deterministic() {
        let generator = CatalogGenerator::new();
        let tables = sample_tables();
        assert_eq!(
            generator.generate(&tables).unwrap(),
            generator.generate(&tables).unwrap()
        );
    }

    #[test]
    fn staleness_check_compares_bytes() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("data.rs");
        let source = CatalogGenerator::new().generate(&sample_tables()).unwrap();

        fs::write(&path, &source).unwrap();
        assert!(catalog_is_current(&source, &path).unwrap());

        fs::write(&path, "stale").unwrap();
        assert!(!catalog_is_current(&source, &path).unwrap());
    }
}
