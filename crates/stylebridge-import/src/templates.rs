//! Handlebars template for the generated catalog data file.

/// Renders `catalog/data.rs` from extracted tables.
pub const DATA_TEMPLATE: &str = r#"//! StyleCI rule tables.
//!
//! Generated by `stylebridge catalog update` from the upstream StyleCI
//! configuration source. Review the diff when regenerating; do not edit by
//! hand.

/// Canonical rule names recognized by the linting service.
pub(crate) static VALID: &[&str] = &[
{{#each valid}}    "{{this}}",
{{/each}}];

/// Historical name on the left, current name on the right. Both directions
/// refer to the same rule across fixer-tool major versions.
pub(crate) static ALIASES: &[(&str, &str)] = &[
{{#each aliases}}    ("{{left}}", "{{right}}"),
{{/each}}];

/// Rules that must not both be enabled.
pub(crate) static CONFLICTS: &[(&str, &str)] = &[
{{#each conflicts}}    ("{{left}}", "{{right}}"),
{{/each}}];

{{#each presets}}pub(crate) static {{const_name}}: &[&str] = &[
{{#each entries}}    "{{this}}",
{{/each}}];

{{/each}}pub(crate) static PRESETS: &[(&str, &[&str])] = &[
{{#each presets}}    ("{{name}}", {{const_name}}),
{{/each}}];
"#;
