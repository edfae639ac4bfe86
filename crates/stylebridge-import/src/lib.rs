//! stylebridge-import: offline maintenance for the stylebridge rule catalog.
//!
//! Fetches the upstream StyleCI configuration source, extracts its const
//! tables (valid names, aliases, conflicts, preset lists), and renders the
//! generated `catalog/data.rs` file. The runtime never touches the network;
//! the generated table is a versioned, manually reviewed data file.

pub mod codegen;
pub mod extract;
pub mod fetch;
pub mod templates;

use thiserror::Error;

/// Errors raised while regenerating the catalog.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("failed to fetch upstream config source: {0}")]
    Http(#[from] reqwest::Error),

    #[error("upstream config source returned HTTP {status} for {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("no rule tables found in the upstream config source")]
    NoTables,

    #[error("failed to render catalog template: {0}")]
    Template(#[from] handlebars::RenderError),

    #[error("failed to read generated catalog: {0}")]
    Io(#[from] std::io::Error),
}

/// Tables extracted from the upstream configuration source.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigTables {
    pub valid: Vec<String>,
    pub aliases: Vec<(String, String)>,
    pub conflicts: Vec<(String, String)>,
    /// Preset key (lowercase) and its ordered entries; entries may carry the
    /// `-` disabled marker.
    pub presets: Vec<(String, Vec<String>)>,
    /// Const tables that were recognized but skipped, for operator review.
    pub skipped: Vec<String>,
}
