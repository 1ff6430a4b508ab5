//! Table definition types
//!
//! Table-definition documents are produced by an external config-generation
//! tool; this crate only ever reads them. Each document is a TOML file with a
//! top-level `[[tables]]` array:
//!
//! ```toml
//! [[tables]]
//! pattern = "factLending_{date_range}.tsv"
//! table = "FACT_LENDING"
//! date_column = "AsOfDate"
//! ```

use serde::Deserialize;
use std::path::PathBuf;

/// A destination table's expected filename shape
///
/// Loaded immutably at startup; the set of definitions never changes within a
/// session. A refresh requires constructing a new matcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableDefinition {
    /// Document this definition was loaded from
    pub source: PathBuf,
    /// Filename template, literal text plus `{date_range}`/`{month}` tokens
    pub pattern: String,
    /// Destination table name
    pub table: String,
    /// Date column used by the loader, when the table carries one
    pub date_column: Option<String>,
}

/// On-disk shape of one definition inside a document
#[derive(Debug, Clone, Deserialize)]
pub struct RawDefinition {
    /// Filename template
    pub pattern: String,
    /// Destination table name
    pub table: String,
    /// Optional date column name
    #[serde(default)]
    pub date_column: Option<String>,
}

/// On-disk shape of a whole table-definition document
#[derive(Debug, Clone, Deserialize)]
pub struct TableDocument {
    /// Definitions in document order
    #[serde(default)]
    pub tables: Vec<RawDefinition>,
}
