//! Config matcher
//!
//! Loads every table-definition document in a directory once, compiles their
//! templates, and answers "which table(s) does this filename belong to."

use super::error::LoadWarning;
use super::template::CompiledPattern;
use super::types::{TableDefinition, TableDocument};
use std::fs;
use std::path::{Path, PathBuf};

struct LoadedDefinition {
    definition: TableDefinition,
    pattern: CompiledPattern,
}

/// Immutable set of loaded table definitions with compiled matchers
///
/// Definitions are held in load order: documents in lexical filename order,
/// definitions within a document in document order.
pub struct TableMatcher {
    definitions: Vec<LoadedDefinition>,
}

impl TableMatcher {
    /// Load every document in `config_dir`
    ///
    /// A malformed document produces a warning and is skipped; a definition
    /// with a bad template likewise. A missing or unreadable directory yields
    /// an empty matcher (plus a warning for the unreadable case), never an
    /// error: zero valid documents simply means zero matches.
    #[must_use]
    pub fn load(config_dir: &Path) -> (Self, Vec<LoadWarning>) {
        let mut warnings = Vec::new();
        let mut definitions = Vec::new();

        for path in Self::document_paths(config_dir, &mut warnings) {
            Self::load_document(&path, &mut definitions, &mut warnings);
        }

        (Self { definitions }, warnings)
    }

    /// Construct a matcher with no definitions
    #[must_use]
    pub fn empty() -> Self {
        Self {
            definitions: Vec::new(),
        }
    }

    /// Every definition whose pattern fully matches `filename`, in load order
    ///
    /// More than one match is possible; disambiguation belongs to the caller.
    #[must_use]
    pub fn matches(&self, filename: &str) -> Vec<&TableDefinition> {
        self.definitions
            .iter()
            .filter(|d| d.pattern.matches(filename))
            .map(|d| &d.definition)
            .collect()
    }

    /// Number of loaded definitions
    #[must_use]
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Whether no definitions are loaded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// All loaded definitions in load order
    pub fn definitions(&self) -> impl Iterator<Item = &TableDefinition> {
        self.definitions.iter().map(|d| &d.definition)
    }

    fn document_paths(config_dir: &Path, warnings: &mut Vec<LoadWarning>) -> Vec<PathBuf> {
        if !config_dir.exists() {
            return Vec::new();
        }

        let read_dir = match fs::read_dir(config_dir) {
            Ok(read_dir) => read_dir,
            Err(e) => {
                warnings.push(LoadWarning {
                    path: config_dir.to_path_buf(),
                    message: format!("cannot read config directory: {e}"),
                });
                return Vec::new();
            }
        };

        let mut paths: Vec<PathBuf> = read_dir
            .filter_map(std::result::Result::ok)
            .map(|entry| entry.path())
            .filter(|p| {
                p.is_file() && p.extension().and_then(|e| e.to_str()) == Some("toml")
            })
            .collect();

        // Lexical filename order makes load order deterministic.
        paths.sort_by_key(|p| p.file_name().map(std::ffi::OsStr::to_os_string));
        paths
    }

    fn load_document(
        path: &Path,
        definitions: &mut Vec<LoadedDefinition>,
        warnings: &mut Vec<LoadWarning>,
    ) {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                warnings.push(LoadWarning {
                    path: path.to_path_buf(),
                    message: format!("cannot read document: {e}"),
                });
                return;
            }
        };

        let document: TableDocument = match toml::from_str(&text) {
            Ok(document) => document,
            Err(e) => {
                warnings.push(LoadWarning {
                    path: path.to_path_buf(),
                    message: format!("malformed document: {e}"),
                });
                return;
            }
        };

        for raw in document.tables {
            match CompiledPattern::compile(&raw.pattern) {
                Ok(pattern) => definitions.push(LoadedDefinition {
                    definition: TableDefinition {
                        source: path.to_path_buf(),
                        pattern: raw.pattern,
                        table: raw.table,
                        date_column: raw.date_column,
                    },
                    pattern,
                }),
                Err(e) => warnings.push(LoadWarning {
                    path: path.to_path_buf(),
                    message: format!("table '{}': {e}", raw.table),
                }),
            }
        }
    }
}
