//! Table definition system - documents, template compilation, matching.

pub mod error;
pub mod matcher;
pub mod template;
pub mod types;

pub use error::{LoadWarning, TemplateError};
pub use matcher::TableMatcher;
pub use template::{CompiledPattern, TemplateToken};
pub use types::{TableDefinition, TableDocument};
