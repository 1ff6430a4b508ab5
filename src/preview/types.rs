//! Preview content types

use byte_unit::{Byte, UnitType};
use std::path::Path;

/// Limits bounding how much of a file a preview reads
#[derive(Debug, Clone, Copy)]
pub struct PreviewLimits {
    /// Maximum number of content lines
    pub max_lines: usize,
    /// Maximum bytes shown per line before truncation
    pub max_line_bytes: usize,
}

impl Default for PreviewLimits {
    fn default() -> Self {
        Self {
            max_lines: 10,
            max_line_bytes: 200,
        }
    }
}

/// A generated preview: header lines followed by content lines
///
/// Read failures are rendered as preview content, never raised; a preview
/// always exists for any path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    /// File name, size and approximate row count
    pub header: Vec<String>,
    /// Bounded prefix of the file, possibly truncated
    pub lines: Vec<String>,
}

impl Preview {
    /// Build the standard header for a readable file
    ///
    /// The row count is approximate, derived from the byte size and a fixed
    /// typical-row-size heuristic. It is not a line count.
    #[must_use]
    pub fn header_for(path: &Path, size: u64, typical_row_bytes: u64) -> Vec<String> {
        let name = path.file_name().map_or_else(
            || path.display().to_string(),
            |n| n.to_string_lossy().into_owned(),
        );
        let humanized = Byte::from_u64(size)
            .get_appropriate_unit(UnitType::Binary)
            .to_string();
        let approx_rows = size / typical_row_bytes.max(1);
        vec![
            name,
            format!("{size} bytes ({humanized})"),
            format!("~{approx_rows} rows (approximate)"),
        ]
    }

    /// A single-line error preview
    #[must_use]
    pub fn error(path: &Path, message: &str) -> Self {
        Self {
            header: vec![path.display().to_string()],
            lines: vec![format!("cannot preview: {message}")],
        }
    }
}

impl std::fmt::Display for Preview {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for line in &self.header {
            writeln!(f, "{line}")?;
        }
        writeln!(f)?;
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
