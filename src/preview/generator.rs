use super::types::{Preview, PreviewLimits};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Assumed bytes per data row when estimating row counts
const TYPICAL_ROW_BYTES: u64 = 120;

/// Marker appended to a line cut at the byte limit
const TRUNCATION_MARKER: &str = "…";

pub struct PreviewGenerator {
    limits: PreviewLimits,
}

impl PreviewGenerator {
    #[must_use]
    pub const fn new(limits: PreviewLimits) -> Self {
        Self { limits }
    }

    /// Generate a bounded preview of `path`
    ///
    /// Reads at most `max_lines * (max_line_bytes + 1)` bytes from the start
    /// of the file, so memory stays bounded regardless of file size.
    /// Non-decodable byte sequences are replaced, and any failure (missing
    /// file, permission, deletion mid-read) becomes an inline error preview.
    #[must_use]
    pub fn generate(&self, path: &Path) -> Preview {
        let mut file = match File::open(path) {
            Ok(file) => file,
            Err(e) => return Preview::error(path, &e.to_string()),
        };

        let size = match file.metadata() {
            Ok(metadata) => metadata.len(),
            Err(e) => return Preview::error(path, &e.to_string()),
        };

        let budget = (self.limits.max_lines * (self.limits.max_line_bytes + 1)) as u64;
        let mut buffer = Vec::with_capacity(budget.min(size) as usize);
        if let Err(e) = file.take(budget).read_to_end(&mut buffer) {
            return Preview::error(path, &e.to_string());
        }

        let text = String::from_utf8_lossy(&buffer);
        let lines = text
            .lines()
            .take(self.limits.max_lines)
            .map(|line| self.clip(line))
            .collect();

        Preview {
            header: Preview::header_for(path, size, TYPICAL_ROW_BYTES),
            lines,
        }
    }

    fn clip(&self, line: &str) -> String {
        if line.len() <= self.limits.max_line_bytes {
            return line.to_string();
        }
        let mut clipped = String::with_capacity(self.limits.max_line_bytes + TRUNCATION_MARKER.len());
        for c in line.chars() {
            if clipped.len() + c.len_utf8() > self.limits.max_line_bytes {
                break;
            }
            clipped.push(c);
        }
        clipped.push_str(TRUNCATION_MARKER);
        clipped
    }
}

impl Default for PreviewGenerator {
    fn default() -> Self {
        Self::new(PreviewLimits::default())
    }
}
