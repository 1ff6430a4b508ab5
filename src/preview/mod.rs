//! Bounded file previews
//!
//! Reads a prefix of a candidate data file for on-screen inspection without
//! ever loading the file fully. Read failures are rendered inline as preview
//! content so the browser never aborts over an unreadable file.

pub mod generator;
pub mod types;

pub use generator::PreviewGenerator;
pub use types::{Preview, PreviewLimits};
