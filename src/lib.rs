//! # manifest-md - Merged Manifest to Markdown
//!
//! Converts a merged JSON manifest of extension modules into a fixed-column
//! Markdown reference table. Runs as one step of a documentation build
//! pipeline, after per-module manifest fragments have been merged into a
//! single JSON file.
//!
//! ## Modules
//!
//! - **loader**: read and shape-check the manifest file into module records
//! - **render**: flatten records into table rows, sanitize, write Markdown
//!
//! ## Quick Start
//!
//! ```rust
//! use manifest_md::{render_to_string, ModuleRecord};
//! use serde_json::json;
//!
//! # fn main() -> Result<(), manifest_md::ManifestError> {
//! let records: Vec<ModuleRecord> = serde_json::from_value(json!([
//!     {
//!         "version": "0.4.1",
//!         "modulePath": ":core:transfer",
//!         "extensions": [
//!             {"name": "Transfer Core", "type": "extension", "categories": ["transfer"]}
//!         ]
//!     }
//! ])).unwrap();
//!
//! let table = render_to_string(&records)?;
//! assert!(table.starts_with("| Name | Type | Overview |"));
//! assert!(table.contains("| Transfer Core |"));
//! # Ok(())
//! # }
//! ```
//!
//! To go straight from file to file, use [`generate`].

use std::path::Path;

pub mod error;
pub mod loader;
pub mod render;
pub mod types;

// Re-export commonly used items for convenience
pub use error::ManifestError;
pub use loader::load;
pub use render::{render, render_to_string, sanitize};
pub use types::{ExtensionRecord, ModuleRecord};

/// Main entry point: load the manifest at `input` and write its Markdown
/// table to `output`. Fails fast on the first error; identical input always
/// yields byte-identical output.
pub fn generate<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
) -> Result<(), ManifestError> {
    let records = loader::load(input)?;
    render::render(&records, output)
}
