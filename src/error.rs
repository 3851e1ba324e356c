use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while converting a merged manifest to Markdown.
///
/// Every variant is fatal to the invocation: nothing is retried internally,
/// and no partial output file is left behind.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// The manifest file does not exist at the given path.
    #[error("manifest file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// The manifest content is not valid JSON, or its shape is wrong
    /// (root not an array, an entry not an object, `extensions` missing
    /// or not an array of objects).
    #[error("malformed manifest: {0}")]
    MalformedInput(String),

    /// The manifest parsed cleanly but contains no module records.
    /// An empty manifest signals a broken pipeline upstream, so it is
    /// rejected instead of producing an empty table.
    #[error("the manifest contains no module records")]
    EmptyInput,

    /// The destination file could not be written.
    #[error("failed to write Markdown table to {}", .path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
