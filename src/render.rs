use crate::error::ManifestError;
use crate::types::{ExtensionRecord, ModuleRecord};
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Fixed column header of the reference table.
const TABLE_HEADER: &str = "| Name | Type | Overview | Class Name | Categories | Provides | References | Configuration | Version | Module Path |\n";

/// Header separator row. Cell widths carry no meaning for Markdown
/// renderers; the column count is what matters.
const TABLE_SEPARATOR: &str = "|------|------|----------|------------|------------|----------|------------|---------------| ---------------|---------------|\n";

/// One rendered table row: eight cells from the extension, two from the
/// parent module. Built per (module, extension) pair and discarded after
/// the output string is produced.
struct TableRow {
    cells: [String; 10],
}

impl TableRow {
    fn new(module: &ModuleRecord, extension: &ExtensionRecord) -> Self {
        TableRow {
            cells: [
                cell(extension.name.as_ref()),
                cell(extension.kind.as_ref()),
                cell(extension.overview.as_ref()),
                cell(extension.class_name.as_ref()),
                cell(extension.categories.as_ref()),
                cell(extension.provides.as_ref()),
                cell(extension.references.as_ref()),
                cell(extension.configuration.as_ref()),
                module.version.as_deref().map(sanitize).unwrap_or_default(),
                module.module_path.as_deref().map(sanitize).unwrap_or_default(),
            ],
        }
    }

    fn push_onto(&self, out: &mut String) {
        for cell in &self.cells {
            out.push_str("| ");
            out.push_str(cell);
            out.push(' ');
        }
        out.push_str("|\n");
    }
}

/// Render module records as a Markdown table.
///
/// Rows follow input order exactly: outer record order, then each record's
/// `extensions` order. An empty record set is rejected with
/// [`ManifestError::EmptyInput`] rather than producing an empty table.
pub fn render_to_string(records: &[ModuleRecord]) -> Result<String, ManifestError> {
    if records.is_empty() {
        return Err(ManifestError::EmptyInput);
    }

    let mut out = String::new();
    out.push_str(TABLE_HEADER);
    out.push_str(TABLE_SEPARATOR);

    for module in records {
        for extension in &module.extensions {
            TableRow::new(module, extension).push_onto(&mut out);
        }
    }

    Ok(out)
}

/// Render module records and write the table to `destination` as UTF-8,
/// replacing any prior content.
///
/// The table is written to a temporary sibling file and renamed into place,
/// so a failed pass never leaves a half-written table at the destination.
pub fn render<P: AsRef<Path>>(
    records: &[ModuleRecord],
    destination: P,
) -> Result<(), ManifestError> {
    let destination = destination.as_ref();
    let table = render_to_string(records)?;

    let tmp = tmp_path(destination);
    std::fs::write(&tmp, &table).map_err(|e| ManifestError::WriteFailure {
        path: destination.to_path_buf(),
        source: e,
    })?;

    std::fs::rename(&tmp, destination).map_err(|e| {
        let _ = std::fs::remove_file(&tmp);
        ManifestError::WriteFailure {
            path: destination.to_path_buf(),
            source: e,
        }
    })
}

/// Neutralize characters that would break Markdown table syntax: every
/// newline becomes a space, every pipe becomes a hyphen. No other escaping.
/// Idempotent.
pub fn sanitize(input: &str) -> String {
    input.replace('\n', " ").replace('|', "-")
}

/// Textual form of one extension field. Strings render verbatim, a missing
/// or null value renders as an empty cell, anything else (lists, nested
/// objects) renders as its compact JSON text.
fn cell(value: Option<&Value>) -> String {
    let text = match value {
        None | Some(Value::Null) => return String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    };
    sanitize(&text)
}

fn tmp_path(destination: &Path) -> PathBuf {
    let mut name = destination
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    destination.with_file_name(name)
}
