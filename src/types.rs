use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One entry of the top-level manifest array: a module's version, path,
/// and the extensions it contributed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleRecord {
    /// Module version, e.g. "0.4.1".
    #[serde(default)]
    pub version: Option<String>,

    /// Path of the module within the source tree, e.g. ":core:common".
    #[serde(rename = "modulePath", default)]
    pub module_path: Option<String>,

    /// The extensions discovered in this module, in manifest order.
    /// Required: a module record without an extension list means the
    /// upstream merge produced a malformed manifest.
    pub extensions: Vec<ExtensionRecord>,
}

/// Metadata for one discovered extension.
///
/// Field values are arbitrary JSON (string, list, nested object); the only
/// operation the renderer relies on is a textual rendering, so each field is
/// kept as a raw [`Value`]. A missing field renders as an empty table cell.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtensionRecord {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(rename = "type", default)]
    pub kind: Option<Value>,
    #[serde(default)]
    pub overview: Option<Value>,
    #[serde(rename = "className", default)]
    pub class_name: Option<Value>,
    #[serde(default)]
    pub categories: Option<Value>,
    #[serde(default)]
    pub provides: Option<Value>,
    #[serde(default)]
    pub references: Option<Value>,
    #[serde(default)]
    pub configuration: Option<Value>,
}
