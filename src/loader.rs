use crate::error::ManifestError;
use crate::types::ModuleRecord;
use serde_json::Value;
use std::path::Path;

/// Load and parse a merged manifest file into module records.
///
/// The root of the document must be an array of objects; each object must
/// carry an `extensions` array of objects. Any violation is reported as
/// [`ManifestError::MalformedInput`] naming the failure, never deferred to
/// the renderer. Record order is preserved exactly as in the file.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Vec<ModuleRecord>, ManifestError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ManifestError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ManifestError::MalformedInput(format!("failed to read manifest: {}", e)))?;

    let root: Value = serde_json::from_str(&content)
        .map_err(|e| ManifestError::MalformedInput(format!("invalid JSON: {}", e)))?;

    // Validate the top-level shape explicitly before deserializing, so the
    // diagnostic names the actual problem instead of a field mismatch.
    let entries = match root {
        Value::Array(entries) => entries,
        other => {
            return Err(ManifestError::MalformedInput(format!(
                "manifest root must be an array of module records, found {}",
                json_kind(&other)
            )))
        }
    };

    for (idx, entry) in entries.iter().enumerate() {
        if !entry.is_object() {
            return Err(ManifestError::MalformedInput(format!(
                "manifest entry {} must be an object, found {}",
                idx,
                json_kind(entry)
            )));
        }
    }

    serde_json::from_value(Value::Array(entries))
        .map_err(|e| ManifestError::MalformedInput(format!("invalid module record: {}", e)))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicU32, Ordering};

    static COUNTER: AtomicU32 = AtomicU32::new(0);

    fn temp_manifest(content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "manifest_md_loader_{}_{}.json",
            std::process::id(),
            COUNTER.fetch_add(1, Ordering::SeqCst)
        ));
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_preserves_order() {
        let path = temp_manifest(
            r#"[
                {"version": "2.0", "modulePath": ":b", "extensions": [{"name": "B"}]},
                {"version": "1.0", "modulePath": ":a", "extensions": [{"name": "A"}]}
            ]"#,
        );

        let records = load(&path).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].module_path.as_deref(), Some(":b"));
        assert_eq!(records[1].module_path.as_deref(), Some(":a"));

        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_missing_file_is_file_not_found() {
        let path = std::env::temp_dir().join("manifest_md_no_such_manifest.json");
        let err = load(&path).unwrap_err();
        assert!(matches!(err, ManifestError::FileNotFound(_)));
    }

    #[test]
    fn test_invalid_json_is_malformed() {
        let path = temp_manifest("{not json");
        let err = load(&path).unwrap_err();
        assert!(matches!(err, ManifestError::MalformedInput(_)));
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_non_array_root_is_malformed() {
        let path = temp_manifest("{}");
        let err = load(&path).unwrap_err();
        match err {
            ManifestError::MalformedInput(msg) => assert!(msg.contains("array")),
            other => panic!("expected MalformedInput, got {:?}", other),
        }
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_non_object_entry_is_malformed() {
        let path = temp_manifest(r#"[{"extensions": []}, 42]"#);
        let err = load(&path).unwrap_err();
        match err {
            ManifestError::MalformedInput(msg) => assert!(msg.contains("entry 1")),
            other => panic!("expected MalformedInput, got {:?}", other),
        }
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_missing_extensions_is_malformed() {
        let path = temp_manifest(r#"[{"version": "1.0", "modulePath": "core"}]"#);
        let err = load(&path).unwrap_err();
        assert!(matches!(err, ManifestError::MalformedInput(_)));
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_extensions_of_wrong_type_is_malformed() {
        let path = temp_manifest(r#"[{"extensions": "nope"}]"#);
        let err = load(&path).unwrap_err();
        assert!(matches!(err, ManifestError::MalformedInput(_)));
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_empty_array_loads_as_empty() {
        // An empty manifest parses fine; the renderer is the one that
        // rejects it with EmptyInput.
        let path = temp_manifest("[]");
        let records = load(&path).unwrap();
        assert!(records.is_empty());
        std::fs::remove_file(path).unwrap();
    }
}
