//! JSON rendering.

use serde::Serialize;

use crate::error::{ExportError, ExportResult};

/// Renders records as a pretty-printed JSON array.
///
/// An empty record slice renders as an empty array, so a zero-line export
/// is still a well-formed file.
pub fn to_pretty_json<R: Serialize>(records: &[R]) -> ExportResult<String> {
    serde_json::to_string_pretty(records).map_err(|e| ExportError::Serialization {
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct TestRecord {
        code: String,
        amount: String,
    }

    #[test]
    fn test_records_render_as_pretty_json_array() {
        let records = vec![TestRecord {
            code: "L100".to_string(),
            amount: "4550.00".to_string(),
        }];

        let content = to_pretty_json(&records).unwrap();
        assert!(content.starts_with("[\n"));
        assert!(content.contains("\"code\": \"L100\""));
        assert!(content.contains("\"amount\": \"4550.00\""));

        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed.as_array().map(Vec::len), Some(1));
    }

    #[test]
    fn test_empty_record_slice_renders_as_empty_array() {
        let content = to_pretty_json::<TestRecord>(&[]).unwrap();
        assert_eq!(content, "[]");
    }
}
