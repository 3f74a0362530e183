use crate::core::model::Record;
use crate::utils::error::Result;
use serde_json::Value;

// Strings pass through verbatim, other scalars use serde_json's
// locale-independent rendering, null becomes an empty field. Nested values
// are outside the data model and fall back to their compact JSON text.
fn field_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Convert records to delimited text.
///
/// Columns are the first record's keys in order. Every later record is
/// written positionally against them: a missing key emits an empty field,
/// extra keys are dropped. Fields containing the delimiter, a quote or a
/// line break are quoted with embedded quotes doubled; records end with a
/// `\n` terminator, the last one included.
pub fn encode(records: &[Record], delimiter: u8, include_headers: bool) -> Result<String> {
    if records.is_empty() {
        return Ok(String::new());
    }

    let columns: Vec<&str> = records[0].keys().map(String::as_str).collect();

    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .from_writer(Vec::new());

    if include_headers {
        writer.write_record(&columns)?;
    }

    for record in records {
        let row: Vec<String> = columns
            .iter()
            .map(|column| field_text(record.get(*column)))
            .collect();
        writer.write_record(&row)?;
    }

    let buffer = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        value.as_object().cloned().expect("test record must be an object")
    }

    #[test]
    fn test_encode_basic_rows_with_headers() {
        let records = vec![
            record(json!({"name": "Alice", "age": 30})),
            record(json!({"name": "Bob", "age": 25})),
        ];

        let output = encode(&records, b',', true).unwrap();

        assert_eq!(output, "name,age\nAlice,30\nBob,25\n");
    }

    #[test]
    fn test_encode_without_headers() {
        let records = vec![record(json!({"name": "Alice", "age": 30}))];

        let output = encode(&records, b',', false).unwrap();

        assert_eq!(output, "Alice,30\n");
    }

    #[test]
    fn test_encode_empty_input_is_empty_text() {
        let output = encode(&[], b',', true).unwrap();

        assert_eq!(output, "");
    }

    #[test]
    fn test_first_record_fixes_column_order() {
        let records = vec![
            record(json!({"b": 1, "a": 2})),
            record(json!({"a": 3, "b": 4})),
        ];

        let output = encode(&records, b',', true).unwrap();

        assert_eq!(output, "b,a\n1,2\n4,3\n");
    }

    #[test]
    fn test_missing_key_emits_empty_field() {
        let records = vec![
            record(json!({"name": "Alice", "age": 30})),
            record(json!({"name": "Bob"})),
        ];

        let output = encode(&records, b',', true).unwrap();

        assert_eq!(output, "name,age\nAlice,30\nBob,\n");
    }

    #[test]
    fn test_extra_keys_are_dropped() {
        let records = vec![
            record(json!({"name": "Alice"})),
            record(json!({"name": "Bob", "age": 25})),
        ];

        let output = encode(&records, b',', true).unwrap();

        assert_eq!(output, "name\nAlice\nBob\n");
    }

    #[test]
    fn test_delimiter_in_field_is_quoted() {
        let records = vec![record(json!({"name": "Doe, Jane", "age": 30}))];

        let output = encode(&records, b',', true).unwrap();

        assert_eq!(output, "name,age\n\"Doe, Jane\",30\n");
    }

    #[test]
    fn test_quote_in_field_is_doubled() {
        let records = vec![record(json!({"quote": "say \"hi\""}))];

        let output = encode(&records, b',', false).unwrap();

        assert_eq!(output, "\"say \"\"hi\"\"\"\n");
    }

    #[test]
    fn test_newline_in_field_is_quoted() {
        let records = vec![record(json!({"note": "line1\nline2", "id": 1}))];

        let output = encode(&records, b',', false).unwrap();

        assert_eq!(output, "\"line1\nline2\",1\n");
    }

    #[test]
    fn test_delimiter_override_changes_quoting_trigger() {
        // Under ';' a value containing ';' needs quoting while one with a
        // comma does not.
        let records = vec![record(json!({"a": "x;y", "b": "u,v"}))];

        let output = encode(&records, b';', true).unwrap();

        assert_eq!(output, "a;b\n\"x;y\";u,v\n");
    }

    #[test]
    fn test_header_cells_follow_the_same_quoting_rule() {
        let records = vec![record(json!({"first,last": "Alice"}))];

        let output = encode(&records, b',', true).unwrap();

        assert_eq!(output, "\"first,last\"\nAlice\n");
    }

    #[test]
    fn test_scalar_stringification() {
        let records = vec![record(json!({
            "s": "text",
            "n": 1.5,
            "i": -7,
            "b": true,
            "z": null
        }))];

        let output = encode(&records, b',', false).unwrap();

        assert_eq!(output, "text,1.5,-7,true,\n");
    }

    #[test]
    fn test_nested_value_falls_back_to_json_text() {
        let records = vec![record(json!({"id": 1, "tags": ["a", "b"]}))];

        let output = encode(&records, b',', false).unwrap();

        assert_eq!(output, "1,\"[\"\"a\"\",\"\"b\"\"]\"\n");
    }
}
