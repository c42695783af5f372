//! Record model and field lookups

use serde_json::{Map, Value};

/// A decoded record: field name to JSON value, in source order
pub type Record = Map<String, Value>;

/// Result of looking a field up in a record
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    /// The field is not in the record
    Absent,

    /// The field is present but is not a string
    Other(&'a Value),

    /// The field is present and holds a string
    Text(&'a str),
}

impl<'a> FieldValue<'a> {
    /// Look `field` up in `record`
    pub fn lookup(record: &'a Record, field: &str) -> Self {
        match record.get(field) {
            None => FieldValue::Absent,
            Some(Value::String(text)) => FieldValue::Text(text),
            Some(other) => FieldValue::Other(other),
        }
    }

    pub fn is_present(&self) -> bool {
        !matches!(self, FieldValue::Absent)
    }

    /// The string value, if the field holds one
    pub fn as_text(&self) -> Option<&'a str> {
        match self {
            FieldValue::Text(text) => Some(*text),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_lookup_tristate() {
        let record = record(json!({
            "phone": "9876543210",
            "age": 42,
            "notes": null,
        }));

        assert_eq!(FieldValue::lookup(&record, "phone"), FieldValue::Text("9876543210"));
        assert_eq!(FieldValue::lookup(&record, "age"), FieldValue::Other(&json!(42)));
        assert_eq!(FieldValue::lookup(&record, "notes"), FieldValue::Other(&Value::Null));
        assert_eq!(FieldValue::lookup(&record, "email"), FieldValue::Absent);
    }

    #[test]
    fn test_presence_and_text() {
        let record = record(json!({"id": 7, "name": "Asha"}));

        assert!(FieldValue::lookup(&record, "id").is_present());
        assert!(!FieldValue::lookup(&record, "missing").is_present());
        assert_eq!(FieldValue::lookup(&record, "id").as_text(), None);
        assert_eq!(FieldValue::lookup(&record, "name").as_text(), Some("Asha"));
    }
}
