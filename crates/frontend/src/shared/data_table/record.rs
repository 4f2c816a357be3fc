use serde::Serialize;
use serde_json::{Map, Value};

/// Row type accepted by [`super::DataTable`].
///
/// Records are read through their serialized JSON object form, so any
/// `Serialize` struct can be listed with an empty `impl`. Field names are the
/// wire names (after `rename_all`).
pub trait TableRecord: Serialize {
    /// Stable identity of the record, `None` when the record has none
    fn record_id(&self) -> Option<String> {
        self.field_value("id")
    }

    /// String form of a single field; `None` when absent or null
    fn field_value(&self, field: &str) -> Option<String> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map.get(field).and_then(value_to_text),
            _ => None,
        }
    }

    /// String form of every present field
    fn field_values(&self) -> Vec<String> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => object_values(&map),
            Ok(other) => value_to_text(&other).into_iter().collect(),
            Err(_) => Vec::new(),
        }
    }

    /// String forms of the listed fields that are present, in `fields` order.
    /// Serializes the record once however many fields are asked for.
    fn select_values(&self, fields: &[String]) -> Vec<String> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => fields
                .iter()
                .filter_map(|field| map.get(field).and_then(value_to_text))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Serialized content, changes whenever any field changes
    fn fingerprint(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

impl TableRecord for Value {
    fn field_value(&self, field: &str) -> Option<String> {
        self.get(field).and_then(value_to_text)
    }

    fn field_values(&self) -> Vec<String> {
        match self {
            Value::Object(map) => object_values(map),
            other => value_to_text(other).into_iter().collect(),
        }
    }

    fn select_values(&self, fields: &[String]) -> Vec<String> {
        fields
            .iter()
            .filter_map(|field| self.get(field).and_then(value_to_text))
            .collect()
    }
}

fn object_values(map: &Map<String, Value>) -> Vec<String> {
    map.values().filter_map(value_to_text).collect()
}

/// Coerces a JSON value to the text used for display and search.
/// `null` counts as an absent field.
pub fn value_to_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Array(_) | Value::Object(_) => Some(value.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Driver {
        id: Option<String>,
        full_name: String,
        rating: f64,
        is_online: bool,
        vehicle: Option<String>,
    }

    impl TableRecord for Driver {}

    #[test]
    fn test_struct_fields_use_wire_names() {
        let driver = Driver {
            id: Some("d-7".into()),
            full_name: "Ravi Kumar".into(),
            rating: 4.5,
            is_online: true,
            vehicle: None,
        };
        assert_eq!(driver.record_id().as_deref(), Some("d-7"));
        assert_eq!(driver.field_value("fullName").as_deref(), Some("Ravi Kumar"));
        assert_eq!(driver.field_value("rating").as_deref(), Some("4.5"));
        assert_eq!(driver.field_value("isOnline").as_deref(), Some("true"));
        assert_eq!(driver.field_value("vehicle"), None);
        assert_eq!(driver.field_value("missing"), None);
        let mut values = driver.field_values();
        values.sort();
        assert_eq!(values, vec!["4.5", "Ravi Kumar", "d-7", "true"]);
    }

    #[test]
    fn test_json_records() {
        let record = json!({"name": "Amit", "trips": 12, "tags": ["vip"], "note": null});
        assert_eq!(record.record_id(), None);
        assert_eq!(record.field_value("trips").as_deref(), Some("12"));
        assert_eq!(record.field_value("tags").as_deref(), Some("[\"vip\"]"));
        assert_eq!(record.field_value("note"), None);
        assert_eq!(record.field_values().len(), 3);
        let fields = vec!["trips".to_string(), "note".to_string(), "name".to_string()];
        assert_eq!(record.select_values(&fields), vec!["12", "Amit"]);
    }

    #[test]
    fn test_non_object_record() {
        let record = json!("plain");
        assert_eq!(record.field_values(), vec!["plain".to_string()]);
        assert_eq!(record.field_value("anything"), None);
    }

    #[test]
    fn test_fingerprint_tracks_content() {
        let before = json!({"id": "v1", "isVerified": false});
        let after = json!({"id": "v1", "isVerified": true});
        assert_eq!(before.record_id(), after.record_id());
        assert_ne!(before.fingerprint(), after.fingerprint());
    }
}
