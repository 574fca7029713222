use edgeview_types::ResourceRecord;
use serde_json::{Map, Value, json};

use crate::DecodeError;

pub const LIST_KIND: &str = "List";
pub const API_VERSION: &str = "v1";

/// Parse a record payload into an item object stamped with `apiVersion` and
/// the record's own `kind`.
pub fn to_item(record: &ResourceRecord) -> Result<Map<String, Value>, DecodeError> {
    let value: Value =
        serde_json::from_str(&record.payload).map_err(|source| DecodeError::Payload {
            key: record.key.clone(),
            source,
        })?;

    let Value::Object(mut object) = value else {
        return Err(DecodeError::NotAnObject {
            key: record.key.clone(),
        });
    };

    object.insert("apiVersion".to_string(), Value::from(API_VERSION));
    object.insert("kind".to_string(), Value::from(record.kind.as_str()));
    Ok(object)
}

/// Wrap raw records of any kind in a `v1` `List` document.
///
/// Nothing is summarized here; each item is the stored object itself.
pub fn build_list(records: &[ResourceRecord]) -> Result<Value, DecodeError> {
    let items = records
        .iter()
        .map(|record| to_item(record).map(Value::Object))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(json!({
        "apiVersion": API_VERSION,
        "kind": LIST_KIND,
        "metadata": {
            "resourceVersion": "",
            "selfLink": "",
        },
        "items": items,
    }))
}
