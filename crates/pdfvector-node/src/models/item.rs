//! Host item format: input batches and output records.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{Operation, Resource};

/// One unit of input data with its resolved parameter values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputItem {
    /// The item's own data (passed through by the host, unused here).
    #[serde(default)]
    pub json: Map<String, Value>,

    /// Parameter values resolved for this item.
    #[serde(default)]
    pub parameters: Map<String, Value>,
}

impl InputItem {
    /// Item carrying only parameters.
    #[must_use]
    pub fn with_parameters(parameters: Value) -> Self {
        let parameters = match parameters {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        Self { json: Map::new(), parameters }
    }
}

/// A batch execution request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Batch {
    /// Selected resource.
    #[serde(default)]
    pub resource: Resource,

    /// Selected operation; the resource's default when absent.
    #[serde(default)]
    pub operation: Option<Operation>,

    /// Capture per-item failures as `{error}` records instead of aborting.
    #[serde(default)]
    pub continue_on_fail: bool,

    /// Items in input order.
    #[serde(default)]
    pub items: Vec<InputItem>,
}

/// Link from an output record back to its input item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairedItem {
    /// Index of the originating input item.
    pub item: usize,
}

/// One output record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputItem {
    /// Record data.
    pub json: Map<String, Value>,

    /// Originating input item.
    pub paired_item: PairedItem,
}

impl OutputItem {
    /// Record for a captured failure.
    #[must_use]
    pub fn error(item: usize, message: impl Into<String>) -> Self {
        let mut json = Map::new();
        json.insert("error".to_string(), Value::String(message.into()));
        Self { json, paired_item: PairedItem { item } }
    }

    /// True if this record is a captured failure.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.json.len() == 1 && self.json.get("error").is_some_and(Value::is_string)
    }
}

/// Turn a response body into records tagged with `item`.
///
/// Arrays yield one record per element, objects one record, scalars are
/// wrapped as `{ "value": ... }`, and an empty body yields a single empty
/// record so the item stays traceable.
#[must_use]
pub fn records_from_response(response: Value, item: usize) -> Vec<OutputItem> {
    let values = match response {
        Value::Array(values) if !values.is_empty() => values,
        Value::Array(_) => Vec::new(),
        Value::Null => vec![Value::Object(Map::new())],
        other => vec![other],
    };

    values
        .into_iter()
        .map(|value| {
            let json = match value {
                Value::Object(map) => map,
                scalar => {
                    let mut map = Map::new();
                    map.insert("value".to_string(), scalar);
                    map
                }
            };
            OutputItem { json, paired_item: PairedItem { item } }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_object_response_is_one_record() {
        let records = records_from_response(json!({"valid": true}), 2);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].json["valid"], true);
        assert_eq!(records[0].paired_item.item, 2);
    }

    #[test]
    fn test_array_response_fans_out() {
        let records = records_from_response(json!([{"id": "a"}, {"id": "b"}, 7]), 0);
        assert_eq!(records.len(), 3);
        assert_eq!(records[1].json["id"], "b");
        assert_eq!(records[2].json["value"], 7);
        assert!(records.iter().all(|r| r.paired_item.item == 0));
    }

    #[test]
    fn test_null_response_keeps_item_traceable() {
        let records = records_from_response(Value::Null, 4);
        assert_eq!(records.len(), 1);
        assert!(records[0].json.is_empty());
        assert_eq!(records[0].paired_item.item, 4);
    }

    #[test]
    fn test_empty_array_yields_nothing() {
        assert!(records_from_response(json!([]), 0).is_empty());
    }

    #[test]
    fn test_error_record_shape() {
        let record = OutputItem::error(1, "boom");
        assert!(record.is_error());
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({"json": {"error": "boom"}, "pairedItem": {"item": 1}})
        );
    }

    #[test]
    fn test_batch_reads_host_shape() {
        let batch: Batch = serde_json::from_value(json!({
            "resource": "document",
            "operation": "upload",
            "continueOnFail": true,
            "items": [{"parameters": {"fileType": "docx"}}]
        }))
        .unwrap();

        assert_eq!(batch.resource, Resource::Document);
        assert_eq!(batch.operation, Some(Operation::Upload));
        assert!(batch.continue_on_fail);
        assert_eq!(batch.items[0].parameters["fileType"], "docx");
    }
}
