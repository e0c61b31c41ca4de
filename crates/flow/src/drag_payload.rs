//! Contains [DragPayload], the data a palette component carries to the canvas.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::category::NodeCategory;
use crate::flow_graph::GraphError;

/// What is being dragged from the palette, as exchanged in JSON:
///
/// ```json
/// {"type": "SAP", "label": "ERP", "iconType": "Database", "category": "connector"}
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DragPayload {
    /// The palette component kind.
    #[serde(rename = "type")]
    pub kind: String,
    pub label: String,
    pub icon_type: String,
    pub category: NodeCategory,
}

impl DragPayload {
    pub fn from_json(json: &str) -> Result<Self, DropError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, DropError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Errors that can occur when dropping a component onto the canvas.
#[derive(Error, Debug)]
pub enum DropError {
    #[error("Malformed drag payload: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Unknown component type `{0}`")]
    UnknownKind(String),

    #[error(transparent)]
    Graph(#[from] GraphError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_payload() {
        let payload = DragPayload::from_json(
            r#"{"type":"lookup","label":"Lookup","iconType":"Filter","category":"transformation"}"#,
        )
        .unwrap();

        assert_eq!(payload.kind, "lookup");
        assert_eq!(payload.icon_type, "Filter");
        assert_eq!(payload.category, NodeCategory::Transformation);
    }

    #[test]
    fn test_serialized_field_names() {
        let payload = DragPayload {
            kind: "cron".to_string(),
            label: "Cron".to_string(),
            icon_type: "Link".to_string(),
            category: NodeCategory::Job,
        };
        let value: serde_json::Value =
            serde_json::from_str(&payload.to_json().unwrap()).unwrap();

        assert_eq!(value["type"], "cron");
        assert_eq!(value["iconType"], "Link");
        assert_eq!(value["category"], "job");
    }

    #[test]
    fn test_malformed_payloads() {
        for json in [
            "",
            "not json",
            r#"{"type":"SAP","label":"ERP","iconType":"Database"}"#,
            r#"{"type":"SAP","label":"ERP","iconType":"Database","category":"database"}"#,
        ] {
            assert!(
                matches!(DragPayload::from_json(json), Err(DropError::Malformed(_))),
                "{json}"
            );
        }
    }
}
