use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

use crate::model::column::{ColumnDescriptor, ColumnType};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    /// Shown as a single inline message; the request is never sent.
    #[error("Please fill in all required fields.")]
    MissingFields,
}

/// The request body for the generation endpoint.
///
/// Rebuilt from the current editor state on every submit; there is no
/// persisted form identity. Column order is not meaningful to the service,
/// so a sorted map keeps the payload deterministic.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerateRequest {
    pub table_name: String,
    pub columns: BTreeMap<String, ColumnType>,
    pub input_text: String,
}

impl GenerateRequest {
    /// Assembles the payload from the editor's descriptors plus the text
    /// extracted from the uploaded document.
    ///
    /// Descriptors with an empty name or no resolved type are dropped
    /// silently. The gate before any network call: table name non-empty,
    /// input text non-empty, and at least one surviving column.
    pub fn build(
        table_name: &str,
        descriptors: &[ColumnDescriptor],
        input_text: &str,
    ) -> Result<Self, FormError> {
        let table_name = table_name.trim();

        let mut columns = BTreeMap::new();
        for descriptor in descriptors {
            let name = descriptor.name.trim();
            if name.is_empty() {
                continue;
            }
            if let Some(column_type) = descriptor.resolve_type() {
                columns.insert(name.to_string(), column_type);
            }
        }

        if table_name.is_empty() || input_text.is_empty() || columns.is_empty() {
            return Err(FormError::MissingFields);
        }

        Ok(Self {
            table_name: table_name.to_string(),
            columns,
            input_text: input_text.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::column::ColumnKind;
    use serde_json::json;

    fn descriptor(id: usize, name: &str, kind: Option<ColumnKind>) -> ColumnDescriptor {
        ColumnDescriptor {
            id,
            name: name.to_string(),
            kind,
            reference_table: String::new(),
            on_column_name: String::new(),
        }
    }

    #[test]
    fn empty_named_descriptors_never_reach_the_payload() {
        let descriptors = vec![
            descriptor(1, "", Some(ColumnKind::String)),
            descriptor(2, "amount", Some(ColumnKind::Float)),
        ];
        let request = GenerateRequest::build("invoices", &descriptors, "some text").unwrap();
        assert_eq!(request.columns.len(), 1);
        assert!(request.columns.contains_key("amount"));
    }

    #[test]
    fn descriptor_without_a_type_is_dropped() {
        let descriptors = vec![
            descriptor(1, "amount", Some(ColumnKind::Float)),
            descriptor(2, "pending", None),
        ];
        let request = GenerateRequest::build("invoices", &descriptors, "some text").unwrap();
        assert!(!request.columns.contains_key("pending"));
    }

    #[test]
    fn empty_table_name_is_rejected() {
        let descriptors = vec![descriptor(1, "amount", Some(ColumnKind::Float))];
        let result = GenerateRequest::build("", &descriptors, "some text");
        assert_eq!(result, Err(FormError::MissingFields));
    }

    #[test]
    fn missing_input_text_is_rejected() {
        let descriptors = vec![descriptor(1, "amount", Some(ColumnKind::Float))];
        let result = GenerateRequest::build("invoices", &descriptors, "");
        assert_eq!(result, Err(FormError::MissingFields));
    }

    #[test]
    fn all_columns_dropped_is_rejected() {
        let descriptors = vec![descriptor(1, "  ", Some(ColumnKind::String))];
        let result = GenerateRequest::build("invoices", &descriptors, "some text");
        assert_eq!(result, Err(FormError::MissingFields));
    }

    #[test]
    fn serialized_payload_matches_the_wire_shape() {
        let mut relation = descriptor(1, "owner", Some(ColumnKind::Relation));
        relation.reference_table = "users".to_string();
        relation.on_column_name = "id".to_string();
        let descriptors = vec![descriptor(2, "title", Some(ColumnKind::String)), relation];

        let request = GenerateRequest::build("books", &descriptors, "raw text").unwrap();
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "table_name": "books",
                "columns": {
                    "owner": {
                        "data_type": "relation",
                        "reference_table": "users",
                        "on_column_name": "id",
                    },
                    "title": "String",
                },
                "input_text": "raw text",
            })
        );
    }
}
