//! Projection of a decoded service payload into displayable tables.
//!
//! Headers come from the key order of the first row; every later row is
//! rendered positionally against that header set, with missing keys shown as
//! empty cells rather than an error.

use serde_json::Value;

use crate::model::response::{PayloadError, Row, ServiceResponse};

/// A grid of plain-text cells ready for the view layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TableView {
    /// Returns `None` for an empty row set, which callers treat as "nothing
    /// to draw" rather than an error.
    pub fn from_rows(rows: &[Row]) -> Option<Self> {
        let first = rows.first()?;
        let headers: Vec<String> = first.keys().cloned().collect();
        let rows = rows
            .iter()
            .map(|row| {
                headers
                    .iter()
                    .map(|header| row.get(header).map(cell_text).unwrap_or_default())
                    .collect()
            })
            .collect();
        Some(Self { headers, rows })
    }
}

/// Both display tables for one service response: the optional relation table
/// (drawn first) and the primary data table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Projection {
    pub relation: Option<TableView>,
    pub data: TableView,
}

pub fn project(response: &ServiceResponse) -> Result<Projection, PayloadError> {
    let payload = response.decode()?;
    // decode() guarantees data is non-empty
    let data = TableView::from_rows(&payload.data).ok_or(PayloadError::NoData)?;
    let relation = payload
        .relation_data
        .as_deref()
        .and_then(TableView::from_rows);
    Ok(Projection { relation, data })
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn envelope(inner: &str) -> ServiceResponse {
        ServiceResponse {
            response: inner.to_string(),
        }
    }

    #[test]
    fn empty_data_yields_the_no_data_message() {
        let error = project(&envelope(r#"{"data":[]}"#)).unwrap_err();
        assert_eq!(error.to_string(), "No data available.");
    }

    #[test]
    fn malformed_response_yields_the_render_failure_message() {
        let error = project(&envelope("{broken")).unwrap_err();
        assert_eq!(error.to_string(), "Failed to render the response.");
    }

    #[test]
    fn relation_table_precedes_the_data_table() {
        let projection =
            project(&envelope(r#"{"data":[{"x":1}],"relation_data":[{"y":2}]}"#)).unwrap();
        let relation = projection.relation.unwrap();
        assert_eq!(relation.headers, ["y"]);
        assert_eq!(relation.rows, [["2"]]);
        assert_eq!(projection.data.headers, ["x"]);
        assert_eq!(projection.data.rows, [["1"]]);
    }

    #[test]
    fn empty_relation_data_draws_no_relation_table() {
        let projection =
            project(&envelope(r#"{"data":[{"x":1}],"relation_data":[]}"#)).unwrap();
        assert!(projection.relation.is_none());
    }

    #[test]
    fn headers_come_from_the_first_row_in_key_order() {
        let projection = project(&envelope(
            r#"{"data":[{"b":"one","a":"two"},{"a":"three"}]}"#,
        ))
        .unwrap();
        assert_eq!(projection.data.headers, ["b", "a"]);
    }

    #[test]
    fn missing_keys_render_as_empty_cells() {
        let projection = project(&envelope(
            r#"{"data":[{"a":1,"b":2},{"b":4},{"a":null,"b":6}]}"#,
        ))
        .unwrap();
        assert_eq!(
            projection.data.rows,
            vec![
                vec!["1".to_string(), "2".to_string()],
                vec![String::new(), "4".to_string()],
                vec![String::new(), "6".to_string()],
            ]
        );
    }
}
