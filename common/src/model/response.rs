use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::model::infer;

/// One generated row, with the service's key order preserved.
pub type Row = Map<String, Value>;

/// The envelope returned by the generation endpoint. `response` is itself a
/// JSON-encoded string; see [`ServiceResponse::decode`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ServiceResponse {
    pub response: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PayloadError {
    #[error("Failed to render the response.")]
    Malformed,
    #[error("No data available.")]
    NoData,
}

/// The decoded inner payload of a [`ServiceResponse`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GeneratedPayload {
    #[serde(default)]
    pub data: Vec<Row>,
    #[serde(default)]
    pub relation_data: Option<Vec<Row>>,
}

impl ServiceResponse {
    /// Parses the nested JSON string. Absent or empty `data` is reported as
    /// [`PayloadError::NoData`]; anything unparseable as
    /// [`PayloadError::Malformed`].
    pub fn decode(&self) -> Result<GeneratedPayload, PayloadError> {
        let payload: GeneratedPayload =
            serde_json::from_str(&self.response).map_err(|_| PayloadError::Malformed)?;
        if payload.data.is_empty() {
            return Err(PayloadError::NoData);
        }
        Ok(payload)
    }
}

/// Builds the body for the push endpoint: the decoded payload, untouched
/// except for an added `column_definitions` map inferred from the first data
/// row. Fields the service included beyond `data`/`relation_data` are passed
/// through as-is.
pub fn push_payload(response: &ServiceResponse) -> Result<Value, PayloadError> {
    let mut root: Value =
        serde_json::from_str(&response.response).map_err(|_| PayloadError::Malformed)?;
    let object = root.as_object_mut().ok_or(PayloadError::Malformed)?;

    let first_row = object
        .get("data")
        .and_then(Value::as_array)
        .and_then(|rows| rows.first())
        .and_then(Value::as_object)
        .cloned()
        .ok_or(PayloadError::NoData)?;

    let definitions = infer::column_definitions(&first_row);
    object.insert("column_definitions".to_string(), Value::Object(definitions));
    Ok(root)
}
