//! Storage-type inference for the push action.
//!
//! The datastore endpoint wants a `column_definitions` map alongside the
//! generated rows. The labels are derived from the shape of the first data
//! row only; conflicting types in later rows are not reconciled. That is a
//! known limitation of the sampling heuristic, kept on purpose.

use serde_json::{Map, Value};

use crate::model::response::Row;

/// Derives `name -> type label` from a single sample row, preserving the
/// row's key order.
pub fn column_definitions(row: &Row) -> Map<String, Value> {
    row.iter()
        .map(|(name, value)| (name.clone(), Value::from(type_label(value))))
        .collect()
}

/// String gets a default length; a whole number counts as an integer even
/// when the service wrote it with a decimal point. Everything without a
/// better mapping (null, objects, arrays) falls back to the string type.
fn type_label(value: &Value) -> &'static str {
    match value {
        Value::String(_) => "String(255)",
        Value::Number(number) => {
            if number.is_i64()
                || number.is_u64()
                || number.as_f64().is_some_and(|float| float.fract() == 0.0)
            {
                "Integer"
            } else {
                "Float"
            }
        }
        Value::Bool(_) => "Boolean",
        _ => "String(255)",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(value: Value) -> Row {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn labels_per_json_type() {
        let definitions =
            column_definitions(&row(json!({"a": "x", "b": 3, "c": 3.5, "d": true})));
        assert_eq!(
            Value::Object(definitions),
            json!({"a": "String(255)", "b": "Integer", "c": "Float", "d": "Boolean"})
        );
    }

    #[test]
    fn whole_floats_count_as_integers() {
        let definitions = column_definitions(&row(json!({"n": 3.0})));
        assert_eq!(definitions["n"], json!("Integer"));
    }

    #[test]
    fn null_and_nested_values_default_to_string() {
        let definitions =
            column_definitions(&row(json!({"a": null, "b": {"x": 1}, "c": [1, 2]})));
        assert_eq!(
            Value::Object(definitions),
            json!({"a": "String(255)", "b": "String(255)", "c": "String(255)"})
        );
    }

    #[test]
    fn key_order_follows_the_row() {
        let definitions = column_definitions(&row(json!({"z": 1, "a": 2})));
        let keys: Vec<&String> = definitions.keys().collect();
        assert_eq!(keys, ["z", "a"]);
    }
}
