use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// The type options offered by the column editor, in display order.
pub const COLUMN_KINDS: [ColumnKind; 6] = [
    ColumnKind::String,
    ColumnKind::Integer,
    ColumnKind::Float,
    ColumnKind::Date,
    ColumnKind::Boolean,
    ColumnKind::Relation,
];

/// One entry of the column-type `<select>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    String,
    Integer,
    Float,
    Date,
    Boolean,
    Relation,
}

impl ColumnKind {
    /// The label shown in the UI and sent on the wire for primitive columns.
    pub fn label(&self) -> &'static str {
        match self {
            ColumnKind::String => "String",
            ColumnKind::Integer => "Integer",
            ColumnKind::Float => "Float",
            ColumnKind::Date => "Date",
            ColumnKind::Boolean => "Boolean",
            ColumnKind::Relation => "Relation",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        COLUMN_KINDS.iter().copied().find(|kind| kind.label() == label)
    }
}

/// A user-authored column specification as edited in the form.
///
/// `id` is a per-session counter used by the editor to address one row of the
/// dynamic list; it never reaches the wire. The relation sub-fields are only
/// meaningful while `kind` is `Relation` and may be left half-filled, in
/// which case the descriptor degrades to the plain `"Relation"` label (see
/// [`ColumnDescriptor::resolve_type`]).
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDescriptor {
    pub id: usize,
    pub name: String,
    pub kind: Option<ColumnKind>,
    pub reference_table: String,
    pub on_column_name: String,
}

impl ColumnDescriptor {
    pub fn new(id: usize) -> Self {
        Self {
            id,
            name: String::new(),
            kind: None,
            reference_table: String::new(),
            on_column_name: String::new(),
        }
    }

    /// Resolves the descriptor into the type that goes on the wire.
    ///
    /// Returns `None` when no type has been picked yet (the descriptor is
    /// dropped from the payload). A `Relation` kind only becomes a full
    /// relation target when both sub-fields are filled in; otherwise it
    /// degrades to the plain label, which is intentional and not an error.
    pub fn resolve_type(&self) -> Option<ColumnType> {
        let kind = self.kind?;
        if kind == ColumnKind::Relation {
            let reference_table = self.reference_table.trim();
            let on_column_name = self.on_column_name.trim();
            if !reference_table.is_empty() && !on_column_name.is_empty() {
                return Some(ColumnType::Relation {
                    reference_table: reference_table.to_string(),
                    on_column_name: on_column_name.to_string(),
                });
            }
        }
        Some(ColumnType::Primitive(kind))
    }
}

/// A resolved column type, fixed once at payload construction.
///
/// Serializes either as the bare label string (`"Integer"`) or, for a
/// complete relation, as the object
/// `{"data_type":"relation","reference_table":…,"on_column_name":…}`
/// expected by the generation service.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnType {
    Primitive(ColumnKind),
    Relation {
        reference_table: String,
        on_column_name: String,
    },
}

impl Serialize for ColumnType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            ColumnType::Primitive(kind) => serializer.serialize_str(kind.label()),
            ColumnType::Relation {
                reference_table,
                on_column_name,
            } => {
                let mut map = serializer.serialize_map(Some(3))?;
                map.serialize_entry("data_type", "relation")?;
                map.serialize_entry("reference_table", reference_table)?;
                map.serialize_entry("on_column_name", on_column_name)?;
                map.end()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn relation_descriptor(reference_table: &str, on_column_name: &str) -> ColumnDescriptor {
        ColumnDescriptor {
            id: 1,
            name: "owner".to_string(),
            kind: Some(ColumnKind::Relation),
            reference_table: reference_table.to_string(),
            on_column_name: on_column_name.to_string(),
        }
    }

    #[test]
    fn unset_kind_resolves_to_nothing() {
        let descriptor = ColumnDescriptor::new(1);
        assert_eq!(descriptor.resolve_type(), None);
    }

    #[test]
    fn complete_relation_resolves_to_target() {
        let resolved = relation_descriptor("users", "id").resolve_type();
        assert_eq!(
            resolved,
            Some(ColumnType::Relation {
                reference_table: "users".to_string(),
                on_column_name: "id".to_string(),
            })
        );
    }

    #[test]
    fn half_filled_relation_degrades_to_plain_label() {
        let resolved = relation_descriptor("users", "").resolve_type();
        assert_eq!(resolved, Some(ColumnType::Primitive(ColumnKind::Relation)));
        assert_eq!(
            serde_json::to_value(resolved.unwrap()).unwrap(),
            json!("Relation")
        );
    }

    #[test]
    fn primitive_serializes_as_label() {
        let value = serde_json::to_value(ColumnType::Primitive(ColumnKind::Integer)).unwrap();
        assert_eq!(value, json!("Integer"));
    }

    #[test]
    fn relation_serializes_as_tagged_object() {
        let value = serde_json::to_value(ColumnType::Relation {
            reference_table: "users".to_string(),
            on_column_name: "id".to_string(),
        })
        .unwrap();
        assert_eq!(
            value,
            json!({
                "data_type": "relation",
                "reference_table": "users",
                "on_column_name": "id",
            })
        );
    }
}
