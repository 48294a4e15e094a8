//! Decoded type descriptors produced by the external analysis engine.
//!
//! The schema is owned by the engine's driver script; these types decode the
//! fields the rest of the tool actually looks at and keep everything else in
//! a pass-through map so re-serializing an entry is lossless.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One type discovered by the analysis engine.
///
/// Decoded from the JSON array the engine writes. Field order within the
/// array is the engine's own parse order and is preserved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExternalType {
    /// Fully qualified type name.
    pub name: String,

    /// Name of the base type, if the engine reported one.
    #[serde(rename = "baseType", default, skip_serializing_if = "Option::is_none")]
    pub base_type: Option<String>,

    /// Members (properties, fields, methods) of the type.
    #[serde(default)]
    pub members: Vec<TypeMember>,

    /// Any additional fields the engine emitted, kept verbatim.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// A single member of an [`ExternalType`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeMember {
    /// Member name.
    pub name: String,

    /// The member's type as the engine spelled it (e.g. `"number"`).
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,

    /// Any additional fields the engine emitted, kept verbatim.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_minimal() {
        let json = r#"[{"name": "Widget"}]"#;
        let types: Vec<ExternalType> = serde_json::from_str(json).unwrap();
        assert_eq!(types.len(), 1);
        assert_eq!(types[0].name, "Widget");
        assert!(types[0].members.is_empty());
        assert!(types[0].base_type.is_none());
    }

    #[test]
    fn decode_with_members() {
        let json = r#"[{
            "name": "Widget",
            "members": [{"name": "id", "type": "number"}]
        }]"#;
        let types: Vec<ExternalType> = serde_json::from_str(json).unwrap();
        assert_eq!(types[0].members.len(), 1);
        assert_eq!(types[0].members[0].name, "id");
        assert_eq!(types[0].members[0].type_name.as_deref(), Some("number"));
    }

    #[test]
    fn unknown_fields_preserved() {
        let json = r#"[{"name": "A", "isInterface": true, "sourceFile": "a.ts"}]"#;
        let types: Vec<ExternalType> = serde_json::from_str(json).unwrap();
        assert_eq!(types[0].extra["isInterface"], Value::Bool(true));
        assert_eq!(types[0].extra["sourceFile"], Value::String("a.ts".into()));

        let back = serde_json::to_value(&types[0]).unwrap();
        assert_eq!(back["isInterface"], Value::Bool(true));
    }

    #[test]
    fn array_order_preserved() {
        let json = r#"[{"name": "B"}, {"name": "A"}, {"name": "C"}]"#;
        let types: Vec<ExternalType> = serde_json::from_str(json).unwrap();
        let names: Vec<_> = types.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["B", "A", "C"]);
    }

    #[test]
    fn missing_name_is_an_error() {
        let json = r#"[{"members": []}]"#;
        assert!(serde_json::from_str::<Vec<ExternalType>>(json).is_err());
    }
}
