use indexmap::IndexMap;
use serde::Deserialize;

use crate::token::ResourceToken;

/// Root of a parsed `schema.json`.
///
/// Only the parts this tool consumes are modeled; everything else in the
/// schema is ignored during deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SchemaDocument {
    /// Resources keyed by token, in schema order.
    #[serde(default)]
    pub resources: IndexMap<ResourceToken, ResourceDescriptor>,
}

/// Input and output property shapes of a single resource.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceDescriptor {
    /// Output properties, in schema order.
    #[serde(default)]
    pub properties: IndexMap<String, TypeReference>,

    /// Names of required output properties.
    #[serde(default)]
    pub required: Vec<String>,

    /// Input properties, in schema order.
    #[serde(default)]
    pub input_properties: IndexMap<String, TypeReference>,

    /// Names of required input properties.
    #[serde(default)]
    pub required_inputs: Vec<String>,
}

/// The type tag of a schema property.
///
/// Unrecognized or absent tags deserialize to [`TypeReference::Unknown`];
/// a schema with exotic types still parses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "RawTypeReference")]
pub enum TypeReference {
    String,
    Integer,
    Number,
    Boolean,
    Array,
    Object,
    Unknown,
}

#[derive(Deserialize)]
struct RawTypeReference {
    #[serde(rename = "type", default)]
    type_tag: Option<String>,
}

impl From<RawTypeReference> for TypeReference {
    fn from(raw: RawTypeReference) -> Self {
        match raw.type_tag.as_deref() {
            Some("string") => TypeReference::String,
            Some("integer") => TypeReference::Integer,
            Some("number") => TypeReference::Number,
            Some("boolean") => TypeReference::Boolean,
            Some("array") => TypeReference::Array,
            Some("object") => TypeReference::Object,
            _ => TypeReference::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_ref(json: &str) -> TypeReference {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_known_type_tags() {
        assert_eq!(parse_ref(r#"{"type": "string"}"#), TypeReference::String);
        assert_eq!(parse_ref(r#"{"type": "integer"}"#), TypeReference::Integer);
        assert_eq!(parse_ref(r#"{"type": "number"}"#), TypeReference::Number);
        assert_eq!(parse_ref(r#"{"type": "boolean"}"#), TypeReference::Boolean);
        assert_eq!(parse_ref(r#"{"type": "array"}"#), TypeReference::Array);
        assert_eq!(parse_ref(r#"{"type": "object"}"#), TypeReference::Object);
    }

    #[test]
    fn test_unrecognized_tag_is_unknown() {
        assert_eq!(parse_ref(r#"{"type": "tuple"}"#), TypeReference::Unknown);
    }

    #[test]
    fn test_absent_tag_is_unknown() {
        assert_eq!(parse_ref(r#"{}"#), TypeReference::Unknown);
        assert_eq!(
            parse_ref(r##"{"$ref": "#/types/acme:index:Shape"}"##),
            TypeReference::Unknown
        );
    }

    #[test]
    fn test_descriptor_defaults() {
        let descriptor: ResourceDescriptor = serde_json::from_str("{}").unwrap();
        assert!(descriptor.properties.is_empty());
        assert!(descriptor.required.is_empty());
        assert!(descriptor.input_properties.is_empty());
        assert!(descriptor.required_inputs.is_empty());
    }

    #[test]
    fn test_document_preserves_property_order() {
        let document: SchemaDocument = serde_json::from_str(
            r#"{
                "resources": {
                    "acme:index:Widget": {
                        "inputProperties": {
                            "zeta": {"type": "string"},
                            "alpha": {"type": "integer"},
                            "mid": {"type": "boolean"}
                        }
                    }
                }
            }"#,
        )
        .unwrap();
        let descriptor = &document.resources[0];
        let names: Vec<&str> = descriptor
            .input_properties
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(names, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_document_without_resources() {
        let document: SchemaDocument = serde_json::from_str(r#"{"name": "acme"}"#).unwrap();
        assert!(document.resources.is_empty());
    }
}
