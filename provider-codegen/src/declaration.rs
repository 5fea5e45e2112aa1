//! Intermediate representation for generated declarations.
//!
//! These types are language-agnostic plain data; renderers turn them into
//! concrete syntax.

use provider_schema::TypeReference;

/// Everything that ends up in one generated declaration file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeclarationFile {
    /// Declarations in emission order.
    pub declarations: Vec<TypeDeclaration>,
}

/// A single generated shape, e.g. `WidgetInputs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDeclaration {
    pub name: String,
    /// Fields in schema insertion order.
    pub fields: Vec<Field>,
}

/// One property of a generated shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub ty: FieldType,
    /// Set when the property is absent from the schema's required-name set.
    pub optional: bool,
}

/// The type category a schema property lowers to.
///
/// Array elements and nested object shapes are intentionally erased; the
/// schema's nested element types are not modeled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Text,
    Number,
    Boolean,
    ArrayOfUnknown,
    MapOfUnknown,
    Unknown,
}

impl From<TypeReference> for FieldType {
    fn from(reference: TypeReference) -> Self {
        match reference {
            TypeReference::String => FieldType::Text,
            TypeReference::Integer | TypeReference::Number => FieldType::Number,
            TypeReference::Boolean => FieldType::Boolean,
            TypeReference::Array => FieldType::ArrayOfUnknown,
            TypeReference::Object => FieldType::MapOfUnknown,
            TypeReference::Unknown => FieldType::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_type_reference_maps() {
        assert_eq!(FieldType::from(TypeReference::String), FieldType::Text);
        assert_eq!(FieldType::from(TypeReference::Integer), FieldType::Number);
        assert_eq!(FieldType::from(TypeReference::Number), FieldType::Number);
        assert_eq!(FieldType::from(TypeReference::Boolean), FieldType::Boolean);
        assert_eq!(
            FieldType::from(TypeReference::Array),
            FieldType::ArrayOfUnknown
        );
        assert_eq!(
            FieldType::from(TypeReference::Object),
            FieldType::MapOfUnknown
        );
        assert_eq!(FieldType::from(TypeReference::Unknown), FieldType::Unknown);
    }
}
