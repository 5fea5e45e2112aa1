//! Lowering from the parsed schema document to the declaration IR.

use std::collections::HashSet;

use indexmap::IndexMap;
use provider_schema::{SchemaDocument, TypeReference};

use crate::declaration::{DeclarationFile, Field, TypeDeclaration};

/// Lower a schema document into declarations.
///
/// Per resource this emits an `<Type>Inputs` shape from the input property
/// group followed by an `<Type>Outputs` shape from the output property
/// group, in schema order. Pure and deterministic.
pub fn lower(schema: &SchemaDocument) -> DeclarationFile {
    let mut declarations = Vec::with_capacity(schema.resources.len() * 2);

    for (token, resource) in &schema.resources {
        declarations.push(lower_shape(
            format!("{}Inputs", token.type_name()),
            &resource.input_properties,
            &resource.required_inputs,
        ));
        declarations.push(lower_shape(
            format!("{}Outputs", token.type_name()),
            &resource.properties,
            &resource.required,
        ));
    }

    DeclarationFile { declarations }
}

fn lower_shape(
    name: String,
    properties: &IndexMap<String, TypeReference>,
    required: &[String],
) -> TypeDeclaration {
    let required: HashSet<&str> = required.iter().map(String::as_str).collect();
    let fields = properties
        .iter()
        .map(|(property, reference)| Field {
            name: property.clone(),
            ty: (*reference).into(),
            optional: !required.contains(property.as_str()),
        })
        .collect();

    TypeDeclaration { name, fields }
}
