//! Renderers that turn the declaration IR into source text.

use crate::declaration::{DeclarationFile, Field, FieldType};

/// Warning comment prepended to every generated declaration file.
pub const GENERATED_HEADER: &str = "\
This file was automatically generated by provider-scripts.
DO NOT MODIFY IT BY HAND. Instead, modify the source Pulumi Schema file,
and run \"provider-scripts generate\" to regenerate this file.";

/// Renders a [`DeclarationFile`] to source text for one target language.
pub trait DeclarationRenderer {
    /// File name the rendered output is written to.
    fn file_name(&self) -> &'static str;

    /// Render the whole declaration file, header included.
    fn render(&self, file: &DeclarationFile) -> String;
}

/// TypeScript declaration renderer.
///
/// Emits one `export interface` per declaration with `readonly` fields and
/// `?` markers on optional fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeScriptRenderer;

impl TypeScriptRenderer {
    pub fn new() -> Self {
        Self
    }

    fn render_header(&self, out: &mut String) {
        out.push_str("/**\n");
        for line in GENERATED_HEADER.lines() {
            out.push_str(" * ");
            out.push_str(line);
            out.push('\n');
        }
        out.push_str(" */\n");
    }

    fn render_field(&self, out: &mut String, field: &Field) {
        let marker = if field.optional { "?" } else { "" };
        out.push_str(&format!(
            "    readonly {}{}: {};\n",
            field.name,
            marker,
            self.type_name(field.ty)
        ));
    }

    fn type_name(&self, ty: FieldType) -> &'static str {
        match ty {
            FieldType::Text => "string",
            FieldType::Number => "number",
            FieldType::Boolean => "boolean",
            FieldType::ArrayOfUnknown => "unknown[]",
            FieldType::MapOfUnknown => "Record<string, unknown>",
            FieldType::Unknown => "unknown",
        }
    }
}

impl DeclarationRenderer for TypeScriptRenderer {
    fn file_name(&self) -> &'static str {
        "provider-types.d.ts"
    }

    fn render(&self, file: &DeclarationFile) -> String {
        let mut out = String::new();
        self.render_header(&mut out);

        for declaration in &file.declarations {
            if declaration.fields.is_empty() {
                out.push_str(&format!("export interface {} {{}}\n", declaration.name));
                continue;
            }
            out.push_str(&format!("export interface {} {{\n", declaration.name));
            for field in &declaration.fields {
                self.render_field(&mut out, field);
            }
            out.push_str("}\n");
        }

        out
    }
}
