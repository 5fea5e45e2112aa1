//! Typed declaration generation from a Pulumi schema.
//!
//! The crate is split into an intermediate representation and a renderer so
//! that "what to generate" is decoupled from "how to print it":
//!
//! ```text
//! SchemaDocument → lower() → DeclarationFile → DeclarationRenderer → text
//! ```
//!
//! Lowering is a pure function of the schema document; identical schema
//! input always yields byte-identical declaration output.

mod declaration;
mod generator;
mod lower;
mod renderer;

pub use declaration::{DeclarationFile, Field, FieldType, TypeDeclaration};
pub use generator::Generator;
pub use lower::lower;
pub use renderer::{DeclarationRenderer, GENERATED_HEADER, TypeScriptRenderer};
