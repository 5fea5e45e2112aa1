//! Pulumi schema document model and loader.
//!
//! This crate owns the parsed representation of a provider's `schema.json`
//! and the code that reads it from disk. The document types are plain data:
//!
//! ```text
//! schema.json (JSON) → provider-schema (parsing) → provider-codegen
//! ```
//!
//! Property maps use [`indexmap::IndexMap`] so that schema insertion order
//! survives parsing; generated declarations depend on that order being
//! stable.

mod document;
mod error;
mod file;
mod token;

pub use document::{ResourceDescriptor, SchemaDocument, TypeReference};
pub use error::{Error, Result};
pub use file::{SCHEMA_FILE_NAME, SchemaFile};
pub use token::ResourceToken;
