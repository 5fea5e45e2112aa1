use std::path::{Path, PathBuf};

use crate::{Error, Result, SchemaDocument};

/// File name the schema is read from, relative to the project directory.
pub const SCHEMA_FILE_NAME: &str = "schema.json";

/// A schema.json file with both raw content and parsed document.
#[derive(Debug)]
pub struct SchemaFile {
    path: PathBuf,
    content: String,
    document: SchemaDocument,
}

impl SchemaFile {
    /// Open and parse a schema file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Read {
                path: path.clone(),
                source: e,
            })
        })?;
        let document: SchemaDocument = serde_json::from_str(&content)
            .map_err(|e| Error::parse(path.clone(), &content, e))?;

        Ok(Self {
            path,
            content,
            document,
        })
    }

    /// Open `schema.json` inside a project directory.
    pub fn open_in(dir: impl AsRef<Path>) -> Result<Self> {
        Self::open(dir.as_ref().join(SCHEMA_FILE_NAME))
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed document.
    pub fn document(&self) -> &SchemaDocument {
        &self.document
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = SchemaFile::open_in(dir.path()).unwrap_err();
        assert!(matches!(*err, Error::Read { .. }));
    }

    #[test]
    fn test_open_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(SCHEMA_FILE_NAME), "{not json").unwrap();
        let err = SchemaFile::open_in(dir.path()).unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_open_valid_schema() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(SCHEMA_FILE_NAME),
            r#"{"resources": {"acme:index:Widget": {}}}"#,
        )
        .unwrap();
        let file = SchemaFile::open_in(dir.path()).unwrap();
        assert_eq!(file.document().resources.len(), 1);
    }

    #[test]
    fn test_malformed_token_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(SCHEMA_FILE_NAME),
            r#"{"resources": {"not-a-token": {}}}"#,
        )
        .unwrap();
        let err = SchemaFile::open_in(dir.path()).unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }
}
