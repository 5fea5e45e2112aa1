use std::path::{Path, PathBuf};

use eyre::{Context, Result};
use provider_schema::SchemaDocument;

use crate::lower::lower;
use crate::renderer::{DeclarationRenderer, TypeScriptRenderer};

/// Generates a typed declaration file from a schema document.
///
/// Writing is a full overwrite of the output file; re-running against an
/// unchanged schema leaves the file byte-identical.
pub struct Generator<R = TypeScriptRenderer> {
    renderer: R,
}

impl Generator {
    /// Create a generator targeting TypeScript.
    pub fn new() -> Self {
        Self {
            renderer: TypeScriptRenderer::new(),
        }
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: DeclarationRenderer> Generator<R> {
    /// Create a generator with a custom renderer.
    pub fn with_renderer(renderer: R) -> Self {
        Self { renderer }
    }

    /// Render the declarations without writing to disk.
    pub fn preview(&self, schema: &SchemaDocument) -> String {
        self.renderer.render(&lower(schema))
    }

    /// Render the declarations and write them into `dir`, returning the
    /// written path.
    pub fn generate(&self, schema: &SchemaDocument, dir: &Path) -> Result<PathBuf> {
        let content = self.preview(schema);
        let path = dir.join(self.renderer.file_name());
        std::fs::write(&path, content)
            .wrap_err_with(|| format!("failed to write {}", path.display()))?;
        Ok(path)
    }
}
