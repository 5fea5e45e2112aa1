use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceOffset, SourceSpan};
use thiserror::Error;

/// Result type for provider-schema operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read schema '{path}'")]
    #[diagnostic(
        code(provider_schema::read_error),
        help("run provider-scripts from the provider project root, next to schema.json")
    )]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse schema '{path}'")]
    #[diagnostic(code(provider_schema::parse_error))]
    Parse {
        path: PathBuf,
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Build a parse error with a span pointing at the serde_json failure
    /// location inside the source text.
    pub(crate) fn parse(path: PathBuf, content: &str, source: serde_json::Error) -> Box<Self> {
        let span = if source.line() > 0 {
            let offset =
                SourceOffset::from_location(content, source.line(), source.column()).offset();
            Some(SourceSpan::from(offset..offset))
        } else {
            None
        };
        let filename = path.display().to_string();
        Box::new(Error::Parse {
            path,
            src: NamedSource::new(filename, content.to_string()),
            span,
            source,
        })
    }
}
