//! Errors reported by the command line tool.

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;
use vecty_codegen::ConvertError;

/// A failed run.
#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    #[error("failed to read {path}")]
    #[diagnostic(code(html2vecty::read))]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}")]
    #[diagnostic(code(html2vecty::write))]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to convert {path}")]
    #[diagnostic(code(html2vecty::convert))]
    Convert {
        path: String,
        #[source_code]
        code: NamedSource<String>,
        #[label("here")]
        span: Option<SourceSpan>,
        #[source]
        error: ConvertError,
    },
}

impl CliError {
    /// Wraps a conversion error together with the markup it refers to.
    pub fn convert(path: &str, markup: String, error: ConvertError) -> Self {
        let span = error.span().map(|range| {
            let start = usize::from(range.start());
            SourceSpan::from((start, usize::from(range.len())))
        });
        CliError::Convert {
            path: path.to_string(),
            code: NamedSource::new(path, markup),
            span,
            error,
        }
    }
}
