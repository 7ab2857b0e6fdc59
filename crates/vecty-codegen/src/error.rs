//! Conversion error types.

use markup_scanner::{ScanError, TextRange};
use thiserror::Error;

/// An error that aborted a conversion.
///
/// Every variant is fatal: a half-built call tree is never valid output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// The markup could not be scanned.
    #[error(transparent)]
    Scan(#[from] ScanError),

    /// An `@event` binding names an event vecty has no constructor for.
    #[error("unknown event: {name}")]
    UnknownEvent {
        /// The event name without its `@` prefix.
        name: String,
        /// The location of the binding attribute.
        span: TextRange,
    },

    /// An end tag with no open element.
    #[error("unexpected end tag: </{name}>")]
    UnexpectedEndTag {
        /// The name of the end tag.
        name: String,
        /// The location of the end tag.
        span: TextRange,
    },

    /// An end tag that does not match the innermost open element.
    #[error("mismatched end tag: expected </{expected}>, found </{found}>")]
    MismatchedEndTag {
        /// The innermost open element.
        expected: String,
        /// The end tag that was found.
        found: String,
        /// The location of the end tag.
        span: TextRange,
    },

    /// A second top-level element after the root.
    #[error("multiple root elements: <{name}> follows the root element")]
    MultipleRoots {
        /// The name of the extra top-level element.
        name: String,
        /// The location of its start tag.
        span: TextRange,
    },

    /// Non-whitespace text outside the root element.
    #[error("text outside the root element")]
    TextOutsideRoot {
        /// The location of the text.
        span: TextRange,
    },

    /// End of input with an element still open.
    #[error("unclosed tag: <{name}>")]
    UnclosedTag {
        /// The name of the unclosed element.
        name: String,
        /// The location of its start tag.
        span: TextRange,
    },

    /// The output sink refused a write.
    #[error("failed to write generated code")]
    Format(#[from] std::fmt::Error),
}

impl ConvertError {
    /// Returns the source location the error refers to, if any.
    pub fn span(&self) -> Option<TextRange> {
        match self {
            ConvertError::Scan(error) => Some(error.span),
            ConvertError::UnknownEvent { span, .. }
            | ConvertError::UnexpectedEndTag { span, .. }
            | ConvertError::MismatchedEndTag { span, .. }
            | ConvertError::UnclosedTag { span, .. }
            | ConvertError::MultipleRoots { span, .. }
            | ConvertError::TextOutsideRoot { span } => Some(*span),
            ConvertError::Format(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use markup_scanner::TextSize;

    #[test]
    fn test_error_display() {
        let error = ConvertError::UnknownEvent {
            name: "hover".to_string(),
            span: TextRange::new(TextSize::from(8), TextSize::from(18)),
        };
        assert_eq!(error.to_string(), "unknown event: hover");
        assert_eq!(
            error.span(),
            Some(TextRange::new(TextSize::from(8), TextSize::from(18)))
        );
    }

    #[test]
    fn test_format_error_has_no_span() {
        assert_eq!(ConvertError::Format(std::fmt::Error).span(), None);
    }
}
