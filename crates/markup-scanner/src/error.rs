//! Scan error types.

use text_size::TextRange;
use thiserror::Error;

/// An error that stopped the scanner.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct ScanError {
    /// The kind of error.
    pub kind: ScanErrorKind,
    /// The location in the source where the error occurred.
    pub span: TextRange,
}

impl ScanError {
    /// Creates a new scan error.
    pub fn new(kind: ScanErrorKind, span: TextRange) -> Self {
        Self { kind, span }
    }
}

/// The kind of scan error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanErrorKind {
    /// A `<!--` without a matching `-->`.
    #[error("unterminated comment")]
    UnterminatedComment,

    /// A `<!...` or `<?...` declaration without a closing `>`.
    #[error("unterminated declaration")]
    UnterminatedDeclaration,

    /// A tag that reaches the end of input before its `>`.
    #[error("unterminated tag: <{tag_name}>")]
    UnterminatedTag {
        /// The name of the tag.
        tag_name: String,
    },

    /// A quoted attribute value without its closing quote.
    #[error("unterminated value for attribute `{attribute}`")]
    UnterminatedAttributeValue {
        /// The attribute whose value is unterminated.
        attribute: String,
    },

    /// A raw-text element (`<script>`, `<style>`, ...) without its end tag.
    #[error("missing </{tag_name}> for raw text element")]
    UnterminatedRawText {
        /// The name of the raw-text element.
        tag_name: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use text_size::TextSize;

    #[test]
    fn test_error_display() {
        let error = ScanError::new(
            ScanErrorKind::UnterminatedTag {
                tag_name: "div".to_string(),
            },
            TextRange::new(TextSize::from(0), TextSize::from(4)),
        );
        assert_eq!(error.to_string(), "unterminated tag: <div>");
    }

    #[test]
    fn test_raw_text_display() {
        let kind = ScanErrorKind::UnterminatedRawText {
            tag_name: "script".to_string(),
        };
        assert_eq!(kind.to_string(), "missing </script> for raw text element");
    }
}
