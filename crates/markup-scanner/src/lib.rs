//! HTML markup scanner for html2vecty.
//!
//! This crate turns markup source into a stream of tokens:
//! - Lexer built on `logos`, with separate content and tag-interior modes
//! - Pull-style [`Scanner`] exposing the current token's kind, tag name,
//!   attributes and text
//! - Raw-text handling for `<script>` and `<style>` contents
//! - Character reference decoding
//!
//! # Example
//!
//! ```
//! use markup_scanner::{Scanner, TokenKind};
//!
//! let mut scanner = Scanner::new(r#"<button @click="Save">Go</button>"#);
//! assert_eq!(scanner.next_kind().unwrap(), TokenKind::StartTag);
//! assert_eq!(scanner.tag_name(), "button");
//!
//! let attributes = scanner.take_attributes();
//! assert_eq!(attributes[0].key, "@click");
//! assert_eq!(attributes[0].value, "Save");
//! ```

mod entities;
mod error;
mod lexer;
mod scanner;

pub use error::{ScanError, ScanErrorKind};
pub use lexer::{ContentToken, TagToken};
pub use scanner::{Attribute, Scanner, TokenKind};
pub use text_size::{TextRange, TextSize};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_empty() {
        let mut scanner = Scanner::new("");
        assert_eq!(scanner.next_kind(), Ok(TokenKind::Eof));
    }

    #[test]
    fn test_scan_whitespace_only() {
        let mut scanner = Scanner::new("\n  \n");
        assert_eq!(scanner.next_kind(), Ok(TokenKind::Text));
        assert_eq!(scanner.text(), "\n  \n");
        assert_eq!(scanner.next_kind(), Ok(TokenKind::Eof));
    }
}
