//! Markup lexer using logos.
//!
//! HTML is context sensitive, so lexing happens in two modes:
//! - [`ContentToken`] between tags (text runs and tag/comment openers)
//! - [`TagToken`] inside a tag (attribute names, `=`, quoted values, `>`)
//!
//! The [`Scanner`](crate::Scanner) switches between them with
//! [`logos::Lexer::morph`]. Comment bodies, declarations, unquoted attribute
//! values and raw-text element contents are consumed by the scanner directly
//! through `remainder`/`bump`, since their terminators cannot be expressed as
//! a single token.

use logos::Logos;

/// Tokens recognised between tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Logos)]
pub enum ContentToken {
    /// `<!--`
    #[token("<!--")]
    CommentOpen,

    /// `<!` (doctype or another declaration)
    #[token("<!")]
    DeclarationOpen,

    /// `<?` (processing instruction, treated as a bogus comment)
    #[token("<?")]
    ProcessingOpen,

    /// `<name`
    #[regex(r"<[a-zA-Z][^ \t\r\n\x0C/>]*")]
    StartTagOpen,

    /// `</name`
    #[regex(r"</[a-zA-Z][^ \t\r\n\x0C/>]*")]
    EndTagOpen,

    /// A lone `<` that does not open any markup construct.
    #[token("<")]
    Lt,

    /// Character data up to the next `<`.
    #[regex(r"[^<]+")]
    Text,
}

/// Tokens recognised inside a start or end tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Logos)]
#[logos(skip r"[ \t\r\n\x0C]+")]
pub enum TagToken {
    /// `>`
    #[token(">")]
    Close,

    /// `/>`
    #[token("/>")]
    SelfClose,

    /// A stray `/` inside the tag.
    #[token("/")]
    Slash,

    /// `=`
    #[token("=")]
    Eq,

    /// `"..."`
    #[regex(r#""[^"]*""#)]
    DoubleQuoted,

    /// `'...'`
    #[regex(r"'[^']*'")]
    SingleQuoted,

    /// An attribute name.
    #[regex(r#"[^ \t\r\n\x0C"'>/=]+"#)]
    Name,
}

impl TagToken {
    /// Returns true for the tokens that end a tag.
    pub fn is_tag_end(&self) -> bool {
        matches!(self, TagToken::Close | TagToken::SelfClose)
    }
}

/// Returns true for the ASCII whitespace characters HTML allows between
/// attributes.
pub fn is_html_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n' | '\x0C')
}

/// Returns true if `rest` begins a markup construct (tag, end tag, comment,
/// declaration or processing instruction) rather than literal text.
pub fn starts_markup(rest: &str) -> bool {
    let mut chars = rest.chars();
    if chars.next() != Some('<') {
        return false;
    }
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => true,
        Some('!') | Some('?') => true,
        Some('/') => matches!(chars.next(), Some(c) if c.is_ascii_alphabetic()),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content(source: &str) -> Vec<ContentToken> {
        ContentToken::lexer(source)
            .map(|t| t.expect("content lexing never fails"))
            .collect()
    }

    fn tag(source: &str) -> Vec<Result<TagToken, ()>> {
        TagToken::lexer(source).collect()
    }

    #[test]
    fn test_simple_element() {
        assert_eq!(
            content("<div>hi</div>"),
            vec![
                ContentToken::StartTagOpen,
                ContentToken::Text,
                ContentToken::EndTagOpen,
                ContentToken::Text
            ]
        );
    }

    #[test]
    fn test_comment_and_declaration_openers() {
        assert_eq!(
            content("<!--x--><!DOCTYPE html><?xml?>"),
            vec![
                ContentToken::CommentOpen,
                ContentToken::Text,
                ContentToken::DeclarationOpen,
                ContentToken::Text,
                ContentToken::ProcessingOpen,
                ContentToken::Text
            ]
        );
    }

    #[test]
    fn test_lone_angle_is_not_a_tag() {
        assert_eq!(
            content("a < b"),
            vec![ContentToken::Text, ContentToken::Lt, ContentToken::Text]
        );
    }

    #[test]
    fn test_tag_interior() {
        assert_eq!(
            tag(r#" class="a b" id='x' disabled/>"#),
            vec![
                Ok(TagToken::Name),
                Ok(TagToken::Eq),
                Ok(TagToken::DoubleQuoted),
                Ok(TagToken::Name),
                Ok(TagToken::Eq),
                Ok(TagToken::SingleQuoted),
                Ok(TagToken::Name),
                Ok(TagToken::SelfClose)
            ]
        );
    }

    #[test]
    fn test_event_binding_name() {
        let mut lexer = TagToken::lexer("@click=\"Save\">");
        assert_eq!(lexer.next(), Some(Ok(TagToken::Name)));
        assert_eq!(lexer.slice(), "@click");
    }

    #[test]
    fn test_unterminated_quote_is_an_error() {
        let tokens = tag("title=\"oops");
        assert_eq!(tokens[0], Ok(TagToken::Name));
        assert_eq!(tokens[1], Ok(TagToken::Eq));
        assert!(tokens[2].is_err());
    }

    #[test]
    fn test_starts_markup() {
        assert!(starts_markup("<div>"));
        assert!(starts_markup("</div>"));
        assert!(starts_markup("<!-- x -->"));
        assert!(starts_markup("<?xml"));
        assert!(!starts_markup("< b"));
        assert!(!starts_markup("</ b"));
        assert!(!starts_markup("<3"));
        assert!(!starts_markup("text"));
    }
}
