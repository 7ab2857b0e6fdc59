//! Token scanner over markup source.
//!
//! The scanner is a pull interface: [`Scanner::next_kind`] advances to the
//! next token and the accessors describe that token.
//!
//! # Accessor contract
//!
//! - [`Scanner::tag_name`] is valid after `StartTag`, `SelfClosingTag` and
//!   `EndTag`.
//! - [`Scanner::take_attributes`] is valid after `StartTag` and
//!   `SelfClosingTag`. It moves the attribute list out of the scanner, so it
//!   yields the attributes exactly once; a second call returns an empty list.
//! - [`Scanner::text`] is valid after `Text`, `Comment` and `Doctype`. For tag
//!   tokens it returns the inline text carried by the tag, which is always
//!   empty for HTML input.
//! - Everything must be read before the next call to `next_kind`, which
//!   discards the previous token's data.

use crate::entities;
use crate::error::{ScanError, ScanErrorKind};
use crate::lexer::{is_html_space, starts_markup, ContentToken, TagToken};
use logos::Logos;
use smol_str::SmolStr;
use std::fmt;
use text_size::{TextRange, TextSize};

/// Elements that never have content or an end tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Elements whose content is raw text, with whether character references are
/// decoded inside them.
const RAW_TEXT_ELEMENTS: &[(&str, bool)] = &[
    ("script", false),
    ("style", false),
    ("textarea", true),
    ("title", true),
];

/// The kind of token the scanner is positioned on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Character data.
    Text,
    /// `<!-- ... -->`, or a bogus comment such as `<?xml ...>`.
    Comment,
    /// `<!DOCTYPE ...>`
    Doctype,
    /// `<name ...>`
    StartTag,
    /// `<name .../>`, or a void element such as `<br>`.
    SelfClosingTag,
    /// `</name>`
    EndTag,
    /// End of input.
    Eof,
}

/// A single attribute on a start or self-closing tag.
#[derive(Clone, PartialEq, Eq)]
pub struct Attribute {
    /// The attribute name. Lowercased unless it starts with `@`.
    pub key: SmolStr,
    /// The decoded value. Empty when the attribute has no value.
    pub value: String,
    /// The location of the whole attribute in the source.
    pub span: TextRange,
}

impl Attribute {
    /// Creates an attribute.
    pub fn new(key: impl Into<SmolStr>, value: impl Into<String>, span: TextRange) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            span,
        }
    }
}

impl fmt::Debug for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={:?}", self.key, self.value)
    }
}

/// A pull scanner producing HTML tokens.
pub struct Scanner<'src> {
    source: &'src str,
    lexer: logos::Lexer<'src, ContentToken>,
    span: TextRange,
    tag_name: SmolStr,
    attributes: Vec<Attribute>,
    text: String,
    /// Raw-text element whose content is read on the next `next_kind` call.
    pending_raw_text: Option<(SmolStr, bool)>,
}

impl<'src> Scanner<'src> {
    /// Creates a scanner over the given source.
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            lexer: ContentToken::lexer(source),
            span: TextRange::empty(TextSize::from(0)),
            tag_name: SmolStr::default(),
            attributes: Vec::new(),
            text: String::new(),
            pending_raw_text: None,
        }
    }

    /// Returns the location of the current token.
    pub fn span(&self) -> TextRange {
        self.span
    }

    /// Returns the lowercased name of the current tag token.
    pub fn tag_name(&self) -> &SmolStr {
        &self.tag_name
    }

    /// Moves the attribute list of the current tag token out of the scanner.
    ///
    /// Attributes are returned in source order with duplicates preserved.
    pub fn take_attributes(&mut self) -> Vec<Attribute> {
        std::mem::take(&mut self.attributes)
    }

    /// Returns the character data of the current token.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Advances to the next token and returns its kind.
    ///
    /// Once `Eof` is returned every further call returns `Eof` again.
    pub fn next_kind(&mut self) -> Result<TokenKind, ScanError> {
        self.tag_name = SmolStr::default();
        self.attributes.clear();
        self.text.clear();

        if let Some((tag_name, escapable)) = self.pending_raw_text.take() {
            if self.scan_raw_text(&tag_name, escapable)? {
                return Ok(self.finish(TokenKind::Text));
            }
        }

        loop {
            let Some(token) = self.lexer.next() else {
                let end = offset(self.source.len());
                self.span = TextRange::empty(end);
                return Ok(self.finish(TokenKind::Eof));
            };
            let start = self.lexer.span().start;

            let kind = match token {
                Ok(ContentToken::Text) | Ok(ContentToken::Lt) | Err(()) => {
                    self.scan_text(start);
                    TokenKind::Text
                }
                Ok(ContentToken::CommentOpen) => {
                    self.scan_comment(start)?;
                    TokenKind::Comment
                }
                Ok(ContentToken::DeclarationOpen) | Ok(ContentToken::ProcessingOpen) => {
                    self.scan_declaration(start)?
                }
                Ok(ContentToken::StartTagOpen) => self.scan_start_tag(start)?,
                Ok(ContentToken::EndTagOpen) => {
                    self.scan_end_tag(start)?;
                    if is_void(&self.tag_name) {
                        // `</br>` and friends have nothing to close.
                        tracing::trace!(tag = %self.tag_name, "dropping void end tag");
                        continue;
                    }
                    TokenKind::EndTag
                }
            };
            return Ok(self.finish(kind));
        }
    }

    fn finish(&self, kind: TokenKind) -> TokenKind {
        tracing::trace!(?kind, span = ?self.span, "scanned token");
        kind
    }

    /// Collects character data, merging `<` characters that do not open
    /// markup into the surrounding text.
    fn scan_text(&mut self, start: usize) {
        let mut end = self.lexer.span().end;
        while !self.lexer.remainder().is_empty() && !starts_markup(self.lexer.remainder()) {
            if self.lexer.next().is_none() {
                break;
            }
            end = self.lexer.span().end;
        }
        self.text = entities::decode(&self.source[start..end]).into_owned();
        self.span = range(start, end);
    }

    fn scan_comment(&mut self, start: usize) -> Result<(), ScanError> {
        let rest = self.lexer.remainder();
        // `<!-->` and `<!--->` are complete empty comments.
        let abrupt = [">", "->"].into_iter().find(|end| rest.starts_with(end));
        if let Some(end) = abrupt {
            self.text.clear();
            self.lexer.bump(end.len());
            self.span = range(start, self.lexer.span().end);
            return Ok(());
        }
        let Some(close) = rest.find("-->") else {
            return Err(ScanError::new(
                ScanErrorKind::UnterminatedComment,
                range(start, self.source.len()),
            ));
        };
        self.text = rest[..close].to_string();
        self.lexer.bump(close + 3);
        self.span = range(start, self.lexer.span().end);
        Ok(())
    }

    fn scan_declaration(&mut self, start: usize) -> Result<TokenKind, ScanError> {
        let rest = self.lexer.remainder();
        let Some(close) = rest.find('>') else {
            return Err(ScanError::new(
                ScanErrorKind::UnterminatedDeclaration,
                range(start, self.source.len()),
            ));
        };
        let body = &rest[..close];
        let is_doctype = self.lexer.slice() == "<!"
            && body.len() >= 7
            && body.is_char_boundary(7)
            && body[..7].eq_ignore_ascii_case("doctype");
        self.text = if is_doctype {
            body[7..].trim().to_string()
        } else {
            body.to_string()
        };
        self.lexer.bump(close + 1);
        self.span = range(start, self.lexer.span().end);
        Ok(if is_doctype {
            TokenKind::Doctype
        } else {
            TokenKind::Comment
        })
    }

    fn scan_start_tag(&mut self, start: usize) -> Result<TokenKind, ScanError> {
        self.tag_name = SmolStr::new(self.lexer.slice()[1..].to_ascii_lowercase());

        let mut tag = self.lexer.clone().morph::<TagToken>();
        let mut attributes = Vec::new();
        let self_closing = loop {
            match tag.next() {
                None => return Err(self.unterminated_tag(start)),
                Some(Ok(TagToken::Close)) => break false,
                Some(Ok(TagToken::SelfClose)) => break true,
                Some(Ok(TagToken::Name)) => {
                    let name = tag.slice();
                    let key = if name.starts_with('@') {
                        SmolStr::new(name)
                    } else {
                        SmolStr::new(name.to_ascii_lowercase())
                    };
                    let span = tag.span();
                    attributes.push(Attribute::new(key, String::new(), range(span.start, span.end)));
                }
                Some(Ok(TagToken::Eq)) => {
                    let value = read_attribute_value(&mut tag, attributes.last())?;
                    if let Some(attribute) = attributes.last_mut() {
                        attribute.value = entities::decode(value).into_owned();
                        attribute.span = range(attribute.span.start().into(), tag.span().end);
                    }
                }
                // Stray slashes and quoted strings without a name carry no
                // attribute.
                Some(Ok(TagToken::Slash))
                | Some(Ok(TagToken::DoubleQuoted))
                | Some(Ok(TagToken::SingleQuoted)) => {}
                Some(Err(())) => {
                    return Err(ScanError::new(
                        ScanErrorKind::UnterminatedAttributeValue {
                            attribute: String::new(),
                        },
                        range(tag.span().start, self.source.len()),
                    ))
                }
            }
        };
        self.span = range(start, tag.span().end);
        self.lexer = tag.morph();
        self.attributes = attributes;

        if self_closing || is_void(&self.tag_name) {
            return Ok(TokenKind::SelfClosingTag);
        }
        if let Some((_, escapable)) = RAW_TEXT_ELEMENTS
            .iter()
            .find(|(name, _)| *name == self.tag_name)
        {
            self.pending_raw_text = Some((self.tag_name.clone(), *escapable));
        }
        Ok(TokenKind::StartTag)
    }

    fn scan_end_tag(&mut self, start: usize) -> Result<(), ScanError> {
        self.tag_name = SmolStr::new(self.lexer.slice()[2..].to_ascii_lowercase());

        // Attributes on end tags are ignored.
        let mut tag = self.lexer.clone().morph::<TagToken>();
        loop {
            match tag.next() {
                None => return Err(self.unterminated_tag(start)),
                Some(Ok(token)) if token.is_tag_end() => break,
                Some(Ok(_)) => {}
                Some(Err(())) => return Err(self.unterminated_tag(start)),
            }
        }
        self.span = range(start, tag.span().end);
        self.lexer = tag.morph();
        Ok(())
    }

    /// Reads the content of a raw-text element up to its end tag.
    ///
    /// Returns `false` when the element is empty, leaving the end tag to be
    /// scanned normally.
    fn scan_raw_text(&mut self, tag_name: &str, escapable: bool) -> Result<bool, ScanError> {
        let rest = self.lexer.remainder();
        let Some(end) = find_close_tag(rest, tag_name) else {
            let start = self.lexer.span().end;
            return Err(ScanError::new(
                ScanErrorKind::UnterminatedRawText {
                    tag_name: tag_name.to_string(),
                },
                range(start, self.source.len()),
            ));
        };
        if end == 0 {
            return Ok(false);
        }

        let start = self.lexer.span().end;
        let raw = &rest[..end];
        self.text = if escapable {
            entities::decode(raw).into_owned()
        } else {
            raw.to_string()
        };
        self.lexer.bump(end);
        self.span = range(start, start + end);
        Ok(true)
    }

    fn unterminated_tag(&self, start: usize) -> ScanError {
        ScanError::new(
            ScanErrorKind::UnterminatedTag {
                tag_name: self.tag_name.to_string(),
            },
            range(start, self.source.len()),
        )
    }
}

/// Reads the value following an `=` inside a tag.
fn read_attribute_value<'src>(
    tag: &mut logos::Lexer<'src, TagToken>,
    attribute: Option<&Attribute>,
) -> Result<&'src str, ScanError> {
    let rest = tag.remainder();
    let leading = rest.len() - rest.trim_start_matches(is_html_space).len();
    let after = &rest[leading..];

    match after.chars().next() {
        Some('"') | Some('\'') => match tag.next() {
            Some(Ok(TagToken::DoubleQuoted)) | Some(Ok(TagToken::SingleQuoted)) => {
                let quoted = tag.slice();
                Ok(&quoted[1..quoted.len() - 1])
            }
            _ => Err(ScanError::new(
                ScanErrorKind::UnterminatedAttributeValue {
                    attribute: attribute.map(|a| a.key.to_string()).unwrap_or_default(),
                },
                range(tag.span().start, tag.source().len()),
            )),
        },
        Some('>') | None => Ok(""),
        Some(_) => {
            let len = after
                .find(|c: char| is_html_space(c) || c == '>')
                .unwrap_or(after.len());
            tag.bump(leading + len);
            Ok(&after[..len])
        }
    }
}

/// Finds the `</name` that ends a raw-text element.
///
/// The name must be followed by whitespace, `/`, `>` or the end of input, so
/// `</scripts` does not close a `script` element.
fn find_close_tag(rest: &str, tag_name: &str) -> Option<usize> {
    let needle = format!("</{tag_name}");
    let lowered = rest.to_ascii_lowercase();
    lowered.match_indices(&needle).map(|(at, _)| at).find(|at| {
        match rest[at + needle.len()..].chars().next() {
            None => true,
            Some(c) => c == '/' || c == '>' || is_html_space(c),
        }
    })
}

fn is_void(tag_name: &str) -> bool {
    VOID_ELEMENTS.contains(&tag_name)
}

fn offset(offset: usize) -> TextSize {
    TextSize::from(offset as u32)
}

fn range(start: usize, end: usize) -> TextRange {
    TextRange::new(offset(start), offset(end))
}
