//! The token walk that emits the nested constructor calls.

use crate::attrs::translate_attributes;
use crate::element::Constructor;
use crate::error::ConvertError;
use crate::quote::go_quote;
use crate::state::{ConverterState, Import};
use markup_scanner::{Attribute, Scanner, TextRange, TokenKind};
use smol_str::SmolStr;
use std::fmt::Write;

/// Depth of the outermost call, one level inside the `Render` body.
pub const BASE_DEPTH: usize = 1;

/// Tag whose content is passed through verbatim when marked as Go code.
const RAW_CODE_TAG: &str = "script";
const RAW_CODE_TYPE: (&str, &str) = ("type", "application/x-go");

/// Returns the indentation for a nesting depth.
pub fn indent(depth: usize) -> String {
    "\t".repeat(depth)
}

/// Whether text is being translated or captured as raw code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Translating,
    Capturing,
}

/// Walks a token stream and writes the generated call tree to `out`.
pub struct Emitter<'a, W> {
    out: &'a mut W,
    state: &'a mut ConverterState,
    depth: usize,
    mode: Mode,
    /// Open elements, innermost last.
    open: Vec<(SmolStr, TextRange)>,
    /// Whether the outermost call has been started.
    rooted: bool,
}

impl<'a, W: Write> Emitter<'a, W> {
    /// Creates an emitter writing to `out` and recording into `state`.
    pub fn new(out: &'a mut W, state: &'a mut ConverterState) -> Self {
        Self {
            out,
            state,
            depth: BASE_DEPTH,
            mode: Mode::Translating,
            open: Vec::new(),
            rooted: false,
        }
    }

    /// Returns the current nesting depth.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Consumes tokens until end of input.
    pub fn run(&mut self, scanner: &mut Scanner<'_>) -> Result<(), ConvertError> {
        loop {
            match scanner.next_kind()? {
                TokenKind::Eof => break,
                TokenKind::Comment | TokenKind::Doctype => {}
                TokenKind::Text => self.text(scanner.text(), scanner.span())?,
                TokenKind::StartTag => self.start_tag(scanner)?,
                TokenKind::SelfClosingTag => self.self_closing_tag(scanner)?,
                TokenKind::EndTag => self.end_tag(scanner)?,
            }
        }

        if let Some((name, span)) = self.open.pop() {
            return Err(ConvertError::UnclosedTag {
                name: name.to_string(),
                span,
            });
        }
        Ok(())
    }

    fn text(&mut self, text: &str, span: TextRange) -> Result<(), ConvertError> {
        if self.mode == Mode::Capturing {
            self.state.push_raw_code(text);
            return Ok(());
        }

        let text = text.trim();
        if !text.is_empty() {
            if self.depth == BASE_DEPTH {
                return Err(ConvertError::TextOutsideRoot { span });
            }
            write!(
                self.out,
                "\n{}vecty.Text({}),",
                indent(self.depth),
                go_quote(text)
            )?;
        }
        Ok(())
    }

    fn start_tag(&mut self, scanner: &mut Scanner<'_>) -> Result<(), ConvertError> {
        let attributes = scanner.take_attributes();
        let name = scanner.tag_name().clone();
        tracing::debug!(tag = %name, ?attributes, "start tag");

        self.open.push((name.clone(), scanner.span()));
        if is_raw_code(&name, &attributes) {
            self.depth += 1;
            self.mode = Mode::Capturing;
            return Ok(());
        }

        self.enter_root(&name, scanner.span())?;
        let constructor = self.resolve(&name);
        if self.depth > BASE_DEPTH {
            write!(self.out, "\n{}", indent(self.depth))?;
        }
        self.depth += 1;
        let markup = translate_attributes(&attributes, self.depth, self.state)?;
        write!(self.out, "{}{}", constructor.open(), markup)?;

        let inline = scanner.text().to_owned();
        self.text(&inline, scanner.span())
    }

    fn self_closing_tag(&mut self, scanner: &mut Scanner<'_>) -> Result<(), ConvertError> {
        let attributes = scanner.take_attributes();
        let name = scanner.tag_name().clone();
        tracing::debug!(tag = %name, ?attributes, "self-closing tag");

        self.enter_root(&name, scanner.span())?;
        let constructor = self.resolve(&name);
        let markup = translate_attributes(&attributes, self.depth + 1, self.state)?;
        let outermost = self.depth == BASE_DEPTH;
        let tab = indent(self.depth);

        if !outermost {
            write!(self.out, "\n{tab}")?;
        }
        if markup.is_empty() {
            write!(self.out, "{}", constructor.empty_call())?;
        } else {
            write!(self.out, "{}{}\n{tab})", constructor.open(), markup)?;
        }
        if !outermost {
            self.out.write_char(',')?;
        }
        Ok(())
    }

    fn end_tag(&mut self, scanner: &mut Scanner<'_>) -> Result<(), ConvertError> {
        let name = scanner.tag_name();
        match self.open.pop() {
            None => {
                return Err(ConvertError::UnexpectedEndTag {
                    name: name.to_string(),
                    span: scanner.span(),
                })
            }
            Some((open, _)) if open != *name => {
                return Err(ConvertError::MismatchedEndTag {
                    expected: open.to_string(),
                    found: name.to_string(),
                    span: scanner.span(),
                })
            }
            Some(_) => {}
        }

        self.depth -= 1;
        if self.mode == Mode::Capturing {
            self.mode = Mode::Translating;
            return Ok(());
        }

        write!(self.out, "\n{})", indent(self.depth))?;
        if self.depth > BASE_DEPTH {
            self.out.write_char(',')?;
        }
        Ok(())
    }

    /// Claims the root position for an element at the outermost depth.
    fn enter_root(&mut self, name: &str, span: TextRange) -> Result<(), ConvertError> {
        if self.depth > BASE_DEPTH {
            return Ok(());
        }
        if self.rooted {
            return Err(ConvertError::MultipleRoots {
                name: name.to_string(),
                span,
            });
        }
        self.rooted = true;
        Ok(())
    }

    fn resolve<'n>(&mut self, name: &'n str) -> Constructor<'n> {
        let constructor = Constructor::resolve(name);
        if constructor.is_mapped() {
            self.state.require(Import::Elem);
        }
        constructor
    }
}

/// Returns true for `<script type="application/x-go">`.
fn is_raw_code(name: &str, attributes: &[Attribute]) -> bool {
    let (key, value) = RAW_CODE_TYPE;
    name == RAW_CODE_TAG
        && attributes
            .iter()
            .any(|attribute| attribute.key == key && attribute.value == value)
}
