//! Tag name to constructor resolution.

use crate::quote::go_quote;
use crate::tables;

/// The constructor used to build one element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constructor<'a> {
    /// A dedicated `elem` constructor such as `elem.Div`.
    Mapped(&'static str),
    /// `vecty.Tag` with the literal tag name as its first argument.
    Generic(&'a str),
}

impl<'a> Constructor<'a> {
    /// Resolves a lowercase tag name.
    pub fn resolve(tag: &'a str) -> Self {
        match tables::element(tag) {
            Some(constructor) => Constructor::Mapped(constructor),
            None => Constructor::Generic(tag),
        }
    }

    /// Returns true if the constructor comes from the `elem` package.
    pub fn is_mapped(&self) -> bool {
        matches!(self, Constructor::Mapped(_))
    }

    /// Renders the opening of a call that is followed by further arguments:
    /// `elem.Div(` or `vecty.Tag("x",`.
    pub fn open(&self) -> String {
        match self {
            Constructor::Mapped(constructor) => format!("{constructor}("),
            Constructor::Generic(tag) => format!("vecty.Tag({},", go_quote(tag)),
        }
    }

    /// Renders a complete call without arguments: `elem.Break()` or
    /// `vecty.Tag("x")`.
    pub fn empty_call(&self) -> String {
        match self {
            Constructor::Mapped(constructor) => format!("{constructor}()"),
            Constructor::Generic(tag) => format!("vecty.Tag({})", go_quote(tag)),
        }
    }
}
