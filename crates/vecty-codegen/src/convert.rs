//! Conversion entry points.

use crate::emitter::Emitter;
use crate::error::ConvertError;
use crate::state::ConverterState;
use markup_scanner::Scanner;
use std::fmt::Write;

/// The result of converting one markup document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// The generated call tree, ready to follow `return `.
    pub fragment: String,
    /// Imports, event bindings and raw code discovered during the walk.
    pub state: ConverterState,
}

/// Converts markup source into a vecty call tree.
pub fn convert(source: &str) -> Result<Conversion, ConvertError> {
    let mut fragment = String::new();
    let mut scanner = Scanner::new(source);
    let state = convert_into(&mut fragment, &mut scanner)?;
    Ok(Conversion { fragment, state })
}

/// Walks `scanner` to the end, writing the call tree to `out`.
///
/// On error, whatever was already written to `out` is incomplete and must be
/// discarded.
pub fn convert_into<W: Write>(
    out: &mut W,
    scanner: &mut Scanner<'_>,
) -> Result<ConverterState, ConvertError> {
    let mut state = ConverterState::new();
    Emitter::new(out, &mut state).run(scanner)?;
    tracing::debug!(
        imports = state.imports().count(),
        events = state.events().len(),
        raw_code = state.raw_code().len(),
        "conversion finished"
    );
    Ok(state)
}
