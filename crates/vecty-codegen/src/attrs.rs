//! Attribute list to `vecty.Markup` translation.

use crate::emitter::indent;
use crate::error::ConvertError;
use crate::quote::go_quote;
use crate::state::{ConverterState, Import};
use crate::tables;
use markup_scanner::Attribute;

/// Prefix marking an attribute as an event binding.
pub const EVENT_PREFIX: char = '@';

/// Class lists longer than this are emitted as a `vecty.ClassMap`.
const MAX_INLINE_CLASSES: usize = 4;

/// Translates the attributes of one tag into a `vecty.Markup(...)` block.
///
/// `depth` is the indentation of the `vecty.Markup` line itself; entries sit
/// one level deeper. Returns an empty string when there are no attributes.
///
/// Each attribute is translated by the first matching rule:
/// 1. `@event="Handler"` becomes `event.X(c.Handler)` and is recorded in the
///    state. Unknown events abort the conversion.
/// 2. `class` becomes `vecty.Class(...)`, or a `vecty.ClassMap` for long lists.
/// 3. Known properties become `prop.X(...)`, unquoted for boolean properties.
/// 4. Anything else becomes `vecty.Property("key", "value")`.
///
/// An attribute without a value is treated as having the value `true`.
pub fn translate_attributes(
    attributes: &[Attribute],
    depth: usize,
    state: &mut ConverterState,
) -> Result<String, ConvertError> {
    if attributes.is_empty() {
        return Ok(String::new());
    }

    let outer = indent(depth);
    let entry = indent(depth + 1);
    let mut out = format!("\n{outer}vecty.Markup(");

    for attribute in attributes {
        let key = attribute.key.as_str();
        let value = if attribute.value.is_empty() {
            "true"
        } else {
            attribute.value.as_str()
        };

        if let Some(name) = key.strip_prefix(EVENT_PREFIX) {
            let Some(constructor) = tables::event(name) else {
                return Err(ConvertError::UnknownEvent {
                    name: name.to_string(),
                    span: attribute.span,
                });
            };
            state.bind_event(name, value);
            state.require(Import::Event);
            out.push_str(&format!("\n{entry}{constructor}(c.{value}),"));
            continue;
        }

        if key == "class" {
            push_classes(&mut out, value, depth + 1);
        } else if let Some(constructor) = tables::property(key) {
            let argument = if tables::is_boolean_property(key) {
                value.to_string()
            } else {
                go_quote(value)
            };
            out.push_str(&format!("\n{entry}{constructor}({argument}),"));
            state.require(Import::Prop);
        } else {
            out.push_str(&format!(
                "\n{entry}vecty.Property({}, {}),",
                go_quote(key),
                go_quote(value)
            ));
        }
    }

    out.push_str(&format!("\n{outer}),"));
    Ok(out)
}

fn push_classes(out: &mut String, value: &str, depth: usize) {
    let classes: Vec<String> = value.split_whitespace().map(go_quote).collect();
    let tab = indent(depth);

    if classes.len() <= MAX_INLINE_CLASSES {
        out.push_str(&format!("\n{tab}vecty.Class({}),", classes.join(", ")));
        return;
    }

    let inner = indent(depth + 1);
    out.push_str(&format!("\n{tab}vecty.ClassMap{{"));
    for class in &classes {
        out.push_str(&format!("\n{inner}{class}: true,"));
    }
    out.push_str(&format!("\n{tab}}},"));
}
