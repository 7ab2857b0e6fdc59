//! Wrapping a generated call tree into a complete vecty component file.

use crate::convert::Conversion;
use crate::quote::go_quote;
use std::path::Path;

/// Options for the generated Go file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentOptions {
    /// The Go package name.
    pub package: String,
    /// The component type name.
    pub component: String,
}

impl Default for ComponentOptions {
    fn default() -> Self {
        Self {
            package: "main".to_string(),
            component: "Component".to_string(),
        }
    }
}

/// Renders a complete Go source file for a converted document.
///
/// The file declares the component type embedding `vecty.Core`, a
/// constructor taking a handler dispatcher, a `Render` method returning the
/// generated tree, and one forwarding method per referenced event handler.
/// Captured raw code is appended verbatim at the end.
pub fn generate_component(conversion: &Conversion, options: &ComponentOptions) -> String {
    let name = &options.component;
    let state = &conversion.state;
    let mut out = String::new();

    out.push_str(&format!("package {}\n\nimport (\n", options.package));
    for import in state.imports() {
        out.push_str(&format!("\t{}\n", go_quote(import.path())));
    }
    out.push_str(")\n");

    out.push_str(&format!(
        "\n// New{name} ...\nfunc New{name}(d map[string]func(*vecty.Event)) *{name} {{\n"
    ));
    out.push_str(&format!("\treturn &{name}{{\n\t\tdispatcher: d,\n\t}}\n}}\n"));

    out.push_str(&format!("\n// {name} ...\ntype {name} struct {{\n"));
    out.push_str("\tvecty.Core\n\tdispatcher map[string]func(*vecty.Event)\n}\n");

    let fragment = if conversion.fragment.is_empty() {
        "nil"
    } else {
        conversion.fragment.as_str()
    };
    out.push_str(&format!(
        "\n// Render ...\nfunc (c *{name}) Render() vecty.ComponentOrHTML {{\n\treturn {fragment}\n}}\n"
    ));

    for handler in state.handlers() {
        let key = go_quote(handler);
        let message = go_quote(&format!("unknown func: {key}"));
        out.push_str(&format!(
            "\n// {handler} ...\nfunc (c *{name}) {handler}(event *vecty.Event) {{\n"
        ));
        out.push_str(&format!("\tf, ok := c.dispatcher[{key}]\n"));
        out.push_str(&format!("\tif !ok {{\n\t\tpanic({message})\n\t}}\n"));
        out.push_str("\tf(event)\n}\n");
    }

    let raw_code = state.raw_code().concat();
    if !raw_code.is_empty() {
        out.push('\n');
        out.push_str(&raw_code);
        if !raw_code.ends_with('\n') {
            out.push('\n');
        }
    }

    out
}

/// Derives a component name from an input path.
///
/// Given `/path/to/todo-list.html`, returns `"TodoList"`. Returns
/// `"Component"` if no usable name can be extracted.
pub fn component_name_from_path(path: impl AsRef<Path>) -> String {
    let name = path
        .as_ref()
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default();

    sanitize_component_name(name)
}

/// Turns a file stem into an exported Go identifier.
/// - Drops leading characters that cannot start an identifier
/// - Capitalizes the start of each `-`, `.` or space separated word
/// - Drops other characters that are invalid in identifiers
fn sanitize_component_name(name: &str) -> String {
    let name = name.trim_start_matches(|c: char| !c.is_alphabetic());

    let mut result = String::with_capacity(name.len());
    let mut capitalize_next = true;

    for c in name.chars() {
        if c.is_alphanumeric() || c == '_' {
            if capitalize_next {
                result.extend(c.to_uppercase());
                capitalize_next = false;
            } else {
                result.push(c);
            }
        } else if matches!(c, '-' | '.' | ' ') {
            capitalize_next = true;
        }
    }

    if result.is_empty() {
        "Component".to_string()
    } else {
        result
    }
}
