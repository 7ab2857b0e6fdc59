//! HTML to vecty code generation.
//!
//! This crate converts HTML markup into Go source that builds the same tree
//! with the [vecty](https://github.com/gopherjs/vecty) API. It handles:
//! - Mapping tags, properties and events to `elem`, `prop` and `event`
//!   constructors
//! - Emitting the nested calls with tab indentation and trailing commas
//! - Collecting the imports and event handlers the generated code needs
//! - Passing `<script type="application/x-go">` contents through verbatim
//! - Wrapping the result into a complete component file
//!
//! # Example
//!
//! ```
//! use vecty_codegen::{convert, generate_component, ComponentOptions};
//!
//! let conversion = convert(r#"<button @click="Save">Go</button>"#).unwrap();
//! assert!(conversion.fragment.starts_with("elem.Button("));
//! assert_eq!(conversion.state.events()["click"], "Save");
//!
//! let file = generate_component(&conversion, &ComponentOptions::default());
//! assert!(file.contains("func (c *Component) Save(event *vecty.Event) {"));
//! ```

mod attrs;
mod component;
mod convert;
mod element;
mod emitter;
mod error;
mod quote;
mod state;
pub mod tables;

pub use attrs::{translate_attributes, EVENT_PREFIX};
pub use component::{component_name_from_path, generate_component, ComponentOptions};
pub use convert::{convert, convert_into, Conversion};
pub use element::Constructor;
pub use emitter::{indent, Emitter, BASE_DEPTH};
pub use error::ConvertError;
pub use quote::go_quote;
pub use state::{ConverterState, Import};
