//! Session state accumulated while walking one document.

use indexmap::{IndexMap, IndexSet};
use smol_str::SmolStr;
use std::collections::BTreeSet;

/// A Go package the generated code depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Import {
    /// `github.com/gopherjs/vecty`, always required.
    Vecty,
    /// `github.com/gopherjs/vecty/elem`
    Elem,
    /// `github.com/gopherjs/vecty/event`
    Event,
    /// `github.com/gopherjs/vecty/prop`
    Prop,
}

impl Import {
    /// Returns the Go import path.
    pub fn path(&self) -> &'static str {
        match self {
            Import::Vecty => "github.com/gopherjs/vecty",
            Import::Elem => "github.com/gopherjs/vecty/elem",
            Import::Event => "github.com/gopherjs/vecty/event",
            Import::Prop => "github.com/gopherjs/vecty/prop",
        }
    }
}

/// Imports, event bindings and raw code discovered during one conversion.
///
/// Created empty (apart from the base `vecty` import) for each run and handed
/// to the component wrapper once the walk is complete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConverterState {
    imports: BTreeSet<Import>,
    events: IndexMap<SmolStr, SmolStr>,
    handlers: IndexSet<SmolStr>,
    raw_code: Vec<String>,
}

impl Default for ConverterState {
    fn default() -> Self {
        Self::new()
    }
}

impl ConverterState {
    /// Creates the state for a new run.
    pub fn new() -> Self {
        Self {
            imports: BTreeSet::from([Import::Vecty]),
            events: IndexMap::new(),
            handlers: IndexSet::new(),
            raw_code: Vec::new(),
        }
    }

    /// Marks a package as required.
    pub fn require(&mut self, import: Import) {
        self.imports.insert(import);
    }

    /// Records that `event` is bound to the component method `handler`.
    ///
    /// A later binding of the same event replaces the handler in the event
    /// map; every handler ever referenced stays in [`handlers`](Self::handlers).
    pub fn bind_event(&mut self, event: impl Into<SmolStr>, handler: impl Into<SmolStr>) {
        let handler = handler.into();
        self.handlers.insert(handler.clone());
        self.events.insert(event.into(), handler);
    }

    /// Appends a fragment of verbatim code.
    pub fn push_raw_code(&mut self, code: impl Into<String>) {
        self.raw_code.push(code.into());
    }

    /// Returns the required imports in import-path order.
    pub fn imports(&self) -> impl Iterator<Item = Import> + '_ {
        self.imports.iter().copied()
    }

    /// Returns true if the package is required.
    pub fn requires(&self, import: Import) -> bool {
        self.imports.contains(&import)
    }

    /// Returns the event name to handler name mapping, in binding order.
    pub fn events(&self) -> &IndexMap<SmolStr, SmolStr> {
        &self.events
    }

    /// Returns every distinct handler referenced by the generated code, in
    /// first-use order.
    pub fn handlers(&self) -> &IndexSet<SmolStr> {
        &self.handlers
    }

    /// Returns the captured verbatim code fragments, in document order.
    pub fn raw_code(&self) -> &[String] {
        &self.raw_code
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_requires_vecty_only() {
        let state = ConverterState::new();
        assert_eq!(state.imports().collect::<Vec<_>>(), vec![Import::Vecty]);
        assert!(state.events().is_empty());
        assert!(state.raw_code().is_empty());
    }

    #[test]
    fn test_imports_are_deduplicated_and_sorted() {
        let mut state = ConverterState::new();
        state.require(Import::Prop);
        state.require(Import::Elem);
        state.require(Import::Prop);
        let paths: Vec<_> = state.imports().map(|i| i.path()).collect();
        assert_eq!(
            paths,
            vec![
                "github.com/gopherjs/vecty",
                "github.com/gopherjs/vecty/elem",
                "github.com/gopherjs/vecty/prop"
            ]
        );
    }

    #[test]
    fn test_rebinding_an_event_keeps_both_handlers() {
        let mut state = ConverterState::new();
        state.bind_event("click", "Save");
        state.bind_event("input", "Changed");
        state.bind_event("click", "Submit");
        assert_eq!(state.events().get("click").map(|h| h.as_str()), Some("Submit"));
        assert_eq!(
            state.events().keys().map(|k| k.as_str()).collect::<Vec<_>>(),
            vec!["click", "input"]
        );
        assert_eq!(
            state.handlers().iter().map(|h| h.as_str()).collect::<Vec<_>>(),
            vec!["Save", "Changed", "Submit"]
        );
    }
}
