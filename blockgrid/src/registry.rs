//! The statically declared table of placeable widget kinds.
//!
//! An explicit value the application constructs and hands to the walker, so
//! the placement algorithm has no dependency on any particular toolkit's
//! class introspection.

use indexmap::IndexSet;

/// Standard toolkit widget kinds, registered by [`PlacementRegistry::standard`].
pub const STANDARD_KINDS: &[&str] = &[
    "Button",
    "Canvas",
    "Checkbutton",
    "Combobox",
    "Entry",
    "Label",
    "Listbox",
    "Menubutton",
    "Notebook",
    "Progressbar",
    "Radiobutton",
    "Scale",
    "Scrollbar",
    "Separator",
    "Spinbox",
    "Text",
    "Treeview",
    "Frame",
    "LabelFrame",
    "PanedWindow",
    "BlockFrame",
    "ResizingCanvas",
];

/// The set of kind tags the walker is allowed to place.
///
/// A child whose kind is not in this set is a fatal configuration error for
/// the pass — the walker reports it immediately rather than guessing a
/// default placement.
#[derive(Debug, Clone, Default)]
pub struct PlacementRegistry {
    kinds: IndexSet<&'static str>,
}

impl PlacementRegistry {
    /// An empty registry. Every kind must be registered explicitly.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry pre-loaded with [`STANDARD_KINDS`].
    pub fn standard() -> Self {
        Self {
            kinds: STANDARD_KINDS.iter().copied().collect(),
        }
    }

    /// Register an application-specific widget kind.
    pub fn register(&mut self, kind: &'static str) -> &mut Self {
        self.kinds.insert(kind);
        self
    }

    pub fn is_placeable(&self, kind: &str) -> bool {
        self.kinds.contains(kind)
    }
}
