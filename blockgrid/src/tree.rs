//! The widget-tree model the placement pass walks.
//!
//! This mirrors the host toolkit's tree: the application builds it once,
//! alongside the real widgets, and the walker only reads declarations from
//! it and writes placement commands through the [`Toolkit`] trait. The one
//! mutation the walker performs is storing a plain frame's measured pixel
//! size back onto the frame, because nested cell sizing depends on it.
//!
//! Children are kept in an [`IndexMap`] keyed by name: ordered by insertion,
//! names unique within a container, and that insertion order is exactly the
//! order the placement pass visits them in.
//!
//! [`Toolkit`]: crate::Toolkit

use indexmap::IndexMap;

use crate::block::BlockLayout;
use crate::primitives::Size;

/// Opaque handle to a host-toolkit widget. The application allocates these
/// when it creates the real widgets; the walker only passes them through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WidgetId(pub u64);

/// A leaf widget: placeable, never recursed into.
#[derive(Debug, Clone)]
pub struct LeafWidget {
    pub id: WidgetId,
    /// Kind tag checked against the placement registry (e.g. `"Button"`).
    pub kind: &'static str,
    /// Placement declaration. Absent means the host toolkit's native
    /// mechanism positions this widget and the pass skips it.
    pub layout: Option<BlockLayout>,
    /// Current pixel size of a drawable canvas surface, kept up to date by
    /// the host on resize. Only canvases carry one; it is what the
    /// auxiliary-line pass spans its separator lines over.
    pub canvas_size: Option<Size>,
}

impl LeafWidget {
    pub fn new(id: WidgetId, kind: &'static str) -> Self {
        Self {
            id,
            kind,
            layout: None,
            canvas_size: None,
        }
    }

    /// A drawable canvas leaf with its current pixel size.
    pub fn canvas(id: WidgetId, kind: &'static str, size: Size) -> Self {
        Self {
            id,
            kind,
            layout: None,
            canvas_size: Some(size),
        }
    }

    pub fn with_layout(mut self, layout: BlockLayout) -> Self {
        self.layout = Some(layout);
        self
    }
}

/// A nested container: placeable like a leaf, then recursed into.
///
/// Overrides are `Option` fields, not reflection: `Some(v)` overrides the
/// root default for every `v` (including zero, which then fails grid
/// construction), `None` inherits.
#[derive(Debug, Clone)]
pub struct BlockFrame {
    pub id: WidgetId,
    /// Kind tag checked against the placement registry.
    pub kind: &'static str,
    pub layout: Option<BlockLayout>,
    /// Own column count, or inherit the root's.
    pub max_col: Option<u32>,
    /// Own row count, or inherit the root's.
    pub max_row: Option<u32>,
    /// Current pixel size. Self-placing blocks carry one from construction;
    /// plain frames get one written back after the measure barrier. While
    /// absent, cell sizing falls back to the root's pixel size.
    pub size: Option<Size>,
    pub children: IndexMap<String, LayoutChild>,
}

impl BlockFrame {
    pub fn new(id: WidgetId, kind: &'static str) -> Self {
        Self {
            id,
            kind,
            layout: None,
            max_col: None,
            max_row: None,
            size: None,
            children: IndexMap::new(),
        }
    }

    pub fn with_layout(mut self, layout: BlockLayout) -> Self {
        self.layout = Some(layout);
        self
    }

    /// Override the inherited grid counts for this frame's children.
    pub fn with_grid(mut self, max_col: u32, max_row: u32) -> Self {
        self.max_col = Some(max_col);
        self.max_row = Some(max_row);
        self
    }

    pub fn with_size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }

    /// Add a child under `name`. Names are unique within a container; a
    /// duplicate replaces the earlier child in place.
    pub fn insert(&mut self, name: impl Into<String>, child: LayoutChild) -> &mut Self {
        self.children.insert(name.into(), child);
        self
    }
}

/// A child of a container, with its structural role fixed at construction.
///
/// This enum is the dispatch point of the placement pass: the walker matches
/// on it exhaustively instead of comparing runtime class-name strings, so a
/// new role is a compile error at every dispatch site until handled.
///
/// Recursive variants are boxed to break the size recursion and keep the
/// enum small when iterating children.
#[derive(Debug, Clone)]
pub enum LayoutChild {
    /// A menu bar or similar: attached to the container but not part of the
    /// spatial layout. Skipped entirely.
    Menu(WidgetId),

    /// A self-placing container: already sized at construction, placed here
    /// only if it carries a layout, then recursed into using its own
    /// current size.
    Block(Box<BlockFrame>),

    /// A plain frame: placed here, then synchronously measured, then
    /// recursed into using the measured size.
    Frame(Box<BlockFrame>),

    /// A leaf widget: placed here, never recursed into.
    Widget(LeafWidget),
}

/// The root of the widget tree.
///
/// Its `max_col`/`max_row`/`width`/`height` are the pass defaults every
/// descendant's override resolution falls back to — the ROOT's numbers, not
/// the immediate parent's.
#[derive(Debug, Clone)]
pub struct BlockRoot {
    pub name: String,
    pub max_col: u32,
    pub max_row: u32,
    pub width: f32,
    pub height: f32,
    pub children: IndexMap<String, LayoutChild>,
}

impl BlockRoot {
    pub fn new(max_col: u32, max_row: u32, width: f32, height: f32) -> Self {
        Self {
            name: "main".to_string(),
            max_col,
            max_row,
            width,
            height,
            children: IndexMap::new(),
        }
    }

    /// Add a child under `name`. Names are unique within a container; a
    /// duplicate replaces the earlier child in place.
    pub fn insert(&mut self, name: impl Into<String>, child: LayoutChild) -> &mut Self {
        self.children.insert(name.into(), child);
        self
    }
}
