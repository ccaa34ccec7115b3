//! blockgrid: declarative grid placement for desktop GUI toolkits.
//!
//! Instead of issuing pixel coordinates, the application describes each
//! widget's placement as a grid cell span plus fractional padding, and a
//! recursive pass resolves those declarations into proportional rectangles
//! for the host toolkit's relative placement primitive.
//!
//! # Architecture
//!
//! ```text
//! app builds BlockRoot tree -> place_all() resolves RectFractions -> Toolkit::place
//! ```
//!
//! The tree mirrors the host toolkit's widget tree; the host itself is only
//! reached through the [`Toolkit`] trait (place, synchronous
//! finalize-and-measure, raise, diagnostic lines). Nested frames are
//! measured right after their own placement, because their children's cell
//! sizes come from the resolved size, not the requested one.
//!
//! # Usage
//!
//! ```ignore
//! use blockgrid::{BlockLayout, BlockRoot, BlockWalker, LayoutChild, LeafWidget,
//!                 PlacementRegistry, WidgetId};
//!
//! let mut root = BlockRoot::new(4, 3, 800.0, 600.0);
//! root.insert(
//!     "ok_button",
//!     LayoutChild::Widget(
//!         LeafWidget::new(WidgetId(1), "Button").with_layout(BlockLayout::span(1, 3, 0, 1)),
//!     ),
//! );
//!
//! let mut walker = BlockWalker::new(&mut toolkit, PlacementRegistry::standard());
//! walker.place_all(&mut root)?;
//! ```

// Core primitives
pub mod primitives;

// Declarative layout descriptor
pub mod block;

// Grid resolution (effective counts, cell sizes, span -> fraction math)
pub mod grid;

// Widget tree model
pub mod tree;

// Placeable-kind registry
pub mod registry;

// Host-toolkit boundary
pub mod toolkit;

// The recursive placement pass
pub mod walker;

// Errors
pub mod error;

// Re-export core types
pub use block::BlockLayout;
pub use error::{Axis, LayoutError};
pub use grid::{CellGrid, effective, resolve};
pub use primitives::{Point, RectFraction, Size};
pub use registry::{PlacementRegistry, STANDARD_KINDS};
pub use toolkit::Toolkit;
pub use tree::{BlockFrame, BlockRoot, LayoutChild, LeafWidget, WidgetId};
pub use walker::BlockWalker;
