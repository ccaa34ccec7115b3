//! The recursive placement pass.
//!
//! `place_all` walks root → frames → nested frames → leaves, resolving each
//! declared layout against the containing frame's cell grid and issuing one
//! `place` call per declared widget. A plain frame is measured through the
//! toolkit's synchronous flush right after its own placement, because its
//! children's cell sizes come from its resolved size, not its requested one.
//!
//! The pass is a pure function of the current tree: rerunning it (window
//! resize) recomputes every rectangle from current pixel sizes, with no
//! cached state to invalidate.

use indexmap::IndexMap;

use crate::block::BlockLayout;
use crate::error::LayoutError;
use crate::grid::{self, CellGrid, effective};
use crate::primitives::{Point, Size};
use crate::registry::PlacementRegistry;
use crate::toolkit::Toolkit;
use crate::tree::{BlockFrame, BlockRoot, LayoutChild, WidgetId};

/// The root's numbers, captured once per pass. Override resolution at every
/// depth falls back to these — the root's defaults, not the parent's.
#[derive(Debug, Clone, Copy)]
struct PassDefaults {
    max_col: u32,
    max_row: u32,
    width: f32,
    height: f32,
}

impl From<&BlockRoot> for PassDefaults {
    fn from(root: &BlockRoot) -> Self {
        Self {
            max_col: root.max_col,
            max_row: root.max_row,
            width: root.width,
            height: root.height,
        }
    }
}

/// Drives placement of a [`BlockRoot`] tree through a [`Toolkit`].
///
/// Holds the placement registry for the lifetime of the walker; the tree is
/// borrowed per pass, so one walker can serve many passes and many trees.
pub struct BlockWalker<'a, T: Toolkit> {
    toolkit: &'a mut T,
    registry: PlacementRegistry,
}

impl<'a, T: Toolkit> BlockWalker<'a, T> {
    pub fn new(toolkit: &'a mut T, registry: PlacementRegistry) -> Self {
        Self { toolkit, registry }
    }

    /// Place every declared descendant of `root`, in insertion order.
    ///
    /// Errors are configuration errors and abort the whole pass on first
    /// occurrence: iteration is eager, so siblings after the offending
    /// child are left unplaced.
    pub fn place_all(&mut self, root: &mut BlockRoot) -> Result<(), LayoutError> {
        let defaults = PassDefaults::from(&*root);
        let grid = CellGrid::new(&root.name, root.max_col, root.max_row, root.width, root.height)?;
        tracing::debug!(
            "placement pass over {:?}: {}x{} cells, {}x{} px",
            root.name,
            grid.cols,
            grid.rows,
            grid.width,
            grid.height
        );
        self.place_children(defaults, &grid, &mut root.children)
    }

    /// Resolve the grid a frame's own children are laid out in.
    fn frame_grid(
        defaults: PassDefaults,
        name: &str,
        frame: &BlockFrame,
    ) -> Result<CellGrid, LayoutError> {
        let cols = effective(defaults.max_col, frame.max_col);
        let rows = effective(defaults.max_row, frame.max_row);
        let (width, height) = match frame.size {
            Some(size) => (size.width, size.height),
            None => (defaults.width, defaults.height),
        };
        CellGrid::new(name, cols, rows, width, height)
    }

    fn place_children(
        &mut self,
        defaults: PassDefaults,
        grid: &CellGrid,
        children: &mut IndexMap<String, LayoutChild>,
    ) -> Result<(), LayoutError> {
        for (name, child) in children.iter_mut() {
            match child {
                // Menus hang off the container but take no grid space.
                LayoutChild::Menu(_) => continue,

                // Self-placing blocks were sized at construction: place only
                // if declared, then recurse with their own current size.
                LayoutChild::Block(frame) => {
                    if frame.layout.is_some() {
                        self.place_one(name, frame.id, frame.kind, frame.layout.as_ref(), grid)?;
                    }
                    let inner = Self::frame_grid(defaults, name, frame)?;
                    self.place_children(defaults, &inner, &mut frame.children)?;
                }

                // Plain frames only know their real size after the toolkit
                // has flushed the placement, so measure before recursing.
                LayoutChild::Frame(frame) => {
                    self.place_one(name, frame.id, frame.kind, frame.layout.as_ref(), grid)?;
                    let measured = self.toolkit.finalize_and_measure(frame.id);
                    frame.size = Some(measured);
                    let inner = Self::frame_grid(defaults, name, frame)?;
                    self.place_children(defaults, &inner, &mut frame.children)?;
                }

                LayoutChild::Widget(widget) => {
                    self.place_one(name, widget.id, widget.kind, widget.layout.as_ref(), grid)?;
                }
            }
        }

        // Raise frames above later-declared overlapping widgets: a fixed
        // post-pass, strictly after every placement in this container.
        for child in children.values() {
            if let LayoutChild::Block(frame) | LayoutChild::Frame(frame) = child {
                self.toolkit.raise(frame.id);
            }
        }
        Ok(())
    }

    /// Validate a child's kind and, if it declares a layout, place it.
    ///
    /// The kind check comes first on purpose: an unregistered kind is a
    /// configuration error even when the widget declares no layout.
    fn place_one(
        &mut self,
        name: &str,
        id: WidgetId,
        kind: &'static str,
        layout: Option<&BlockLayout>,
        grid: &CellGrid,
    ) -> Result<(), LayoutError> {
        if !self.registry.is_placeable(kind) {
            return Err(LayoutError::UnplaceableKind {
                widget: name.to_string(),
                kind: kind.to_string(),
            });
        }
        // No declaration: the host toolkit's native mechanism owns this one.
        let Some(layout) = layout else {
            return Ok(());
        };
        let rect = grid::resolve(grid, layout);
        tracing::trace!(
            "place {:?} ({}) at relx={} rely={} relwidth={} relheight={}",
            name,
            kind,
            rect.relx,
            rect.rely,
            rect.relwidth,
            rect.relheight
        );
        self.toolkit.place(id, rect);
        Ok(())
    }

    /// Draw diagnostic separator lines on every drawable canvas in the
    /// tree, at each column/row boundary of the canvas's CONTAINING frame.
    ///
    /// Same recursive shape as [`place_all`], but touches no placement
    /// state; purely a debugging aid.
    pub fn draw_grid_lines(&mut self, root: &BlockRoot) -> Result<(), LayoutError> {
        let defaults = PassDefaults::from(root);
        let grid = CellGrid::new(&root.name, root.max_col, root.max_row, root.width, root.height)?;
        self.draw_children(defaults, &grid, &root.children)
    }

    fn draw_children(
        &mut self,
        defaults: PassDefaults,
        grid: &CellGrid,
        children: &IndexMap<String, LayoutChild>,
    ) -> Result<(), LayoutError> {
        for (name, child) in children {
            match child {
                LayoutChild::Widget(widget) => {
                    if let Some(extent) = widget.canvas_size {
                        self.draw_lines_on(widget.id, grid, extent);
                    }
                }
                LayoutChild::Block(frame) | LayoutChild::Frame(frame) => {
                    let inner = Self::frame_grid(defaults, name, frame)?;
                    self.draw_children(defaults, &inner, &frame.children)?;
                }
                LayoutChild::Menu(_) => {}
            }
        }
        Ok(())
    }

    fn draw_lines_on(&mut self, canvas: WidgetId, grid: &CellGrid, extent: Size) {
        // Boundaries land on whole pixels, matching the toolkit's canvas.
        for index in 0..grid.cols {
            let x = (index as f32 * grid.col_size).floor();
            self.toolkit
                .draw_line(canvas, Point::new(x, 0.0), Point::new(x, extent.height));
        }
        for index in 0..grid.rows {
            let y = (index as f32 * grid.row_size).floor();
            self.toolkit
                .draw_line(canvas, Point::new(0.0, y), Point::new(extent.width, y));
        }
    }
}
