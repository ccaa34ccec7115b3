//! Grid resolution: effective counts, cell sizes, and span → fraction math.
//!
//! Everything here is pure. A [`CellGrid`] is rebuilt from current pixel
//! sizes on every pass — cell sizes are never cached, because a parent's
//! pixel size can change between passes (window resize) and the fractions
//! must always reflect the current tree.

use crate::block::BlockLayout;
use crate::error::{Axis, LayoutError};
use crate::primitives::RectFraction;

/// Resolve a container attribute against the root default.
///
/// Presence decides, not value: `Some(v)` wins for every `v`, including
/// `v == 0` and `v == root_default`. Only an absent override falls back.
#[inline]
pub fn effective<T: Copy>(root_default: T, own: Option<T>) -> T {
    own.unwrap_or(root_default)
}

/// The resolved grid for one container: effective counts, current pixel
/// size, and the per-axis cell sizes derived from them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellGrid {
    pub cols: u32,
    pub rows: u32,
    pub width: f32,
    pub height: f32,
    pub col_size: f32,
    pub row_size: f32,
}

impl CellGrid {
    /// Derive cell sizes for a container.
    ///
    /// A zero effective count is a caller configuration error and is
    /// reported with the offending container named, never silently turned
    /// into `inf`/`NaN` cell sizes.
    pub fn new(
        container: &str,
        cols: u32,
        rows: u32,
        width: f32,
        height: f32,
    ) -> Result<Self, LayoutError> {
        if cols == 0 {
            return Err(LayoutError::ZeroCells {
                container: container.to_string(),
                axis: Axis::Column,
            });
        }
        if rows == 0 {
            return Err(LayoutError::ZeroCells {
                container: container.to_string(),
                axis: Axis::Row,
            });
        }
        Ok(Self {
            cols,
            rows,
            width,
            height,
            col_size: width / cols as f32,
            row_size: height / rows as f32,
        })
    }
}

/// Convert a span + padding declaration into placement fractions of the
/// containing frame.
///
/// Per axis: the span's absolute edges are `cell_size * start` and
/// `cell_size * end`; padding shrinks the inner edges by `pad * cell_size`
/// (a fraction of ONE cell, not of the span); every absolute quantity is
/// then divided by the frame's total pixel dimension.
///
/// The result is NOT range-checked: spans past the grid edge or paddings
/// larger than the span yield fractions outside `0..1`, passed through
/// unchanged. Keeping declarations sensible is the caller's responsibility.
pub fn resolve(grid: &CellGrid, layout: &BlockLayout) -> RectFraction {
    let x_start = grid.col_size * layout.col_start as f32 + grid.col_size * layout.pad_left;
    let x_end = grid.col_size * layout.col_end as f32 - grid.col_size * layout.pad_right;
    let y_start = grid.row_size * layout.row_start as f32 + grid.row_size * layout.pad_up;
    let y_end = grid.row_size * layout.row_end as f32 - grid.row_size * layout.pad_down;
    RectFraction {
        relx: x_start / grid.width,
        rely: y_start / grid.height,
        relwidth: (x_end - x_start) / grid.width,
        relheight: (y_end - y_start) / grid.height,
    }
}
