//! The declarative layout descriptor attached to placeable widgets.

/// A grid placement declaration: which cells a widget spans and how much of
/// a cell to leave empty on each side.
///
/// Span indices are counted in grid cells of the containing frame's
/// effective grid. Paddings are fractions of ONE cell (not of the whole
/// span), nominally `0.0..=1.0` but unchecked: a padding larger than the
/// span simply produces a placement fraction outside `0..1`, which the host
/// toolkit receives as-is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockLayout {
    /// First column covered (inclusive).
    pub col_start: u32,
    /// Last column covered (exclusive).
    pub col_end: u32,
    /// First row covered (inclusive).
    pub row_start: u32,
    /// Last row covered (exclusive).
    pub row_end: u32,
    /// Empty fraction of one cell on the left edge.
    pub pad_left: f32,
    /// Empty fraction of one cell on the right edge.
    pub pad_right: f32,
    /// Empty fraction of one cell on the top edge.
    pub pad_up: f32,
    /// Empty fraction of one cell on the bottom edge.
    pub pad_down: f32,
}

impl Default for BlockLayout {
    /// The top-left single cell with no padding.
    fn default() -> Self {
        Self::span(0, 1, 0, 1)
    }
}

impl BlockLayout {
    /// A span with no padding.
    #[inline]
    pub const fn span(col_start: u32, col_end: u32, row_start: u32, row_end: u32) -> Self {
        Self {
            col_start,
            col_end,
            row_start,
            row_end,
            pad_left: 0.0,
            pad_right: 0.0,
            pad_up: 0.0,
            pad_down: 0.0,
        }
    }

    /// Same span with the given per-edge paddings.
    #[inline]
    pub fn padded(self, left: f32, right: f32, up: f32, down: f32) -> Self {
        Self {
            pad_left: left,
            pad_right: right,
            pad_up: up,
            pad_down: down,
            ..self
        }
    }
}
