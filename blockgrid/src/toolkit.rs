//! The host-toolkit boundary.
//!
//! Everything the placement pass does to real widgets goes through this
//! trait; it is the crate's entire write surface to the GUI toolkit. An
//! application implements it over its toolkit bindings; tests implement it
//! with a recording mock.

use crate::primitives::{Point, RectFraction, Size};
use crate::tree::WidgetId;

/// Host-toolkit operations the walker drives.
pub trait Toolkit {
    /// Place a widget at a rectangle relative to its parent's pixel box.
    fn place(&mut self, widget: WidgetId, rect: RectFraction);

    /// Block until the toolkit has finalized all pending geometry updates,
    /// then read back the widget's resolved pixel size.
    ///
    /// This is the pass's one blocking point, and it must stay synchronous:
    /// a plain frame's children are sized from the value returned here, so
    /// the read has to observe the placement issued just before it.
    fn finalize_and_measure(&mut self, widget: WidgetId) -> Size;

    /// Raise a widget to the top of the render stack.
    fn raise(&mut self, widget: WidgetId);

    /// Draw a diagnostic line on a canvas widget, in the canvas's own pixel
    /// coordinates. Only used by the auxiliary grid-line pass.
    fn draw_line(&mut self, canvas: WidgetId, from: Point, to: Point);
}
