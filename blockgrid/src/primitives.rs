//! Core primitive types for blockgrid.
//!
//! These types are used throughout the library for geometry passed to and
//! read back from the host toolkit.

/// A point in 2D space, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

/// A pixel size, as reported by the host toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl From<(f32, f32)> for Size {
    fn from((width, height): (f32, f32)) -> Self {
        Self { width, height }
    }
}

/// A placement rectangle expressed as fractions of the parent container's
/// pixel box.
///
/// This is the value handed to the host toolkit's relative placement
/// primitive. Fractions are nominally in `0..=1` but are NOT clamped or
/// validated: a misconfigured span or padding legally produces values
/// outside that range, and dealing with that is the caller's responsibility.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RectFraction {
    /// Left edge as a fraction of the parent's width.
    pub relx: f32,
    /// Top edge as a fraction of the parent's height.
    pub rely: f32,
    /// Width as a fraction of the parent's width.
    pub relwidth: f32,
    /// Height as a fraction of the parent's height.
    pub relheight: f32,
}

impl RectFraction {
    /// The full parent box.
    pub const FULL: Self = Self {
        relx: 0.0,
        rely: 0.0,
        relwidth: 1.0,
        relheight: 1.0,
    };

    #[inline]
    pub const fn new(relx: f32, rely: f32, relwidth: f32, relheight: f32) -> Self {
        Self {
            relx,
            rely,
            relwidth,
            relheight,
        }
    }
}
