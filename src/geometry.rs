//! Integer geometry shared by every strategy.
//!
//! Strategies compute in `f64` and snap to whole pixels through
//! [`Rect::fit_into`], so every placement passes through the same bounds clamp.

use num_traits::Float;

/// Width × height dimensions in pixels.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Size {
    /// Create a new size.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Area in square pixels.
    pub fn area(self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Swap width and height.
    pub const fn transposed(self) -> Self {
        Self {
            width: self.height,
            height: self.width,
        }
    }
}

/// Axis-aligned rectangle in workspace pixel coordinates.
///
/// The right and bottom edges are exclusive: two rects that share an edge
/// do not intersect.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    /// Create a new rect.
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Exclusive right edge.
    pub fn right(&self) -> u64 {
        self.x as u64 + self.width as u64
    }

    /// Exclusive bottom edge.
    pub fn bottom(&self) -> u64 {
        self.y as u64 + self.height as u64
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn area(&self) -> u64 {
        self.size().area()
    }

    /// Whether the two rects share any interior pixel.
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.width == 0 || self.height == 0 || other.width == 0 || other.height == 0 {
            return false;
        }
        (self.x as u64) < other.right()
            && (other.x as u64) < self.right()
            && (self.y as u64) < other.bottom()
            && (other.y as u64) < self.bottom()
    }

    /// Whether this rect lies entirely within `(0, 0, max_w, max_h)`.
    pub fn fits_within(&self, max_w: u32, max_h: u32) -> bool {
        self.right() <= max_w as u64 && self.bottom() <= max_h as u64
    }

    /// Clamp this rect to fit within `(0, 0, max_w, max_h)`.
    /// Width and height are clamped to at least 1; the size is kept when
    /// possible and the origin moves instead.
    pub fn clamp_to(self, max_w: u32, max_h: u32) -> Self {
        let width = self.width.min(max_w).max(1);
        let height = self.height.min(max_h).max(1);
        Self {
            x: self.x.min(max_w.saturating_sub(width)),
            y: self.y.min(max_h.saturating_sub(height)),
            width,
            height,
        }
    }

    /// Snap a fractional placement to whole pixels inside `bounds`.
    ///
    /// Sizes are floored, then clamped into `[min, bounds]`; the origin is
    /// floored and clamped so the rect stays fully inside. When a minimum
    /// exceeds the bounds, the bounds win.
    pub(crate) fn fit_into(
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        min: Size,
        bounds: Size,
    ) -> Self {
        let bw = bounds.width.max(1) as i64;
        let bh = bounds.height.max(1) as i64;
        let w = clamp_i64(to_px(width), (min.width.max(1) as i64).min(bw), bw);
        let h = clamp_i64(to_px(height), (min.height.max(1) as i64).min(bh), bh);
        let x = clamp_i64(to_px(x), 0, bw - w);
        let y = clamp_i64(to_px(y), 0, bh - h);
        Self::new(x as u32, y as u32, w as u32, h as u32)
    }
}

/// Fractional rectangle used while a strategy is still computing.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct Frame {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

// ============================================================================
// Numeric helpers
// ============================================================================

pub(crate) fn floor(v: f64) -> f64 {
    Float::floor(v)
}

pub(crate) fn ceil(v: f64) -> f64 {
    Float::ceil(v)
}

pub(crate) fn sqrt(v: f64) -> f64 {
    Float::sqrt(v)
}

/// Round half away from negative infinity (`Math.round` semantics).
pub(crate) fn round_half_up(v: f64) -> f64 {
    Float::floor(v + 0.5)
}

/// Clamp where the lower bound wins if `lo > hi`.
pub(crate) fn clamp_f64(v: f64, lo: f64, hi: f64) -> f64 {
    v.min(hi).max(lo)
}

/// Clamp where the lower bound wins if `lo > hi`.
pub(crate) fn clamp_i64(v: i64, lo: i64, hi: i64) -> i64 {
    v.min(hi).max(lo)
}

/// Floor to a whole pixel. NaN maps to 0, infinities saturate.
pub(crate) fn to_px(v: f64) -> i64 {
    floor(v) as i64
}

/// `min(a/b, b/a)`: 1 for a square, approaching 0 for a sliver.
pub(crate) fn squareness(a: f64, b: f64) -> f64 {
    if a <= 0.0 || b <= 0.0 {
        return 0.0;
    }
    (a / b).min(b / a)
}
