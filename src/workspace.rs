//! Workspace normalization.
//!
//! A [`WorkspaceDesc`] is whatever the caller measured: possibly fractional,
//! possibly missing fields. [`Workspace`] is the coerced form every strategy
//! works from. Normalization never fails.

use crate::geometry::{Size, floor};
use crate::window::PlacedRect;

/// Inset applied on all four sides when none is given.
pub const DEFAULT_PADDING: f64 = 8.0;
/// Spacing between adjacent windows when none is given.
pub const DEFAULT_GAP: f64 = 8.0;

/// Raw workspace description with optional fields.
///
/// ```
/// use zenarrange::WorkspaceDesc;
///
/// let ws = WorkspaceDesc::new(1280.7, 800.0).gap(4.0).normalize();
/// assert_eq!((ws.width, ws.height), (1280, 800));
/// assert_eq!(ws.padding, 8.0);
/// assert_eq!(ws.gap, 4.0);
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct WorkspaceDesc {
    pub width: f64,
    pub height: f64,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub padding: Option<f64>,
    pub gap: Option<f64>,
}

impl WorkspaceDesc {
    /// Describe a workspace of the given size with default spacing.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Set the inset applied on all four sides.
    pub fn padding(mut self, padding: f64) -> Self {
        self.padding = Some(padding);
        self
    }

    /// Set the spacing between adjacent windows.
    pub fn gap(mut self, gap: f64) -> Self {
        self.gap = Some(gap);
        self
    }

    /// Set the origin offset (carried through, not used in size math).
    pub fn origin(mut self, x: f64, y: f64) -> Self {
        self.x = Some(x);
        self.y = Some(y);
        self
    }

    /// Coerce every field into range.
    pub fn normalize(&self) -> Workspace {
        Workspace {
            width: dimension(self.width),
            height: dimension(self.height),
            x: coordinate(self.x),
            y: coordinate(self.y),
            padding: spacing_value(self.padding, DEFAULT_PADDING),
            gap: spacing_value(self.gap, DEFAULT_GAP),
        }
    }
}

/// Fully populated workspace geometry.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Workspace {
    /// Width in whole pixels, at least 1.
    pub width: u32,
    /// Height in whole pixels, at least 1.
    pub height: u32,
    /// Horizontal origin offset.
    pub x: f64,
    /// Vertical origin offset.
    pub y: f64,
    /// Inset applied on all four sides, never negative.
    pub padding: f64,
    /// Spacing between adjacent windows, never negative.
    pub gap: f64,
}

impl Workspace {
    /// Workspace of the given size with default padding and gap.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
            x: 0.0,
            y: 0.0,
            padding: DEFAULT_PADDING,
            gap: DEFAULT_GAP,
        }
    }

    pub fn padding(mut self, padding: f64) -> Self {
        self.padding = spacing_value(Some(padding), DEFAULT_PADDING);
        self
    }

    pub fn gap(mut self, gap: f64) -> Self {
        self.gap = spacing_value(Some(gap), DEFAULT_GAP);
        self
    }

    pub fn origin(mut self, x: f64, y: f64) -> Self {
        self.x = coordinate(Some(x));
        self.y = coordinate(Some(y));
        self
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Area in square pixels.
    pub fn area(&self) -> u64 {
        self.size().area()
    }

    /// Usable width and height once `padding` is removed from every side.
    /// Never less than 1.
    pub fn usable(&self, padding: f64) -> (f64, f64) {
        (
            (self.width as f64 - 2.0 * padding).max(1.0),
            (self.height as f64 - 2.0 * padding).max(1.0),
        )
    }

    /// Spacing from the workspace's own padding and gap.
    pub fn spacing(&self) -> Spacing {
        Spacing {
            gap: self.gap,
            padding: self.padding,
        }
    }

    /// Top-left corner of a placement in absolute coordinates.
    pub fn to_absolute(&self, rect: &PlacedRect) -> (f64, f64) {
        (self.x + rect.x as f64, self.y + rect.y as f64)
    }
}

impl From<WorkspaceDesc> for Workspace {
    fn from(desc: WorkspaceDesc) -> Self {
        desc.normalize()
    }
}

/// Padding and gap resolved for a single layout call.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Spacing {
    pub gap: f64,
    pub padding: f64,
}

impl Spacing {
    /// Per-call overrides win over the workspace's values.
    pub fn resolve(workspace: &Workspace, gap: Option<f64>, padding: Option<f64>) -> Self {
        Self {
            gap: spacing_value(gap, workspace.gap),
            padding: spacing_value(padding, workspace.padding),
        }
    }
}

/// Non-finite falls back; negative becomes 0.
pub(crate) fn spacing_value(value: Option<f64>, fallback: f64) -> f64 {
    match value {
        Some(v) if v.is_finite() => v.max(0.0),
        _ => fallback,
    }
}

fn coordinate(value: Option<f64>) -> f64 {
    match value {
        Some(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

fn dimension(value: f64) -> u32 {
    if !value.is_finite() || value < 1.0 {
        1
    } else if value >= u32::MAX as f64 {
        u32::MAX
    } else {
        floor(value) as u32
    }
}
