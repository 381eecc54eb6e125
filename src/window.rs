//! Window requests, their normalized form, and placement results.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::geometry::{Rect, Size, clamp_f64, floor};
use crate::workspace::Workspace;

/// Width used when a request has none (or zero, or non-finite).
pub const DEFAULT_WIDTH: f64 = 200.0;
/// Height used when a request has none (or zero, or non-finite).
pub const DEFAULT_HEIGHT: f64 = 150.0;

/// Opaque window identifier.
///
/// Requests without an id get `Index(position)`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum WindowId {
    Index(u64),
    Key(String),
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(i) => write!(f, "#{i}"),
            Self::Key(k) => f.write_str(k),
        }
    }
}

impl From<u64> for WindowId {
    fn from(v: u64) -> Self {
        Self::Index(v)
    }
}

impl From<usize> for WindowId {
    fn from(v: usize) -> Self {
        Self::Index(v as u64)
    }
}

impl From<&str> for WindowId {
    fn from(v: &str) -> Self {
        Self::Key(String::from(v))
    }
}

impl From<String> for WindowId {
    fn from(v: String) -> Self {
        Self::Key(v)
    }
}

/// A caller's layout request for one window. Every field is optional.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct WindowRequest {
    pub id: Option<WindowId>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub min_width: Option<f64>,
    pub min_height: Option<f64>,
}

impl WindowRequest {
    /// Request a window of the given preferred size.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
            ..Self::default()
        }
    }

    pub fn id(mut self, id: impl Into<WindowId>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Lower bounds the strategies should not shrink below when possible.
    pub fn min_size(mut self, width: f64, height: f64) -> Self {
        self.min_width = Some(width);
        self.min_height = Some(height);
        self
    }
}

/// A request after normalization against a workspace.
#[derive(Clone, Debug, PartialEq)]
pub struct WindowSpec {
    pub id: WindowId,
    /// Preferred width, within `[1, workspace.width]`.
    pub width: u32,
    /// Preferred height, within `[1, workspace.height]`.
    pub height: u32,
    /// Within `[1, workspace.width]`.
    pub min_width: u32,
    /// Within `[1, workspace.height]`.
    pub min_height: u32,
    /// Preferred size before clamping to the workspace, at least 1×1.
    pub requested: Size,
    /// Minimum size before clamping to the workspace, at least 1×1.
    pub requested_min: Size,
    /// Requested area before clamping. Only used to rank windows.
    pub area: f64,
    /// Position in the caller's list.
    pub original_index: usize,
}

impl WindowSpec {
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn min_size(&self) -> Size {
        Size::new(self.min_width, self.min_height)
    }

    pub(crate) fn place(&self, rect: Rect) -> PlacedRect {
        PlacedRect {
            id: self.id.clone(),
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
        }
    }
}

/// Normalize every request against the workspace, keeping input order.
///
/// Area and the `requested` sizes keep the pre-clamp values, so ranking and
/// scaling reflect what the caller asked for rather than what the workspace
/// allowed.
pub fn normalize_windows(workspace: &Workspace, windows: &[WindowRequest]) -> Vec<WindowSpec> {
    let max_w = workspace.width as f64;
    let max_h = workspace.height as f64;
    windows
        .iter()
        .enumerate()
        .map(|(i, req)| {
            let raw_w = requested(req.width, DEFAULT_WIDTH);
            let raw_h = requested(req.height, DEFAULT_HEIGHT);
            let (min_w, min_h) = (minimum(req.min_width), minimum(req.min_height));
            WindowSpec {
                id: req.id.clone().unwrap_or(WindowId::Index(i as u64)),
                width: bounded(raw_w, max_w),
                height: bounded(raw_h, max_h),
                min_width: bounded(min_w, max_w),
                min_height: bounded(min_h, max_h),
                requested: Size::new(bounded(raw_w, UNBOUNDED), bounded(raw_h, UNBOUNDED)),
                requested_min: Size::new(bounded(min_w, UNBOUNDED), bounded(min_h, UNBOUNDED)),
                area: raw_w.max(1.0) * raw_h.max(1.0),
                original_index: i,
            }
        })
        .collect()
}

fn requested(value: Option<f64>, fallback: f64) -> f64 {
    match value {
        Some(v) if v.is_finite() && v != 0.0 => v,
        _ => fallback,
    }
}

fn minimum(value: Option<f64>) -> f64 {
    match value {
        Some(v) if v.is_finite() => v,
        _ => 1.0,
    }
}

const UNBOUNDED: f64 = u32::MAX as f64;

fn bounded(value: f64, max: f64) -> u32 {
    floor(clamp_f64(value, 1.0, max.max(1.0))) as u32
}

/// One output placement, in workspace-relative pixels.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlacedRect {
    pub id: WindowId,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl PlacedRect {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Whether the two placements share any interior pixel.
    pub fn overlaps(&self, other: &PlacedRect) -> bool {
        self.rect().intersects(&other.rect())
    }
}
