//! Largest uniform scale at which every window still shelf-packs.

use alloc::vec::Vec;

use crate::geometry::{Rect, Size, floor};
use crate::shelf::{self, ShelfAxis, ShelfPacking, ShelfRegion};
use crate::window::{PlacedRect, WindowSpec};
use crate::workspace::{Spacing, Workspace};

/// Bisection rounds below native size.
pub const SEARCH_ROUNDS: usize = 24;
/// Scale used when no candidate fits at all.
pub const FALLBACK_SCALE: f64 = 0.01;

/// Options for [`min_resize`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct MinResizeOptions {
    /// Axis taken when both packings use the same span.
    pub prefer: ShelfAxis,
}

/// Result of [`min_resize`].
#[derive(Clone, Debug, PartialEq)]
pub struct MinResizeLayout {
    /// Converged scale factor, in `(0, 1]`.
    pub scale: f64,
    /// Axis of the winning packing.
    pub axis: ShelfAxis,
    /// One placement per window, in input order.
    pub rects: Vec<PlacedRect>,
}

/// Find the largest scale `s ≤ 1` at which all windows, each scaled by `s`
/// and raised to its minimum size, pack into rows or columns.
///
/// Scales apply to the sizes the caller requested, not the sizes clamped to
/// the workspace, and the search always covers `[0, 1]`. A larger workspace
/// therefore never converges to a smaller scale.
pub fn min_resize(
    workspace: &Workspace,
    windows: &[WindowSpec],
    spacing: Spacing,
    options: &MinResizeOptions,
) -> MinResizeLayout {
    if windows.is_empty() {
        return MinResizeLayout {
            scale: 1.0,
            axis: options.prefer,
            rects: Vec::new(),
        };
    }

    let (width, height) = workspace.usable(spacing.padding);
    let region = ShelfRegion {
        x: spacing.padding,
        y: spacing.padding,
        width,
        height,
        gap: spacing.gap,
    };
    let attempt = |s: f64| {
        let sizes = scaled_sizes(windows, s);
        better(
            shelf::pack_rows(&sizes, &region),
            shelf::pack_columns(&sizes, &region),
            options.prefer,
        )
    };

    let mut found = attempt(1.0).map(|p| (1.0, p));
    if found.is_none() {
        let (mut lo, mut hi) = (0.0, 1.0);
        for round in 0..SEARCH_ROUNDS {
            let mid = (lo + hi) / 2.0;
            let packing = attempt(mid);
            tracing::trace!(round, scale = mid, fits = packing.is_some(), "min-resize round");
            match packing {
                Some(p) => {
                    found = Some((mid, p));
                    lo = mid;
                }
                None => hi = mid,
            }
        }
    }

    let (scale, packing) = match found {
        Some(found) => found,
        None => {
            tracing::debug!(scale = FALLBACK_SCALE, "min-resize found no fit, falling back");
            let sizes = scaled_sizes(windows, FALLBACK_SCALE);
            let shelved = shelf::shelve(&sizes, &region);
            (FALLBACK_SCALE, shelved.into_packing(ShelfAxis::Row))
        }
    };
    tracing::debug!(scale, axis = packing.axis.name(), "min-resize converged");

    let bounds = workspace.size();
    let rects = packing
        .placed
        .iter()
        .map(|item| {
            let win = &windows[item.index];
            win.place(Rect::fit_into(
                item.x,
                item.y,
                item.width as f64,
                item.height as f64,
                win.min_size(),
                bounds,
            ))
        })
        .collect();
    MinResizeLayout {
        scale,
        axis: packing.axis,
        rects,
    }
}

fn scaled_sizes(windows: &[WindowSpec], s: f64) -> Vec<Size> {
    let scale = |v: u32, min: u32| (floor(v as f64 * s).max(1.0) as u32).max(min);
    windows
        .iter()
        .map(|w| {
            let (want, min) = (w.requested, w.requested_min);
            Size::new(scale(want.width, min.width), scale(want.height, min.height))
        })
        .collect()
}

/// Lower used span wins; `prefer` breaks ties.
fn better(
    rows: Option<ShelfPacking>,
    cols: Option<ShelfPacking>,
    prefer: ShelfAxis,
) -> Option<ShelfPacking> {
    match (rows, cols) {
        (Some(r), Some(c)) => {
            if r.used < c.used {
                Some(r)
            } else if c.used < r.used {
                Some(c)
            } else if prefer == ShelfAxis::Column {
                Some(c)
            } else {
                Some(r)
            }
        }
        (r, c) => r.or(c),
    }
}
