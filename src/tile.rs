//! Near-square uniform grid tiling.

use alloc::vec::Vec;

use crate::geometry::{Rect, Size, ceil, floor, round_half_up, sqrt};
use crate::window::{PlacedRect, WindowSpec};
use crate::workspace::{Spacing, Workspace};

/// Options for [`tile`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct TileOptions {
    /// Scale each window down to its own aspect ratio and center it in its
    /// cell instead of stretching it to fill. Never upscales.
    pub preserve_aspect: bool,
}

/// The grid chosen for a given window count and usable area.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TileGrid {
    pub cols: usize,
    pub rows: usize,
    pub cell_width: f64,
    pub cell_height: f64,
    /// Fraction of the usable area covered by cells.
    pub utilization: f64,
}

impl TileGrid {
    /// Pick between the two column counts bracketing `sqrt(n·W/H)`.
    ///
    /// The candidate with strictly higher utilization wins; on a tie the
    /// floor candidate is kept. Column counts never exceed `n`.
    ///
    /// ```
    /// use zenarrange::TileGrid;
    ///
    /// let grid = TileGrid::choose(4, 1416.0, 876.0, 8.0);
    /// assert_eq!((grid.cols, grid.rows), (2, 2));
    /// assert_eq!(grid.cell_width, 704.0);
    /// ```
    pub fn choose(n: usize, width: f64, height: f64, gap: f64) -> Self {
        let n = n.max(1);
        let count = n as f64;
        let ideal = sqrt(count * width / height);
        let candidates = [
            (floor(ideal) as usize).clamp(1, n),
            (ceil(ideal) as usize).clamp(1, n),
        ];

        let mut best = Self {
            cols: 1,
            rows: n,
            cell_width: width,
            cell_height: height / count,
            utilization: f64::NEG_INFINITY,
        };
        for cols in candidates {
            let rows = n.div_ceil(cols);
            let cell_width = (width - gap * (cols - 1) as f64) / cols as f64;
            let cell_height = (height - gap * (rows - 1) as f64) / rows as f64;
            let utilization = cell_width * cell_height * count / (width * height);
            if utilization > best.utilization {
                best = Self {
                    cols,
                    rows,
                    cell_width,
                    cell_height,
                    utilization,
                };
            }
        }
        best
    }
}

/// Arrange windows row-major in a near-square grid. Output is in input order.
pub fn tile(
    workspace: &Workspace,
    windows: &[WindowSpec],
    spacing: Spacing,
    options: &TileOptions,
) -> Vec<PlacedRect> {
    if windows.is_empty() {
        return Vec::new();
    }
    let (width, height) = workspace.usable(spacing.padding);
    let grid = TileGrid::choose(windows.len(), width, height, spacing.gap);
    tracing::trace!(
        cols = grid.cols,
        rows = grid.rows,
        utilization = grid.utilization,
        "tile grid"
    );

    let bounds = workspace.size();
    windows
        .iter()
        .enumerate()
        .map(|(k, win)| {
            let (row, col) = (k / grid.cols, k % grid.cols);
            let x = round_half_up(spacing.padding + col as f64 * (grid.cell_width + spacing.gap));
            let y = round_half_up(spacing.padding + row as f64 * (grid.cell_height + spacing.gap));

            if options.preserve_aspect {
                let (ww, wh) = (win.width as f64, win.height as f64);
                let scale = (grid.cell_width / ww).min(grid.cell_height / wh).min(1.0);
                let w = floor(ww * scale).max(win.min_width as f64);
                let h = floor(wh * scale).max(win.min_height as f64);
                let cx = x + floor((grid.cell_width - w) / 2.0);
                let cy = y + floor((grid.cell_height - h) / 2.0);
                win.place(Rect::fit_into(cx, cy, w, h, win.min_size(), bounds))
            } else {
                let w = floor(grid.cell_width).max(1.0);
                let h = floor(grid.cell_height).max(1.0);
                win.place(Rect::fit_into(x, y, w, h, Size::new(1, 1), bounds))
            }
        })
        .collect()
}
