//! Area-proportional placement via a squarified treemap.
//!
//! Windows are ranked by requested area and each one receives a region of
//! the usable area proportional to its share of the total. Regions are cut
//! in rows along the shorter side of whatever is left, keeping each region
//! as close to square as the row allows.

use alloc::vec::Vec;

use crate::geometry::{Frame, Rect, Size, squareness};
use crate::window::{PlacedRect, WindowSpec};
use crate::workspace::{Spacing, Workspace};

/// Default leftover-sliver guard.
pub const DEFAULT_MIN_ASPECT: f64 = 0.35;

/// Floor for squareness when scoring, so a degenerate row scores finite.
const MIN_SQUARENESS: f64 = 1e-6;

/// Options for [`smart`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct SmartOptions {
    /// A row stops growing when the rectangle left over after it would have
    /// a squareness below this. Non-finite values use the default.
    pub min_aspect: f64,
}

impl Default for SmartOptions {
    fn default() -> Self {
        Self {
            min_aspect: DEFAULT_MIN_ASPECT,
        }
    }
}

impl SmartOptions {
    fn min_aspect(&self) -> f64 {
        if self.min_aspect.is_finite() {
            self.min_aspect
        } else {
            DEFAULT_MIN_ASPECT
        }
    }
}

/// Split `areas` into rows for a `width × height` rectangle.
///
/// Returns the number of consecutive areas in each row; the counts sum to
/// `areas.len()`. Each row is built against the shorter side of the
/// rectangle remaining after the previous rows. A row is extended while its
/// least-square item does not get less square, and while the rectangle left
/// over would keep a squareness of at least `min_aspect`. A row always takes
/// at least one area.
///
/// ```
/// use zenarrange::squarify;
///
/// let rows = squarify(&[6.0, 6.0, 4.0, 3.0, 2.0, 2.0, 1.0], 6.0, 4.0, 0.0);
/// assert_eq!(rows, [2, 2, 1, 1, 1]);
/// ```
pub fn squarify(areas: &[f64], width: f64, height: f64, min_aspect: f64) -> Vec<usize> {
    let mut rows = Vec::new();
    let (mut rw, mut rh) = (width.max(1.0), height.max(1.0));
    let mut start = 0;

    while start < areas.len() {
        let side = rw.min(rh).max(1.0);
        let mut count = 1;
        let mut sum = areas[start];
        let mut best = row_score(&areas[start..start + 1], sum, side);

        while start + count < areas.len() {
            let next_sum = sum + areas[start + count];
            let score = row_score(&areas[start..=start + count], next_sum, side);
            let remaining = start + count + 1 < areas.len();
            let leftover = leftover_squareness(rw, rh, next_sum / side);
            if score <= best && (!remaining || leftover >= min_aspect) {
                count += 1;
                sum = next_sum;
                best = score;
            } else {
                break;
            }
        }

        let thickness = sum / side;
        if rw >= rh {
            rw = (rw - thickness).max(0.0);
        } else {
            rh = (rh - thickness).max(0.0);
        }
        tracing::trace!(count, score = best, "squarify row");
        rows.push(count);
        start += count;
    }
    rows
}

/// `1 / squareness` of the least-square item; lower is better.
fn row_score(row: &[f64], sum: f64, side: f64) -> f64 {
    let thickness = sum / side;
    let worst = row
        .iter()
        .map(|&a| squareness(a / thickness, thickness))
        .fold(1.0, f64::min);
    1.0 / worst.clamp(MIN_SQUARENESS, 1.0)
}

fn leftover_squareness(rw: f64, rh: f64, thickness: f64) -> f64 {
    if rw >= rh {
        squareness(rw - thickness, rh)
    } else {
        squareness(rw, rh - thickness)
    }
}

/// Turn rows of target areas into frames tiling `root`, in area order.
///
/// A row runs along the shorter side of the remaining rectangle. The last
/// row takes whatever extent is left.
fn lay_out_rows(areas: &[f64], rows: &[usize], root: Frame) -> Vec<Frame> {
    let mut frames = Vec::with_capacity(areas.len());
    let mut rem = root;
    let mut start = 0;

    for (r, &count) in rows.iter().enumerate() {
        let row = &areas[start..start + count];
        start += count;
        let sum: f64 = row.iter().sum();
        let column = rem.width >= rem.height;
        let side = if column { rem.height } else { rem.width };
        let extent = if column { rem.width } else { rem.height };
        let thickness = if r + 1 == rows.len() {
            extent
        } else {
            (sum / side.max(1.0)).min(extent)
        };

        let mut offset = 0.0;
        for &a in row {
            let length = if sum > 0.0 { a / sum * side } else { side / count as f64 };
            frames.push(if column {
                Frame {
                    x: rem.x,
                    y: rem.y + offset,
                    width: thickness,
                    height: length,
                }
            } else {
                Frame {
                    x: rem.x + offset,
                    y: rem.y,
                    width: length,
                    height: thickness,
                }
            });
            offset += length;
        }

        if column {
            rem.x += thickness;
            rem.width -= thickness;
        } else {
            rem.y += thickness;
            rem.height -= thickness;
        }
    }
    frames
}

/// Place windows in regions proportional to their requested areas.
/// Output is in input order.
///
/// The treemap tiles the usable area grown by one `gap` on each axis, and
/// every cell then gives up `gap` on its right and bottom edges. Each region
/// pays the same gap, and the outer cells end flush with the padding.
/// Regions are handed out largest first, so a larger request never receives
/// a smaller region once pixels are snapped.
pub fn smart(
    workspace: &Workspace,
    windows: &[WindowSpec],
    spacing: Spacing,
    options: &SmartOptions,
) -> Vec<PlacedRect> {
    if windows.is_empty() {
        return Vec::new();
    }
    let (width, height) = workspace.usable(spacing.padding);

    let mut order: Vec<usize> = (0..windows.len()).collect();
    order.sort_by(|&a, &b| {
        let (a, b) = (&windows[a], &windows[b]);
        b.area
            .total_cmp(&a.area)
            .then(a.original_index.cmp(&b.original_index))
    });

    let gap = spacing.gap;
    let (cell_w, cell_h) = (width + gap, height + gap);
    let total: f64 = windows.iter().map(|w| w.area).sum();
    let targets: Vec<f64> = order
        .iter()
        .map(|&i| windows[i].area / total * cell_w * cell_h)
        .collect();

    let rows = squarify(&targets, cell_w, cell_h, options.min_aspect());
    let root = Frame {
        x: spacing.padding,
        y: spacing.padding,
        width: cell_w,
        height: cell_h,
    };

    let bounds = workspace.size();
    let mut regions: Vec<Rect> = lay_out_rows(&targets, &rows, root)
        .iter()
        .map(|f| {
            Rect::fit_into(
                f.x,
                f.y,
                (f.width - gap).max(1.0),
                (f.height - gap).max(1.0),
                Size::new(1, 1),
                bounds,
            )
        })
        .collect();
    // Stable, so regions of equal area keep treemap order.
    regions.sort_by(|a, b| b.area().cmp(&a.area()));

    let mut placed: Vec<Option<PlacedRect>> = alloc::vec![None; windows.len()];
    for (&i, r) in order.iter().zip(&regions) {
        let win = &windows[i];
        placed[i] = Some(win.place(Rect::fit_into(
            r.x as f64,
            r.y as f64,
            r.width as f64,
            r.height as f64,
            win.min_size(),
            bounds,
        )));
    }
    placed.into_iter().flatten().collect()
}
