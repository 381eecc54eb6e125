//! Shelf packing: next-fit decreasing height (rows) and width (columns).
//!
//! Items are fixed-size; packing either fits every item inside the region
//! or reports no fit. Nothing is scaled here.

use alloc::vec::Vec;

use crate::geometry::Size;

/// Direction shelves are filled in.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum ShelfAxis {
    /// Left to right, wrapping into rows stacked downwards.
    #[default]
    Row,
    /// Top to bottom, wrapping into columns stacked rightwards.
    #[cfg_attr(feature = "serde", serde(rename = "col", alias = "column"))]
    Column,
}

impl ShelfAxis {
    /// Short name as used in query strings.
    pub fn name(self) -> &'static str {
        match self {
            Self::Row => "row",
            Self::Column => "col",
        }
    }
}

/// Region to pack into, in workspace coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ShelfRegion {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Space between items on a shelf and between shelves.
    pub gap: f64,
}

impl ShelfRegion {
    fn transposed(self) -> Self {
        Self {
            x: self.y,
            y: self.x,
            width: self.height,
            height: self.width,
            gap: self.gap,
        }
    }
}

/// One packed item.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ShelfItem {
    /// Position of the item in the input slice.
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub width: u32,
    pub height: u32,
}

impl ShelfItem {
    fn transposed(self) -> Self {
        Self {
            index: self.index,
            x: self.y,
            y: self.x,
            width: self.height,
            height: self.width,
        }
    }
}

/// A successful packing.
#[derive(Clone, Debug, PartialEq)]
pub struct ShelfPacking {
    pub axis: ShelfAxis,
    /// Extent consumed across shelves: total height for rows, total width
    /// for columns.
    pub used: f64,
    /// One item per input size, in input order.
    pub placed: Vec<ShelfItem>,
}

/// Pack into rows, tallest first. Returns `None` if any item is wider than
/// the region or the stacked rows exceed its height.
///
/// ```
/// use zenarrange::{Size, ShelfRegion, pack_rows};
///
/// let region = ShelfRegion { x: 0.0, y: 0.0, width: 100.0, height: 100.0, gap: 0.0 };
/// let packing = pack_rows(&[Size::new(60, 40), Size::new(60, 50)], &region).unwrap();
/// assert_eq!(packing.used, 90.0);
/// assert_eq!(packing.placed[0].y, 50.0);
/// ```
pub fn pack_rows(sizes: &[Size], region: &ShelfRegion) -> Option<ShelfPacking> {
    let shelved = shelve(sizes, region);
    shelved.fits.then(|| shelved.into_packing(ShelfAxis::Row))
}

/// Pack into columns, widest first. The transpose of [`pack_rows`].
pub fn pack_columns(sizes: &[Size], region: &ShelfRegion) -> Option<ShelfPacking> {
    let shelved = shelve_columns(sizes, region);
    shelved.fits.then(|| shelved.into_packing(ShelfAxis::Column))
}

/// Result of shelving every item, whether or not it fit.
pub(crate) struct Shelved {
    pub fits: bool,
    pub used: f64,
    pub placed: Vec<ShelfItem>,
}

impl Shelved {
    pub(crate) fn into_packing(self, axis: ShelfAxis) -> ShelfPacking {
        ShelfPacking {
            axis,
            used: self.used,
            placed: self.placed,
        }
    }
}

/// Row shelving that always places every item.
pub(crate) fn shelve(sizes: &[Size], region: &ShelfRegion) -> Shelved {
    let mut order: Vec<usize> = (0..sizes.len()).collect();
    // Stable, so equal heights keep input order.
    order.sort_by(|&a, &b| sizes[b].height.cmp(&sizes[a].height));

    let mut placed: Vec<ShelfItem> = Vec::with_capacity(sizes.len());
    let mut too_wide = false;
    let (mut x, mut y, mut row) = (0.0_f64, 0.0_f64, 0.0_f64);
    for index in order {
        let Size { width, height } = sizes[index];
        let (w, h) = (width as f64, height as f64);
        too_wide |= w > region.width;
        if x > 0.0 && x + w > region.width {
            y += row + region.gap;
            x = 0.0;
            row = 0.0;
        }
        placed.push(ShelfItem {
            index,
            x: region.x + x,
            y: region.y + y,
            width,
            height,
        });
        x += w + region.gap;
        row = row.max(h);
    }

    let used = if placed.is_empty() { 0.0 } else { y + row };
    placed.sort_by_key(|item| item.index);
    Shelved {
        fits: !too_wide && used <= region.height,
        used,
        placed,
    }
}

fn shelve_columns(sizes: &[Size], region: &ShelfRegion) -> Shelved {
    let transposed: Vec<Size> = sizes.iter().map(|s| s.transposed()).collect();
    let mut shelved = shelve(&transposed, &region.transposed());
    for item in &mut shelved.placed {
        *item = item.transposed();
    }
    shelved
}
