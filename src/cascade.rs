//! Staggered cascade placement.

use alloc::vec::Vec;

use crate::geometry::{Rect, clamp_f64, floor, round_half_up};
use crate::window::{PlacedRect, WindowSpec};
use crate::workspace::{Spacing, Workspace};

/// Default step between successive windows, both axes.
pub const DEFAULT_OFFSET: f64 = 32.0;
/// Default fraction of the usable area an oversized window is scaled into.
pub const DEFAULT_BASE_SCALE: f64 = 0.85;

/// Windows covering more than this share of the usable area are scaled down.
const CROWDING_RATIO: f64 = 0.9;

/// Options for [`cascade`].
///
/// An offset of 0 keeps every window on that axis at the padded edge and
/// puts no limit on the number of steps before wrapping.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct CascadeOptions {
    pub offset_x: f64,
    pub offset_y: f64,
    pub base_scale: f64,
}

impl Default for CascadeOptions {
    fn default() -> Self {
        Self {
            offset_x: DEFAULT_OFFSET,
            offset_y: DEFAULT_OFFSET,
            base_scale: DEFAULT_BASE_SCALE,
        }
    }
}

impl CascadeOptions {
    /// Replace out-of-range values: non-finite offsets use the default,
    /// negative offsets become 0, a non-positive scale uses the default.
    pub fn resolved(&self) -> Self {
        let offset = |v: f64| {
            if v.is_finite() {
                v.max(0.0)
            } else {
                DEFAULT_OFFSET
            }
        };
        let base_scale = if self.base_scale.is_finite() && self.base_scale > 0.0 {
            self.base_scale
        } else {
            DEFAULT_BASE_SCALE
        };
        Self {
            offset_x: offset(self.offset_x),
            offset_y: offset(self.offset_y),
            base_scale,
        }
    }
}

/// Number of cascade steps that fit in a usable `width × height` area
/// before a window would run off an edge. Always at least 1; `usize::MAX`
/// when both offsets are 0.
///
/// ```
/// use zenarrange::{CascadeOptions, wrap_steps};
///
/// assert_eq!(wrap_steps(1416.0, 876.0, 8.0, &CascadeOptions::default()), 27);
/// ```
pub fn wrap_steps(width: f64, height: f64, gap: f64, options: &CascadeOptions) -> usize {
    let options = options.resolved();
    let steps = |extent: f64, offset: f64| {
        if offset > 0.0 {
            floor((extent - gap) / offset)
        } else {
            f64::INFINITY
        }
    };
    let wrap = steps(width, options.offset_x)
        .min(steps(height, options.offset_y))
        .max(1.0);
    if wrap.is_finite() && wrap < usize::MAX as f64 {
        wrap as usize
    } else {
        usize::MAX
    }
}

/// Place windows in a diagonal cascade from the padded origin, wrapping back
/// to the start every [`wrap_steps`] windows. Output is in input order.
pub fn cascade(
    workspace: &Workspace,
    windows: &[WindowSpec],
    spacing: Spacing,
    options: &CascadeOptions,
) -> Vec<PlacedRect> {
    let options = options.resolved();
    let (width, height) = workspace.usable(spacing.padding);
    let (pad, gap) = (spacing.padding, spacing.gap);
    let wrap = wrap_steps(width, height, gap, &options);
    let bounds = workspace.size();

    windows
        .iter()
        .enumerate()
        .map(|(i, win)| {
            let (ww, wh) = (win.width as f64, win.height as f64);
            let mut w = floor(ww.min(width));
            let mut h = floor(wh.min(height));
            if ww > width || wh > height || w * h > CROWDING_RATIO * width * height {
                let s = (width * options.base_scale / ww)
                    .min(height * options.base_scale / wh)
                    .min(1.0);
                w = floor(ww * s).max(win.min_width as f64);
                h = floor(wh * s).max(win.min_height as f64);
                tracing::trace!(window = %win.id, scale = s, "cascade downscale");
            }

            let step = (i % wrap) as f64;
            let x = round_half_up(pad + step * options.offset_x);
            let y = round_half_up(pad + step * options.offset_y);
            let x = clamp_f64(x, pad, pad + width - w);
            let y = clamp_f64(y, pad, pad + height - h);
            let x = clamp_f64(x, pad + gap, pad + width - w - gap);
            let y = clamp_f64(y, pad + gap, pad + height - h - gap);

            win.place(Rect::fit_into(x, y, w, h, win.min_size(), bounds))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Size;
    use crate::window::{WindowRequest, normalize_windows};
    use alloc::vec;

    fn run(ws: &Workspace, reqs: &[WindowRequest], options: CascadeOptions) -> Vec<PlacedRect> {
        let specs = normalize_windows(ws, reqs);
        cascade(ws, &specs, ws.spacing(), &options)
    }

    #[test]
    fn resolved_replaces_bad_values() {
        let o = CascadeOptions {
            offset_x: f64::NAN,
            offset_y: -5.0,
            base_scale: 0.0,
        }
        .resolved();
        assert_eq!(o.offset_x, DEFAULT_OFFSET);
        assert_eq!(o.offset_y, 0.0);
        assert_eq!(o.base_scale, DEFAULT_BASE_SCALE);
    }

    #[test]
    fn wrap_is_limited_by_tighter_axis() {
        let o = CascadeOptions::default();
        assert_eq!(wrap_steps(1000.0, 200.0, 0.0, &o), 6);
        assert_eq!(wrap_steps(10.0, 10.0, 0.0, &o), 1);
    }

    #[test]
    fn zero_offset_axis_imposes_no_limit() {
        let o = CascadeOptions {
            offset_x: 0.0,
            ..CascadeOptions::default()
        };
        assert_eq!(wrap_steps(10.0, 320.0, 0.0, &o), 10);

        let o = CascadeOptions {
            offset_x: 0.0,
            offset_y: 0.0,
            ..CascadeOptions::default()
        };
        assert_eq!(wrap_steps(10.0, 10.0, 0.0, &o), usize::MAX);
    }

    #[test]
    fn steps_by_exact_offsets_without_gap() {
        let ws = Workspace::new(800, 600).padding(0.0).gap(0.0);
        let reqs = vec![WindowRequest::new(200.0, 150.0); 4];
        let out = run(&ws, &reqs, CascadeOptions::default());
        for (k, p) in out.iter().enumerate() {
            assert_eq!((p.x, p.y), (32 * k as u32, 32 * k as u32));
            assert_eq!(p.size(), Size::new(200, 150));
        }
    }

    #[test]
    fn gap_pushes_first_window_off_the_edge() {
        let ws = Workspace::new(1440, 900).padding(12.0).gap(8.0);
        let reqs = vec![WindowRequest::new(520.0, 380.0); 4];
        let out = run(&ws, &reqs, CascadeOptions::default());
        let xs: Vec<u32> = out.iter().map(|p| p.x).collect();
        assert_eq!(xs, [20, 44, 76, 108]);
    }

    #[test]
    fn wraps_back_to_origin() {
        // usable 100×100, offset 32 → 3 steps.
        let ws = Workspace::new(100, 100).padding(0.0).gap(0.0);
        let reqs = vec![WindowRequest::new(10.0, 10.0); 4];
        let out = run(&ws, &reqs, CascadeOptions::default());
        assert_eq!((out[2].x, out[2].y), (64, 64));
        assert_eq!((out[3].x, out[3].y), (0, 0));
    }

    #[test]
    fn oversized_window_is_scaled_by_base_scale() {
        let ws = Workspace::new(1000, 1000).padding(0.0).gap(0.0);
        let out = run(&ws, &[WindowRequest::new(2000.0, 1000.0)], CascadeOptions::default());
        // Clamped to 1000×1000 by normalization, which crowds the area.
        assert_eq!(out[0].size(), Size::new(850, 850));
    }

    #[test]
    fn crowding_window_is_scaled() {
        let ws = Workspace::new(1000, 1000).padding(0.0).gap(0.0);
        let out = run(&ws, &[WindowRequest::new(1000.0, 950.0)], CascadeOptions::default());
        // s = min(0.85, 850/950) = 0.85
        assert_eq!(out[0].size(), Size::new(850, 807));
    }

    #[test]
    fn downscale_respects_minimums() {
        let ws = Workspace::new(1000, 1000).padding(0.0).gap(0.0);
        let out = run(
            &ws,
            &[WindowRequest::new(1000.0, 1000.0).min_size(900.0, 100.0)],
            CascadeOptions::default(),
        );
        assert_eq!(out[0].size(), Size::new(900, 850));
    }

    #[test]
    fn stays_inside_with_margin() {
        let ws = Workspace::new(300, 300).padding(10.0).gap(5.0);
        let reqs = vec![WindowRequest::new(200.0, 200.0); 3];
        let out = run(&ws, &reqs, CascadeOptions::default());
        for p in &out {
            assert!(p.rect().fits_within(300, 300));
            assert!(p.x >= 15 && p.x + p.width <= 285);
        }
    }
}
