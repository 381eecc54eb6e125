//! SVG visualization of window arrangements.
//!
//! Draws the workspace, its padded usable region, and one labelled box per
//! placed window, scaled into a fixed-size panel. Several arrangements can
//! be stacked vertically for side-by-side comparison of strategies.
//!
//! # Example
//!
//! ```
//! use zenarrange::{Arrangement, Strategy, WindowRequest, Workspace, svg::render_arrangement_svg};
//!
//! let ws = Workspace::new(1440, 900).padding(12.0);
//! let windows = [WindowRequest::new(520.0, 380.0).id("A"), WindowRequest::new(640.0, 420.0).id("B")];
//! let placed = Arrangement::new(Strategy::Smart).compute(&ws, &windows);
//!
//! let svg = render_arrangement_svg(&ws, &placed);
//! assert!(svg.starts_with("<svg"));
//! ```

use crate::arrange::{Arrangement, LayoutOptions, Strategy};
use crate::window::{PlacedRect, WindowRequest};
use crate::workspace::Workspace;

/// Maximum pixel width for any panel in the SVG output.
const MAX_PANEL_W: f64 = 480.0;
/// Maximum pixel height for any panel in the SVG output.
const MAX_PANEL_H: f64 = 300.0;
/// Vertical gap between panels.
const PANEL_GAP: f64 = 40.0;
/// Horizontal margin.
const MARGIN_X: f64 = 40.0;
/// Top margin for first panel.
const MARGIN_TOP: f64 = 30.0;
/// Height of label text area above each panel.
const LABEL_H: f64 = 22.0;
/// Windows narrower than this on screen get no text.
const MIN_LABEL_W: f64 = 36.0;

/// One arrangement to draw.
struct Panel<'a> {
    label: String,
    workspace: &'a Workspace,
    padding: f64,
    placed: Vec<PlacedRect>,
}

/// Render one arrangement as a complete SVG document.
pub fn render_arrangement_svg(workspace: &Workspace, placed: &[PlacedRect]) -> String {
    render_panels(&[Panel {
        label: format!("Workspace  {}×{}", workspace.width, workspace.height),
        workspace,
        padding: workspace.padding,
        placed: placed.to_vec(),
    }])
}

/// Render every strategy's arrangement of the same windows, one panel per
/// strategy, top to bottom.
pub fn render_strategies_svg(
    workspace: &Workspace,
    windows: &[WindowRequest],
    options: &LayoutOptions,
) -> String {
    let padding = options.spacing(workspace).padding;
    let panels: Vec<Panel<'_>> = Strategy::ALL
        .iter()
        .map(|&strategy| Panel {
            label: format!(
                "{}  {}×{}",
                strategy.title(),
                workspace.width,
                workspace.height
            ),
            workspace,
            padding,
            placed: Arrangement::new(strategy)
                .options(*options)
                .compute(workspace, windows),
        })
        .collect();
    render_panels(&panels)
}

/// Scale a workspace to fit within MAX_PANEL_W × MAX_PANEL_H, preserving aspect ratio.
fn scale_to_fit(workspace: &Workspace) -> (f64, f64, f64) {
    let w = workspace.width as f64;
    let h = workspace.height as f64;
    let scale = (MAX_PANEL_W / w).min(MAX_PANEL_H / h);
    (w * scale, h * scale, scale)
}

fn render_panels(panels: &[Panel<'_>]) -> String {
    let n = panels.len() as f64;
    let total_h = 2.0 * MARGIN_TOP + n * (LABEL_H + MAX_PANEL_H) + (n - 1.0).max(0.0) * PANEL_GAP;
    let total_w = MAX_PANEL_W + 2.0 * MARGIN_X;

    let mut svg = String::with_capacity(4096);
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        total_w as u32, total_h as u32, total_w, total_h
    ));
    svg.push('\n');

    // Light and dark styles via prefers-color-scheme
    svg.push_str(
        r##"<style>
  text { font-family: "Consolas", "DejaVu Sans Mono", "Courier New", monospace; }
  .label { font-size: 13px; font-weight: bold; fill: #333; }
  .window-label { font-size: 10px; fill: #fff; }
  .outer { fill: #e8e8e8; stroke: #999; stroke-width: 1; }
  .usable { fill: none; stroke: #999; stroke-width: 1; stroke-dasharray: 4,2; }
  .window { fill: #6ba3d6; fill-opacity: 0.85; stroke: #2c6faa; stroke-width: 1.5; }
  @media (prefers-color-scheme: dark) {
    .label { fill: #e0e0e0; }
    .outer { fill: #2d2d2d; stroke: #555; }
    .usable { stroke: #666; }
    .window { fill: #3a72a4; stroke: #5a9fd4; }
  }
</style>
"##,
    );

    let center_x = total_w / 2.0;
    let mut y = MARGIN_TOP;
    for panel in panels {
        svg.push_str(&format!(
            r#"<text x="{}" y="{}" class="label" text-anchor="middle">{}</text>"#,
            center_x,
            y + 14.0,
            escape_xml(&panel.label)
        ));
        svg.push('\n');
        y += LABEL_H;

        let (sw, sh, scale) = scale_to_fit(panel.workspace);
        let px = center_x - sw / 2.0;
        svg.push_str(&format!(
            r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" class="outer" rx="2"/>"#,
            px, y, sw, sh
        ));
        svg.push('\n');

        let (uw, uh) = panel.workspace.usable(panel.padding);
        svg.push_str(&format!(
            r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" class="usable"/>"#,
            px + panel.padding * scale,
            y + panel.padding * scale,
            uw * scale,
            uh * scale
        ));
        svg.push('\n');

        for rect in &panel.placed {
            let rx = px + rect.x as f64 * scale;
            let ry = y + rect.y as f64 * scale;
            let rw = rect.width as f64 * scale;
            let rh = rect.height as f64 * scale;
            svg.push_str(&format!(
                r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" class="window" rx="1"/>"#,
                rx, ry, rw, rh
            ));
            svg.push('\n');
            if rw >= MIN_LABEL_W && rh >= 14.0 {
                svg.push_str(&format!(
                    r#"<text x="{:.1}" y="{:.1}" class="window-label" text-anchor="middle">{} {}×{}</text>"#,
                    rx + rw / 2.0,
                    ry + rh / 2.0 + 4.0,
                    escape_xml(&rect.id.to_string()),
                    rect.width,
                    rect.height
                ));
                svg.push('\n');
            }
        }

        y += MAX_PANEL_H + PANEL_GAP;
    }

    svg.push_str("</svg>\n");
    svg
}

/// Escape special characters for XML text content.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
