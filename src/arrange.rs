//! Strategy selection and the single layout entry point.

use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::cascade::{CascadeOptions, cascade};
use crate::error::ArrangeError;
use crate::min_resize::{MinResizeOptions, min_resize};
use crate::shelf::ShelfAxis;
use crate::smart::{SmartOptions, smart};
use crate::tile::{TileOptions, tile};
use crate::window::{PlacedRect, WindowRequest, WindowSpec, normalize_windows};
use crate::workspace::{Spacing, Workspace, WorkspaceDesc};

/// Layout strategy.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Strategy {
    /// Near-square uniform grid.
    #[default]
    Tile,
    /// Diagonal stagger from the top-left.
    Cascade,
    /// Regions proportional to requested area.
    Smart,
    /// Largest uniform scale that still shelf-packs.
    #[cfg_attr(feature = "serde", serde(alias = "smarter"))]
    MinResize,
}

impl Strategy {
    /// Every strategy, in menu order.
    pub const ALL: [Strategy; 4] = [Self::Tile, Self::Cascade, Self::Smart, Self::MinResize];

    /// Canonical name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Tile => "tile",
            Self::Cascade => "cascade",
            Self::Smart => "smart",
            Self::MinResize => "min_resize",
        }
    }

    /// Human-readable menu title.
    pub fn title(self) -> &'static str {
        match self {
            Self::Tile => "Tile",
            Self::Cascade => "Cascade",
            Self::Smart => "Smart Layout",
            Self::MinResize => "Smarter Layout",
        }
    }

    /// Parse a name, falling back to [`Strategy::Tile`] for anything unknown.
    ///
    /// ```
    /// use zenarrange::Strategy;
    ///
    /// assert_eq!(Strategy::from_name("smarter"), Strategy::MinResize);
    /// assert_eq!(Strategy::from_name("spiral"), Strategy::Tile);
    /// ```
    pub fn from_name(name: &str) -> Self {
        Self::lookup(name).unwrap_or_default()
    }

    fn lookup(name: &str) -> Option<Self> {
        let name = name.trim();
        let is = |s: &str| name.eq_ignore_ascii_case(s);
        if is("tile") {
            Some(Self::Tile)
        } else if is("cascade") {
            Some(Self::Cascade)
        } else if is("smart") {
            Some(Self::Smart)
        } else if is("min_resize") || is("min-resize") || is("minresize") || is("smarter") {
            Some(Self::MinResize)
        } else {
            None
        }
    }
}

impl FromStr for Strategy {
    type Err = ArrangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s).ok_or_else(|| ArrangeError::UnknownStrategy(s.into()))
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-call options for every strategy.
///
/// `gap` and `padding` override the workspace's own values when set; each
/// strategy reads only its own sub-options.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct LayoutOptions {
    pub gap: Option<f64>,
    pub padding: Option<f64>,
    pub tile: TileOptions,
    pub cascade: CascadeOptions,
    pub smart: SmartOptions,
    pub min_resize: MinResizeOptions,
}

impl LayoutOptions {
    /// Resolve padding and gap against a workspace.
    pub fn spacing(&self, workspace: &Workspace) -> Spacing {
        Spacing::resolve(workspace, self.gap, self.padding)
    }
}

/// A strategy plus its options, built fluently.
///
/// ```
/// use zenarrange::{Arrangement, Strategy, WindowRequest, Workspace};
///
/// let ws = Workspace::new(1440, 900).padding(12.0);
/// let windows = [WindowRequest::new(520.0, 380.0), WindowRequest::new(640.0, 420.0)];
/// let placed = Arrangement::new(Strategy::Cascade)
///     .offsets(36.0, 28.0)
///     .compute(&ws, &windows);
/// assert_eq!(placed.len(), 2);
/// assert!(placed[1].x > placed[0].x);
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Arrangement {
    pub strategy: Strategy,
    pub options: LayoutOptions,
}

impl Arrangement {
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            options: LayoutOptions::default(),
        }
    }

    /// Override the workspace gap.
    pub fn gap(mut self, gap: f64) -> Self {
        self.options.gap = Some(gap);
        self
    }

    /// Override the workspace padding.
    pub fn padding(mut self, padding: f64) -> Self {
        self.options.padding = Some(padding);
        self
    }

    /// Tile: keep window aspect ratios inside cells.
    pub fn preserve_aspect(mut self, preserve: bool) -> Self {
        self.options.tile.preserve_aspect = preserve;
        self
    }

    /// Cascade: per-step offsets.
    pub fn offsets(mut self, x: f64, y: f64) -> Self {
        self.options.cascade.offset_x = x;
        self.options.cascade.offset_y = y;
        self
    }

    /// Cascade: scale for oversized windows.
    pub fn base_scale(mut self, scale: f64) -> Self {
        self.options.cascade.base_scale = scale;
        self
    }

    /// Smart: leftover-sliver guard.
    pub fn min_aspect(mut self, min_aspect: f64) -> Self {
        self.options.smart.min_aspect = min_aspect;
        self
    }

    /// Min-resize: tie-breaking axis.
    pub fn prefer(mut self, axis: ShelfAxis) -> Self {
        self.options.min_resize.prefer = axis;
        self
    }

    /// Replace all options at once.
    pub fn options(mut self, options: LayoutOptions) -> Self {
        self.options = options;
        self
    }

    /// Normalize the requests and lay them out.
    pub fn compute(&self, workspace: &Workspace, windows: &[WindowRequest]) -> Vec<PlacedRect> {
        let specs = normalize_windows(workspace, windows);
        self.compute_specs(workspace, &specs)
    }

    /// Lay out already-normalized windows.
    pub fn compute_specs(&self, workspace: &Workspace, windows: &[WindowSpec]) -> Vec<PlacedRect> {
        let spacing = self.options.spacing(workspace);
        tracing::debug!(
            strategy = self.strategy.name(),
            windows = windows.len(),
            width = workspace.width,
            height = workspace.height,
            "arrange"
        );
        match self.strategy {
            Strategy::Tile => tile(workspace, windows, spacing, &self.options.tile),
            Strategy::Cascade => cascade(workspace, windows, spacing, &self.options.cascade),
            Strategy::Smart => smart(workspace, windows, spacing, &self.options.smart),
            Strategy::MinResize => {
                min_resize(workspace, windows, spacing, &self.options.min_resize).rects
            }
        }
    }
}

/// Lay out `windows` in `workspace` with the named strategy.
///
/// Unknown names use tile. The result has one entry per window, in input
/// order.
///
/// ```
/// use zenarrange::{LayoutOptions, WindowRequest, WorkspaceDesc, layout};
///
/// let ws = WorkspaceDesc::new(1280.0, 800.0);
/// let windows = vec![WindowRequest::new(400.0, 300.0); 3];
/// let placed = layout(&ws, &windows, "smart", &LayoutOptions::default());
/// assert_eq!(placed.len(), 3);
/// assert!(placed.iter().all(|p| p.x + p.width <= 1280 && p.y + p.height <= 800));
/// ```
pub fn layout(
    workspace: &WorkspaceDesc,
    windows: &[WindowRequest],
    strategy: &str,
    options: &LayoutOptions,
) -> Vec<PlacedRect> {
    let workspace = workspace.normalize();
    Arrangement::new(Strategy::from_name(strategy))
        .options(*options)
        .compute(&workspace, windows)
}
