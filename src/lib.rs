//! Window arrangement computation: grid tiling, cascading, squarified
//! treemap and min-resize shelf packing.
//!
//! Pure geometry. Given a workspace and a list of window requests, every
//! strategy returns one placement per window, in input order, fully inside
//! the workspace. Nothing here touches a display; callers apply the
//! returned rectangles however they render. `no_std` + `alloc` compatible.
//!
//! # Example
//!
//! ```
//! use zenarrange::{Arrangement, Strategy, WindowRequest, WorkspaceDesc};
//!
//! let ws = WorkspaceDesc::new(1440.0, 900.0).padding(12.0).gap(8.0).normalize();
//! let windows = [
//!     WindowRequest::new(520.0, 380.0).id("A"),
//!     WindowRequest::new(640.0, 420.0).id("B"),
//!     WindowRequest::new(480.0, 360.0).id("C"),
//!     WindowRequest::new(800.0, 600.0).id("D"),
//! ];
//!
//! let tiled = Arrangement::new(Strategy::Tile).compute(&ws, &windows);
//! assert_eq!((tiled[1].x, tiled[1].y), (724, 12));
//! assert_eq!((tiled[1].width, tiled[1].height), (704, 434));
//! ```
//!
//! # Modules
//!
//! - [`workspace`]: Workspace normalization and per-call spacing
//! - [`window`]: Window requests, normalized specs, placements
//! - [`tile`](mod@tile), [`cascade`](mod@cascade), [`smart`](mod@smart), [`min_resize`](mod@min_resize): The four strategies
//! - [`shelf`]: Row and column shelf packing used by min-resize
//! - [`arrange`]: Strategy selection and the [`layout`](fn@layout) entry point
//! - [`registry`]: Panel lifecycle state for a desktop container
//! - `query`: Query-string options (feature `query`)
//! - `svg`: SVG rendering of arrangements (feature `svg`)

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod arrange;
pub mod cascade;
pub mod error;
pub mod geometry;
pub mod min_resize;
pub mod registry;
pub mod shelf;
pub mod smart;
pub mod tile;
pub mod window;
pub mod workspace;

#[cfg(feature = "query")]
pub mod query;
#[cfg(feature = "svg")]
pub mod svg;

pub use arrange::{Arrangement, LayoutOptions, Strategy, layout};
pub use cascade::{CascadeOptions, cascade, wrap_steps};
pub use error::ArrangeError;
pub use geometry::{Rect, Size};
pub use min_resize::{MinResizeLayout, MinResizeOptions, min_resize};
pub use registry::{Panel, PanelDesc, PanelState, WindowRegistry};
pub use shelf::{ShelfAxis, ShelfItem, ShelfPacking, ShelfRegion, pack_columns, pack_rows};
pub use smart::{SmartOptions, smart, squarify};
pub use tile::{TileGrid, TileOptions, tile};
pub use window::{PlacedRect, WindowId, WindowRequest, WindowSpec, normalize_windows};
pub use workspace::{Spacing, Workspace, WorkspaceDesc};
