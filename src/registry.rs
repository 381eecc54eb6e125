//! Panel lifecycle state for a desktop container.
//!
//! The registry tracks every open panel's bounds, visibility and stacking
//! order, and keeps them inside the container. It owns no presentation
//! state; callers read [`Panel`]s back and apply them however they render.

use alloc::string::String;
use alloc::vec::Vec;

use crate::arrange::Arrangement;
use crate::error::ArrangeError;
use crate::geometry::{Rect, Size, clamp_i64};
use crate::window::{DEFAULT_HEIGHT, DEFAULT_WIDTH, PlacedRect, WindowId, WindowRequest};
use crate::workspace::Workspace;

/// Initial positions for the first panels opened.
const SLOTS: [(u32, u32); 6] = [(40, 40), (360, 40), (680, 40), (40, 300), (360, 300), (680, 300)];
/// Past the slot table, panels step diagonally from here.
const STAGGER_ORIGIN: u32 = 40;
const STAGGER_STEP: u32 = 30;

/// What a caller declares when opening a panel.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct PanelDesc {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub min_width: u32,
    pub min_height: u32,
}

impl Default for PanelDesc {
    fn default() -> Self {
        Self {
            title: String::new(),
            width: DEFAULT_WIDTH as u32,
            height: DEFAULT_HEIGHT as u32,
            min_width: 1,
            min_height: 1,
        }
    }
}

impl PanelDesc {
    pub fn new(title: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            title: title.into(),
            width,
            height,
            ..Self::default()
        }
    }

    pub fn min_size(mut self, width: u32, height: u32) -> Self {
        self.min_width = width;
        self.min_height = height;
        self
    }
}

/// Persistable snapshot of one panel.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PanelState {
    pub left: u32,
    pub top: u32,
    pub width: u32,
    pub height: u32,
    pub hidden: bool,
}

/// An open panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Panel {
    pub id: WindowId,
    pub title: String,
    pub bounds: Rect,
    pub min_size: Size,
    pub hidden: bool,
    /// Stacking order; higher is in front.
    pub z: u64,
}

impl Panel {
    pub fn state(&self) -> PanelState {
        PanelState {
            left: self.bounds.x,
            top: self.bounds.y,
            width: self.bounds.width,
            height: self.bounds.height,
            hidden: self.hidden,
        }
    }
}

/// Open panels inside one container.
#[derive(Clone, Debug)]
pub struct WindowRegistry {
    container: Size,
    /// In open order.
    panels: Vec<Panel>,
    z_top: u64,
    opened: usize,
}

impl WindowRegistry {
    pub fn new(container: Size) -> Self {
        Self {
            container: Size::new(container.width.max(1), container.height.max(1)),
            panels: Vec::new(),
            z_top: 0,
            opened: 0,
        }
    }

    pub fn container(&self) -> Size {
        self.container
    }

    /// Resize the container and pull every panel back inside it.
    pub fn set_container(&mut self, container: Size) {
        self.container = Size::new(container.width.max(1), container.height.max(1));
        let (w, h) = (self.container.width, self.container.height);
        for panel in &mut self.panels {
            panel.bounds = panel.bounds.clamp_to(w, h);
        }
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    /// Open a panel at the next default slot and raise it.
    ///
    /// ```
    /// use zenarrange::{PanelDesc, Rect, Size, WindowRegistry};
    ///
    /// let mut reg = WindowRegistry::new(Size::new(1280, 800));
    /// reg.open("chat", PanelDesc::new("Chat", 300, 200)).unwrap();
    /// reg.open("log", PanelDesc::new("Log", 300, 200)).unwrap();
    /// assert_eq!(reg.get(&"log".into()).unwrap().bounds, Rect::new(360, 40, 300, 200));
    /// ```
    pub fn open(
        &mut self,
        id: impl Into<WindowId>,
        desc: PanelDesc,
    ) -> Result<&Panel, ArrangeError> {
        let (x, y) = slot(self.opened);
        let state = PanelState {
            left: x,
            top: y,
            width: desc.width,
            height: desc.height,
            hidden: false,
        };
        self.insert(id.into(), desc, state)
    }

    /// Open a panel with previously saved bounds and visibility.
    pub fn restore(
        &mut self,
        id: impl Into<WindowId>,
        desc: PanelDesc,
        state: PanelState,
    ) -> Result<&Panel, ArrangeError> {
        self.insert(id.into(), desc, state)
    }

    fn insert(
        &mut self,
        id: WindowId,
        desc: PanelDesc,
        state: PanelState,
    ) -> Result<&Panel, ArrangeError> {
        if self.position(&id).is_some() {
            return Err(ArrangeError::DuplicateWindow(id));
        }
        let min_size = Size::new(desc.min_width.max(1), desc.min_height.max(1));
        let bounds = Rect::new(
            state.left,
            state.top,
            state.width.max(min_size.width),
            state.height.max(min_size.height),
        )
        .clamp_to(self.container.width, self.container.height);

        self.opened += 1;
        self.z_top += 1;
        tracing::debug!(id = %id, ?bounds, "open panel");
        self.panels.push(Panel {
            id,
            title: desc.title,
            bounds,
            min_size,
            hidden: state.hidden,
            z: self.z_top,
        });
        let last = self.panels.len() - 1;
        Ok(&self.panels[last])
    }

    /// Remove a panel, returning its final state.
    pub fn close(&mut self, id: &WindowId) -> Result<Panel, ArrangeError> {
        let index = self.index(id)?;
        Ok(self.panels.remove(index))
    }

    pub fn hide(&mut self, id: &WindowId) -> Result<(), ArrangeError> {
        self.panel_mut(id)?.hidden = true;
        Ok(())
    }

    /// Make a panel visible and raise it.
    pub fn show(&mut self, id: &WindowId) -> Result<(), ArrangeError> {
        self.panel_mut(id)?.hidden = false;
        self.bring_to_front(id)
    }

    pub fn bring_to_front(&mut self, id: &WindowId) -> Result<(), ArrangeError> {
        let index = self.index(id)?;
        self.z_top += 1;
        self.panels[index].z = self.z_top;
        Ok(())
    }

    /// Move a panel's top-left corner, keeping it inside the container.
    pub fn move_to(&mut self, id: &WindowId, x: i64, y: i64) -> Result<Rect, ArrangeError> {
        let container = self.container;
        let panel = self.panel_mut(id)?;
        let b = panel.bounds;
        let max_x = container.width.saturating_sub(b.width) as i64;
        let max_y = container.height.saturating_sub(b.height) as i64;
        panel.bounds = Rect::new(
            clamp_i64(x, 0, max_x) as u32,
            clamp_i64(y, 0, max_y) as u32,
            b.width,
            b.height,
        );
        Ok(panel.bounds)
    }

    /// Resize a panel, no smaller than its minimum and no larger than the
    /// container.
    pub fn resize_to(
        &mut self,
        id: &WindowId,
        width: u32,
        height: u32,
    ) -> Result<Rect, ArrangeError> {
        let container = self.container;
        let panel = self.panel_mut(id)?;
        let b = panel.bounds;
        panel.bounds = Rect::new(
            b.x,
            b.y,
            width.max(panel.min_size.width),
            height.max(panel.min_size.height),
        )
        .clamp_to(container.width, container.height);
        Ok(panel.bounds)
    }

    pub fn get(&self, id: &WindowId) -> Option<&Panel> {
        self.panels.iter().find(|p| &p.id == id)
    }

    /// Panels in open order.
    pub fn iter(&self) -> impl Iterator<Item = &Panel> {
        self.panels.iter()
    }

    /// Panel ids from back to front.
    pub fn z_order(&self) -> Vec<&WindowId> {
        let mut panels: Vec<&Panel> = self.panels.iter().collect();
        panels.sort_by_key(|p| p.z);
        panels.into_iter().map(|p| &p.id).collect()
    }

    pub fn snapshot(&self, id: &WindowId) -> Result<PanelState, ArrangeError> {
        self.get(id)
            .map(Panel::state)
            .ok_or_else(|| ArrangeError::UnknownWindow(id.clone()))
    }

    /// Visible panels as layout requests, in open order.
    pub fn requests(&self) -> Vec<WindowRequest> {
        self.panels
            .iter()
            .filter(|p| !p.hidden)
            .map(|p| {
                WindowRequest::new(p.bounds.width as f64, p.bounds.height as f64)
                    .id(p.id.clone())
                    .min_size(p.min_size.width as f64, p.min_size.height as f64)
            })
            .collect()
    }

    /// Lay out the visible panels in the container and apply the result.
    /// Hidden panels keep their bounds.
    pub fn arrange(&mut self, arrangement: &Arrangement) -> Vec<PlacedRect> {
        let workspace = Workspace::new(self.container.width, self.container.height);
        let placed = arrangement.compute(&workspace, &self.requests());
        for rect in &placed {
            if let Some(panel) = self.panels.iter_mut().find(|p| p.id == rect.id) {
                panel.bounds = rect.rect();
            }
        }
        placed
    }

    fn position(&self, id: &WindowId) -> Option<usize> {
        self.panels.iter().position(|p| &p.id == id)
    }

    fn index(&self, id: &WindowId) -> Result<usize, ArrangeError> {
        self.position(id)
            .ok_or_else(|| ArrangeError::UnknownWindow(id.clone()))
    }

    fn panel_mut(&mut self, id: &WindowId) -> Result<&mut Panel, ArrangeError> {
        let index = self.index(id)?;
        Ok(&mut self.panels[index])
    }
}

fn slot(index: usize) -> (u32, u32) {
    match SLOTS.get(index) {
        Some(&pos) => pos,
        None => {
            let offset = STAGGER_STEP.saturating_mul(index.min(u32::MAX as usize) as u32);
            let p = STAGGER_ORIGIN.saturating_add(offset);
            (p, p)
        }
    }
}
