//! Disclosure surfaces - where hidden items are revealed.

use tagrow_api::ChipLabel;

use crate::error::RowError;
use crate::measure::Measure;
use crate::row::{FlowRow, RowLayout};

/// A surface (sheet, popover, panel) that lists the items behind the
/// overflow indicator.
pub trait DisclosureSurface<T> {
    /// Show the surface with `items`, replacing anything shown before.
    fn open(&mut self, items: Vec<T>);

    /// Dismiss the surface.
    fn close(&mut self);

    fn is_open(&self) -> bool;
}

/// A bottom-sheet style surface: a title and every hidden item, wrapped
/// without a line limit.
#[derive(Debug, Clone)]
pub struct DisclosureSheet<T> {
    items: Vec<T>,
    open: bool,
}

impl<T> DisclosureSheet<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            open: false,
        }
    }

    /// Items currently shown. Empty while closed.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn title(&self) -> String {
        format!("{} More Items", self.items.len())
    }
}

impl<T: ChipLabel> DisclosureSheet<T> {
    /// Lay out the sheet's items with the row's styling and no line limit.
    pub fn layout<M: Measure>(&self, row: &FlowRow<M>) -> Result<RowLayout, RowError> {
        row.layout_unbounded(&self.items)
    }
}

impl<T> Default for DisclosureSheet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DisclosureSurface<T> for DisclosureSheet<T> {
    fn open(&mut self, items: Vec<T>) {
        tracing::debug!(count = items.len(), "disclosure sheet opened");
        self.items = items;
        self.open = true;
    }

    fn close(&mut self) {
        tracing::debug!("disclosure sheet closed");
        self.items.clear();
        self.open = false;
    }

    fn is_open(&self) -> bool {
        self.open
    }
}
