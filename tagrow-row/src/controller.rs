//! Overflow controller - connects the last layout to a disclosure surface.
//!
//! The controller keeps an immutable snapshot of the most recent layout and
//! the items it was computed from. Activating the indicator slices the items
//! with the snapshot's hidden count; it never looks at a layout in progress
//! and never lays anything out itself.

use tagrow_layout::LayoutResult;

use crate::disclosure::DisclosureSurface;
use crate::indicator::indicator_label;

#[derive(Debug, Clone)]
pub struct OverflowController<T> {
    items: Vec<T>,
    snapshot: LayoutResult,
}

impl<T> OverflowController<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            snapshot: LayoutResult::empty(),
        }
    }

    /// Replace the snapshot with a new pass over `items`.
    pub fn update(&mut self, items: Vec<T>, result: LayoutResult) {
        debug_assert!(
            result.visible_count() + result.hidden_count() == items.len(),
            "layout result does not describe these items"
        );
        self.items = items;
        self.snapshot = result;
    }

    pub fn snapshot(&self) -> &LayoutResult {
        &self.snapshot
    }

    pub fn hidden_count(&self) -> usize {
        self.snapshot.hidden_count()
    }

    /// Index of the first hidden item; equals the item count when nothing is hidden.
    fn first_hidden(&self) -> usize {
        self.items.len().saturating_sub(self.hidden_count())
    }

    pub fn visible_items(&self) -> &[T] {
        &self.items[..self.first_hidden()]
    }

    pub fn hidden_items(&self) -> &[T] {
        &self.items[self.first_hidden()..]
    }

    /// Label for the indicator, if the last pass overflowed.
    pub fn indicator_label(&self) -> Option<String> {
        self.snapshot
            .overflow
            .map(|overflow| indicator_label(overflow.hidden_count))
    }
}

impl<T: Clone> OverflowController<T> {
    /// Handle activation of the overflow indicator.
    ///
    /// Opens `surface` with the hidden items and returns them. Does nothing
    /// when the last pass showed every item.
    pub fn activate<S>(&self, surface: &mut S) -> &[T]
    where
        S: DisclosureSurface<T> + ?Sized,
    {
        let hidden = self.hidden_items();
        if hidden.is_empty() {
            tracing::debug!("overflow indicator activated with nothing hidden");
            return hidden;
        }
        surface.open(hidden.to_vec());
        hidden
    }
}

impl<T> Default for OverflowController<T> {
    fn default() -> Self {
        Self::new()
    }
}
