//! Tag representation - one chip's identity and label.

use serde::{Deserialize, Serialize};

/// An item shown as a chip.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tag {
    /// Stable identifier, used for selection.
    pub id: String,
    /// Text painted on the chip.
    pub display_name: String,
}

impl Tag {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
        }
    }
}

/// Anything that can be rendered as a chip.
pub trait ChipLabel {
    /// Text painted on the chip (and measured for layout).
    fn chip_label(&self) -> &str;

    /// Identifier used for selection, if the item has one.
    fn chip_id(&self) -> Option<&str> {
        None
    }
}

impl ChipLabel for Tag {
    fn chip_label(&self) -> &str {
        &self.display_name
    }

    fn chip_id(&self) -> Option<&str> {
        Some(&self.id)
    }
}

impl ChipLabel for String {
    fn chip_label(&self) -> &str {
        self
    }
}

impl ChipLabel for &str {
    fn chip_label(&self) -> &str {
        self
    }
}
