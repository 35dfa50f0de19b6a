//! Tagrow API - Item types, item sources, and selection state for chip rows.

mod selection;
mod source;
mod tag;

pub use selection::SelectionSet;
pub use source::{JsonTagSource, ProgrammingLanguages, SourceError, TagSource};
pub use tag::{ChipLabel, Tag};
