//! Tagrow Layout - Bounded flow layout for chip rows.
//!
//! This crate packs pre-measured items left-to-right, wraps them onto new
//! lines, and truncates after a line limit. When truncation happens it
//! reserves room for an "N+ more" overflow indicator on the last line and
//! reports exactly how many items it stands for.
//!
//! # Architecture
//!
//! ```text
//! measure items once -> layout(items, params) -> LayoutResult -> caller paints
//! ```
//!
//! The engine is a pure function: no I/O, no state kept between calls.

pub mod config;
pub mod engine;
pub mod item;
pub mod params;
pub mod primitives;
pub mod result;

mod error;

pub use config::FlowConfig;
pub use engine::layout;
pub use error::LayoutError;
pub use item::MeasuredItem;
pub use params::{FlowParams, MaxLines};
pub use primitives::Size;
pub use result::{LayoutResult, OverflowDescriptor, Placement};
