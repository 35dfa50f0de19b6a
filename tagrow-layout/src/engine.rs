//! Flow layout engine - wrap, truncate, and reserve room for the indicator.
//!
//! Items are packed left-to-right until the next one would cross the
//! container's right edge, then wrapped to a new line, like CSS
//! `flex-wrap: wrap`. On the last permitted line every item that still has
//! successors must leave room for the overflow indicator after it; the first
//! one that can't is dropped together with everything after it, and the
//! indicator takes its place. The hidden count falls out of the scan itself,
//! so no second pass is needed.

use tracing::{debug, trace};

use crate::item::MeasuredItem;
use crate::params::FlowParams;
use crate::result::{LayoutResult, OverflowDescriptor, Placement};

/// Lay out `items` under `params`.
///
/// Total and deterministic: any input produces a result, and identical
/// inputs produce identical results.
pub fn layout(items: &[MeasuredItem], params: &FlowParams) -> LayoutResult {
    if items.is_empty() {
        return LayoutResult::empty();
    }

    let max_width = u64::from(params.container_max_width);
    let mut cursor = Cursor::new();
    let mut placements = Vec::with_capacity(items.len());

    for (index, item) in items.iter().enumerate() {
        let width = u64::from(item.width);
        let has_successors = index + 1 < items.len();

        if cursor.x > 0 && u64::from(cursor.x) + width > max_width {
            if params.max_lines.is_last(cursor.line) {
                trace!(index, line = cursor.line, "line limit reached on wrap");
                break;
            }
            cursor.wrap(params.vertical_spacing);
        }

        // An item wider than the whole container can never share a line, so
        // it keeps its spot at the line start even on the last line.
        let oversized_at_start = cursor.x == 0 && width > max_width;
        if params.max_lines.is_last(cursor.line) && has_successors && !oversized_at_start {
            let with_indicator = u64::from(cursor.x)
                + width
                + u64::from(params.horizontal_spacing)
                + u64::from(params.overflow_indicator_width);
            if with_indicator > max_width {
                trace!(index, x = cursor.x, "no room for item and indicator");
                break;
            }
        }

        placements.push(Placement {
            item_index: index,
            x: cursor.x,
            y: cursor.y,
        });
        cursor.advance(item, params.horizontal_spacing);
    }

    let result = finish(items.len(), placements, &cursor, params);
    debug!(
        items = items.len(),
        visible = result.visible_count(),
        hidden = result.hidden_count(),
        width = result.total_width,
        height = result.total_height,
        "flow layout"
    );
    result
}

/// Scan state for a single pass.
#[derive(Debug)]
struct Cursor {
    x: u32,
    y: u32,
    /// 1-based line number.
    line: u32,
    line_height: u32,
    /// Right edge of the widest line so far (trailing spacing excluded).
    max_width_used: u32,
}

impl Cursor {
    fn new() -> Self {
        Self {
            x: 0,
            y: 0,
            line: 1,
            line_height: 0,
            max_width_used: 0,
        }
    }

    fn wrap(&mut self, vertical_spacing: u32) {
        self.line += 1;
        self.x = 0;
        self.y = self
            .y
            .saturating_add(self.line_height)
            .saturating_add(vertical_spacing);
        self.line_height = 0;
    }

    fn advance(&mut self, item: &MeasuredItem, horizontal_spacing: u32) {
        let right = self.x.saturating_add(item.width);
        self.line_height = self.line_height.max(item.height);
        self.max_width_used = self.max_width_used.max(right);
        self.x = right.saturating_add(horizontal_spacing);
    }
}

fn finish(
    total: usize,
    placements: Vec<Placement>,
    cursor: &Cursor,
    params: &FlowParams,
) -> LayoutResult {
    let hidden_count = total - placements.len();
    if hidden_count == 0 {
        return LayoutResult {
            placements,
            overflow: None,
            total_width: cursor.max_width_used,
            total_height: cursor.y.saturating_add(cursor.line_height),
        };
    }

    // The indicator sits at the cursor: right after the last placed item
    // (spacing included), or at the start of a line it opened on its own.
    let overflow = OverflowDescriptor {
        x: cursor.x,
        y: cursor.y,
        hidden_count,
    };
    let indicator_right = cursor.x.saturating_add(params.overflow_indicator_width);
    let line_height = cursor.line_height.max(params.overflow_indicator_height);

    LayoutResult {
        placements,
        overflow: Some(overflow),
        total_width: cursor.max_width_used.max(indicator_right),
        total_height: cursor.y.saturating_add(line_height),
    }
}
