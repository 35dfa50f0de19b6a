//! Character-grid painting of a laid-out row.

use tagrow_api::{ChipLabel, SelectionSet};
use tagrow_row::RowLayout;
use unicode_width::UnicodeWidthChar;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cell {
    Blank,
    Glyph(char),
    /// Right half of a double-width glyph.
    Continuation,
}

/// A fixed-size grid of terminal cells.
#[derive(Debug)]
pub struct Canvas {
    width: usize,
    rows: Vec<Vec<Cell>>,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        let width = width as usize;
        Self {
            width,
            rows: vec![vec![Cell::Blank; width]; height as usize],
        }
    }

    /// Write `text` starting at `(x, y)`, clipping at the right edge.
    pub fn put_str(&mut self, x: u32, y: u32, text: &str) {
        let Some(row) = self.rows.get_mut(y as usize) else {
            return;
        };
        let mut col = x as usize;
        for c in text.chars() {
            let w = UnicodeWidthChar::width(c).unwrap_or(0);
            if w == 0 {
                continue;
            }
            if col + w > self.width {
                break;
            }
            row[col] = Cell::Glyph(c);
            if w == 2 {
                row[col + 1] = Cell::Continuation;
            }
            col += w;
        }
    }

    /// Rows as strings, trailing blanks trimmed.
    pub fn lines(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|row| {
                let line: String = row
                    .iter()
                    .filter_map(|cell| match cell {
                        Cell::Blank => Some(' '),
                        Cell::Glyph(c) => Some(*c),
                        Cell::Continuation => None,
                    })
                    .collect();
                line.trim_end().to_string()
            })
            .collect()
    }
}

/// `[ label ]`, or `[*label*]` when selected. Both are label + 4 columns.
pub fn chip_text(label: &str, selected: bool) -> String {
    if selected {
        format!("[*{label}*]")
    } else {
        format!("[ {label} ]")
    }
}

pub fn indicator_text(label: &str) -> String {
    format!("( {label} )")
}

/// Paint the visible chips and the indicator of one layout pass.
pub fn draw_row<T: ChipLabel>(
    items: &[T],
    layout: &RowLayout,
    selection: &SelectionSet,
) -> Vec<String> {
    let result = &layout.result;
    let mut canvas = Canvas::new(result.total_width, result.total_height);

    for placement in &result.placements {
        let item = &items[placement.item_index];
        let selected = item.chip_id().is_some_and(|id| selection.contains(id));
        canvas.put_str(
            placement.x,
            placement.y,
            &chip_text(item.chip_label(), selected),
        );
    }

    if let (Some(overflow), Some(label)) = (result.overflow, layout.indicator_label()) {
        canvas.put_str(overflow.x, overflow.y, &indicator_text(&label));
    }

    canvas.lines()
}
