//! Box-drawing table renderer for catalog listings.
//!
//! Column widths are measured in terminal cells, so Japanese titles and emoji
//! icons (two cells each) line up with ASCII columns.

use colored::Colorize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Column alignment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

/// A table builder that collects headers and rows, then renders to a
/// Unicode box-drawing string.
pub struct Table {
    headers: Vec<String>,
    alignments: Vec<Align>,
    rows: Vec<Vec<String>>,
}

/// Terminal cells taken by `text`: 2 for East Asian wide characters and emoji.
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Truncate `text` to at most `max` cells, appending an ellipsis when cut.
pub fn truncate(text: &str, max: usize) -> String {
    if display_width(text) <= max {
        return text.to_string();
    }
    let mut out = String::new();
    let mut width = 0;
    for c in text.chars() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        if width + w + 1 > max {
            break;
        }
        out.push(c);
        width += w;
    }
    out.push('\u{2026}');
    out
}

impl Table {
    /// Create a new table with the given column headers.
    /// All columns default to left-alignment.
    pub fn new(headers: &[&str]) -> Self {
        let headers: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
        let alignments = vec![Align::Left; headers.len()];
        Self {
            headers,
            alignments,
            rows: Vec::new(),
        }
    }

    /// Override the alignment for a specific column (0-indexed).
    /// Out-of-range indices are silently ignored.
    pub fn align(mut self, col: usize, alignment: Align) -> Self {
        if col < self.alignments.len() {
            self.alignments[col] = alignment;
        }
        self
    }

    /// Add a row. Extra cells are truncated; missing cells are filled with "".
    pub fn add_row(&mut self, cells: &[&str]) {
        let row: Vec<String> = (0..self.headers.len())
            .map(|i| cells.get(i).unwrap_or(&"").to_string())
            .collect();
        self.rows.push(row);
    }

    fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| display_width(h)).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(display_width(cell));
            }
        }
        widths
    }

    fn pad(text: &str, width: usize, alignment: Align) -> String {
        let diff = width.saturating_sub(display_width(text));
        match alignment {
            Align::Left => format!("{text}{}", " ".repeat(diff)),
            Align::Right => format!("{}{text}", " ".repeat(diff)),
        }
    }

    fn border(widths: &[usize], left: &str, mid: &str, right: &str) -> String {
        let segments: Vec<String> = widths.iter().map(|w| "\u{2500}".repeat(w + 2)).collect();
        format!("{left}{}{right}", segments.join(mid))
    }

    /// Render the table to a string with Unicode box-drawing borders.
    pub fn render(&self) -> String {
        let widths = self.column_widths();

        let mut lines = vec![Self::border(&widths, "\u{250c}", "\u{252c}", "\u{2510}")];

        let header_cells: Vec<String> = self
            .headers
            .iter()
            .enumerate()
            .map(|(i, h)| format!(" {} ", Self::pad(h, widths[i], self.alignments[i]).bold()))
            .collect();
        lines.push(format!("\u{2502}{}\u{2502}", header_cells.join("\u{2502}")));
        lines.push(Self::border(&widths, "\u{251c}", "\u{253c}", "\u{2524}"));

        for row in &self.rows {
            let cells: Vec<String> = row
                .iter()
                .enumerate()
                .map(|(i, cell)| format!(" {} ", Self::pad(cell, widths[i], self.alignments[i])))
                .collect();
            lines.push(format!("\u{2502}{}\u{2502}", cells.join("\u{2502}")));
        }

        lines.push(Self::border(&widths, "\u{2514}", "\u{2534}", "\u{2518}"));
        lines.join("\n")
    }

    pub fn print(&self) {
        println!("{}", self.render());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_table() {
        colored::control::set_override(false);
        let mut t = Table::new(&["ID", "Title"]);
        t.add_row(&["value-01", "保存版チェックリスト"]);
        t.add_row(&["humor-02", "理想と現実型"]);

        let rendered = t.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 6);
        assert!(lines[0].starts_with('\u{250c}'));
        assert!(lines[5].ends_with('\u{2518}'));
        assert!(lines[3].contains("保存版チェックリスト"));

        // Every line occupies the same number of terminal cells.
        let widths: Vec<usize> = lines.iter().map(|l| display_width(l)).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]), "{widths:?}");
    }

    #[test]
    fn wide_characters_count_double() {
        assert_eq!(display_width("abc"), 3);
        assert_eq!(display_width("初級"), 4);
        assert_eq!(display_width("\u{1F525}"), 2);
    }

    #[test]
    fn category_icons_take_two_cells() {
        let question = xguide_catalog::get_category("question").unwrap();
        assert_eq!(display_width(question.icon), 2);
        for c in xguide_catalog::all_categories() {
            assert_eq!(display_width(c.icon), 2, "icon of {}", c.id);
        }
    }

    #[test]
    fn right_alignment() {
        let mut t = Table::new(&["Category", "Count"]).align(1, Align::Right);
        t.add_row(&["value", "2"]);
        t.add_row(&["engagement", "12"]);
        let rendered = t.render();
        let line = rendered.lines().find(|l| l.contains("value")).unwrap();
        assert!(line.contains("    2 "));
    }

    #[test]
    fn truncate_respects_cell_width() {
        assert_eq!(truncate("short", 10), "short");
        let cut = truncate("保存版チェックリスト", 9);
        assert!(display_width(&cut) <= 9);
        assert!(cut.ends_with('\u{2026}'));
    }

    #[test]
    fn empty_table_and_missing_cells() {
        let t = Table::new(&["A", "B"]);
        assert_eq!(t.render().lines().count(), 4);

        let mut t = Table::new(&["X", "Y", "Z"]);
        t.add_row(&["only-one"]);
        let data_line = t.render().lines().nth(3).unwrap().to_string();
        assert_eq!(data_line.matches('\u{2502}').count(), 4);
    }
}
