//! Bordered table drawing.
//!
//! Draws the route table frame: a full border at the top and bottom,
//! a separator immediately below the header row, and nothing between data
//! rows. Cells carry both their plain text (used for width measurement and
//! padding) and their painted text (what actually lands in the output), so
//! ANSI escapes never skew column widths.

use unicode_width::UnicodeWidthStr;

/// Horizontal alignment of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    /// Pad on the right.
    Left,
    /// Pad on the left.
    Right,
}

/// One table cell: plain text for measurement, painted text for output.
#[derive(Debug, Clone)]
pub struct Cell {
    plain: String,
    painted: String,
}

impl Cell {
    /// Create an unstyled cell.
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            painted: text.clone(),
            plain: text,
        }
    }

    /// Create a cell whose painted form differs from its plain form.
    #[must_use]
    pub fn styled(plain: impl Into<String>, painted: impl Into<String>) -> Self {
        Self {
            plain: plain.into(),
            painted: painted.into(),
        }
    }

    fn width(&self) -> usize {
        self.plain.width()
    }
}

/// Border character set: double-line outer frame, single-line column
/// separators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    /// Top-left corner.
    pub top_left: char,
    /// Top-right corner.
    pub top_right: char,
    /// Bottom-left corner.
    pub bottom_left: char,
    /// Bottom-right corner.
    pub bottom_right: char,
    /// Horizontal line in the top and bottom borders.
    pub horizontal: char,
    /// Outer vertical border.
    pub side: char,
    /// Column joint in the top border.
    pub top_joint: char,
    /// Column joint in the bottom border.
    pub bottom_joint: char,
    /// Horizontal line in the header separator.
    pub divider: char,
    /// Left end of the header separator.
    pub divider_left: char,
    /// Right end of the header separator.
    pub divider_right: char,
    /// Column joint in the header separator.
    pub divider_joint: char,
    /// Inner column separator.
    pub column: char,
}

impl Frame {
    /// Double-line outer border with single-line column separators.
    #[must_use]
    pub const fn double_outer() -> Self {
        Self {
            top_left: '\u{2554}',      // ╔
            top_right: '\u{2557}',     // ╗
            bottom_left: '\u{255A}',   // ╚
            bottom_right: '\u{255D}',  // ╝
            horizontal: '\u{2550}',    // ═
            side: '\u{2551}',          // ║
            top_joint: '\u{2564}',     // ╤
            bottom_joint: '\u{2567}',  // ╧
            divider: '\u{2500}',       // ─
            divider_left: '\u{255F}',  // ╟
            divider_right: '\u{2562}', // ╢
            divider_joint: '\u{253C}', // ┼
            column: '\u{2502}',        // │
        }
    }

    /// ASCII-only frame using +, -, = and |.
    #[must_use]
    pub const fn ascii() -> Self {
        Self {
            top_left: '+',
            top_right: '+',
            bottom_left: '+',
            bottom_right: '+',
            horizontal: '=',
            side: '|',
            top_joint: '+',
            bottom_joint: '+',
            divider: '-',
            divider_left: '+',
            divider_right: '+',
            divider_joint: '+',
            column: '|',
        }
    }

    fn rule(&self, widths: &[usize], left: char, line: char, joint: char, right: char) -> String {
        let mut out = String::new();
        out.push(left);
        for (i, width) in widths.iter().enumerate() {
            if i > 0 {
                out.push(joint);
            }
            out.extend(std::iter::repeat_n(line, width + 2));
        }
        out.push(right);
        out
    }

    fn row(&self, widths: &[usize], alignments: &[Alignment], cells: &[Cell]) -> String {
        let mut out = String::new();
        out.push(self.side);
        for (i, width) in widths.iter().enumerate() {
            if i > 0 {
                out.push(self.column);
            }
            let (text, pad) = match cells.get(i) {
                Some(cell) => (cell.painted.as_str(), width.saturating_sub(cell.width())),
                None => ("", *width),
            };
            out.push(' ');
            match alignments.get(i).copied().unwrap_or(Alignment::Left) {
                Alignment::Right => {
                    out.extend(std::iter::repeat_n(' ', pad));
                    out.push_str(text);
                }
                Alignment::Left => {
                    out.push_str(text);
                    out.extend(std::iter::repeat_n(' ', pad));
                }
            }
            out.push(' ');
        }
        out.push(self.side);
        out
    }

    /// Draw a complete table, trailing newline included.
    ///
    /// Column widths come from the widest plain cell text per column,
    /// header included.
    #[must_use]
    pub fn draw(&self, header: &[Cell], rows: &[Vec<Cell>], alignments: &[Alignment]) -> String {
        let columns = header.len();
        let mut widths = vec![0usize; columns];
        for row in std::iter::once(header).chain(rows.iter().map(Vec::as_slice)) {
            for (i, cell) in row.iter().enumerate().take(columns) {
                widths[i] = widths[i].max(cell.width());
            }
        }

        let mut lines = Vec::with_capacity(rows.len() + 4);
        lines.push(self.rule(
            &widths,
            self.top_left,
            self.horizontal,
            self.top_joint,
            self.top_right,
        ));
        lines.push(self.row(&widths, alignments, header));
        lines.push(self.rule(
            &widths,
            self.divider_left,
            self.divider,
            self.divider_joint,
            self.divider_right,
        ));
        for row in rows {
            lines.push(self.row(&widths, alignments, row));
        }
        lines.push(self.rule(
            &widths,
            self.bottom_left,
            self.horizontal,
            self.bottom_joint,
            self.bottom_right,
        ));

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::double_outer()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_column_frame() {
        let frame = Frame::double_outer();
        let table = frame.draw(
            &[Cell::plain("H")],
            &[vec![Cell::plain("x")]],
            &[Alignment::Left],
        );
        assert_eq!(table, "╔═══╗\n║ H ║\n╟───╢\n║ x ║\n╚═══╝\n");
    }

    #[test]
    fn test_alignment_and_widths() {
        let frame = Frame::double_outer();
        let table = frame.draw(
            &[Cell::plain("Method(s)"), Cell::plain("Path")],
            &[vec![Cell::plain("GET"), Cell::plain("/abc")]],
            &[Alignment::Right, Alignment::Left],
        );
        let lines: Vec<_> = table.lines().collect();
        assert_eq!(lines[0], "╔═══════════╤══════╗");
        assert_eq!(lines[1], "║ Method(s) │ Path ║");
        assert_eq!(lines[2], "╟───────────┼──────╢");
        assert_eq!(lines[3], "║       GET │ /abc ║");
        assert_eq!(lines[4], "╚═══════════╧══════╝");
    }

    #[test]
    fn test_no_separator_between_data_rows() {
        let frame = Frame::double_outer();
        let table = frame.draw(
            &[Cell::plain("H")],
            &[vec![Cell::plain("a")], vec![Cell::plain("b")]],
            &[Alignment::Left],
        );
        // Border, header, divider, two rows, border.
        assert_eq!(table.lines().count(), 6);
    }

    #[test]
    fn test_styled_cell_width_from_plain_text() {
        let frame = Frame::double_outer();
        let table = frame.draw(
            &[Cell::plain("H")],
            &[vec![Cell::styled("ab", "\x1b[1mab\x1b[0m")]],
            &[Alignment::Left],
        );
        let lines: Vec<_> = table.lines().collect();
        // Column width is 2 despite the escape bytes.
        assert_eq!(lines[0], "╔════╗");
        assert_eq!(lines[3], "║ \x1b[1mab\x1b[0m ║");
    }

    #[test]
    fn test_ascii_frame() {
        let frame = Frame::ascii();
        let table = frame.draw(
            &[Cell::plain("H")],
            &[vec![Cell::plain("x")]],
            &[Alignment::Left],
        );
        assert_eq!(table, "+===+\n| H |\n+---+\n| x |\n+===+\n");
    }
}
