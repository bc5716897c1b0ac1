#![forbid(unsafe_code)]

//! Fixed-width table rendering.
//!
//! A [`Table`] holds columns of raw cell strings plus layout options, and
//! `render` produces the final text in two passes: measure every cell's
//! printable width, then emit aligned rows with optional box-drawing
//! borders. Cells may span multiple lines; consecutive data entries may be
//! grouped into side-by-side sub-cells of one visual row.

use std::fmt;

use crate::border::DOUBLE;
use crate::text::{Align, cell_lines, cell_width, pad_into};

/// One table column: a heading followed by data cells.
///
/// Cells are stored as `Option<String>`; a `None` cell renders blank while
/// still occupying its slot in the grid. The heading is cell 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Column {
    cells: Vec<Option<String>>,
}

impl Column {
    /// Create a column with the given heading and no data cells.
    #[must_use]
    pub fn new(heading: impl fmt::Display) -> Self {
        Self {
            cells: vec![Some(heading.to_string())],
        }
    }

    /// Append one data cell.
    #[must_use]
    pub fn cell(mut self, cell: impl fmt::Display) -> Self {
        self.cells.push(Some(cell.to_string()));
        self
    }

    /// Append a blank data cell.
    #[must_use]
    pub fn blank(mut self) -> Self {
        self.cells.push(None);
        self
    }

    /// Append a data cell that renders blank when `None`.
    #[must_use]
    pub fn cell_opt(mut self, cell: Option<impl fmt::Display>) -> Self {
        self.cells.push(cell.map(|cell| cell.to_string()));
        self
    }

    /// Append every item as a data cell.
    #[must_use]
    pub fn cells<T: fmt::Display>(mut self, cells: impl IntoIterator<Item = T>) -> Self {
        for cell in cells {
            self.cells.push(Some(cell.to_string()));
        }
        self
    }

    /// Raw cell count, heading included.
    fn len(&self) -> usize {
        self.cells.len()
    }

    fn heading(&self) -> &str {
        self.entry(0)
    }

    /// Cell text at a raw index; missing and blank cells read as empty.
    fn entry(&self, index: usize) -> &str {
        self.cells
            .get(index)
            .and_then(|cell| cell.as_deref())
            .unwrap_or("")
    }
}

/// Fixed-width column layout builder.
///
/// Headings are centered over their column by default and data cells are
/// left-aligned; both are configurable. With `cells_per_group` above 1,
/// consecutive data entries of each column render side by side as one
/// visual row, and `first_column_one_cell` exempts the first column so it
/// can carry one row label per group.
///
/// # Example
/// ```
/// use cout_table::{Column, Table};
///
/// let table = Table::new()
///     .column(Column::new("City").cell("Oslo").cell("Lima"))
///     .column(Column::new("Code").cell(47).cell(51))
///     .borders(true);
/// let out = table.render();
/// assert!(out.starts_with('╔'));
/// assert_eq!(out.lines().count(), 6);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    columns: Vec<Column>,
    borders: bool,
    align_heading: Align,
    align_data: Align,
    cells_per_group: usize,
    first_column_one_cell: bool,
}

impl Default for Table {
    fn default() -> Self {
        Self {
            columns: Vec::new(),
            borders: false,
            align_heading: Align::Center,
            align_data: Align::Left,
            cells_per_group: 1,
            first_column_one_cell: false,
        }
    }
}

impl Table {
    /// Create an empty table with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build columns from newline-delimited blocks: the first line of each
    /// block is the heading, the rest are data cells. An empty block
    /// becomes a column with an empty heading.
    #[must_use]
    pub fn from_blocks<S: AsRef<str>>(blocks: impl IntoIterator<Item = S>) -> Self {
        let columns = blocks
            .into_iter()
            .map(|block| {
                let mut cells: Vec<Option<String>> = block
                    .as_ref()
                    .lines()
                    .map(|line| Some(line.to_owned()))
                    .collect();
                if cells.is_empty() {
                    cells.push(Some(String::new()));
                }
                Column { cells }
            })
            .collect();
        Self {
            columns,
            ..Self::default()
        }
    }

    /// Build columns from a flat data slice, partitioned into contiguous
    /// per-column chunks of `ceil(data_len / heading_count)` entries.
    #[must_use]
    pub fn from_flat<H: fmt::Display, D: fmt::Display>(headings: &[H], data: &[D]) -> Self {
        if headings.is_empty() {
            return Self::new();
        }
        let per_column = data.len().div_ceil(headings.len()).max(1);
        let mut chunks = data.chunks(per_column);
        let columns = headings
            .iter()
            .map(|heading| {
                let mut column = Column::new(heading);
                if let Some(chunk) = chunks.next() {
                    column = column.cells(chunk);
                }
                column
            })
            .collect();
        Self {
            columns,
            ..Self::default()
        }
    }

    /// Append one column.
    #[must_use]
    pub fn column(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }

    /// Append every column.
    #[must_use]
    pub fn columns(mut self, columns: impl IntoIterator<Item = Column>) -> Self {
        self.columns.extend(columns);
        self
    }

    /// Draw a box-drawing frame around the table.
    #[must_use]
    pub fn borders(mut self, borders: bool) -> Self {
        self.borders = borders;
        self
    }

    /// Justification of heading cells. Default: centered.
    #[must_use]
    pub fn align_heading(mut self, align: Align) -> Self {
        self.align_heading = align;
        self
    }

    /// Justification of data cells. Default: left.
    #[must_use]
    pub fn align_data(mut self, align: Align) -> Self {
        self.align_data = align;
        self
    }

    /// Number of consecutive data entries rendered side by side as one
    /// visual row per column.
    ///
    /// # Panics
    /// Panics when `cells` is zero.
    #[must_use]
    pub fn cells_per_group(mut self, cells: usize) -> Self {
        assert!(cells >= 1, "cells_per_group must be at least 1");
        self.cells_per_group = cells;
        self
    }

    /// Render the first column as one cell per row-group, so it can hold a
    /// row label. Ignored while `cells_per_group` is 1.
    #[must_use]
    pub fn first_column_one_cell(mut self, one_cell: bool) -> Self {
        self.first_column_one_cell = one_cell;
        self
    }

    /// Render the table.
    ///
    /// A render that produces no lines at all (no columns, no borders)
    /// returns the literal string `"null"`, a legacy contract kept for
    /// output compatibility.
    #[must_use]
    pub fn render(&self) -> String {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "table_render",
            columns = self.columns.len(),
            cells_per_group = self.cells_per_group,
            borders = self.borders
        )
        .entered();

        let cells = self.cells_per_group;
        // Splitting the first column is moot without grouping.
        let one_cell = self.first_column_one_cell && cells > 1;
        // Display widths, not byte lengths.
        let (pad_text, pad_width) = if self.borders {
            (format!(" {} ", DOUBLE.cell_divider), 3)
        } else {
            (" ".to_owned(), 1)
        };

        let layout = self.measure(cells, one_cell, pad_width);
        let max_len = self.columns.iter().map(Column::len).max().unwrap_or(0);
        let groups = if max_len > 1 {
            (max_len - 1).div_ceil(cells)
        } else {
            0
        };

        let mut lines = Vec::new();
        if self.borders {
            lines.push(layout.frame_line(DOUBLE.top_left, DOUBLE.top_tee, DOUBLE.top_right, None));
        }
        self.push_heading_rows(&layout, &mut lines);
        if self.borders {
            lines.push(layout.frame_line(
                DOUBLE.mid_left,
                DOUBLE.cross,
                DOUBLE.mid_right,
                Some(DOUBLE.mid_divider),
            ));
        }
        for group in 0..groups {
            self.push_data_rows(&layout, group, cells, one_cell, &pad_text, &mut lines);
        }
        if self.borders {
            lines.push(layout.frame_line(
                DOUBLE.bottom_left,
                DOUBLE.bottom_tee,
                DOUBLE.bottom_right,
                Some(DOUBLE.bottom_divider),
            ));
        }

        if lines.is_empty() {
            return "null".to_owned();
        }
        lines.join("\n")
    }

    /// Compute every sub-column width.
    fn measure(&self, cells: usize, one_cell: bool, pad_width: usize) -> Layout {
        let mut offsets = Vec::with_capacity(self.columns.len());
        let mut ncells = Vec::with_capacity(self.columns.len());
        let mut total = 0;
        for i in 0..self.columns.len() {
            offsets.push(total);
            let n = if i == 0 && one_cell { 1 } else { cells };
            ncells.push(n);
            total += n;
        }

        let mut widths = vec![0; total];
        for (i, column) in self.columns.iter().enumerate() {
            let off = offsets[i];
            let n = ncells[i];
            // The heading claims only its even share of each sub-column;
            // centered across the whole group it still fits.
            let spread = spread_width(cell_width(column.heading()), n, pad_width);
            for width in &mut widths[off..off + n] {
                *width = (*width).max(spread);
            }
            for r in 1..column.len() {
                let width = &mut widths[off + (r - 1) % n];
                *width = (*width).max(cell_width(column.entry(r)));
            }
        }

        Layout {
            widths,
            offsets,
            ncells,
            pad_width,
        }
    }

    fn push_heading_rows(&self, layout: &Layout, lines: &mut Vec<String>) {
        let height = self
            .columns
            .iter()
            .map(|column| cell_lines(column.heading()).len())
            .max()
            .unwrap_or(usize::from(self.borders));
        for row in 0..height {
            let mut line = String::new();
            if self.borders {
                line.push(DOUBLE.vertical);
                line.push(' ');
            }
            for (i, column) in self.columns.iter().enumerate() {
                let heading = cell_lines(column.heading());
                // Multi-line headings hang from the top of the row.
                let text = heading.get(row).copied().unwrap_or("");
                pad_into(&mut line, text, layout.group_width(i), self.align_heading);
                if self.borders {
                    line.push(' ');
                    line.push(DOUBLE.vertical);
                }
                line.push(' ');
            }
            lines.push(line);
        }
    }

    fn push_data_rows(
        &self,
        layout: &Layout,
        group: usize,
        cells: usize,
        one_cell: bool,
        pad_text: &str,
        lines: &mut Vec<String>,
    ) {
        let base = 1 + group * cells;
        // The label column consumes one raw entry per row-group.
        let start = |i: usize| if i == 0 && one_cell { 1 + group } else { base };

        let mut height = 1;
        for (i, column) in self.columns.iter().enumerate() {
            for j in 0..layout.ncells[i] {
                height = height.max(cell_lines(column.entry(start(i) + j)).len());
            }
        }

        for row in 0..height {
            let mut line = String::new();
            if self.borders {
                line.push(DOUBLE.vertical);
                line.push(' ');
            }
            for (i, column) in self.columns.iter().enumerate() {
                let off = layout.offsets[i];
                for j in 0..layout.ncells[i] {
                    if j > 0 {
                        line.push_str(pad_text);
                    }
                    let entry = cell_lines(column.entry(start(i) + j));
                    // Short cells sit at the bottom of the row-group.
                    let text = match (row + entry.len()).checked_sub(height) {
                        Some(index) => entry[index],
                        None => "",
                    };
                    pad_into(&mut line, text, layout.widths[off + j], self.align_data);
                }
                if self.borders {
                    line.push(' ');
                    line.push(DOUBLE.vertical);
                }
                line.push(' ');
            }
            lines.push(line);
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Measured sub-column widths, column `i` owning
/// `widths[offsets[i]..offsets[i] + ncells[i]]`.
struct Layout {
    widths: Vec<usize>,
    offsets: Vec<usize>,
    ncells: Vec<usize>,
    pad_width: usize,
}

impl Layout {
    /// Content width of a whole column-group, inter-cell padding included.
    fn group_width(&self, i: usize) -> usize {
        let off = self.offsets[i];
        let n = self.ncells[i];
        self.widths[off..off + n].iter().sum::<usize>() + self.pad_width * (n - 1)
    }

    /// One horizontal border line. Without a divider the rule runs solid
    /// across each column-group; with one, sub-column widths are spliced
    /// with `═<divider>═`.
    fn frame_line(&self, left: char, tee: char, right: char, divider: Option<char>) -> String {
        let mut out = String::new();
        out.push(left);
        for i in 0..self.offsets.len() {
            if i > 0 {
                out.push(tee);
            }
            match divider {
                None => extend_rule(&mut out, self.group_width(i) + 2),
                Some(divider) => {
                    out.push(DOUBLE.horizontal);
                    let off = self.offsets[i];
                    for (j, &width) in self.widths[off..off + self.ncells[i]].iter().enumerate() {
                        if j > 0 {
                            out.push(DOUBLE.horizontal);
                            out.push(divider);
                            out.push(DOUBLE.horizontal);
                        }
                        extend_rule(&mut out, width);
                    }
                    out.push(DOUBLE.horizontal);
                }
            }
        }
        out.push(right);
        out
    }
}

fn extend_rule(out: &mut String, width: usize) {
    for _ in 0..width {
        out.push(DOUBLE.horizontal);
    }
}

/// Even share of a heading width across `cells` sub-columns, inter-cell
/// padding deducted first, negative shares clamped to zero.
fn spread_width(heading: usize, cells: usize, pad_width: usize) -> usize {
    let surplus = heading as i64 - (pad_width * (cells - 1)) as i64;
    if surplus <= 0 {
        0
    } else {
        (surplus as usize).div_ceil(cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::printable_width;

    fn two_columns() -> Table {
        Table::new()
            .column(Column::new("H1").cell("a").cell("b"))
            .column(Column::new("H2").cell("1").cell("2"))
    }

    // --- degenerate input tests ---

    #[test]
    fn empty_table_renders_null() {
        assert_eq!(Table::new().render(), "null");
    }

    #[test]
    fn bordered_empty_table_keeps_frame() {
        assert_eq!(Table::new().borders(true).render(), "╔╗\n║ \n╠╣\n╚╝");
    }

    #[test]
    fn heading_only_column_renders_one_row() {
        let table = Table::new().column(Column::new("H"));
        assert_eq!(table.render(), "H ");
    }

    // --- plain layout tests ---

    #[test]
    fn plain_two_columns() {
        assert_eq!(two_columns().render(), "H1 H2 \na  1  \nb  2  ");
    }

    #[test]
    fn bordered_two_columns() {
        let expected = concat!(
            "╔════╦════╗\n",
            "║ H1 ║ H2 ║ \n",
            "╠════╬════╣\n",
            "║ a  ║ 1  ║ \n",
            "║ b  ║ 2  ║ \n",
            "╚════╩════╝",
        );
        assert_eq!(two_columns().borders(true).render(), expected);
    }

    #[test]
    fn align_right_data() {
        let table = Table::new()
            .column(Column::new("H1").cell("a"))
            .column(Column::new("H2").cell("1"))
            .align_data(Align::Right);
        assert_eq!(table.render(), "H1 H2 \n a  1 ");
    }

    #[test]
    fn align_left_heading() {
        let table = Table::new()
            .column(Column::new("H").cell("wide"))
            .align_heading(Align::Left);
        assert_eq!(table.render(), "H    \nwide ");
    }

    #[test]
    fn blank_cells_render_empty() {
        let table = Table::new().column(Column::new("H").blank().cell("b"));
        assert_eq!(table.render(), "H \n  \nb ");
    }

    #[test]
    fn ragged_columns_pad_with_blanks() {
        let table = Table::new()
            .column(Column::new("A").cell("1").cell("2").cell("3"))
            .column(Column::new("B").cell("x"));
        assert_eq!(table.render(), "A B \n1 x \n2   \n3   ");
    }

    #[test]
    fn styled_cells_measure_printable_width() {
        let styled = "\u{1b}[1;31mab\u{1b}[0;39m";
        let table = Table::new()
            .column(Column::new("H").cell(styled))
            .column(Column::new("I").cell("y"));
        let out = table.render();
        assert!(out.contains(styled));
        for line in out.lines() {
            assert_eq!(printable_width(line), 5);
        }
    }

    // --- multi-line cell tests ---

    #[test]
    fn multiline_data_bottom_anchored() {
        let table = Table::new()
            .column(Column::new("H").cell("x\ny"))
            .column(Column::new("I").cell("1"));
        assert_eq!(table.render(), "H I \nx   \ny 1 ");
    }

    #[test]
    fn multiline_heading_top_aligned() {
        let table = Table::new()
            .column(Column::new("A\nB").cell("x"))
            .column(Column::new("C").cell("y"));
        assert_eq!(table.render(), "A C \nB   \nx y ");
    }

    #[test]
    fn width_follows_widest_multiline_cell() {
        let table = Table::new().column(Column::new("H").cell("ab\nwider"));
        assert_eq!(table.render(), "  H   \nab    \nwider ");
    }

    // --- grouping tests ---

    #[test]
    fn grouped_columns_pair_up() {
        let table = Table::new()
            .column(Column::new("H").cells(["a", "b", "c", "d"]))
            .cells_per_group(2);
        assert_eq!(table.render(), " H  \na b \nc d ");
    }

    #[test]
    fn grouped_odd_tail_renders_blank() {
        let table = Table::new()
            .column(Column::new("H").cells(["a", "b", "c"]))
            .cells_per_group(2);
        assert_eq!(table.render(), " H  \na b \nc   ");
    }

    #[test]
    fn grouped_bordered_with_label_column() {
        let table = Table::new()
            .column(Column::new("").cells(["a", "b", "c"]))
            .column(Column::new("One").cells(["324", "32", "43982", "4398", "380", "38"]))
            .column(Column::new("Two").cells(["1894", "189", "15", "1", "290", "29"]))
            .column(Column::new("Three").cells(["204", "20", "31", "3", "321", "32"]))
            .borders(true)
            .cells_per_group(2)
            .first_column_one_cell(true);
        let expected = concat!(
            "╔═══╦══════════════╦════════════╦══════════╗\n",
            "║   ║     One      ║    Two     ║  Three   ║ \n",
            "╠═══╬═══════╤══════╬══════╤═════╬═════╤════╣\n",
            "║ a ║ 324   │ 32   ║ 1894 │ 189 ║ 204 │ 20 ║ \n",
            "║ b ║ 43982 │ 4398 ║ 15   │ 1   ║ 31  │ 3  ║ \n",
            "║ c ║ 380   │ 38   ║ 290  │ 29  ║ 321 │ 32 ║ \n",
            "╚═══╩═══════╧══════╩══════╧═════╩═════╧════╝",
        );
        assert_eq!(table.render(), expected);
    }

    #[test]
    fn label_column_width_includes_heading() {
        let table = Table::new()
            .column(Column::new("ID").cell("a"))
            .column(Column::new("N").cells(["1", "2"]))
            .cells_per_group(2)
            .first_column_one_cell(true);
        assert_eq!(table.render(), "ID  N  \na  1 2 ");
    }

    #[test]
    fn one_cell_moot_when_ungrouped() {
        let grouped = two_columns().first_column_one_cell(true);
        assert_eq!(grouped.render(), two_columns().render());
    }

    #[test]
    #[should_panic(expected = "cells_per_group")]
    fn zero_cells_per_group_panics() {
        let _ = Table::new().cells_per_group(0);
    }

    // --- constructor tests ---

    #[test]
    fn from_blocks_splits_rows() {
        let table = Table::from_blocks(["H1\na\nb", "H2\n1\n2"]);
        assert_eq!(table.render(), two_columns().render());
    }

    #[test]
    fn from_blocks_empty_block_is_blank_heading() {
        assert_eq!(Table::from_blocks([""]).render(), " ");
    }

    #[test]
    fn from_blocks_keeps_options() {
        let table = Table::from_blocks(["H1\na\nb", "H2\n1\n2"]).borders(true);
        assert!(table.render().starts_with('╔'));
    }

    #[test]
    fn from_flat_partitions_contiguously() {
        let table = Table::from_flat(&["A", "B"], &[1, 2, 3, 4, 5, 6]);
        assert_eq!(table.render(), "A B \n1 4 \n2 5 \n3 6 ");
    }

    #[test]
    fn from_flat_uneven_tail() {
        let table = Table::from_flat(&["A", "B"], &[1, 2, 3, 4, 5]);
        assert_eq!(table.render(), "A B \n1 4 \n2 5 \n3   ");
    }

    #[test]
    fn from_flat_no_headings_is_empty() {
        let table = Table::from_flat::<&str, i32>(&[], &[1, 2]);
        assert_eq!(table.render(), "null");
    }

    #[test]
    fn display_matches_render() {
        let table = two_columns().borders(true);
        assert_eq!(table.to_string(), table.render());
    }
}
