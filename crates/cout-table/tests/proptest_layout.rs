//! Property-based invariant tests for the table renderer.
//!
//! These verify structural invariants that must hold for any input:
//!
//! 1. Unbordered renders are rectangular: every line has the same
//!    printable width.
//! 2. Bordered renders are framed: `╔…╗` first, exactly one `╠…╣`
//!    separator, `╚…╝` last, and every content line is exactly one cell
//!    wider than the frame lines (the trailing separator space).
//! 3. Line count follows the grouping formula for single-line cells.
//! 4. Every data cell appears verbatim in the render.
//! 5. Every heading appears verbatim in the render (heading spreading
//!    never squeezes a heading out of its column-group).
//! 6. A table with at least one column never collapses to the `"null"`
//!    sentinel.
//! 7. A label column keeps the render rectangular.

use cout_table::{Column, Table, printable_width};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

fn cell_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9]{1,6}"
}

fn column_strategy() -> impl Strategy<Value = (String, Vec<String>)> {
    (cell_strategy(), prop::collection::vec(cell_strategy(), 0..6))
}

fn columns_strategy() -> impl Strategy<Value = Vec<(String, Vec<String>)>> {
    prop::collection::vec(column_strategy(), 1..5)
}

fn build(columns: &[(String, Vec<String>)]) -> Table {
    let mut table = Table::new();
    for (heading, cells) in columns {
        table = table.column(Column::new(heading).cells(cells));
    }
    table
}

fn assert_rectangular(out: &str) -> Result<(), TestCaseError> {
    let mut widths = out.lines().map(printable_width);
    let first = widths.next().unwrap_or(0);
    for width in widths {
        prop_assert_eq!(width, first, "ragged render:\n{}", out);
    }
    Ok(())
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Unbordered renders are rectangular
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn unbordered_render_is_rectangular(
        columns in columns_strategy(),
        cells_per_group in 1usize..=3,
    ) {
        let out = build(&columns).cells_per_group(cells_per_group).render();
        assert_rectangular(&out)?;
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Bordered renders are framed
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn bordered_render_is_framed(
        columns in columns_strategy(),
        cells_per_group in 1usize..=3,
    ) {
        let out = build(&columns)
            .borders(true)
            .cells_per_group(cells_per_group)
            .render();
        let lines: Vec<&str> = out.lines().collect();

        prop_assert!(lines[0].starts_with('╔') && lines[0].ends_with('╗'));
        let last = lines[lines.len() - 1];
        prop_assert!(last.starts_with('╚') && last.ends_with('╝'));
        let separators = lines
            .iter()
            .filter(|line| line.starts_with('╠') && line.ends_with('╣'))
            .count();
        prop_assert_eq!(separators, 1);

        let frame = printable_width(lines[0]);
        for line in &lines {
            let width = printable_width(line);
            if line.starts_with('╔') || line.starts_with('╠') || line.starts_with('╚') {
                prop_assert_eq!(width, frame);
            } else {
                // Content lines carry the trailing separator space.
                prop_assert_eq!(width, frame + 1);
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Line count follows the grouping formula
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn line_count_follows_grouping(
        columns in columns_strategy(),
        cells_per_group in 1usize..=3,
    ) {
        let table = build(&columns).cells_per_group(cells_per_group);
        let max_len = columns
            .iter()
            .map(|(_, cells)| 1 + cells.len())
            .max()
            .unwrap_or(0);
        let groups = if max_len > 1 {
            (max_len - 1).div_ceil(cells_per_group)
        } else {
            0
        };
        prop_assert_eq!(table.render().lines().count(), 1 + groups);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Every data cell appears in the render
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn every_cell_appears(
        columns in columns_strategy(),
        cells_per_group in 1usize..=3,
    ) {
        let out = build(&columns).cells_per_group(cells_per_group).render();
        for (_, cells) in &columns {
            for cell in cells {
                prop_assert!(
                    out.contains(cell.as_str()),
                    "cell {:?} missing from:\n{}",
                    cell,
                    out
                );
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Every heading appears in the render
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn every_heading_appears(
        columns in columns_strategy(),
        cells_per_group in 1usize..=3,
    ) {
        let out = build(&columns).cells_per_group(cells_per_group).render();
        for (heading, _) in &columns {
            prop_assert!(
                out.contains(heading.as_str()),
                "heading {:?} missing from:\n{}",
                heading,
                out
            );
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. A table with columns never renders the "null" sentinel
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn nonempty_table_never_null(
        columns in columns_strategy(),
        borders in any::<bool>(),
    ) {
        let out = build(&columns).borders(borders).render();
        prop_assert_ne!(out, "null");
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 7. A label column keeps the render rectangular
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn label_column_render_is_rectangular(columns in columns_strategy()) {
        let out = build(&columns)
            .cells_per_group(2)
            .first_column_one_cell(true)
            .render();
        assert_rectangular(&out)?;
    }
}
