#![forbid(unsafe_code)]

//! Box-drawing glyphs for the bordered table frame.

/// Glyph set for one table frame.
///
/// The outer frame and the heading separator are double-line; dividers
/// between sub-cells inside a column-group use the single-line forms
/// (`│` in data rows, `╤`/`╧` where they meet the horizontal rules).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderSet {
    /// Top-left corner.
    pub top_left: char,
    /// Junction between columns on the top rule.
    pub top_tee: char,
    /// Top-right corner.
    pub top_right: char,
    /// Left end of the heading separator.
    pub mid_left: char,
    /// Junction between columns on the heading separator.
    pub cross: char,
    /// Right end of the heading separator.
    pub mid_right: char,
    /// Bottom-left corner.
    pub bottom_left: char,
    /// Junction between columns on the bottom rule.
    pub bottom_tee: char,
    /// Bottom-right corner.
    pub bottom_right: char,
    /// Horizontal rule fill.
    pub horizontal: char,
    /// Column edge in content rows.
    pub vertical: char,
    /// Sub-cell divider in content rows.
    pub cell_divider: char,
    /// Sub-cell divider crossing the heading separator.
    pub mid_divider: char,
    /// Sub-cell divider crossing the bottom rule.
    pub bottom_divider: char,
}

/// The double-line frame used by bordered renders.
pub const DOUBLE: BorderSet = BorderSet {
    top_left: '╔',
    top_tee: '╦',
    top_right: '╗',
    mid_left: '╠',
    cross: '╬',
    mid_right: '╣',
    bottom_left: '╚',
    bottom_tee: '╩',
    bottom_right: '╝',
    horizontal: '═',
    vertical: '║',
    cell_divider: '│',
    mid_divider: '╤',
    bottom_divider: '╧',
};
