#![forbid(unsafe_code)]

//! Cell text measurement and padding.
//!
//! Width here means *printable* width: ANSI escape sequences contribute
//! nothing, wide characters count per `unicode-width`. This is what keeps
//! columns aligned when cells carry styled text.

use smallvec::SmallVec;
use unicode_width::UnicodeWidthStr;

/// Horizontal alignment of cell content within its padded width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Align {
    /// Flush left, trailing fill.
    #[default]
    Left,
    /// Centered, surplus fill on the right.
    Center,
    /// Flush right, leading fill.
    Right,
}

/// Display width of `text` with ANSI escape sequences stripped.
///
/// CSI sequences (`ESC [` through their final byte in `@..=~`) are skipped
/// whole; a stray `ESC` with no `[` introducer is itself zero-width and
/// scanning resumes at the following character.
#[must_use]
pub fn printable_width(text: &str) -> usize {
    // Fast path: no escapes at all.
    if memchr::memchr(0x1b, text.as_bytes()).is_none() {
        return text.width();
    }

    let mut width = 0;
    let mut rest = text;
    while let Some(at) = memchr::memchr(0x1b, rest.as_bytes()) {
        width += rest[..at].width();
        rest = &rest[at + 1..];
        if let Some(tail) = rest.strip_prefix('[') {
            // Parameter and intermediate bytes end at the first final byte.
            match tail
                .char_indices()
                .find(|&(_, ch)| ('@'..='~').contains(&ch))
            {
                Some((i, ch)) => rest = &tail[i + ch.len_utf8()..],
                // Unterminated sequence swallows the remainder.
                None => return width,
            }
        }
    }
    width + rest.width()
}

/// Widest printable line of a (possibly multi-line) cell.
#[must_use]
pub fn cell_width(text: &str) -> usize {
    text.lines().map(printable_width).max().unwrap_or(0)
}

/// Split cell content into its display lines.
///
/// Empty content still occupies one blank line, so every cell has height
/// at least 1.
#[must_use]
pub fn cell_lines(text: &str) -> SmallVec<[&str; 1]> {
    if text.is_empty() {
        return SmallVec::from_slice(&[""]);
    }
    text.lines().collect()
}

/// Pad `text` with spaces to `width` printable cells.
///
/// Text already at or beyond `width` is returned unchanged.
#[must_use]
pub fn pad(text: &str, width: usize, align: Align) -> String {
    let mut out = String::with_capacity(text.len() + width);
    pad_into(&mut out, text, width, align);
    out
}

/// Append `text` padded to `width` printable cells onto `out`.
pub fn pad_into(out: &mut String, text: &str, width: usize, align: Align) {
    let fill = width.saturating_sub(printable_width(text));
    let (left, right) = match align {
        Align::Left => (0, fill),
        Align::Center => (fill / 2, fill - fill / 2),
        Align::Right => (fill, 0),
    };
    for _ in 0..left {
        out.push(' ');
    }
    out.push_str(text);
    for _ in 0..right {
        out.push(' ');
    }
}
