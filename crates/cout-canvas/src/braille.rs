#![forbid(unsafe_code)]

//! The 4×2 dot matrix behind one braille character.

use std::fmt;

use cout_style::Color;

/// First code point of the Unicode braille block.
pub const UNICODE_OFFSET: u32 = 0x2800;

/// Code-point weight of each dot slot, in `y * 2 + x` slot order.
const DOT_WEIGHTS: [u8; 8] = [1, 8, 2, 16, 4, 32, 64, 128];

/// A 2×4 block of optional-color dots rendered as one braille character.
///
/// Dot `(x, y)` has x ∈ [0, 1] and y ∈ [0, 3]. Every dot is either unset
/// or set with one [`Color`]; `Display` colorizes the glyph with the color
/// of the last set slot.
///
/// # Example
/// ```
/// use cout_canvas::BrailleCell;
///
/// let mut cell = BrailleCell::new();
/// cell.set(0, 0);
/// assert_eq!(cell.glyph(), '⠁');
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrailleCell {
    dots: [Option<Color>; 8],
}

impl BrailleCell {
    /// Create a cell with every dot unset.
    #[must_use]
    pub const fn new() -> Self {
        Self { dots: [None; 8] }
    }

    /// Color of the dot at `(x, y)`, `None` when unset.
    ///
    /// # Panics
    /// Panics when `(x, y)` is outside the 2×4 matrix.
    #[must_use]
    pub fn get(&self, x: i32, y: i32) -> Option<Color> {
        self.dots[slot(x, y)]
    }

    /// Set the dot at `(x, y)` with the default color.
    pub fn set(&mut self, x: i32, y: i32) {
        self.put(x, y, Some(Color::Default));
    }

    /// Set the dot at `(x, y)` with the given color.
    pub fn set_colored(&mut self, x: i32, y: i32, color: Color) {
        self.put(x, y, Some(color));
    }

    /// Unset the dot at `(x, y)`.
    pub fn unset(&mut self, x: i32, y: i32) {
        self.put(x, y, None);
    }

    /// Write the dot at `(x, y)`.
    ///
    /// # Panics
    /// Panics when `(x, y)` is outside the 2×4 matrix.
    pub fn put(&mut self, x: i32, y: i32, dot: Option<Color>) {
        self.dots[slot(x, y)] = dot;
    }

    /// Unset every dot.
    pub fn reset(&mut self) {
        self.dots = [None; 8];
    }

    /// The braille character for the currently set dots, uncolored.
    #[must_use]
    pub fn glyph(&self) -> char {
        let mut bits = 0u32;
        for (dot, weight) in self.dots.iter().zip(DOT_WEIGHTS) {
            if dot.is_some() {
                bits |= u32::from(weight);
            }
        }
        // The offset plus any 8-bit mask is always a valid code point.
        char::from_u32(UNICODE_OFFSET + bits).unwrap_or('\u{2800}')
    }
}

impl fmt::Display for BrailleCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let glyph = self.glyph();
        // The last set slot decides the color; the default color leaves
        // the glyph bare.
        match self.dots.iter().flatten().last() {
            Some(color) => {
                let mut buf = [0u8; 4];
                f.write_str(&color.apply(glyph.encode_utf8(&mut buf)))
            }
            None => write!(f, "{glyph}"),
        }
    }
}

fn slot(x: i32, y: i32) -> usize {
    assert!(
        (0..=1).contains(&x) && (0..=3).contains(&y),
        "dot out of range: ({x}, {y})"
    );
    (y * 2 + x) as usize
}
