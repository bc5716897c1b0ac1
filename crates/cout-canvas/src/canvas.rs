#![forbid(unsafe_code)]

//! A pixel surface built from braille sub-matrices.
//!
//! A [`Canvas`] of `width × height` character cells addresses a pixel
//! space of `width * 2 × height * 4`: each cell is one [`BrailleCell`]
//! covering a 2×4 pixel block. Rendering emits one line of braille
//! characters per cell row.

use std::fmt;
use std::io;

use cout_style::Color;

use crate::braille::BrailleCell;

/// A `width × height` grid of braille cells addressed by pixel.
///
/// Pixel coordinates run `0 ≤ x < width * 2` and `0 ≤ y < height * 4`;
/// anything else, negatives included, panics with the offending pair.
/// Dimensions are fixed at construction.
///
/// # Example
/// ```
/// use cout_canvas::Canvas;
///
/// let mut canvas = Canvas::new(1, 1);
/// canvas.set(0, 0);
/// assert_eq!(canvas.to_string(), "⠁\n");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: usize,
    height: usize,
    cells: Vec<BrailleCell>,
}

impl Canvas {
    /// Create a canvas of `width × height` character cells, all pixels
    /// unset.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![BrailleCell::new(); width * height],
        }
    }

    /// Create a canvas with its four edge pixel lines pre-set to `color`.
    #[must_use]
    pub fn with_border(width: usize, height: usize, color: Color) -> Self {
        let mut canvas = Self::new(width, height);
        if width == 0 || height == 0 {
            return canvas;
        }
        let right = canvas.pixel_width() as i32 - 1;
        let bottom = canvas.pixel_height() as i32 - 1;
        for x in 0..=right {
            canvas.set_colored(x, 0, color);
            canvas.set_colored(x, bottom, color);
        }
        for y in 0..=bottom {
            canvas.set_colored(0, y, color);
            canvas.set_colored(right, y, color);
        }
        canvas
    }

    /// Grid dimensions in character cells.
    #[must_use]
    pub const fn cell_size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Addressable pixel width, two pixels per cell column.
    #[must_use]
    pub const fn pixel_width(&self) -> usize {
        self.width * 2
    }

    /// Addressable pixel height, four pixels per cell row.
    #[must_use]
    pub const fn pixel_height(&self) -> usize {
        self.height * 4
    }

    /// Color of the pixel at `(x, y)`, `None` when unset.
    ///
    /// # Panics
    /// Panics when `(x, y)` is outside the pixel space.
    #[must_use]
    pub fn get(&self, x: i32, y: i32) -> Option<Color> {
        self.cells[self.locate(x, y)].get(x % 2, y % 4)
    }

    /// Set the pixel at `(x, y)` with the default color.
    pub fn set(&mut self, x: i32, y: i32) {
        self.put(x, y, Some(Color::Default));
    }

    /// Set the pixel at `(x, y)` with the given color.
    pub fn set_colored(&mut self, x: i32, y: i32, color: Color) {
        self.put(x, y, Some(color));
    }

    /// Unset the pixel at `(x, y)`.
    pub fn unset(&mut self, x: i32, y: i32) {
        self.put(x, y, None);
    }

    /// Write the pixel at `(x, y)`.
    ///
    /// # Panics
    /// Panics when `(x, y)` is outside the pixel space.
    pub fn put(&mut self, x: i32, y: i32, dot: Option<Color>) {
        let index = self.locate(x, y);
        self.cells[index].put(x % 2, y % 4, dot);
    }

    /// Unset every pixel.
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            cell.reset();
        }
    }

    /// Write the rendered canvas to `out`, one newline-terminated line of
    /// braille characters per cell row.
    ///
    /// # Errors
    /// Returns any error from the underlying writer.
    pub fn render_to<W: io::Write>(&self, mut out: W) -> io::Result<()> {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "canvas_render",
            width = self.width,
            height = self.height
        )
        .entered();

        if self.width == 0 {
            return Ok(());
        }
        for row in self.cells.chunks(self.width) {
            for cell in row {
                write!(out, "{cell}")?;
            }
            out.write_all(b"\n")?;
        }
        Ok(())
    }

    /// Cell index for a pixel coordinate, bounds-checked.
    fn locate(&self, x: i32, y: i32) -> usize {
        assert!(
            x >= 0
                && y >= 0
                && (x as usize) < self.pixel_width()
                && (y as usize) < self.pixel_height(),
            "pixel out of range: ({x}, {y})"
        );
        (y as usize / 4) * self.width + x as usize / 2
    }
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.width == 0 {
            return Ok(());
        }
        for row in self.cells.chunks(self.width) {
            for cell in row {
                write!(f, "{cell}")?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}
