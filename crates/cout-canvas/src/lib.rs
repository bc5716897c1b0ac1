#![forbid(unsafe_code)]

//! Terminal pixel graphics on braille characters.
//!
//! Each braille character packs a 2×4 dot matrix, so a row of them
//! becomes a coarse pixel raster that any monospace terminal can show.
//! This crate provides:
//!
//! - [`BrailleCell`]: a single 2×4 dot matrix with an optional
//!   [`Color`](cout_style::Color) per dot, rendered as one glyph.
//! - [`Canvas`]: a grid of cells addressed in pixel coordinates.
//! - [`Turtle`]: turtle graphics (pen state, heading, forward/turn)
//!   drawing onto a canvas.
//!
//! ```
//! use cout_canvas::Canvas;
//!
//! let mut canvas = Canvas::new(2, 1);
//! for x in 0..4 {
//!     canvas.set(x, x);
//! }
//! assert_eq!(canvas.to_string(), "⠑⢄\n");
//! ```

pub mod braille;
pub mod canvas;
pub mod turtle;

pub use braille::{BrailleCell, UNICODE_OFFSET};
pub use canvas::Canvas;
pub use turtle::Turtle;
