#![forbid(unsafe_code)]

//! Console output toolkit facade.
//!
//! Re-exports the common types from the member crates and offers a
//! lightweight prelude for day-to-day usage. The member crates stand on
//! their own as well:
//!
//! - [`cout_style`]: symbolic ANSI colors and intensities, SGR escape
//!   encoding, and HTML conversion.
//! - [`cout_table`]: a fixed-width table renderer with borders, cell
//!   grouping, and multi-line cells.
//! - [`cout_canvas`]: braille-character pixel canvases and turtle
//!   graphics.
//!
//! ```
//! use cout::prelude::*;
//!
//! let out = Table::new()
//!     .align_heading(Align::Left)
//!     .column(Column::new("Op").cells(["read", "write"]))
//!     .column(Column::new("Count").cells([12, 7]))
//!     .render();
//! assert_eq!(out, "Op    Count \nread  12    \nwrite 7     ");
//! ```

// --- Style re-exports ------------------------------------------------------

pub use cout_style::{Color, Intensity, apply, to_html};

// --- Table re-exports ------------------------------------------------------

pub use cout_table::{Align, BorderSet, Column, DOUBLE, Table, printable_width};

// --- Canvas re-exports -----------------------------------------------------

pub use cout_canvas::{BrailleCell, Canvas, Turtle};

// --- Prelude ---------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Align, Canvas, Color, Column, Intensity, Table, Turtle, apply, to_html,
    };

    pub use crate::{canvas, style, table};
}

pub use cout_canvas as canvas;
pub use cout_style as style;
pub use cout_table as table;
