#![forbid(unsafe_code)]

//! Fixed-width text tables for console output.
//!
//! This crate lays out columns of string cells into aligned rows:
//!
//! - [`Table`] - the layout builder (borders, alignment, grouping)
//! - [`Column`] - one heading plus its data cells
//! - [`Align`] - cell justification
//! - [`text`] - printable-width measurement and padding helpers
//!
//! Cell widths are *printable* widths: embedded ANSI escape sequences do
//! not disturb alignment, and wide characters count per `unicode-width`.
//! Cells may span multiple lines, and consecutive data entries can be
//! grouped side by side into one visual row.
//!
//! # Example
//! ```
//! use cout_table::{Column, Table};
//!
//! let out = Table::new()
//!     .column(Column::new("Name").cell("alpha").cell("beta"))
//!     .column(Column::new("Size").cell(8).cell(144))
//!     .render();
//! assert_eq!(out, "Name  Size \nalpha 8    \nbeta  144  ");
//! ```

pub mod border;
pub mod table;
pub mod text;

pub use border::{BorderSet, DOUBLE};
pub use table::{Column, Table};
pub use text::{Align, printable_width};
