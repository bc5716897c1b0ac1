#![forbid(unsafe_code)]

//! ANSI styling primitives for console output.
//!
//! Three small pieces:
//!
//! - [`Color`] and [`Intensity`], the symbolic SGR attributes with their
//!   numeric and CSS lookup tables;
//! - [`apply`], wrapping text in a self-contained escape/reset pair;
//! - [`to_html`], converting codec-produced text to `<span>` markup.
//!
//! ```
//! use cout_style::{Color, Intensity, apply, to_html};
//!
//! let styled = apply("ready", Intensity::Default, Color::Green);
//! assert_eq!(to_html(&styled), "<span style=\"color:lightgreen;\">ready</span>");
//! ```

pub mod color;
pub mod html;
pub mod intensity;
pub mod sgr;

pub use color::Color;
pub use html::to_html;
pub use intensity::Intensity;
pub use sgr::{ESC, RESET, apply};
