//! Plot a pair of colored waves on a braille canvas.
//!
//! Run with `cargo run --example waves`.

use cout::{Canvas, Color};

fn main() {
    let mut canvas = Canvas::new(40, 6);
    let width = canvas.pixel_width() as i32;

    for x in 0..width {
        let theta = (f64::from(x) * 4.5).to_radians();
        let sin = (11.0 + theta.sin() * 10.0).round() as i32;
        let cos = (11.0 + theta.cos() * 10.0).round() as i32;
        canvas.set_colored(x, sin, Color::Cyan);
        canvas.set_colored(x, cos, Color::Red);
    }

    print!("{canvas}");
}
