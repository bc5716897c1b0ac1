//! Draw a rectangular spiral with turtle graphics.
//!
//! Run with `cargo run --example spiral`.

use cout::Turtle;

fn main() {
    let mut turtle = Turtle::new(20, 10);
    turtle.move_to(20.0, 20.0);
    turtle.pen_down();

    for step in 0..20 {
        turtle.forward(f64::from(step));
        turtle.right(90.0);
    }

    print!("{turtle}");
}
