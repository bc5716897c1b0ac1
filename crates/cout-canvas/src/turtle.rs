#![forbid(unsafe_code)]

//! Turtle graphics over a braille [`Canvas`].
//!
//! The turtle tracks a floating-point position and a heading in degrees,
//! with the pen raised until [`Turtle::pen_down`]. Movement commands
//! translate to pixel lines on the underlying canvas when the pen is
//! down; positions are rounded to the nearest pixel only at draw time.

use std::fmt;

use crate::canvas::Canvas;

/// A drawing cursor over a [`Canvas`].
///
/// Headings follow screen coordinates: 0° points along positive x,
/// [`Turtle::right`] turns toward positive y. The pen starts raised.
///
/// # Example
/// ```
/// use cout_canvas::Turtle;
///
/// let mut turtle = Turtle::new(3, 1);
/// turtle.pen_down();
/// turtle.forward(5.0);
/// assert_eq!(turtle.to_string(), "⠉⠉⠉\n");
/// ```
#[derive(Debug, Clone)]
pub struct Turtle {
    canvas: Canvas,
    x: f64,
    y: f64,
    angle: f64,
    drawing: bool,
}

impl Turtle {
    /// Create a turtle on a fresh `width × height` canvas, at the origin
    /// with the pen up.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self::from_canvas(Canvas::new(width, height))
    }

    /// Create a turtle over an existing canvas, preserving its pixels.
    #[must_use]
    pub fn from_canvas(canvas: Canvas) -> Self {
        Self {
            canvas,
            x: 0.0,
            y: 0.0,
            angle: 0.0,
            drawing: false,
        }
    }

    /// Current x position.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Current y position.
    #[must_use]
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Current heading in degrees.
    #[must_use]
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Lower the pen; subsequent moves draw.
    pub fn pen_down(&mut self) {
        self.drawing = true;
    }

    /// Raise the pen; subsequent moves only reposition.
    pub fn pen_up(&mut self) {
        self.drawing = false;
    }

    /// Turn clockwise by `degrees`.
    pub fn right(&mut self, degrees: f64) {
        self.angle += degrees;
    }

    /// Turn counterclockwise by `degrees`.
    pub fn left(&mut self, degrees: f64) {
        self.angle -= degrees;
    }

    /// Move `distance` along the current heading.
    pub fn forward(&mut self, distance: f64) {
        let theta = self.angle.to_radians();
        let x = self.x + distance * theta.cos();
        let y = self.y + distance * theta.sin();
        self.move_to(x, y);
    }

    /// Move `distance` against the current heading.
    pub fn backward(&mut self, distance: f64) {
        self.forward(-distance);
    }

    /// Move to `(x, y)`, drawing a line from the current position when
    /// the pen is down.
    ///
    /// # Panics
    /// Panics when the pen is down and the line leaves the pixel space.
    pub fn move_to(&mut self, x: f64, y: f64) {
        if self.drawing {
            self.line(
                self.x.round() as i32,
                self.y.round() as i32,
                x.round() as i32,
                y.round() as i32,
            );
        }
        self.x = x;
        self.y = y;
    }

    /// The canvas drawn so far.
    #[must_use]
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Mutable access to the canvas.
    #[must_use]
    pub fn canvas_mut(&mut self) -> &mut Canvas {
        &mut self.canvas
    }

    /// Consume the turtle, keeping the canvas.
    #[must_use]
    pub fn into_canvas(self) -> Canvas {
        self.canvas
    }

    /// Plot a pixel line from `(x1, y1)` to `(x2, y2)` inclusive.
    fn line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        let dx = (x2 - x1).abs();
        let dy = -(y2 - y1).abs();
        let sx = if x1 < x2 { 1 } else { -1 };
        let sy = if y1 < y2 { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut x, mut y) = (x1, y1);
        loop {
            self.canvas.set(x, y);
            if x == x2 && y == y2 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }
}

impl fmt::Display for Turtle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.canvas, f)
    }
}
