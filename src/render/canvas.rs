//! Canvas buffer with polygon fill and rotation.
//!
//! A `Canvas` is a row-major grid of colours, exclusively owned by the
//! generator that fills it. The two drawing primitives are an even-odd
//! scanline polygon fill and a whole-buffer rotation.

use crate::error::{Result, StripeError};
use crate::types::Colour;

/// A sub-pixel point in canvas coordinates (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// An ordered polygon outline. Fewer than 3 points fills nothing.
pub type Polygon = Vec<Point>;

/// An in-memory pixel grid (row-major: pixels[y][x]).
#[derive(Debug, Clone)]
pub struct Canvas {
    pixels: Vec<Vec<Colour>>,
    width: usize,
    height: usize,
    background: Colour,
}

impl Canvas {
    /// Create a canvas filled with the background colour.
    ///
    /// Both dimensions must be positive.
    pub fn new(width: u32, height: u32, background: Colour) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(StripeError::InvalidDimensions { width, height });
        }
        let (width, height) = (width as usize, height as usize);
        Ok(Self {
            pixels: vec![vec![background; width]; height],
            width,
            height,
            background,
        })
    }

    /// Get the width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get the height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the dimensions as (width, height).
    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// The background colour the canvas was created with.
    pub fn background(&self) -> Colour {
        self.background
    }

    /// Get a pixel at the given position.
    pub fn get(&self, x: usize, y: usize) -> Option<Colour> {
        self.pixels.get(y).and_then(|row| row.get(x)).copied()
    }

    /// Get a reference to the pixel grid.
    pub fn pixels(&self) -> &[Vec<Colour>] {
        &self.pixels
    }

    /// Convert to a flat RGB buffer (for image output).
    pub fn to_rgb_buffer(&self) -> Vec<u8> {
        let mut buffer = Vec::with_capacity(self.width * self.height * 3);
        for row in &self.pixels {
            for colour in row {
                buffer.extend_from_slice(&colour.to_rgb());
            }
        }
        buffer
    }

    /// Rasterize a polygon with an even-odd scanline fill.
    ///
    /// For each row, edge crossings are computed at the row centre, sorted,
    /// and pixels filled between consecutive pairs. Spans outside the canvas
    /// are silently clipped. A polygon with fewer than 3 points is a no-op.
    pub fn fill_polygon(&mut self, polygon: &[Point], colour: Colour) {
        if polygon.len() < 3 {
            return;
        }

        let mut crossings: Vec<f64> = Vec::new();
        for y in 0..self.height {
            let yc = y as f64 + 0.5;
            crossings.clear();

            for i in 0..polygon.len() {
                let a = polygon[i];
                let b = polygon[(i + 1) % polygon.len()];
                // Half-open test keeps vertices from double-counting
                if (a.y <= yc) != (b.y <= yc) {
                    let t = (yc - a.y) / (b.y - a.y);
                    crossings.push(a.x + t * (b.x - a.x));
                }
            }

            crossings.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

            for pair in crossings.chunks_exact(2) {
                // Pixel x is inside when its centre x + 0.5 lies in [x0, x1)
                let start = (pair[0] - 0.5).ceil().max(0.0) as usize;
                let end = ((pair[1] - 0.5).ceil().max(0.0) as usize).min(self.width);
                for x in start..end {
                    self.pixels[y][x] = colour;
                }
            }
        }
    }

    /// Rotate the canvas counter-clockwise about its centre.
    ///
    /// The result is sized to the bounding box of the rotated rectangle and
    /// background-filled outside the content. Sampling is nearest-neighbour
    /// via inverse mapping, so the output is deterministic.
    pub fn rotate(&self, degrees: f64) -> Canvas {
        if degrees.rem_euclid(360.0) == 0.0 {
            return self.clone();
        }

        let theta = degrees.to_radians();
        let (sin, cos) = theta.sin_cos();

        let w = self.width as f64;
        let h = self.height as f64;
        let new_w = ((w * cos.abs() + h * sin.abs()).round() as usize).max(1);
        let new_h = ((w * sin.abs() + h * cos.abs()).round() as usize).max(1);

        let (cx, cy) = (w / 2.0, h / 2.0);
        let (ncx, ncy) = (new_w as f64 / 2.0, new_h as f64 / 2.0);

        let mut pixels = vec![vec![self.background; new_w]; new_h];
        for (dy, row) in pixels.iter_mut().enumerate() {
            for (dx, out) in row.iter_mut().enumerate() {
                let vx = dx as f64 + 0.5 - ncx;
                let vy = dy as f64 + 0.5 - ncy;
                // Inverse of the ccw screen rotation (y grows downward)
                let sx = cos * vx - sin * vy + cx;
                let sy = sin * vx + cos * vy + cy;
                if sx >= 0.0 && sy >= 0.0 {
                    let (sx, sy) = (sx as usize, sy as usize);
                    if sx < self.width && sy < self.height {
                        *out = self.pixels[sy][sx];
                    }
                }
            }
        }

        Canvas {
            pixels,
            width: new_w,
            height: new_h,
            background: self.background,
        }
    }
}
