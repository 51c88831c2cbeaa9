//! Raster rendering: the canvas buffer and PNG encoding.

mod canvas;
mod png;

pub use canvas::{Canvas, Point, Polygon};
pub use png::{encode_png, write_png};
