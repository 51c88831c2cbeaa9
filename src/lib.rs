//! stripegen - procedural stripe-pattern image generator
//!
//! A library for generating four geometric stripe effects (diagonal bands,
//! wave bands, graduated saturation bands, staggered blocks) and exporting
//! them as PNG rasters and SVG vector documents.

pub mod cli;
pub mod error;
pub mod output;
pub mod patterns;
pub mod render;
pub mod types;
pub mod vector;

pub use error::{Result, StripeError};
pub use patterns::{generate, Pattern};
pub use render::{encode_png, write_png, Canvas, Point, Polygon};
pub use types::{parse_palette, Colour, Effect, Format, Job, Recipe};
pub use vector::{to_svg_string, write_svg, VectorDocument, VectorPath};
