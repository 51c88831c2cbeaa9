//! Vector export: retained geometry and pixel-domain vectorization.
//!
//! A `VectorDocument` is assembled once and never mutated; paths keep
//! insertion order, which matches raster fill order wherever they overlap.

mod svg;

pub use svg::{to_document, to_svg_string, write_svg};

use crate::patterns::Pattern;
use crate::render::{Canvas, Polygon};
use crate::types::Colour;

/// One fillable region in the document.
#[derive(Debug, Clone, PartialEq)]
pub enum VectorPath {
    /// A closed polygon outline (retained effect geometry).
    Polygon(Polygon),

    /// An axis-aligned rectangle (a traced pixel run).
    Rect {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
}

/// An assembled vector document.
#[derive(Debug, Clone)]
pub struct VectorDocument {
    width: usize,
    height: usize,
    entries: Vec<(VectorPath, Colour)>,
}

impl VectorDocument {
    /// Document size in canvas pixels.
    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// The ordered (path, fill) pairs.
    pub fn entries(&self) -> &[(VectorPath, Colour)] {
        &self.entries
    }

    /// Build a document from retained band geometry: one closed path per
    /// band-colour pair, lossless and compact.
    pub fn from_geometry(
        geometry: &[(Polygon, Colour)],
        width: usize,
        height: usize,
    ) -> Self {
        Self {
            width,
            height,
            entries: geometry
                .iter()
                .map(|(polygon, colour)| (VectorPath::Polygon(polygon.clone()), *colour))
                .collect(),
        }
    }

    /// Vectorize a pixel buffer.
    ///
    /// Samples every second row (matching the step-2 convention the wave
    /// generator draws with) and merges maximal horizontal runs of identical
    /// colour into rectangles two rows tall. The output therefore has half
    /// the vertical resolution of the raster; that tradeoff is intentional.
    pub fn trace_canvas(canvas: &Canvas) -> Self {
        let (width, height) = canvas.size();
        let mut entries = Vec::new();

        let mut y = 0;
        while y < height {
            let row = &canvas.pixels()[y];
            let mut start = 0;
            for x in 1..=width {
                if x == width || row[x] != row[start] {
                    entries.push((
                        VectorPath::Rect {
                            x: start,
                            y,
                            width: x - start,
                            height: 2,
                        },
                        row[start],
                    ));
                    start = x;
                }
            }
            y += 2;
        }

        Self {
            width,
            height,
            entries,
        }
    }

    /// Build the document for a generated pattern, preferring retained
    /// geometry over pixel tracing.
    pub fn from_pattern(pattern: &Pattern) -> Self {
        match &pattern.geometry {
            Some(geometry) => Self::from_geometry(
                geometry,
                pattern.width as usize,
                pattern.height as usize,
            ),
            None => Self::trace_canvas(&pattern.canvas),
        }
    }
}
