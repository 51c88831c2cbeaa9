//! SVG serialization for vector documents.
//!
//! Path data is rendered into `d` attribute strings (`M/L/H/V/Z` commands)
//! and hung off an `svg::Document`. The document is rendered to a string
//! in memory before anything is written, so a failed write never leaves a
//! truncated file behind.

use std::path::Path as FsPath;

use svg::node::element::Path;
use svg::Document;

use crate::error::{Result, StripeError};
use crate::vector::{VectorDocument, VectorPath};

/// Build an `svg::Document` from an assembled vector document.
pub fn to_document(doc: &VectorDocument) -> Document {
    let (width, height) = doc.size();
    let mut document = Document::new()
        .set("width", width as u32)
        .set("height", height as u32)
        .set("viewBox", (0u32, 0u32, width as u32, height as u32));

    for (path, colour) in doc.entries() {
        document = document.add(
            Path::new()
                .set("fill", colour.to_string())
                .set("d", path_data(path)),
        );
    }

    document
}

/// Serialize to SVG source.
pub fn to_svg_string(doc: &VectorDocument) -> String {
    to_document(doc).to_string()
}

/// Write a vector document to an SVG file.
pub fn write_svg(doc: &VectorDocument, path: &FsPath) -> Result<()> {
    let source = to_svg_string(doc);
    std::fs::write(path, source).map_err(|e| StripeError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write SVG: {}", e),
    })?;
    Ok(())
}

fn path_data(path: &VectorPath) -> String {
    match path {
        VectorPath::Polygon(points) => {
            let mut d = String::new();
            for (i, point) in points.iter().enumerate() {
                let command = if i == 0 { 'M' } else { 'L' };
                d.push_str(&format!("{} {},{} ", command, trim(point.x), trim(point.y)));
            }
            d.push('Z');
            d
        }
        VectorPath::Rect {
            x,
            y,
            width,
            height,
        } => format!("M {} {} H {} V {} H {} Z", x, y, x + width, y + height, x),
    }
}

/// Format a coordinate without a trailing `.0` for whole numbers.
fn trim(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
