//! Diagonal bands (effect 1).
//!
//! Bands are parallelograms with a fixed one-to-one slant (the left edge
//! runs from `(i, 0)` to `(i + height, height)`), filled across a range wide
//! enough to survive rotation, then the whole buffer is rotated by the
//! requested angle. The net visual angle is the slant plus the rotation;
//! a 0° rotation still shows the slant.

use crate::render::{Canvas, Point, Polygon};
use crate::types::Colour;

/// Fill the slanted bands into an unrotated canvas.
///
/// Every palette colour is drawn over the same parallelogram, so the last
/// colour is the one that shows.
pub fn fill_bands(canvas: &mut Canvas, colours: &[Colour], stripe_width: u32) {
    let height = canvas.height() as i64;
    let sw = stripe_width as i64;
    let step = 2 * sw;

    let mut i = -height;
    while i < height * 2 {
        for &colour in colours {
            let polygon = [
                Point::new(i as f64, 0.0),
                Point::new((i + height) as f64, height as f64),
                Point::new((i + height + sw) as f64, height as f64),
                Point::new((i + sw) as f64, 0.0),
            ];
            canvas.fill_polygon(&polygon, colour);
        }
        i += step;
    }
}

/// Explicit band geometry retained for lossless vector export.
///
/// One parallelogram per palette colour, laid out from the band formula
/// rather than recovered from pixels.
pub fn band_geometry(colours: &[Colour], stripe_width: u32, height: u32) -> Vec<(Polygon, Colour)> {
    let sw = stripe_width as f64;
    let offset = sw * 2.0;
    let h = height as f64;

    colours
        .iter()
        .enumerate()
        .map(|(i, &colour)| {
            let x = i as f64 * offset;
            let polygon = vec![
                Point::new(x, 0.0),
                Point::new(x + offset, 0.0),
                Point::new(x + offset + sw, h),
                Point::new(x + sw, h),
            ];
            (polygon, colour)
        })
        .collect()
}
