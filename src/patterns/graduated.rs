//! Graduated saturation bands (effect 3).

use crate::render::{Canvas, Point};
use crate::types::Colour;

/// Fill vertical bands of the base hue with saturation rising left to right.
///
/// The base colour is converted to HSV once; band `i` keeps its hue and
/// value and takes saturation `0.3 + 0.7 * i / stripes`. Any remainder of
/// `width / stripes` stays background on the right.
pub fn generate(canvas: &mut Canvas, base: Colour, stripes: u32) {
    let (hue, _, value) = base.to_hsv();
    let height = canvas.height() as f64;
    let band_width = canvas.width() / stripes as usize;

    for i in 0..stripes {
        let saturation = 0.3 + 0.7 * i as f32 / stripes as f32;
        let colour = Colour::from_hsv(hue, saturation, value);

        let left = (i as usize * band_width) as f64;
        let right = ((i as usize + 1) * band_width) as f64;
        let polygon = [
            Point::new(left, 0.0),
            Point::new(right, 0.0),
            Point::new(right, height),
            Point::new(left, height),
        ];
        canvas.fill_polygon(&polygon, colour);
    }
}
