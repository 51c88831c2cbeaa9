//! Sinusoidal wave bands (effect 2).

use std::f64::consts::TAU;

use crate::render::{Canvas, Point, Polygon};
use crate::types::Colour;

/// Fill wave bands across the canvas.
///
/// The canvas width is split into `colours * 2` bands. The band polygon
/// does not depend on the colour index, so within each band the last
/// palette colour is the one that shows.
pub fn generate(canvas: &mut Canvas, colours: &[Colour], wave_height: u32) {
    let width = canvas.width();
    let height = canvas.height();
    let band_width = width / (colours.len() * 2);

    let mut x = 0;
    while x < width {
        for &colour in colours {
            let polygon = band_polygon(x, band_width, height, wave_height);
            canvas.fill_polygon(&polygon, colour);
        }
        x += band_width;
    }
}

/// Build one band's outline.
///
/// The forward edge walks even rows down the canvas, offset by the sine
/// wave. The closing edge walks odd rows back up at a constant offset: the
/// final offset computed by the forward pass, not recomputed per row.
/// Downstream output depends on that reuse; do not "fix" it.
pub fn band_polygon(x: usize, band_width: usize, height: usize, wave_height: u32) -> Polygon {
    let mut points = Vec::with_capacity(height);
    let mut last_offset = 0i64;

    let mut y = 0;
    while y < height {
        let phase = y as f64 / height as f64 * TAU;
        let offset = (wave_height as f64 * phase.sin()).round() as i64;
        points.push(Point::new((x as i64 + offset) as f64, y as f64));
        last_offset = offset;
        y += 2;
    }

    let closing_x = (x + band_width) as i64 + last_offset;
    let mut y = height as i64 - 1;
    while y >= 0 {
        points.push(Point::new(closing_x as f64, y as f64));
        y -= 2;
    }

    points
}
