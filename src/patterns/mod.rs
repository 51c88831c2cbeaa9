//! The four stripe-pattern generators and their dispatcher.

mod blocks;
mod diagonal;
mod graduated;
mod wave;

pub use wave::band_polygon;

use crate::error::Result;
use crate::render::{Canvas, Polygon};
use crate::types::{Colour, Effect};

/// A generated pattern: the filled canvas, plus explicit band geometry when
/// the effect can describe itself without pixel tracing.
///
/// `width`/`height` are the requested generation size; the canvas itself
/// may be larger after rotation.
#[derive(Debug, Clone)]
pub struct Pattern {
    pub canvas: Canvas,
    pub geometry: Option<Vec<(Polygon, Colour)>>,
    pub width: u32,
    pub height: u32,
}

/// Generate one pattern.
///
/// Validates the parameters, fills a white canvas in a single pass, and for
/// the diagonal effect rotates the buffer and retains the band geometry for
/// lossless vector export.
pub fn generate(effect: &Effect, width: u32, height: u32) -> Result<Pattern> {
    effect.validate(width, height)?;
    let mut canvas = Canvas::new(width, height, Colour::WHITE)?;

    match effect {
        Effect::Diagonal {
            colours,
            angle,
            stripe_width,
        } => {
            diagonal::fill_bands(&mut canvas, colours, *stripe_width);
            let canvas = canvas.rotate(*angle);
            let geometry = diagonal::band_geometry(colours, *stripe_width, height);
            Ok(Pattern {
                canvas,
                geometry: Some(geometry),
                width,
                height,
            })
        }
        Effect::Wave {
            colours,
            wave_height,
        } => {
            wave::generate(&mut canvas, colours, *wave_height);
            Ok(Pattern {
                canvas,
                geometry: None,
                width,
                height,
            })
        }
        Effect::Graduated { base, stripes } => {
            graduated::generate(&mut canvas, *base, *stripes);
            Ok(Pattern {
                canvas,
                geometry: None,
                width,
                height,
            })
        }
        Effect::Blocks { colours, spacing } => {
            blocks::generate(&mut canvas, colours, *spacing);
            Ok(Pattern {
                canvas,
                geometry: None,
                width,
                height,
            })
        }
    }
}
