//! Staggered blocks (effect 4).

use crate::render::{Canvas, Point};
use crate::types::Colour;

/// Fill staggered `spacing`-sized squares, one horizontal phase per colour.
///
/// Row bands start every `2 * spacing` pixels, so each band of squares is
/// followed by a band of background. Colour `i` is phase-shifted left by
/// `(i * spacing) mod (n * spacing)` and repeats every `n * spacing`;
/// squares clipped by the left or right edge are drawn partially.
pub fn generate(canvas: &mut Canvas, colours: &[Colour], spacing: u32) {
    let width = canvas.width() as i64;
    let height = canvas.height() as i64;
    let sp = spacing as i64;
    let period = colours.len() as i64 * sp;

    let mut y = 0;
    while y < height {
        for (i, &colour) in colours.iter().enumerate() {
            let offset = (i as i64 * sp) % period;
            let mut x = -offset;
            while x < width {
                let polygon = [
                    Point::new(x as f64, y as f64),
                    Point::new((x + sp) as f64, y as f64),
                    Point::new((x + sp) as f64, (y + sp) as f64),
                    Point::new(x as f64, (y + sp) as f64),
                ];
                canvas.fill_polygon(&polygon, colour);
                x += period;
            }
        }
        y += 2 * sp;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_alternating_squares() {
        let mut canvas = Canvas::new(80, 80, Colour::rgb(200, 200, 200)).unwrap();
        generate(&mut canvas, &[Colour::BLACK, Colour::WHITE], 20);

        // First row band: black square then white square, period 40
        assert_eq!(canvas.get(5, 5).unwrap(), Colour::BLACK);
        assert_eq!(canvas.get(25, 5).unwrap(), Colour::WHITE);
        assert_eq!(canvas.get(45, 5).unwrap(), Colour::BLACK);
        assert_eq!(canvas.get(65, 5).unwrap(), Colour::WHITE);
    }

    #[test]
    fn test_vertical_period_is_twice_spacing() {
        let bg = Colour::rgb(200, 200, 200);
        let mut canvas = Canvas::new(80, 80, bg).unwrap();
        generate(&mut canvas, &[Colour::BLACK, Colour::WHITE], 20);

        // Square bands at y = 0 and y = 40; background between
        assert_eq!(canvas.get(5, 5).unwrap(), Colour::BLACK);
        assert_eq!(canvas.get(5, 25).unwrap(), bg);
        assert_eq!(canvas.get(5, 45).unwrap(), Colour::BLACK);
        assert_eq!(canvas.get(5, 65).unwrap(), bg);
    }

    #[test]
    fn test_left_clipped_squares() {
        let bg = Colour::rgb(200, 200, 200);
        let mut canvas = Canvas::new(30, 10, bg).unwrap();
        let red = Colour::rgb(255, 0, 0);
        let blue = Colour::rgb(0, 0, 255);
        let green = Colour::rgb(0, 255, 0);
        generate(&mut canvas, &[red, blue, green], 10);

        // Colour 1 starts at x = -10, its clipped square reappears at x = 20
        assert_eq!(canvas.get(5, 5).unwrap(), red);
        assert_eq!(canvas.get(25, 5).unwrap(), blue);
        // Colour 2 starts at x = -20, reappears at x = 10
        assert_eq!(canvas.get(15, 5).unwrap(), green);
    }
}
