//! PNG output for canvases.
//!
//! Encoding happens fully in memory before anything touches the
//! filesystem, so a failed encode never leaves a partial file behind.

use std::io::Cursor;
use std::path::Path;

use image::{ImageBuffer, ImageFormat, RgbImage};

use crate::error::{Result, StripeError};
use crate::render::Canvas;

/// Encode a canvas as PNG bytes.
pub fn encode_png(canvas: &Canvas) -> Result<Vec<u8>> {
    let width = canvas.width() as u32;
    let height = canvas.height() as u32;

    let img: RgbImage = ImageBuffer::from_raw(width, height, canvas.to_rgb_buffer())
        .ok_or_else(|| StripeError::Parse {
            message: "Canvas buffer size does not match its dimensions".to_string(),
            help: None,
        })?;

    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|e| StripeError::Parse {
            message: format!("Failed to encode PNG: {}", e),
            help: None,
        })?;

    Ok(bytes)
}

/// Write a canvas to a PNG file.
pub fn write_png(canvas: &Canvas, path: &Path) -> Result<()> {
    let bytes = encode_png(canvas)?;
    std::fs::write(path, bytes).map_err(|e| StripeError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write PNG: {}", e),
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Point;
    use crate::types::Colour;
    use tempfile::tempdir;

    #[test]
    fn test_write_png_round_trip() {
        let mut canvas = Canvas::new(2, 2, Colour::WHITE).unwrap();
        canvas.fill_polygon(
            &[
                Point::new(0.0, 0.0),
                Point::new(1.0, 0.0),
                Point::new(1.0, 2.0),
                Point::new(0.0, 2.0),
            ],
            Colour::BLACK,
        );

        let dir = tempdir().unwrap();
        let path = dir.path().join("test.png");

        write_png(&canvas, &path).unwrap();
        assert!(path.exists());

        // Read back and verify
        let img = image::open(&path).unwrap().to_rgb8();
        assert_eq!(img.width(), 2);
        assert_eq!(img.height(), 2);
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0]);
        assert_eq!(img.get_pixel(1, 0).0, [255, 255, 255]);
    }

    #[test]
    fn test_encode_png_is_valid() {
        let canvas = Canvas::new(4, 3, Colour::rgb(255, 107, 107)).unwrap();
        let bytes = encode_png(&canvas).unwrap();

        let img = image::load_from_memory(&bytes).unwrap().to_rgb8();
        assert_eq!(img.width(), 4);
        assert_eq!(img.height(), 3);
        assert_eq!(img.get_pixel(2, 1).0, [255, 107, 107]);
    }
}
