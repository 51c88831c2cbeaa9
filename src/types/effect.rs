//! Per-effect parameter records and pre-generation validation.
//!
//! An `Effect` is built once per request and validated before any generator
//! runs; the generators themselves assume valid input.

use serde::{Deserialize, Serialize};

use crate::error::{Result, StripeError};
use crate::types::Colour;

/// Parameters for one pattern generation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "effect", rename_all = "kebab-case")]
pub enum Effect {
    /// Diagonal bands: slanted parallelograms rotated as a whole.
    Diagonal {
        colours: Vec<Colour>,
        angle: f64,
        stripe_width: u32,
    },

    /// Sinusoidal wave bands across the canvas width.
    Wave { colours: Vec<Colour>, wave_height: u32 },

    /// Vertical bands of one hue with increasing saturation.
    Graduated { base: Colour, stripes: u32 },

    /// Staggered square blocks, one phase per palette colour.
    Blocks { colours: Vec<Colour>, spacing: u32 },
}

impl Effect {
    /// Short name used for status output and default file names.
    pub fn name(&self) -> &'static str {
        match self {
            Effect::Diagonal { .. } => "diagonal",
            Effect::Wave { .. } => "wave",
            Effect::Graduated { .. } => "graduated",
            Effect::Blocks { .. } => "blocks",
        }
    }

    /// Check every parameter against the target canvas size.
    ///
    /// All validation happens here, before generation; a passing `Effect`
    /// cannot fail mid-generation.
    pub fn validate(&self, width: u32, height: u32) -> Result<()> {
        if width == 0 || height == 0 {
            return Err(StripeError::InvalidDimensions { width, height });
        }

        match self {
            Effect::Diagonal {
                colours,
                stripe_width,
                ..
            } => {
                require_palette(colours)?;
                require_positive(*stripe_width, "stripe width")?;
            }
            Effect::Wave {
                colours,
                wave_height,
            } => {
                require_palette(colours)?;
                require_positive(*wave_height, "wave height")?;
                // Band width is width / (colours * 2), truncated; a zero
                // band width would never advance across the canvas.
                if (width as usize) < colours.len() * 2 {
                    return Err(StripeError::InvalidParameter {
                        message: format!(
                            "canvas width {} is too small for {} wave colours",
                            width,
                            colours.len()
                        ),
                        help: Some("Width must be at least twice the colour count".to_string()),
                    });
                }
            }
            Effect::Graduated { stripes, .. } => {
                require_positive(*stripes, "stripe count")?;
            }
            Effect::Blocks { colours, spacing } => {
                require_palette(colours)?;
                require_positive(*spacing, "spacing")?;
            }
        }

        Ok(())
    }
}

fn require_palette(colours: &[Colour]) -> Result<()> {
    if colours.is_empty() {
        return Err(StripeError::InvalidParameter {
            message: "colour palette is empty".to_string(),
            help: Some("Provide at least one colour, e.g. --colours '#ff6b6b'".to_string()),
        });
    }
    Ok(())
}

fn require_positive(value: u32, what: &str) -> Result<()> {
    if value == 0 {
        return Err(StripeError::InvalidParameter {
            message: format!("{} must be greater than zero", what),
            help: None,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palette() -> Vec<Colour> {
        vec![Colour::rgb(255, 107, 107), Colour::rgb(78, 205, 196)]
    }

    #[test]
    fn test_validate_accepts_defaults() {
        let effects = [
            Effect::Diagonal {
                colours: palette(),
                angle: 45.0,
                stripe_width: 40,
            },
            Effect::Wave {
                colours: palette(),
                wave_height: 50,
            },
            Effect::Graduated {
                base: Colour::rgb(255, 107, 107),
                stripes: 10,
            },
            Effect::Blocks {
                colours: palette(),
                spacing: 20,
            },
        ];
        for effect in effects {
            effect.validate(800, 600).unwrap();
        }
    }

    #[test]
    fn test_validate_rejects_zero_dimensions() {
        let effect = Effect::Graduated {
            base: Colour::BLACK,
            stripes: 4,
        };
        assert!(matches!(
            effect.validate(0, 600),
            Err(StripeError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            effect.validate(800, 0),
            Err(StripeError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_empty_palette() {
        let effect = Effect::Blocks {
            colours: vec![],
            spacing: 20,
        };
        assert!(matches!(
            effect.validate(800, 600),
            Err(StripeError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_zero_knobs() {
        let zero_width = Effect::Diagonal {
            colours: palette(),
            angle: 45.0,
            stripe_width: 0,
        };
        let zero_stripes = Effect::Graduated {
            base: Colour::BLACK,
            stripes: 0,
        };
        assert!(zero_width.validate(800, 600).is_err());
        assert!(zero_stripes.validate(800, 600).is_err());
    }

    #[test]
    fn test_validate_wave_needs_room_for_bands() {
        let effect = Effect::Wave {
            colours: palette(),
            wave_height: 10,
        };
        // 2 colours need width >= 4
        assert!(effect.validate(3, 100).is_err());
        effect.validate(4, 100).unwrap();
    }

    #[test]
    fn test_effect_deserializes_from_json() {
        let effect: Effect = serde_json::from_str(
            r##"{"effect": "diagonal", "colours": ["#ff6b6b"], "angle": 30.0, "stripe_width": 16}"##,
        )
        .unwrap();
        assert_eq!(effect.name(), "diagonal");

        let bad: std::result::Result<Effect, _> = serde_json::from_str(
            r##"{"effect": "graduated", "base": "#FFF", "stripes": 4}"##,
        );
        assert!(bad.is_err());
    }
}
