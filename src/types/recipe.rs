//! Batch recipe files.
//!
//! A recipe is a JSON document listing generation jobs, so a whole set of
//! patterns can be rebuilt with one command.
//!
//! ```json
//! {
//!   "jobs": [
//!     {
//!       "name": "hero-banner",
//!       "effect": "wave",
//!       "colours": ["#ffd93d", "#ff6b6b", "#4ecdc4"],
//!       "wave_height": 50,
//!       "width": 800,
//!       "height": 600,
//!       "format": "both"
//!     }
//!   ]
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, StripeError};
use crate::types::Effect;

/// Which output files a job produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Png,
    Svg,
    Both,
}

impl Format {
    pub fn wants_png(self) -> bool {
        matches!(self, Format::Png | Format::Both)
    }

    pub fn wants_svg(self) -> bool {
        matches!(self, Format::Svg | Format::Both)
    }
}

/// One generation job within a recipe.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    /// Output file stem (`<name>.png` / `<name>.svg`).
    pub name: String,

    #[serde(flatten)]
    pub effect: Effect,

    #[serde(default = "default_width")]
    pub width: u32,

    #[serde(default = "default_height")]
    pub height: u32,

    #[serde(default = "default_format")]
    pub format: Format,
}

fn default_width() -> u32 {
    800
}

fn default_height() -> u32 {
    600
}

fn default_format() -> Format {
    Format::Png
}

/// A parsed recipe file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    pub jobs: Vec<Job>,
}

impl Recipe {
    /// Parse a recipe from JSON source.
    pub fn from_json(source: &str) -> Result<Self> {
        serde_json::from_str(source).map_err(|e| StripeError::Parse {
            message: format!("Invalid recipe: {}", e),
            help: Some("Recipes are JSON: {\"jobs\": [{\"name\": ..., \"effect\": ...}]}".to_string()),
        })
    }

    /// Load and parse a recipe file.
    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path).map_err(|e| StripeError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read recipe: {}", e),
        })?;
        Self::from_json(&source)
    }

    /// Validate every job before any of them renders.
    pub fn validate(&self) -> Result<()> {
        for job in &self.jobs {
            job.effect.validate(job.width, job.height)?;
        }
        Ok(())
    }
}
