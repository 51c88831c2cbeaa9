//! The four per-effect generation commands.
//!
//! Each command parses its colours, builds an `Effect`, and hands off to a
//! shared render-and-write path. Parameter validation happens inside
//! `patterns::generate`; the CLI only shapes the input.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::error::{Result, StripeError};
use crate::output::Printer;
use crate::patterns::{self, Pattern};
use crate::render::write_png;
use crate::types::{parse_palette, Colour, Effect, Format};
use crate::vector::{write_svg, VectorDocument};

/// Arguments shared by all generation commands.
#[derive(Args, Debug)]
pub struct OutputArgs {
    /// Canvas width in pixels
    #[arg(long, default_value = "800")]
    pub width: u32,

    /// Canvas height in pixels
    #[arg(long, default_value = "600")]
    pub height: u32,

    /// Output directory
    #[arg(long, short, default_value = "output")]
    pub output: PathBuf,

    /// Output file stem (defaults to the effect name)
    #[arg(long)]
    pub name: Option<String>,

    /// Which files to produce
    #[arg(long, value_enum, default_value = "png")]
    pub format: Format,
}

/// Generate diagonal bands rotated to an angle
#[derive(Args, Debug)]
pub struct DiagonalArgs {
    /// Stripe colours, comma-separated hex
    #[arg(long, default_value = "#ff6b6b,#4ecdc4,#45b7d1")]
    pub colours: String,

    /// Rotation angle in degrees (counter-clockwise)
    #[arg(long, default_value = "45")]
    pub angle: f64,

    /// Stripe width in pixels
    #[arg(long, default_value = "40")]
    pub stripe_width: u32,

    #[command(flatten)]
    pub out: OutputArgs,
}

/// Generate sinusoidal wave bands
#[derive(Args, Debug)]
pub struct WaveArgs {
    /// Stripe colours, comma-separated hex
    #[arg(long, default_value = "#ffd93d,#ff6b6b,#4ecdc4")]
    pub colours: String,

    /// Wave amplitude in pixels
    #[arg(long, default_value = "50")]
    pub wave_height: u32,

    #[command(flatten)]
    pub out: OutputArgs,
}

/// Generate saturation-graded vertical bands
#[derive(Args, Debug)]
pub struct GraduatedArgs {
    /// Base colour as hex
    #[arg(long, default_value = "#ff6b6b")]
    pub base: String,

    /// Number of bands
    #[arg(long, default_value = "10")]
    pub stripes: u32,

    #[command(flatten)]
    pub out: OutputArgs,
}

/// Generate staggered square blocks
#[derive(Args, Debug)]
pub struct BlocksArgs {
    /// Block colours, comma-separated hex
    #[arg(long, default_value = "#6c5b7b,#c06c84,#f67280")]
    pub colours: String,

    /// Block size and gap in pixels
    #[arg(long, default_value = "20")]
    pub spacing: u32,

    #[command(flatten)]
    pub out: OutputArgs,
}

pub fn run_diagonal(args: DiagonalArgs) -> Result<()> {
    let effect = Effect::Diagonal {
        colours: parse_palette(&args.colours)?,
        angle: args.angle,
        stripe_width: args.stripe_width,
    };
    render(&effect, &args.out)
}

pub fn run_wave(args: WaveArgs) -> Result<()> {
    let effect = Effect::Wave {
        colours: parse_palette(&args.colours)?,
        wave_height: args.wave_height,
    };
    render(&effect, &args.out)
}

pub fn run_graduated(args: GraduatedArgs) -> Result<()> {
    let effect = Effect::Graduated {
        base: Colour::from_hex(&args.base)?,
        stripes: args.stripes,
    };
    render(&effect, &args.out)
}

pub fn run_blocks(args: BlocksArgs) -> Result<()> {
    let effect = Effect::Blocks {
        colours: parse_palette(&args.colours)?,
        spacing: args.spacing,
    };
    render(&effect, &args.out)
}

fn render(effect: &Effect, out: &OutputArgs) -> Result<()> {
    let printer = Printer::new();
    let name = out.name.clone().unwrap_or_else(|| effect.name().to_string());

    printer.status(
        "Generating",
        &format!("{} ({}x{})", name, out.width, out.height),
    );
    let pattern = patterns::generate(effect, out.width, out.height)?;

    write_outputs(&pattern, &out.output, &name, out.format, &printer)
}

/// Write the requested files for one generated pattern.
pub(crate) fn write_outputs(
    pattern: &Pattern,
    output: &PathBuf,
    name: &str,
    format: Format,
    printer: &Printer,
) -> Result<()> {
    if !output.exists() {
        fs::create_dir_all(output).map_err(|e| StripeError::Io {
            path: output.clone(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    if format.wants_png() {
        let path = output.join(format!("{}.png", name));
        write_png(&pattern.canvas, &path)?;
        printer.status("Wrote", &path.display().to_string());
    }

    if format.wants_svg() {
        let path = output.join(format!("{}.svg", name));
        let doc = VectorDocument::from_pattern(pattern);
        write_svg(&doc, &path)?;
        printer.status("Wrote", &path.display().to_string());
    }

    Ok(())
}
