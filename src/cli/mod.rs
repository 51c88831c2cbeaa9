pub mod batch;
pub mod completions;
pub mod generate;

use clap::{Parser, Subcommand};

/// stripegen - stripe pattern image generator
#[derive(Parser, Debug)]
#[command(name = "stripegen")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate diagonal bands rotated to an angle
    Diagonal(generate::DiagonalArgs),

    /// Generate sinusoidal wave bands
    Wave(generate::WaveArgs),

    /// Generate saturation-graded vertical bands from one base colour
    Graduated(generate::GraduatedArgs),

    /// Generate staggered square blocks
    Blocks(generate::BlocksArgs),

    /// Render every job in a JSON recipe file
    Batch(batch::BatchArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
