use clap::Parser;
use miette::Result;
use stripegen::cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Diagonal(args) => stripegen::cli::generate::run_diagonal(args)?,
        Commands::Wave(args) => stripegen::cli::generate::run_wave(args)?,
        Commands::Graduated(args) => stripegen::cli::generate::run_graduated(args)?,
        Commands::Blocks(args) => stripegen::cli::generate::run_blocks(args)?,
        Commands::Batch(args) => stripegen::cli::batch::run(args)?,
        Commands::Completions(args) => stripegen::cli::completions::run(args)?,
    }

    Ok(())
}
