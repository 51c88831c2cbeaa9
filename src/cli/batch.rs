//! Batch command: render every job in a recipe file.

use std::path::PathBuf;

use clap::Args;

use crate::error::Result;
use crate::output::{plural, Printer};
use crate::patterns;
use crate::types::Recipe;

use super::generate::write_outputs;

/// Render every job in a JSON recipe file
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Recipe file to process
    pub recipe: PathBuf,

    /// Output directory
    #[arg(long, short, default_value = "output")]
    pub output: PathBuf,
}

pub fn run(args: BatchArgs) -> Result<()> {
    let printer = Printer::new();

    let recipe = Recipe::load(&args.recipe)?;
    // Reject the whole recipe up front rather than failing halfway through
    recipe.validate()?;

    printer.info(
        "Loaded",
        &format!(
            "{} from {}",
            plural(recipe.jobs.len(), "job", "jobs"),
            args.recipe.display()
        ),
    );

    for job in &recipe.jobs {
        printer.status(
            "Generating",
            &format!("{} ({}x{})", job.name, job.width, job.height),
        );
        let pattern = patterns::generate(&job.effect, job.width, job.height)?;
        write_outputs(&pattern, &args.output, &job.name, job.format, &printer)?;
    }

    printer.status(
        "Finished",
        &plural(recipe.jobs.len(), "job", "jobs"),
    );
    Ok(())
}
