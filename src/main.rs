mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use lsystem_raster::{Configuration, LSystem};
use std::fs;

fn main() -> Result<()> {
    let args = cli::Args::parse();

    let log_level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(log_level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let generations = cli::parse_generations(&args.generations)?;
    let text = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let config: Configuration = text
        .parse()
        .with_context(|| format!("failed to load {}", args.input.display()))?;

    let multiple = generations.len() > 1;
    let mut system = LSystem::new(config);
    for generation in generations {
        let canvas = system.render_generation(generation)?;
        let output = cli::output_path(&args.input, generation, multiple);
        canvas
            .into_image()
            .save(&output)
            .with_context(|| format!("failed to write {}", output.display()))?;

        let size = fs::metadata(&output)
            .with_context(|| format!("failed to stat {}", output.display()))?
            .len();
        println!("Wrote out {} to {}", cli::human_size(size), output.display());
    }

    Ok(())
}
