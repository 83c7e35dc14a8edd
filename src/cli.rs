//! Argument handling for the `lsystem-raster` binary.

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Render an L-System description to PNG, one image per requested generation.
#[derive(Debug, Parser)]
#[command(name = "lsystem-raster", version, about)]
pub struct Args {
    /// Log progress while rewriting and rendering.
    #[arg(short, long)]
    pub verbose: bool,

    /// Rule-definition file (e.g. `koch.ls`).
    pub input: PathBuf,

    /// Comma separated generations to render. `-n` drops a generation listed earlier.
    #[arg(allow_hyphen_values = true)]
    pub generations: String,
}

/// Parses a generation list such as `1,2,5,-2` into an ascending set.
pub fn parse_generations(list: &str) -> Result<Vec<usize>> {
    let mut wanted = BTreeSet::new();
    for item in list.split(',').map(str::trim) {
        let value: i64 = item
            .parse()
            .with_context(|| format!("invalid generation {item:?}"))?;
        let generation = usize::try_from(value.unsigned_abs())
            .with_context(|| format!("generation {item:?} is out of range"))?;
        if value < 0 {
            if !wanted.remove(&generation) {
                bail!("cannot remove generation {generation}: it was not requested");
            }
        } else {
            wanted.insert(generation);
        }
    }
    if wanted.is_empty() {
        bail!("no generations requested");
    }
    Ok(wanted.into_iter().collect())
}

/// `koch.ls` becomes `koch.png`, or `koch_3.png` when several generations are written.
pub fn output_path(input: &Path, generation: usize, multiple: bool) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "lsystem".to_string());
    let name = if multiple {
        format!("{stem}_{generation}.png")
    } else {
        format!("{stem}.png")
    };
    input.with_file_name(name)
}

/// Formats a byte count with a binary unit suffix, e.g. `12K`.
pub fn human_size(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "K", "M", "G", "T"];
    let mut value = bytes;
    let mut unit = 0;
    while value >= 1024 && unit < UNITS.len() - 1 {
        value /= 1024;
        unit += 1;
    }
    format!("{value}{}", UNITS[unit])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generations_are_sorted_and_deduplicated() {
        assert_eq!(parse_generations("3,1,3,2").unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn negative_generation_removes_earlier_entry() {
        assert_eq!(parse_generations("1,2,4,-2").unwrap(), vec![1, 4]);
    }

    #[test]
    fn removing_unrequested_generation_fails() {
        assert!(parse_generations("1,-2").is_err());
    }

    #[test]
    fn empty_or_garbage_lists_fail() {
        assert!(parse_generations("2,-2").is_err());
        assert!(parse_generations("a").is_err());
        assert!(parse_generations("").is_err());
    }

    #[test]
    fn zero_is_a_valid_generation() {
        assert_eq!(parse_generations("0").unwrap(), vec![0]);
    }

    #[test]
    fn output_names_follow_input_stem() {
        let input = Path::new("shapes/koch.ls");
        assert_eq!(output_path(input, 3, false), PathBuf::from("shapes/koch.png"));
        assert_eq!(output_path(input, 3, true), PathBuf::from("shapes/koch_3.png"));
    }

    #[test]
    fn sizes_use_binary_units() {
        assert_eq!(human_size(512), "512B");
        assert_eq!(human_size(2048), "2K");
        assert_eq!(human_size(5 * 1024 * 1024), "5M");
    }
}
