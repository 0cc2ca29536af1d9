//! # Attestr CLI
//!
//! Command-line interface for inspecting DLC numeric-outcome digit
//! encodings: decompose and recompose outcome values, compute the digit
//! prefixes covering a payout range, and canonicalize a payout curve.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use attestr_core::{
    compose_value, decompose_value, group_by_ignoring_digits, group_outcomes, max_ranges,
    RangeOutcome,
};
use clap::{Parser, Subcommand};
use colored::*;

#[derive(Parser)]
#[command(name = "attestr")]
#[command(about = "DLC numeric-outcome digit encoding toolkit")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decompose an outcome value into its fixed-width digit vector
    Decompose {
        /// Outcome value
        value: u64,
        /// Numeral base
        #[arg(short, long, default_value = "2")]
        base: u64,
        /// Digit width (one oracle nonce per digit)
        #[arg(short, long)]
        digits: usize,
    },
    /// Recompose a digit vector into its outcome value
    Compose {
        /// Digits, most significant first
        digits: Vec<u64>,
        /// Numeral base
        #[arg(short, long, default_value = "2")]
        base: u64,
    },
    /// Compute the digit prefixes covering a closed outcome range
    Groups {
        /// Lower bound, inclusive
        start: u64,
        /// Upper bound, inclusive
        end: u64,
        /// Numeral base
        #[arg(short, long, default_value = "2")]
        base: u64,
        /// Digit width (one oracle nonce per digit)
        #[arg(short, long)]
        digits: usize,
        /// Emit machine-readable JSON instead of the table
        #[arg(long)]
        json: bool,
    },
    /// Canonicalize a payout curve so it tiles the full outcome domain
    Normalize {
        /// JSON file with the RangeOutcome list (stdin when omitted)
        #[arg(short, long)]
        file: Option<PathBuf>,
        /// Numeral base
        #[arg(short, long, default_value = "2")]
        base: u64,
        /// Number of oracle nonces
        #[arg(short, long)]
        nonces: usize,
        /// Also print the digit prefixes per payout branch
        #[arg(long)]
        groups: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Decompose {
            value,
            base,
            digits,
        } => {
            let vector = decompose_value(value, base, digits)?;
            println!(
                "{}: {} over {} base-{} digits",
                "Decompose".green().bold(),
                value.to_string().cyan(),
                digits.to_string().yellow(),
                base.to_string().yellow()
            );
            println!("{}: {}", "Digits".green().bold(), format_digits(&vector));
        }

        Commands::Compose { digits, base } => {
            let value = compose_value(&digits, base);
            println!(
                "{}: {} (base {})",
                "Compose".green().bold(),
                format_digits(&digits),
                base.to_string().yellow()
            );
            println!("{}: {}", "Value".green().bold(), value.to_string().cyan());
        }

        Commands::Groups {
            start,
            end,
            base,
            digits,
            json,
        } => {
            let groups = group_by_ignoring_digits(start, end, base, digits)?;
            if json {
                println!("{}", serde_json::to_string(&groups)?);
            } else {
                println!(
                    "{}: [{}, {}] over {} base-{} digits",
                    "Range".green().bold(),
                    start.to_string().cyan(),
                    end.to_string().cyan(),
                    digits.to_string().yellow(),
                    base.to_string().yellow()
                );
                println!(
                    "{}: {} prefixes",
                    "Groups".green().bold(),
                    groups.len().to_string().yellow()
                );
                for group in &groups {
                    println!("  {}", format_digits(group));
                }
            }
        }

        Commands::Normalize {
            file,
            base,
            nonces,
            groups,
        } => {
            let raw = match file {
                Some(path) => std::fs::read_to_string(&path)
                    .with_context(|| format!("failed to read {}", path.display()))?,
                None => {
                    let mut buf = String::new();
                    std::io::stdin()
                        .read_to_string(&mut buf)
                        .context("failed to read stdin")?;
                    buf
                }
            };
            let outcomes: Vec<RangeOutcome> =
                serde_json::from_str(&raw).context("invalid RangeOutcome list")?;

            if groups {
                let branches = group_outcomes(&outcomes, base, nonces)?;
                println!("{}", serde_json::to_string_pretty(&branches)?);
            } else {
                let tiled = max_ranges(&outcomes, base, nonces)?;
                println!("{}", serde_json::to_string_pretty(tiled.as_ref())?);
            }
        }
    }

    Ok(())
}

/// Render a digit vector the way it appears in contract descriptors.
fn format_digits(digits: &[u64]) -> String {
    let inner = digits
        .iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{inner}]").cyan().to_string()
}
