//! `walze-inspect` — reports what a machine description declares.
//!
//! **Usage:**
//! ```text
//! walze-inspect CONFIG [--json]
//! ```
//!
//! Parses and builds the description, then prints the alphabet, the slot
//! geometry, and the rotor inventory. `--json` emits the same summary as
//! JSON for tooling.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::fs;
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use walze_session::{MachineConfig, MachineSummary, OutputCase};

/// Report the machine a description file declares.
#[derive(Parser)]
#[command(
    name = "walze-inspect",
    about = "Report the machine a description file declares"
)]
struct Args {
    /// Machine description file.
    config: PathBuf,

    /// Emit the summary as JSON.
    #[arg(long)]
    json: bool,
}

fn main() {
    if let Err(err) = run_cli() {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

fn run_cli() -> Result<()> {
    let args = Args::parse();

    let description = fs::read_to_string(&args.config)
        .with_context(|| format!("could not open {}", args.config.display()))?;
    let config = MachineConfig::parse(&description)?;
    let machine = config.build()?;
    let summary = MachineSummary::new(&machine, config.output_case);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    let case = match summary.output {
        OutputCase::Upper => "uppercase",
        OutputCase::Lower => "lowercase",
    };
    println!("alphabet: {} ({} symbols)", summary.alphabet, summary.size);
    println!("slots:    {} ({} pawls)", summary.num_rotors, summary.num_pawls);
    println!("output:   {case}");
    println!();
    for rotor in &summary.rotors {
        let notches = if rotor.notches.is_empty() {
            String::new()
        } else {
            format!("notches {}", rotor.notches)
        };
        println!(
            "{:<8} {:<11} {:<11} {}",
            rotor.name, rotor.kind, notches, rotor.wiring
        );
    }
    Ok(())
}
