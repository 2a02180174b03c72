//! `walze` — converts messages with a configured rotor machine.
//!
//! **Usage:**
//! ```text
//! walze CONFIG [INPUT] [OUTPUT]
//! ```
//!
//! Reads the machine description from CONFIG, then processes INPUT
//! (default: standard input) line by line. Settings lines reconfigure the
//! machine; message lines come back converted, in five-symbol groups, on
//! OUTPUT (default: standard output).
//!
//! Any failure prints `Error: <message>` and exits nonzero.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use walze_session::{run, MachineConfig};

/// Convert messages with an Enigma-style rotor machine.
#[derive(Parser)]
#[command(
    name = "walze",
    about = "Convert messages with an Enigma-style rotor machine"
)]
struct Args {
    /// Machine description file.
    config: PathBuf,

    /// Input file (default: standard input).
    input: Option<PathBuf>,

    /// Output file (default: standard output).
    output: Option<PathBuf>,
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

    let input: Box<dyn BufRead> = match &args.input {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("could not open {}", path.display()))?,
        )),
        None => Box::new(io::stdin().lock()),
    };
    let mut output: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("could not open {}", path.display()))?,
        )),
        None => Box::new(io::stdout().lock()),
    };

    run(&config, input, &mut output)?;
    output.flush()?;
    Ok(())
}
