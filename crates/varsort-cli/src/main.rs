//! `varsort` — sorts a keyed variable-length record file by key

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;
use varsort_format::{read_records, sort_records, write_records};

const USAGE: &str = "Usage: varsort -i inputfile -o outputfile";

// The accepted surface is exactly `-i` and `-o`; clap's auto help and
// version flags are disabled so they fall through to the usage path
// like any other unknown flag.
#[derive(Parser)]
#[command(
    name = "varsort",
    about = "Sorts a keyed variable-length record file by key, ascending",
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Cli {
    /// Input record file
    #[arg(short = 'i', value_name = "inputfile")]
    input: PathBuf,

    /// Sorted output record file (created or truncated)
    #[arg(short = 'o', value_name = "outputfile")]
    output: PathBuf,
}

fn main() -> ExitCode {
    // Any deviation from the two mandatory flags is the one-line usage
    // contract: message on stderr, exit status 1.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(_) => {
            eprintln!("{USAGE}");
            return ExitCode::from(1);
        }
    };

    // Logging is configured through RUST_LOG so the flag surface stays
    // exactly `-i` / `-o`.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::from(1)
        }
    }
}

/// Reader → sorter → writer, in strict sequence.
fn run(cli: &Cli) -> varsort_format::Result<()> {
    let mut records = read_records(&cli.input)?;
    sort_records(&mut records);
    write_records(&cli.output, &records)?;
    info!(
        "sorted {} records from {} into {}",
        records.len(),
        cli.input.display(),
        cli.output.display()
    );
    Ok(())
}
