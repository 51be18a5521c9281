//! Tandem Repeat Scanner CLI
//!
//! Scans a DNA sequence given literally (`-s`) or in a file (`-f`, `-` for
//! stdin) and prints every tandem repeat with a 3 to 9 symbol unit.
//!
//! # Output Format
//!
//! By default a single JSON object on stdout, keyed by `<start>-<pattern>`
//! with the repeat count as value: `{"0-AAG":3}`. `--format=jsonl` prints one
//! `{"start":..,"pattern":..,"count":..}` object per line instead.
//!
//! With `--verbose`, a summary is logged to stderr:
//! `bytes=N symbols=N repeats=N elapsed_ms=N throughput_mib_s=N`
//!
//! # Exit Codes
//!
//! - `0`: Success (regardless of repeat count)
//! - `1`: Input could not be read or output could not be written
//! - `2`: Invalid arguments or no input given

use std::io;

use clap::Parser;
use tracing::info;

use tandem_repeats::cli::Cli;
use tandem_repeats::{scan_source, ScanError};

fn init_tracing(cli: &Cli) {
    // --quiet: off. --verbose: RUST_LOG if set, else info. Default: warn.
    let filter = if cli.quiet {
        tracing_subscriber::EnvFilter::new("off")
    } else if cli.verbose {
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into())
    } else {
        tracing_subscriber::EnvFilter::new("warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli);

    if let Err(e) = run(&cli) {
        eprintln!("error: {e}");
        std::process::exit(e.exit_code());
    }
}

fn run(cli: &Cli) -> Result<(), ScanError> {
    let source = cli.input_source()?;
    let outcome = scan_source(&source, &cli.scan_options())?;

    info!(
        bytes = outcome.bytes_read,
        symbols = outcome.symbols_fed,
        repeats = outcome.report.len(),
        elapsed_ms = outcome.elapsed.as_millis() as u64,
        throughput_mib_s = outcome.throughput_mib_s(),
        "scan complete"
    );

    outcome
        .report
        .write_to(cli.format.into(), io::stdout().lock())
}
