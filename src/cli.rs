//! Command-line arguments.
//!
//! ```text
//! tandem-repeats -s <SEQUENCE> [OPTIONS]
//! tandem-repeats -f <FILE|-> [OPTIONS]
//! ```

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::report::Format;
use crate::source::{InputSource, ScanOptions};
use crate::ScanError;

#[derive(Debug, Parser)]
#[command(
    name = "tandem-repeats",
    about = "Report tandem repeats (3-9 symbol units) in a DNA sequence",
    version
)]
pub struct Cli {
    /// DNA sequence to scan
    #[arg(short = 's', long = "string", value_name = "SEQUENCE", conflicts_with = "file")]
    pub string: Option<String>,

    /// File containing a DNA sequence ("-" for stdin)
    #[arg(short = 'f', long = "file", value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Ignore ASCII whitespace (line breaks in wrapped sequence files)
    #[arg(long)]
    pub skip_whitespace: bool,

    /// Log a summary and per-source diagnostics to stderr
    #[arg(long, short = 'v', conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress all logging
    #[arg(long, short = 'q', conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Single object keyed by "<start>-<pattern>"
    Json,
    /// One object per repeat per line
    Jsonl,
}

impl From<OutputFormat> for Format {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Json => Format::Json,
            OutputFormat::Jsonl => Format::Jsonl,
        }
    }
}

impl Cli {
    pub fn input_source(&self) -> Result<InputSource, ScanError> {
        InputSource::resolve(self.string.clone(), self.file.clone())
    }

    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            skip_whitespace: self.skip_whitespace,
        }
    }
}
