//! Errors surfaced by the input and output layers around the scanner.
//!
//! The scanner itself cannot fail: every byte is a valid symbol.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Exit code for runtime failures (unreadable input, broken output).
pub const EXIT_ERROR: i32 = 1;
/// Exit code for usage errors, matching clap's own.
pub const EXIT_USAGE: i32 = 2;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("please specify a DNA sequence (-s) or file name (-f)")]
    NoInput,

    #[error("cannot open file {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("read failed: {0}")]
    Read(#[source] io::Error),

    #[error("cannot encode results: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("cannot write results: {0}")]
    Write(#[source] io::Error),
}

impl ScanError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NoInput => EXIT_USAGE,
            _ => EXIT_ERROR,
        }
    }
}
