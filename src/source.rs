//! Input sources and the streaming read loop that drives the scanner.
//!
//! Input is read in fixed-size chunks and fed to a [`RepeatScanner`] as it
//! arrives, so memory use does not depend on input length.

use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::error::ScanError;
use crate::report::RepeatReport;
use crate::scanner::RepeatScanner;

/// Read chunk size.
pub const CHUNK_LEN: usize = 64 * 1024;

/// Where the sequence comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputSource {
    /// Literal sequence given on the command line.
    Inline(String),
    /// File on disk.
    File(PathBuf),
    Stdin,
}

impl InputSource {
    /// Picks the source from the `--string` / `--file` arguments. A file path
    /// of `-` means stdin.
    pub fn resolve(string: Option<String>, file: Option<PathBuf>) -> Result<Self, ScanError> {
        match (string, file) {
            (Some(s), _) if !s.is_empty() => Ok(Self::Inline(s)),
            (_, Some(path)) if path.as_os_str() == "-" => Ok(Self::Stdin),
            (_, Some(path)) => Ok(Self::File(path)),
            _ => Err(ScanError::NoInput),
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ScanOptions {
    /// Drop ASCII whitespace before it reaches the scanner. Offsets then count
    /// only the symbols actually fed.
    pub skip_whitespace: bool,
}

/// Result of scanning one source.
#[derive(Debug)]
pub struct ScanOutcome {
    pub report: RepeatReport,
    pub bytes_read: u64,
    pub symbols_fed: u64,
    pub elapsed: Duration,
}

impl ScanOutcome {
    pub fn throughput_mib_s(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            (self.bytes_read as f64 / (1024.0 * 1024.0)) / secs
        } else {
            0.0
        }
    }
}

/// Opens `source` and scans it to completion.
pub fn scan_source(source: &InputSource, options: &ScanOptions) -> Result<ScanOutcome, ScanError> {
    match source {
        InputSource::Inline(seq) => {
            debug!(len = seq.len(), "scanning inline sequence");
            scan_reader(seq.as_bytes(), options).map_err(ScanError::Read)
        }
        InputSource::File(path) => {
            debug!(path = %path.display(), "scanning file");
            let file = File::open(path).map_err(|source| ScanError::Open {
                path: path.clone(),
                source,
            })?;
            scan_reader(file, options).map_err(ScanError::Read)
        }
        InputSource::Stdin => {
            debug!("scanning stdin");
            scan_reader(io::stdin().lock(), options).map_err(ScanError::Read)
        }
    }
}

/// Streams `reader` through a fresh scanner.
pub fn scan_reader<R: Read>(mut reader: R, options: &ScanOptions) -> io::Result<ScanOutcome> {
    let start = Instant::now();
    let mut scanner = RepeatScanner::new();
    let mut buf = vec![0u8; CHUNK_LEN];
    let mut bytes_read = 0u64;

    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        bytes_read += n as u64;

        let chunk = &buf[..n];
        if options.skip_whitespace {
            for &b in chunk.iter().filter(|b| !b.is_ascii_whitespace()) {
                scanner.feed(b);
            }
        } else {
            scanner.feed_bytes(chunk);
        }
    }

    let symbols_fed = scanner.position();
    let report = scanner.finish();
    Ok(ScanOutcome {
        report,
        bytes_read,
        symbols_fed,
        elapsed: start.elapsed(),
    })
}
