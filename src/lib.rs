//! Single-pass tandem repeat scanner for symbol streams.
//!
//! ## Scope
//! This crate scans a byte stream (typically a DNA sequence over `ACGT`, though
//! nothing depends on the alphabet) for tandem repeats: a unit of 3 to 9
//! symbols that occurs two or more times back to back. Each maximal run is
//! reported by the offset of its first symbol, its unit, and the number of
//! consecutive occurrences.
//!
//! ## Key invariants
//! - Input is consumed strictly in order, one symbol at a time, and never
//!   re-read. Only the last 9 symbols are retained.
//! - One tracker per distinct live unit; multiples of a live unit (`AAGAAG`
//!   for `AAG`) are suppressed so a periodicity is reported once, by its
//!   shortest unit.
//! - Per-symbol work is bounded by the window size, independent of input
//!   length.
//!
//! ## Flow
//! `InputSource -> scan_reader (64 KiB chunks) -> RepeatScanner::feed -> finish -> RepeatReport -> JSON`
//!
//! ## Notable entry points
//! - [`RepeatScanner`]: `feed` / `feed_bytes` / `finish`.
//! - [`scan`]: one-shot scan of an in-memory slice.
//! - [`source::scan_source`]: stream a literal, file, or stdin through a scanner.
//! - [`RepeatReport`]: results, with [`Format::Json`] and [`Format::Jsonl`]
//!   encodings.

pub mod cli;
pub mod error;
pub mod report;
pub mod scanner;
pub mod source;
pub mod stdx;

pub use error::ScanError;
pub use report::{Format, RepeatKey, RepeatReport};
pub use scanner::{
    scan, CoveredVariants, Pattern, RepeatScanner, COVER_LIMIT, MAX_PATTERN_LEN, MIN_PATTERN_LEN,
};
pub use source::{scan_reader, scan_source, InputSource, ScanOptions, ScanOutcome};
