//! Integration tests for tandem-repeats sources, encodings, and CLI.
//!
//! Run with: `cargo test --test integration`

mod cli;
mod file_sources;
