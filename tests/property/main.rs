//! Property-based tests for the repeat scanner.
//!
//! Run with: `cargo test --test property`
