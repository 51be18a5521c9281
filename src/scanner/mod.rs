//! Single-pass tandem repeat detection.
//!
//! [`RepeatScanner`] consumes a symbol stream one byte at a time and reports
//! every maximal run of a 3..=9 symbol unit repeated back to back at least
//! twice. It never looks back further than its [`MAX_PATTERN_LEN`]-symbol
//! window and never buffers the input.
//!
//! # Per-symbol step
//! 1) Advance every live tracker. A tracker whose expected symbol does not
//!    match is retired: if it completed at least one extra cycle its run is
//!    recorded, and its multiples leave the redundancy index.
//! 2) Push the symbol into the window.
//! 3) For each length `3..=min(9, window len)`, in increasing order, take the
//!    suffix of that length. If the redundancy index does not contain it,
//!    start a tracker for it and insert it and its multiples (below
//!    [`COVER_LIMIT`]) into the index.
//!
//! Shorter lengths go first so a unit claims its own multiples before they are
//! considered in the same step. `AAGAAG` is never tracked while `AAG` is.
//!
//! # Invariants
//! - At most one live tracker per distinct pattern.
//! - A pattern is in the redundancy index iff it is a multiple of a live
//!   tracker's pattern (including the pattern itself).
//! - Live trackers are bounded by the number of distinct patterns that fit in
//!   the window, so per-symbol work is bounded regardless of input length.
//!
//! # Lifecycle
//! `finish` consumes the scanner, treating end of input as a mismatch for all
//! survivors. Feeding after `finish` is unrepresentable.

mod pattern;
mod tracker;

use ahash::{AHashMap, AHashSet};
use tracing::trace;

use crate::report::{RepeatKey, RepeatReport};
use crate::stdx::ByteRing;

pub use pattern::{CoveredVariants, Pattern};
use tracker::Tracker;

/// Shortest unit reported.
pub const MIN_PATTERN_LEN: usize = 3;
/// Longest unit reported; also the window size.
pub const MAX_PATTERN_LEN: usize = 9;
/// Multiples of a unit are added to the redundancy index while shorter than
/// this.
pub const COVER_LIMIT: usize = MAX_PATTERN_LEN + 1;

/// Streaming tandem repeat scanner.
///
/// ```
/// use tandem_repeats::RepeatScanner;
///
/// let mut scanner = RepeatScanner::new();
/// scanner.feed_bytes(b"GATCGATCGATC");
/// let report = scanner.finish();
/// assert_eq!(report.get(0, b"GATC"), Some(3));
/// ```
pub struct RepeatScanner {
    window: ByteRing,
    trackers: AHashMap<Pattern, Tracker>,
    covered: AHashSet<Pattern>,
    report: RepeatReport,
}

impl RepeatScanner {
    pub fn new() -> Self {
        Self {
            window: ByteRing::with_capacity(MAX_PATTERN_LEN),
            trackers: AHashMap::new(),
            covered: AHashSet::new(),
            report: RepeatReport::default(),
        }
    }

    /// Number of symbols fed so far.
    #[inline]
    pub fn position(&self) -> u64 {
        self.window.end_offset()
    }

    /// Number of trackers currently matching.
    pub fn live_trackers(&self) -> usize {
        self.trackers.len()
    }

    /// Processes one symbol.
    pub fn feed(&mut self, symbol: u8) {
        let covered = &mut self.covered;
        let report = &mut self.report;
        self.trackers.retain(|_, tracker| {
            if tracker.advance(symbol) {
                return true;
            }
            retire(tracker, covered, report);
            false
        });

        self.window.push_byte(symbol);
        self.spawn_candidates();
    }

    /// Processes `symbols` in order; equivalent to calling [`feed`](Self::feed)
    /// for each byte.
    pub fn feed_bytes(&mut self, symbols: &[u8]) {
        for &symbol in symbols {
            self.feed(symbol);
        }
    }

    /// Flushes every live tracker and returns all recorded repeats.
    pub fn finish(mut self) -> RepeatReport {
        let mut covered = std::mem::take(&mut self.covered);
        for (_, tracker) in self.trackers.drain() {
            retire(&tracker, &mut covered, &mut self.report);
        }
        debug_assert!(covered.is_empty());
        self.report
    }

    fn spawn_candidates(&mut self) {
        let end = self.window.end_offset();
        let longest = self.window.len().min(MAX_PATTERN_LEN);
        for len in MIN_PATTERN_LEN..=longest {
            let Some(pattern) = self
                .window
                .tail(len)
                .and_then(|(first, second)| Pattern::from_segments(first, second))
            else {
                break;
            };
            if self.covered.contains(&pattern) {
                continue;
            }

            let variants = CoveredVariants::of(pattern);
            self.covered.extend(variants.iter().copied());
            let prev = self
                .trackers
                .insert(pattern, Tracker::new(pattern, end - len as u64, variants));
            debug_assert!(prev.is_none(), "uncovered pattern {pattern} had a live tracker");
        }
    }
}

impl Default for RepeatScanner {
    fn default() -> Self {
        Self::new()
    }
}

/// Records a retiring tracker's run (if it repeated) and releases its
/// redundancy index entries.
fn retire(tracker: &Tracker, covered: &mut AHashSet<Pattern>, report: &mut RepeatReport) {
    if let Some(count) = tracker.repeat_count() {
        let key = RepeatKey::new(tracker.start(), tracker.pattern());
        trace!(start = key.start, pattern = %key.pattern, count, "repeat closed");
        report.record(key, count);
    }
    for variant in tracker.covered().iter() {
        covered.remove(variant);
    }
}

/// Scans an in-memory sequence.
pub fn scan(symbols: &[u8]) -> RepeatReport {
    let mut scanner = RepeatScanner::new();
    scanner.feed_bytes(symbols);
    scanner.finish()
}
