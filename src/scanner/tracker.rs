//! Per-pattern match state.

use super::pattern::{CoveredVariants, Pattern};

/// Matches incoming symbols against one candidate periodic unit.
///
/// A tracker is created right after the first occurrence of `pattern` ends,
/// so `matches` counts the *additional* full cycles seen since then. The
/// pattern therefore occurs `matches + 1` times back to back.
///
/// # Invariants
/// - `cursor < pattern.len()`.
/// - `covered` holds exactly the entries this tracker owns in the scanner's
///   redundancy index.
#[derive(Debug)]
pub(crate) struct Tracker {
    pattern: Pattern,
    start: u64,
    matches: u64,
    cursor: u8,
    covered: CoveredVariants,
}

impl Tracker {
    pub(crate) fn new(pattern: Pattern, start: u64, covered: CoveredVariants) -> Self {
        Self {
            pattern,
            start,
            matches: 0,
            cursor: 0,
            covered,
        }
    }

    /// Advances the tracker with the next symbol.
    ///
    /// Returns `false` on a mismatch; the tracker must then be retired. Its
    /// state is left untouched so the caller can still read the final count.
    #[inline]
    pub(crate) fn advance(&mut self, symbol: u8) -> bool {
        if symbol != self.pattern.at(self.cursor as usize) {
            return false;
        }
        self.cursor += 1;
        if self.cursor as usize == self.pattern.len() {
            self.matches += 1;
            self.cursor = 0;
        }
        true
    }

    /// Total consecutive occurrences, or `None` if the pattern never repeated.
    #[inline]
    pub(crate) fn repeat_count(&self) -> Option<u64> {
        (self.matches >= 1).then(|| self.matches + 1)
    }

    pub(crate) fn pattern(&self) -> Pattern {
        self.pattern
    }

    pub(crate) fn start(&self) -> u64 {
        self.start
    }

    pub(crate) fn covered(&self) -> &CoveredVariants {
        &self.covered
    }
}
