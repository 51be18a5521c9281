//! Inline candidate substrings.
//!
//! Every candidate the scanner considers, and every multiple of a candidate
//! that fits in the window, is between [`MIN_PATTERN_LEN`] and
//! [`MAX_PATTERN_LEN`] bytes long. `Pattern` stores those bytes inline so that
//! tracker keys and redundancy-index entries never allocate.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Serialize, Serializer};

use super::{COVER_LIMIT, MAX_PATTERN_LEN, MIN_PATTERN_LEN};

/// A contiguous run of 3..=9 symbols. Equality, ordering and hashing are by
/// the bytes only.
#[derive(Clone, Copy)]
pub struct Pattern {
    bytes: [u8; MAX_PATTERN_LEN],
    len: u8,
}

impl Pattern {
    /// Builds a pattern from `bytes`, rejecting lengths outside 3..=9.
    pub fn from_slice(bytes: &[u8]) -> Option<Self> {
        Self::from_segments(bytes, &[])
    }

    /// Builds a pattern from the concatenation of two slices, as returned by
    /// [`ByteRing::tail`](crate::stdx::ByteRing::tail).
    pub fn from_segments(first: &[u8], second: &[u8]) -> Option<Self> {
        let len = first.len() + second.len();
        if !(MIN_PATTERN_LEN..=MAX_PATTERN_LEN).contains(&len) {
            return None;
        }
        let mut bytes = [0u8; MAX_PATTERN_LEN];
        bytes[..first.len()].copy_from_slice(first);
        bytes[first.len()..len].copy_from_slice(second);
        Some(Self {
            bytes,
            len: len as u8,
        })
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }

    #[inline]
    #[allow(clippy::len_without_is_empty)] // never empty
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Returns the byte at `idx`.
    ///
    /// # Panics
    /// Panics if `idx >= len()`.
    #[inline]
    pub(crate) fn at(&self, idx: usize) -> u8 {
        self.as_bytes()[idx]
    }

    /// Returns `self` repeated `times` times, or `None` if the result would
    /// reach [`COVER_LIMIT`].
    fn repeated(&self, times: usize) -> Option<Self> {
        let unit = self.len();
        let total = unit * times;
        if times == 0 || total >= COVER_LIMIT {
            return None;
        }
        let mut bytes = [0u8; MAX_PATTERN_LEN];
        for chunk in bytes[..total].chunks_exact_mut(unit) {
            chunk.copy_from_slice(self.as_bytes());
        }
        Some(Self {
            bytes,
            len: total as u8,
        })
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for Pattern {}

impl Hash for Pattern {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_bytes().hash(state);
    }
}

impl PartialOrd for Pattern {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pattern {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_bytes().cmp(other.as_bytes())
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(self.as_bytes()))
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pattern({:?})", String::from_utf8_lossy(self.as_bytes()))
    }
}

impl Serialize for Pattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// The multiples of a pattern that stay below [`COVER_LIMIT`]: the pattern
/// itself, its double, its triple, and so on.
///
/// A length-3 pattern has three such multiples (3, 6, 9); a length-4 pattern
/// two; anything longer only itself.
#[derive(Clone, Copy, Debug)]
pub struct CoveredVariants {
    items: [Pattern; 3],
    len: u8,
}

impl CoveredVariants {
    pub fn of(pattern: Pattern) -> Self {
        let mut items = [pattern; 3];
        let mut len = 1usize;
        while let Some(next) = pattern.repeated(len + 1) {
            items[len] = next;
            len += 1;
        }
        Self {
            items,
            len: len as u8,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pattern> + '_ {
        self.items[..self.len as usize].iter()
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
