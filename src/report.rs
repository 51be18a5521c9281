//! Scan results and their output encodings.
//!
//! A [`RepeatReport`] maps `(start offset, pattern)` to the number of
//! consecutive occurrences. Two encodings are provided:
//!
//! - [`Format::Json`]: a single object keyed by `"<start>-<pattern>"`,
//!   e.g. `{"0-AAG":3}`.
//! - [`Format::Jsonl`]: one object per repeat,
//!   `{"start":0,"pattern":"AAG","count":3}`.
//!
//! Entries are always emitted in ascending `(start, pattern)` order.

use std::collections::btree_map::{self, BTreeMap};
use std::fmt;
use std::io::Write;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::error::ScanError;
use crate::scanner::Pattern;

/// Identifies one repeat: where its first occurrence starts and its unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RepeatKey {
    /// 0-based offset of the first symbol of the first occurrence.
    pub start: u64,
    pub pattern: Pattern,
}

impl RepeatKey {
    pub fn new(start: u64, pattern: Pattern) -> Self {
        Self { start, pattern }
    }
}

impl fmt::Display for RepeatKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.pattern)
    }
}

/// Output encoding for a [`RepeatReport`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Format {
    #[default]
    Json,
    Jsonl,
}

/// All repeats found in one scan. Every count is at least 2.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RepeatReport {
    entries: BTreeMap<RepeatKey, u64>,
}

impl RepeatReport {
    pub(crate) fn record(&mut self, key: RepeatKey, count: u64) {
        debug_assert!(count >= 2);
        self.entries.insert(key, count);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up the count for the run of `pattern` starting at `start`.
    pub fn get(&self, start: u64, pattern: &[u8]) -> Option<u64> {
        let pattern = Pattern::from_slice(pattern)?;
        self.entries.get(&RepeatKey::new(start, pattern)).copied()
    }

    /// Iterates entries in ascending `(start, pattern)` order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    pub fn into_inner(self) -> BTreeMap<RepeatKey, u64> {
        self.entries
    }

    /// Encodes the report and writes it to `out`, followed by a newline for
    /// [`Format::Json`] or one newline per entry for [`Format::Jsonl`].
    pub fn write_to<W: Write>(&self, format: Format, mut out: W) -> Result<(), ScanError> {
        match format {
            Format::Json => {
                serde_json::to_writer(&mut out, self)?;
                out.write_all(b"\n").map_err(ScanError::Write)?;
            }
            Format::Jsonl => {
                for (key, count) in self.iter() {
                    let record = RepeatRecord {
                        start: key.start,
                        pattern: key.pattern,
                        count,
                    };
                    serde_json::to_writer(&mut out, &record)?;
                    out.write_all(b"\n").map_err(ScanError::Write)?;
                }
            }
        }
        out.flush().map_err(ScanError::Write)
    }
}

impl Serialize for RepeatReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, count) in &self.entries {
            map.serialize_entry(&key.to_string(), count)?;
        }
        map.end()
    }
}

impl<'a> IntoIterator for &'a RepeatReport {
    type Item = (&'a RepeatKey, u64);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over `(key, count)` pairs of a [`RepeatReport`].
pub struct Iter<'a> {
    inner: btree_map::Iter<'a, RepeatKey, u64>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a RepeatKey, u64);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, &count)| (k, count))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

#[derive(Serialize)]
struct RepeatRecord {
    start: u64,
    pattern: Pattern,
    count: u64,
}
