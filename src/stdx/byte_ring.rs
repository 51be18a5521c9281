//! Byte ring keyed by absolute stream offsets.
//!
//! This buffer models the tail of a logical, ever-growing symbol stream. Each
//! `push_byte` appends one symbol at the current `end_offset`, and the ring
//! retains only the most recent `capacity` symbols. The absolute offset of the
//! first retained symbol is tracked in `start_offset`, so callers can map any
//! suffix of the ring back to its position in the overall input.
//!
//! # Invariants
//! - `len <= capacity` and `head < capacity`.
//! - When `len > 0`, `start_offset` is the absolute offset of the byte at
//!   `head`.
//! - `end_offset == start_offset + len`.
//!
//! # Layout
//! Data lives in a circular `Vec<u8>`. The retained bytes are contiguous in
//! logical order but may wrap in the underlying buffer; `segments()` and
//! `tail()` expose up to two slices that, when concatenated, yield the bytes in
//! order.

/// Fixed-capacity ring buffer for the tail of a byte stream.
pub struct ByteRing {
    buf: Vec<u8>,
    head: usize,
    len: usize,
    start_offset: u64,
}

impl ByteRing {
    /// Creates an empty ring with a fixed `capacity`.
    ///
    /// # Panics
    /// Panics if `capacity == 0`.
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "ByteRing capacity must be > 0");
        Self {
            buf: vec![0u8; capacity],
            head: 0,
            len: 0,
            start_offset: 0,
        }
    }

    /// Returns the maximum number of bytes the ring can retain.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Returns the number of bytes currently retained.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the absolute offset of the first retained byte.
    ///
    /// When empty, this is the offset where the next retained byte would
    /// begin.
    #[inline]
    pub fn start_offset(&self) -> u64 {
        self.start_offset
    }

    /// Returns the absolute offset one past the newest byte, i.e. the total
    /// number of bytes ever pushed.
    #[inline]
    pub fn end_offset(&self) -> u64 {
        self.start_offset + self.len as u64
    }

    /// Returns the retained bytes as up to two slices in logical order.
    ///
    /// The first slice starts at `head`; the second (possibly empty) slice
    /// contains the wrapped remainder.
    pub fn segments(&self) -> (&[u8], &[u8]) {
        if self.len == 0 {
            return (&[], &[]);
        }
        let cap = self.buf.len();
        let start = self.head;
        if self.len <= cap - start {
            (&self.buf[start..start + self.len], &[])
        } else {
            let first = cap - start;
            (&self.buf[start..], &self.buf[..(self.len - first)])
        }
    }

    /// Returns the newest `n` bytes as up to two slices in logical order, or
    /// `None` when fewer than `n` bytes are retained.
    ///
    /// `tail(0)` is always `Some((&[], &[]))`.
    pub fn tail(&self, n: usize) -> Option<(&[u8], &[u8])> {
        if n > self.len {
            return None;
        }
        if n == 0 {
            return Some((&[], &[]));
        }
        let cap = self.buf.len();
        let start = (self.head + (self.len - n)) % cap;
        let first = (cap - start).min(n);
        Some((&self.buf[start..start + first], &self.buf[..(n - first)]))
    }

    /// Clears all retained bytes and resets offsets.
    pub fn reset(&mut self) {
        self.head = 0;
        self.len = 0;
        self.start_offset = 0;
    }

    /// Appends one byte, evicting the oldest byte when the ring is full.
    ///
    /// Complexity: O(1).
    #[inline]
    pub fn push_byte(&mut self, byte: u8) {
        let cap = self.buf.len();
        if self.len == cap {
            self.buf[self.head] = byte;
            self.head = (self.head + 1) % cap;
            self.start_offset += 1;
            return;
        }
        let tail = (self.head + self.len) % cap;
        self.buf[tail] = byte;
        self.len += 1;
    }
}
