// Copyright 2012-2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Fixed-capacity, allocation-free buffers that back the streaming engine.
//!
//! The engine never grows a heap allocation on its hot path: every buffer
//! it touches is an inline array of a small, fixed size. `CAPACITY` must
//! exceed the largest transitive decomposition of a single code point
//! (18, for NFKD) plus a margin for trailing combining marks; 32 is the
//! value this crate (and its teacher) ships with.

use tinyvec::ArrayVec;

/// Capacity shared by every bounded buffer in the engine.
///
/// Validated against the Unicode conformance corpus: no single code
/// point's full compatibility decomposition, plus the longest combining
/// mark run seen in practice, exceeds this.
pub(crate) const CAPACITY: usize = 32;

/// A fixed-capacity, heap-free sequence of code points.
///
/// Used both as Hangul/Decomposer scratch space and as the work stack the
/// decomposer walks while expanding a single code point.
pub(crate) type CharBuf = ArrayVec<[char; CAPACITY]>;

/// The engine's main pending-emission buffer: code points paired in
/// lockstep with their Canonical_Combining_Class, so reordering one
/// reorders the other.
///
/// # Invariants
/// `codepoints.len() == cccs.len()`, and `cccs[i]` is always the
/// combining class of `codepoints[i]` as of the last time it was written.
#[derive(Default)]
pub(crate) struct NormBuffer {
    codepoints: CharBuf,
    cccs: ArrayVec<[u8; CAPACITY]>,
}

impl NormBuffer {
    pub(crate) fn new() -> Self {
        NormBuffer {
            codepoints: CharBuf::new(),
            cccs: ArrayVec::new(),
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.codepoints.len()
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.codepoints.is_empty()
    }

    /// Slots remaining before a `push` would overflow `CAPACITY`.
    #[inline]
    pub(crate) fn capacity_left(&self) -> usize {
        CAPACITY - self.len()
    }

    /// Appends `c` with its combining class. Caller must ensure
    /// `len() < CAPACITY`; the streaming engine guarantees this by
    /// flushing whenever only one slot remains.
    #[inline]
    pub(crate) fn push(&mut self, c: char, ccc: u8) {
        debug_assert!(self.len() < CAPACITY, "pushed into a full bounded buffer");
        self.codepoints.push(c);
        self.cccs.push(ccc);
    }

    #[inline]
    pub(crate) fn clear(&mut self) {
        self.codepoints.clear();
        self.cccs.clear();
    }

    #[inline]
    pub(crate) fn codepoint(&self, i: usize) -> char {
        self.codepoints[i]
    }

    #[inline]
    pub(crate) fn ccc(&self, i: usize) -> u8 {
        self.cccs[i]
    }

    #[inline]
    pub(crate) fn set_codepoint(&mut self, i: usize, c: char) {
        self.codepoints[i] = c;
    }

    #[inline]
    pub(crate) fn set_ccc(&mut self, i: usize, ccc: u8) {
        self.cccs[i] = ccc;
    }

    /// Swaps entries `i` and `j` in both arrays together, preserving the
    /// code-point/ccc pairing invariant.
    #[inline]
    pub(crate) fn swap(&mut self, i: usize, j: usize) {
        self.codepoints.swap(i, j);
        self.cccs.swap(i, j);
    }

    /// Truncates both arrays to `n` entries in lockstep.
    #[inline]
    pub(crate) fn set_len(&mut self, n: usize) {
        self.codepoints.truncate(n);
        self.cccs.truncate(n);
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.codepoints.iter().copied()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn push_pop_len() {
        let mut b = NormBuffer::new();
        assert!(b.is_empty());
        b.push('a', 0);
        b.push('\u{301}', 230);
        assert_eq!(b.len(), 2);
        assert_eq!(b.codepoint(0), 'a');
        assert_eq!(b.ccc(1), 230);
    }

    #[test]
    fn swap_keeps_pairing() {
        let mut b = NormBuffer::new();
        b.push('x', 5);
        b.push('y', 1);
        b.swap(0, 1);
        assert_eq!(b.codepoint(0), 'y');
        assert_eq!(b.ccc(0), 1);
        assert_eq!(b.codepoint(1), 'x');
        assert_eq!(b.ccc(1), 5);
    }

    #[test]
    fn set_len_truncates_both() {
        let mut b = NormBuffer::new();
        b.push('a', 0);
        b.push('b', 1);
        b.push('c', 2);
        b.set_len(1);
        assert_eq!(b.len(), 1);
        assert_eq!(b.codepoint(0), 'a');
    }

    #[test]
    fn capacity_left_tracks_pushes() {
        let mut b = NormBuffer::new();
        assert_eq!(b.capacity_left(), CAPACITY);
        b.push('a', 0);
        assert_eq!(b.capacity_left(), CAPACITY - 1);
    }
}
