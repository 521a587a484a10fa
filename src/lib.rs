// Copyright 2012-2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A streaming, constant-space Unicode Normalization engine, implementing
//! NFC, NFD, NFKC and NFKD as described in
//! [Unicode Standard Annex #15](http://www.unicode.org/reports/tr15/).
//!
//! Every form is produced by an iterator adapter that holds only a
//! small fixed-capacity buffer, never the whole string, so normalizing
//! an arbitrarily long stream costs the same small amount of memory
//! throughout.
//!
//! ```rust
//! extern crate unorm_stream;
//!
//! use unorm_stream::char::compose;
//! use unorm_stream::UnicodeNormalization;
//!
//! fn main() {
//!     assert_eq!(compose('A', '\u{30a}'), Some('Å'));
//!
//!     let s = "ÅΩ";
//!     let c = s.nfc().collect::<String>();
//!     assert_eq!(c, "ÅΩ");
//! }
//! ```
//!
//! # crates.io
//!
//! You can use this package in your project by adding the following
//! to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! unorm-stream = "0.1"
//! ```

#![deny(missing_docs, unsafe_code)]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

extern crate tinyvec;

use core::str::Chars;

mod buffer;
mod cmp;
mod compose;
mod decomposer;
mod engine;
mod form;
mod hangul;
mod lookups;
mod sort;
mod tables;

mod decompose;
mod normalize;
mod quick_check;
mod recompose;
mod stream_safe;

pub use crate::decompose::Decompositions;
pub use crate::quick_check::{
    is_nfc, is_nfc_quick, is_nfd, is_nfd_quick, is_nfkc, is_nfkc_quick, is_nfkd, is_nfkd_quick,
    IsNormalized,
};
pub use crate::recompose::Recompositions;
pub use crate::stream_safe::StreamSafe;
pub use crate::tables::UNICODE_VERSION;

/// Methods for composing and decomposing individual characters.
pub mod char {
    pub use crate::normalize::{
        canonical_combining_class, compose, decompose_canonical, decompose_compatible,
        is_combining_mark,
    };
}

/// Methods for iterating over strings while applying Unicode normalizations
/// as described in
/// [Unicode Standard Annex #15](http://www.unicode.org/reports/tr15/).
pub trait UnicodeNormalization<I: Iterator<Item = char>> {
    /// Returns an iterator over the string in Unicode Normalization Form D
    /// (canonical decomposition).
    fn nfd(self) -> Decompositions<I>;

    /// Returns an iterator over the string in Unicode Normalization Form KD
    /// (compatibility decomposition).
    fn nfkd(self) -> Decompositions<I>;

    /// An Iterator over the string in Unicode Normalization Form C
    /// (canonical decomposition followed by canonical composition).
    fn nfc(self) -> Recompositions<I>;

    /// An Iterator over the string in Unicode Normalization Form KC
    /// (compatibility decomposition followed by canonical composition).
    fn nfkc(self) -> Recompositions<I>;

    /// An Iterator over the string with Combining Grapheme Joiner
    /// characters inserted according to the Stream-Safe Text Process
    /// (UAX #15 §9.2), without otherwise normalizing anything.
    fn stream_safe(self) -> StreamSafe<I>;
}

impl<'a> UnicodeNormalization<Chars<'a>> for &'a str {
    #[inline]
    fn nfd(self) -> Decompositions<Chars<'a>> {
        Decompositions::new(self.chars(), false)
    }

    #[inline]
    fn nfkd(self) -> Decompositions<Chars<'a>> {
        Decompositions::new(self.chars(), true)
    }

    #[inline]
    fn nfc(self) -> Recompositions<Chars<'a>> {
        Recompositions::new(self.chars(), false)
    }

    #[inline]
    fn nfkc(self) -> Recompositions<Chars<'a>> {
        Recompositions::new(self.chars(), true)
    }

    #[inline]
    fn stream_safe(self) -> StreamSafe<Chars<'a>> {
        StreamSafe::new(self.chars())
    }
}

impl<I: Iterator<Item = char>> UnicodeNormalization<I> for I {
    #[inline]
    fn nfd(self) -> Decompositions<I> {
        Decompositions::new(self, false)
    }

    #[inline]
    fn nfkd(self) -> Decompositions<I> {
        Decompositions::new(self, true)
    }

    #[inline]
    fn nfc(self) -> Recompositions<I> {
        Recompositions::new(self, false)
    }

    #[inline]
    fn nfkc(self) -> Recompositions<I> {
        Recompositions::new(self, true)
    }

    #[inline]
    fn stream_safe(self) -> StreamSafe<I> {
        StreamSafe::new(self)
    }
}

/// True iff `a` and `b` are canonically equivalent, i.e. `to_nfd(a) ==
/// to_nfd(b)`, without materializing either normal form — see
/// [`crate::cmp`].
#[inline]
pub fn cmp_nfd(a: &str, b: &str) -> bool {
    crate::cmp::eq_nfd(a.chars(), b.chars())
}

/// Normalizes `s` to NFC and collects the result into an owned `String`.
#[cfg(feature = "std")]
pub fn to_nfc(s: &str) -> std::string::String {
    s.nfc().collect()
}

/// Normalizes `s` to NFD and collects the result into an owned `String`.
#[cfg(feature = "std")]
pub fn to_nfd(s: &str) -> std::string::String {
    s.nfd().collect()
}

/// Normalizes `s` to NFKC and collects the result into an owned `String`.
#[cfg(feature = "std")]
pub fn to_nfkc(s: &str) -> std::string::String {
    s.nfkc().collect()
}

/// Normalizes `s` to NFKD and collects the result into an owned `String`.
#[cfg(feature = "std")]
pub fn to_nfkd(s: &str) -> std::string::String {
    s.nfkd().collect()
}

/// Normalizes the UTF-8 content of `bytes` to NFC. Malformed byte
/// sequences are replaced with U+FFFD by the UTF-8 collaborator before
/// normalizing, the same replacement policy a streaming decoder would
/// apply one code point at a time.
#[cfg(feature = "std")]
pub fn to_nfc_bytes(bytes: &[u8]) -> std::string::String {
    std::string::String::from_utf8_lossy(bytes).as_ref().nfc().collect()
}

/// Normalizes the UTF-8 content of `bytes` to NFD. Malformed byte
/// sequences are replaced with U+FFFD before normalizing.
#[cfg(feature = "std")]
pub fn to_nfd_bytes(bytes: &[u8]) -> std::string::String {
    std::string::String::from_utf8_lossy(bytes).as_ref().nfd().collect()
}

/// Normalizes the UTF-8 content of `bytes` to NFKC. Malformed byte
/// sequences are replaced with U+FFFD before normalizing.
#[cfg(feature = "std")]
pub fn to_nfkc_bytes(bytes: &[u8]) -> std::string::String {
    std::string::String::from_utf8_lossy(bytes).as_ref().nfkc().collect()
}

/// Normalizes the UTF-8 content of `bytes` to NFKD. Malformed byte
/// sequences are replaced with U+FFFD before normalizing.
#[cfg(feature = "std")]
pub fn to_nfkd_bytes(bytes: &[u8]) -> std::string::String {
    std::string::String::from_utf8_lossy(bytes).as_ref().nfkd().collect()
}

/// [`cmp_nfd`] over raw UTF-8 bytes rather than `&str`: malformed byte
/// sequences on either side are replaced with U+FFFD before comparing,
/// matching the same collaborator contract as [`to_nfc_bytes`] and
/// friends.
#[cfg(feature = "std")]
pub fn cmp_nfd_bytes(a: &[u8], b: &[u8]) -> bool {
    let a = std::string::String::from_utf8_lossy(a);
    let b = std::string::String::from_utf8_lossy(b);
    cmp_nfd(a.as_ref(), b.as_ref())
}

#[cfg(all(test, feature = "std"))]
mod test {
    use super::*;

    #[test]
    fn to_nfc_recombines() {
        assert_eq!(to_nfc("e\u{0301}"), "\u{00E9}");
    }

    #[test]
    fn to_nfd_splits() {
        assert_eq!(to_nfd("\u{00E9}"), "e\u{0301}");
    }

    #[test]
    fn to_nfkc_folds_compatibility_forms() {
        assert_eq!(to_nfkc("\u{FB01}"), "fi");
    }

    #[test]
    fn to_nfkd_folds_compatibility_forms() {
        assert_eq!(to_nfkd("\u{FB01}"), "fi");
    }

    #[test]
    fn trait_methods_match_free_functions() {
        let s = "Å\u{0041}\u{030A}";
        assert_eq!(s.nfc().collect::<std::string::String>(), to_nfc(s));
    }

    #[test]
    fn cmp_nfd_reports_canonical_equivalence() {
        assert!(cmp_nfd("caf\u{00E9}", "cafe\u{0301}"));
        assert!(!cmp_nfd("caf\u{00E9}", "cafe"));
    }

    #[test]
    fn bytes_entry_points_match_the_str_entry_points() {
        assert_eq!(to_nfc_bytes("e\u{0301}".as_bytes()), to_nfc("e\u{0301}"));
        assert_eq!(to_nfd_bytes("\u{00E9}".as_bytes()), to_nfd("\u{00E9}"));
        assert_eq!(to_nfkc_bytes("\u{FB01}".as_bytes()), to_nfkc("\u{FB01}"));
        assert_eq!(to_nfkd_bytes("\u{FB01}".as_bytes()), to_nfkd("\u{FB01}"));
        assert!(cmp_nfd_bytes(
            "caf\u{00E9}".as_bytes(),
            "cafe\u{0301}".as_bytes()
        ));
    }

    #[test]
    fn malformed_utf8_is_replaced_with_u_fffd_before_normalizing() {
        // A lone continuation byte is not valid UTF-8 on its own.
        let malformed = [b'a', 0x80, b'e', 0xCC, 0x81];
        let out = to_nfc_bytes(&malformed);
        assert_eq!(out, "a\u{FFFD}\u{00E9}");
    }

    #[test]
    fn quick_check_agrees_with_full_normalization() {
        let already_nfc = "hello";
        assert!(is_nfc(already_nfc.chars()));
        let not_nfc = "e\u{0301}";
        assert!(!is_nfc(not_nfc.chars()));
    }
}
