// Copyright 2012-2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Canonical-equivalence comparison: two strings are canonically
//! equivalent iff their NFD forms are identical code point for code
//! point (spec §4.8). Rather than materializing both full NFD strings,
//! this drives two [`crate::engine::Engine`]s side by side and bails
//! out on the first mismatch — still constant space, and short-circuits
//! on an early difference instead of normalizing the rest of either
//! string for nothing.
//!
//! This module holds the generic, iterator-based primitive; the public
//! `cmp_nfd`/`cmp_nfd_bytes` entry points in the crate root wrap it for
//! `&str` and `&[u8]` callers.

use crate::engine::Engine;
use crate::form::NormalizationForm;

/// True iff `a` and `b` are canonically equivalent, i.e.
/// `nfd(a) == nfd(b)`.
pub(crate) fn eq_nfd<I, J>(a: I, b: J) -> bool
where
    I: Iterator<Item = char>,
    J: Iterator<Item = char>,
{
    let mut ea = Engine::new(a, NormalizationForm::Nfd);
    let mut eb = Engine::new(b, NormalizationForm::Nfd);

    loop {
        match (ea.next(), eb.next()) {
            (Some(x), Some(y)) => {
                if x != y {
                    return false;
                }
            }
            (None, None) => return true,
            _ => return false,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn precomposed_and_decomposed_cafe_are_equivalent() {
        assert!(eq_nfd("caf\u{00E9}".chars(), "cafe\u{0301}".chars()));
    }

    #[test]
    fn different_strings_are_not_equivalent() {
        assert!(!eq_nfd("abc".chars(), "abd".chars()));
    }

    #[test]
    fn empty_strings_are_equivalent() {
        assert!(eq_nfd("".chars(), "".chars()));
    }

    #[test]
    fn different_lengths_short_circuit_to_false() {
        assert!(!eq_nfd("a".chars(), "ab".chars()));
    }

    #[test]
    fn cyrillic_combining_forms_are_equivalent() {
        // Ya with acute: precomposed Cyrillic has no NFC composite for
        // this pair, so both sides are already in NFD once decomposed.
        assert!(eq_nfd(
            "\u{0301}\u{044F}".chars(),
            "\u{0301}\u{044F}".chars()
        ));
    }
}
