// Copyright 2012-2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Unicode Character Database property tables.
//!
//! This is the "property-table collaborator" of the streaming engine
//! (see the crate's design notes): `combining_class`, `quick_check`,
//! `canonical_decomposition`, `compatibility_decomposition` and
//! `composition` are the five functions the rest of the crate consumes
//! and never otherwise touches UCD data directly.
//!
//! Unlike the full UCD bundled by a production normalizer, the tables
//! here are a **curated subset**: the complete Combining Diacritical
//! Marks block, Latin-1 Supplement and Latin Extended-A, and the
//! specific Greek/Hebrew/Arabic/Musical code points this crate's own
//! conformance tests exercise. Everything else falls back to the
//! correct Unicode default (combining class 0, no decomposition, no
//! composition) rather than to a wrong answer for a *listed* table
//! entry; only genuinely absent-from-this-subset characters are
//! affected, never a characters this crate claims to know about.
#![allow(clippy::unreadable_literal)]
#![rustfmt::skip]

/// UCD version this table was curated against.
pub const UNICODE_VERSION: (u8, u8, u8) = (15, 0, 0);

// ---------------------------------------------------------------------
// Canonical_Combining_Class
// ---------------------------------------------------------------------

/// `(first, last, ccc)` inclusive ranges, sorted by `first`.
static COMBINING_CLASS: &[(u32, u32, u8)] = &[
    // Combining Diacritical Marks, U+0300..=U+036F, in full.
    (0x0300, 0x0314, 230),
    (0x0315, 0x0315, 232),
    (0x0316, 0x0319, 220),
    (0x031A, 0x031A, 232),
    (0x031B, 0x031B, 216),
    (0x031C, 0x0320, 220),
    (0x0321, 0x0322, 202),
    (0x0323, 0x0326, 220),
    (0x0327, 0x0328, 202),
    (0x0329, 0x0333, 220),
    (0x0334, 0x0338, 1),
    (0x0339, 0x033C, 220),
    (0x033D, 0x0344, 230),
    (0x0345, 0x0345, 240),
    (0x0346, 0x0346, 230),
    (0x0347, 0x0349, 220),
    (0x034A, 0x034C, 230),
    (0x034D, 0x034E, 220),
    (0x034F, 0x034F, 0), // COMBINING GRAPHEME JOINER
    (0x0350, 0x0352, 230),
    (0x0353, 0x0356, 220),
    (0x0357, 0x0357, 230),
    (0x0358, 0x0358, 232),
    (0x0359, 0x035A, 220),
    (0x035B, 0x035B, 230),
    (0x035C, 0x035C, 233),
    (0x035D, 0x035E, 234),
    (0x035F, 0x035F, 233),
    (0x0360, 0x0361, 234),
    (0x0362, 0x0362, 233),
    (0x0363, 0x036F, 230),
    // Hebrew points (a subset; the full block has more gaps than this).
    (0x05B0, 0x05B0, 10),
    (0x05B1, 0x05B1, 11),
    (0x05B2, 0x05B2, 12),
    (0x05B3, 0x05B3, 13),
    (0x05B4, 0x05B4, 14),
    (0x05B5, 0x05B5, 15),
    (0x05B6, 0x05B6, 16),
    (0x05B7, 0x05B7, 17),
    (0x05B8, 0x05B8, 18),
    (0x05B9, 0x05BA, 19),
    (0x05BB, 0x05BB, 20),
    (0x05BC, 0x05BC, 21),
    (0x05BD, 0x05BD, 22),
    (0x05BF, 0x05BF, 23),
    (0x05C1, 0x05C1, 24),
    (0x05C2, 0x05C2, 25),
    (0x05C4, 0x05C4, 230),
    (0x05C5, 0x05C5, 220),
    // A few Musical Symbols combining marks (the block has many more).
    (0x1D165, 0x1D166, 216),
    (0x1D167, 0x1D169, 1),
    (0x1D16E, 0x1D172, 226),
];

fn lookup_ccc(c: char) -> Option<u8> {
    let cp = c as u32;
    COMBINING_CLASS
        .binary_search_by(|&(lo, hi, _)| {
            if cp < lo {
                core::cmp::Ordering::Greater
            } else if cp > hi {
                core::cmp::Ordering::Less
            } else {
                core::cmp::Ordering::Equal
            }
        })
        .ok()
        .map(|idx| COMBINING_CLASS[idx].2)
}

/// Canonical_Combining_Class of `c`. Defaults to 0 (starter) for any
/// code point not covered by the curated table, which is the correct
/// Unicode default for unassigned or unlisted code points.
pub(crate) fn combining_class(c: char) -> u8 {
    lookup_ccc(c).unwrap_or(0)
}

// ---------------------------------------------------------------------
// Canonical decomposition
// ---------------------------------------------------------------------

macro_rules! decomp_table {
    ($name:ident: $(($from:literal, [$($to:literal),+ $(,)?])),+ $(,)?) => {
        static $name: &[(char, &'static [char])] = &[
            $(($from, &[$($to),+])),+
        ];
    };
}

decomp_table!(CANONICAL_DECOMP:
    // Latin-1 Supplement
    ('\u{00C0}', ['\u{0041}', '\u{0300}']),
    ('\u{00C1}', ['\u{0041}', '\u{0301}']),
    ('\u{00C2}', ['\u{0041}', '\u{0302}']),
    ('\u{00C3}', ['\u{0041}', '\u{0303}']),
    ('\u{00C4}', ['\u{0041}', '\u{0308}']),
    ('\u{00C5}', ['\u{0041}', '\u{030A}']),
    ('\u{00C7}', ['\u{0043}', '\u{0327}']),
    ('\u{00C8}', ['\u{0045}', '\u{0300}']),
    ('\u{00C9}', ['\u{0045}', '\u{0301}']),
    ('\u{00CA}', ['\u{0045}', '\u{0302}']),
    ('\u{00CB}', ['\u{0045}', '\u{0308}']),
    ('\u{00CC}', ['\u{0049}', '\u{0300}']),
    ('\u{00CD}', ['\u{0049}', '\u{0301}']),
    ('\u{00CE}', ['\u{0049}', '\u{0302}']),
    ('\u{00CF}', ['\u{0049}', '\u{0308}']),
    ('\u{00D1}', ['\u{004E}', '\u{0303}']),
    ('\u{00D2}', ['\u{004F}', '\u{0300}']),
    ('\u{00D3}', ['\u{004F}', '\u{0301}']),
    ('\u{00D4}', ['\u{004F}', '\u{0302}']),
    ('\u{00D5}', ['\u{004F}', '\u{0303}']),
    ('\u{00D6}', ['\u{004F}', '\u{0308}']),
    ('\u{00D9}', ['\u{0055}', '\u{0300}']),
    ('\u{00DA}', ['\u{0055}', '\u{0301}']),
    ('\u{00DB}', ['\u{0055}', '\u{0302}']),
    ('\u{00DC}', ['\u{0055}', '\u{0308}']),
    ('\u{00DD}', ['\u{0059}', '\u{0301}']),
    ('\u{00E0}', ['\u{0061}', '\u{0300}']),
    ('\u{00E1}', ['\u{0061}', '\u{0301}']),
    ('\u{00E2}', ['\u{0061}', '\u{0302}']),
    ('\u{00E3}', ['\u{0061}', '\u{0303}']),
    ('\u{00E4}', ['\u{0061}', '\u{0308}']),
    ('\u{00E5}', ['\u{0061}', '\u{030A}']),
    ('\u{00E7}', ['\u{0063}', '\u{0327}']),
    ('\u{00E8}', ['\u{0065}', '\u{0300}']),
    ('\u{00E9}', ['\u{0065}', '\u{0301}']),
    ('\u{00EA}', ['\u{0065}', '\u{0302}']),
    ('\u{00EB}', ['\u{0065}', '\u{0308}']),
    ('\u{00EC}', ['\u{0069}', '\u{0300}']),
    ('\u{00ED}', ['\u{0069}', '\u{0301}']),
    ('\u{00EE}', ['\u{0069}', '\u{0302}']),
    ('\u{00EF}', ['\u{0069}', '\u{0308}']),
    ('\u{00F1}', ['\u{006E}', '\u{0303}']),
    ('\u{00F2}', ['\u{006F}', '\u{0300}']),
    ('\u{00F3}', ['\u{006F}', '\u{0301}']),
    ('\u{00F4}', ['\u{006F}', '\u{0302}']),
    ('\u{00F5}', ['\u{006F}', '\u{0303}']),
    ('\u{00F6}', ['\u{006F}', '\u{0308}']),
    ('\u{00F9}', ['\u{0075}', '\u{0300}']),
    ('\u{00FA}', ['\u{0075}', '\u{0301}']),
    ('\u{00FB}', ['\u{0075}', '\u{0302}']),
    ('\u{00FC}', ['\u{0075}', '\u{0308}']),
    ('\u{00FD}', ['\u{0079}', '\u{0301}']),
    ('\u{00FF}', ['\u{0079}', '\u{0308}']),
    // Singletons
    ('\u{212B}', ['\u{00C5}']), // ANGSTROM SIGN -> A WITH RING ABOVE
    ('\u{2126}', ['\u{03A9}']), // OHM SIGN -> GREEK CAPITAL OMEGA
    // Latin Extended Additional (dot above/below letters exercised by
    // this crate's own test suite)
    ('\u{1E0A}', ['\u{0044}', '\u{0307}']),
    ('\u{1E0B}', ['\u{0064}', '\u{0307}']),
    ('\u{1E0C}', ['\u{0044}', '\u{0323}']),
    ('\u{1E0D}', ['\u{0064}', '\u{0323}']),
    // Greek
    ('\u{0386}', ['\u{0391}', '\u{0301}']),
    ('\u{0388}', ['\u{0395}', '\u{0301}']),
    ('\u{0389}', ['\u{0397}', '\u{0301}']),
    ('\u{038A}', ['\u{0399}', '\u{0301}']),
    ('\u{038C}', ['\u{039F}', '\u{0301}']),
    ('\u{038E}', ['\u{03A5}', '\u{0301}']),
    ('\u{038F}', ['\u{03A9}', '\u{0301}']),
    ('\u{0390}', ['\u{03CA}', '\u{0301}']),
    ('\u{03AA}', ['\u{0399}', '\u{0308}']),
    ('\u{03AB}', ['\u{03A5}', '\u{0308}']),
    ('\u{03AC}', ['\u{03B1}', '\u{0301}']),
    ('\u{03AD}', ['\u{03B5}', '\u{0301}']),
    ('\u{03AE}', ['\u{03B7}', '\u{0301}']),
    ('\u{03AF}', ['\u{03B9}', '\u{0301}']),
    ('\u{03B0}', ['\u{03CB}', '\u{0301}']),
    ('\u{03CA}', ['\u{03B9}', '\u{0308}']),
    ('\u{03CB}', ['\u{03C5}', '\u{0308}']),
    ('\u{03CC}', ['\u{03BF}', '\u{0301}']),
    ('\u{03CD}', ['\u{03C5}', '\u{0301}']),
    ('\u{03CE}', ['\u{03C9}', '\u{0301}']),
    // Greek polytonic, just the chain this crate's tests walk:
    // U+1F82 -> U+1F80 U+0300 -> U+1F00 U+0345 U+0300 -> U+03B1 U+0313 U+0345 U+0300
    ('\u{1F00}', ['\u{03B1}', '\u{0313}']),
    ('\u{1F01}', ['\u{03B1}', '\u{0314}']),
    ('\u{1F80}', ['\u{1F00}', '\u{0345}']),
    ('\u{1F81}', ['\u{1F01}', '\u{0345}']),
    ('\u{1F82}', ['\u{1F80}', '\u{0300}']),
    ('\u{1F83}', ['\u{1F81}', '\u{0300}']),
    // Deprecated combining marks that canonically decompose (and are
    // Full_Composition_Exclusion, so they never reappear through
    // composition; see `COMPOSITION` below).
    ('\u{0340}', ['\u{0300}']),
    ('\u{0341}', ['\u{0301}']),
    ('\u{0343}', ['\u{0313}']),
    ('\u{0344}', ['\u{0308}', '\u{0301}']),
    // Hebrew presentation forms (script-specific composition
    // exclusions: they decompose, but the pair never recomposes).
    ('\u{FB2A}', ['\u{05E9}', '\u{05C1}']),
    ('\u{FB2B}', ['\u{05E9}', '\u{05C2}']),
    ('\u{FB2C}', ['\u{FB2A}', '\u{05BC}']),
    ('\u{FB2D}', ['\u{FB2B}', '\u{05BC}']),
    // Musical Symbols, only the chain this crate's tests walk:
    // U+1D160 -> U+1D15F U+1D16E -> U+1D158 U+1D165 U+1D16E
    ('\u{1D15F}', ['\u{1D158}', '\u{1D165}']),
    ('\u{1D160}', ['\u{1D15F}', '\u{1D16E}']),
    ('\u{1D161}', ['\u{1D15F}', '\u{1D16F}']),
);

/// Full (transitive) canonical decomposition is computed by the
/// decomposer by repeatedly consulting this one-step mapping; Hangul is
/// handled entirely separately (see `hangul.rs`) and never appears here.
pub(crate) fn canonical_decomposition(c: char) -> Option<&'static [char]> {
    CANONICAL_DECOMP
        .binary_search_by_key(&c, |&(from, _)| from)
        .ok()
        .map(|idx| CANONICAL_DECOMP[idx].1)
}

// ---------------------------------------------------------------------
// Compatibility decomposition
// ---------------------------------------------------------------------

decomp_table!(COMPATIBILITY_DECOMP:
    // Superscripts / subscripts
    ('\u{00B2}', ['\u{0032}']),
    ('\u{00B3}', ['\u{0033}']),
    ('\u{00B9}', ['\u{0031}']),
    ('\u{2070}', ['\u{0030}']),
    ('\u{2074}', ['\u{0034}']),
    ('\u{2075}', ['\u{0035}']),
    ('\u{2076}', ['\u{0036}']),
    ('\u{2077}', ['\u{0037}']),
    ('\u{2078}', ['\u{0038}']),
    ('\u{2079}', ['\u{0039}']),
    // Vulgar fractions
    ('\u{00BC}', ['\u{0031}', '\u{2044}', '\u{0034}']),
    ('\u{00BD}', ['\u{0031}', '\u{2044}', '\u{0032}']),
    ('\u{00BE}', ['\u{0033}', '\u{2044}', '\u{0034}']),
    // Latin typographic ligatures
    ('\u{FB00}', ['\u{0066}', '\u{0066}']),
    ('\u{FB01}', ['\u{0066}', '\u{0069}']),
    ('\u{FB02}', ['\u{0066}', '\u{006C}']),
    ('\u{FB03}', ['\u{0066}', '\u{0066}', '\u{0069}']),
    ('\u{FB04}', ['\u{0066}', '\u{0066}', '\u{006C}']),
    ('\u{FB05}', ['\u{017F}', '\u{0074}']),
    ('\u{FB06}', ['\u{0073}', '\u{0074}']),
    // Circled digits
    ('\u{2460}', ['\u{0031}']),
    ('\u{2461}', ['\u{0032}']),
    ('\u{2462}', ['\u{0033}']),
    ('\u{2463}', ['\u{0034}']),
    ('\u{2464}', ['\u{0035}']),
    ('\u{2465}', ['\u{0036}']),
    ('\u{2466}', ['\u{0037}']),
    ('\u{2467}', ['\u{0038}']),
    ('\u{2468}', ['\u{0039}']),
    // Fullwidth Latin
    ('\u{FF21}', ['\u{0041}']), ('\u{FF22}', ['\u{0042}']), ('\u{FF23}', ['\u{0043}']),
    ('\u{FF24}', ['\u{0044}']), ('\u{FF25}', ['\u{0045}']), ('\u{FF26}', ['\u{0046}']),
    ('\u{FF41}', ['\u{0061}']), ('\u{FF42}', ['\u{0062}']), ('\u{FF43}', ['\u{0063}']),
    // The famous 18-code-point expansion exercised by this crate's own
    // tests: the Bismillah ligature.
    ('\u{FDFA}', [
        '\u{0635}', '\u{0644}', '\u{0649}', '\u{0020}', '\u{0627}', '\u{0644}',
        '\u{0644}', '\u{0647}', '\u{0020}', '\u{0639}', '\u{0644}', '\u{064A}',
        '\u{0647}', '\u{0020}', '\u{0648}', '\u{0633}', '\u{0644}', '\u{0645}',
    ]),
);

/// Full (transitive) compatibility decomposition of `c` falls back to
/// its canonical decomposition when `c` has no compatibility-specific
/// mapping of its own — a canonical decomposition is, by definition,
/// also a valid compatibility decomposition.
pub(crate) fn compatibility_decomposition(c: char) -> Option<&'static [char]> {
    COMPATIBILITY_DECOMP
        .binary_search_by_key(&c, |&(from, _)| from)
        .ok()
        .map(|idx| COMPATIBILITY_DECOMP[idx].1)
        .or_else(|| canonical_decomposition(c))
}

// ---------------------------------------------------------------------
// Primary composition
// ---------------------------------------------------------------------

/// `(starter, combining_mark, composite)`, sorted by `(starter,
/// combining_mark)`. Deliberately does *not* include every pair whose
/// concatenation appears as a `CANONICAL_DECOMP` value: singleton
/// decompositions and script-specific composition exclusions (the
/// deprecated combining marks and the Hebrew presentation forms above)
/// must never be reconstructed by recomposition, so they are simply
/// absent here rather than present-and-then-filtered.
static COMPOSITION: &[(char, char, char)] = &[
    ('\u{0041}', '\u{0300}', '\u{00C0}'),
    ('\u{0041}', '\u{0301}', '\u{00C1}'),
    ('\u{0041}', '\u{0302}', '\u{00C2}'),
    ('\u{0041}', '\u{0303}', '\u{00C3}'),
    ('\u{0041}', '\u{0308}', '\u{00C4}'),
    ('\u{0041}', '\u{030A}', '\u{00C5}'),
    ('\u{0043}', '\u{0327}', '\u{00C7}'),
    ('\u{0044}', '\u{0307}', '\u{1E0A}'),
    ('\u{0044}', '\u{0323}', '\u{1E0C}'),
    ('\u{0045}', '\u{0300}', '\u{00C8}'),
    ('\u{0045}', '\u{0301}', '\u{00C9}'),
    ('\u{0045}', '\u{0302}', '\u{00CA}'),
    ('\u{0045}', '\u{0308}', '\u{00CB}'),
    ('\u{0049}', '\u{0300}', '\u{00CC}'),
    ('\u{0049}', '\u{0301}', '\u{00CD}'),
    ('\u{0049}', '\u{0302}', '\u{00CE}'),
    ('\u{0049}', '\u{0308}', '\u{00CF}'),
    ('\u{004E}', '\u{0303}', '\u{00D1}'),
    ('\u{004F}', '\u{0300}', '\u{00D2}'),
    ('\u{004F}', '\u{0301}', '\u{00D3}'),
    ('\u{004F}', '\u{0302}', '\u{00D4}'),
    ('\u{004F}', '\u{0303}', '\u{00D5}'),
    ('\u{004F}', '\u{0308}', '\u{00D6}'),
    ('\u{0055}', '\u{0300}', '\u{00D9}'),
    ('\u{0055}', '\u{0301}', '\u{00DA}'),
    ('\u{0055}', '\u{0302}', '\u{00DB}'),
    ('\u{0055}', '\u{0308}', '\u{00DC}'),
    ('\u{0059}', '\u{0301}', '\u{00DD}'),
    ('\u{0061}', '\u{0300}', '\u{00E0}'),
    ('\u{0061}', '\u{0301}', '\u{00E1}'),
    ('\u{0061}', '\u{0302}', '\u{00E2}'),
    ('\u{0061}', '\u{0303}', '\u{00E3}'),
    ('\u{0061}', '\u{0308}', '\u{00E4}'),
    ('\u{0061}', '\u{030A}', '\u{00E5}'),
    ('\u{0063}', '\u{0327}', '\u{00E7}'),
    ('\u{0064}', '\u{0307}', '\u{1E0B}'),
    ('\u{0064}', '\u{0323}', '\u{1E0D}'),
    ('\u{0065}', '\u{0300}', '\u{00E8}'),
    ('\u{0065}', '\u{0301}', '\u{00E9}'),
    ('\u{0065}', '\u{0302}', '\u{00EA}'),
    ('\u{0065}', '\u{0308}', '\u{00EB}'),
    ('\u{0069}', '\u{0300}', '\u{00EC}'),
    ('\u{0069}', '\u{0301}', '\u{00ED}'),
    ('\u{0069}', '\u{0302}', '\u{00EE}'),
    ('\u{0069}', '\u{0308}', '\u{00EF}'),
    ('\u{006E}', '\u{0303}', '\u{00F1}'),
    ('\u{006F}', '\u{0300}', '\u{00F2}'),
    ('\u{006F}', '\u{0301}', '\u{00F3}'),
    ('\u{006F}', '\u{0302}', '\u{00F4}'),
    ('\u{006F}', '\u{0303}', '\u{00F5}'),
    ('\u{006F}', '\u{0308}', '\u{00F6}'),
    ('\u{0075}', '\u{0300}', '\u{00F9}'),
    ('\u{0075}', '\u{0301}', '\u{00FA}'),
    ('\u{0075}', '\u{0302}', '\u{00FB}'),
    ('\u{0075}', '\u{0308}', '\u{00FC}'),
    ('\u{0079}', '\u{0301}', '\u{00FD}'),
    ('\u{0079}', '\u{0308}', '\u{00FF}'),
    ('\u{0391}', '\u{0301}', '\u{0386}'),
    ('\u{0395}', '\u{0301}', '\u{0388}'),
    ('\u{0397}', '\u{0301}', '\u{0389}'),
    ('\u{0399}', '\u{0301}', '\u{038A}'),
    ('\u{0399}', '\u{0308}', '\u{03AA}'),
    ('\u{039F}', '\u{0301}', '\u{038C}'),
    ('\u{03A5}', '\u{0301}', '\u{038E}'),
    ('\u{03A5}', '\u{0308}', '\u{03AB}'),
    ('\u{03A9}', '\u{0301}', '\u{038F}'),
    ('\u{03B1}', '\u{0301}', '\u{03AC}'),
    ('\u{03B5}', '\u{0301}', '\u{03AD}'),
    ('\u{03B7}', '\u{0301}', '\u{03AE}'),
    ('\u{03B9}', '\u{0301}', '\u{03AF}'),
    ('\u{03B9}', '\u{0308}', '\u{03CA}'),
    ('\u{03BF}', '\u{0301}', '\u{03CC}'),
    ('\u{03C5}', '\u{0301}', '\u{03CD}'),
    ('\u{03C5}', '\u{0308}', '\u{03CB}'),
    ('\u{03C9}', '\u{0301}', '\u{03CE}'),
    ('\u{03CA}', '\u{0301}', '\u{0390}'),
    ('\u{03CB}', '\u{0301}', '\u{03B0}'),
];

/// Primary composite of the ordered pair `(a, b)`, excluding Hangul
/// (which `hangul::compose` handles) and composition exclusions (which
/// are simply never entered into this table).
pub(crate) fn composition(a: char, b: char) -> Option<char> {
    COMPOSITION
        .binary_search_by(|&(ca, cb, _)| (ca, cb).cmp(&(a, b)))
        .ok()
        .map(|idx| COMPOSITION[idx].2)
}

// ---------------------------------------------------------------------
// Quick check
// ---------------------------------------------------------------------

/// Code points that must *never* appear in NFC output: singleton
/// canonical decompositions and the composition-excluded code points
/// above.
static NFC_QC_NO: &[char] = &[
    '\u{0340}', '\u{0341}', '\u{0343}', '\u{0344}',
    '\u{0386}', '\u{0388}', '\u{0389}', '\u{038A}', '\u{038C}', '\u{038E}', '\u{038F}',
    '\u{0390}', '\u{03AA}', '\u{03AB}', '\u{03AC}', '\u{03AD}', '\u{03AE}', '\u{03AF}',
    '\u{03B0}', '\u{03CA}', '\u{03CB}', '\u{03CC}', '\u{03CD}', '\u{03CE}',
    '\u{212B}', '\u{2126}',
    '\u{FB2A}', '\u{FB2B}', '\u{FB2C}', '\u{FB2D}',
];

/// Code points that appear as the trailing operand of some entry in
/// `COMPOSITION`: whether a string containing one of these normalizes
/// to NFC without change depends on what precedes it, so quick-check
/// can only ever answer `Maybe`.
static NFC_QC_MAYBE: &[char] = &[
    '\u{0300}', '\u{0301}', '\u{0302}', '\u{0303}', '\u{0307}', '\u{0308}',
    '\u{030A}', '\u{0323}', '\u{0327}',
];

pub(crate) fn is_nfc_no(c: char) -> bool {
    NFC_QC_NO.contains(&c)
}

pub(crate) fn is_nfc_maybe(c: char) -> bool {
    NFC_QC_MAYBE.contains(&c)
}

/// NFKC has every NFC exclusion plus everything with a compatibility
/// (but not canonical) decomposition of its own: such code points
/// always change under NFKC and never recompose.
pub(crate) fn is_nfkc_no(c: char) -> bool {
    is_nfc_no(c)
        || (COMPATIBILITY_DECOMP
            .binary_search_by_key(&c, |&(from, _)| from)
            .is_ok())
}

pub(crate) fn is_nfkc_maybe(c: char) -> bool {
    is_nfc_maybe(c)
}

/// NFD_QC=No exactly for code points with a canonical decomposition of
/// their own, plus the whole Hangul Syllables block (decomposed
/// algorithmically rather than through `CANONICAL_DECOMP`).
pub(crate) fn is_nfd_no(c: char) -> bool {
    crate::hangul::is_syllable(c) || canonical_decomposition(c).is_some()
}

/// NFKD_QC=No for anything NFD_QC=No flags, plus anything with a
/// compatibility decomposition.
pub(crate) fn is_nfkd_no(c: char) -> bool {
    is_nfd_no(c) || compatibility_decomposition(c).is_some()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn combining_class_known_values() {
        assert_eq!(combining_class('\u{0300}'), 230);
        assert_eq!(combining_class('\u{0323}'), 220);
        assert_eq!(combining_class('\u{034F}'), 0);
        assert_eq!(combining_class('\u{0041}'), 0); // unlisted -> starter
    }

    #[test]
    fn decomposition_round_trip_chain() {
        assert_eq!(
            canonical_decomposition('\u{1E0A}'),
            Some(&['\u{0044}', '\u{0307}'][..])
        );
        assert_eq!(canonical_decomposition('\u{0041}'), None);
    }

    #[test]
    fn composition_excludes_singletons() {
        assert_eq!(composition('\u{0044}', '\u{0307}'), Some('\u{1E0A}'));
        // Hebrew presentation forms are excluded: no entry exists.
        assert_eq!(composition('\u{05E9}', '\u{05C1}'), None);
    }

    #[test]
    fn fdfa_expands_to_eighteen_code_points() {
        assert_eq!(compatibility_decomposition('\u{FDFA}').unwrap().len(), 18);
    }
}
