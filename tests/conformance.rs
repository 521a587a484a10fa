// Copyright 2012-2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Literal scenario tests drawn straight from the crate's own worked
//! examples: expansion-factor boundaries, idempotence, quick-check
//! soundness, and the CGJ/stream-safety guarantees of the streaming
//! engine.

extern crate unorm_stream;

use unorm_stream::{
    cmp_nfd, cmp_nfd_bytes, is_nfc, is_nfd, to_nfc, to_nfc_bytes, to_nfd, to_nfkc, to_nfkd,
    UnicodeNormalization,
};

#[test]
fn expansion_factor_musical_symbol_nfc() {
    let input = "\u{1D160}";
    let out = to_nfc(input);
    assert_eq!(out.len(), 3 * input.len());
}

#[test]
fn hebrew_presentation_form_nfc_has_three_code_points() {
    let out = to_nfc("\u{FB2C}");
    assert_eq!(out.chars().count(), 3);
}

#[test]
fn expansion_factor_iota_with_dialytika_and_tonos_nfd() {
    let input = "\u{0390}";
    let out = to_nfd(input);
    assert_eq!(out.len(), 3 * input.len());
}

#[test]
fn greek_polytonic_chain_nfd_has_four_code_points() {
    let out = to_nfd("\u{1F82}");
    assert_eq!(out.chars().count(), 4);
}

#[test]
fn bismillah_ligature_nfkc_expansion_factor_is_eleven() {
    let input = "\u{FDFA}";
    let out = to_nfkc(input);
    assert_eq!(out.len(), 11 * input.len());
}

#[test]
fn bismillah_ligature_nfkd_has_eighteen_code_points() {
    let out = to_nfkd("\u{FDFA}");
    assert_eq!(out.chars().count(), 18);
}

#[test]
fn d_with_dot_above_round_trips_through_nfd() {
    let out: String = "\u{1E0A}".nfd().collect();
    assert_eq!(out, "\u{0044}\u{0307}");
}

#[test]
fn blocked_mark_keeps_trailing_dot_above_after_nfc() {
    let out = to_nfc("\u{1E0A}\u{0323}");
    assert_eq!(out, "\u{1E0C}\u{0307}");
}

#[test]
fn empty_input_normalizes_to_empty() {
    assert_eq!(to_nfd(""), "");
}

#[test]
fn cafe_with_combining_acute_is_canonically_equivalent_to_precomposed() {
    assert!(cmp_nfd("Voulez-vous un caf\u{00E9}?", "Voulez-vous un cafe\u{0301}?"));
}

#[test]
fn latin_a_and_cyrillic_a_are_not_canonically_equivalent() {
    assert!(!cmp_nfd("\u{0041}", "\u{0410}"));
}

#[test]
fn different_length_strings_are_never_canonically_equivalent() {
    assert!(!cmp_nfd("a", "aa"));
    assert!(!cmp_nfd("", "a"));
}

#[test]
fn quick_check_catches_a_precomposed_letter_as_not_nfd() {
    assert!(!is_nfd("\u{1E0A}"));
    assert!(is_nfd(to_nfd("\u{1E0A}")));
}

#[test]
fn quick_check_demotes_maybe_to_false_even_after_full_normalization() {
    // The NFC of D+dot-above+dot-below leaves a trailing combining mark,
    // whose NFC_QC flag is Maybe, so is_nfc must still answer false.
    assert!(!is_nfc("\u{1E0A}\u{0323}"));
    assert!(!is_nfc(to_nfc("\u{1E0C}\u{0307}")));
}

#[test]
fn idempotence_holds_for_all_four_forms() {
    let sample = "Voulez-vous un caf\u{00E9}? \u{FDFA} \u{1F82} \u{AC01}";
    assert_eq!(to_nfc(&to_nfc(sample)), to_nfc(sample));
    assert_eq!(to_nfd(&to_nfd(sample)), to_nfd(sample));
    assert_eq!(to_nfkc(&to_nfkc(sample)), to_nfkc(sample));
    assert_eq!(to_nfkd(&to_nfkd(sample)), to_nfkd(sample));
}

#[test]
fn hangul_syllable_round_trips_through_nfd_then_nfc() {
    let d = to_nfd("\u{AC01}");
    assert_eq!(d, "\u{1100}\u{1161}\u{11A8}");
    assert_eq!(to_nfc(&d), "\u{AC01}");
}

#[test]
fn hangul_jamo_triple_composes_even_when_split_across_safe_break_windows() {
    // L, V and T jamo are each individually CCC 0, so each one looks
    // like a safe break on its own; none of them may actually be taken
    // as one, or the engine would flush the L+V composite before T
    // arrives and strand it as a separate syllable.
    assert_eq!(to_nfc("\u{1100}\u{1161}\u{11A8}"), "\u{AC01}");
}

#[test]
fn bytes_entry_points_replace_malformed_utf8_with_u_fffd() {
    let malformed = [b'c', b'a', b'f', 0xFF, 0xCC, 0x81];
    assert_eq!(to_nfc_bytes(&malformed), "caf\u{FFFD}\u{0301}");
}

#[test]
fn cmp_nfd_bytes_agrees_with_cmp_nfd() {
    assert!(cmp_nfd_bytes(
        "Voulez-vous un caf\u{00E9}?".as_bytes(),
        "Voulez-vous un cafe\u{0301}?".as_bytes()
    ));
    assert!(!cmp_nfd_bytes(b"a", b"aa"));
}

#[test]
fn stream_safe_inserts_cgj_only_past_the_non_starter_bound() {
    let short: String = std::iter::once('a')
        .chain(std::iter::repeat('\u{0301}').take(5))
        .collect();
    assert_eq!(short.stream_safe().collect::<String>(), short);

    let long_run: String = std::iter::once('a')
        .chain(std::iter::repeat('\u{0301}').take(40))
        .collect();
    let made_safe: String = long_run.stream_safe().collect();
    assert_eq!(made_safe.matches('\u{034F}').count(), 1);
}
