//! Tests for single-value converters.

use framer_model::{FractionStyle, Vocabulary};
use framer_transform::normalization::{
    Dimension, boolean_from_flag, dimension, fraction, inches, lookup, replace_newline, timestamp,
    upper,
};
use proptest::prelude::*;

#[test]
fn upper_trims_and_uppercases() {
    assert_eq!(upper(Some(" abc ")).as_deref(), Some("ABC"));
    assert_eq!(upper(None), None);
}

#[test]
fn flag_literals() {
    assert!(boolean_from_flag(Some("1")));
    assert!(!boolean_from_flag(Some("0")));
    assert!(!boolean_from_flag(Some("")));
    assert!(!boolean_from_flag(Some("true")));
    assert!(!boolean_from_flag(None));
}

#[test]
fn timestamps_render_month_first() {
    assert_eq!(
        timestamp(Some("3/4/2015")).as_deref(),
        Some("03/04/2015 00:00:00")
    );
    assert_eq!(
        timestamp(Some("03/04/15 13:05:09")).as_deref(),
        Some("03/04/2015 13:05:09")
    );
    assert_eq!(
        timestamp(Some("2015-03-04T08:30:00")).as_deref(),
        Some("03/04/2015 08:30:00")
    );
    assert_eq!(timestamp(Some("next week")), None);
    assert_eq!(timestamp(Some("13/45/2015")), None);
    assert_eq!(timestamp(None), None);
}

#[test]
fn every_vocabulary_entry_maps_to_its_value() {
    for vocabulary in Vocabulary::ALL {
        for (code, value) in vocabulary.entries() {
            assert_eq!(
                lookup(Some(code), vocabulary).as_deref(),
                *value,
                "{} {code}",
                vocabulary.name()
            );
        }
    }
}

#[test]
fn unmapped_codes_are_missing() {
    assert_eq!(lookup(Some("ZZZ"), Vocabulary::OrderStatus), None);
    assert_eq!(lookup(None, Vocabulary::OrderStatus), None);
}

#[test]
fn status_differs_between_schema_versions() {
    assert_eq!(
        lookup(Some("A"), Vocabulary::OrderStatus).as_deref(),
        Some("Closed")
    );
    assert_eq!(
        lookup(Some("A"), Vocabulary::OrderStatusV1).as_deref(),
        Some("Archived")
    );
    assert_eq!(
        lookup(Some("V"), Vocabulary::OrderStatus).as_deref(),
        Some("Void")
    );
    assert_eq!(lookup(Some("V"), Vocabulary::OrderStatusV1), None);
}

#[test]
fn category_lookup_trims() {
    assert_eq!(
        lookup(Some(" Dealer "), Vocabulary::AccountCategory).as_deref(),
        Some("Dealer")
    );
}

#[test]
fn dimensions() {
    assert_eq!(dimension(Some("24 1/2")), Dimension::new(49, 2));
    assert_eq!(dimension(Some("24")), Some(Dimension::whole(24)));
    assert_eq!(dimension(Some("bogus")), None);
    assert_eq!(inches(Some("24 3/4")), Some(24));
}

#[test]
fn newline_folding_strips_backticks() {
    assert_eq!(
        replace_newline(Some("`framed\r\nwith care`"), " ").as_deref(),
        Some("framed with care")
    );
}

proptest! {
    #[test]
    fn converters_are_total(raw in any::<String>()) {
        let input = Some(raw.as_str());
        let _ = upper(input);
        let _ = replace_newline(input, " ");
        let _ = timestamp(input);
        let _ = dimension(input);
        let _ = inches(input);
        let _ = fraction(input, FractionStyle::DotPrefixed);
        prop_assert!(fraction(input, FractionStyle::QuoteSuffixed).is_some());
        for vocabulary in Vocabulary::ALL {
            let _ = lookup(input, vocabulary);
        }
    }

    #[test]
    fn upper_is_idempotent(raw in "[ a-zA-Z0-9]{0,12}") {
        let once = upper(Some(&raw));
        prop_assert_eq!(upper(once.as_deref()), once.clone());
    }

    #[test]
    fn folded_text_has_no_line_breaks(raw in "[a-z \r\n\u{0b}\u{10}`]{0,24}") {
        let folded = replace_newline(Some(&raw), " ").unwrap_or_default();
        prop_assert!(!folded.contains(['\r', '\n', '\x0b', '\x10']));
    }

    #[test]
    fn mixed_fractions_split_into_inches_and_remainder(
        whole in 0i64..200,
        numer in 1i64..16,
    ) {
        let text = format!("{whole} {numer}/16");
        let parsed = dimension(Some(&text)).expect("mixed fraction parses");
        prop_assert_eq!(Some(parsed), Dimension::new(whole * 16 + numer, 16));
        prop_assert_eq!(inches(Some(&text)), Some(whole));
        let rendered = fraction(Some(&text), FractionStyle::DotPrefixed).expect("sixteenths");
        prop_assert_eq!(rendered, format!(".{}", parsed.remainder()));
    }
}
