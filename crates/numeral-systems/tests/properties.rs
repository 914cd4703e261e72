//! Property tests for the conversion contracts.

use numeral_systems::{
    parse_by_radix, parse_positive, parse_positive_by_radix, parse_positive_from_decimal,
    parse_positive_from_hex, parse_positive_from_octal, render, try_parse_by_radix,
    try_parse_positive_by_radix, try_parse_positive_from_decimal, try_parse_positive_from_hex,
    try_parse_positive_from_octal, ParseError, Radix,
};
use proptest::prelude::*;

fn any_radix() -> impl Strategy<Value = Radix> {
    prop::sample::select(Radix::ALL.to_vec())
}

/// The `(success, value)` pair a probing form reports for a strict result.
fn folded(result: Result<i32, ParseError>) -> (bool, i32) {
    result.map_or((false, 0), |value| (true, value))
}

proptest! {
    #[test]
    fn render_then_parse_roundtrips(value in any::<i32>(), radix in any_radix()) {
        let text = render(value, radix);
        let raw = i32::try_from(radix.value()).expect("radix fits in i32");
        prop_assert_eq!(parse_by_radix(&text, raw), Ok(value));
    }

    #[test]
    fn lower_case_hex_roundtrips(value in any::<i32>()) {
        let text = render(value, Radix::Hex).to_lowercase();
        prop_assert_eq!(parse_by_radix(&text, 16), Ok(value));
    }

    #[test]
    fn non_negative_values_parse_positively(value in 0..=i32::MAX) {
        prop_assert_eq!(parse_positive_from_decimal(&render(value, Radix::Decimal)), Ok(value));

        let hex = render(value, Radix::Hex);
        if !hex.starts_with('F') {
            prop_assert_eq!(parse_positive_from_hex(&hex), Ok(value));
        }

        let octal = render(value, Radix::Octal);
        if !octal.starts_with("37") {
            prop_assert_eq!(parse_positive_from_octal(&octal), Ok(value));
        }
    }

    #[test]
    fn negative_decimal_is_never_positive(value in i32::MIN..0) {
        prop_assert!(parse_positive_from_decimal(&render(value, Radix::Decimal)).is_err());
    }

    // 0xF800_0000 is the first word whose 11-digit octal form starts with `37`.
    #[test]
    fn octal_sign_marker_covers_top_of_range(value in -134_217_728..0i32) {
        prop_assert_eq!(
            parse_positive_from_octal(&render(value, Radix::Octal)),
            Err(ParseError::ImpliedNegative { radix: Radix::Octal })
        );
    }

    #[test]
    fn hex_sign_nibble_covers_top_of_range(value in -268_435_456..0i32) {
        prop_assert_eq!(
            parse_positive_from_hex(&render(value, Radix::Hex)),
            Err(ParseError::ImpliedNegative { radix: Radix::Hex })
        );
    }

    #[test]
    fn probing_only_fails_loudly_on_radix(source in "\\PC{0,16}", radix in any_radix()) {
        let raw = i32::try_from(radix.value()).expect("radix fits in i32");
        prop_assert_eq!(try_parse_by_radix(&source, raw), Ok(folded(parse_by_radix(&source, raw))));
        prop_assert_eq!(
            try_parse_positive_by_radix(&source, raw),
            Ok(folded(parse_positive_by_radix(&source, raw)))
        );
    }

    #[test]
    fn radix_specific_probing_matches_strict(source in "[0-9a-gA-G37F\\-#]{0,12}") {
        prop_assert_eq!(
            try_parse_positive_from_octal(&source),
            folded(parse_positive_from_octal(&source))
        );
        prop_assert_eq!(
            try_parse_positive_from_decimal(&source),
            folded(parse_positive_from_decimal(&source))
        );
        prop_assert_eq!(
            try_parse_positive_from_hex(&source),
            folded(parse_positive_from_hex(&source))
        );
    }

    #[test]
    fn positive_forms_never_return_negative(
        source in "[0-9A-Fa-f\\-]{1,14}",
        radix in any_radix(),
    ) {
        let raw = i32::try_from(radix.value()).expect("radix fits in i32");
        if let Ok(value) = parse_positive(&source, radix) {
            prop_assert!(value >= 0, "{source} in {radix} gave {value}");
        }
        if let Ok(value) = parse_positive_by_radix(&source, raw) {
            prop_assert!(value >= 0, "{source} in {radix} gave {value}");
        }
    }

    #[test]
    fn unsupported_radix_ignores_source(source in "\\PC{0,16}", radix in any::<i32>()) {
        prop_assume!(Radix::from_i32(radix).is_none());
        prop_assert_eq!(
            try_parse_by_radix(&source, radix),
            Err(ParseError::UnsupportedRadix { radix })
        );
        prop_assert_eq!(
            try_parse_positive_by_radix(&source, radix),
            Err(ParseError::UnsupportedRadix { radix })
        );
    }
}
