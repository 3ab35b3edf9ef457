#![allow(
    clippy::tests_outside_test_module,
    clippy::unwrap_used,
    clippy::indexing_slicing,
    reason = "This is an integration test."
)]

use rstest::rstest;
use shortuuid::{
    DecodeError, DecodeReason, EncodeError, EncodeReason, Error, expand, expand_uuid, shorten,
    shorten_uuid_str,
};

#[rstest]
#[case::too_short(
    "12345",
    "invalid UUID format: expected 32 hex characters after removing hyphens, got 5"
)]
#[case::too_long(
    "12345678-1234-5678-9abc-123456789abcdef",
    "invalid UUID format: expected 32 hex characters after removing hyphens, got 35"
)]
#[case::invalid_hex(
    "gggggggg-gggg-gggg-gggg-gggggggggggg",
    "invalid UUID format: contains non-hex characters (valid characters: 0-9, a-f, A-F, hyphens)"
)]
#[case::not_a_uuid(
    "not-a-uuid",
    "invalid UUID format: expected 32 hex characters after removing hyphens, got 8"
)]
fn invalid_uuid_text(#[case] input: &str, #[case] reason: &str) {
    let err: EncodeError = shorten_uuid_str(input).unwrap_err();

    assert_eq!(err.input(), input);
    assert_eq!(err.reason().to_string(), reason);
    assert_eq!(
        err.to_string(),
        format!("encode error for input '{input}': {reason}")
    );
}

#[rstest]
#[case::at("@#$%", '@', 0)]
#[case::hash("abc#", '#', 3)]
#[case::percent("a%b", '%', 1)]
#[case::space("ab cd", ' ', 2)]
#[case::hyphen("4890586e-32a5", '-', 8)]
#[case::underscore("_", '_', 0)]
fn invalid_short_id(#[case] short_id: &str, #[case] character: char, #[case] position: usize) {
    let expected = DecodeReason::InvalidCharacter {
        character,
        position,
    };

    let err: DecodeError = expand(short_id).unwrap_err();
    assert_eq!(err.short_id(), short_id);
    assert_eq!(err.reason(), &expected);
    assert_eq!(
        err.to_string(),
        format!(
            "decode error for short ID '{short_id}': invalid character '{character}' in short ID (valid characters: 0-9, A-Z, a-z)"
        )
    );

    let err = expand_uuid(short_id).unwrap_err();
    assert_eq!(err.reason(), &expected);
}

#[test]
fn empty_string_is_asymmetric() {
    let err = shorten("").unwrap_err();
    assert_eq!(err.reason(), &EncodeReason::EmptyInput);

    assert_eq!(expand("").unwrap(), "");
}

#[test]
fn errors_are_inspectable_through_the_crate_error() {
    let errors: Vec<Error> = vec![
        shorten("").unwrap_err().into(),
        expand("@#$%").unwrap_err().into(),
    ];

    match &errors[..] {
        [Error::Encode(encode), Error::Decode(decode)] => {
            assert_eq!(encode.input(), "");
            assert_eq!(decode.short_id(), "@#$%");
        }
        other => panic!("unexpected errors: {other:?}"),
    }
}

#[test]
fn string_path_roundtrip() {
    for input in [
        "4890586e-32a5-4f9c-a000-2a2bb68eb1ce",
        "Hello, World!",
        "a",
        "z\0\0trailing zero bytes survive",
        "ünïcödé ✓",
    ] {
        let short = shorten(input).unwrap();
        assert!(short.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_eq!(expand(&short).unwrap(), input);
    }
}
