#![cfg(feature = "serde")]

//! Integration tests for serde support of the helper mode.

use helper_curry::Mode;
use rstest::rstest;

#[rstest]
#[case(Mode::Diagnostic, "\"diagnostic\"")]
#[case(Mode::Production, "\"production\"")]
fn test_mode_serializes_lowercase(#[case] mode: Mode, #[case] expected: &str) {
    assert_eq!(serde_json::to_string(&mode).unwrap(), expected);
}

#[rstest]
#[case("\"diagnostic\"", Mode::Diagnostic)]
#[case("\"development\"", Mode::Diagnostic)]
#[case("\"production\"", Mode::Production)]
fn test_mode_deserializes(#[case] json: &str, #[case] expected: Mode) {
    let mode: Mode = serde_json::from_str(json).unwrap();
    assert_eq!(mode, expected);
}

#[rstest]
fn test_mode_rejects_unknown_name() {
    assert!(serde_json::from_str::<Mode>("\"staging\"").is_err());
}

#[rstest]
fn test_mode_inside_config_struct() {
    #[derive(serde::Deserialize)]
    struct Settings {
        mode: Mode,
    }

    let settings: Settings = serde_json::from_str(r#"{ "mode": "production" }"#).unwrap();
    assert_eq!(settings.mode, Mode::Production);
}
