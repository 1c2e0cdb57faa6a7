//! Display, classification and conversion tests for every error variant.

use carport_errors::prelude::*;

#[test]
fn test_all_config_variants_display() -> Result<()> {
    let variants = vec![
        ConfigError::UnrecognizedFingerprint { observed: 3 },
        ConfigError::AmbiguousFingerprint {
            candidates: vec!["JEEP_CHEROKEE".to_string()],
        },
        ConfigError::unsupported("UNKNOWN"),
        ConfigError::parse("carport.yaml", "expected a mapping"),
    ];

    for variant in variants {
        let msg = variant.to_string();
        assert!(!msg.is_empty(), "ConfigError variant should have a message");
    }
    Ok(())
}

#[test]
fn test_startup_errors_are_fatal() -> Result<()> {
    let fatal: Vec<CarportError> = vec![
        ConfigError::UnrecognizedFingerprint { observed: 0 }.into(),
        ConfigError::AmbiguousFingerprint { candidates: vec![] }.into(),
        ConfigError::unsupported("X").into(),
    ];
    for err in fatal {
        assert!(err.is_fatal(), "{err} should be fatal");
        assert_eq!(err.category(), ErrorCategory::Config);
    }
    Ok(())
}

#[test]
fn test_parse_error_is_recoverable() -> Result<()> {
    let err: CarportError = ConfigError::parse("frames.jsonl", "eof").into();
    assert_eq!(err.severity(), ErrorSeverity::Error);
    assert!(!err.is_fatal());
    Ok(())
}

#[test]
fn test_question_mark_conversion() {
    fn inner() -> Result<u32> {
        let checked: std::result::Result<u32, ValidationError> =
            Err(ValidationError::not_finite("min_acc_speed_mph"));
        Ok(checked?)
    }
    let err = inner().err();
    assert!(matches!(err, Some(CarportError::Validation(_))));
}

mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn out_of_range_message_names_field(value in -1.0e6f32..1.0e6f32) {
            let err = ValidationError::out_of_range("steer_max", value, 0.0, 1000.0);
            prop_assert!(err.to_string().contains("steer_max"));
        }
    }
}
