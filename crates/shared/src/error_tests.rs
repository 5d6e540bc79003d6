use super::*;
use rstest::rstest;

#[rstest]
#[case(AppError::Validation("test".into()), 400, "VALIDATION_ERROR")]
#[case(AppError::BusinessRule("test".into()), 422, "BUSINESS_RULE_VIOLATION")]
#[case(AppError::Dataset("test".into()), 500, "DATASET_ERROR")]
#[case(AppError::Configuration("test".into()), 500, "CONFIGURATION_ERROR")]
#[case(AppError::Internal("test".into()), 500, "INTERNAL_ERROR")]
fn test_app_error_mapping(#[case] err: AppError, #[case] status: u16, #[case] code: &str) {
    assert_eq!(err.status_code(), status);
    assert_eq!(err.error_code(), code);
}

#[test]
fn test_app_error_display() {
    assert_eq!(
        format!("{}", AppError::Validation("msg".into())),
        "Validation error: msg"
    );
    assert_eq!(
        format!("{}", AppError::BusinessRule("msg".into())),
        "Business rule violation: msg"
    );
    assert_eq!(
        format!("{}", AppError::Dataset("msg".into())),
        "Dataset error: msg"
    );
    assert_eq!(
        format!("{}", AppError::Internal("msg".into())),
        "Internal error: msg"
    );
}

#[test]
fn test_config_error_conversion() {
    let err: AppError = config::ConfigError::Message("bad port".into()).into();
    assert_eq!(err.error_code(), "CONFIGURATION_ERROR");
    assert_eq!(err.to_string(), "Configuration error: bad port");
}
