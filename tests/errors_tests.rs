use std::error::Error;
use hb_reminder::errors::ReminderError;

#[test]
fn test_reminder_error_implements_error_trait() {
    fn assert_error<T: Error>(_: &T) {}

    let error = ReminderError::ConfigurationError("test error".to_string());
    assert_error(&error);
}

#[test]
fn test_reminder_error_display() {
    let error = ReminderError::ConfigurationError("PHONE_NUMBER: not set".to_string());
    assert_eq!(
        format!("{error}"),
        "Invalid configuration: PHONE_NUMBER: not set"
    );

    let error = ReminderError::DeliveryError("MessageBird returned 503".to_string());
    assert_eq!(
        format!("{error}"),
        "Failed to deliver notification: MessageBird returned 503"
    );
}

#[test]
fn test_reminder_error_kinds() {
    assert!(ReminderError::ConfigurationError(String::new()).is_configuration());
    assert!(!ReminderError::ConfigurationError(String::new()).is_delivery());
    assert!(ReminderError::DeliveryError(String::new()).is_delivery());
}

#[test]
fn test_reminder_error_from_conversions() {
    let err: ReminderError = serde_json::from_str::<serde_json::Value>("{")
        .unwrap_err()
        .into();
    assert!(err.is_configuration());

    let err: ReminderError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
    match err {
        ReminderError::ConfigurationError(msg) => assert!(msg.contains("gone")),
        other => panic!("Unexpected error type: {other:?}"),
    }

    // reqwest::Error has no public constructor; checking the conversion compiles is enough
    #[allow(unused)]
    #[allow(clippy::items_after_statements)]
    fn _check_reqwest_conversion(err: reqwest::Error) -> ReminderError {
        ReminderError::from(err)
    }
}

#[test]
fn test_reminder_error_converts_to_lambda_error() {
    let lambda_err = lambda_runtime::Error::from(ReminderError::DeliveryError("down".to_string()));
    assert!(lambda_err.to_string().contains("down"));
}
