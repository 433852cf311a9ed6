//! Error taxonomy: stable codes, display formats, conversions

use shortdash::errors::ShortdashError;

#[test]
fn codes_are_stable_per_variant() {
    assert_eq!(ShortdashError::network("x").code(), "E001");
    assert_eq!(ShortdashError::api_status(404, "x").code(), "E002");
    assert_eq!(ShortdashError::malformed_response("x").code(), "E003");
    assert_eq!(ShortdashError::validation("x").code(), "E004");
    assert_eq!(ShortdashError::config("x").code(), "E005");
    assert_eq!(ShortdashError::date_parse("x").code(), "E006");
    assert_eq!(ShortdashError::io("x").code(), "E007");
}

#[test]
fn api_status_message_includes_status_and_body() {
    let err = ShortdashError::api_status(502, "upstream unavailable");
    let message = err.message();
    assert!(message.contains("502"), "got: {}", message);
    assert!(message.contains("upstream unavailable"), "got: {}", message);
}

#[test]
fn format_simple_combines_type_and_message() {
    let err = ShortdashError::validation("add at least one link");
    assert_eq!(
        err.format_simple(),
        "Validation Error: add at least one link"
    );
    assert_eq!(format!("{}", err), err.format_simple());
}

#[test]
fn io_errors_convert() {
    let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let err: ShortdashError = io_err.into();
    assert!(matches!(err, ShortdashError::Io(_)));
    assert!(err.message().contains("denied"));
}

#[test]
fn error_is_std_error() {
    let err = ShortdashError::network("timed out");
    let _: &dyn std::error::Error = &err;
}
