use super::*;

#[test]
fn unauthorized_on_authenticated_endpoint_is_not_generic() {
    let err = failure_from_body(401, r#"{"message":"jwt expired"}"#, Auth::Bearer, None);
    assert_eq!(err, ApiError::Unauthorized);
    assert!(err.is_unauthorized());
    assert_eq!(err.to_string(), "Unauthorized: Please log in");
}

#[test]
fn unauthorized_on_login_surfaces_backend_message() {
    let err = failure_from_body(401, r#"{"message":"Invalid credentials"}"#, Auth::None, Some("Login failed"));
    assert_eq!(err, ApiError::Status { status: 401, message: "Invalid credentials".to_owned() });
    assert!(!err.is_unauthorized());
}

#[test]
fn missing_message_uses_fallback() {
    let err = failure_from_body(500, "{}", Auth::None, Some("Failed to send OTP"));
    assert_eq!(err.to_string(), "Failed to send OTP");
}

#[test]
fn blank_message_uses_fallback() {
    let err = failure_from_body(400, r#"{"message":"  "}"#, Auth::None, Some("Registration failed"));
    assert_eq!(err.to_string(), "Registration failed");
}

#[test]
fn non_json_body_without_fallback_reports_status() {
    let err = failure_from_body(503, "<html>bad gateway</html>", Auth::Bearer, None);
    assert_eq!(err.to_string(), "HTTP error! status: 503");
}

#[test]
fn decode_body_maps_parse_errors() {
    let err = decode_body::<crate::net::types::AuthResponse>("not json").unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
    assert_eq!(err.to_string(), "Invalid server response");
}

#[test]
fn login_non_json_body_is_invalid_response() {
    let err = login_failure(502, "<html>bad gateway</html>");
    assert!(matches!(err, ApiError::Decode(_)));
    assert_eq!(err.to_string(), "Invalid server response");
}

#[test]
fn login_json_body_without_message_uses_login_fallback() {
    assert_eq!(login_failure(500, "{}").to_string(), "Login failed");
}

#[test]
fn login_rejection_keeps_backend_message() {
    let err = login_failure(401, r#"{"message":"Invalid credentials"}"#);
    assert_eq!(err, ApiError::Status { status: 401, message: "Invalid credentials".to_owned() });
}
