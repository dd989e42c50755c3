use super::*;

// =============================================================================
// parse_token_response
// =============================================================================

#[test]
fn parse_token_response_extracts_token() {
    let token = parse_token_response(r#"{"token":"abc123"}"#).unwrap();
    assert_eq!(token, "abc123");
}

#[test]
fn parse_token_response_ignores_extra_fields() {
    let token = parse_token_response(r#"{"token":"t1","expires_in":7200}"#).unwrap();
    assert_eq!(token, "t1");
}

#[test]
fn parse_token_response_missing_token_is_error() {
    let err = parse_token_response(r#"{"success":true}"#).unwrap_err();
    assert!(matches!(err, AuthError::MalformedResponse(_)));
}

#[test]
fn parse_token_response_invalid_json_is_error() {
    let err = parse_token_response("Invalid credentials\n").unwrap_err();
    assert!(matches!(err, AuthError::MalformedResponse(_)));
}

// =============================================================================
// HttpAuthBackend construction
// =============================================================================

#[test]
fn login_url_joins_base_and_path() {
    let backend = HttpAuthBackend::new("http://localhost:8000").unwrap();
    assert_eq!(backend.login_url, "http://localhost:8000/auth/login");
}

#[test]
fn login_url_tolerates_trailing_slash() {
    let backend = HttpAuthBackend::new("http://address_module_backend:8000/").unwrap();
    assert_eq!(backend.login_url, "http://address_module_backend:8000/auth/login");
}

// =============================================================================
// Wire shape
// =============================================================================

#[test]
fn credentials_serialize_to_backend_shape() {
    let creds = Credentials { identifier: "admin".into(), password: "hunter2".into() };
    let value = serde_json::to_value(&creds).unwrap();
    assert_eq!(value, serde_json::json!({"identifier": "admin", "password": "hunter2"}));
}

#[test]
fn credentials_deserialize_requires_both_fields() {
    let missing_password = serde_json::from_str::<Credentials>(r#"{"identifier":"admin"}"#);
    assert!(missing_password.is_err());

    let missing_identifier = serde_json::from_str::<Credentials>(r#"{"password":"hunter2"}"#);
    assert!(missing_identifier.is_err());
}
