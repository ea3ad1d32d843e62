use super::*;

#[test]
fn auth_endpoint_formats_versioned_path() {
    assert_eq!(auth_endpoint("send-otp"), "/api/v1/auth/send-otp");
    assert_eq!(auth_endpoint("me"), "/api/v1/auth/me");
}

#[test]
fn project_endpoint_collection_keeps_trailing_slash() {
    assert_eq!(project_endpoint(None), "/api/v1/project/");
}

#[test]
fn project_endpoint_record_appends_id() {
    assert_eq!(project_endpoint(Some("68b6e315")), "/api/v1/project/68b6e315");
}

#[test]
fn endpoint_url_joins_origin_and_path() {
    assert_eq!(endpoint_url("http://localhost:5000", "/api/v1/project/"), "http://localhost:5000/api/v1/project/");
}

#[test]
fn bearer_header_formats_token() {
    assert_eq!(bearer_header("abc.def"), "Bearer abc.def");
}

#[test]
fn api_origin_has_no_trailing_slash() {
    assert!(!api_origin().ends_with('/'));
    assert!(api_origin().starts_with("http"));
}

#[test]
fn google_auth_url_targets_oauth_entry() {
    assert_eq!(google_auth_url(), format!("{}/api/v1/auth/google", api_origin()));
}

#[test]
fn encode_uses_backend_field_names() {
    let draft = ProjectDraft { name: "Api".to_owned(), description: "Smoke".to_owned() };
    let json: serde_json::Value = serde_json::from_str(&encode(&draft).unwrap()).unwrap();
    assert_eq!(json, serde_json::json!({ "projectName": "Api", "projectDesc": "Smoke" }));
}
