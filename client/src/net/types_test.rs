use super::*;

// =============================================================
// Project
// =============================================================

#[test]
fn project_reads_mongo_style_id() {
    let raw = r#"{"_id":"68b6e315","projectName":"Checkout","projectDesc":"Load tests","createdAt":"2025-09-02T10:00:00Z"}"#;
    let project: Project = serde_json::from_str(raw).unwrap();
    assert_eq!(project.id, "68b6e315");
    assert_eq!(project.name, "Checkout");
    assert_eq!(project.description, "Load tests");
    assert_eq!(project.created_at.as_deref(), Some("2025-09-02T10:00:00Z"));
}

#[test]
fn project_accepts_plain_id_and_missing_optional_fields() {
    let project: Project = serde_json::from_str(r#"{"id":"p1","projectName":"Only name"}"#).unwrap();
    assert_eq!(project.id, "p1");
    assert_eq!(project.description, "");
    assert_eq!(project.created_at, None);
}

#[test]
fn project_draft_serializes_backend_field_names() {
    let draft = ProjectDraft { name: "Api".to_owned(), description: "Smoke".to_owned() };
    assert_eq!(
        serde_json::to_value(&draft).unwrap(),
        serde_json::json!({ "projectName": "Api", "projectDesc": "Smoke" })
    );
}

#[test]
fn project_draft_from_project_copies_editable_fields() {
    let project = Project {
        id: "p1".to_owned(),
        name: "Api".to_owned(),
        description: "Smoke".to_owned(),
        created_at: None,
    };
    let draft = ProjectDraft::from_project(&project);
    assert_eq!(draft.name, "Api");
    assert_eq!(draft.description, "Smoke");
}

// =============================================================
// Envelopes
// =============================================================

#[test]
fn envelope_unwraps_data_field() {
    let env: Envelope<Project> = serde_json::from_str(r#"{"data":{"_id":"p1","projectName":"A"}}"#).unwrap();
    assert_eq!(env.into_inner().id, "p1");
}

#[test]
fn envelope_accepts_bare_record() {
    let env: Envelope<Project> = serde_json::from_str(r#"{"_id":"p2","projectName":"B"}"#).unwrap();
    assert_eq!(env.into_inner().id, "p2");
}

#[test]
fn list_envelope_missing_or_null_data_is_empty() {
    let missing: ListEnvelope<Project> = serde_json::from_str(r#"{"success":true}"#).unwrap();
    assert!(missing.into_items().is_empty());
    let null: ListEnvelope<Project> = serde_json::from_str(r#"{"data":null}"#).unwrap();
    assert!(null.into_items().is_empty());
}

#[test]
fn list_envelope_returns_items_in_order() {
    let raw = r#"{"data":[{"_id":"a","projectName":"A"},{"_id":"b","projectName":"B"}]}"#;
    let items = serde_json::from_str::<ListEnvelope<Project>>(raw).unwrap().into_items();
    let ids: Vec<_> = items.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, ["a", "b"]);
}

// =============================================================
// User normalization
// =============================================================

fn user_from(raw: &str) -> User {
    serde_json::from_str::<UserPayload>(raw).unwrap().into()
}

#[test]
fn user_payload_normalizes_all_known_shapes() {
    let expected = User { name: "Ada".to_owned(), email: "ada@example.com".to_owned() };
    assert_eq!(user_from(r#"{"data":{"name":"Ada","email":"ada@example.com"}}"#), expected);
    assert_eq!(user_from(r#"{"user":{"name":"Ada","email":"ada@example.com"}}"#), expected);
    assert_eq!(user_from(r#"{"name":"Ada","email":"ada@example.com"}"#), expected);
}

#[test]
fn user_display_falls_back_to_placeholders() {
    let user = User::default();
    assert_eq!(user.display_name(), "User");
    assert_eq!(user.display_email(), "user@example.com");
}

// =============================================================
// Auth bodies
// =============================================================

#[test]
fn login_response_reads_token() {
    let ok: AuthResponse = serde_json::from_str(r#"{"token":"abc","message":"ok"}"#).unwrap();
    assert_eq!(ok.token, "abc");
}

#[test]
fn login_response_without_token_is_rejected() {
    assert!(serde_json::from_str::<AuthResponse>(r#"{"message":"no token"}"#).is_err());
}

#[test]
fn register_response_without_token_still_succeeds() {
    let resp: RegisterResponse = serde_json::from_str(r#"{"message":"User registered"}"#).unwrap();
    assert_eq!(resp.token, None);
    assert_eq!(resp.session_token(), None);
    assert_eq!(resp.message.as_deref(), Some("User registered"));
}

#[test]
fn register_response_keeps_issued_token() {
    let resp: RegisterResponse = serde_json::from_str(r#"{"token":"jwt-1"}"#).unwrap();
    assert_eq!(resp.session_token(), Some("jwt-1"));
}

#[test]
fn register_response_ignores_blank_token() {
    let resp: RegisterResponse = serde_json::from_str(r#"{"token":"  "}"#).unwrap();
    assert_eq!(resp.session_token(), None);
}

#[test]
fn register_request_serializes_all_form_fields() {
    let req = RegisterRequest {
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        password: "Abcdef1!".to_owned(),
        otp: "123456".to_owned(),
    };
    assert_eq!(
        serde_json::to_value(&req).unwrap(),
        serde_json::json!({
            "name": "Ada",
            "email": "ada@example.com",
            "password": "Abcdef1!",
            "otp": "123456"
        })
    );
}
