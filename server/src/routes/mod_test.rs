use super::*;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use tower::ServiceExt;

fn guarded(enabled: bool) -> Router {
    host_routes()
        .route("/app", get(|| async { "dashboard" }))
        .layer(middleware::from_fn_with_state(enabled, session_guard::guard))
}

#[tokio::test]
async fn healthz_reports_ok() {
    let resp = host_routes()
        .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let value: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(value, json!({ "ok": true }));
}

#[tokio::test]
async fn guard_redirects_without_cookie() {
    let resp = guarded(true)
        .oneshot(Request::builder().uri("/app").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/login");
}

#[tokio::test]
async fn guard_passes_with_cookie() {
    let req = Request::builder()
        .uri("/app")
        .header(header::COOKIE, "token=abc")
        .body(Body::empty())
        .unwrap();
    let resp = guarded(true).oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn guard_ignores_empty_cookie() {
    let req = Request::builder()
        .uri("/app")
        .header(header::COOKIE, "token=")
        .body(Body::empty())
        .unwrap();
    let resp = guarded(true).oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
}

#[tokio::test]
async fn disabled_guard_passes_through() {
    let resp = guarded(false)
        .oneshot(Request::builder().uri("/app").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn healthz_is_never_guarded() {
    let resp = guarded(true)
        .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn guard_accepts_the_cookie_the_client_writes() {
    let req = Request::builder()
        .uri("/app")
        .header(header::COOKIE, format!("{}=jwt", client::util::session::TOKEN_COOKIE))
        .body(Body::empty())
        .unwrap();
    let resp = guarded(true).oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}
