mod common;

use axum::{
    body::Body,
    http::{self, Request, StatusCode},
};
use hmac::{Hmac, Mac};
use pagereply_rust_ws::create_app_router;
use sha2::Sha256;
use tower::ServiceExt; // for `oneshot`

use common::{test_state, APP_SECRET, VERIFY_TOKEN};

fn sign(body: &[u8], secret: &str) -> String {
    let mut mac = Hmac::<Sha256>::new_from_slice(secret.as_bytes()).unwrap();
    mac.update(body);
    format!("sha256={}", hex::encode(mac.finalize().into_bytes()))
}

const EVENT_BODY: &str = r#"
{
    "object": "page",
    "entry": [
        {
            "id": "1234567890",
            "time": 1678901234,
            "messaging": [
                {
                    "sender": { "id": "9876543210" },
                    "recipient": { "id": "1234567890" },
                    "timestamp": 1678901234,
                    "message": { "mid": "m_abc123", "text": "hello page" }
                }
            ]
        }
    ]
}
"#;

#[tokio::test]
async fn handshake_echoes_the_challenge_for_the_correct_token() {
    let (state, _store) = test_state("http://127.0.0.1:9", APP_SECRET);
    let app = create_app_router(state);

    let uri = format!(
        "/webhook?hub.mode=subscribe&hub.verify_token={VERIFY_TOKEN}&hub.challenge=xyz123"
    );
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&body[..], b"xyz123");
}

#[tokio::test]
async fn handshake_rejects_a_wrong_token_with_an_empty_body() {
    let (state, _store) = test_state("http://127.0.0.1:9", APP_SECRET);
    let app = create_app_router(state);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/webhook?hub.mode=subscribe&hub.verify_token=wrong&hub.challenge=xyz123")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert!(body.is_empty());
}

#[tokio::test]
async fn handshake_rejects_a_missing_mode() {
    let (state, _store) = test_state("http://127.0.0.1:9", APP_SECRET);
    let app = create_app_router(state);

    let response = app
        .oneshot(
            Request::builder()
                .uri(format!(
                    "/webhook?hub.verify_token={VERIFY_TOKEN}&hub.challenge=xyz123"
                ))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn event_with_a_valid_signature_is_acknowledged() {
    let (state, _store) = test_state("http://127.0.0.1:9", APP_SECRET);
    let app = create_app_router(state);

    let signature = sign(EVENT_BODY.as_bytes(), APP_SECRET);
    let response = app
        .oneshot(
            Request::builder()
                .method(http::Method::POST)
                .uri("/webhook")
                .header(http::header::CONTENT_TYPE, mime::APPLICATION_JSON.as_ref())
                .header("x-hub-signature-256", signature)
                .body(Body::from(EVENT_BODY))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn event_with_a_tampered_signature_is_rejected() {
    let (state, _store) = test_state("http://127.0.0.1:9", APP_SECRET);
    let app = create_app_router(state);

    // Signature computed over different bytes than the request carries.
    let signature = sign(b"something else entirely", APP_SECRET);
    let response = app
        .oneshot(
            Request::builder()
                .method(http::Method::POST)
                .uri("/webhook")
                .header(http::header::CONTENT_TYPE, mime::APPLICATION_JSON.as_ref())
                .header("x-hub-signature-256", signature)
                .body(Body::from(EVENT_BODY))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn event_without_a_signature_is_rejected() {
    let (state, _store) = test_state("http://127.0.0.1:9", APP_SECRET);
    let app = create_app_router(state);

    let response = app
        .oneshot(
            Request::builder()
                .method(http::Method::POST)
                .uri("/webhook")
                .header(http::header::CONTENT_TYPE, mime::APPLICATION_JSON.as_ref())
                .body(Body::from(EVENT_BODY))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn empty_secret_acknowledges_even_an_unparseable_body() {
    let (state, _store) = test_state("http://127.0.0.1:9", "");
    let app = create_app_router(state);

    let response = app
        .oneshot(
            Request::builder()
                .method(http::Method::POST)
                .uri("/webhook")
                .header(http::header::CONTENT_TYPE, mime::APPLICATION_JSON.as_ref())
                .body(Body::from("not json at all"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn root_answers_the_liveness_probe() {
    let (state, _store) = test_state("http://127.0.0.1:9", APP_SECRET);
    let app = create_app_router(state);

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
