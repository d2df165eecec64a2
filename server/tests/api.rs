use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use rpc_core::GetOutputOutput;
use rpc_server::app;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

// --- homepage ---

#[tokio::test]
async fn homepage_says_hello() {
    let resp = app()
        .unwrap()
        .oneshot(Request::builder().uri("/").body(String::new()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = body_json(resp).await;
    assert_eq!(body, json!({"hello": "world"}));
}

// --- get-output ---

#[tokio::test]
async fn get_output_maps_input() {
    let resp = app()
        .unwrap()
        .oneshot(json_request(
            "POST",
            "/rpc/example-test/get-output",
            r#"{"foo":3,"bar":"three"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let out: GetOutputOutput = body_json(resp).await;
    assert_eq!(out.hello, 3);
    assert_eq!(out.world, "three");
}

#[tokio::test]
async fn get_output_accepts_my_option() {
    let resp = app()
        .unwrap()
        .oneshot(json_request(
            "POST",
            "/rpc/example-test/get-output",
            r#"{"foo":1,"bar":"b","myOption":true}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn empty_body_returns_400() {
    let resp = app()
        .unwrap()
        .oneshot(json_request("POST", "/rpc/example-test/get-output", ""))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(&body_bytes(resp).await[..], b"Bad Request");
}

#[tokio::test]
async fn malformed_input_returns_422() {
    let resp = app()
        .unwrap()
        .oneshot(json_request(
            "POST",
            "/rpc/example-test/get-output",
            r#"{"not_foo":1}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn non_json_input_returns_422() {
    let resp = app()
        .unwrap()
        .oneshot(json_request("POST", "/rpc/app/test", "not json"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// --- test ---

#[tokio::test]
async fn test_echoes_any_json() {
    let resp = app()
        .unwrap()
        .oneshot(json_request("POST", "/rpc/app/test", r#"{"a":1}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = body_json(resp).await;
    assert_eq!(body, json!({"a": 1}));
}

// --- routing ---

#[tokio::test]
async fn get_on_rpc_path_is_not_allowed() {
    let resp = app()
        .unwrap()
        .oneshot(
            Request::builder()
                .uri("/rpc/app/test")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn underscore_path_is_not_mounted() {
    let resp = app()
        .unwrap()
        .oneshot(json_request(
            "POST",
            "/rpc/example-test/get_output",
            r#"{"foo":1,"bar":"b"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_procedure_returns_404() {
    let resp = app()
        .unwrap()
        .oneshot(json_request("POST", "/rpc/app/missing", "{}"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
