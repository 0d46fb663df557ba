use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use pothole_service::{web::create_app, Config};
use serde_json::{json, Value};
use tower::ServiceExt;

const BOUNDARY: &str = "x-test-boundary-7MA4YWxkTrZu0gW";

fn test_app() -> Router {
    let config = Config::new(
        "127.0.0.1:0".to_string(),
        "pothole_classifier.onnx".to_string(),
    )
    .unwrap();

    // 不初始化模型管理器: 这些用例覆盖的路径都不允许触碰模型
    create_app(&config)
}

fn multipart_body(field_name: &str, content: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
    body.extend_from_slice(
        format!("Content-Disposition: form-data; name=\"{field_name}\"; filename=\"road.jpg\"\r\n")
            .as_bytes(),
    );
    body.extend_from_slice(b"Content-Type: image/jpeg\r\n\r\n");
    body.extend_from_slice(content);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
    body
}

fn upload_request(field_name: &str, content: &[u8]) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/upload-image/")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(multipart_body(field_name, content)))
        .unwrap()
}

async fn response_json(response: axum::response::Response) -> Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn liveness_returns_fixed_payload() {
    let response = test_app()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response_json(response).await,
        json!({"status": "AI service running"})
    );
}

#[tokio::test]
async fn liveness_is_stateless_across_requests() {
    let app = test_app();

    for _ in 0..3 {
        let response = app
            .clone()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(
            response_json(response).await,
            json!({"status": "AI service running"})
        );
    }
}

#[tokio::test]
async fn text_upload_is_rejected_before_reaching_the_model() {
    // 模型未加载; 返回解码错误而非"模型未初始化"证明解码先于模型访问
    let response = test_app()
        .oneshot(upload_request("file", b"definitely not an image"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(response_json(response).await, json!({"error": "Invalid image"}));
}

#[tokio::test]
async fn empty_upload_is_rejected() {
    let response = test_app().oneshot(upload_request("file", b"")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(response_json(response).await, json!({"error": "Invalid image"}));
}

#[tokio::test]
async fn truncated_jpeg_upload_is_rejected() {
    let response = test_app()
        .oneshot(upload_request("file", &[0xFF, 0xD8, 0xFF]))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(response_json(response).await, json!({"error": "Invalid image"}));
}

#[tokio::test]
async fn missing_file_field_is_rejected() {
    let response = test_app()
        .oneshot(upload_request("photo", b"ignored"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(body["error"]["code"], "INVALID_INPUT");
}
