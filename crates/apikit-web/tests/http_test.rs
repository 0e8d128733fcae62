//! End-to-end tests for the shared middleware, extractors, and envelopes
//! through a real axum router.

use axum::body::Body;
use axum::routing::{get, post};
use axum::{Router, middleware};
use http::{Request, StatusCode, header};
use serde::Deserialize;
use serde_json::Value;
use tower::ServiceExt;
use validator::Validate;

use apikit_core::config::logging::HttpLogConfig;
use apikit_core::constant::messages;
use apikit_core::{AppError, ResponseBuilder, SuccessResponse};
use apikit_web::ValidatedJson;
use apikit_web::middleware::logging::log_requests;
use apikit_web::middleware::trace::{TRACE_ID_HEADER, propagate_trace_id};

#[derive(Debug, Deserialize, Validate)]
struct SignupRequest {
    #[validate(length(min = 1, message = "must not be blank"))]
    name: String,
    #[validate(email(message = "must be a valid email"))]
    email: String,
}

async fn list_cars() -> SuccessResponse<Vec<String>> {
    let cars = vec!["bmw".to_owned(), "audi".to_owned(), "volvo".to_owned()];
    ResponseBuilder::success(cars, messages::entities::FOUND)
}

async fn create_car() -> SuccessResponse<()> {
    ResponseBuilder::success_message(messages::entity::SAVED)
}

async fn missing_car() -> Result<SuccessResponse<()>, AppError> {
    Err(AppError::entity_not_found("car 42 not in inventory"))
}

async fn bad_argument() -> Result<SuccessResponse<()>, AppError> {
    Err(AppError::illegal_argument("negative rental duration"))
}

async fn signup(ValidatedJson(request): ValidatedJson<SignupRequest>) -> SuccessResponse<()> {
    let _ = (request.name, request.email);
    ResponseBuilder::success_message(messages::entity::SAVED)
}

fn test_app() -> Router {
    Router::new()
        .route("/api/v1/cars", get(list_cars).post(create_car))
        .route("/api/v1/cars/missing", get(missing_car))
        .route("/api/v1/cars/bad", get(bad_argument))
        .route("/api/v1/users", post(signup))
        .layer(middleware::from_fn_with_state(
            HttpLogConfig::default(),
            log_requests,
        ))
        .layer(middleware::from_fn(propagate_trace_id))
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("body is JSON")
}

#[tokio::test]
async fn test_success_envelope_shape() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/api/v1/cars")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["type"], "SUCCESS");
    assert_eq!(json["code"], "200");
    assert_eq!(json["success"], true);
    assert_eq!(json["size"], 3);
    assert_eq!(json["data"][0], "bmw");
    assert!(json["timestamp"].is_string());
}

#[tokio::test]
async fn test_creation_message_returns_201() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/cars")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["code"], "201");
}

#[tokio::test]
async fn test_entity_not_found_maps_to_404() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/api/v1/cars/missing")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["type"], "ERROR: ENTITY_NOT_FOUND_EXCEPTION");
    assert_eq!(json["code"], "2900");
    assert_eq!(json["success"], false);
    assert_eq!(json["status"], 404);
    // Internal detail must never reach the client.
    assert!(json.get("detail").is_none());
    assert!(!json.to_string().contains("inventory"));
}

#[tokio::test]
async fn test_illegal_argument_maps_to_400() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/api/v1/cars/bad")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "2800");
}

#[tokio::test]
async fn test_validation_failure_returns_field_map() {
    let payload = serde_json::json!({"name": "", "email": "not-an-email"});
    let response = test_app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/users")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "1200");
    assert_eq!(json["message"]["name"], "must not be blank");
    assert_eq!(json["message"]["email"], "must be a valid email");
}

#[tokio::test]
async fn test_valid_payload_passes_validation() {
    let payload = serde_json::json!({"name": "Ada", "email": "ada@example.com"});
    let response = test_app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/users")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn test_malformed_json_is_illegal_argument() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/users")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "2800");
}

#[tokio::test]
async fn test_trace_id_on_header_and_envelope() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/api/v1/cars")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let header_id = response
        .headers()
        .get(TRACE_ID_HEADER)
        .expect("trace id header present")
        .to_str()
        .unwrap()
        .to_owned();

    let json = body_json(response).await;
    assert_eq!(json["traceId"], header_id);
}

#[tokio::test]
async fn test_incoming_trace_id_is_reused() {
    let upstream_id = "6f9619ff-8b86-4d01-b42d-00cf4fc964ff";
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/api/v1/cars/missing")
                .header(TRACE_ID_HEADER, upstream_id)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response.headers().get(TRACE_ID_HEADER).unwrap(),
        upstream_id
    );
    let json = body_json(response).await;
    assert_eq!(json["traceId"], upstream_id);
}

#[tokio::test]
async fn test_logging_middleware_replays_bodies() {
    // The logging filter buffers the request body; the handler must still
    // be able to deserialize it, and the client must still get the full
    // response payload. Content-Length is what gates request capture, so
    // set it explicitly to exercise the buffer-and-replay path.
    let payload = serde_json::json!({"name": "Ada", "email": "ada@example.com"}).to_string();
    let response = test_app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/users")
                .header(header::CONTENT_TYPE, "application/json")
                .header(header::CONTENT_LENGTH, payload.len())
                .body(Body::from(payload))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["message"], messages::entity::SAVED);
}
