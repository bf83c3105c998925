use axum::Router;
use axum::body::Body;
use axum::extract::Extension;
use axum::http::{Request, StatusCode};
use axum::middleware;
use axum::routing::get;
use tower::ServiceExt;

use synopsis::infrastructure::observability::{
    REQUEST_ID_HEADER, RequestId, request_id_middleware,
};

fn create_router() -> Router {
    Router::new()
        .route(
            "/echo",
            get(|Extension(id): Extension<RequestId>| async move { id.to_string() }),
        )
        .layer(middleware::from_fn(request_id_middleware))
}

#[tokio::test]
async fn given_request_without_id_when_handling_then_uuid_generated_and_echoed() {
    let response = create_router()
        .oneshot(Request::get("/echo").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let header = response.headers().get(REQUEST_ID_HEADER).unwrap();
    let id = header.to_str().unwrap().to_string();
    assert!(uuid::Uuid::parse_str(&id).is_ok());

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(body, id.as_bytes());
}

#[tokio::test]
async fn given_request_with_id_when_handling_then_same_id_echoed() {
    let response = create_router()
        .oneshot(
            Request::get("/echo")
                .header(REQUEST_ID_HEADER, "req-42")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.headers().get(REQUEST_ID_HEADER).unwrap(), "req-42");
}

#[tokio::test]
async fn given_oversized_request_id_when_handling_then_replaced_with_uuid() {
    let response = create_router()
        .oneshot(
            Request::get("/echo")
                .header(REQUEST_ID_HEADER, "x".repeat(500))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let id = response
        .headers()
        .get(REQUEST_ID_HEADER)
        .unwrap()
        .to_str()
        .unwrap();
    assert!(uuid::Uuid::parse_str(id).is_ok());
}
