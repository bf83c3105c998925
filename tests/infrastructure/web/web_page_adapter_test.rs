use std::time::Duration;

use axum::Router;
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::get;

use synopsis::application::ports::{WebPageError, WebPageLoader};
use synopsis::infrastructure::web::{DEFAULT_USER_AGENT, WebPageAdapter, is_http_url};

use crate::helpers::spawn_server;

fn create_adapter(timeout: Duration) -> WebPageAdapter {
    WebPageAdapter::new(timeout, DEFAULT_USER_AGENT).unwrap()
}

#[test]
fn given_schemes_when_checking_then_only_http_accepted() {
    assert!(is_http_url("http://example.com"));
    assert!(is_http_url("https://example.com/a?b=c"));
    assert!(!is_http_url("ftp://example.com"));
    assert!(!is_http_url("example.com"));
    assert!(!is_http_url("file:///etc/passwd"));
}

#[tokio::test]
async fn given_non_http_url_when_extracting_then_invalid_url() {
    let adapter = create_adapter(Duration::from_secs(1));

    let result = adapter.extract("ftp://example.com/file").await;

    assert!(matches!(result, Err(WebPageError::InvalidUrl(_))));
}

#[tokio::test]
async fn given_served_article_when_extracting_then_main_text_returned() {
    let router = Router::new().route(
        "/article",
        get(|| async {
            Html("<html><body><nav>Menu</nav><article><p>Served text.</p></article></body></html>")
        }),
    );
    let addr = spawn_server(router).await;
    let adapter = create_adapter(Duration::from_secs(5));

    let text = adapter
        .extract(&format!("http://{addr}/article"))
        .await
        .unwrap();

    assert_eq!(text, "Served text.");
}

#[tokio::test]
async fn given_error_status_when_extracting_then_http_status_error() {
    let router = Router::new().route("/missing", get(|| async { StatusCode::NOT_FOUND }));
    let addr = spawn_server(router).await;
    let adapter = create_adapter(Duration::from_secs(5));

    let result = adapter.extract(&format!("http://{addr}/missing")).await;

    assert!(matches!(result, Err(WebPageError::HttpStatus(404))));
}

#[tokio::test]
async fn given_slow_server_when_extracting_then_timeout() {
    let router = Router::new().route(
        "/slow",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Html("<p>late</p>")
        }),
    );
    let addr = spawn_server(router).await;
    let adapter = create_adapter(Duration::from_millis(200));

    let result = adapter.extract(&format!("http://{addr}/slow")).await;

    assert!(matches!(result, Err(WebPageError::Timeout)));
}

#[tokio::test]
async fn given_unreachable_host_when_extracting_then_network_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let adapter = create_adapter(Duration::from_secs(2));

    let result = adapter.extract(&format!("http://{addr}/")).await;

    assert!(matches!(result, Err(WebPageError::Network(_))));
}
