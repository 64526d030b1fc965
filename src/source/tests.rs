//! Tests for the remote page source

use super::*;
use crate::config::FeedConfig;
use crate::error::Error;
use crate::types::{PageRequest, DEFAULT_DIMENSION};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn record(id: &str, width: Option<&str>, height: Option<&str>) -> serde_json::Value {
    let mut rendition = json!({ "url": format!("https://cdn.example.com/{id}.gif") });
    if let Some(w) = width {
        rendition["width"] = json!(w);
    }
    if let Some(h) = height {
        rendition["height"] = json!(h);
    }
    json!({ "id": id, "images": { "fixed_width": rendition } })
}

fn test_config(server: &MockServer) -> FeedConfig {
    FeedConfig::builder("k3y")
        .base_url(server.uri())
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_fetch_page_sends_key_limit_and_offset() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/gifs/trending"))
        .and(query_param("api_key", "k3y"))
        .and(query_param("limit", "20"))
        .and(query_param("offset", "40"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "data": [record("g40", Some("320"), Some("180"))] })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let source = HttpPageSource::new(&test_config(&server)).unwrap();
    let items = source.fetch_page(PageRequest::for_page(2, 20)).await.unwrap();

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, "g40");
    assert_eq!(items[0].image_url, "https://cdn.example.com/g40.gif");
    assert_eq!(items[0].width, 320);
    assert_eq!(items[0].height, 180);
}

#[tokio::test]
async fn test_fetch_page_normalizes_dimensions() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/gifs/trending"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                record("a", Some("not-a-number"), Some("90")),
                record("b", None, None),
                record("c", Some("0"), Some("64")),
            ]
        })))
        .mount(&server)
        .await;

    let source = HttpPageSource::new(&test_config(&server)).unwrap();
    let items = source.fetch_page(PageRequest::new(20, 0)).await.unwrap();

    assert_eq!(items[0].width, DEFAULT_DIMENSION);
    assert_eq!(items[0].height, 90);
    assert_eq!(items[1].width, DEFAULT_DIMENSION);
    assert_eq!(items[1].height, DEFAULT_DIMENSION);
    assert_eq!(items[2].width, DEFAULT_DIMENSION);
    assert_eq!(items[2].height, 64);
}

#[tokio::test]
async fn test_fetch_page_empty_data_is_ok() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/gifs/trending"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
        .mount(&server)
        .await;

    let source = HttpPageSource::new(&test_config(&server)).unwrap();
    let items = source.fetch_page(PageRequest::new(20, 100)).await.unwrap();
    assert!(items.is_empty());
}

#[tokio::test]
async fn test_fetch_page_missing_data_field_is_ok() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/gifs/trending"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "meta": {} })))
        .mount(&server)
        .await;

    let source = HttpPageSource::new(&test_config(&server)).unwrap();
    let items = source.fetch_page(PageRequest::new(20, 0)).await.unwrap();
    assert!(items.is_empty());
}

#[tokio::test]
async fn test_fetch_page_http_error_surfaces() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/gifs/trending"))
        .respond_with(ResponseTemplate::new(429).set_body_string("rate limit exceeded"))
        .mount(&server)
        .await;

    let source = HttpPageSource::new(&test_config(&server)).unwrap();
    let err = source.fetch_page(PageRequest::new(20, 0)).await.unwrap_err();

    match err {
        Error::HttpStatus { status, body } => {
            assert_eq!(status, 429);
            assert_eq!(body, "rate limit exceeded");
        }
        other => panic!("expected HttpStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn test_fetch_page_parse_failure_surfaces() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/gifs/trending"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "data": [{ "id": 42 }] })),
        )
        .mount(&server)
        .await;

    let source = HttpPageSource::new(&test_config(&server)).unwrap();
    let err = source.fetch_page(PageRequest::new(20, 0)).await.unwrap_err();
    assert!(matches!(err, Error::Decode { .. }));
}
