//! End-to-end tests: feed controller over the HTTP page source
//!
//! The remote API is stood in by wiremock; pages are distinguished by
//! their `offset` query parameter.

use clap::Parser;
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use trendgrid::cli::{Cli, Runner};
use trendgrid::{ControllerConfig, FeedConfig, FeedController, FeedState, HttpPageSource};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const WAIT: Duration = Duration::from_secs(5);

fn page_body(start: usize, count: usize) -> serde_json::Value {
    let data: Vec<serde_json::Value> = (start..start + count)
        .map(|n| {
            serde_json::json!({
                "id": format!("g{n}"),
                "images": {
                    "fixed_width": {
                        "url": format!("https://cdn.test/g{n}.gif"),
                        "width": "200",
                        "height": "112"
                    }
                }
            })
        })
        .collect();
    serde_json::json!({ "data": data })
}

fn trending_mock(offset: usize) -> wiremock::MockBuilder {
    Mock::given(method("GET"))
        .and(path("/v1/gifs/trending"))
        .and(query_param("api_key", "k3y"))
        .and(query_param("offset", offset.to_string()))
}

fn start_feed(server: &MockServer) -> FeedController {
    let config = FeedConfig::builder("k3y")
        .base_url(server.uri())
        .build()
        .unwrap();
    let source = Arc::new(HttpPageSource::new(&config).unwrap());
    FeedController::new(source, ControllerConfig::from(&config))
}

async fn wait_until(
    rx: &mut watch::Receiver<FeedState>,
    pred: impl Fn(&FeedState) -> bool,
) -> FeedState {
    tokio::time::timeout(WAIT, async {
        loop {
            {
                let state = rx.borrow_and_update();
                if pred(&state) {
                    return state.clone();
                }
            }
            rx.changed().await.expect("controller stopped");
        }
    })
    .await
    .expect("timed out waiting for feed state")
}

fn success_with(len: usize) -> impl Fn(&FeedState) -> bool {
    move |state| matches!(state, FeedState::Success(items) if items.len() == len)
}

#[tokio::test]
async fn test_feed_paginates_until_exhausted() {
    let server = MockServer::start().await;
    trending_mock(0)
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(0, 20)))
        .expect(1)
        .mount(&server)
        .await;
    trending_mock(20)
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(20, 20)))
        .expect(1)
        .mount(&server)
        .await;
    trending_mock(40)
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(0, 0)))
        .expect(1)
        .mount(&server)
        .await;

    let feed = start_feed(&server);
    let mut rx = feed.subscribe();

    feed.load_initial();
    let state = wait_until(&mut rx, success_with(20)).await;
    assert_eq!(state.index_of("g0"), 1);
    assert_eq!(state.index_of("g19"), 20);

    feed.load_more();
    let state = wait_until(&mut rx, success_with(40)).await;
    assert_eq!(state.index_of("g39"), 40);
    assert_eq!(state.items().unwrap()[0].width, 200);
    assert_eq!(state.items().unwrap()[0].height, 112);

    // Third page is empty: accumulation stays, feed is exhausted.
    feed.load_more();
    tokio::time::sleep(Duration::from_millis(100)).await;
    assert!(matches!(feed.state(), FeedState::Success(items) if items.len() == 40));

    // Exhausted feed never reaches the network again.
    feed.load_more();
    tokio::time::sleep(Duration::from_millis(100)).await;
    assert!(matches!(feed.state(), FeedState::Success(items) if items.len() == 40));
}

#[tokio::test]
async fn test_reload_serves_later_page_from_cache() {
    let server = MockServer::start().await;
    trending_mock(0)
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(0, 20)))
        .expect(2)
        .mount(&server)
        .await;
    // Page 1 must be fetched exactly once; the reload path appends it
    // from the cache.
    trending_mock(20)
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(20, 20)))
        .expect(1)
        .mount(&server)
        .await;

    let feed = start_feed(&server);
    let mut rx = feed.subscribe();

    feed.load_initial();
    wait_until(&mut rx, success_with(20)).await;
    feed.load_more();
    wait_until(&mut rx, success_with(40)).await;

    feed.load_initial();
    wait_until(&mut rx, success_with(20)).await;
    feed.load_more();
    let state = wait_until(&mut rx, success_with(40)).await;
    assert_eq!(state.index_of("g20"), 21);
}

#[tokio::test]
async fn test_http_error_surfaces_and_retry_recovers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/gifs/trending"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream down"))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    trending_mock(0)
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(0, 20)))
        .expect(1)
        .mount(&server)
        .await;

    let feed = start_feed(&server);
    let mut rx = feed.subscribe();

    feed.load_initial();
    let state = wait_until(&mut rx, |s| matches!(s, FeedState::Error(_))).await;
    match state {
        FeedState::Error(message) => assert_eq!(message, "HTTP 500: upstream down"),
        other => panic!("expected Error, got {other:?}"),
    }

    feed.retry();
    let state = wait_until(&mut rx, success_with(20)).await;
    assert_eq!(state.index_of("g0"), 1);
}

#[tokio::test]
async fn test_trending_command_terminates_on_empty_feed() {
    let server = MockServer::start().await;
    // One fetch exhausts the feed; the runner must not wait on a
    // load_more that will never publish.
    trending_mock(0)
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(0, 0)))
        .expect(1)
        .mount(&server)
        .await;

    let mut config = tempfile::NamedTempFile::new().unwrap();
    writeln!(config, "base_url: \"{}\"", server.uri()).unwrap();
    writeln!(config, "api_key: \"k3y\"").unwrap();

    let cli = Cli::parse_from([
        "trendgrid",
        "--config",
        config.path().to_str().unwrap(),
        "trending",
        "--pages",
        "2",
    ]);
    tokio::time::timeout(WAIT, Runner::new(cli).run())
        .await
        .expect("trending must terminate on an empty feed")
        .unwrap();
}
