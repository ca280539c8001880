//! Integration tests for `HttpStatusSource` against a mock status API.

use std::time::Duration;

use dclone_core::{FetchError, HttpStatusSource, StatusSource};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const BODY: &str = r#"[
    {"region":"1","ladder":"1","hc":"1","progress":"4","timestamped":"1700000000"},
    {"region":"3","ladder":"2","hc":"2","progress":"1","timestamped":"1700000050"}
]"#;

async fn source_for(server: &MockServer, timeout: Duration) -> HttpStatusSource {
    HttpStatusSource::new(format!("{}/dclone_api.php", server.uri()), timeout).unwrap()
}

#[tokio::test]
async fn test_fetch_decodes_batch() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/dclone_api.php"))
        .respond_with(ResponseTemplate::new(200).set_body_string(BODY))
        .mount(&server)
        .await;

    let source = source_for(&server, Duration::from_secs(2)).await;
    let batch = source.fetch().await.unwrap();

    assert_eq!(batch.len(), 2);
    assert_eq!(batch[0].key().as_str(), "americas-ladder-hardcore");
    assert_eq!(batch[0].progress.parse().unwrap().get(), 4);
    assert_eq!(batch[1].key().as_str(), "asia-nonladder-softcore");
    assert_eq!(batch[1].observed_at, 1_700_000_050);
}

#[tokio::test]
async fn test_429_is_rate_limited() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let source = source_for(&server, Duration::from_secs(2)).await;
    let err = source.fetch().await.unwrap_err();
    assert_eq!(err, FetchError::RateLimited);
    assert!(!err.should_alert());
}

#[tokio::test]
async fn test_server_error_is_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503).set_body_string("down"))
        .mount(&server)
        .await;

    let source = source_for(&server, Duration::from_secs(2)).await;
    let err = source.fetch().await.unwrap_err();
    assert_eq!(err, FetchError::Http { status: 503 });
    assert!(err.should_alert());
}

#[tokio::test]
async fn test_garbage_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let source = source_for(&server, Duration::from_secs(2)).await;
    assert!(matches!(
        source.fetch().await,
        Err(FetchError::Decode { .. })
    ));
}

#[tokio::test]
async fn test_slow_response_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(BODY)
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let source = source_for(&server, Duration::from_millis(200)).await;
    assert_eq!(source.fetch().await.unwrap_err(), FetchError::Timeout);
}

#[tokio::test]
async fn test_unreachable_host_is_network_error() {
    // Bind then drop to get a port nobody listens on
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let source =
        HttpStatusSource::new(format!("http://127.0.0.1:{}/", port), Duration::from_secs(2))
            .unwrap();
    assert!(matches!(
        source.fetch().await,
        Err(FetchError::Network { .. })
    ));
}
