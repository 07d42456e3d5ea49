//! Integration tests for `ProfileClient`.
//!
//! Uses `wiremock` to stand up a local HTTP server for each test so no
//! real network traffic is made.

use wiremock::matchers::{header, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use profilescope_scraper::{ClientConfig, ProfileClient, ScraperError, SocialLinkKind};

const PROFILE_PAGE: &str = include_str!("fixtures/profile_page.html");

/// Builds a `ProfileClient` pointed at the mock server with a short timeout.
fn test_client(server: &MockServer) -> ProfileClient {
    let config = ClientConfig {
        base_url: server.uri(),
        user_agent: "profilescope-test/0.1".to_owned(),
        request_timeout_secs: Some(5),
    };
    ProfileClient::new(&config).expect("failed to build test ProfileClient")
}

async fn mount_page(server: &MockServer, route: &str, status: u16, body: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(server)
        .await;
}

// ---------------------------------------------------------------------------
// Happy path
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_profile_data_scores_fixture_page() {
    let server = MockServer::start().await;
    mount_page(&server, "/@jane.doe", 200, PROFILE_PAGE).await;

    let client = test_client(&server);
    let record = client
        .get_profile_data("@jane.doe")
        .await
        .expect("expected a scored profile");

    assert_eq!(record.username, "jane.doe");
    assert_eq!(record.display_name, "Jane Doe");
    assert_eq!(record.user_id.as_deref(), Some("6812345678901234567"));
    assert_eq!(record.follower_count, 10_000);
    assert_eq!(record.following_count, 500);
    assert_eq!(record.heart_count, 1_200_000);
    assert_eq!(record.video_count, 100);
    assert!(record.verified);
    assert!(!record.private_account);
    assert_eq!(
        record.avatar_url,
        "https://p16-sign.example-cdn.com/avatar/jane~c5_1080x1080.jpeg"
    );
    assert!((record.influencer_score - 63.25).abs() < 1e-9);
    assert!((record.credibility_score - 97.5).abs() < 1e-9);
    assert!(record.recent_videos.is_empty());

    let kinds: Vec<SocialLinkKind> = record.social_links.iter().map(|l| l.kind).collect();
    assert_eq!(
        kinds,
        vec![
            SocialLinkKind::Link,
            SocialLinkKind::Instagram,
            SocialLinkKind::YouTube,
            SocialLinkKind::Email,
        ]
    );
}

#[tokio::test]
async fn request_carries_static_browser_headers() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/@jane"))
        .and(header("user-agent", "profilescope-test/0.1"))
        .and(header("upgrade-insecure-requests", "1"))
        .and(header_exists("accept"))
        .and(header_exists("accept-language"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let html = client.fetch_profile_html("jane").await;
    assert!(html.is_ok(), "expected Ok, got: {html:?}");
}

#[tokio::test]
async fn page_without_profile_data_falls_back_to_requested_username() {
    let server = MockServer::start().await;
    mount_page(&server, "/@ghost", 200, "<html><body>captcha</body></html>").await;

    let client = test_client(&server);
    let record = client
        .get_profile_data("ghost")
        .await
        .expect("an empty page still scores");

    assert_eq!(record.username, "ghost");
    assert_eq!(record.follower_count, 0);
    assert!((record.influencer_score - 18.75).abs() < 1e-9);
    assert!((record.credibility_score - 35.0).abs() < 1e-9);
}

// ---------------------------------------------------------------------------
// Failure outcomes
// ---------------------------------------------------------------------------

#[tokio::test]
async fn not_found_yields_none_and_typed_error() {
    let server = MockServer::start().await;
    mount_page(&server, "/@missing", 404, "").await;

    let client = test_client(&server);
    assert!(client.get_profile_data("missing").await.is_none());

    let err = client.lookup_profile("missing").await.unwrap_err();
    assert!(
        matches!(err, ScraperError::NotFound { ref url } if url.ends_with("/@missing")),
        "expected NotFound, got: {err:?}"
    );
}

#[tokio::test]
async fn non_200_success_status_is_rejected() {
    let server = MockServer::start().await;
    mount_page(&server, "/@jane", 204, "").await;

    let client = test_client(&server);
    let err = client.lookup_profile("jane").await.unwrap_err();
    assert!(
        matches!(err, ScraperError::UnexpectedStatus { status: 204, .. }),
        "expected UnexpectedStatus(204), got: {err:?}"
    );
}

#[tokio::test]
async fn server_error_is_not_retried() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/@jane"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    assert!(client.get_profile_data("jane").await.is_none());
}

#[tokio::test]
async fn blank_username_makes_no_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = test_client(&server);
    assert!(client.get_profile_data(" @ ").await.is_none());
    let err = client.lookup_profile("").await.unwrap_err();
    assert!(matches!(err, ScraperError::InvalidUsername { .. }));
}

#[tokio::test]
async fn unreachable_host_yields_none() {
    let config = ClientConfig {
        // Port 9 (discard) on localhost is not expected to accept HTTP.
        base_url: "http://127.0.0.1:9".to_owned(),
        user_agent: "profilescope-test/0.1".to_owned(),
        request_timeout_secs: Some(2),
    };
    let client = ProfileClient::new(&config).unwrap();
    assert!(client.get_profile_data("jane").await.is_none());
}
