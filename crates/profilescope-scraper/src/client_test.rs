use super::*;

#[test]
fn profile_url_appends_at_handle() {
    let url = profile_url("https://www.tiktok.com", "jane.doe").unwrap();
    assert_eq!(url, "https://www.tiktok.com/@jane.doe");
}

#[test]
fn profile_url_keeps_port_of_local_base() {
    let url = profile_url("http://127.0.0.1:8080", "jane").unwrap();
    assert_eq!(url, "http://127.0.0.1:8080/@jane");
}

#[test]
fn profile_url_encodes_path_breaking_characters() {
    let url = profile_url("https://www.tiktok.com", "a/b?c").unwrap();
    assert_eq!(url, "https://www.tiktok.com/@a%2Fb%3Fc");
}

#[test]
fn profile_url_rejects_invalid_base() {
    let result = profile_url("not-a-url", "jane");
    let err = result.unwrap_err();
    assert!(
        matches!(err, ScraperError::InvalidBaseUrl { .. }),
        "expected InvalidBaseUrl, got: {err:?}"
    );
}

#[test]
fn profile_url_rejects_cannot_be_a_base() {
    let err = profile_url("mailto:someone@example.com", "jane").unwrap_err();
    assert!(matches!(err, ScraperError::InvalidBaseUrl { .. }));
}

#[test]
fn normalize_username_strips_leading_at() {
    assert_eq!(normalize_username("@jane.doe").unwrap(), "jane.doe");
}

#[test]
fn normalize_username_trims_whitespace() {
    assert_eq!(normalize_username("  @jane  ").unwrap(), "jane");
    assert_eq!(normalize_username("jane\n").unwrap(), "jane");
}

#[test]
fn normalize_username_strips_only_one_at() {
    assert_eq!(normalize_username("@@jane").unwrap(), "@jane");
}

#[test]
fn normalize_username_rejects_empty() {
    for raw in ["", "   ", "@", " @ "] {
        let err = normalize_username(raw).unwrap_err();
        assert!(
            matches!(err, ScraperError::InvalidUsername { .. }),
            "expected InvalidUsername for {raw:?}, got: {err:?}"
        );
    }
}

#[test]
fn client_config_default_targets_public_host_without_timeout() {
    let config = ClientConfig::default();
    assert_eq!(config.base_url, DEFAULT_BASE_URL);
    assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
    assert!(config.request_timeout_secs.is_none());
}

#[test]
fn client_builds_from_default_config() {
    assert!(ProfileClient::new(&ClientConfig::default()).is_ok());
}

#[test]
fn recent_videos_are_always_empty() {
    let client = ProfileClient::new(&ClientConfig::default()).unwrap();
    assert!(client.fetch_recent_videos("jane", 10).is_empty());
}
