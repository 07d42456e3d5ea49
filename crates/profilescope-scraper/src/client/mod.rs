//! HTTP client for public profile pages.

mod profile_url;

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client, StatusCode};

use profilescope_core::{AppConfig, DEFAULT_BASE_URL, DEFAULT_USER_AGENT};

use crate::error::ScraperError;
use crate::extract::extract;
use crate::score::score;
use crate::types::{ProfileRecord, RecentVideo};

pub use profile_url::{normalize_username, profile_url};

const ACCEPT_HTML: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";
const ACCEPT_LANGUAGE: &str = "en-US,en;q=0.5";

/// Settings a [`ProfileClient`] is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub user_agent: String,
    /// `None` keeps reqwest's default, which never times out a request.
    pub request_timeout_secs: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            request_timeout_secs: None,
        }
    }
}

impl ClientConfig {
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            user_agent: config.user_agent.clone(),
            request_timeout_secs: config.request_timeout_secs,
        }
    }
}

/// Fetches profile pages and turns them into scored [`ProfileRecord`]s.
///
/// Immutable once built: the static headers live inside the wrapped
/// `reqwest::Client`, so one instance can serve any number of sequential
/// or concurrent lookups.
///
/// No retries are made. Only HTTP 200 counts as success.
pub struct ProfileClient {
    client: Client,
    base_url: String,
}

impl ProfileClient {
    /// Creates a `ProfileClient` with browser-like default headers.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., an invalid `User-Agent` value).
    pub fn new(config: &ClientConfig) -> Result<Self, ScraperError> {
        let mut headers = HeaderMap::new();
        headers.insert(reqwest::header::ACCEPT, HeaderValue::from_static(ACCEPT_HTML));
        headers.insert(
            reqwest::header::ACCEPT_LANGUAGE,
            HeaderValue::from_static(ACCEPT_LANGUAGE),
        );
        headers.insert(
            reqwest::header::UPGRADE_INSECURE_REQUESTS,
            HeaderValue::from_static("1"),
        );

        let mut builder = Client::builder()
            .user_agent(config.user_agent.as_str())
            .default_headers(headers);
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
            base_url: config.base_url.trim_end_matches('/').to_owned(),
        })
    }

    /// Looks up one profile, logging and swallowing every failure.
    ///
    /// Returns `None` when the fetch fails, the status is not 200, or the
    /// profile cannot be scored.
    pub async fn get_profile_data(&self, username: &str) -> Option<ProfileRecord> {
        match self.lookup_profile(username).await {
            Ok(record) => {
                tracing::info!(
                    username = %record.username,
                    influencer_score = record.influencer_score,
                    credibility_score = record.credibility_score,
                    "profile scored"
                );
                Some(record)
            }
            Err(e) => {
                tracing::warn!(username, error = %e, "profile lookup failed");
                None
            }
        }
    }

    /// Fetches, extracts and scores one profile.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::InvalidUsername`]: empty after trimming `@` and whitespace.
    /// - [`ScraperError::NotFound`]: HTTP 404.
    /// - [`ScraperError::UnexpectedStatus`]: any other status than 200.
    /// - [`ScraperError::Http`]: network or TLS failure.
    /// - [`ScraperError::Processing`]: the extracted values could not be scored.
    pub async fn lookup_profile(&self, username: &str) -> Result<ProfileRecord, ScraperError> {
        let username = normalize_username(username)?;
        let html = self.fetch_page(&username).await?;
        let (fields, links) = extract(&html, "");
        score(&fields, links, &username)
    }

    /// Fetches the raw profile page markup.
    ///
    /// # Errors
    ///
    /// Same fetch errors as [`Self::lookup_profile`].
    pub async fn fetch_profile_html(&self, username: &str) -> Result<String, ScraperError> {
        let username = normalize_username(username)?;
        self.fetch_page(&username).await
    }

    /// Recent videos for a profile. Enumeration needs signed API calls that
    /// this client does not make, so the list is always empty.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn fetch_recent_videos(&self, username: &str, limit: usize) -> Vec<RecentVideo> {
        tracing::debug!(username, limit, "recent video enumeration is not supported");
        Vec::new()
    }

    async fn fetch_page(&self, username: &str) -> Result<String, ScraperError> {
        let url = profile_url(&self.base_url, username)?;
        tracing::debug!(url = %url, "fetching profile page");

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(ScraperError::NotFound { url });
        }
        if status != StatusCode::OK {
            return Err(ScraperError::UnexpectedStatus {
                status: status.as_u16(),
                url,
            });
        }

        Ok(response.text().await?)
    }
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
