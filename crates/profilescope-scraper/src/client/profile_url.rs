//! Username normalization and profile URL construction.

use crate::error::ScraperError;

/// Trims whitespace and one leading `@` from a caller-supplied username.
///
/// # Errors
///
/// Returns [`ScraperError::InvalidUsername`] if nothing is left.
pub fn normalize_username(raw: &str) -> Result<String, ScraperError> {
    let trimmed = raw.trim();
    let name = trimmed.strip_prefix('@').unwrap_or(trimmed).trim();
    if name.is_empty() {
        return Err(ScraperError::InvalidUsername {
            username: raw.to_owned(),
        });
    }
    Ok(name.to_owned())
}

/// Builds `<base_url>/@{username}`, percent-encoding the username as a
/// single path segment.
///
/// # Errors
///
/// Returns [`ScraperError::InvalidBaseUrl`] if `base_url` is not an
/// absolute URL that can carry a path.
pub fn profile_url(base_url: &str, username: &str) -> Result<String, ScraperError> {
    let invalid = |reason: String| ScraperError::InvalidBaseUrl {
        base_url: base_url.to_owned(),
        reason,
    };

    let mut url = reqwest::Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
    url.path_segments_mut()
        .map_err(|()| invalid("URL cannot be a base".to_owned()))?
        .pop_if_empty()
        .push(&format!("@{username}"));
    url.set_query(None);
    url.set_fragment(None);

    Ok(url.to_string())
}
