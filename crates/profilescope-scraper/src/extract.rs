//! Field extraction from the JSON embedded in a profile page.
//!
//! Each [`ProfileField`] is described by one row of [`FIELD_RULES`]: an
//! ordered list of patterns and an optional post-processing step. A single
//! routine walks the table, so adding or reordering matchers never touches
//! control flow.

use std::sync::LazyLock;

use regex::Regex;

use crate::links::extract_social_links;
use crate::types::{ProfileField, RawFieldMap, SocialLink};

struct FieldRule {
    field: ProfileField,
    /// Tried in order; the first non-empty capture group 1 wins.
    patterns: &'static [&'static str],
    post: Option<fn(String) -> String>,
}

const FIELD_RULES: &[FieldRule] = &[
    FieldRule {
        field: ProfileField::UserId,
        patterns: &[r#""webapp\.user-detail":\{"userInfo":\{"user":\{"id":"(\d+)""#],
        post: None,
    },
    FieldRule {
        field: ProfileField::UniqueId,
        patterns: &[r#""uniqueId":"(.*?)""#],
        post: None,
    },
    FieldRule {
        field: ProfileField::Nickname,
        patterns: &[r#""nickname":"(.*?)""#],
        post: None,
    },
    FieldRule {
        field: ProfileField::Followers,
        patterns: &[r#""followerCount":(\d+)"#],
        post: None,
    },
    FieldRule {
        field: ProfileField::Following,
        patterns: &[r#""followingCount":(\d+)"#],
        post: None,
    },
    // Order matters: the keys can carry different values on the same page.
    FieldRule {
        field: ProfileField::Likes,
        patterns: &[
            r#""heartCount":(\d+)"#,
            r#""diggCount":(\d+)"#,
            r#""heart":(\d+)"#,
        ],
        post: None,
    },
    FieldRule {
        field: ProfileField::Videos,
        patterns: &[r#""videoCount":(\d+)"#],
        post: None,
    },
    FieldRule {
        field: ProfileField::Signature,
        patterns: &[r#""signature":"(.*?)""#],
        post: None,
    },
    FieldRule {
        field: ProfileField::Verified,
        patterns: &[r#""verified":(true|false)"#],
        post: None,
    },
    FieldRule {
        field: ProfileField::SecUid,
        patterns: &[r#""secUid":"(.*?)""#],
        post: None,
    },
    FieldRule {
        field: ProfileField::CommentSetting,
        patterns: &[r#""commentSetting":(\d+)"#],
        post: None,
    },
    FieldRule {
        field: ProfileField::PrivateAccount,
        patterns: &[r#""privateAccount":(true|false)"#],
        post: None,
    },
    FieldRule {
        field: ProfileField::Region,
        patterns: &[r#""ttSeller":false,"region":"([^"]*)""#],
        post: None,
    },
    FieldRule {
        field: ProfileField::Heart,
        patterns: &[r#""heart":(\d+)"#],
        post: None,
    },
    FieldRule {
        field: ProfileField::DiggCount,
        patterns: &[r#""diggCount":(\d+)"#],
        post: None,
    },
    FieldRule {
        field: ProfileField::FriendCount,
        patterns: &[r#""friendCount":(\d+)"#],
        post: None,
    },
    FieldRule {
        field: ProfileField::ProfilePic,
        patterns: &[r#""avatarLarger":"(.*?)""#],
        post: Some(unescape_path_separators),
    },
];

struct CompiledRule {
    field: ProfileField,
    matchers: Vec<Regex>,
    post: Option<fn(String) -> String>,
}

static COMPILED_RULES: LazyLock<Vec<CompiledRule>> = LazyLock::new(|| {
    FIELD_RULES
        .iter()
        .map(|rule| CompiledRule {
            field: rule.field,
            matchers: rule
                .patterns
                .iter()
                .map(|p| Regex::new(p).expect("valid field regex"))
                .collect(),
            post: rule.post,
        })
        .collect()
});

/// Extracts every field and the social links from one profile page.
///
/// The biography scanned for handles is the page's `signature` when found,
/// otherwise `bio_hint`.
#[must_use]
pub fn extract(html: &str, bio_hint: &str) -> (RawFieldMap, Vec<SocialLink>) {
    let fields = extract_fields(html);
    let bio = fields.get(ProfileField::Signature).unwrap_or(bio_hint);
    let links = extract_social_links(html, bio);

    tracing::debug!(
        fields_found = fields.found_count(),
        links = links.len(),
        "extracted profile page"
    );

    (fields, links)
}

/// Runs the field table against `html`.
#[must_use]
pub fn extract_fields(html: &str) -> RawFieldMap {
    let mut fields = RawFieldMap::new();
    for rule in COMPILED_RULES.iter() {
        let value = first_capture(&rule.matchers, html).map(|v| match rule.post {
            Some(post) => post(v),
            None => v,
        });
        if value.is_none() {
            tracing::trace!(field = %rule.field, "field not found");
        }
        fields.set(rule.field, value);
    }
    fields
}

/// Returns the first non-empty capture across `matchers`, `Some("")` when
/// only empty captures matched, `None` when nothing matched.
fn first_capture(matchers: &[Regex], text: &str) -> Option<String> {
    let mut matched_empty = false;
    for re in matchers {
        let Some(caps) = re.captures(text) else {
            continue;
        };
        match caps.get(1).map(|m| m.as_str()) {
            Some(value) if !value.is_empty() => return Some(value.to_owned()),
            _ => matched_empty = true,
        }
    }
    matched_empty.then(String::new)
}

/// Turns JSON-escaped `/` sequences back into `/`.
fn unescape_path_separators(value: String) -> String {
    if value.contains("\\u002") {
        value.replace("\\u002F", "/").replace("\\u002f", "/")
    } else {
        value
    }
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod tests;
