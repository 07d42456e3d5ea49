//! Typed records produced by the extractor and the scorer.

use std::fmt;

use serde::Serialize;

/// One of the fixed set of values pulled out of a profile page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileField {
    UserId,
    UniqueId,
    Nickname,
    Followers,
    Following,
    Likes,
    Videos,
    Signature,
    Verified,
    SecUid,
    CommentSetting,
    PrivateAccount,
    Region,
    Heart,
    DiggCount,
    FriendCount,
    ProfilePic,
}

impl ProfileField {
    pub const COUNT: usize = 17;

    /// Every field, in extraction order.
    pub const ALL: [ProfileField; Self::COUNT] = [
        ProfileField::UserId,
        ProfileField::UniqueId,
        ProfileField::Nickname,
        ProfileField::Followers,
        ProfileField::Following,
        ProfileField::Likes,
        ProfileField::Videos,
        ProfileField::Signature,
        ProfileField::Verified,
        ProfileField::SecUid,
        ProfileField::CommentSetting,
        ProfileField::PrivateAccount,
        ProfileField::Region,
        ProfileField::Heart,
        ProfileField::DiggCount,
        ProfileField::FriendCount,
        ProfileField::ProfilePic,
    ];

    /// Raw field name as used in the page data and in log output.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ProfileField::UserId => "user_id",
            ProfileField::UniqueId => "unique_id",
            ProfileField::Nickname => "nickname",
            ProfileField::Followers => "followers",
            ProfileField::Following => "following",
            ProfileField::Likes => "likes",
            ProfileField::Videos => "videos",
            ProfileField::Signature => "signature",
            ProfileField::Verified => "verified",
            ProfileField::SecUid => "secUid",
            ProfileField::CommentSetting => "commentSetting",
            ProfileField::PrivateAccount => "privateAccount",
            ProfileField::Region => "region",
            ProfileField::Heart => "heart",
            ProfileField::DiggCount => "diggCount",
            ProfileField::FriendCount => "friendCount",
            ProfileField::ProfilePic => "profile_pic",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw extraction result: one slot per [`ProfileField`].
///
/// Every field always has a slot. `None` means the field's patterns did not
/// match; `Some("")` means a pattern matched with an empty capture.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawFieldMap {
    values: [Option<String>; ProfileField::COUNT],
}

impl RawFieldMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, field: ProfileField) -> Option<&str> {
        self.values[field.index()].as_deref()
    }

    pub fn set(&mut self, field: ProfileField, value: Option<String>) {
        self.values[field.index()] = value;
    }

    #[must_use]
    pub fn is_found(&self, field: ProfileField) -> bool {
        self.values[field.index()].is_some()
    }

    /// Number of fields whose patterns matched.
    #[must_use]
    pub fn found_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ProfileField, Option<&str>)> + '_ {
        ProfileField::ALL
            .iter()
            .map(move |&field| (field, self.get(field)))
    }

    /// Owned copy of a field's value, `None` when not found.
    pub(crate) fn owned(&self, field: ProfileField) -> Option<String> {
        self.values[field.index()].clone()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SocialLinkKind {
    Link,
    Instagram,
    Snapchat,
    #[serde(rename = "Twitter/X")]
    TwitterX,
    Facebook,
    YouTube,
    Telegram,
    Email,
}

impl SocialLinkKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SocialLinkKind::Link => "Link",
            SocialLinkKind::Instagram => "Instagram",
            SocialLinkKind::Snapchat => "Snapchat",
            SocialLinkKind::TwitterX => "Twitter/X",
            SocialLinkKind::Facebook => "Facebook",
            SocialLinkKind::YouTube => "YouTube",
            SocialLinkKind::Telegram => "Telegram",
            SocialLinkKind::Email => "Email",
        }
    }
}

impl fmt::Display for SocialLinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A link or handle found on the profile page or in its biography.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    pub kind: SocialLinkKind,
    /// Text shown to the user.
    pub label: String,
    /// URL, handle, or address the entry points at.
    pub target: String,
}

impl SocialLink {
    /// A bio URL. `label` is the anchor text, or the target itself when the
    /// page carries none.
    #[must_use]
    pub fn link(label: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            kind: SocialLinkKind::Link,
            label: label.into(),
            target: target.into(),
        }
    }

    /// A handle on another network. Instagram, Twitter/X and Telegram
    /// handles are labelled with a leading `@`.
    #[must_use]
    pub fn handle(kind: SocialLinkKind, handle: &str) -> Self {
        let label = match kind {
            SocialLinkKind::Instagram | SocialLinkKind::TwitterX | SocialLinkKind::Telegram => {
                format!("@{handle}")
            }
            _ => handle.to_owned(),
        };
        Self {
            kind,
            label,
            target: handle.to_owned(),
        }
    }

    #[must_use]
    pub fn email(address: &str) -> Self {
        Self {
            kind: SocialLinkKind::Email,
            label: address.to_owned(),
            target: address.to_owned(),
        }
    }
}

impl fmt::Display for SocialLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            SocialLinkKind::Link => write!(f, "Link: {} - {}", self.label, self.target),
            kind => write!(f, "{kind}: {}", self.label),
        }
    }
}

/// A recently posted video. Enumeration is not supported, so lookups
/// always return an empty list of these.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecentVideo {
    pub id: String,
    pub description: String,
    pub play_count: u64,
    pub like_count: u64,
}

/// Fully scored profile, the terminal artifact of a lookup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileRecord {
    pub username: String,
    pub display_name: String,
    pub bio: String,
    pub user_id: Option<String>,
    pub sec_uid: Option<String>,
    pub region: Option<String>,

    pub follower_count: u64,
    pub following_count: u64,
    pub heart_count: u64,
    pub video_count: u64,

    pub verified: bool,
    pub private_account: bool,
    pub avatar_url: String,
    pub social_links: Vec<SocialLink>,

    pub avg_likes_per_video: f64,
    /// Average likes per video as a percentage of followers.
    pub engagement_rate: f64,
    pub follower_following_ratio: f64,
    pub influencer_score: f64,
    pub credibility_score: f64,
    pub authenticity_score: f64,

    pub recent_videos: Vec<RecentVideo>,
}

impl ProfileRecord {
    #[must_use]
    pub fn verified_verdict(&self) -> &'static str {
        yes_no(self.verified)
    }

    #[must_use]
    pub fn private_account_verdict(&self) -> &'static str {
        yes_no(self.private_account)
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}
