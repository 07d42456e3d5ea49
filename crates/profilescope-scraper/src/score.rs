//! Derived metrics and composite scores for an extracted profile.
//!
//! Counts are parsed from the raw field map, turned into three ratios
//! (average likes per video, engagement rate, follower/following ratio),
//! bucketed into 0-100 sub-scores by fixed threshold ladders, and combined
//! with fixed weights into the influencer and credibility composites.

use crate::error::ScraperError;
use crate::parse::{parse_count, parse_flag};
use crate::types::{ProfileField, ProfileRecord, RawFieldMap, SocialLink};

const FOLLOWERS_WEIGHT: f64 = 0.20;
const ENGAGEMENT_WEIGHT: f64 = 0.30;
const AVG_LIKES_WEIGHT: f64 = 0.20;
const VIDEOS_WEIGHT: f64 = 0.15;
const TOTAL_LIKES_WEIGHT: f64 = 0.15;

const CREDIBILITY_ER_WEIGHT: f64 = 0.5;
const CREDIBILITY_FF_WEIGHT: f64 = 0.5;

/// Ratios computed from the parsed counts, unrounded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedMetrics {
    pub avg_likes: f64,
    /// Percentage, not a fraction.
    pub engagement_rate: f64,
    pub ff_ratio: f64,
}

impl DerivedMetrics {
    /// `videos` is clamped to at least 1. With zero following the ratio is
    /// the raw follower count.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn compute(followers: u64, following: u64, likes: u64, videos: u64) -> Self {
        let videos = videos.max(1);
        let avg_likes = likes as f64 / videos as f64;
        let engagement_rate = if followers > 0 {
            avg_likes / followers as f64 * 100.0
        } else {
            0.0
        };
        let ff_ratio = if following > 0 {
            followers as f64 / following as f64
        } else {
            followers as f64
        };
        Self {
            avg_likes,
            engagement_rate,
            ff_ratio,
        }
    }
}

/// Every normalized sub-score plus the two composites.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBreakdown {
    pub followers_score: f64,
    pub er_score: f64,
    pub likes_score: f64,
    pub videos_score: f64,
    pub total_likes_score: f64,
    pub er_credibility: f64,
    pub ff_credibility: f64,
    pub influencer_score: f64,
    pub credibility_score: f64,
}

impl ScoreBreakdown {
    #[must_use]
    pub fn compute(followers: u64, likes: u64, videos: u64, metrics: &DerivedMetrics) -> Self {
        let followers_score = followers_score(followers);
        let er_score = er_score(metrics.engagement_rate);
        let likes_score = likes_score(metrics.avg_likes);
        let videos_score = videos_score(videos.max(1));
        let total_likes_score = total_likes_score(likes);

        let influencer_score = round2(
            followers_score * FOLLOWERS_WEIGHT
                + er_score * ENGAGEMENT_WEIGHT
                + likes_score * AVG_LIKES_WEIGHT
                + videos_score * VIDEOS_WEIGHT
                + total_likes_score * TOTAL_LIKES_WEIGHT,
        );

        let er_credibility = er_credibility(metrics.engagement_rate);
        let ff_credibility = ff_credibility(metrics.ff_ratio);
        let credibility_score = round2(
            er_credibility * CREDIBILITY_ER_WEIGHT + ff_credibility * CREDIBILITY_FF_WEIGHT,
        );

        Self {
            followers_score,
            er_score,
            likes_score,
            videos_score,
            total_likes_score,
            er_credibility,
            ff_credibility,
            influencer_score,
            credibility_score,
        }
    }
}

#[must_use]
pub fn followers_score(followers: u64) -> f64 {
    match followers {
        100_000_000.. => 95.0,
        10_000_000.. => 85.0,
        1_000_000.. => 75.0,
        100_000.. => 60.0,
        10_000.. => 40.0,
        _ => 20.0,
    }
}

/// 90 from 3% up; 50..90 across [1, 3); 0..50 across [0, 1).
#[must_use]
pub fn er_score(engagement_rate: f64) -> f64 {
    if engagement_rate >= 3.0 {
        90.0
    } else if engagement_rate >= 1.0 {
        50.0 + ((engagement_rate - 1.0) / 2.0) * 40.0
    } else {
        engagement_rate * 50.0
    }
}

#[must_use]
pub fn likes_score(avg_likes: f64) -> f64 {
    if avg_likes >= 1_000_000.0 {
        85.0
    } else if avg_likes >= 100_000.0 {
        70.0
    } else if avg_likes >= 10_000.0 {
        55.0
    } else if avg_likes >= 1_000.0 {
        40.0
    } else {
        25.0
    }
}

#[must_use]
pub fn videos_score(videos: u64) -> f64 {
    match videos {
        1_000.. => 80.0,
        500.. => 70.0,
        100.. => 60.0,
        50.. => 45.0,
        _ => 30.0,
    }
}

#[must_use]
pub fn total_likes_score(likes: u64) -> f64 {
    match likes {
        1_000_000_000.. => 90.0,
        100_000_000.. => 80.0,
        10_000_000.. => 70.0,
        1_000_000.. => 55.0,
        _ => 35.0,
    }
}

/// 50 up to 1%; 50..75 across (1, 3]; above 3% starts at 80 and climbs
/// 5 points per percent, capped at 100.
#[must_use]
pub fn er_credibility(engagement_rate: f64) -> f64 {
    if engagement_rate <= 1.0 {
        50.0
    } else if engagement_rate <= 3.0 {
        50.0 + ((engagement_rate - 1.0) / 2.0) * 25.0
    } else {
        (80.0 + (engagement_rate - 3.0) * 5.0).min(100.0)
    }
}

#[must_use]
pub fn ff_credibility(ff_ratio: f64) -> f64 {
    if ff_ratio >= 10.0 {
        95.0
    } else if ff_ratio >= 2.0 {
        60.0 + ((ff_ratio - 2.0) / 8.0) * 35.0
    } else if ff_ratio >= 1.0 {
        40.0 + (ff_ratio - 1.0) * 20.0
    } else {
        20.0 + ff_ratio * 20.0
    }
}

/// Rounds to two decimal places using the exact binary value, so a true
/// tie such as `35.625` goes to the even digit (`35.62`).
#[must_use]
pub fn round2(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}

/// Builds the final record from one extraction.
///
/// Absent numeric fields count as zero. `username` falls back to
/// `username_fallback` when the page carried no `uniqueId`.
///
/// # Errors
///
/// Returns [`ScraperError::Processing`] if any derived value is not finite;
/// no partially scored record is produced.
pub fn score(
    raw: &RawFieldMap,
    links: Vec<SocialLink>,
    username_fallback: &str,
) -> Result<ProfileRecord, ScraperError> {
    let count = |field: ProfileField| raw.get(field).map_or(0, parse_count);

    let followers = count(ProfileField::Followers);
    let following = count(ProfileField::Following);
    let likes = count(ProfileField::Likes);
    let videos = count(ProfileField::Videos);

    let username = raw
        .get(ProfileField::UniqueId)
        .filter(|id| !id.is_empty())
        .unwrap_or(username_fallback)
        .to_owned();

    let metrics = DerivedMetrics::compute(followers, following, likes, videos);
    let scores = ScoreBreakdown::compute(followers, likes, videos, &metrics);

    let checked = [
        ("avg_likes_per_video", metrics.avg_likes),
        ("engagement_rate", metrics.engagement_rate),
        ("follower_following_ratio", metrics.ff_ratio),
        ("influencer_score", scores.influencer_score),
        ("credibility_score", scores.credibility_score),
    ];
    if let Some((name, value)) = checked.iter().find(|(_, v)| !v.is_finite()) {
        return Err(ScraperError::Processing {
            username,
            reason: format!("{name} is not finite ({value})"),
        });
    }

    let text = |field: ProfileField| raw.owned(field).unwrap_or_default();

    Ok(ProfileRecord {
        display_name: text(ProfileField::Nickname),
        bio: text(ProfileField::Signature),
        user_id: raw.owned(ProfileField::UserId),
        sec_uid: raw.owned(ProfileField::SecUid),
        region: raw.owned(ProfileField::Region),
        follower_count: followers,
        following_count: following,
        heart_count: likes,
        video_count: videos,
        verified: parse_flag(raw.get(ProfileField::Verified)),
        private_account: parse_flag(raw.get(ProfileField::PrivateAccount)),
        avatar_url: text(ProfileField::ProfilePic),
        social_links: links,
        avg_likes_per_video: round2(metrics.avg_likes),
        engagement_rate: round2(metrics.engagement_rate),
        follower_following_ratio: round2(metrics.ff_ratio),
        influencer_score: scores.influencer_score,
        credibility_score: scores.credibility_score,
        authenticity_score: scores.influencer_score,
        recent_videos: Vec::new(),
        username,
    })
}

#[cfg(test)]
#[path = "score_test.rs"]
mod tests;
