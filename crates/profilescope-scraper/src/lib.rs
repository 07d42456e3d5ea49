//! Profile page extraction and scoring.
//!
//! [`ProfileClient`] fetches a public profile page, [`extract`] pulls the
//! embedded fields and social links out of it, and [`score`] turns the raw
//! values into a [`ProfileRecord`] with derived engagement metrics.

pub mod client;
pub mod error;
pub mod extract;
pub mod links;
pub mod parse;
pub mod score;
pub mod types;

pub use client::{ClientConfig, ProfileClient};
pub use error::ScraperError;
pub use extract::extract;
pub use parse::parse_count;
pub use score::{score, DerivedMetrics, ScoreBreakdown};
pub use types::{
    ProfileField, ProfileRecord, RawFieldMap, RecentVideo, SocialLink, SocialLinkKind,
};
