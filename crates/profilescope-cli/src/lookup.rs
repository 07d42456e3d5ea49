//! `lookup` and `videos` command handlers.

use anyhow::Context;
use profilescope_core::AppConfig;
use profilescope_scraper::{ClientConfig, ProfileClient, ProfileRecord};

fn build_client(config: &AppConfig) -> anyhow::Result<ProfileClient> {
    ProfileClient::new(&ClientConfig::from_app_config(config))
        .context("failed to build profile client")
}

pub(crate) async fn run_lookup(config: &AppConfig, username: &str, json: bool) -> anyhow::Result<()> {
    let client = build_client(config)?;
    let Some(record) = client.get_profile_data(username).await else {
        anyhow::bail!("no profile data for \"{username}\" (see log for the cause)");
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        print!("{}", render_summary(&record));
    }
    Ok(())
}

pub(crate) fn run_videos(config: &AppConfig, username: &str, limit: usize) -> anyhow::Result<()> {
    let client = build_client(config)?;
    let videos = client.fetch_recent_videos(username, limit);
    if videos.is_empty() {
        println!("no recent videos available for {username}");
    }
    for video in videos {
        println!(
            "{}  plays={} likes={}  {}",
            video.id, video.play_count, video.like_count, video.description
        );
    }
    Ok(())
}

/// Plain-text summary: identity on top, numbers below.
pub(crate) fn render_summary(record: &ProfileRecord) -> String {
    let mut lines = vec![format!("@{} ({})", record.username, record.display_name)];
    if !record.bio.is_empty() {
        lines.push(format!("bio: {}", record.bio));
    }
    lines.push(format!(
        "verified: {}  private: {}",
        record.verified_verdict(),
        record.private_account_verdict()
    ));
    lines.push(String::new());
    lines.push(format!("followers:          {}", record.follower_count));
    lines.push(format!("following:          {}", record.following_count));
    lines.push(format!("likes:              {}", record.heart_count));
    lines.push(format!("videos:             {}", record.video_count));
    lines.push(format!("avg likes/video:    {:.2}", record.avg_likes_per_video));
    lines.push(format!("engagement rate:    {:.2}%", record.engagement_rate));
    lines.push(format!("follower/following: {:.2}", record.follower_following_ratio));
    lines.push(format!("influencer score:   {:.2}/100", record.influencer_score));
    lines.push(format!("credibility score:  {:.2}/100", record.credibility_score));

    if !record.social_links.is_empty() {
        lines.push(String::new());
        lines.push("links:".to_owned());
        lines.extend(record.social_links.iter().map(|link| format!("  - {link}")));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
