//! Social link and handle discovery.
//!
//! Three passes run over the same page and their results are merged in
//! order: bio-URL redirect anchors, link-styled spans, and handle
//! heuristics over the biography text. An entry is skipped when its key
//! fragment already appears in the rendered form of an earlier entry.

use std::sync::LazyLock;

use percent_encoding::percent_decode_str;
use regex::Regex;

use crate::types::{SocialLink, SocialLinkKind};

static BIO_URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"href="(https://www\.tiktok\.com/link/v2\?[^"]*?scene=bio_url[^"]*?target=([^"&]+))""#,
    )
    .expect("valid bio url regex")
});
static SPAN_LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<span[^>]*class="[^"]*SpanLink[^"]*">([^<]+)</span>"#)
        .expect("valid span link regex")
});
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\w.+-]+@[\w-]+\.[\w.-]+").expect("valid email regex"));

/// Bio prefixes per network, in the order results are appended.
const HANDLE_RULES: &[(SocialLinkKind, &str)] = &[
    (SocialLinkKind::Instagram, "ig|instagram"),
    (SocialLinkKind::Snapchat, "sc|snapchat"),
    (SocialLinkKind::TwitterX, "twitter|x"),
    (SocialLinkKind::Facebook, "fb"),
    (SocialLinkKind::YouTube, "yt|youtube"),
    (SocialLinkKind::Telegram, "telegram"),
];

static HANDLE_RES: LazyLock<Vec<(SocialLinkKind, Regex)>> = LazyLock::new(|| {
    HANDLE_RULES
        .iter()
        .map(|&(kind, prefixes)| {
            let pattern = format!(r"\b(?i:{prefixes}):\s*@?([a-zA-Z0-9._]+)");
            (kind, Regex::new(&pattern).expect("valid handle regex"))
        })
        .collect()
});

/// Collects social links from `html` and handles from `bio`.
#[must_use]
pub fn extract_social_links(html: &str, bio: &str) -> Vec<SocialLink> {
    let mut links = Vec::new();
    collect_bio_url_links(html, &mut links);
    collect_span_links(html, &mut links);
    collect_bio_handles(bio, &mut links);
    links
}

fn already_listed(links: &[SocialLink], fragment: &str) -> bool {
    links.iter().any(|link| link.to_string().contains(fragment))
}

/// Pass 1: redirect anchors carrying a percent-encoded `target` parameter.
fn collect_bio_url_links(html: &str, links: &mut Vec<SocialLink>) {
    for caps in BIO_URL_RE.captures_iter(html) {
        let (Some(full_url), Some(encoded)) = (caps.get(1), caps.get(2)) else {
            continue;
        };
        let target = percent_decode_str(encoded.as_str())
            .decode_utf8_lossy()
            .into_owned();
        let label = anchor_text(html, full_url.as_str()).unwrap_or_else(|| target.clone());

        if !already_listed(links, &target) {
            links.push(SocialLink::link(label, target));
        }
    }
}

/// Text of the first link-styled span following the anchor for `href`.
fn anchor_text(html: &str, href: &str) -> Option<String> {
    let pattern = format!(
        r#"(?s)href="{}"[^>]*>.*?<span[^>]*SpanLink[^>]*>([^<]+)</span>"#,
        regex::escape(href)
    );
    let re = Regex::new(&pattern).ok()?;
    re.captures(html)
        .and_then(|caps| caps.get(1).map(|m| m.as_str().to_owned()))
}

/// Pass 2: link-styled spans whose text looks like a URL.
fn collect_span_links(html: &str, links: &mut Vec<SocialLink>) {
    for caps in SPAN_LINK_RE.captures_iter(html) {
        let Some(text) = caps.get(1).map(|m| m.as_str()) else {
            continue;
        };
        if !looks_like_url(text) || already_listed(links, text) {
            continue;
        }
        links.push(SocialLink::link(text, text));
    }
}

fn looks_like_url(text: &str) -> bool {
    text.contains('.') && !text.chars().any(char::is_whitespace)
}

/// Pass 3: `<prefix>: @handle` mentions and an e-mail address in the bio.
fn collect_bio_handles(bio: &str, links: &mut Vec<SocialLink>) {
    if bio.is_empty() {
        return;
    }

    for (kind, re) in HANDLE_RES.iter() {
        let Some(handle) = re
            .captures(bio)
            .and_then(|caps| caps.get(1).map(|m| m.as_str()))
        else {
            continue;
        };
        let link = SocialLink::handle(*kind, handle);
        if !already_listed(links, &link.to_string()) {
            links.push(link);
        }
    }

    if let Some(address) = EMAIL_RE.find(bio).map(|m| m.as_str()) {
        if !already_listed(links, address) {
            links.push(SocialLink::email(address));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHOP_ANCHOR: &str = r#"<a href="https://www.tiktok.com/link/v2?aid=1988&lang=en&scene=bio_url&target=https%3A%2F%2Fshop.example.com%2Fjane" rel="nofollow noopener"><span class="css-847r2g-SpanLink eht0fek2">shop.example.com/jane</span></a>"#;

    #[test]
    fn bio_url_uses_span_text_and_decoded_target() {
        let links = extract_social_links(SHOP_ANCHOR, "");
        assert_eq!(
            links,
            vec![SocialLink::link(
                "shop.example.com/jane",
                "https://shop.example.com/jane"
            )]
        );
    }

    #[test]
    fn bio_url_without_span_falls_back_to_target() {
        let html = r#"<a href="https://www.tiktok.com/link/v2?scene=bio_url&target=https%3A%2F%2Flinktr.ee%2Fjane">open</a>"#;
        let links = extract_social_links(html, "");
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].label, "https://linktr.ee/jane");
        assert_eq!(links[0].target, "https://linktr.ee/jane");
    }

    #[test]
    fn bio_url_requires_bio_url_scene() {
        let html = r#"<a href="https://www.tiktok.com/link/v2?scene=video&target=https%3A%2F%2Fx.example">x</a>"#;
        assert!(extract_social_links(html, "").is_empty());
    }

    #[test]
    fn same_target_from_both_passes_listed_once() {
        let links = extract_social_links(SHOP_ANCHOR, "");
        let matching = links
            .iter()
            .filter(|l| l.to_string().contains("shop.example.com/jane"))
            .count();
        assert_eq!(matching, 1, "got {links:?}");
    }

    #[test]
    fn repeated_anchor_is_listed_once() {
        let html = format!("{SHOP_ANCHOR}<footer>{SHOP_ANCHOR}</footer>");
        assert_eq!(extract_social_links(&html, "").len(), 1);
    }

    #[test]
    fn span_links_must_look_like_urls() {
        let html = concat!(
            r#"<span class="css-1-SpanLink">linktr.ee/jane</span>"#,
            r#"<span class="css-2-SpanLink">no dot here</span>"#,
            r#"<span class="css-3-SpanLink">two words.com here</span>"#,
            r#"<span class="css-4-SpanLink">nodot</span>"#,
        );
        let links = extract_social_links(html, "");
        assert_eq!(
            links,
            vec![SocialLink::link("linktr.ee/jane", "linktr.ee/jane")]
        );
    }

    #[test]
    fn bio_handles_in_category_order() {
        let bio = "yt: JaneTube | ig: @jane.doe | sc: janesnap | mail jane@example.com";
        let rendered: Vec<String> = extract_social_links("", bio)
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(
            rendered,
            vec![
                "Instagram: @jane.doe",
                "Snapchat: janesnap",
                "YouTube: JaneTube",
                "Email: jane@example.com",
            ]
        );
    }

    #[test]
    fn bio_prefixes_are_case_insensitive() {
        let bio = "INSTAGRAM: jane.doe Twitter: @janex Telegram: janetg FB: jane.fb";
        let rendered: Vec<String> = extract_social_links("", bio)
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(
            rendered,
            vec![
                "Instagram: @jane.doe",
                "Twitter/X: @janex",
                "Facebook: jane.fb",
                "Telegram: @janetg",
            ]
        );
    }

    #[test]
    fn bio_heuristic_takes_first_match_only() {
        let links = extract_social_links("", "ig: first ig: second");
        assert_eq!(links, vec![SocialLink::handle(SocialLinkKind::Instagram, "first")]);
    }

    #[test]
    fn bio_prefix_must_start_a_word() {
        assert!(extract_social_links("", "desc: nothing here").is_empty());
        assert!(extract_social_links("", "desc: nothing | fax: 5551234").is_empty());
    }

    #[test]
    fn bio_handles_ignore_page_markup() {
        // Handles are only read from the biography, never the page body.
        let links = extract_social_links("<p>ig: hidden</p>", "");
        assert!(links.is_empty());
    }

    #[test]
    fn email_already_linked_is_not_repeated() {
        let html = r#"<span class="x-SpanLink">jane@example.com</span>"#;
        let links = extract_social_links(html, "contact jane@example.com");
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].kind, SocialLinkKind::Link);
    }
}
