//! Post payloads served by the remote feed endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Author {
    pub name: String,
    pub subtext: String,
    pub image_url: String,
    pub connection_degree: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LinkPreview {
    pub title: Option<String>,
    pub thumbnail: Option<String>,
    pub href: Option<String>,
}

impl LinkPreview {
    /// The preview card's target, if it has a usable one.
    pub fn target(&self) -> Option<&str> {
        self.href.as_deref().filter(|href| !href.trim().is_empty())
    }
}

/// Engagement counters. Zero means "don't show".
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Stats {
    pub likes: u64,
    pub comments: u64,
    pub reposts: u64,
}

impl Stats {
    pub fn is_empty(&self) -> bool {
        self.likes == 0 && self.comments == 0 && self.reposts == 0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Post {
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: String,
    #[serde(default)]
    pub content: Option<String>,
    pub author: Author,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub link: Option<LinkPreview>,
    #[serde(default)]
    pub stats: Option<Stats>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Post {
    /// Publication time, when the server sent a parseable RFC 3339 timestamp.
    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        let raw = self.created_at.as_deref()?;
        DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }

    /// Replace the author's avatar with the given URL.
    pub fn with_author_image(mut self, image_url: impl Into<String>) -> Self {
        self.author.image_url = image_url.into();
        self
    }
}

/// The feed server hands out ids as either strings or integers.
fn id_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}

/// Compact age label shown next to an author ("now", "5m", "3h", "2d", "1w", "4mo", "2y").
pub fn relative_age(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now - then;
    let minutes = elapsed.num_minutes();
    let days = elapsed.num_days();

    if minutes < 1 {
        "now".to_string()
    } else if minutes < 60 {
        format!("{minutes}m")
    } else if elapsed.num_hours() < 24 {
        format!("{}h", elapsed.num_hours())
    } else if days < 7 {
        format!("{days}d")
    } else if days < 30 {
        format!("{}w", days / 7)
    } else if days < 365 {
        format!("{}mo", days / 30)
    } else {
        format!("{}y", days / 365)
    }
}

/// Host part of a URL, or the input unchanged if it doesn't parse.
pub fn extract_domain(url: &str) -> String {
    url::Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
        .unwrap_or_else(|| url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_full_post() {
        let json = r#"{
            "id": "7",
            "content": "Grateful to announce #hustle",
            "author": {
                "name": "Chad Synergy",
                "subtext": "Thought Leader | 10x Ninja",
                "imageUrl": "ignored.png",
                "connectionDegree": "1st"
            },
            "link": {"title": "My journey", "thumbnail": "t.png", "href": "https://blog.example.com/post"},
            "stats": {"likes": 12, "comments": 3, "reposts": 1},
            "created_at": "2025-03-01T12:00:00Z"
        }"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.id, "7");
        assert_eq!(post.author.connection_degree, "1st");
        assert_eq!(post.stats.unwrap().likes, 12);
        assert_eq!(post.link.as_ref().unwrap().target(), Some("https://blog.example.com/post"));
        assert_eq!(
            post.published_at().map(|dt| dt.to_rfc3339()),
            Some("2025-03-01T12:00:00+00:00".to_string())
        );
    }

    #[test]
    fn decodes_sparse_post_with_numeric_id() {
        let json = r#"{"id": 3, "author": {"name": "Anon"}}"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.id, "3");
        assert_eq!(post.content, None);
        assert_eq!(post.author.subtext, "");
        assert!(post.link.is_none());
    }

    #[test]
    fn unparseable_timestamp_is_ignored() {
        let json = r#"{"id": "2", "author": {"name": "B"}, "created_at": "last tuesday"}"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.published_at(), None);
    }

    #[test]
    fn relative_age_buckets() {
        let now = DateTime::parse_from_rfc3339("2025-06-01T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let ago = |d: chrono::Duration| relative_age(now - d, now);
        assert_eq!(ago(chrono::Duration::seconds(20)), "now");
        assert_eq!(ago(chrono::Duration::minutes(5)), "5m");
        assert_eq!(ago(chrono::Duration::hours(3)), "3h");
        assert_eq!(ago(chrono::Duration::days(2)), "2d");
        assert_eq!(ago(chrono::Duration::days(15)), "2w");
        assert_eq!(ago(chrono::Duration::days(95)), "3mo");
        assert_eq!(ago(chrono::Duration::days(800)), "2y");
        assert_eq!(relative_age(now + chrono::Duration::hours(1), now), "now");
    }

    #[test]
    fn author_image_is_replaced() {
        let json = r#"{"id": "1", "author": {"name": "A", "imageUrl": "old"}}"#;
        let post: Post = serde_json::from_str(json).unwrap();
        let post = post.with_author_image("https://api.example/images/1");
        assert_eq!(post.author.image_url, "https://api.example/images/1");
    }

    #[test]
    fn link_preview_without_href_has_no_target() {
        let link = LinkPreview {
            title: Some("x".into()),
            thumbnail: None,
            href: Some("  ".into()),
        };
        assert_eq!(link.target(), None);
        assert_eq!(LinkPreview::default().target(), None);
    }

    #[test]
    fn empty_stats() {
        assert!(Stats::default().is_empty());
        assert!(!Stats { comments: 2, ..Default::default() }.is_empty());
    }

    #[test]
    fn extract_domain_returns_host() {
        assert_eq!(extract_domain("https://www.example.com/a/b?c=d"), "www.example.com");
        assert_eq!(extract_domain("http://localhost:8080/"), "localhost");
    }

    #[test]
    fn extract_domain_falls_back_to_input() {
        assert_eq!(extract_domain("not a url"), "not a url");
        assert_eq!(extract_domain("/relative/path"), "/relative/path");
        assert_eq!(extract_domain("mailto:someone@example.com"), "mailto:someone@example.com");
    }
}
