//! Client configuration.
//!
//! The feed server's base URL comes from `MEGALITE_API_BASE_URL`: read at
//! runtime on desktop, baked in at compile time for the web build (there is no
//! process environment in the browser).

use anyhow::{bail, Context};

pub const DEFAULT_API_BASE_URL: &str =
    "https://linkedin-megalite-server-production.up.railway.app/api";

const API_BASE_URL_VAR: &str = "MEGALITE_API_BASE_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

impl ClientConfig {
    /// Build the config from the environment, falling back to the defaults
    /// when nothing is set.
    pub fn from_env() -> anyhow::Result<Self> {
        match env_base_url() {
            Some(raw) => Self::with_base_url(&raw),
            None => Ok(Self::default()),
        }
    }

    /// Validate and normalize a base URL (no trailing slash).
    pub fn with_base_url(raw: &str) -> anyhow::Result<Self> {
        let trimmed = raw.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            bail!("{API_BASE_URL_VAR} is empty");
        }
        let parsed = reqwest::Url::parse(trimmed)
            .with_context(|| format!("{API_BASE_URL_VAR} is not a valid URL: {trimmed}"))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            bail!("{API_BASE_URL_VAR} must be http(s), got {}", parsed.scheme());
        }
        Ok(Self {
            api_base_url: trimmed.to_string(),
        })
    }

    pub fn post_url(&self, post_id: usize) -> String {
        format!("{}/posts/{post_id}", self.api_base_url)
    }

    pub fn image_url(&self, post_id: usize) -> String {
        format!("{}/images/{post_id}", self.api_base_url)
    }
}

#[cfg(target_arch = "wasm32")]
fn env_base_url() -> Option<String> {
    option_env!("MEGALITE_API_BASE_URL").map(str::to_string)
}

#[cfg(not(target_arch = "wasm32"))]
fn env_base_url() -> Option<String> {
    std::env::var(API_BASE_URL_VAR).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_production() {
        let config = ClientConfig::default();
        assert_eq!(
            config.post_url(7),
            "https://linkedin-megalite-server-production.up.railway.app/api/posts/7"
        );
        assert_eq!(
            config.image_url(7),
            "https://linkedin-megalite-server-production.up.railway.app/api/images/7"
        );
    }

    #[test]
    fn base_url_is_normalized() {
        let config = ClientConfig::with_base_url(" http://127.0.0.1:5000/api/ ").unwrap();
        assert_eq!(config.api_base_url, "http://127.0.0.1:5000/api");
        assert_eq!(config.post_url(0), "http://127.0.0.1:5000/api/posts/0");
    }

    #[test]
    fn bad_base_urls_are_rejected() {
        assert!(ClientConfig::with_base_url("").is_err());
        assert!(ClientConfig::with_base_url("///").is_err());
        assert!(ClientConfig::with_base_url("not a url").is_err());
        assert!(ClientConfig::with_base_url("ftp://files.example.com").is_err());
    }
}
