use anyhow::{Context, Result};

/// Default devicon CDN root used when `ICON_CDN_BASE` is not set.
/// Icon URLs are built as `{base}/{key}/{key}-{variant}.svg`.
pub const DEFAULT_ICON_CDN_BASE: &str =
    "https://cdn.jsdelivr.net/gh/devicons/devicon/icons";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the collaborator API that serves uploaded media
    /// (server-relative `/media/...` paths are joined against this).
    pub media_base_url: String,
    pub icon_cdn_base: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            media_base_url: require_env("MEDIA_BASE_URL")?,
            icon_cdn_base: std::env::var("ICON_CDN_BASE")
                .unwrap_or_else(|_| DEFAULT_ICON_CDN_BASE.to_string()),
        })
    }

    /// Constructs a config directly, for callers (and tests) that do not
    /// read the environment.
    pub fn new(media_base_url: impl Into<String>, icon_cdn_base: impl Into<String>) -> Self {
        Config {
            media_base_url: media_base_url.into(),
            icon_cdn_base: icon_cdn_base.into(),
        }
    }
}

/// The subset of [`Config`] the icon resolver needs.
#[derive(Debug, Clone)]
pub struct IconSources {
    pub media_base_url: String,
    pub icon_cdn_base: String,
}

impl From<&Config> for IconSources {
    fn from(config: &Config) -> Self {
        IconSources {
            media_base_url: config.media_base_url.clone(),
            icon_cdn_base: config.icon_cdn_base.clone(),
        }
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
