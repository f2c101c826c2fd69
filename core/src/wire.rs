//! Raw backend payloads.
//!
//! These mirror what the live backend sends and never leave the crate's parse
//! step. Fields the backend may omit or null are `Option` with
//! `#[serde(default)]` so one missing column does not fail a whole list.

use serde::Deserialize;

/// The `{code, message, data}` wrapper around most backend responses.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub code: i64,
    #[serde(default)]
    pub message: Option<String>,
    /// A missing `data` key decodes as `None` without a `T: Default` bound.
    pub data: Option<T>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawCategory {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawArticleCategory {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawLabel {
    pub id: u64,
    #[serde(default)]
    pub title: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawArticle {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub category: Option<RawCategory>,
    #[serde(default)]
    pub is_top: Option<bool>,
    #[serde(default)]
    pub view_count: Option<u64>,
    #[serde(default)]
    pub like_count: Option<u64>,
    #[serde(default)]
    pub comment_count: Option<u64>,
    #[serde(default)]
    pub labels: Option<Vec<RawLabel>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawBanner {
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub link_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawAboutMe {
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub profession: Option<String>,
    #[serde(default)]
    pub slogan: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
}

/// `data` of the paginated public list: `{data: [...], meta: {...}}`.
#[derive(Debug, Deserialize)]
pub struct RawPage {
    #[serde(default)]
    pub data: serde_json::Value,
    #[serde(default)]
    pub meta: RawPageMeta,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawPageMeta {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub current_page: Option<u64>,
    #[serde(default)]
    pub last_page: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawLikeResult {
    #[serde(default)]
    pub like_count: Option<u64>,
}
