//! View models handed to the rendering layer, plus query values.
//!
//! # Design
//! These shapes are independent of whatever the backend sends; the `mapping`
//! module converts raw payloads into them. They serialize in `camelCase` so a
//! UI can consume them as-is. Everything here is an immutable value built
//! fresh per response.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: u64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

/// Placeholder author; the live backend does not supply one.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Author {
    pub name: String,
    pub avatar: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: u64,
    pub title: String,
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    /// Never absent: missing categories become `Category::default()`.
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub author: Author,
    pub create_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_top: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub like_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<Tag>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Tag {
    pub id: u64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// A label exactly as the backend's public list returns it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Label {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub is_special: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Banner {
    pub id: u64,
    pub image: String,
    /// Empty when the banner does not link anywhere.
    pub link: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BlogSite {
    pub id: u64,
    pub name: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AboutInfo {
    pub name: String,
    pub avatar: String,
    pub title: String,
    pub description: String,
    pub intro: String,
    pub experiences: Vec<Experience>,
    pub blogs: Vec<BlogInfo>,
    pub contacts: Vec<Contact>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Experience {
    pub id: u64,
    pub title: String,
    pub summary: String,
    pub cover: String,
    pub link: String,
}

/// One row of the about page's "this blog" table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BlogInfo {
    pub label: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_text: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ContactKind {
    Qq,
    Wechat,
    Email,
    Github,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    #[serde(rename = "type")]
    pub kind: ContactKind,
    /// QR code image path; empty for kinds that have none.
    pub qrcode: String,
    pub title: String,
    pub subtitle: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
    pub id: u64,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, alias = "sort_order")]
    pub sort_order: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NavItem {
    pub id: u64,
    pub name: String,
    #[serde(alias = "url")]
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<NavItem>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
    pub list: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub page_size: u64,
}

/// The public list's page, unwrapped from the backend's `data.meta`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ArticlePage {
    pub list: Vec<Article>,
    pub total: u64,
    pub page: u64,
    pub last_page: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleQuery {
    /// Matches a category's slug or name exactly.
    pub category: Option<String>,
    pub page: Option<u64>,
    pub page_size: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublicArticleQuery {
    pub page: Option<u64>,
    pub per_page: Option<u64>,
    pub category_id: Option<u64>,
    pub label_id: Option<u64>,
}

/// Sort key for the top-ranked endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankKey {
    ViewCount,
    LikeCount,
}

impl RankKey {
    pub fn as_str(self) -> &'static str {
        match self {
            RankKey::ViewCount => "view_count",
            RankKey::LikeCount => "like_count",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopRankedQuery {
    pub limit: u32,
    pub order_by: RankKey,
    pub category_id: Option<u64>,
    pub label_id: Option<u64>,
}

impl TopRankedQuery {
    pub fn new(limit: u32, order_by: RankKey) -> Self {
        Self {
            limit,
            order_by,
            category_id: None,
            label_id: None,
        }
    }
}
