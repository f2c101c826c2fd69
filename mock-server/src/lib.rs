//! A stand-in for the blog backend.
//!
//! Serves every endpoint the frontend reads, in the backend's own wire shapes:
//! `{code, message, data}` envelopes for most routes and bare payloads for
//! the legacy ones. State lives in memory so like/unlike are observable.

pub mod store;

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::debug;

use store::{
    AboutMeRow, AnnouncementRow, ArticleRow, BlogSiteRow, CarouselRow, LabelRow, LegacyArticle,
    LegacyTag, RawArticle, RawCategory, RawLabel, SiteNavRow, Store,
};

pub const CODE_OK: i64 = 0;
pub const CODE_BAD_REQUEST: i64 = 40001;
pub const CODE_NOT_FOUND: i64 = 40401;

const DEFAULT_PAGE: u64 = 1;
const DEFAULT_PER_PAGE: u64 = 10;
const DEFAULT_TOP_LIMIT: usize = 10;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub code: i64,
    pub message: String,
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    fn ok(data: T) -> Json<Self> {
        Json(Self {
            code: CODE_OK,
            message: "ok".to_string(),
            data: Some(data),
        })
    }

    fn fail(code: i64, message: &str) -> Json<Self> {
        Json(Self {
            code,
            message: message.to_string(),
            data: None,
        })
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub meta: PageMeta,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PageMeta {
    pub total: u64,
    pub current_page: u64,
    pub last_page: u64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyPage<T> {
    pub list: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub page_size: u64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LikeResult {
    pub like_count: u64,
}

#[derive(Deserialize)]
pub struct LegacyListParams {
    pub category: Option<String>,
    pub page: Option<u64>,
    #[serde(rename = "pageSize")]
    pub page_size: Option<u64>,
}

#[derive(Deserialize)]
pub struct PublicListParams {
    pub page: Option<u64>,
    pub per_page: Option<u64>,
    pub category_id: Option<u64>,
    pub label_id: Option<u64>,
}

#[derive(Deserialize)]
pub struct TopRankedParams {
    pub limit: Option<usize>,
    pub order_by: Option<String>,
    pub category_id: Option<u64>,
    pub label_id: Option<u64>,
}

#[derive(Deserialize)]
pub struct SearchBody {
    #[serde(default)]
    pub keyword: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ArticleCategory {
    pub id: u64,
    pub name: String,
    pub description: String,
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    Router::new()
        .route("/articles", get(legacy_articles))
        .route("/articles/public/list", get(public_list))
        .route("/articles/public/top-ranked", get(top_ranked))
        .route("/articles/public/{id}", get(article_detail))
        .route("/articles/public/{id}/like", post(like_article))
        .route("/articles/public/{id}/unlike", post(unlike_article))
        .route("/carousels/public/enabled", get(carousels))
        .route("/categories", get(legacy_categories))
        .route("/article-categories/public/list", get(article_categories))
        .route("/tags", get(legacy_tags))
        .route("/labels/public/special", get(special_labels))
        .route("/labels/public/list", get(public_labels))
        .route("/blog-sites", get(blog_sites))
        .route("/about-me/public", get(about_me))
        .route("/search", post(search))
        .route("/announcements/public/enabled", get(announcements))
        .route("/site-navs/public/list", get(site_navs))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn has_label(row: &ArticleRow, label_id: Option<u64>) -> bool {
    label_id.map_or(true, |id| row.label_ids.contains(&id))
}

fn in_category(row: &ArticleRow, category_id: Option<u64>) -> bool {
    category_id.map_or(true, |id| row.category_id == Some(id))
}

fn positive(value: Option<u64>, default: u64) -> u64 {
    value.filter(|v| *v > 0).unwrap_or(default)
}

/// `(offset, len)` of a 1-based page, saturating on absurd query values.
fn page_window(page: u64, per_page: u64) -> (usize, usize) {
    let offset = (page - 1).saturating_mul(per_page);
    (
        usize::try_from(offset).unwrap_or(usize::MAX),
        usize::try_from(per_page).unwrap_or(usize::MAX),
    )
}

// --- articles ---

async fn legacy_articles(
    State(db): State<Db>,
    Query(params): Query<LegacyListParams>,
) -> Json<LegacyPage<LegacyArticle>> {
    let store = db.read().await;
    let page = positive(params.page, DEFAULT_PAGE);
    let page_size = positive(params.page_size, DEFAULT_PER_PAGE);
    let matching: Vec<&ArticleRow> = store
        .articles
        .iter()
        .filter(|a| match &params.category {
            None => true,
            Some(wanted) => store
                .category(a.category_id)
                .is_some_and(|c| &c.slug == wanted || &c.name == wanted),
        })
        .collect();
    let (offset, len) = page_window(page, page_size);
    let list = matching
        .iter()
        .skip(offset)
        .take(len)
        .map(|a| store.legacy_article(a))
        .collect();
    Json(LegacyPage {
        list,
        total: matching.len() as u64,
        page,
        page_size,
    })
}

async fn public_list(
    State(db): State<Db>,
    Query(params): Query<PublicListParams>,
) -> Json<Envelope<Page<RawArticle>>> {
    let store = db.read().await;
    let page = positive(params.page, DEFAULT_PAGE);
    let per_page = positive(params.per_page, DEFAULT_PER_PAGE);
    let matching: Vec<&ArticleRow> = store
        .articles
        .iter()
        .filter(|a| in_category(a, params.category_id) && has_label(a, params.label_id))
        .collect();
    let total = matching.len() as u64;
    let (offset, len) = page_window(page, per_page);
    let data = matching
        .iter()
        .skip(offset)
        .take(len)
        .map(|a| store.raw_article(a))
        .collect();
    Envelope::ok(Page {
        data,
        meta: PageMeta {
            total,
            current_page: page,
            last_page: total.div_ceil(per_page).max(1),
        },
    })
}

async fn top_ranked(
    State(db): State<Db>,
    Query(params): Query<TopRankedParams>,
) -> Json<Envelope<Vec<RawArticle>>> {
    let key: fn(&ArticleRow) -> u64 = match params.order_by.as_deref().unwrap_or("view_count") {
        "view_count" => |a: &ArticleRow| a.view_count,
        "like_count" => |a: &ArticleRow| a.like_count,
        _ => return Envelope::fail(CODE_BAD_REQUEST, "order_by must be view_count or like_count"),
    };
    let store = db.read().await;
    let mut ranked: Vec<&ArticleRow> = store
        .articles
        .iter()
        .filter(|a| in_category(a, params.category_id) && has_label(a, params.label_id))
        .collect();
    ranked.sort_by_key(|a| std::cmp::Reverse(key(a)));
    let data = ranked
        .into_iter()
        .take(params.limit.unwrap_or(DEFAULT_TOP_LIMIT))
        .map(|a| store.raw_article(a))
        .collect();
    Envelope::ok(data)
}

async fn article_detail(State(db): State<Db>, Path(id): Path<u64>) -> Json<Envelope<RawArticle>> {
    let store = db.read().await;
    match store.article(id) {
        Some(row) => Envelope::ok(RawArticle {
            content: Some(row.content.clone()),
            ..store.raw_article(row)
        }),
        None => Envelope::fail(CODE_NOT_FOUND, "article not found"),
    }
}

async fn like_article(State(db): State<Db>, Path(id): Path<u64>) -> Json<Envelope<LikeResult>> {
    let mut store = db.write().await;
    match store.article_mut(id) {
        Some(row) => {
            row.like_count += 1;
            debug!(id, like_count = row.like_count, "liked");
            Envelope::ok(LikeResult {
                like_count: row.like_count,
            })
        }
        None => Envelope::fail(CODE_NOT_FOUND, "article not found"),
    }
}

async fn unlike_article(State(db): State<Db>, Path(id): Path<u64>) -> Json<Envelope<LikeResult>> {
    let mut store = db.write().await;
    match store.article_mut(id) {
        Some(row) => {
            row.like_count = row.like_count.saturating_sub(1);
            debug!(id, like_count = row.like_count, "unliked");
            Envelope::ok(LikeResult {
                like_count: row.like_count,
            })
        }
        None => Envelope::fail(CODE_NOT_FOUND, "article not found"),
    }
}

async fn search(State(db): State<Db>, Json(body): Json<SearchBody>) -> Json<Vec<LegacyArticle>> {
    let needle = body.keyword.trim().to_lowercase();
    if needle.is_empty() {
        return Json(Vec::new());
    }
    let store = db.read().await;
    Json(
        store
            .articles
            .iter()
            .filter(|a| {
                a.title.to_lowercase().contains(&needle) || a.summary.to_lowercase().contains(&needle)
            })
            .map(|a| store.legacy_article(a))
            .collect(),
    )
}

// --- site content ---

async fn carousels(State(db): State<Db>) -> Json<Envelope<Vec<CarouselRow>>> {
    Envelope::ok(db.read().await.carousels.clone())
}

async fn legacy_categories(State(db): State<Db>) -> Json<Vec<RawCategory>> {
    let store = db.read().await;
    Json(
        store
            .categories
            .iter()
            .map(|c| RawCategory {
                id: c.id,
                name: c.name.clone(),
                slug: c.slug.clone(),
            })
            .collect(),
    )
}

async fn article_categories(State(db): State<Db>) -> Json<Envelope<Vec<ArticleCategory>>> {
    let store = db.read().await;
    Envelope::ok(
        store
            .categories
            .iter()
            .map(|c| ArticleCategory {
                id: c.id,
                name: c.name.clone(),
                description: c.slug.clone(),
            })
            .collect(),
    )
}

async fn legacy_tags(State(db): State<Db>) -> Json<Vec<LegacyTag>> {
    let store = db.read().await;
    Json(
        store
            .labels
            .iter()
            .map(|l| LegacyTag {
                id: l.id,
                name: l.title.clone(),
            })
            .collect(),
    )
}

async fn special_labels(State(db): State<Db>) -> Json<Envelope<Vec<RawLabel>>> {
    let store = db.read().await;
    Envelope::ok(
        store
            .labels
            .iter()
            .filter(|l| l.is_special == "1")
            .map(|l| RawLabel {
                id: l.id,
                title: l.title.clone(),
            })
            .collect(),
    )
}

async fn public_labels(State(db): State<Db>) -> Json<Envelope<Vec<LabelRow>>> {
    Envelope::ok(db.read().await.labels.clone())
}

async fn blog_sites(State(db): State<Db>) -> Json<Vec<BlogSiteRow>> {
    Json(db.read().await.blog_sites.clone())
}

async fn about_me(State(db): State<Db>) -> Json<Envelope<AboutMeRow>> {
    Envelope::ok(db.read().await.about_me.clone())
}

async fn announcements(State(db): State<Db>) -> Json<Envelope<Vec<AnnouncementRow>>> {
    Envelope::ok(db.read().await.announcements.clone())
}

async fn site_navs(State(db): State<Db>) -> Json<Envelope<Vec<SiteNavRow>>> {
    Envelope::ok(db.read().await.site_navs.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_envelope_serializes_code_zero() {
        let Json(envelope) = Envelope::ok(vec![1, 2]);
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["code"], 0);
        assert_eq!(json["message"], "ok");
        assert_eq!(json["data"], serde_json::json!([1, 2]));
    }

    #[test]
    fn failed_envelope_has_null_data() {
        let Json(envelope) = Envelope::<()>::fail(CODE_NOT_FOUND, "article not found");
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["code"], 40401);
        assert!(json["data"].is_null());
    }

    #[test]
    fn legacy_params_read_camel_case_page_size() {
        let params: LegacyListParams =
            serde_json::from_str(r#"{"category":"blog","pageSize":5}"#).unwrap();
        assert_eq!(params.page_size, Some(5));
        assert!(params.page.is_none());
    }

    #[test]
    fn search_body_defaults_keyword() {
        let body: SearchBody = serde_json::from_str("{}").unwrap();
        assert!(body.keyword.is_empty());
    }

    #[test]
    fn page_window_saturates() {
        assert_eq!(page_window(1, 10), (0, 10));
        assert_eq!(page_window(3, 4), (8, 4));
        let (offset, _) = page_window(u64::MAX, u64::MAX);
        assert_eq!(offset, usize::MAX);
    }

    #[test]
    fn positive_rejects_zero() {
        assert_eq!(positive(Some(0), 1), 1);
        assert_eq!(positive(Some(4), 1), 4);
        assert_eq!(positive(None, 10), 10);
    }
}
