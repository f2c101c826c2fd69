//! The query interface UI code calls.
//!
//! `BlogApi` owns one `DataSource`, chosen when it is built, and adds the
//! few caller-facing defaults that are not part of any backend contract:
//! sidebar list sizes, the hot/recommend sort keys, and skipping empty
//! searches.

use tracing::{info, warn};

use crate::client::BlogClient;
use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::mock::MockProvider;
use crate::source::{DataSource, LiveSource};
use crate::transport::UreqTransport;
use crate::types::{
    AboutInfo, Announcement, Article, ArticlePage, ArticleQuery, Banner, BlogSite, Category, Label,
    NavItem, PaginatedResponse, PublicArticleQuery, RankKey, Tag, TopRankedQuery,
};

pub const HOT_LIST_LIMIT: u32 = 8;
pub const RECOMMEND_LIST_LIMIT: u32 = 7;

pub struct BlogApi {
    source: Box<dyn DataSource>,
    mock: bool,
}

impl BlogApi {
    /// Use an explicit source, e.g. a `LiveSource` over a custom transport.
    pub fn new(source: impl DataSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            mock: false,
        }
    }

    pub fn mock() -> Self {
        Self {
            source: Box::new(MockProvider::new()),
            mock: true,
        }
    }

    pub fn from_config(config: &ApiConfig) -> Self {
        info!(
            environment = %config.environment,
            base_url = %config.base_url,
            use_mock = config.use_mock,
            "configuring blog api"
        );
        if config.use_mock {
            return Self::mock();
        }
        if !config.has_absolute_base_url() {
            warn!(
                base_url = %config.base_url,
                "live base url has no http(s) scheme; every request will fail with a network error"
            );
        }
        Self::new(LiveSource::new(
            BlogClient::new(&config.base_url),
            UreqTransport::new(config.timeout),
        ))
    }

    pub fn is_mock(&self) -> bool {
        self.mock
    }

    // --- articles ---

    pub fn get_article_list(
        &self,
        query: &ArticleQuery,
    ) -> Result<PaginatedResponse<Article>, ApiError> {
        self.source.article_list(query)
    }

    pub fn get_public_article_list(
        &self,
        query: &PublicArticleQuery,
    ) -> Result<ArticlePage, ApiError> {
        self.source.public_article_list(query)
    }

    pub fn get_article_detail(&self, id: u64) -> Result<Article, ApiError> {
        self.source.article_detail(id)
    }

    /// Most viewed articles.
    pub fn get_hot_articles(&self, limit: Option<u32>) -> Result<Vec<Article>, ApiError> {
        self.source.top_ranked(&TopRankedQuery::new(
            limit.unwrap_or(HOT_LIST_LIMIT),
            RankKey::ViewCount,
        ))
    }

    /// Most liked articles. Same endpoint as the hot list, different key.
    pub fn get_recommended_articles(&self, limit: Option<u32>) -> Result<Vec<Article>, ApiError> {
        self.source.top_ranked(&TopRankedQuery::new(
            limit.unwrap_or(RECOMMEND_LIST_LIMIT),
            RankKey::LikeCount,
        ))
    }

    pub fn get_top_ranked_articles(&self, query: &TopRankedQuery) -> Result<Vec<Article>, ApiError> {
        self.source.top_ranked(query)
    }

    pub fn like_article(&self, id: u64) -> Result<u64, ApiError> {
        self.source.like_article(id)
    }

    pub fn unlike_article(&self, id: u64) -> Result<u64, ApiError> {
        self.source.unlike_article(id)
    }

    // --- site content ---

    pub fn get_banners(&self) -> Result<Vec<Banner>, ApiError> {
        self.source.banners()
    }

    pub fn get_categories(&self) -> Result<Vec<Category>, ApiError> {
        self.source.categories()
    }

    pub fn get_article_categories(&self) -> Result<Vec<Category>, ApiError> {
        self.source.article_categories()
    }

    pub fn get_tags(&self) -> Result<Vec<Tag>, ApiError> {
        self.source.tags()
    }

    pub fn get_special_labels(&self) -> Result<Vec<Tag>, ApiError> {
        self.source.special_labels()
    }

    pub fn get_public_labels(&self) -> Result<Vec<Label>, ApiError> {
        self.source.public_labels()
    }

    pub fn get_blog_sites(&self) -> Result<Vec<BlogSite>, ApiError> {
        self.source.blog_sites()
    }

    pub fn get_about_info(&self) -> Result<AboutInfo, ApiError> {
        self.source.about()
    }

    pub fn search(&self, keyword: &str) -> Result<Vec<Article>, ApiError> {
        if keyword.is_empty() {
            return Ok(Vec::new());
        }
        self.source.search(keyword)
    }

    pub fn get_announcements(&self) -> Result<Vec<Announcement>, ApiError> {
        self.source.announcements()
    }

    pub fn get_site_navs(&self) -> Result<Vec<NavItem>, ApiError> {
        self.source.site_navs()
    }
}
