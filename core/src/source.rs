//! The data-source capability behind the facade.
//!
//! # Design
//! The mock/live switch happens once, when a `DataSource` is chosen, instead
//! of inside every query. `MockProvider` answers from the fixed dataset;
//! `LiveSource` pairs a `BlogClient` with a `Transport` and runs
//! build → execute → parse for each call.

use tracing::debug;

use crate::client::BlogClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::Transport;
use crate::types::{
    AboutInfo, Announcement, Article, ArticlePage, ArticleQuery, Banner, BlogSite, Category, Label,
    NavItem, PaginatedResponse, PublicArticleQuery, Tag, TopRankedQuery,
};

/// One method per backend query. Implemented by `MockProvider` and
/// `LiveSource`.
///
/// Sources are `Send + Sync` so a `BlogApi` can be shared across threads or
/// moved into `spawn_blocking`.
pub trait DataSource: Send + Sync {
    fn article_list(&self, query: &ArticleQuery) -> Result<PaginatedResponse<Article>, ApiError>;
    fn public_article_list(&self, query: &PublicArticleQuery) -> Result<ArticlePage, ApiError>;
    fn article_detail(&self, id: u64) -> Result<Article, ApiError>;
    fn top_ranked(&self, query: &TopRankedQuery) -> Result<Vec<Article>, ApiError>;
    /// Returns the updated like count.
    fn like_article(&self, id: u64) -> Result<u64, ApiError>;
    fn unlike_article(&self, id: u64) -> Result<u64, ApiError>;
    fn banners(&self) -> Result<Vec<Banner>, ApiError>;
    fn categories(&self) -> Result<Vec<Category>, ApiError>;
    fn article_categories(&self) -> Result<Vec<Category>, ApiError>;
    fn tags(&self) -> Result<Vec<Tag>, ApiError>;
    fn special_labels(&self) -> Result<Vec<Tag>, ApiError>;
    fn public_labels(&self) -> Result<Vec<Label>, ApiError>;
    fn blog_sites(&self) -> Result<Vec<BlogSite>, ApiError>;
    fn about(&self) -> Result<AboutInfo, ApiError>;
    fn search(&self, keyword: &str) -> Result<Vec<Article>, ApiError>;
    fn announcements(&self) -> Result<Vec<Announcement>, ApiError>;
    fn site_navs(&self) -> Result<Vec<NavItem>, ApiError>;
}

/// Answers every query from the live backend.
pub struct LiveSource<T> {
    client: BlogClient,
    transport: T,
}

impl<T: Transport> LiveSource<T> {
    pub fn new(client: BlogClient, transport: T) -> Self {
        Self { client, transport }
    }

    pub fn client(&self) -> &BlogClient {
        &self.client
    }

    fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        debug!(url = %request.url, "live backend query");
        self.transport.execute(&request)
    }
}

impl<T: Transport + Send + Sync> DataSource for LiveSource<T> {
    fn article_list(&self, query: &ArticleQuery) -> Result<PaginatedResponse<Article>, ApiError> {
        let response = self.send(self.client.build_article_list(query))?;
        self.client.parse_article_list(response)
    }

    fn public_article_list(&self, query: &PublicArticleQuery) -> Result<ArticlePage, ApiError> {
        let response = self.send(self.client.build_public_article_list(query))?;
        self.client.parse_public_article_list(query, response)
    }

    fn article_detail(&self, id: u64) -> Result<Article, ApiError> {
        let response = self.send(self.client.build_article_detail(id))?;
        self.client.parse_article_detail(response)
    }

    fn top_ranked(&self, query: &TopRankedQuery) -> Result<Vec<Article>, ApiError> {
        let response = self.send(self.client.build_top_ranked(query))?;
        self.client.parse_top_ranked(response)
    }

    fn like_article(&self, id: u64) -> Result<u64, ApiError> {
        let response = self.send(self.client.build_like_article(id))?;
        self.client.parse_like_article(response)
    }

    fn unlike_article(&self, id: u64) -> Result<u64, ApiError> {
        let response = self.send(self.client.build_unlike_article(id))?;
        self.client.parse_unlike_article(response)
    }

    fn banners(&self) -> Result<Vec<Banner>, ApiError> {
        let response = self.send(self.client.build_banners())?;
        self.client.parse_banners(response)
    }

    fn categories(&self) -> Result<Vec<Category>, ApiError> {
        let response = self.send(self.client.build_categories())?;
        self.client.parse_categories(response)
    }

    fn article_categories(&self) -> Result<Vec<Category>, ApiError> {
        let response = self.send(self.client.build_article_categories())?;
        self.client.parse_article_categories(response)
    }

    fn tags(&self) -> Result<Vec<Tag>, ApiError> {
        let response = self.send(self.client.build_tags())?;
        self.client.parse_tags(response)
    }

    fn special_labels(&self) -> Result<Vec<Tag>, ApiError> {
        let response = self.send(self.client.build_special_labels())?;
        self.client.parse_special_labels(response)
    }

    fn public_labels(&self) -> Result<Vec<Label>, ApiError> {
        let response = self.send(self.client.build_public_labels())?;
        self.client.parse_public_labels(response)
    }

    fn blog_sites(&self) -> Result<Vec<BlogSite>, ApiError> {
        let response = self.send(self.client.build_blog_sites())?;
        self.client.parse_blog_sites(response)
    }

    fn about(&self) -> Result<AboutInfo, ApiError> {
        let response = self.send(self.client.build_about())?;
        self.client.parse_about(response)
    }

    fn search(&self, keyword: &str) -> Result<Vec<Article>, ApiError> {
        let response = self.send(self.client.build_search(keyword)?)?;
        self.client.parse_search(response)
    }

    fn announcements(&self) -> Result<Vec<Announcement>, ApiError> {
        let response = self.send(self.client.build_announcements())?;
        self.client.parse_announcements(response)
    }

    fn site_navs(&self) -> Result<Vec<NavItem>, ApiError> {
        let response = self.send(self.client.build_site_navs())?;
        self.client.parse_site_navs(response)
    }
}
