//! Data-access and normalization layer for the blog frontend.
//!
//! # Overview
//! `BlogApi` is the single query interface the UI calls. Behind it sits one
//! `DataSource`: either the fixed `MockProvider` dataset or a `LiveSource`
//! that talks to the REST backend and normalizes its responses into the view
//! models in `types`.
//!
//! # Design
//! - `BlogClient` is stateless. Each endpoint is split into `build_*`
//!   (produces an `HttpRequest`) and `parse_*` (consumes an `HttpResponse`),
//!   so request shapes and normalization are tested without a network.
//! - `Transport` is the only I/O seam; `UreqTransport` is the real one.
//! - Raw backend shapes live in `wire` and are converted by the named
//!   functions in `mapping`.
//! - Configuration is an explicit `ApiConfig` value, read once.
//! - Backend DTOs are defined independently from the `mock-server` crate;
//!   integration tests catch schema drift.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod mapping;
pub mod mock;
pub mod source;
pub mod transport;
pub mod types;
pub mod wire;

pub use api::BlogApi;
pub use client::BlogClient;
pub use config::ApiConfig;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use mock::MockProvider;
pub use source::{DataSource, LiveSource};
pub use transport::{Transport, UreqTransport};
pub use types::{
    AboutInfo, Announcement, Article, ArticlePage, ArticleQuery, Author, Banner, BlogInfo,
    BlogSite, Category, Contact, ContactKind, Experience, Label, NavItem, PaginatedResponse,
    PublicArticleQuery, RankKey, Tag, TopRankedQuery,
};
