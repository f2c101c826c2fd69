//! End-to-end tests against the mock backend.
//!
//! # Design
//! Each test starts its own mock server on a random port, then drives the
//! live `BlogApi` over real HTTP with `UreqTransport`. This checks that the
//! core's request building and normalization agree with a server that speaks
//! the backend's wire format.

use blog_core::{
    ApiConfig, ApiError, ArticleQuery, BlogApi, ContactKind, PublicArticleQuery, RankKey,
    TopRankedQuery,
};

/// Start the mock server on a background runtime and return its base URL.
fn start_server() -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    format!("http://{addr}")
}

fn live_api() -> BlogApi {
    let base_url = start_server();
    let config = ApiConfig::from_lookup(|key| match key {
        "BLOG_API_BASE_URL" => Some(base_url.clone()),
        "BLOG_USE_MOCK" => Some("false".to_string()),
        "BLOG_APP_ENV" => Some("test".to_string()),
        _ => None,
    });
    let api = BlogApi::from_config(&config);
    assert!(!api.is_mock());
    api
}

fn ids(articles: &[blog_core::Article]) -> Vec<u64> {
    articles.iter().map(|a| a.id).collect()
}

#[test]
fn public_list_is_normalized() {
    let api = live_api();

    let page = api
        .get_public_article_list(&PublicArticleQuery {
            page: Some(2),
            per_page: Some(4),
            ..PublicArticleQuery::default()
        })
        .unwrap();
    assert_eq!(page.total, 6);
    assert_eq!(page.page, 2);
    assert_eq!(page.last_page, 2);
    assert_eq!(ids(&page.list), vec![5, 6]);

    // Empty published_at falls back to created_at; missing category defaults.
    assert_eq!(page.list[0].create_time, "2024-03-20");
    assert_eq!(page.list[1].category.id, 0);
    assert!(page.list[1].category.name.is_empty());
    assert_eq!(page.list[0].cover.as_deref(), Some("/images/5.jpg"));
}

#[test]
fn public_list_filters_by_label() {
    let api = live_api();
    let page = api
        .get_public_article_list(&PublicArticleQuery {
            label_id: Some(3),
            ..PublicArticleQuery::default()
        })
        .unwrap();
    assert_eq!(ids(&page.list), vec![2, 3]);
    assert_eq!(page.last_page, 1);
}

#[test]
fn legacy_article_list_passes_through() {
    let api = live_api();
    let page = api
        .get_article_list(&ArticleQuery {
            category: Some("blog".to_string()),
            page: Some(1),
            page_size: Some(10),
        })
        .unwrap();
    assert_eq!(page.total, 2);
    assert_eq!(page.page_size, 10);
    assert_eq!(ids(&page.list), vec![1, 4]);
    assert_eq!(page.list[0].author.name, "Site Admin");
}

#[test]
fn detail_and_not_found() {
    let api = live_api();

    let article = api.get_article_detail(2).unwrap();
    assert_eq!(article.title, "Responsive layouts without a framework");
    assert_eq!(article.create_time, "2024-03-05");
    assert!(article.content.unwrap().contains("Media queries"));
    assert_eq!(article.category.slug.as_deref(), Some("frontend"));
    let labels: Vec<_> = article.labels.unwrap().into_iter().map(|t| t.name).collect();
    assert_eq!(labels, vec!["CSS", "Layout"]);

    let err = api.get_article_detail(999).unwrap_err();
    assert!(matches!(err, ApiError::NotFound(ref m) if m == "article not found"));
}

#[test]
fn hot_and_recommended_differ_by_sort_key() {
    let api = live_api();
    let hot = api.get_hot_articles(Some(3)).unwrap();
    let recommended = api.get_recommended_articles(Some(3)).unwrap();
    assert_eq!(ids(&hot), vec![4, 2, 5]);
    assert_eq!(ids(&recommended), vec![5, 3, 4]);

    // Default limits exceed the dataset, so every article comes back.
    assert_eq!(api.get_hot_articles(None).unwrap().len(), 6);

    let filtered = api
        .get_top_ranked_articles(&TopRankedQuery {
            category_id: Some(2),
            ..TopRankedQuery::new(5, RankKey::LikeCount)
        })
        .unwrap();
    assert_eq!(ids(&filtered), vec![5, 2]);
}

#[test]
fn like_then_unlike_round_trips_count() {
    let api = live_api();
    assert_eq!(api.like_article(3).unwrap(), 31);
    assert_eq!(api.like_article(3).unwrap(), 32);
    assert_eq!(api.unlike_article(3).unwrap(), 31);
    assert_eq!(api.get_article_detail(3).unwrap().like_count, Some(31));

    let err = api.like_article(404).unwrap_err();
    assert_eq!(err.to_string(), "article not found");
}

#[test]
fn banners_and_taxonomy() {
    let api = live_api();

    let banners = api.get_banners().unwrap();
    assert_eq!(banners.len(), 2);
    assert_eq!(banners[0].image, "/images/banner1.jpg");
    assert_eq!(banners[0].link, "/article/5");
    assert_eq!(banners[1].link, "");

    let categories = api.get_categories().unwrap();
    assert_eq!(categories.len(), 3);
    let article_categories = api.get_article_categories().unwrap();
    assert_eq!(article_categories, categories);

    assert_eq!(api.get_tags().unwrap().len(), 4);

    let special = api.get_special_labels().unwrap();
    assert_eq!(special.iter().map(|t| t.name.as_str()).collect::<Vec<_>>(), vec!["Rust", "Layout"]);
    assert!(special.iter().all(|t| t.color.is_none()));

    let public = api.get_public_labels().unwrap();
    assert_eq!(public.len(), 4);
    assert_eq!(public[0].is_special, "1");
}

#[test]
fn about_info_is_cleaned_and_flattened() {
    let api = live_api();
    let about = api.get_about_info().unwrap();
    assert_eq!(about.name, "Quinn");
    assert_eq!(about.avatar, "https://cdn.example.com/avatar.png");
    assert_eq!(about.title, "Web developer");
    assert_eq!(about.description, "Build small, ship often");
    assert!(about.experiences.is_empty());
    let kinds: Vec<_> = about.contacts.iter().map(|c| c.kind).collect();
    assert_eq!(kinds, vec![ContactKind::Email, ContactKind::Github]);
}

#[test]
fn search_over_http() {
    let api = live_api();
    assert_eq!(ids(&api.search("rust").unwrap()), vec![5]);
    assert!(api.search("").unwrap().is_empty());
    assert!(api.search("nothing matches this").unwrap().is_empty());
}

#[test]
fn directory_endpoints() {
    let api = live_api();

    let sites = api.get_blog_sites().unwrap();
    assert_eq!(sites[0].category.as_deref(), Some("tech"));

    let announcements = api.get_announcements().unwrap();
    assert_eq!(announcements.len(), 2);
    assert_eq!(announcements[1].sort_order, 2);
    assert_eq!(announcements[1].link.as_deref(), Some("/article/1"));

    let navs = api.get_site_navs().unwrap();
    assert_eq!(navs.len(), 3);
    assert_eq!(navs[1].children.as_ref().map(Vec::len), Some(2));
    assert!(navs[0].children.is_none());
}

#[test]
fn unreachable_backend_is_a_network_error() {
    let config = ApiConfig {
        base_url: "http://127.0.0.1:1".to_string(),
        ..ApiConfig::default()
    };
    let err = BlogApi::from_config(&config).get_banners().unwrap_err();
    assert!(matches!(err, ApiError::Network(_)));
}
