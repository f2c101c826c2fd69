use super::{check_status, decode, parse_envelope, parse_list, parse_raw, BlogClient};
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::mapping::map_article;
use crate::types::{
    Article, ArticlePage, ArticleQuery, PaginatedResponse, PublicArticleQuery, TopRankedQuery,
};
use crate::wire::{Envelope, RawArticle, RawLikeResult, RawPage};

pub(crate) const ARTICLE_NOT_FOUND: &str = "article not found";
pub(crate) const LIKE_FAILED: &str = "failed to like article";
pub(crate) const UNLIKE_FAILED: &str = "failed to unlike article";

impl BlogClient {
    pub fn build_article_list(&self, query: &ArticleQuery) -> HttpRequest {
        HttpRequest::get(self.url("/articles"))
            .with_query("category", query.category.as_ref())
            .with_query("page", query.page)
            .with_query("pageSize", query.page_size)
    }

    /// Legacy endpoint: the body is already a `PaginatedResponse<Article>`.
    pub fn parse_article_list(
        &self,
        response: HttpResponse,
    ) -> Result<PaginatedResponse<Article>, ApiError> {
        parse_raw(response)
    }

    pub fn build_public_article_list(&self, query: &PublicArticleQuery) -> HttpRequest {
        HttpRequest::get(self.url("/articles/public/list"))
            .with_query("page", query.page)
            .with_query("per_page", query.per_page)
            .with_query("category_id", query.category_id)
            .with_query("label_id", query.label_id)
    }

    /// Unwrap `{code, data: {data: [...], meta}}`. A malformed or failed
    /// envelope yields an empty page at the requested page number.
    pub fn parse_public_article_list(
        &self,
        query: &PublicArticleQuery,
        response: HttpResponse,
    ) -> Result<ArticlePage, ApiError> {
        let envelope: Envelope<serde_json::Value> = parse_envelope(response)?;
        let requested_page = query.page.filter(|p| *p > 0).unwrap_or(1);
        let empty = ArticlePage {
            list: Vec::new(),
            total: 0,
            page: requested_page,
            last_page: 1,
        };
        if envelope.code != 0 {
            tracing::warn!(code = envelope.code, "public article list failed, using empty page");
            return Ok(empty);
        }
        let Some(data) = envelope.data.filter(|d| d.is_object()) else {
            tracing::warn!("public article list without a page object, using empty page");
            return Ok(empty);
        };
        let page: RawPage =
            serde_json::from_value(data).map_err(|e| ApiError::Deserialization(e.to_string()))?;
        if !page.data.is_array() {
            tracing::warn!("public article list without an article array, using empty page");
            return Ok(empty);
        }
        let raw: Vec<RawArticle> = serde_json::from_value(page.data)
            .map_err(|e| ApiError::Deserialization(e.to_string()))?;
        Ok(ArticlePage {
            list: raw.into_iter().map(map_article).collect(),
            total: page.meta.total,
            page: page.meta.current_page.unwrap_or(requested_page),
            last_page: page.meta.last_page.unwrap_or(1),
        })
    }

    pub fn build_article_detail(&self, id: u64) -> HttpRequest {
        HttpRequest::get(self.url(&format!("/articles/public/{id}")))
    }

    /// Success is only `code == 0` with a non-null payload.
    pub fn parse_article_detail(&self, response: HttpResponse) -> Result<Article, ApiError> {
        let envelope: Envelope<RawArticle> = parse_envelope(response)?;
        match envelope.data {
            Some(raw) if envelope.code == 0 => Ok(map_article(raw)),
            _ => Err(ApiError::NotFound(ARTICLE_NOT_FOUND.to_string())),
        }
    }

    pub fn build_top_ranked(&self, query: &TopRankedQuery) -> HttpRequest {
        HttpRequest::get(self.url("/articles/public/top-ranked"))
            .with_query("limit", Some(query.limit))
            .with_query("order_by", Some(query.order_by.as_str()))
            .with_query("category_id", query.category_id)
            .with_query("label_id", query.label_id)
    }

    pub fn parse_top_ranked(&self, response: HttpResponse) -> Result<Vec<Article>, ApiError> {
        parse_list(response, "articles/public/top-ranked", map_article)
    }

    pub fn build_like_article(&self, id: u64) -> HttpRequest {
        HttpRequest::post(self.url(&format!("/articles/public/{id}/like")))
    }

    pub fn parse_like_article(&self, response: HttpResponse) -> Result<u64, ApiError> {
        parse_like_count(response, LIKE_FAILED)
    }

    pub fn build_unlike_article(&self, id: u64) -> HttpRequest {
        HttpRequest::post(self.url(&format!("/articles/public/{id}/unlike")))
    }

    pub fn parse_unlike_article(&self, response: HttpResponse) -> Result<u64, ApiError> {
        parse_like_count(response, UNLIKE_FAILED)
    }
}

fn parse_like_count(response: HttpResponse, fallback: &str) -> Result<u64, ApiError> {
    check_status(&response)?;
    let envelope: Envelope<RawLikeResult> = decode(&response.body)?;
    if envelope.code != 0 {
        return Err(ApiError::backend(envelope.code, envelope.message, fallback));
    }
    Ok(envelope.data.and_then(|d| d.like_count).unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::tests::ok;
    use crate::http::HttpMethod;
    use crate::types::RankKey;

    fn client() -> BlogClient {
        BlogClient::new("http://localhost:3000/api")
    }

    #[test]
    fn build_article_list_includes_only_given_params() {
        let req = client().build_article_list(&ArticleQuery {
            category: Some("blog".to_string()),
            page: Some(2),
            page_size: None,
        });
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, "http://localhost:3000/api/articles");
        assert_eq!(
            req.query,
            vec![
                ("category".to_string(), "blog".to_string()),
                ("page".to_string(), "2".to_string()),
            ]
        );
        assert!(req.body.is_none());
    }

    #[test]
    fn parse_article_list_reads_legacy_body() {
        let body = r#"{"list":[{"id":1,"title":"T","summary":"S","category":{"id":1,"name":"Blog","slug":"blog"},
            "author":{"name":"A","avatar":"/a.jpg"},"createTime":"2018-10-28"}],"total":1,"page":1,"pageSize":10}"#;
        let page = client().parse_article_list(ok(body)).unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.page_size, 10);
        assert_eq!(page.list[0].author.name, "A");
    }

    #[test]
    fn build_public_article_list_params() {
        let req = client().build_public_article_list(&PublicArticleQuery {
            page: Some(3),
            per_page: Some(5),
            category_id: Some(2),
            label_id: None,
        });
        assert_eq!(req.url, "http://localhost:3000/api/articles/public/list");
        assert_eq!(req.query_value("page"), Some("3"));
        assert_eq!(req.query_value("per_page"), Some("5"));
        assert_eq!(req.query_value("category_id"), Some("2"));
        assert_eq!(req.query_value("label_id"), None);
    }

    #[test]
    fn parse_public_article_list_unwraps_meta() {
        let body = r#"{"code":0,"data":{"data":[{"id":4,"title":"T","thumbnail":"t.png","created_at":"2024-01-02"}],
            "meta":{"total":21,"current_page":2,"last_page":3}}}"#;
        let page = client()
            .parse_public_article_list(&PublicArticleQuery::default(), ok(body))
            .unwrap();
        assert_eq!(page.total, 21);
        assert_eq!(page.page, 2);
        assert_eq!(page.last_page, 3);
        assert_eq!(page.list[0].cover.as_deref(), Some("t.png"));
        assert_eq!(page.list[0].create_time, "2024-01-02");
    }

    #[test]
    fn parse_public_article_list_degrades_to_empty_page() {
        let query = PublicArticleQuery {
            page: Some(4),
            ..Default::default()
        };
        for body in [
            r#"{"code":1,"message":"boom"}"#,
            r#"{"code":0,"data":null}"#,
            r#"{"code":0,"data":{"data":"oops","meta":{"total":3}}}"#,
        ] {
            let page = client().parse_public_article_list(&query, ok(body)).unwrap();
            assert!(page.list.is_empty(), "{body}");
            assert_eq!(page.total, 0);
            assert_eq!(page.page, 4);
            assert_eq!(page.last_page, 1);
        }
    }

    #[test]
    fn build_article_detail_path() {
        let req = client().build_article_detail(42);
        assert_eq!(req.url, "http://localhost:3000/api/articles/public/42");
        assert!(req.query.is_empty());
    }

    #[test]
    fn parse_article_detail_success() {
        let body = r#"{"code":0,"data":{"id":42,"title":"T","content":"<p>x</p>","published_at":"2024-03-01"}}"#;
        let article = client().parse_article_detail(ok(body)).unwrap();
        assert_eq!(article.id, 42);
        assert_eq!(article.content.as_deref(), Some("<p>x</p>"));
        assert_eq!(article.create_time, "2024-03-01");
        assert_eq!(article.category.id, 0);
    }

    #[test]
    fn parse_article_detail_null_or_failed_is_not_found() {
        for body in [
            r#"{"code":0,"data":null}"#,
            r#"{"code":0}"#,
            r#"{"code":40401,"message":"missing","data":null}"#,
            r#"{"code":5,"data":{"id":1,"title":"T"}}"#,
        ] {
            let err = client().parse_article_detail(ok(body)).unwrap_err();
            match err {
                ApiError::NotFound(message) => assert_eq!(message, "article not found"),
                other => panic!("{body}: unexpected {other:?}"),
            }
        }
    }

    #[test]
    fn hot_and_recommend_share_endpoint_but_not_sort_key() {
        let hot = client().build_top_ranked(&TopRankedQuery::new(8, RankKey::ViewCount));
        let recommend = client().build_top_ranked(&TopRankedQuery::new(7, RankKey::LikeCount));
        assert_eq!(hot.url, recommend.url);
        assert_eq!(hot.url, "http://localhost:3000/api/articles/public/top-ranked");
        assert_eq!(hot.query_value("order_by"), Some("view_count"));
        assert_eq!(recommend.query_value("order_by"), Some("like_count"));
        assert_eq!(hot.query_value("limit"), Some("8"));
        assert_eq!(recommend.query_value("limit"), Some("7"));
    }

    #[test]
    fn build_top_ranked_with_filters() {
        let req = client().build_top_ranked(&TopRankedQuery {
            limit: 5,
            order_by: RankKey::LikeCount,
            category_id: Some(3),
            label_id: Some(9),
        });
        assert_eq!(req.query_value("category_id"), Some("3"));
        assert_eq!(req.query_value("label_id"), Some("9"));
    }

    #[test]
    fn parse_top_ranked_maps_articles() {
        let body = r#"{"code":0,"data":[{"id":1,"title":"A","view_count":99},{"id":2,"title":"B","view_count":5}]}"#;
        let list = client().parse_top_ranked(ok(body)).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].view_count, Some(99));
    }

    #[test]
    fn build_like_and_unlike_are_bodyless_posts() {
        let like = client().build_like_article(7);
        assert_eq!(like.method, HttpMethod::Post);
        assert_eq!(like.url, "http://localhost:3000/api/articles/public/7/like");
        assert!(like.body.is_none());
        let unlike = client().build_unlike_article(7);
        assert_eq!(unlike.url, "http://localhost:3000/api/articles/public/7/unlike");
    }

    #[test]
    fn parse_like_returns_count_or_zero() {
        let count = client()
            .parse_like_article(ok(r#"{"code":0,"data":{"like_count":12}}"#))
            .unwrap();
        assert_eq!(count, 12);
        let count = client().parse_like_article(ok(r#"{"code":0,"data":{}}"#)).unwrap();
        assert_eq!(count, 0);
        let count = client().parse_unlike_article(ok(r#"{"code":0}"#)).unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn parse_like_failure_uses_backend_message_or_fallback() {
        let err = client()
            .parse_like_article(ok(r#"{"code":2,"message":"already liked"}"#))
            .unwrap_err();
        assert!(matches!(err, ApiError::Backend { code: 2, ref message } if message == "already liked"));

        let err = client().parse_like_article(ok(r#"{"code":2}"#)).unwrap_err();
        assert_eq!(err.to_string(), LIKE_FAILED);

        let err = client().parse_unlike_article(ok(r#"{"code":2}"#)).unwrap_err();
        assert_eq!(err.to_string(), UNLIKE_FAILED);
    }
}
