use serde::Serialize;

use super::{parse_raw, BlogClient};
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::Article;

#[derive(Serialize)]
struct SearchBody<'a> {
    keyword: &'a str,
}

impl BlogClient {
    pub fn build_search(&self, keyword: &str) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(&SearchBody { keyword })
            .map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest::post_json(self.url("/search"), body))
    }

    /// The backend already answers in the article view shape; no mapping.
    pub fn parse_search(&self, response: HttpResponse) -> Result<Vec<Article>, ApiError> {
        parse_raw(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::tests::ok;
    use crate::http::HttpMethod;

    #[test]
    fn build_search_posts_keyword() {
        let client = BlogClient::new("http://localhost:3000/api");
        let req = client.build_search("rust \"async\"").unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.url, "http://localhost:3000/api/search");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({"keyword": "rust \"async\""}));
    }

    #[test]
    fn parse_search_returns_articles_as_is() {
        let client = BlogClient::new("http://localhost:3000/api");
        let body = r#"[{"id":3,"title":"Found","summary":"S","cover":"/c.jpg","createTime":"2018-10-28",
            "category":{"id":1,"name":"Blog"},"author":{"name":"A","avatar":""}}]"#;
        let articles = client.parse_search(ok(body)).unwrap();
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].cover.as_deref(), Some("/c.jpg"));
        assert_eq!(articles[0].create_time, "2018-10-28");
    }
}
