//! Categories, tags and labels.
//!
//! Two label shapes coexist on purpose: the "special" query is mapped to
//! `Tag` for the tag cloud, while the public list keeps the raw `Label`.

use super::{parse_list, parse_raw, BlogClient};
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::mapping::{map_article_category, map_special_label};
use crate::types::{Category, Label, Tag};

impl BlogClient {
    pub fn build_categories(&self) -> HttpRequest {
        HttpRequest::get(self.url("/categories"))
    }

    pub fn parse_categories(&self, response: HttpResponse) -> Result<Vec<Category>, ApiError> {
        parse_raw(response)
    }

    pub fn build_article_categories(&self) -> HttpRequest {
        HttpRequest::get(self.url("/article-categories/public/list"))
    }

    pub fn parse_article_categories(
        &self,
        response: HttpResponse,
    ) -> Result<Vec<Category>, ApiError> {
        parse_list(response, "article-categories/public/list", map_article_category)
    }

    pub fn build_tags(&self) -> HttpRequest {
        HttpRequest::get(self.url("/tags"))
    }

    pub fn parse_tags(&self, response: HttpResponse) -> Result<Vec<Tag>, ApiError> {
        parse_raw(response)
    }

    pub fn build_special_labels(&self) -> HttpRequest {
        HttpRequest::get(self.url("/labels/public/special"))
    }

    pub fn parse_special_labels(&self, response: HttpResponse) -> Result<Vec<Tag>, ApiError> {
        parse_list(response, "labels/public/special", map_special_label)
    }

    pub fn build_public_labels(&self) -> HttpRequest {
        HttpRequest::get(self.url("/labels/public/list"))
    }

    pub fn parse_public_labels(&self, response: HttpResponse) -> Result<Vec<Label>, ApiError> {
        parse_list(response, "labels/public/list", |label: Label| label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::tests::ok;

    fn client() -> BlogClient {
        BlogClient::new("http://localhost:3000/api")
    }

    #[test]
    fn endpoint_paths() {
        let c = client();
        assert!(c.build_categories().url.ends_with("/api/categories"));
        assert!(c.build_article_categories().url.ends_with("/api/article-categories/public/list"));
        assert!(c.build_tags().url.ends_with("/api/tags"));
        assert!(c.build_special_labels().url.ends_with("/api/labels/public/special"));
        assert!(c.build_public_labels().url.ends_with("/api/labels/public/list"));
    }

    #[test]
    fn categories_are_legacy_raw() {
        let cats = client()
            .parse_categories(ok(r#"[{"id":1,"name":"Blog","slug":"blog"},{"id":2,"name":"Diary"}]"#))
            .unwrap();
        assert_eq!(cats[0].slug.as_deref(), Some("blog"));
        assert!(cats[1].slug.is_none());
    }

    #[test]
    fn article_categories_map_description_to_slug() {
        let cats = client()
            .parse_article_categories(ok(
                r#"{"code":0,"data":[{"id":3,"name":"Life","description":"life"}]}"#,
            ))
            .unwrap();
        assert_eq!(cats, vec![Category { id: 3, name: "Life".to_string(), slug: Some("life".to_string()) }]);
    }

    #[test]
    fn special_labels_map_title_to_name() {
        let tags = client()
            .parse_special_labels(ok(
                r#"{"code":0,"data":[{"id":5,"title":"SEO","is_special":"1"}]}"#,
            ))
            .unwrap();
        assert_eq!(tags, vec![Tag { id: 5, name: "SEO".to_string(), color: None }]);
    }

    #[test]
    fn public_labels_stay_raw() {
        let labels = client()
            .parse_public_labels(ok(
                r#"{"code":0,"data":[{"id":5,"title":"SEO","is_special":"0",
                    "created_at":"2024-01-01 00:00:00","updated_at":"2024-01-02 00:00:00"}]}"#,
            ))
            .unwrap();
        assert_eq!(labels[0].title, "SEO");
        assert_eq!(labels[0].is_special, "0");
        assert_eq!(labels[0].updated_at.as_deref(), Some("2024-01-02 00:00:00"));
    }

    #[test]
    fn tags_are_legacy_raw() {
        let tags = client()
            .parse_tags(ok(r##"[{"id":1,"name":"layout","color":"#EB6841"}]"##))
            .unwrap();
        assert_eq!(tags[0].color.as_deref(), Some("#EB6841"));
    }
}
