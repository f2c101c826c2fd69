//! Blog sites, announcements and site navigation: lists passed through with
//! little or no reshaping.

use super::{parse_list, parse_raw, BlogClient};
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::{Announcement, BlogSite, NavItem};

impl BlogClient {
    pub fn build_blog_sites(&self) -> HttpRequest {
        HttpRequest::get(self.url("/blog-sites"))
    }

    pub fn parse_blog_sites(&self, response: HttpResponse) -> Result<Vec<BlogSite>, ApiError> {
        parse_raw(response)
    }

    pub fn build_announcements(&self) -> HttpRequest {
        HttpRequest::get(self.url("/announcements/public/enabled"))
    }

    pub fn parse_announcements(
        &self,
        response: HttpResponse,
    ) -> Result<Vec<Announcement>, ApiError> {
        parse_list(response, "announcements/public/enabled", |a: Announcement| a)
    }

    pub fn build_site_navs(&self) -> HttpRequest {
        HttpRequest::get(self.url("/site-navs/public/list"))
    }

    pub fn parse_site_navs(&self, response: HttpResponse) -> Result<Vec<NavItem>, ApiError> {
        parse_list(response, "site-navs/public/list", |n: NavItem| n)
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
    fn blog_sites_are_legacy_raw() {
        assert!(client().build_blog_sites().url.ends_with("/api/blog-sites"));
        let sites = client()
            .parse_blog_sites(ok(r#"[{"id":1,"name":"Site","url":"https://example.com"}]"#))
            .unwrap();
        assert_eq!(sites[0].url, "https://example.com");
        assert!(sites[0].category.is_none());
    }

    #[test]
    fn announcements_pass_through() {
        assert!(client()
            .build_announcements()
            .url
            .ends_with("/api/announcements/public/enabled"));
        let list = client()
            .parse_announcements(ok(
                r#"{"code":0,"data":[{"id":1,"title":"Maintenance","content":"Tonight","link":null,"sort_order":2}]}"#,
            ))
            .unwrap();
        assert_eq!(list[0].sort_order, 2);
        assert_eq!(list[0].content.as_deref(), Some("Tonight"));
        assert!(list[0].link.is_none());
    }

    #[test]
    fn announcements_degrade_on_failure_code() {
        let list = client()
            .parse_announcements(ok(r#"{"code":500,"message":"db down"}"#))
            .unwrap();
        assert!(list.is_empty());
    }

    #[test]
    fn site_navs_keep_children() {
        assert!(client().build_site_navs().url.ends_with("/api/site-navs/public/list"));
        let navs = client()
            .parse_site_navs(ok(
                r#"{"code":0,"data":[{"id":1,"name":"Home","path":"/"},
                    {"id":3,"name":"Web","path":"/list/web","children":[{"id":31,"name":"Tools","path":"/list/tools"}]}]}"#,
            ))
            .unwrap();
        assert_eq!(navs.len(), 2);
        assert_eq!(navs[1].children.as_ref().map(Vec::len), Some(1));
    }
}
