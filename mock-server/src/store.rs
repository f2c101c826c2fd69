//! In-memory rows and the two shapes the backend renders them in.
//!
//! Envelope endpoints emit `snake_case` raw rows (`thumbnail`, `published_at`,
//! `image_url`). Legacy endpoints emit the `camelCase` article shape the
//! frontend consumed before the envelope existed.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize)]
pub struct CategoryRow {
    pub id: u64,
    pub name: String,
    pub slug: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct LabelRow {
    pub id: u64,
    pub title: String,
    /// `"1"` for labels shown in the sidebar, `"0"` otherwise.
    pub is_special: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Clone, Debug)]
pub struct ArticleRow {
    pub id: u64,
    pub title: String,
    pub summary: String,
    pub content: String,
    pub thumbnail: Option<String>,
    pub published_at: Option<String>,
    pub created_at: String,
    pub category_id: Option<u64>,
    pub is_top: bool,
    pub view_count: u64,
    pub like_count: u64,
    pub comment_count: u64,
    pub label_ids: Vec<u64>,
}

#[derive(Clone, Debug, Serialize)]
pub struct CarouselRow {
    pub id: u64,
    pub title: String,
    pub image_url: String,
    pub link_url: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
pub struct BlogSiteRow {
    pub id: u64,
    pub name: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
pub struct AnnouncementRow {
    pub id: u64,
    pub title: String,
    pub content: String,
    pub link: Option<String>,
    pub sort_order: i64,
}

#[derive(Clone, Debug, Serialize)]
pub struct SiteNavRow {
    pub id: u64,
    pub name: String,
    pub path: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<SiteNavRow>,
}

#[derive(Clone, Debug, Serialize)]
pub struct AboutMeRow {
    pub nickname: String,
    pub avatar: String,
    pub profession: String,
    pub slogan: String,
    pub location: String,
    pub bio: String,
    pub email: String,
    pub github: String,
}

// --- rendered shapes ---

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RawLabel {
    pub id: u64,
    pub title: String,
}

/// An article as the envelope endpoints send it.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RawArticle {
    pub id: u64,
    pub title: String,
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    pub thumbnail: Option<String>,
    pub published_at: Option<String>,
    pub created_at: String,
    pub category: Option<RawCategory>,
    pub is_top: bool,
    pub view_count: u64,
    pub like_count: u64,
    pub comment_count: u64,
    pub labels: Vec<RawLabel>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RawCategory {
    pub id: u64,
    pub name: String,
    pub slug: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct LegacyTag {
    pub id: u64,
    pub name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct LegacyAuthor {
    pub name: String,
    pub avatar: String,
}

/// An article as the legacy (un-enveloped) endpoints send it.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LegacyArticle {
    pub id: u64,
    pub title: String,
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<RawCategory>,
    pub author: LegacyAuthor,
    pub create_time: String,
    pub is_top: bool,
    pub view_count: u64,
    pub like_count: u64,
    pub comment_count: u64,
    pub labels: Vec<LegacyTag>,
}

pub struct Store {
    pub categories: Vec<CategoryRow>,
    pub labels: Vec<LabelRow>,
    pub articles: Vec<ArticleRow>,
    pub carousels: Vec<CarouselRow>,
    pub blog_sites: Vec<BlogSiteRow>,
    pub announcements: Vec<AnnouncementRow>,
    pub site_navs: Vec<SiteNavRow>,
    pub about_me: AboutMeRow,
}

impl Store {
    pub fn category(&self, id: Option<u64>) -> Option<RawCategory> {
        let id = id?;
        self.categories.iter().find(|c| c.id == id).map(|c| RawCategory {
            id: c.id,
            name: c.name.clone(),
            slug: c.slug.clone(),
        })
    }

    pub fn article(&self, id: u64) -> Option<&ArticleRow> {
        self.articles.iter().find(|a| a.id == id)
    }

    pub fn article_mut(&mut self, id: u64) -> Option<&mut ArticleRow> {
        self.articles.iter_mut().find(|a| a.id == id)
    }

    /// Render without `content`; the detail endpoint adds it back.
    pub fn raw_article(&self, row: &ArticleRow) -> RawArticle {
        RawArticle {
            id: row.id,
            title: row.title.clone(),
            summary: row.summary.clone(),
            content: None,
            thumbnail: row.thumbnail.clone(),
            published_at: row.published_at.clone(),
            created_at: row.created_at.clone(),
            category: self.category(row.category_id),
            is_top: row.is_top,
            view_count: row.view_count,
            like_count: row.like_count,
            comment_count: row.comment_count,
            labels: self
                .labels
                .iter()
                .filter(|l| row.label_ids.contains(&l.id))
                .map(|l| RawLabel {
                    id: l.id,
                    title: l.title.clone(),
                })
                .collect(),
        }
    }

    pub fn legacy_article(&self, row: &ArticleRow) -> LegacyArticle {
        LegacyArticle {
            id: row.id,
            title: row.title.clone(),
            summary: row.summary.clone(),
            cover: row.thumbnail.clone(),
            category: self.category(row.category_id),
            author: LegacyAuthor {
                name: "Site Admin".to_string(),
                avatar: "/images/avatar.jpg".to_string(),
            },
            create_time: row
                .published_at
                .clone()
                .filter(|p| !p.is_empty())
                .unwrap_or_else(|| row.created_at.clone()),
            is_top: row.is_top,
            view_count: row.view_count,
            like_count: row.like_count,
            comment_count: row.comment_count,
            labels: self
                .labels
                .iter()
                .filter(|l| row.label_ids.contains(&l.id))
                .map(|l| LegacyTag {
                    id: l.id,
                    name: l.title.clone(),
                })
                .collect(),
        }
    }
}

impl Default for Store {
    fn default() -> Self {
        seed()
    }
}

fn seed() -> Store {
    let categories = [(1, "Blog", "blog"), (2, "Frontend", "frontend"), (3, "Design", "design")]
        .into_iter()
        .map(|(id, name, slug)| CategoryRow {
            id,
            name: name.to_string(),
            slug: slug.to_string(),
        })
        .collect();

    let labels = [(1, "Rust", "1"), (2, "CSS", "0"), (3, "Layout", "1"), (4, "Hosting", "0")]
        .into_iter()
        .map(|(id, title, special)| LabelRow {
            id,
            title: title.to_string(),
            is_special: special.to_string(),
            created_at: "2024-01-01 08:00:00".to_string(),
            updated_at: "2024-01-01 08:00:00".to_string(),
        })
        .collect();

    let articles = vec![
        article(1, "Why keep a personal blog", "A notebook on the web for the small things of work and life.",
            Some("/images/1.jpg"), Some("2024-03-01"), "2024-02-28", Some(1), 120, 15, &[4]),
        article(2, "Responsive layouts without a framework", "Media queries, flexbox and not much else.",
            Some("/images/2.jpg"), None, "2024-03-05", Some(2), 340, 9, &[2, 3]),
        article(3, "Picking a color palette", "Start from one brand color and derive the rest.",
            Some("/images/3.jpg"), Some("2024-03-10"), "2024-03-09", Some(3), 80, 30, &[3]),
        article(4, "Self-hosting on a small VPS", "A reverse proxy, a static site and automatic certificates.",
            None, Some("2024-03-12"), "2024-03-11", Some(1), 510, 22, &[4, 1]),
        article(5, "Writing a static site generator in Rust", "Markdown in, HTML out, and a template engine in between.",
            Some("/images/5.jpg"), Some(""), "2024-03-20", Some(2), 275, 41, &[1]),
        article(6, "Typography basics", "Line length, leading and a sensible type scale.",
            Some("/images/6.jpg"), Some("2024-03-25"), "2024-03-24", None, 60, 3, &[]),
    ];

    Store {
        categories,
        labels,
        articles,
        carousels: vec![
            CarouselRow {
                id: 1,
                title: "New theme".to_string(),
                image_url: "/images/banner1.jpg".to_string(),
                link_url: Some("/article/5".to_string()),
            },
            CarouselRow {
                id: 2,
                title: "Spring notes".to_string(),
                image_url: "/images/banner2.jpg".to_string(),
                link_url: None,
            },
        ],
        blog_sites: vec![
            BlogSiteRow {
                id: 1,
                name: "The Rust Blog".to_string(),
                url: "https://blog.rust-lang.org".to_string(),
                category: Some("tech".to_string()),
            },
            BlogSiteRow {
                id: 2,
                name: "A List Apart".to_string(),
                url: "https://alistapart.com".to_string(),
                category: None,
            },
        ],
        announcements: vec![
            AnnouncementRow {
                id: 1,
                title: "Maintenance window".to_string(),
                content: "The site will be read-only on Sunday night.".to_string(),
                link: None,
                sort_order: 1,
            },
            AnnouncementRow {
                id: 2,
                title: "New comment system".to_string(),
                content: "Comments now support markdown.".to_string(),
                link: Some("/article/1".to_string()),
                sort_order: 2,
            },
        ],
        site_navs: vec![
            nav(1, "Home", "/", Vec::new()),
            nav(2, "Blog", "/list", vec![
                nav(21, "Frontend", "/list/frontend", Vec::new()),
                nav(22, "Design", "/list/design", Vec::new()),
            ]),
            nav(3, "About", "/about", Vec::new()),
        ],
        about_me: AboutMeRow {
            nickname: "Quinn".to_string(),
            avatar: "` https://cdn.example.com/avatar.png `".to_string(),
            profession: "Web developer".to_string(),
            slogan: "Build small, ship often".to_string(),
            location: "Lisbon".to_string(),
            bio: "Writes about the web, hosting and design.".to_string(),
            email: "quinn@example.com".to_string(),
            github: "https://github.com/quinn".to_string(),
        },
    }
}

#[allow(clippy::too_many_arguments)]
fn article(
    id: u64,
    title: &str,
    summary: &str,
    thumbnail: Option<&str>,
    published_at: Option<&str>,
    created_at: &str,
    category_id: Option<u64>,
    view_count: u64,
    like_count: u64,
    label_ids: &[u64],
) -> ArticleRow {
    ArticleRow {
        id,
        title: title.to_string(),
        summary: summary.to_string(),
        content: format!("<p>{summary}</p>"),
        thumbnail: thumbnail.map(String::from),
        published_at: published_at.map(String::from),
        created_at: created_at.to_string(),
        category_id,
        is_top: id == 4,
        view_count,
        like_count,
        comment_count: id % 3,
        label_ids: label_ids.to_vec(),
    }
}

fn nav(id: u64, name: &str, path: &str, children: Vec<SiteNavRow>) -> SiteNavRow {
    SiteNavRow {
        id,
        name: name.to_string(),
        path: path.to_string(),
        children,
    }
}
