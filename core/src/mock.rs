//! Fixed in-memory dataset for offline development.
//!
//! # Design
//! `MockProvider` answers every `DataSource` query from static data shaped
//! exactly like the view models, so callers cannot tell it apart from the
//! live backend. It never mutates: like/unlike report what the count would
//! become without storing it.

use crate::error::ApiError;
use crate::source::DataSource;
use crate::types::{
    AboutInfo, Announcement, Article, ArticlePage, ArticleQuery, Author, Banner, BlogInfo,
    BlogSite, Category, Contact, ContactKind, Experience, Label, NavItem, PaginatedResponse,
    PublicArticleQuery, RankKey, Tag, TopRankedQuery,
};

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_PAGE_SIZE: u64 = 10;
const CATEGORY_TAB_SIZE: usize = 5;

#[derive(Debug, Clone)]
pub struct MockProvider {
    categories: Vec<Category>,
    articles: Vec<Article>,
    banners: Vec<Banner>,
    tags: Vec<Tag>,
    blog_sites: Vec<BlogSite>,
    about: AboutInfo,
    announcements: Vec<Announcement>,
    navs: Vec<NavItem>,
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MockProvider {
    pub fn new() -> Self {
        let categories = mock_categories();
        let tags = mock_tags();
        let articles = mock_articles(&categories, &tags);
        Self {
            categories,
            articles,
            banners: mock_banners(),
            tags,
            blog_sites: mock_blog_sites(),
            about: mock_about(),
            announcements: mock_announcements(),
            navs: mock_navs(),
        }
    }

    /// Every article in the dataset, without `content`.
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    fn find(&self, id: u64) -> Result<&Article, ApiError> {
        self.articles
            .iter()
            .find(|a| a.id == id)
            .ok_or_else(|| ApiError::NotFound("article not found".to_string()))
    }

    /// The first five articles of a category, for tabbed home sections.
    pub fn articles_by_category(&self, category_id: u64) -> Vec<Article> {
        self.articles
            .iter()
            .filter(|a| a.category.id == category_id)
            .take(CATEGORY_TAB_SIZE)
            .cloned()
            .collect()
    }
}

fn positive_or(value: Option<u64>, default: u64) -> u64 {
    value.filter(|v| *v > 0).unwrap_or(default)
}

/// `[(page-1)*size, page*size)` clamped to the slice.
fn page_slice<T: Clone>(items: &[T], page: u64, page_size: u64) -> Vec<T> {
    let start = usize::try_from((page - 1).saturating_mul(page_size)).unwrap_or(usize::MAX);
    let size = usize::try_from(page_size).unwrap_or(usize::MAX);
    items.iter().skip(start).take(size).cloned().collect()
}

fn has_label(article: &Article, label_id: u64) -> bool {
    article
        .labels
        .as_ref()
        .is_some_and(|labels| labels.iter().any(|l| l.id == label_id))
}

fn matches_ids(article: &Article, category_id: Option<u64>, label_id: Option<u64>) -> bool {
    category_id.map_or(true, |id| article.category.id == id)
        && label_id.map_or(true, |id| has_label(article, id))
}

impl DataSource for MockProvider {
    fn article_list(&self, query: &ArticleQuery) -> Result<PaginatedResponse<Article>, ApiError> {
        let page = positive_or(query.page, DEFAULT_PAGE);
        let page_size = positive_or(query.page_size, DEFAULT_PAGE_SIZE);
        let filtered: Vec<Article> = match query.category.as_deref() {
            Some(category) if !category.is_empty() => self
                .articles
                .iter()
                .filter(|a| {
                    a.category.slug.as_deref() == Some(category) || a.category.name == category
                })
                .cloned()
                .collect(),
            _ => self.articles.clone(),
        };
        Ok(PaginatedResponse {
            list: page_slice(&filtered, page, page_size),
            total: filtered.len() as u64,
            page,
            page_size,
        })
    }

    fn public_article_list(&self, query: &PublicArticleQuery) -> Result<ArticlePage, ApiError> {
        let page = positive_or(query.page, DEFAULT_PAGE);
        let per_page = positive_or(query.per_page, DEFAULT_PAGE_SIZE);
        let filtered: Vec<Article> = self
            .articles
            .iter()
            .filter(|a| matches_ids(a, query.category_id, query.label_id))
            .cloned()
            .collect();
        let total = filtered.len() as u64;
        Ok(ArticlePage {
            list: page_slice(&filtered, page, per_page),
            total,
            page,
            last_page: total.div_ceil(per_page).max(1),
        })
    }

    fn article_detail(&self, id: u64) -> Result<Article, ApiError> {
        let article = self.find(id)?;
        Ok(Article {
            content: Some(format!(
                "<p>{}</p><p>The full text of this article continues here...</p>",
                article.summary
            )),
            ..article.clone()
        })
    }

    /// Stable sort, so ties keep dataset order.
    fn top_ranked(&self, query: &TopRankedQuery) -> Result<Vec<Article>, ApiError> {
        let mut ranked: Vec<Article> = self
            .articles
            .iter()
            .filter(|a| matches_ids(a, query.category_id, query.label_id))
            .cloned()
            .collect();
        let key = |a: &Article| match query.order_by {
            RankKey::ViewCount => a.view_count.unwrap_or(0),
            RankKey::LikeCount => a.like_count.unwrap_or(0),
        };
        ranked.sort_by(|a, b| key(b).cmp(&key(a)));
        ranked.truncate(query.limit as usize);
        Ok(ranked)
    }

    fn like_article(&self, id: u64) -> Result<u64, ApiError> {
        Ok(self.find(id)?.like_count.unwrap_or(0) + 1)
    }

    fn unlike_article(&self, id: u64) -> Result<u64, ApiError> {
        Ok(self.find(id)?.like_count.unwrap_or(0).saturating_sub(1))
    }

    fn banners(&self) -> Result<Vec<Banner>, ApiError> {
        Ok(self.banners.clone())
    }

    fn categories(&self) -> Result<Vec<Category>, ApiError> {
        Ok(self.categories.clone())
    }

    fn article_categories(&self) -> Result<Vec<Category>, ApiError> {
        Ok(self.categories.clone())
    }

    fn tags(&self) -> Result<Vec<Tag>, ApiError> {
        Ok(self.tags.clone())
    }

    fn special_labels(&self) -> Result<Vec<Tag>, ApiError> {
        Ok(self.tags.iter().map(|t| Tag { color: None, ..t.clone() }).collect())
    }

    fn public_labels(&self) -> Result<Vec<Label>, ApiError> {
        Ok(self
            .tags
            .iter()
            .map(|t| Label {
                id: t.id,
                title: t.name.clone(),
                is_special: "0".to_string(),
                created_at: Some("2018-10-28 00:00:00".to_string()),
                updated_at: Some("2018-10-28 00:00:00".to_string()),
            })
            .collect())
    }

    fn blog_sites(&self) -> Result<Vec<BlogSite>, ApiError> {
        Ok(self.blog_sites.clone())
    }

    fn about(&self) -> Result<AboutInfo, ApiError> {
        Ok(self.about.clone())
    }

    /// Case-insensitive substring match on title and summary. An empty
    /// keyword matches nothing.
    fn search(&self, keyword: &str) -> Result<Vec<Article>, ApiError> {
        if keyword.is_empty() {
            return Ok(Vec::new());
        }
        let needle = keyword.to_lowercase();
        Ok(self
            .articles
            .iter()
            .filter(|a| {
                a.title.to_lowercase().contains(&needle) || a.summary.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect())
    }

    fn announcements(&self) -> Result<Vec<Announcement>, ApiError> {
        Ok(self.announcements.clone())
    }

    fn site_navs(&self) -> Result<Vec<NavItem>, ApiError> {
        Ok(self.navs.clone())
    }
}

// ---------------------------------------------------------------------------
// Dataset
// ---------------------------------------------------------------------------

fn category(id: u64, name: &str, slug: &str) -> Category {
    Category {
        id,
        name: name.to_string(),
        slug: Some(slug.to_string()),
    }
}

fn mock_categories() -> Vec<Category> {
    vec![
        category(1, "Personal Blog", "blog"),
        category(2, "Work Diary", "diary"),
        category(3, "Life Notes", "life"),
        category(4, "My Blog", "myblog"),
        category(5, "Frontend", "frontend"),
        category(6, "Original Templates", "template"),
        category(7, "Site Building", "build"),
        category(8, "Design", "design"),
    ]
}

fn mock_tags() -> Vec<Tag> {
    [
        (1, "blog template", "#036564"),
        (2, "css animation", "#8A9B0F"),
        (3, "layout", "#EB6841"),
        (4, "responsive", "#3FB8AF"),
        (5, "SEO", "#FE4365"),
        (6, "programming", "#FC9D9A"),
        (7, "small world", "#EDC951"),
        (8, "personal blog", "#C8C8A9"),
        (9, "web design", "#3299BB"),
    ]
    .into_iter()
    .map(|(id, name, color)| Tag {
        id,
        name: name.to_string(),
        color: Some(color.to_string()),
    })
    .collect()
}

fn default_author() -> Author {
    Author {
        name: "Quinn Yang".to_string(),
        avatar: "/images/avatar.jpg".to_string(),
    }
}

fn mock_articles(categories: &[Category], tags: &[Tag]) -> Vec<Article> {
    // (id, title, summary, cover, category id, view count, like count, tag ids)
    let rows: [(u64, &str, &str, &str, u64, u64, u64, &[u64]); 12] = [
        (1, "A personal blog, a small world of my own",
         "What is a personal blog for? At first it was a place to vent, a notebook on the web for the small things of work and life, with photos and music.",
         "/images/2.jpg", 1, 1280, 96, &[7, 8]),
        (2, "Quietly being someone who loves design",
         "People kept suggesting I record tutorials. In an age flooded with tutorials, publishing free original blog templates felt more worthwhile.",
         "/images/3.jpg", 1, 860, 143, &[9]),
        (3, "How would I describe myself?",
         "I learned early that a lie costs more than the truth. I stopped lying, and I stopped liking people who do.",
         "/images/1.jpg", 3, 455, 38, &[]),
        (4, "My site is live but search engines ignore it. Here is what others do",
         "Frontend or backend, every programmer should run a blog. The circle is small; a blog link shows people what you can do.",
         "/images/4.jpg", 5, 2110, 77, &[5]),
        (5, "Adding avatar selection to a CMS guestbook",
         "The guestbook only stores a name, an email and a phone number. Reusing one field lets visitors pick an avatar without a schema change.",
         "/images/b01.jpg", 5, 390, 12, &[6]),
        (6, "Do not let these annoying patterns ruin your web design",
         "Add two image fields to the model, branch in the tag template, and the layout options multiply from there.",
         "/images/b02.jpg", 6, 1710, 210, &[3, 9]),
        (7, "Which blog engine would you pick if you cannot build one yourself?",
         "Open source blog engines have been through many releases and each has a loyal audience. Here are the mainstream choices.",
         "/images/b01.jpg", 6, 640, 51, &[1]),
        (8, "A family blog template for recording a child's growth",
         "A blue-toned template with drifting cartoon clouds, CSS3 animation, a photo album and a timeline for milestones.",
         "/images/b02.jpg", 6, 300, 25, &[1, 2]),
        (9, "How to set up your own personal blog quickly",
         "Big blog portals keep shutting down and independent sites are the future. Here is a quick walk through using a cloud host.",
         "/images/b03.jpg", 7, 980, 64, &[8]),
        (10, "As a designer, do you hold your ground when questioned?",
         "Keeping finished work to yourself feels pointless, so you publish it and brace for comments that sting more than they should.",
         "/images/b04.jpg", 8, 520, 88, &[9]),
        (11, "Responsive blog template: What Night Is This",
         "A wide responsive template in cool colors with a fixed navigation bar, a fixed sidebar and seamless image scrolling.",
         "/images/1.jpg", 6, 1150, 130, &[1, 4]),
        (12, "Ten principles for laying out a web page",
         "Layout is the foundation of web design; a good layout makes a page both attractive and readable. Ten principles to get it right.",
         "/images/text01.jpg", 8, 760, 59, &[3, 9]),
    ];

    rows.into_iter()
        .map(|(id, title, summary, cover, category_id, views, likes, tag_ids)| {
            let labels: Vec<Tag> = tags
                .iter()
                .filter(|t| tag_ids.contains(&t.id))
                .cloned()
                .collect();
            Article {
                id,
                title: title.to_string(),
                summary: summary.to_string(),
                content: None,
                cover: Some(cover.to_string()),
                images: (id == 6).then(|| {
                    ["/images/b02.jpg", "/images/b03.jpg", "/images/b04.jpg", "/images/b05.jpg"]
                        .into_iter()
                        .map(String::from)
                        .collect()
                }),
                category: categories
                    .iter()
                    .find(|c| c.id == category_id)
                    .cloned()
                    .unwrap_or_default(),
                author: default_author(),
                create_time: "2018-10-28".to_string(),
                is_top: Some(id == 6),
                view_count: Some(views),
                like_count: Some(likes),
                comment_count: Some(id % 4),
                labels: (!labels.is_empty()).then_some(labels),
            }
        })
        .collect()
}

fn mock_banners() -> Vec<Banner> {
    [
        (1, "/images/1.jpg", "Blog templates"),
        (2, "/images/2.jpg", "Responsive design"),
        (3, "/images/3.jpg", "Frontend notes"),
        (4, "/images/4.jpg", "Web design lessons"),
    ]
    .into_iter()
    .map(|(id, image, title)| Banner {
        id,
        image: image.to_string(),
        link: "/".to_string(),
        title: Some(title.to_string()),
    })
    .collect()
}

fn mock_blog_sites() -> Vec<BlogSite> {
    [
        (1, "Quinn Yang's blog", "http://www.yangqq.com", "Personal blogs"),
        (2, "Ruan Yifeng's weblog", "http://www.ruanyifeng.com", "Tech blogs"),
        (3, "Zhang Xinxu's blog", "https://www.zhangxinxu.com", "Frontend blogs"),
        (4, "Liao Xuefeng's site", "https://www.liaoxuefeng.com", "Tech blogs"),
    ]
    .into_iter()
    .map(|(id, name, url, category)| BlogSite {
        id,
        name: name.to_string(),
        url: url.to_string(),
        category: Some(category.to_string()),
    })
    .collect()
}

fn mock_about() -> AboutInfo {
    let experience = |id: u64, title: &str, summary: &str, cover: &str| Experience {
        id,
        title: title.to_string(),
        summary: summary.to_string(),
        cover: cover.to_string(),
        link: "/".to_string(),
    };
    let blog_row = |label: &str, value: &str, button: &str, link: &str| BlogInfo {
        label: label.to_string(),
        value: value.to_string(),
        link: Some(link.to_string()),
        button_text: Some(button.to_string()),
    };
    let contact = |kind: ContactKind, qrcode: &str, title: &str, subtitle: &str| Contact {
        kind,
        qrcode: qrcode.to_string(),
        title: title.to_string(),
        subtitle: subtitle.to_string(),
    };

    AboutInfo {
        name: "Quinn Yang".to_string(),
        avatar: "/images/avatar.jpg".to_string(),
        title: "Self-taught webmaster, frontend and web designer.".to_string(),
        description: "Design lead at a small studio and founder of an independent web workshop.".to_string(),
        intro: "I started building websites in 2009 and have been studying frontend work ever since, \
                sharing blog templates and what I learn about site optimization along the way."
            .to_string(),
        experiences: vec![
            experience(1, "How would I describe myself?",
                "I am the quiet type. I can stay indoors for two weeks, but not away from a computer for fifteen minutes.",
                "/images/1.jpg"),
            experience(2, "A personal blog, a small world of my own",
                "It started as a notebook for small things. Every evening I would come home, put on music and write.",
                "/images/2.jpg"),
            experience(3, "Quietly being someone who loves design",
                "Instead of recording tutorials I chose to publish free original templates.",
                "/images/3.jpg"),
            experience(4, "Four years of running this blog",
                "From buying the domain to today: laughter, regret, stubbornness, and in the end, persistence.",
                "/images/4.jpg"),
        ],
        blogs: vec![
            blog_row("Created", "2011-01-12", "Home", "http://www.yangqq.com"),
            blog_row("Theme", "What Night Is This", "Download", "/"),
            blog_row("Engine", "Empire CMS 7.5", "Download", "/"),
            blog_row("Hosting", "Cloud server", "Get a voucher", "/"),
            blog_row("Free space", "Starter host", "Claim", "/"),
        ],
        contacts: vec![
            contact(ContactKind::Qq, "/images/qq1.png", "Web design group 1", "QQ group: 280998807"),
            contact(ContactKind::Qq, "/images/qq2.png", "Web design group 2", "QQ group: 291195645"),
            contact(ContactKind::Wechat, "/images/joinwx.png", "Official WeChat account", "Get template news first"),
            contact(ContactKind::Wechat, "/images/joinwxqun.png", "WeChat design group", "Invitation by the owner only"),
        ],
    }
}

fn mock_announcements() -> Vec<Announcement> {
    vec![
        Announcement {
            id: 1,
            title: "New template released".to_string(),
            content: Some("A responsive template is now available for download.".to_string()),
            link: Some("/article/11".to_string()),
            sort_order: 1,
        },
        Announcement {
            id: 2,
            title: "Comments are moderated".to_string(),
            content: None,
            link: None,
            sort_order: 2,
        },
    ]
}

fn nav(id: u64, name: &str, path: &str) -> NavItem {
    NavItem {
        id,
        name: name.to_string(),
        path: path.to_string(),
        children: None,
    }
}

fn mock_navs() -> Vec<NavItem> {
    vec![
        nav(1, "Home", "/"),
        nav(2, "Blog diary", "/list/diary"),
        NavItem {
            children: Some(vec![
                nav(31, "Tools", "/list/tools"),
                nav(32, "JS examples", "/list/js"),
                nav(33, "Site building", "/list/build"),
                nav(34, "CSS3 and HTML5", "/list/css"),
                nav(35, "Notes", "/list/notes"),
            ]),
            ..nav(3, "Building blogs", "/list/web")
        },
        nav(6, "About", "/about"),
    ]
}
