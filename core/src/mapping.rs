//! Raw backend shape → view model.
//!
//! Each function handles exactly one backend shape. Where the backend's
//! fields are optional strings, an empty string counts as absent.

use crate::types::{AboutInfo, Article, Author, Banner, Category, Contact, ContactKind, Tag};
use crate::wire::{RawAboutMe, RawArticle, RawArticleCategory, RawBanner, RawCategory, RawLabel};

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

pub fn map_category(raw: RawCategory) -> Category {
    Category {
        id: raw.id,
        name: raw.name,
        slug: raw.slug,
    }
}

/// The article-categories endpoint carries the routing key in `description`.
pub fn map_article_category(raw: RawArticleCategory) -> Category {
    Category {
        id: raw.id,
        name: raw.name,
        slug: raw.description,
    }
}

pub fn map_special_label(raw: RawLabel) -> Tag {
    Tag {
        id: raw.id,
        name: raw.title,
        color: None,
    }
}

pub fn map_article(raw: RawArticle) -> Article {
    let create_time = non_empty(raw.published_at)
        .or_else(|| non_empty(raw.created_at))
        .unwrap_or_default();
    Article {
        id: raw.id,
        title: raw.title,
        summary: raw.summary.unwrap_or_default(),
        content: raw.content,
        cover: raw.thumbnail,
        images: None,
        category: raw.category.map(map_category).unwrap_or_default(),
        author: Author::default(),
        create_time,
        is_top: raw.is_top,
        view_count: raw.view_count,
        like_count: raw.like_count,
        comment_count: raw.comment_count,
        labels: raw
            .labels
            .map(|labels| labels.into_iter().map(map_special_label).collect()),
    }
}

pub fn map_banner(raw: RawBanner) -> Banner {
    Banner {
        id: raw.id,
        image: raw.image_url,
        link: raw.link_url.unwrap_or_default(),
        title: raw.title,
    }
}

/// Strip literal backticks and surrounding whitespace from an avatar path.
pub fn clean_avatar(avatar: &str) -> String {
    avatar.replace('`', "").trim().to_string()
}

pub fn map_about(raw: RawAboutMe) -> AboutInfo {
    let mut contacts = Vec::new();
    if let Some(email) = non_empty(raw.email) {
        contacts.push(Contact {
            kind: ContactKind::Email,
            qrcode: String::new(),
            title: "Email".to_string(),
            subtitle: email,
        });
    }
    if let Some(github) = non_empty(raw.github) {
        contacts.push(Contact {
            kind: ContactKind::Github,
            qrcode: String::new(),
            title: "GitHub".to_string(),
            subtitle: github,
        });
    }

    AboutInfo {
        name: non_empty(raw.nickname)
            .or_else(|| non_empty(raw.name))
            .unwrap_or_default(),
        avatar: raw.avatar.as_deref().map(clean_avatar).unwrap_or_default(),
        title: raw.profession.unwrap_or_default(),
        description: non_empty(raw.slogan)
            .or_else(|| non_empty(raw.location))
            .unwrap_or_default(),
        intro: raw.bio.unwrap_or_default(),
        experiences: Vec::new(),
        blogs: Vec::new(),
        contacts,
    }
}
