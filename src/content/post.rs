//! Blog post models

use serde::{Deserialize, Serialize};

use crate::config::PostDefaults;

use super::FrontMatter;

/// Metadata for a blog post, as returned by the list endpoint
///
/// `id` and `slug` are always equal; both are derived from the source
/// filename (lowercased, extension stripped).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostMeta {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub date: String,
    pub category: String,
    pub author: String,
    pub read_time: String,
}

impl PostMeta {
    /// Build a metadata record from parsed front matter, substituting
    /// defaults for missing fields
    pub fn from_front_matter(slug: &str, fm: &FrontMatter, defaults: &PostDefaults) -> Self {
        Self {
            id: slug.to_string(),
            slug: slug.to_string(),
            title: fm.title.clone().unwrap_or_else(|| defaults.title.clone()),
            excerpt: fm.excerpt.clone().unwrap_or_default(),
            date: fm.date.clone().unwrap_or_else(today),
            category: fm
                .category
                .clone()
                .unwrap_or_else(|| defaults.category.clone()),
            author: fm.author.clone().unwrap_or_else(|| defaults.author.clone()),
            read_time: fm
                .read_time
                .clone()
                .unwrap_or_else(|| defaults.read_time.clone()),
        }
    }
}

/// A full blog post: metadata plus the rendered HTML body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    #[serde(flatten)]
    pub meta: PostMeta,
    /// HTML, rendered from the Markdown body
    pub content: String,
}

/// Current date in the same shape authors write in front matter
fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}
