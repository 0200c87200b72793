//! Embedded snapshot store
//!
//! The snapshot is a JSON array of posts with raw Markdown bodies,
//! generated from the content directory by `jpanda-site export`. One
//! copy is bundled into the binary at build time so the blog can serve
//! something when the content directory is unavailable or when the site
//! is deployed without one.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::content::frontmatter::parse_date_string;
use crate::content::{MarkdownRenderer, Post, PostMeta, RenderOptions};
use crate::error::{Error, Result};

/// Snapshot bundled at build time; regenerate with `jpanda-site export`
const EMBEDDED_SNAPSHOT: &str = include_str!("../../data/fallback-posts.json");

/// One post in a snapshot: metadata plus the raw Markdown body
///
/// Bodies stay as Markdown so the snapshot path renders through the same
/// renderer as the filesystem path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotPost {
    #[serde(flatten)]
    pub meta: PostMeta,
    pub content: String,
}

/// Serves posts from a fixed, pre-parsed post set
#[derive(Debug)]
pub struct SnapshotStore {
    posts: Vec<SnapshotPost>,
    renderer: MarkdownRenderer,
}

impl SnapshotStore {
    /// Build a store from the snapshot bundled into the binary
    pub fn from_embedded(options: RenderOptions) -> Result<Self> {
        Self::from_json(EMBEDDED_SNAPSHOT, options)
    }

    /// Load a snapshot file produced by `jpanda-site export`
    pub fn load<P: AsRef<Path>>(path: P, options: RenderOptions) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_json(&content, options)
    }

    pub fn from_posts(posts: Vec<SnapshotPost>, options: RenderOptions) -> Self {
        Self {
            posts,
            renderer: MarkdownRenderer::new(options),
        }
    }

    fn from_json(json: &str, options: RenderOptions) -> Result<Self> {
        let posts: Vec<SnapshotPost> = serde_json::from_str(json)?;
        Ok(Self::from_posts(posts, options))
    }

    /// List all posts, newest first
    pub fn list(&self) -> Vec<PostMeta> {
        let mut metas: Vec<PostMeta> = self.posts.iter().map(|p| p.meta.clone()).collect();
        metas.sort_by(|a, b| parse_date_string(&b.date).cmp(&parse_date_string(&a.date)));
        metas
    }

    /// Look up a post by slug and render its body
    pub fn get(&self, slug: &str) -> Result<Post> {
        let snap = self
            .posts
            .iter()
            .find(|p| p.meta.slug == slug)
            .ok_or(Error::NotFound)?;

        Ok(Post {
            meta: snap.meta.clone(),
            content: self.renderer.render(&snap.content),
        })
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}
