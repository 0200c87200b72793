//! Content store - loads blog posts from a flat directory of Markdown files

use std::fs;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

use crate::config::PostDefaults;
use crate::error::{Error, Result};

use super::{FrontMatter, MarkdownRenderer, Post, PostMeta, RenderOptions};

/// Reads posts from the content directory
///
/// Every call hits the filesystem; posts are added or edited by dropping
/// Markdown files into the directory, with no restart required.
pub struct ContentStore {
    dir: PathBuf,
    defaults: PostDefaults,
    renderer: MarkdownRenderer,
}

impl ContentStore {
    pub fn new<P: AsRef<Path>>(dir: P, defaults: PostDefaults, options: RenderOptions) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            defaults,
            renderer: MarkdownRenderer::new(options),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// List all posts, newest first
    ///
    /// A missing content directory is not an error: the blog is simply
    /// empty. Files that fail to read or parse are skipped.
    pub fn list(&self) -> Result<Vec<PostMeta>> {
        Ok(self.scan()?.into_iter().map(|(meta, _)| meta).collect())
    }

    /// List all posts with their raw Markdown bodies, newest first
    ///
    /// Used by the snapshot exporter.
    pub fn list_raw(&self) -> Result<Vec<(PostMeta, String)>> {
        self.scan()
    }

    /// Load a single post by slug and render its body to HTML
    pub fn get(&self, slug: &str) -> Result<Post> {
        let path = self.post_path(slug).ok_or(Error::NotFound)?;
        if !path.is_file() {
            return Err(Error::NotFound);
        }

        let content = fs::read_to_string(&path)?;
        let (fm, body) = FrontMatter::parse(&content)?;

        let meta = PostMeta::from_front_matter(slug, &fm, &self.defaults);
        let content = self.renderer.render(body);

        Ok(Post { meta, content })
    }

    /// Resolve the file for a slug, rejecting anything that would escape
    /// the content directory
    fn post_path(&self, slug: &str) -> Option<PathBuf> {
        if slug.is_empty() {
            return None;
        }
        let relative = Path::new(slug);
        let is_plain_name = relative
            .components()
            .all(|c| matches!(c, Component::Normal(_)))
            && relative.components().count() == 1;
        if !is_plain_name {
            return None;
        }
        Some(self.dir.join(format!("{}.md", slug)))
    }

    fn scan(&self) -> Result<Vec<(PostMeta, String)>> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }

        let mut posts = Vec::new();

        for entry in WalkDir::new(&self.dir).max_depth(1).follow_links(true) {
            let entry = entry.map_err(std::io::Error::from)?;
            let path = entry.path();
            if !path.is_file() || !is_markdown_file(path) {
                continue;
            }

            match self.load_entry(path) {
                Ok(entry) => posts.push(entry),
                Err(e) => {
                    tracing::warn!("Skipping post {:?}: {}", path, e);
                }
            }
        }

        // Sort by date descending (newest first); unparseable dates sort
        // as oldest
        let mut keyed: Vec<_> = posts
            .into_iter()
            .map(|(meta, body)| {
                let key = super::frontmatter::parse_date_string(&meta.date);
                (key, meta, body)
            })
            .collect();
        keyed.sort_by(|a, b| b.0.cmp(&a.0));

        Ok(keyed.into_iter().map(|(_, meta, body)| (meta, body)).collect())
    }

    fn load_entry(&self, path: &Path) -> Result<(PostMeta, String)> {
        let content = fs::read_to_string(path)?;
        let (fm, body) = FrontMatter::parse(&content)?;
        let slug = slug_from_path(path);
        let meta = PostMeta::from_front_matter(&slug, &fm, &self.defaults);
        Ok((meta, body.to_string()))
    }
}

/// Derive a slug from a filename: stem, lowercased
pub fn slug_from_path(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("untitled")
        .to_lowercase()
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md")
        .unwrap_or(false)
}
