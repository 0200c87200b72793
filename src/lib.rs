//! jpanda-site: marketing site and Markdown blog server
//!
//! Serves the JPanda Solutions marketing page and a JSON blog API backed
//! by a flat directory of Markdown files with YAML front matter. Posts
//! are read fresh on every request; publishing is dropping a file into
//! the content directory.

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod server;
pub mod store;

use anyhow::Result;
use std::path::Path;

use content::ContentStore;
use store::{DataSource, SnapshotStore};

/// The site application: configuration plus resolved directories
#[derive(Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Content directory holding `*.md` posts
    pub posts_dir: std::path::PathBuf,
    /// Static assets for the marketing page
    pub public_dir: std::path::PathBuf,
}

impl Site {
    /// Create a site from a base directory
    ///
    /// Reads `site.yml` if present, then applies environment overrides
    /// (`PORT`, `DATA_SOURCE_MODE`).
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("site.yml");

        let mut config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };
        config.apply_env();

        let posts_dir = base_dir.join(&config.posts_dir);
        let public_dir = base_dir.join(&config.public_dir);

        Ok(Self {
            config,
            base_dir,
            posts_dir,
            public_dir,
        })
    }

    /// Filesystem-backed post store
    pub fn content_store(&self) -> ContentStore {
        ContentStore::new(
            &self.posts_dir,
            self.config.defaults.clone(),
            self.config.markdown,
        )
    }

    /// Snapshot store: configured file if set, otherwise the bundled data
    pub fn snapshot_store(&self) -> Result<SnapshotStore> {
        let snapshot = match &self.config.snapshot {
            Some(path) => SnapshotStore::load(self.base_dir.join(path), self.config.markdown)?,
            None => SnapshotStore::from_embedded(self.config.markdown)?,
        };
        Ok(snapshot)
    }

    /// The data source serving the blog API
    pub fn data_source(&self) -> Result<DataSource> {
        Ok(DataSource::new(
            self.config.data_source,
            self.content_store(),
            self.snapshot_store()?,
        ))
    }
}
