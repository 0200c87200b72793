//! Blog data access
//!
//! Two backends sit behind one switch: the content directory
//! ([`ContentStore`]) and the bundled snapshot ([`SnapshotStore`]). The
//! mode comes from configuration (`data_source` / `DATA_SOURCE_MODE`),
//! never from sniffing the deployment environment.

pub mod snapshot;

pub use snapshot::{SnapshotPost, SnapshotStore};

use crate::config::DataSourceMode;
use crate::content::{ContentStore, Post, PostMeta};
use crate::error::{Error, Result};

/// Read access to the blog, however it is stored
pub trait BlogStore {
    fn list(&self) -> Result<Vec<PostMeta>>;
    fn get(&self, slug: &str) -> Result<Post>;
}

impl BlogStore for ContentStore {
    fn list(&self) -> Result<Vec<PostMeta>> {
        ContentStore::list(self)
    }

    fn get(&self, slug: &str) -> Result<Post> {
        ContentStore::get(self, slug)
    }
}

impl BlogStore for SnapshotStore {
    fn list(&self) -> Result<Vec<PostMeta>> {
        Ok(SnapshotStore::list(self))
    }

    fn get(&self, slug: &str) -> Result<Post> {
        SnapshotStore::get(self, slug)
    }
}

/// The data source behind the blog API
///
/// In `Filesystem` mode the content directory is authoritative; the
/// snapshot only steps in on unexpected failures, and every engagement is
/// logged. A `NotFound` from the primary store is a real answer and is
/// never masked by the snapshot.
pub struct DataSource<S: BlogStore = ContentStore> {
    mode: DataSourceMode,
    primary: S,
    snapshot: SnapshotStore,
}

impl<S: BlogStore> DataSource<S> {
    pub fn new(mode: DataSourceMode, primary: S, snapshot: SnapshotStore) -> Self {
        Self {
            mode,
            primary,
            snapshot,
        }
    }

    pub fn list(&self) -> Result<Vec<PostMeta>> {
        match self.mode {
            DataSourceMode::Embedded => Ok(self.snapshot.list()),
            DataSourceMode::Filesystem => match self.primary.list() {
                Ok(posts) => Ok(posts),
                Err(e) => {
                    tracing::warn!("Content scan failed ({}); serving snapshot fallback", e);
                    Ok(self.snapshot.list())
                }
            },
        }
    }

    pub fn get(&self, slug: &str) -> Result<Post> {
        match self.mode {
            DataSourceMode::Embedded => self.snapshot.get(slug),
            DataSourceMode::Filesystem => match self.primary.get(slug) {
                Ok(post) => Ok(post),
                Err(Error::NotFound) => Err(Error::NotFound),
                Err(e) => {
                    tracing::warn!(
                        "Failed to load post '{}' ({}); trying snapshot fallback",
                        slug,
                        e
                    );
                    // Keep the original error if the snapshot cannot help,
                    // so the failure still surfaces as a server error
                    self.snapshot.get(slug).map_err(|_| e)
                }
            },
        }
    }
}
