//! Export the content directory as a JSON snapshot
//!
//! The output is the data module bundled into the binary as the embedded
//! fallback, so filesystem content and fallback content come from one
//! source and cannot drift apart.

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

use crate::store::SnapshotPost;
use crate::Site;

/// Default output path, relative to the site base directory
pub const DEFAULT_OUTPUT: &str = "data/fallback-posts.json";

/// Write all posts (metadata plus raw Markdown) to a snapshot file
pub fn run(site: &Site, output: Option<&Path>) -> Result<()> {
    let posts: Vec<SnapshotPost> = site
        .content_store()
        .list_raw()?
        .into_iter()
        .map(|(meta, content)| SnapshotPost { meta, content })
        .collect();

    let out: PathBuf = match output {
        Some(path) => path.to_path_buf(),
        None => site.base_dir.join(DEFAULT_OUTPUT),
    };

    if let Some(parent) = out.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(&posts)?;
    fs::write(&out, json)?;

    println!("Exported {} posts to {:?}", posts.len(), out);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::RenderOptions;
    use crate::store::SnapshotStore;
    use tempfile::TempDir;

    #[test]
    fn test_export_round_trips_into_snapshot_store() {
        let tmp = TempDir::new().unwrap();
        let posts_dir = tmp.path().join("posts");
        fs::create_dir(&posts_dir).unwrap();
        fs::write(
            posts_dir.join("hello-world.md"),
            "---\ntitle: Hello\ndate: 2024-01-01\n---\n# Hi\n\nBody text.",
        )
        .unwrap();

        let site = Site::new(tmp.path()).unwrap();
        run(&site, None).unwrap();

        let snapshot = SnapshotStore::load(
            tmp.path().join(DEFAULT_OUTPUT),
            RenderOptions::default(),
        )
        .unwrap();
        assert_eq!(snapshot.len(), 1);

        let post = snapshot.get("hello-world").unwrap();
        assert_eq!(post.meta.title, "Hello");
        assert!(post.content.contains("<h1>Hi</h1>"));
    }
}
