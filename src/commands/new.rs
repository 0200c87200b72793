//! Create a new post

use anyhow::Result;
use std::fs;

use crate::Site;

/// Scaffold `posts/<slug>.md` with front matter pre-filled from the
/// configured defaults
pub fn run(site: &Site, title: &str) -> Result<()> {
    let slug = slug::slugify(title);
    if slug.is_empty() {
        anyhow::bail!("Title produces an empty slug: {:?}", title);
    }

    fs::create_dir_all(&site.posts_dir)?;

    let file_path = site.posts_dir.join(format!("{}.md", slug));
    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    let defaults = &site.config.defaults;
    let content = format!(
        r#"---
title: {title}
excerpt: ""
date: {date}
category: {category}
author: {author}
readTime: {read_time}
---
"#,
        title = title,
        date = chrono::Local::now().format("%Y-%m-%d"),
        category = defaults.category,
        author = defaults.author,
        read_time = defaults.read_time,
    );

    fs::write(&file_path, content)?;

    println!("Created: {:?}", file_path);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_scaffold_round_trips_through_store() {
        let tmp = TempDir::new().unwrap();
        let site = Site::new(tmp.path()).unwrap();

        run(&site, "Ensuring COE Control of Apps & Flows").unwrap();

        let posts = site.content_store().list().unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].slug, "ensuring-coe-control-of-apps-flows");
        assert_eq!(posts[0].title, "Ensuring COE Control of Apps & Flows");
        assert_eq!(posts[0].author, "JPanda Solutions");
    }

    #[test]
    fn test_refuses_to_overwrite() {
        let tmp = TempDir::new().unwrap();
        let site = Site::new(tmp.path()).unwrap();

        run(&site, "Hello World").unwrap();
        assert!(run(&site, "Hello World").is_err());
    }
}
