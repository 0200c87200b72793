//! List blog posts

use anyhow::Result;

use crate::Site;

/// Print the post inventory, newest first
pub fn run(site: &Site) -> Result<()> {
    let posts = site.content_store().list()?;

    println!("Posts ({}):", posts.len());
    for post in posts {
        println!("  {} - {} [{}]", post.date, post.title, post.slug);
    }

    Ok(())
}
