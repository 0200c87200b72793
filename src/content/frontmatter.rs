//! Front-matter parsing

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{Error, Result};

/// Front-matter data from a post file
///
/// All fields are optional here; defaults are substituted when the
/// metadata record is built (see [`crate::content::PostMeta`]).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub excerpt: Option<String>,
    /// Publication date, kept as the author wrote it
    pub date: Option<String>,
    pub category: Option<String>,
    pub author: Option<String>,
    #[serde(rename = "readTime")]
    pub read_time: Option<String>,

    /// Additional custom fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl FrontMatter {
    /// Parse front-matter from content string
    /// Returns (front_matter, remaining_content)
    ///
    /// A file without a leading `---` block has no front matter and the
    /// whole input is the body. A `---` block with invalid YAML is an
    /// error; callers decide whether to skip the file or fail the request.
    pub fn parse(content: &str) -> Result<(Self, &str)> {
        let trimmed = content.trim_start();

        if !trimmed.starts_with("---") {
            return Ok((FrontMatter::default(), content));
        }

        let rest = &trimmed[3..];
        let rest = rest.trim_start_matches(['\n', '\r']);

        let Some(end_pos) = rest.find("\n---") else {
            // No closing delimiter; the --- was a thematic break, not
            // front matter
            return Ok((FrontMatter::default(), content));
        };

        let yaml_content = &rest[..end_pos];
        let remaining = &rest[end_pos + 4..];
        let remaining = remaining.trim_start_matches(['\n', '\r']);

        if yaml_content.trim().is_empty() {
            return Ok((FrontMatter::default(), remaining));
        }

        let fm: FrontMatter =
            serde_yaml::from_str(yaml_content).map_err(|e| Error::FrontMatter(e.to_string()))?;

        Ok((fm, remaining))
    }

    /// Parse the date field for sorting
    pub fn parse_date(&self) -> Option<NaiveDateTime> {
        self.date.as_deref().and_then(parse_date_string)
    }
}

/// Parse a date string in the formats authors actually use
///
/// Returns `None` for unparseable input; the lister sorts those as oldest.
pub fn parse_date_string(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();

    let datetime_formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
    ];

    for fmt in datetime_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    let date_formats = [
        "%Y-%m-%d",
        "%Y/%m/%d",
        // WordPress-style export dates ("March 13, 2025")
        "%B %d, %Y",
    ];

    for fmt in date_formats {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return d.and_hms_opt(0, 0, 0);
        }
    }

    // Try RFC 3339 / ISO 8601 with offset
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_yaml_frontmatter() {
        let content = r#"---
title: Hello World
excerpt: A short teaser
date: 2024-01-15
category: Technology Solutions
author: Jacqui Muller
readTime: 6 min read
---

This is the content.
"#;

        let (fm, remaining) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.title, Some("Hello World".to_string()));
        assert_eq!(fm.excerpt, Some("A short teaser".to_string()));
        assert_eq!(fm.date, Some("2024-01-15".to_string()));
        assert_eq!(fm.category, Some("Technology Solutions".to_string()));
        assert_eq!(fm.author, Some("Jacqui Muller".to_string()));
        assert_eq!(fm.read_time, Some("6 min read".to_string()));
        assert!(remaining.contains("This is the content."));
    }

    #[test]
    fn test_no_frontmatter() {
        let content = "# Just Markdown\n\nNo metadata here.";
        let (fm, remaining) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.title, None);
        assert_eq!(remaining, content);
    }

    #[test]
    fn test_missing_closing_delimiter() {
        let content = "---\n\nA thematic break, then prose.";
        let (fm, remaining) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.title, None);
        assert_eq!(remaining, content);
    }

    #[test]
    fn test_blank_frontmatter_block() {
        let content = "---\n   \n---\n\nBody only.";
        let (fm, remaining) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.title, None);
        assert!(remaining.starts_with("Body only."));
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        let content = "---\ntitle: [unterminated\n---\n\nBody.";
        let err = FrontMatter::parse(content).unwrap_err();
        assert!(matches!(err, Error::FrontMatter(_)));
    }

    #[test]
    fn test_extra_fields_are_kept() {
        let content = "---\ntitle: T\nimageUrl: https://example.com/x.png\n---\nBody.";
        let (fm, _) = FrontMatter::parse(content).unwrap();
        assert!(fm.extra.contains_key("imageUrl"));
    }

    #[test]
    fn test_parse_date_formats() {
        assert!(parse_date_string("2024-01-15").is_some());
        assert!(parse_date_string("2024/01/15").is_some());
        assert!(parse_date_string("2024-01-15 10:30:00").is_some());
        assert!(parse_date_string("March 13, 2025").is_some());
        assert!(parse_date_string("2024-01-15T10:30:00+02:00").is_some());
        assert!(parse_date_string("not a date").is_none());
        assert!(parse_date_string("").is_none());
    }

    #[test]
    fn test_parse_date_ordering() {
        let older = parse_date_string("2023-11-18").unwrap();
        let newer = parse_date_string("March 13, 2025").unwrap();
        assert!(newer > older);
    }
}
