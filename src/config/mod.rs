//! Site configuration (site.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::content::RenderOptions;

/// Where blog data comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSourceMode {
    /// Read Markdown files from the content directory (default)
    Filesystem,
    /// Serve only the bundled snapshot; static-hosting style deployments
    Embedded,
}

impl std::str::FromStr for DataSourceMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "filesystem" | "fs" | "api" => Ok(DataSourceMode::Filesystem),
            "embedded" | "static" => Ok(DataSourceMode::Embedded),
            other => Err(format!("unknown data source mode: {}", other)),
        }
    }
}

/// Defaults substituted for missing front-matter fields
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PostDefaults {
    pub title: String,
    pub category: String,
    pub author: String,
    #[serde(rename = "readTime")]
    pub read_time: String,
}

impl Default for PostDefaults {
    fn default() -> Self {
        Self {
            title: "Untitled".to_string(),
            category: "General".to_string(),
            author: "JPanda Solutions".to_string(),
            read_time: "5 min read".to_string(),
        }
    }
}

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    pub author: String,
    pub url: String,

    // Server
    pub host: String,
    pub port: u16,

    // Directory
    pub posts_dir: String,
    pub public_dir: String,

    // Blog data
    pub data_source: DataSourceMode,
    /// Optional snapshot file overriding the bundled fallback data
    pub snapshot: Option<String>,
    pub markdown: RenderOptions,
    pub defaults: PostDefaults,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "JPanda Solutions".to_string(),
            description: "Technology consulting for digital, low-code and custom solutions"
                .to_string(),
            author: "JPanda Solutions".to_string(),
            url: "https://jpanda.solutions".to_string(),

            host: "127.0.0.1".to_string(),
            port: 5000,

            posts_dir: "posts".to_string(),
            public_dir: "public".to_string(),

            data_source: DataSourceMode::Filesystem,
            snapshot: None,
            markdown: RenderOptions::default(),
            defaults: PostDefaults::default(),

            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Apply environment overrides: `PORT` and `DATA_SOURCE_MODE`
    pub fn apply_env(&mut self) {
        self.apply_overrides(
            std::env::var("PORT").ok(),
            std::env::var("DATA_SOURCE_MODE").ok(),
        );
    }

    fn apply_overrides(&mut self, port: Option<String>, mode: Option<String>) {
        if let Some(port) = port {
            match port.parse() {
                Ok(port) => self.port = port,
                Err(_) => tracing::warn!("Ignoring unparseable PORT value: {}", port),
            }
        }
        if let Some(mode) = mode {
            match mode.parse() {
                Ok(mode) => self.data_source = mode,
                Err(e) => tracing::warn!("Ignoring DATA_SOURCE_MODE: {}", e),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.title, "JPanda Solutions");
        assert_eq!(config.port, 5000);
        assert_eq!(config.posts_dir, "posts");
        assert_eq!(config.data_source, DataSourceMode::Filesystem);
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: My Site
port: 8080
posts_dir: content
data_source: embedded
defaults:
  author: Jacqui Muller
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "My Site");
        assert_eq!(config.port, 8080);
        assert_eq!(config.posts_dir, "content");
        assert_eq!(config.data_source, DataSourceMode::Embedded);
        assert_eq!(config.defaults.author, "Jacqui Muller");
        // untouched fields keep their defaults
        assert_eq!(config.defaults.read_time, "5 min read");
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!(
            "embedded".parse::<DataSourceMode>().unwrap(),
            DataSourceMode::Embedded
        );
        assert_eq!(
            "Filesystem".parse::<DataSourceMode>().unwrap(),
            DataSourceMode::Filesystem
        );
        assert!("cloud".parse::<DataSourceMode>().is_err());
    }

    #[test]
    fn test_env_overrides() {
        let mut config = SiteConfig::default();
        config.apply_overrides(Some("9100".to_string()), Some("embedded".to_string()));
        assert_eq!(config.port, 9100);
        assert_eq!(config.data_source, DataSourceMode::Embedded);
    }

    #[test]
    fn test_bad_env_values_are_ignored() {
        let mut config = SiteConfig::default();
        config.apply_overrides(Some("not-a-port".to_string()), Some("cloud".to_string()));
        assert_eq!(config.port, 5000);
        assert_eq!(config.data_source, DataSourceMode::Filesystem);
    }

    #[test]
    fn test_post_defaults() {
        let d = PostDefaults::default();
        assert_eq!(d.title, "Untitled");
        assert_eq!(d.category, "General");
        assert_eq!(d.author, "JPanda Solutions");
        assert_eq!(d.read_time, "5 min read");
    }
}
