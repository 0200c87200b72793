//! Error types for the content pipeline

/// Errors produced while loading or serving blog content
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No post exists for the requested slug
    #[error("post not found")]
    NotFound,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Front matter delimiters were present but the YAML inside was invalid
    #[error("invalid front matter: {0}")]
    FrontMatter(String),

    /// The embedded or exported snapshot could not be decoded
    #[error("invalid snapshot data: {0}")]
    Snapshot(#[from] serde_json::Error),
}

impl Error {
    /// Whether this error should surface as a missing resource rather
    /// than a server failure
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
