use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque volume identifier as handed out by the search endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(String);

impl BookId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BookId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Volume metadata exactly as the provider returned it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawVolume {
    pub id: BookId,
    pub title: String,
    pub description: String,
    pub thumbnail: String,
}

/// A resolved book, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookDetail {
    pub title: String,
    pub description: String,
    pub thumbnail_url: String,
}

impl From<RawVolume> for BookDetail {
    fn from(raw: RawVolume) -> Self {
        Self {
            title: raw.title,
            description: raw.description,
            thumbnail_url: normalize_thumbnail(&raw.thumbnail),
        }
    }
}

/// Books that resolved for a query, in listing order.
pub type SearchResult = Vec<BookDetail>;

/// Rewrite the first literal `http` in `url` to `https`.
///
/// This is a plain substring replacement rather than a URL-aware rewrite: a
/// URL that is already `https://` becomes `httpss://`, and only the first
/// occurrence is touched.
pub fn normalize_thumbnail(url: &str) -> String {
    url.replacen("http", "https", 1)
}
