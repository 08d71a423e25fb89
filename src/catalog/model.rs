use std::fmt;

use serde::Deserialize;

/// Opaque record identifier.
///
/// Catalog files may carry numeric ids (`1`) or textual ones (document-store
/// object ids); both are kept in their textual form. A missing or `null` id
/// is the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "RawId")]
pub struct BookId(String);

impl BookId {
    #[cfg(test)]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u64> for BookId {
    fn from(n: u64) -> Self {
        Self(n.to_string())
    }
}

impl From<&str> for BookId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Int(i64),
    Unsigned(u64),
    Float(f64),
    Text(String),
    Null,
}

impl From<RawId> for BookId {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Int(n) => Self(n.to_string()),
            RawId::Unsigned(n) => Self(n.to_string()),
            RawId::Float(n) => Self(n.to_string()),
            RawId::Text(s) => Self(s),
            RawId::Null => Self::default(),
        }
    }
}

/// A single catalog entry.
///
/// Text fields are optional so that incomplete records still load; the view
/// renders a missing field as a blank cell.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Book {
    #[serde(default)]
    pub id: BookId,
    #[serde(default, alias = "name")]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub genre: Option<String>,
}

impl Book {
    #[cfg(test)]
    pub fn new(
        id: impl Into<BookId>,
        title: impl Into<String>,
        author: impl Into<String>,
        genre: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: Some(title.into()),
            author: Some(author.into()),
            genre: Some(genre.into()),
        }
    }

    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }

    pub fn author(&self) -> &str {
        self.author.as_deref().unwrap_or_default()
    }

    pub fn genre(&self) -> &str {
        self.genre.as_deref().unwrap_or_default()
    }
}
