//! API payload types

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque book identifier
///
/// The search API has been seen returning both numeric and string ids, so
/// either JSON form is accepted and written back verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BookId {
    Number(u64),
    Text(String),
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookId::Number(n) => write!(f, "{}", n),
            BookId::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for BookId {
    fn from(n: u64) -> Self {
        BookId::Number(n)
    }
}

impl From<&str> for BookId {
    fn from(s: &str) -> Self {
        BookId::Text(s.to_string())
    }
}

/// A lightweight candidate result shown while typing
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Suggestion {
    pub id: BookId,
    pub title: String,
}

impl Suggestion {
    pub fn new(id: impl Into<BookId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

/// Full book record returned by the detail endpoint
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Book {
    pub id: BookId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub summary: String,
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
