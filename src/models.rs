//! Book row shape and request bodies.

use crate::service::RequiredFields;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A row of the `books` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    /// Whether the book is on the shelf or already borrowed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_available: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    // Not stored in the table.
    #[sqlx(skip)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[sqlx(skip)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Body of `POST /api/v1/books`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBook {
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub is_available: Option<bool>,
    #[serde(default)]
    pub edition: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
}

impl RequiredFields for CreateBook {
    const REQUIRED: &'static [&'static str] = &["title", "author"];
}

/// Body of `PUT /api/v1/books/:id`. Only title and author are updatable.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateBook {
    pub title: String,
    pub author: String,
}

impl RequiredFields for UpdateBook {
    const REQUIRED: &'static [&'static str] = &["title", "author"];
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn absent_optionals_are_omitted() {
        let book = Book {
            id: 1,
            title: "The Book Thief".into(),
            author: "Markus Zusak".into(),
            genre: None,
            is_available: Some(true),
            edition: None,
            summary: None,
            created_at: None,
            updated_at: None,
        };
        assert_eq!(
            serde_json::to_value(&book).unwrap(),
            json!({
                "id": 1,
                "title": "The Book Thief",
                "author": "Markus Zusak",
                "is_available": true
            })
        );
    }
}
