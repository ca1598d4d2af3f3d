use chrono::{NaiveDateTime, Utc};
use uuid::Uuid;
use serde::{Deserialize, Serialize};
use crate::books::Book;
use crate::core::domain::Identifiable;
use crate::utils::date::serializer;

// BookDto is a data transfer object for the Catalog service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct BookDto {
    pub book_id: String,
    pub version: i64,
    pub title: String,
    pub page_count: i64,
    pub stock: i64,
    pub summary: Option<String>,
    pub cover_url: Option<String>,
    pub author_id: Option<String>,
    pub publisher_id: Option<String>,
    pub category_id: Option<String>,
    pub shelf_id: Option<String>,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub updated_at: NaiveDateTime,
}

impl BookDto {
    pub fn new(title: &str, page_count: i64, stock: i64) -> BookDto {
        BookDto {
            book_id: Uuid::new_v4().to_string(),
            version: 0,
            title: title.to_string(),
            page_count,
            stock,
            summary: None,
            cover_url: None,
            author_id: None,
            publisher_id: None,
            category_id: None,
            shelf_id: None,
            created_at: Utc::now().naive_utc(),
            updated_at: Utc::now().naive_utc(),
        }
    }
}

impl Identifiable for BookDto {
    fn id(&self) -> String {
        self.book_id.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}

impl Book for BookDto {
    fn in_stock(&self) -> bool {
        self.stock > 0
    }

    fn stock(&self) -> i64 {
        self.stock
    }
}
