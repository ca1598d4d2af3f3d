use chrono::{NaiveDateTime, Utc};
use uuid::Uuid;
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::utils::date::serializer;

// BookEntity abstracts a catalog title; stock counts the copies on the shelf
// and is decremented on rental approval, incremented on return.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub(crate) struct BookEntity {
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

impl BookEntity {
    pub fn new(title: &str, page_count: i64, stock: i64) -> Self {
        Self {
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

impl Identifiable for BookEntity {
    fn id(&self) -> String {
        self.book_id.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::model::BookEntity;

    #[tokio::test]
    async fn test_should_build_books() {
        let book = BookEntity::new("title", 320, 4);
        assert_eq!("title", book.title.as_str());
        assert_eq!(320, book.page_count);
        assert_eq!(4, book.stock);
        assert_eq!(None, book.category_id);
    }
}
