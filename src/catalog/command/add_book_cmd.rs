use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct AddBookCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl AddBookCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct AddBookCommandRequest {
    pub(crate) title: String,
    pub(crate) page_count: i64,
    pub(crate) stock: i64,
    pub(crate) summary: Option<String>,
    pub(crate) cover_url: Option<String>,
    pub(crate) author_id: Option<String>,
    pub(crate) publisher_id: Option<String>,
    pub(crate) category_id: Option<String>,
    pub(crate) shelf_id: Option<String>,
}

impl AddBookCommandRequest {
    pub fn new(title: &str, page_count: i64, stock: i64) -> Self {
        Self {
            title: title.to_string(),
            page_count,
            stock,
            summary: None,
            cover_url: None,
            author_id: None,
            publisher_id: None,
            category_id: None,
            shelf_id: None,
        }
    }

    pub fn build_book(&self) -> BookDto {
        let mut book = BookDto::new(self.title.as_str(), self.page_count, self.stock);
        book.summary = self.summary.clone();
        book.cover_url = self.cover_url.clone();
        book.author_id = self.author_id.clone();
        book.publisher_id = self.publisher_id.clone();
        book.category_id = self.category_id.clone();
        book.shelf_id = self.shelf_id.clone();
        book
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct AddBookCommandResponse {
    pub book: BookDto,
}

impl AddBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    async fn execute(&self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        let book = req.build_book();
        self.catalog_service.add_book(&book).await.map_err(CommandError::from).map(|_| AddBookCommandResponse::new(book))
    }
}
