use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct UpdateBookCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl UpdateBookCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

// version carries the optimistic lock; a stale value is rejected downstream
#[derive(Debug, Deserialize)]
pub(crate) struct UpdateBookCommandRequest {
    // filled from the request path
    #[serde(default)]
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
}

impl UpdateBookCommandRequest {
    pub fn new(book_id: &str, version: i64, title: &str, page_count: i64, stock: i64) -> Self {
        Self {
            book_id: book_id.to_string(),
            version,
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
        BookDto {
            book_id: self.book_id.to_string(),
            version: self.version,
            title: self.title.to_string(),
            page_count: self.page_count,
            stock: self.stock,
            summary: self.summary.clone(),
            cover_url: self.cover_url.clone(),
            author_id: self.author_id.clone(),
            publisher_id: self.publisher_id.clone(),
            category_id: self.category_id.clone(),
            shelf_id: self.shelf_id.clone(),
            created_at: Utc::now().naive_utc(),
            updated_at: Utc::now().naive_utc(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct UpdateBookCommandResponse {
    pub book: BookDto,
}

impl UpdateBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<UpdateBookCommandRequest, UpdateBookCommandResponse> for UpdateBookCommand {
    async fn execute(&self, req: UpdateBookCommandRequest) -> Result<UpdateBookCommandResponse, CommandError> {
        let book = req.build_book();
        self.catalog_service.update_book(&book).await.map_err(CommandError::from).map(|_| UpdateBookCommandResponse::new(book))
    }
}

#[cfg(test)]
mod tests {
    use crate::books::repository::testing::FakeBookRepository;
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::command::update_book_cmd::{UpdateBookCommand, UpdateBookCommandRequest};
    use crate::catalog::domain::service::CatalogServiceImpl;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::gateway::testing::NoopPublisher;

    fn build_catalog_service(book_repo: FakeBookRepository) -> Box<CatalogServiceImpl> {
        Box::new(CatalogServiceImpl::new(&Configuration::new("test"),
                                         Box::new(book_repo), Box::new(NoopPublisher {})))
    }

    #[tokio::test]
    async fn test_should_run_update_book() {
        let book_repo = FakeBookRepository::new();
        let add_cmd = AddBookCommand::new(build_catalog_service(book_repo.clone()));
        let update_cmd = UpdateBookCommand::new(build_catalog_service(book_repo));

        let added = add_cmd.execute(AddBookCommandRequest::new("test book", 120, 3))
            .await.expect("should add book");
        let res = update_cmd.execute(UpdateBookCommandRequest::new(
            added.book.book_id.as_str(), added.book.version, "new title", 150, 2))
            .await.expect("should update book");
        assert_eq!("new title", res.book.title.as_str());
    }

    #[tokio::test]
    async fn test_should_reject_stale_version() {
        let book_repo = FakeBookRepository::new();
        let add_cmd = AddBookCommand::new(build_catalog_service(book_repo.clone()));
        let update_cmd = UpdateBookCommand::new(build_catalog_service(book_repo));

        let added = add_cmd.execute(AddBookCommandRequest::new("test book", 120, 3))
            .await.expect("should add book");
        let _ = update_cmd.execute(UpdateBookCommandRequest::new(
            added.book.book_id.as_str(), added.book.version, "new title", 150, 2))
            .await.expect("should update book");
        let res = update_cmd.execute(UpdateBookCommandRequest::new(
            added.book.book_id.as_str(), added.book.version, "stale title", 150, 2)).await;
        assert!(matches!(res, Err(CommandError::Conflict { message: _, reason_code: _ })));
    }
}
