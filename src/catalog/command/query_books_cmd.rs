use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

// catalog browsing view: paginated browse, or an exact-title search
pub(crate) struct QueryBooksCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl QueryBooksCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct QueryBooksCommandRequest {
    pub(crate) title: Option<String>,
    pub(crate) page: Option<String>,
    pub(crate) page_size: Option<usize>,
}

#[derive(Debug, Serialize)]
pub(crate) struct QueryBooksCommandResponse {
    pub books: Vec<BookDto>,
    pub next_page: Option<String>,
}

impl QueryBooksCommandResponse {
    pub fn new(books: Vec<BookDto>, next_page: Option<String>) -> Self {
        Self {
            books,
            next_page,
        }
    }
}

#[async_trait]
impl Command<QueryBooksCommandRequest, QueryBooksCommandResponse> for QueryBooksCommand {
    async fn execute(&self, req: QueryBooksCommandRequest) -> Result<QueryBooksCommandResponse, CommandError> {
        if let Some(title) = &req.title {
            return self.catalog_service.find_books_by_title(title.as_str())
                .await.map_err(CommandError::from)
                .map(|books| QueryBooksCommandResponse::new(books, None));
        }
        let page_size = req.page_size.unwrap_or(50);
        self.catalog_service.browse_books(req.page.as_deref(), page_size)
            .await.map_err(CommandError::from)
            .map(|res| QueryBooksCommandResponse::new(res.records, res.next_page))
    }
}

#[cfg(test)]
mod tests {
    use crate::books::repository::testing::FakeBookRepository;
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::command::query_books_cmd::{QueryBooksCommand, QueryBooksCommandRequest};
    use crate::catalog::domain::service::CatalogServiceImpl;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;
    use crate::gateway::testing::NoopPublisher;

    fn build_catalog_service(book_repo: FakeBookRepository) -> Box<CatalogServiceImpl> {
        Box::new(CatalogServiceImpl::new(&Configuration::new("test"),
                                         Box::new(book_repo), Box::new(NoopPublisher {})))
    }

    #[tokio::test]
    async fn test_should_run_browse_books() {
        let book_repo = FakeBookRepository::new();
        let add_cmd = AddBookCommand::new(build_catalog_service(book_repo.clone()));
        let query_cmd = QueryBooksCommand::new(build_catalog_service(book_repo));

        let _ = add_cmd.execute(AddBookCommandRequest::new("a", 10, 1)).await.expect("should add book");
        let _ = add_cmd.execute(AddBookCommandRequest::new("b", 20, 1)).await.expect("should add book");

        let res = query_cmd.execute(QueryBooksCommandRequest { title: None, page: None, page_size: None })
            .await.expect("should browse books");
        assert_eq!(2, res.books.len());
    }

    #[tokio::test]
    async fn test_should_run_search_by_title() {
        let book_repo = FakeBookRepository::new();
        let add_cmd = AddBookCommand::new(build_catalog_service(book_repo.clone()));
        let query_cmd = QueryBooksCommand::new(build_catalog_service(book_repo));

        let _ = add_cmd.execute(AddBookCommandRequest::new("the trial", 255, 1)).await.expect("should add book");
        let _ = add_cmd.execute(AddBookCommandRequest::new("the castle", 300, 1)).await.expect("should add book");

        let res = query_cmd.execute(QueryBooksCommandRequest {
            title: Some("the trial".to_string()), page: None, page_size: None,
        }).await.expect("should search books");
        assert_eq!(1, res.books.len());
        assert_eq!("the trial", res.books[0].title.as_str());
    }
}
