use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct GetBookCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl GetBookCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct GetBookCommandRequest {
    pub(crate) book_id: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct GetBookCommandResponse {
    pub book: BookDto,
}

impl GetBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<GetBookCommandRequest, GetBookCommandResponse> for GetBookCommand {
    async fn execute(&self, req: GetBookCommandRequest) -> Result<GetBookCommandResponse, CommandError> {
        self.catalog_service.find_book_by_id(req.book_id.as_str())
            .await.map_err(CommandError::from).map(GetBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::books::repository::testing::FakeBookRepository;
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest};
    use crate::catalog::domain::service::CatalogServiceImpl;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::gateway::testing::NoopPublisher;

    fn build_catalog_service(book_repo: FakeBookRepository) -> Box<CatalogServiceImpl> {
        Box::new(CatalogServiceImpl::new(&Configuration::new("test"),
                                         Box::new(book_repo), Box::new(NoopPublisher {})))
    }

    #[tokio::test]
    async fn test_should_run_get_book() {
        let book_repo = FakeBookRepository::new();
        let add_cmd = AddBookCommand::new(build_catalog_service(book_repo.clone()));
        let get_cmd = GetBookCommand::new(build_catalog_service(book_repo));

        let added = add_cmd.execute(AddBookCommandRequest::new("test book", 120, 3))
            .await.expect("should add book");
        let res = get_cmd.execute(GetBookCommandRequest { book_id: added.book.book_id.to_string() })
            .await.expect("should get book");
        assert_eq!(added.book.book_id, res.book.book_id);
    }

    #[tokio::test]
    async fn test_should_fail_unknown_book() {
        let get_cmd = GetBookCommand::new(build_catalog_service(FakeBookRepository::new()));

        let res = get_cmd.execute(GetBookCommandRequest { book_id: "missing".to_string() }).await;
        assert!(matches!(res, Err(CommandError::NotFound { message: _ })));
    }
}
