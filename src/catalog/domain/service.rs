use std::collections::HashMap;
use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::core::domain::Configuration;
use crate::core::events::DomainEvent;
use crate::core::library::{LibraryResult, PaginatedResult};
use crate::gateway::events::EventPublisher;

pub(crate) struct CatalogServiceImpl {
    book_repository: Box<dyn BookRepository>,
    events_publisher: Box<dyn EventPublisher>,
}

impl CatalogServiceImpl {
    pub(crate) fn new(_config: &Configuration, book_repository: Box<dyn BookRepository>,
                      events_publisher: Box<dyn EventPublisher>) -> Self {
        Self {
            book_repository,
            events_publisher,
        }
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn add_book(&self, book: &BookDto) -> LibraryResult<BookDto> {
        let _ = self.book_repository.create(&BookEntity::from(book)).await.map(|_| ())?;
        let _ = self.events_publisher.publish(&DomainEvent::added(
            "books", "books", book.book_id.as_str(), &HashMap::new(), book)?).await?;
        Ok(book.clone())
    }

    async fn update_book(&self, book: &BookDto) -> LibraryResult<BookDto> {
        let _ = self.book_repository.update(&BookEntity::from(book)).await.map(|_| ())?;
        let _ = self.events_publisher.publish(&DomainEvent::updated(
            "books", "books", book.book_id.as_str(), &HashMap::new(), book)?).await?;
        Ok(book.clone())
    }

    async fn remove_book(&self, id: &str) -> LibraryResult<()> {
        let res = self.book_repository.delete(id).await.map(|_| ())?;
        let data = id.to_string();
        let _ = self.events_publisher.publish(&DomainEvent::deleted(
            "books", "books", id, &HashMap::new(), &data)?).await?;
        Ok(res)
    }

    async fn find_book_by_id(&self, id: &str) -> LibraryResult<BookDto> {
        self.book_repository.get(id).await.map(|b| BookDto::from(&b))
    }

    async fn find_books_by_title(&self, title: &str) -> LibraryResult<Vec<BookDto>> {
        let res = self.book_repository.query(
            &HashMap::from([("title".to_string(), title.to_string())]), None, 100).await?;
        Ok(res.records.iter().map(BookDto::from).collect())
    }

    async fn browse_books(&self, page: Option<&str>, page_size: usize) -> LibraryResult<PaginatedResult<BookDto>> {
        let res = self.book_repository.browse(page, page_size).await?;
        let records = res.records.iter().map(BookDto::from).collect();
        Ok(PaginatedResult::new(page, page_size, res.next_page, records))
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            book_id: other.book_id.to_string(),
            version: other.version,
            title: other.title.to_string(),
            page_count: other.page_count,
            stock: other.stock,
            summary: other.summary.clone(),
            cover_url: other.cover_url.clone(),
            author_id: other.author_id.clone(),
            publisher_id: other.publisher_id.clone(),
            category_id: other.category_id.clone(),
            shelf_id: other.shelf_id.clone(),
            created_at: other.created_at,
            updated_at: other.updated_at,
        }
    }
}

impl From<&BookDto> for BookEntity {
    fn from(other: &BookDto) -> Self {
        Self {
            book_id: other.book_id.to_string(),
            version: other.version,
            title: other.title.to_string(),
            page_count: other.page_count,
            stock: other.stock,
            summary: other.summary.clone(),
            cover_url: other.cover_url.clone(),
            author_id: other.author_id.clone(),
            publisher_id: other.publisher_id.clone(),
            category_id: other.category_id.clone(),
            shelf_id: other.shelf_id.clone(),
            created_at: other.created_at,
            updated_at: other.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::books::dto::BookDto;
    use crate::books::repository::testing::FakeBookRepository;
    use crate::catalog::domain::CatalogService;
    use crate::catalog::domain::service::CatalogServiceImpl;
    use crate::core::domain::Configuration;
    use crate::core::library::LibraryError;
    use crate::gateway::testing::NoopPublisher;

    fn build_service(book_repo: FakeBookRepository) -> CatalogServiceImpl {
        CatalogServiceImpl::new(&Configuration::new("test"),
                                Box::new(book_repo), Box::new(NoopPublisher {}))
    }

    #[tokio::test]
    async fn test_should_add_and_find_book() {
        let catalog_svc = build_service(FakeBookRepository::new());

        let book = BookDto::new("test book", 120, 2);
        let _ = catalog_svc.add_book(&book).await.expect("should add book");

        let loaded = catalog_svc.find_book_by_id(book.book_id.as_str()).await.expect("should return book");
        assert_eq!(book.book_id, loaded.book_id);
        assert_eq!(2, loaded.stock);
    }

    #[tokio::test]
    async fn test_should_reject_duplicate_book() {
        let catalog_svc = build_service(FakeBookRepository::new());

        let book = BookDto::new("test book", 120, 2);
        let _ = catalog_svc.add_book(&book).await.expect("should add book");
        let res = catalog_svc.add_book(&book).await;
        assert!(matches!(res, Err(LibraryError::DuplicateKey { message: _ })));
    }

    #[tokio::test]
    async fn test_should_update_book() {
        let catalog_svc = build_service(FakeBookRepository::new());

        let mut book = BookDto::new("test book", 120, 2);
        let _ = catalog_svc.add_book(&book).await.expect("should add book");

        book.title = "new title".to_string();
        book.summary = Some("about something".to_string());
        let _ = catalog_svc.update_book(&book).await.expect("should update book");

        let loaded = catalog_svc.find_book_by_id(book.book_id.as_str()).await.expect("should return book");
        assert_eq!(book.title, loaded.title);
        assert_eq!(book.summary, loaded.summary);
    }

    #[tokio::test]
    async fn test_should_reject_stale_update() {
        let catalog_svc = build_service(FakeBookRepository::new());

        let mut book = BookDto::new("test book", 120, 2);
        let _ = catalog_svc.add_book(&book).await.expect("should add book");

        book.title = "first edit".to_string();
        let _ = catalog_svc.update_book(&book).await.expect("should update book");
        // the second writer still carries version 0
        book.title = "second edit".to_string();
        let res = catalog_svc.update_book(&book).await;
        assert!(matches!(res, Err(LibraryError::Conflict { message: _, reason_code: _ })));
    }

    #[tokio::test]
    async fn test_should_find_by_title() {
        let catalog_svc = build_service(FakeBookRepository::new());

        let book = BookDto::new("the trial", 255, 1);
        let _ = catalog_svc.add_book(&book).await.expect("should add book");
        let _ = catalog_svc.add_book(&BookDto::new("the castle", 300, 1)).await.expect("should add book");

        let res = catalog_svc.find_books_by_title("the trial").await.expect("should return books");
        assert_eq!(1, res.len());
        assert_eq!(book.book_id, res[0].book_id);
    }

    #[tokio::test]
    async fn test_should_browse_books() {
        let catalog_svc = build_service(FakeBookRepository::new());

        let _ = catalog_svc.add_book(&BookDto::new("a", 10, 1)).await.expect("should add book");
        let _ = catalog_svc.add_book(&BookDto::new("b", 20, 2)).await.expect("should add book");

        let res = catalog_svc.browse_books(None, 50).await.expect("should browse books");
        assert_eq!(2, res.records.len());
    }

    #[tokio::test]
    async fn test_should_remove_book() {
        let catalog_svc = build_service(FakeBookRepository::new());

        let book = BookDto::new("test book", 120, 2);
        let _ = catalog_svc.add_book(&book).await.expect("should add book");
        let _ = catalog_svc.remove_book(book.book_id.as_str()).await.expect("should remove book");

        let loaded = catalog_svc.find_book_by_id(book.book_id.as_str()).await;
        assert!(loaded.is_err());
    }
}
