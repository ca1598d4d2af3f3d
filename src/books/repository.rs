pub mod ddb_book_repository;

use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::core::library::{LibraryResult, PaginatedResult};
use crate::core::repository::Repository;

#[async_trait]
pub(crate) trait BookRepository: Repository<BookEntity> {
    // the two stock remote procedures: single-statement conditional counters
    async fn increment_stock(&self, id: &str) -> LibraryResult<usize>;
    async fn decrement_stock(&self, id: &str) -> LibraryResult<usize>;

    // paginated catalog browse
    async fn browse(&self, page: Option<&str>, page_size: usize) -> LibraryResult<PaginatedResult<BookEntity>>;
}
