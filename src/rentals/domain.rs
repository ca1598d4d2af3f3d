pub mod model;
pub mod service;

use std::collections::HashMap;
use async_trait::async_trait;
use crate::core::library::{LibraryResult, PaginatedResult};
use crate::rentals::dto::RentalDto;

// The rental lifecycle: a student requests a book (Pending), an officer
// approves the checkout (Active) and later receives the return (Returned,
// with a penalty recorded when the book comes back late).
#[async_trait]
pub(crate) trait RentalService: Sync + Send {
    async fn request(&self, user_id: &str, book_id: &str, days: i64) -> LibraryResult<RentalDto>;
    async fn approve(&self, rental_id: &str, officer_id: &str) -> LibraryResult<RentalDto>;
    async fn return_book(&self, rental_id: &str, officer_id: &str) -> LibraryResult<RentalDto>;
    async fn find_rental_by_id(&self, id: &str) -> LibraryResult<RentalDto>;
    async fn query_rentals(&self, predicate: &HashMap<String, String>,
                           page: Option<&str>, page_size: usize) -> LibraryResult<PaginatedResult<RentalDto>>;
    async fn query_overdue(&self, predicate: &HashMap<String, String>,
                           page: Option<&str>, page_size: usize) -> LibraryResult<PaginatedResult<RentalDto>>;
}
