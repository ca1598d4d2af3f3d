pub(crate) mod ddb_rental_repository;

use std::collections::HashMap;
use async_trait::async_trait;
use crate::core::library::{LibraryResult, PaginatedResult};
use crate::core::repository::Repository;
use crate::rentals::domain::model::RentalEntity;

#[async_trait]
pub(crate) trait RentalRepository: Repository<RentalEntity> {
    // everything a user still holds or waits on (Pending + Active)
    async fn query_outstanding(&self, user_id: &str,
                               page: Option<&str>, page_size: usize) -> LibraryResult<PaginatedResult<RentalEntity>>;

    // active rentals whose due date has passed
    async fn query_overdue(&self, predicate: &HashMap::<String, String>,
                           page: Option<&str>, page_size: usize) -> LibraryResult<PaginatedResult<RentalEntity>>;
}
