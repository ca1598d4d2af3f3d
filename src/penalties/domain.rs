pub mod model;
pub mod service;

use std::collections::HashMap;
use async_trait::async_trait;
use crate::core::library::{LibraryResult, PaginatedResult};
use crate::penalties::dto::PenaltyDto;

// The penalty ledger: one fee record per overdue return, tracked until paid.
#[async_trait]
pub(crate) trait PenaltyService: Sync + Send {
    async fn record_penalty(&self, penalty: &PenaltyDto) -> LibraryResult<PenaltyDto>;
    async fn pay_penalty(&self, id: &str) -> LibraryResult<PenaltyDto>;
    async fn find_penalty_by_id(&self, id: &str) -> LibraryResult<PenaltyDto>;
    async fn query_penalties(&self, predicate: &HashMap<String, String>,
                             page: Option<&str>, page_size: usize) -> LibraryResult<PaginatedResult<PenaltyDto>>;
    async fn query_unpaid(&self, predicate: &HashMap<String, String>,
                          page: Option<&str>, page_size: usize) -> LibraryResult<PaginatedResult<PenaltyDto>>;
}
