pub mod model;
pub mod service;

use async_trait::async_trait;
use crate::core::library::{LibraryResult, PaginatedResult, TaxonomyKind};
use crate::taxonomy::dto::TaxonomyDto;

// CRUD over the catalog reference data: authors, publishers, categories and
// shelves share one aggregate with a kind discriminant.
#[async_trait]
pub(crate) trait TaxonomyService: Sync + Send {
    async fn add_taxonomy(&self, taxonomy: &TaxonomyDto) -> LibraryResult<TaxonomyDto>;
    async fn update_taxonomy(&self, taxonomy: &TaxonomyDto) -> LibraryResult<TaxonomyDto>;
    async fn remove_taxonomy(&self, id: &str) -> LibraryResult<()>;
    async fn find_taxonomy_by_id(&self, id: &str) -> LibraryResult<TaxonomyDto>;
    async fn query_by_kind(&self, kind: TaxonomyKind,
                           page: Option<&str>, page_size: usize) -> LibraryResult<PaginatedResult<TaxonomyDto>>;
}
