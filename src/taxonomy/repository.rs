pub(crate) mod ddb_taxonomy_repository;

use async_trait::async_trait;
use crate::core::library::{LibraryResult, PaginatedResult, TaxonomyKind};
use crate::core::repository::Repository;
use crate::taxonomy::domain::model::TaxonomyEntity;

#[async_trait]
pub(crate) trait TaxonomyRepository: Repository<TaxonomyEntity> {
    async fn find_by_kind(&self, kind: TaxonomyKind,
                          page: Option<&str>, page_size: usize) -> LibraryResult<PaginatedResult<TaxonomyEntity>>;
}
