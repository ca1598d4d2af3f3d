use std::collections::HashMap;
use async_trait::async_trait;
use crate::core::domain::Configuration;
use crate::core::events::DomainEvent;
use crate::core::library::{LibraryResult, PaginatedResult, TaxonomyKind};
use crate::gateway::events::EventPublisher;
use crate::taxonomy::domain::model::TaxonomyEntity;
use crate::taxonomy::domain::TaxonomyService;
use crate::taxonomy::dto::TaxonomyDto;
use crate::taxonomy::repository::TaxonomyRepository;

pub(crate) struct TaxonomyServiceImpl {
    taxonomy_repository: Box<dyn TaxonomyRepository>,
    events_publisher: Box<dyn EventPublisher>,
}

impl TaxonomyServiceImpl {
    pub(crate) fn new(_config: &Configuration, taxonomy_repository: Box<dyn TaxonomyRepository>,
                      events_publisher: Box<dyn EventPublisher>) -> Self {
        Self {
            taxonomy_repository,
            events_publisher,
        }
    }
}

#[async_trait]
impl TaxonomyService for TaxonomyServiceImpl {
    async fn add_taxonomy(&self, taxonomy: &TaxonomyDto) -> LibraryResult<TaxonomyDto> {
        let _ = self.taxonomy_repository.create(&TaxonomyEntity::from(taxonomy)).await.map(|_| ())?;
        let _ = self.events_publisher.publish(&DomainEvent::added(
            "taxonomy", "taxonomy", taxonomy.taxonomy_id.as_str(), &HashMap::new(), taxonomy)?).await?;
        Ok(taxonomy.clone())
    }

    async fn update_taxonomy(&self, taxonomy: &TaxonomyDto) -> LibraryResult<TaxonomyDto> {
        let _ = self.taxonomy_repository.update(&TaxonomyEntity::from(taxonomy)).await.map(|_| ())?;
        let _ = self.events_publisher.publish(&DomainEvent::updated(
            "taxonomy", "taxonomy", taxonomy.taxonomy_id.as_str(), &HashMap::new(), taxonomy)?).await?;
        Ok(taxonomy.clone())
    }

    async fn remove_taxonomy(&self, id: &str) -> LibraryResult<()> {
        let res = self.taxonomy_repository.delete(id).await.map(|_| ())?;
        let data = id.to_string();
        let _ = self.events_publisher.publish(&DomainEvent::deleted(
            "taxonomy", "taxonomy", id, &HashMap::new(), &data)?).await?;
        Ok(res)
    }

    async fn find_taxonomy_by_id(&self, id: &str) -> LibraryResult<TaxonomyDto> {
        self.taxonomy_repository.get(id).await.map(|t| TaxonomyDto::from(&t))
    }

    async fn query_by_kind(&self, kind: TaxonomyKind,
                           page: Option<&str>, page_size: usize) -> LibraryResult<PaginatedResult<TaxonomyDto>> {
        let res = self.taxonomy_repository.find_by_kind(kind, page, page_size).await?;
        let records = res.records.iter().map(TaxonomyDto::from).collect();
        Ok(PaginatedResult::new(page, page_size, res.next_page, records))
    }
}

impl From<&TaxonomyEntity> for TaxonomyDto {
    fn from(other: &TaxonomyEntity) -> Self {
        Self {
            taxonomy_id: other.taxonomy_id.to_string(),
            version: other.version,
            kind: other.kind,
            name: other.name.to_string(),
            description: other.description.clone(),
            created_at: other.created_at,
            updated_at: other.updated_at,
        }
    }
}

impl From<&TaxonomyDto> for TaxonomyEntity {
    fn from(other: &TaxonomyDto) -> Self {
        Self {
            taxonomy_id: other.taxonomy_id.to_string(),
            version: other.version,
            kind: other.kind,
            name: other.name.to_string(),
            description: other.description.clone(),
            created_at: other.created_at,
            updated_at: other.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::domain::Configuration;
    use crate::core::library::TaxonomyKind;
    use crate::gateway::testing::NoopPublisher;
    use crate::taxonomy::domain::service::TaxonomyServiceImpl;
    use crate::taxonomy::domain::TaxonomyService;
    use crate::taxonomy::dto::TaxonomyDto;
    use crate::taxonomy::repository::testing::FakeTaxonomyRepository;

    fn build_service() -> TaxonomyServiceImpl {
        TaxonomyServiceImpl::new(&Configuration::new("test"),
                                 Box::new(FakeTaxonomyRepository::new()), Box::new(NoopPublisher {}))
    }

    #[tokio::test]
    async fn test_should_add_and_find_taxonomy() {
        let taxonomy_svc = build_service();

        let author = TaxonomyDto::new(TaxonomyKind::Author, "Franz Kafka");
        let _ = taxonomy_svc.add_taxonomy(&author).await.expect("should add taxonomy");

        let loaded = taxonomy_svc.find_taxonomy_by_id(author.taxonomy_id.as_str()).await.expect("should return taxonomy");
        assert_eq!(author.taxonomy_id, loaded.taxonomy_id);
        assert_eq!(author.name, loaded.name);
    }

    #[tokio::test]
    async fn test_should_update_taxonomy() {
        let taxonomy_svc = build_service();

        let mut shelf = TaxonomyDto::new(TaxonomyKind::Shelf, "east wing A3");
        let _ = taxonomy_svc.add_taxonomy(&shelf).await.expect("should add taxonomy");

        shelf.name = "east wing B1".to_string();
        shelf.description = Some("overflow shelf".to_string());
        let _ = taxonomy_svc.update_taxonomy(&shelf).await.expect("should update taxonomy");

        let loaded = taxonomy_svc.find_taxonomy_by_id(shelf.taxonomy_id.as_str()).await.expect("should return taxonomy");
        assert_eq!(shelf.name, loaded.name);
        assert_eq!(shelf.description, loaded.description);
    }

    #[tokio::test]
    async fn test_should_query_by_kind() {
        let taxonomy_svc = build_service();

        let _ = taxonomy_svc.add_taxonomy(&TaxonomyDto::new(TaxonomyKind::Author, "Franz Kafka")).await.expect("should add taxonomy");
        let _ = taxonomy_svc.add_taxonomy(&TaxonomyDto::new(TaxonomyKind::Category, "fiction")).await.expect("should add taxonomy");

        let authors = taxonomy_svc.query_by_kind(TaxonomyKind::Author, None, 50).await.expect("should query taxonomy");
        assert_eq!(1, authors.records.len());
        assert_eq!("Franz Kafka", authors.records[0].name.as_str());
    }

    #[tokio::test]
    async fn test_should_remove_taxonomy() {
        let taxonomy_svc = build_service();

        let category = TaxonomyDto::new(TaxonomyKind::Category, "fiction");
        let _ = taxonomy_svc.add_taxonomy(&category).await.expect("should add taxonomy");
        let _ = taxonomy_svc.remove_taxonomy(category.taxonomy_id.as_str()).await.expect("should remove taxonomy");

        let loaded = taxonomy_svc.find_taxonomy_by_id(category.taxonomy_id.as_str()).await;
        assert!(loaded.is_err());
    }
}
