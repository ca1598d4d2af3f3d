use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;
use crate::gateway::factory::create_publisher;
use crate::taxonomy::domain::service::TaxonomyServiceImpl;
use crate::taxonomy::domain::TaxonomyService;
use crate::taxonomy::repository::ddb_taxonomy_repository::DDBTaxonomyRepository;
use crate::taxonomy::repository::TaxonomyRepository;
use crate::utils::ddb::{build_db_client, create_table};

pub(crate) async fn create_taxonomy_repository(store: RepositoryStore) -> Box<dyn TaxonomyRepository> {
    match store {
        RepositoryStore::DynamoDB => {
            let client = build_db_client(store).await;
            Box::new(DDBTaxonomyRepository::new(client, "taxonomy", "taxonomy_ndx"))
        }
        RepositoryStore::LocalDynamoDB => {
            let client = build_db_client(store).await;
            let _ = create_table(&client, "taxonomy", "taxonomy_id", "kind", "name").await;
            Box::new(DDBTaxonomyRepository::new(client, "taxonomy", "taxonomy_ndx"))
        }
    }
}

pub(crate) async fn create_taxonomy_service(config: &Configuration, store: RepositoryStore) -> Box<dyn TaxonomyService> {
    let taxonomy_repo = create_taxonomy_repository(store).await;
    let publisher = create_publisher(store.gateway_publisher()).await;
    Box::new(TaxonomyServiceImpl::new(config, taxonomy_repo, publisher))
}
