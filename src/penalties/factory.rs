use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;
use crate::gateway::factory::create_publisher;
use crate::penalties::domain::service::PenaltyServiceImpl;
use crate::penalties::domain::PenaltyService;
use crate::penalties::repository::ddb_penalty_repository::DDBPenaltyRepository;
use crate::penalties::repository::PenaltyRepository;
use crate::utils::ddb::{build_db_client, create_table};

pub(crate) async fn create_penalty_repository(store: RepositoryStore) -> Box<dyn PenaltyRepository> {
    match store {
        RepositoryStore::DynamoDB => {
            let client = build_db_client(store).await;
            Box::new(DDBPenaltyRepository::new(client, "penalties", "penalties_ndx"))
        }
        RepositoryStore::LocalDynamoDB => {
            let client = build_db_client(store).await;
            let _ = create_table(&client, "penalties", "penalty_id", "user_id", "book_id").await;
            Box::new(DDBPenaltyRepository::new(client, "penalties", "penalties_ndx"))
        }
    }
}

pub(crate) async fn create_penalty_service(config: &Configuration, store: RepositoryStore) -> Box<dyn PenaltyService> {
    let penalty_repo = create_penalty_repository(store).await;
    let publisher = create_publisher(store.gateway_publisher()).await;
    Box::new(PenaltyServiceImpl::new(config, penalty_repo, publisher))
}
