use crate::accounts::factory::create_account_service;
use crate::books::factory::create_book_repository;
use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;
use crate::gateway::factory::create_publisher;
use crate::penalties::factory::create_penalty_service;
use crate::rentals::domain::service::RentalServiceImpl;
use crate::rentals::domain::RentalService;
use crate::rentals::repository::ddb_rental_repository::DDBRentalRepository;
use crate::rentals::repository::RentalRepository;
use crate::utils::ddb::{build_db_client, create_table};

pub(crate) async fn create_rental_repository(store: RepositoryStore) -> Box<dyn RentalRepository> {
    match store {
        RepositoryStore::DynamoDB => {
            let client = build_db_client(store).await;
            Box::new(DDBRentalRepository::new(client, "rentals", "rentals_ndx"))
        }
        RepositoryStore::LocalDynamoDB => {
            let client = build_db_client(store).await;
            let _ = create_table(&client, "rentals", "rental_id", "rental_status", "user_id").await;
            Box::new(DDBRentalRepository::new(client, "rentals", "rentals_ndx"))
        }
    }
}

pub(crate) async fn create_rental_service(config: &Configuration, store: RepositoryStore) -> Box<dyn RentalService> {
    let rental_repo = create_rental_repository(store).await;
    let book_repo = create_book_repository(store).await;
    let account_svc = create_account_service(config, store).await;
    let penalty_svc = create_penalty_service(config, store).await;
    let publisher = create_publisher(store.gateway_publisher()).await;
    Box::new(RentalServiceImpl::new(config, rental_repo, book_repo,
                                    account_svc, penalty_svc, publisher))
}
