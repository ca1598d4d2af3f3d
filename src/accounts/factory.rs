use crate::accounts::domain::service::AccountServiceImpl;
use crate::accounts::domain::AccountService;
use crate::accounts::repository::AccountRepository;
use crate::accounts::repository::ddb_account_repository::DDBAccountRepository;
use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;
use crate::utils::ddb::{build_db_client, create_table};

pub(crate) async fn create_account_repository(store: RepositoryStore) -> Box<dyn AccountRepository> {
    match store {
        RepositoryStore::DynamoDB => {
            let client = build_db_client(store).await;
            Box::new(DDBAccountRepository::new(client, "accounts", "accounts_ndx"))
        }
        RepositoryStore::LocalDynamoDB => {
            let client = build_db_client(store).await;
            let _ = create_table(&client, "accounts", "account_id", "email", "role").await;
            Box::new(DDBAccountRepository::new(client, "accounts", "accounts_ndx"))
        }
    }
}

pub(crate) async fn create_account_service(config: &Configuration, store: RepositoryStore) -> Box<dyn AccountService> {
    let account_repo = create_account_repository(store).await;
    Box::new(AccountServiceImpl::new(config, account_repo))
}
