pub(crate) mod ddb_account_repository;

use async_trait::async_trait;
use crate::accounts::domain::model::AccountEntity;
use crate::core::library::{AccountRole, LibraryResult, PaginatedResult};
use crate::core::repository::Repository;

#[async_trait]
pub(crate) trait AccountRepository: Repository<AccountEntity> {
    async fn find_by_email(&self, email: &str) -> LibraryResult<Vec<AccountEntity>>;
    async fn find_by_role(&self, role: AccountRole,
                          page: Option<&str>, page_size: usize) -> LibraryResult<PaginatedResult<AccountEntity>>;
}

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};
    use async_trait::async_trait;
    use crate::accounts::domain::model::AccountEntity;
    use crate::accounts::repository::AccountRepository;
    use crate::core::library::{AccountRole, LibraryError, LibraryResult, PaginatedResult};
    use crate::core::repository::Repository;

    #[derive(Clone)]
    pub(crate) struct FakeAccountRepository {
        accounts: Arc<Mutex<HashMap<String, AccountEntity>>>,
    }

    impl FakeAccountRepository {
        pub(crate) fn new() -> Self {
            Self { accounts: Arc::new(Mutex::new(HashMap::new())) }
        }

        pub(crate) fn with(accounts: Vec<AccountEntity>) -> Self {
            let map = accounts.into_iter().map(|a| (a.account_id.to_string(), a)).collect();
            Self { accounts: Arc::new(Mutex::new(map)) }
        }
    }

    #[async_trait]
    impl Repository<AccountEntity> for FakeAccountRepository {
        async fn create(&self, entity: &AccountEntity) -> LibraryResult<usize> {
            let mut accounts = self.accounts.lock().unwrap();
            if accounts.contains_key(entity.account_id.as_str()) {
                return Err(LibraryError::duplicate_key(format!("account {} exists", entity.account_id).as_str()));
            }
            accounts.insert(entity.account_id.to_string(), entity.clone());
            Ok(1)
        }

        async fn update(&self, entity: &AccountEntity) -> LibraryResult<usize> {
            let mut accounts = self.accounts.lock().unwrap();
            match accounts.get(entity.account_id.as_str()) {
                Some(existing) if existing.version == entity.version => {
                    let mut updated = entity.clone();
                    updated.version += 1;
                    accounts.insert(entity.account_id.to_string(), updated);
                    Ok(1)
                }
                Some(_) => Err(LibraryError::conflict(
                    format!("stale version for account {}", entity.account_id).as_str(), None)),
                None => Err(LibraryError::conflict(
                    format!("account {} not found", entity.account_id).as_str(), None)),
            }
        }

        async fn get(&self, id: &str) -> LibraryResult<AccountEntity> {
            self.accounts.lock().unwrap().get(id).cloned()
                .ok_or_else(|| LibraryError::not_found(format!("account not found for {}", id).as_str()))
        }

        async fn delete(&self, id: &str) -> LibraryResult<usize> {
            self.accounts.lock().unwrap().remove(id)
                .map(|_| 1)
                .ok_or_else(|| LibraryError::not_found(format!("account not found for {}", id).as_str()))
        }

        async fn query(&self, predicate: &HashMap<String, String>,
                       page: Option<&str>, page_size: usize) -> LibraryResult<PaginatedResult<AccountEntity>> {
            let accounts = self.accounts.lock().unwrap();
            let records = accounts.values()
                .filter(|a| predicate.get("email").map_or(true, |e| a.email.as_str() == e.as_str()))
                .filter(|a| predicate.get("role").map_or(true, |r| a.role.to_string() == *r))
                .cloned().collect();
            Ok(PaginatedResult::new(page, page_size, None, records))
        }
    }

    #[async_trait]
    impl AccountRepository for FakeAccountRepository {
        async fn find_by_email(&self, email: &str) -> LibraryResult<Vec<AccountEntity>> {
            let res = self.query(&HashMap::from([("email".to_string(), email.to_string())]), None, 100).await?;
            Ok(res.records)
        }

        async fn find_by_role(&self, role: AccountRole,
                              page: Option<&str>, page_size: usize) -> LibraryResult<PaginatedResult<AccountEntity>> {
            self.query(&HashMap::from([("role".to_string(), role.to_string())]), page, page_size).await
        }
    }
}
