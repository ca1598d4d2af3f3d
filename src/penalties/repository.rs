pub(crate) mod ddb_penalty_repository;

use std::collections::HashMap;
use async_trait::async_trait;
use crate::core::library::{LibraryResult, PaginatedResult};
use crate::core::repository::Repository;
use crate::penalties::domain::model::PenaltyEntity;

#[async_trait]
pub(crate) trait PenaltyRepository: Repository<PenaltyEntity> {
    async fn query_unpaid(&self, predicate: &HashMap::<String, String>,
                          page: Option<&str>, page_size: usize) -> LibraryResult<PaginatedResult<PenaltyEntity>>;
}

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};
    use async_trait::async_trait;
    use crate::core::library::{LibraryError, LibraryResult, PaginatedResult};
    use crate::core::repository::Repository;
    use crate::penalties::domain::model::PenaltyEntity;
    use crate::penalties::repository::PenaltyRepository;

    #[derive(Clone)]
    pub(crate) struct FakePenaltyRepository {
        penalties: Arc<Mutex<HashMap<String, PenaltyEntity>>>,
    }

    impl FakePenaltyRepository {
        pub(crate) fn new() -> Self {
            Self { penalties: Arc::new(Mutex::new(HashMap::new())) }
        }

        pub(crate) fn all(&self) -> Vec<PenaltyEntity> {
            self.penalties.lock().unwrap().values().cloned().collect()
        }
    }

    #[async_trait]
    impl Repository<PenaltyEntity> for FakePenaltyRepository {
        async fn create(&self, entity: &PenaltyEntity) -> LibraryResult<usize> {
            let mut penalties = self.penalties.lock().unwrap();
            if penalties.contains_key(entity.penalty_id.as_str()) {
                return Err(LibraryError::duplicate_key(format!("penalty {} exists", entity.penalty_id).as_str()));
            }
            penalties.insert(entity.penalty_id.to_string(), entity.clone());
            Ok(1)
        }

        async fn update(&self, entity: &PenaltyEntity) -> LibraryResult<usize> {
            let mut penalties = self.penalties.lock().unwrap();
            match penalties.get(entity.penalty_id.as_str()) {
                Some(existing) if existing.version == entity.version => {
                    let mut updated = entity.clone();
                    updated.version += 1;
                    penalties.insert(entity.penalty_id.to_string(), updated);
                    Ok(1)
                }
                Some(_) => Err(LibraryError::conflict(
                    format!("stale version for penalty {}", entity.penalty_id).as_str(), None)),
                None => Err(LibraryError::conflict(
                    format!("penalty {} not found", entity.penalty_id).as_str(), None)),
            }
        }

        async fn get(&self, id: &str) -> LibraryResult<PenaltyEntity> {
            self.penalties.lock().unwrap().get(id).cloned()
                .ok_or_else(|| LibraryError::not_found(format!("penalty not found for {}", id).as_str()))
        }

        async fn delete(&self, id: &str) -> LibraryResult<usize> {
            self.penalties.lock().unwrap().remove(id)
                .map(|_| 1)
                .ok_or_else(|| LibraryError::not_found(format!("penalty not found for {}", id).as_str()))
        }

        async fn query(&self, predicate: &HashMap<String, String>,
                       page: Option<&str>, page_size: usize) -> LibraryResult<PaginatedResult<PenaltyEntity>> {
            let penalties = self.penalties.lock().unwrap();
            let records = penalties.values()
                .filter(|p| predicate.get("user_id").map_or(true, |u| p.user_id.as_str() == u.as_str()))
                .filter(|p| predicate.get("rental_id").map_or(true, |r| p.rental_id.as_str() == r.as_str()))
                .filter(|p| predicate.get("paid").map_or(true, |v| p.paid.to_string() == *v))
                .cloned().collect();
            Ok(PaginatedResult::new(page, page_size, None, records))
        }
    }

    #[async_trait]
    impl PenaltyRepository for FakePenaltyRepository {
        async fn query_unpaid(&self, predicate: &HashMap<String, String>,
                              page: Option<&str>, page_size: usize) -> LibraryResult<PaginatedResult<PenaltyEntity>> {
            let mut new_predicate = HashMap::from([("paid".to_string(), "false".to_string())]);
            for (key, value) in predicate {
                new_predicate.insert(key.to_string(), value.to_string());
            }
            self.query(&new_predicate, page, page_size).await
        }
    }
}
