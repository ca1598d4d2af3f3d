use std::collections::HashMap;
use async_trait::async_trait;
use chrono::Utc;
use crate::core::domain::Configuration;
use crate::core::events::DomainEvent;
use crate::core::library::{LibraryError, LibraryResult, PaginatedResult};
use crate::gateway::events::EventPublisher;
use crate::penalties::domain::model::PenaltyEntity;
use crate::penalties::domain::PenaltyService;
use crate::penalties::dto::PenaltyDto;
use crate::penalties::repository::PenaltyRepository;

pub(crate) struct PenaltyServiceImpl {
    penalty_repository: Box<dyn PenaltyRepository>,
    events_publisher: Box<dyn EventPublisher>,
}

impl PenaltyServiceImpl {
    pub(crate) fn new(_config: &Configuration, penalty_repository: Box<dyn PenaltyRepository>,
                      events_publisher: Box<dyn EventPublisher>) -> Self {
        Self {
            penalty_repository,
            events_publisher,
        }
    }
}

#[async_trait]
impl PenaltyService for PenaltyServiceImpl {
    async fn record_penalty(&self, penalty: &PenaltyDto) -> LibraryResult<PenaltyDto> {
        let _ = self.penalty_repository.create(&PenaltyEntity::from(penalty)).await.map(|_| ())?;
        let _ = self.events_publisher.publish(&DomainEvent::added(
            "penalty_recorded", "penalties", penalty.penalty_id.as_str(), &HashMap::new(), penalty)?).await?;
        Ok(penalty.clone())
    }

    async fn pay_penalty(&self, id: &str) -> LibraryResult<PenaltyDto> {
        let mut existing = self.penalty_repository.get(id).await?;
        if existing.paid {
            return Err(LibraryError::validation(format!("penalty {} is already paid",
                                                        id).as_str(), Some("400".to_string())));
        }
        existing.paid = true;
        existing.updated_at = Utc::now().naive_utc();
        self.penalty_repository.update(&existing).await?;
        let penalty = PenaltyDto::from(&existing);
        let _ = self.events_publisher.publish(&DomainEvent::updated(
            "penalty_paid", "penalties", penalty.penalty_id.as_str(), &HashMap::new(), &penalty.clone())?).await?;
        Ok(penalty)
    }

    async fn find_penalty_by_id(&self, id: &str) -> LibraryResult<PenaltyDto> {
        self.penalty_repository.get(id).await.map(|p| PenaltyDto::from(&p))
    }

    async fn query_penalties(&self, predicate: &HashMap<String, String>,
                             page: Option<&str>, page_size: usize) -> LibraryResult<PaginatedResult<PenaltyDto>> {
        let res = self.penalty_repository.query(predicate, page, page_size).await?;
        let records = res.records.iter().map(PenaltyDto::from).collect();
        Ok(PaginatedResult::new(page, page_size, res.next_page, records))
    }

    async fn query_unpaid(&self, predicate: &HashMap<String, String>,
                          page: Option<&str>, page_size: usize) -> LibraryResult<PaginatedResult<PenaltyDto>> {
        let res = self.penalty_repository.query_unpaid(predicate, page, page_size).await?;
        let records = res.records.iter().map(PenaltyDto::from).collect();
        Ok(PaginatedResult::new(page, page_size, res.next_page, records))
    }
}

impl From<&PenaltyEntity> for PenaltyDto {
    fn from(other: &PenaltyEntity) -> Self {
        Self {
            penalty_id: other.penalty_id.to_string(),
            version: other.version,
            rental_id: other.rental_id.to_string(),
            user_id: other.user_id.to_string(),
            book_id: other.book_id.to_string(),
            period_start: other.period_start,
            period_end: other.period_end,
            overdue_days: other.overdue_days,
            fee: other.fee,
            description: other.description.to_string(),
            paid: other.paid,
            created_at: other.created_at,
            updated_at: other.updated_at,
        }
    }
}

impl From<&PenaltyDto> for PenaltyEntity {
    fn from(other: &PenaltyDto) -> Self {
        Self {
            penalty_id: other.penalty_id.to_string(),
            version: other.version,
            rental_id: other.rental_id.to_string(),
            user_id: other.user_id.to_string(),
            book_id: other.book_id.to_string(),
            period_start: other.period_start,
            period_end: other.period_end,
            overdue_days: other.overdue_days,
            fee: other.fee,
            description: other.description.to_string(),
            paid: other.paid,
            created_at: other.created_at,
            updated_at: other.updated_at,
        }
    }
}
