use std::collections::HashMap;
use async_trait::async_trait;
use chrono::{NaiveDateTime, Utc};
use tracing::log::warn;
use crate::accounts::domain::AccountService;
use crate::books::repository::BookRepository;
use crate::core::domain::Configuration;
use crate::core::events::DomainEvent;
use crate::core::library::{LibraryError, LibraryResult, PaginatedResult, RentalStatus};
use crate::gateway::events::EventPublisher;
use crate::penalties::domain::PenaltyService;
use crate::penalties::dto::PenaltyDto;
use crate::rentals::domain::model::RentalEntity;
use crate::rentals::domain::RentalService;
use crate::rentals::dto::RentalDto;
use crate::rentals::repository::RentalRepository;

const MS_PER_DAY: i64 = 86_400_000;

pub(crate) struct RentalServiceImpl {
    config: Configuration,
    rental_repository: Box<dyn RentalRepository>,
    book_repository: Box<dyn BookRepository>,
    account_service: Box<dyn AccountService>,
    penalty_service: Box<dyn PenaltyService>,
    events_publisher: Box<dyn EventPublisher>,
}

impl RentalServiceImpl {
    pub(crate) fn new(config: &Configuration, rental_repository: Box<dyn RentalRepository>,
                      book_repository: Box<dyn BookRepository>, account_service: Box<dyn AccountService>,
                      penalty_service: Box<dyn PenaltyService>, events_publisher: Box<dyn EventPublisher>) -> Self {
        Self {
            config: config.clone(),
            rental_repository,
            book_repository,
            account_service,
            penalty_service,
            events_publisher,
        }
    }

    async fn find_staff(&self, officer_id: &str) -> LibraryResult<()> {
        let officer = self.account_service.find_account_by_id(officer_id).await?;
        if !officer.role.is_staff() {
            return Err(LibraryError::validation(format!("account {} is not staff",
                                                        officer_id).as_str(), Some("400".to_string())));
        }
        Ok(())
    }
}

// Whole days late, rounding any started day up; zero when on time.
pub(crate) fn overdue_days(due_at: NaiveDateTime, returned_at: NaiveDateTime) -> i64 {
    let overdue_ms = (returned_at - due_at).num_milliseconds();
    if overdue_ms <= 0 {
        return 0;
    }
    (overdue_ms + MS_PER_DAY - 1) / MS_PER_DAY
}

#[async_trait]
impl RentalService for RentalServiceImpl {
    async fn request(&self, user_id: &str, book_id: &str, days: i64) -> LibraryResult<RentalDto> {
        if days < self.config.min_rental_days || days > self.config.max_rental_days {
            return Err(LibraryError::validation(format!("rental duration {} must be between {} and {} days",
                                                        days, self.config.min_rental_days,
                                                        self.config.max_rental_days).as_str(), Some("400".to_string())));
        }
        let _ = self.account_service.find_account_by_id(user_id).await?;
        let book = self.book_repository.get(book_id).await?;
        if book.stock <= 0 {
            return Err(LibraryError::validation(format!("book {} is out of stock",
                                                        book_id).as_str(), Some("400".to_string())));
        }
        let outstanding = self.rental_repository.query_outstanding(user_id, None, 100).await?;
        if outstanding.records.iter().any(|r| r.book_id.as_str() == book_id) {
            return Err(LibraryError::validation(format!("user {} already has an outstanding rental for book {}",
                                                        user_id, book_id).as_str(), Some("400".to_string())));
        }
        if outstanding.records.len() as i64 >= self.config.max_outstanding_rentals {
            return Err(LibraryError::validation(format!("user {} has reached the limit of {} outstanding rentals",
                                                        user_id, self.config.max_outstanding_rentals).as_str(), Some("400".to_string())));
        }
        let rental = RentalEntity::new(user_id, book_id, days);
        self.rental_repository.create(&rental).await?;
        let rental = RentalDto::from(&rental);
        let _ = self.events_publisher.publish(&DomainEvent::added(
            "rental_requested", "rentals", rental.rental_id.as_str(), &HashMap::new(), &rental.clone())?).await?;
        Ok(rental)
    }

    async fn approve(&self, rental_id: &str, officer_id: &str) -> LibraryResult<RentalDto> {
        let mut rental = self.rental_repository.get(rental_id).await?;
        if rental.rental_status != RentalStatus::Pending {
            return Err(LibraryError::validation(format!("rental {} is not pending approval",
                                                        rental_id).as_str(), Some("400".to_string())));
        }
        self.find_staff(officer_id).await?;
        // the decrement carries its own stock > 0 guard, so the availability
        // check and the stock movement are one statement
        self.book_repository.decrement_stock(rental.book_id.as_str()).await?;
        rental.rental_status = RentalStatus::Active;
        rental.approved_by = Some(officer_id.to_string());
        rental.updated_at = Utc::now().naive_utc();
        if let Err(err) = self.rental_repository.update(&rental).await {
            // lost the version race after taking a copy off the shelf; put it back
            let _ = self.book_repository.increment_stock(rental.book_id.as_str()).await;
            return Err(err);
        }
        let rental = RentalDto::from(&rental);
        let _ = self.events_publisher.publish(&DomainEvent::updated(
            "rental_approved", "rentals", rental.rental_id.as_str(), &HashMap::new(), &rental.clone())?).await?;
        Ok(rental)
    }

    async fn return_book(&self, rental_id: &str, officer_id: &str) -> LibraryResult<RentalDto> {
        let mut rental = self.rental_repository.get(rental_id).await?;
        if rental.rental_status != RentalStatus::Active {
            return Err(LibraryError::validation(format!("rental {} is not active",
                                                        rental_id).as_str(), Some("400".to_string())));
        }
        self.find_staff(officer_id).await?;
        let now = Utc::now().naive_utc();
        rental.rental_status = RentalStatus::Returned;
        rental.returned_at = Some(now);
        rental.received_by = Some(officer_id.to_string());
        rental.updated_at = now;
        self.rental_repository.update(&rental).await?;

        let days_late = overdue_days(rental.due_at, now);
        if days_late > 0 {
            let fee = days_late * self.config.daily_overdue_fee;
            let penalty = PenaltyDto::new(rental.rental_id.as_str(), rental.user_id.as_str(),
                                          rental.book_id.as_str(), rental.due_at, now, days_late, fee);
            self.penalty_service.record_penalty(&penalty).await?;
        }
        if let Err(err) = self.book_repository.increment_stock(rental.book_id.as_str()).await {
            // the rental is already closed; the stock counter stays low by one
            warn!("failed to restore stock for book {} after return of rental {}: {}",
                  rental.book_id, rental.rental_id, err);
            return Err(err);
        }
        let rental = RentalDto::from(&rental);
        let _ = self.events_publisher.publish(&DomainEvent::updated(
            "rental_returned", "rentals", rental.rental_id.as_str(), &HashMap::new(), &rental.clone())?).await?;
        Ok(rental)
    }

    async fn find_rental_by_id(&self, id: &str) -> LibraryResult<RentalDto> {
        self.rental_repository.get(id).await.map(|r| RentalDto::from(&r))
    }

    async fn query_rentals(&self, predicate: &HashMap<String, String>,
                           page: Option<&str>, page_size: usize) -> LibraryResult<PaginatedResult<RentalDto>> {
        let res = self.rental_repository.query(predicate, page, page_size).await?;
        let records = res.records.iter().map(RentalDto::from).collect();
        Ok(PaginatedResult::new(page, page_size, res.next_page, records))
    }

    async fn query_overdue(&self, predicate: &HashMap<String, String>,
                           page: Option<&str>, page_size: usize) -> LibraryResult<PaginatedResult<RentalDto>> {
        let res = self.rental_repository.query_overdue(predicate, page, page_size).await?;
        let records = res.records.iter().map(RentalDto::from).collect();
        Ok(PaginatedResult::new(page, page_size, res.next_page, records))
    }
}

impl From<&RentalEntity> for RentalDto {
    fn from(other: &RentalEntity) -> RentalDto {
        RentalDto {
            rental_id: other.rental_id.to_string(),
            version: other.version,
            user_id: other.user_id.to_string(),
            book_id: other.book_id.to_string(),
            rental_status: other.rental_status,
            requested_days: other.requested_days,
            due_at: other.due_at,
            returned_at: other.returned_at,
            approved_by: other.approved_by.clone(),
            received_by: other.received_by.clone(),
            created_at: other.created_at,
            updated_at: other.updated_at,
        }
    }
}

impl From<&RentalDto> for RentalEntity {
    fn from(other: &RentalDto) -> RentalEntity {
        RentalEntity {
            rental_id: other.rental_id.to_string(),
            version: other.version,
            user_id: other.user_id.to_string(),
            book_id: other.book_id.to_string(),
            rental_status: other.rental_status,
            requested_days: other.requested_days,
            due_at: other.due_at,
            returned_at: other.returned_at,
            approved_by: other.approved_by.clone(),
            received_by: other.received_by.clone(),
            created_at: other.created_at,
            updated_at: other.updated_at,
        }
    }
}
