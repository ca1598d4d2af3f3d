use chrono::{Duration, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::core::domain::Identifiable;
use crate::core::library::RentalStatus;
use crate::utils::date::serializer;

// RentalEntity is a borrow record; returned_at stays empty while the rental
// is outstanding and the status walks Pending -> Active -> Returned.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub(crate) struct RentalEntity {
    pub rental_id: String,
    pub version: i64,
    pub user_id: String,
    pub book_id: String,
    pub rental_status: RentalStatus,
    pub requested_days: i64,
    #[serde(with = "serializer")]
    pub due_at: NaiveDateTime,
    pub returned_at: Option<NaiveDateTime>,
    pub approved_by: Option<String>,
    pub received_by: Option<String>,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub updated_at: NaiveDateTime,
}

impl RentalEntity {
    pub fn new(user_id: &str, book_id: &str, days: i64) -> Self {
        Self {
            rental_id: Uuid::new_v4().to_string(),
            version: 0,
            user_id: user_id.to_string(),
            book_id: book_id.to_string(),
            rental_status: RentalStatus::Pending,
            requested_days: days,
            due_at: Utc::now().naive_utc() + Duration::days(days),
            returned_at: None,
            approved_by: None,
            received_by: None,
            created_at: Utc::now().naive_utc(),
            updated_at: Utc::now().naive_utc(),
        }
    }

    pub fn is_outstanding(&self) -> bool {
        self.returned_at.is_none()
    }
}

impl Identifiable for RentalEntity {
    fn id(&self) -> String {
        self.rental_id.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}

#[cfg(test)]
mod tests {
    use crate::core::library::RentalStatus;
    use crate::rentals::domain::model::RentalEntity;

    #[tokio::test]
    async fn test_should_build_rental() {
        let rental = RentalEntity::new("user1", "book1", 14);
        assert_eq!("user1", rental.user_id.as_str());
        assert_eq!("book1", rental.book_id.as_str());
        assert_eq!(RentalStatus::Pending, rental.rental_status);
        assert_eq!(14, rental.requested_days);
        assert!(rental.is_outstanding());
        assert_eq!(None, rental.approved_by);
    }
}
