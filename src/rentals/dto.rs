use chrono::{Duration, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::core::domain::Identifiable;
use crate::core::library::RentalStatus;
use crate::utils::date::serializer;

// RentalDto is the transfer object for the rental workflow
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct RentalDto {
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

impl RentalDto {
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
}

impl Identifiable for RentalDto {
    fn id(&self) -> String {
        self.rental_id.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}
