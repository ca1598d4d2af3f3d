use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::core::domain::Identifiable;
use crate::utils::date::serializer;

// PenaltyEntity is a ledger row for one overdue return; the period spans
// [due date, return date] and the fee accrues per started day.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub(crate) struct PenaltyEntity {
    pub penalty_id: String,
    pub version: i64,
    pub rental_id: String,
    pub user_id: String,
    pub book_id: String,
    #[serde(with = "serializer")]
    pub period_start: NaiveDateTime,
    #[serde(with = "serializer")]
    pub period_end: NaiveDateTime,
    pub overdue_days: i64,
    pub fee: i64,
    pub description: String,
    pub paid: bool,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub updated_at: NaiveDateTime,
}

impl PenaltyEntity {
    pub fn new(rental_id: &str, user_id: &str, book_id: &str,
               period_start: NaiveDateTime, period_end: NaiveDateTime,
               overdue_days: i64, fee: i64) -> Self {
        Self {
            penalty_id: Uuid::new_v4().to_string(),
            version: 0,
            rental_id: rental_id.to_string(),
            user_id: user_id.to_string(),
            book_id: book_id.to_string(),
            period_start,
            period_end,
            overdue_days,
            fee,
            description: format!("returned {} day(s) late, fee {}", overdue_days, fee),
            paid: false,
            created_at: Utc::now().naive_utc(),
            updated_at: Utc::now().naive_utc(),
        }
    }
}

impl Identifiable for PenaltyEntity {
    fn id(&self) -> String {
        self.penalty_id.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use crate::penalties::domain::model::PenaltyEntity;

    #[tokio::test]
    async fn test_should_build_penalty() {
        let now = Utc::now().naive_utc();
        let penalty = PenaltyEntity::new("r1", "u1", "b1", now, now, 3, 30);
        assert_eq!("r1", penalty.rental_id.as_str());
        assert_eq!(3, penalty.overdue_days);
        assert_eq!(30, penalty.fee);
        assert!(!penalty.paid);
        assert_eq!("returned 3 day(s) late, fee 30", penalty.description.as_str());
    }
}
