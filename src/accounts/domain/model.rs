use chrono::{NaiveDateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::core::domain::Identifiable;
use crate::core::library::AccountRole;
use crate::utils::date::serializer;

// AccountEntity is the unified actor record: students and staff live in one
// table and the role column decides what they may do.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub(crate) struct AccountEntity {
    pub account_id: String,
    pub version: i64,
    pub role: AccountRole,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub student_number: Option<String>,
    pub phone: Option<String>,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub updated_at: NaiveDateTime,
}

impl AccountEntity {
    pub fn new(role: AccountRole, email: &str) -> Self {
        let student_number = match role {
            AccountRole::Student => Some(format!("S-{:06}", rand::thread_rng().gen_range(0..1_000_000))),
            _ => None,
        };
        Self {
            account_id: Uuid::new_v4().to_string(),
            version: 0,
            role,
            email: email.to_string(),
            first_name: "".to_string(),
            last_name: "".to_string(),
            student_number,
            phone: None,
            created_at: Utc::now().naive_utc(),
            updated_at: Utc::now().naive_utc(),
        }
    }
}

impl Identifiable for AccountEntity {
    fn id(&self) -> String {
        self.account_id.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}
