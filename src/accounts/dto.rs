use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::accounts::Actor;
use crate::core::domain::Identifiable;
use crate::core::library::AccountRole;
use crate::utils::date::serializer;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct AccountDto {
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

impl AccountDto {
    pub fn new(role: AccountRole, email: &str) -> Self {
        Self {
            account_id: Uuid::new_v4().to_string(),
            version: 0,
            role,
            email: email.to_string(),
            first_name: "".to_string(),
            last_name: "".to_string(),
            student_number: None,
            phone: None,
            created_at: Utc::now().naive_utc(),
            updated_at: Utc::now().naive_utc(),
        }
    }
}

impl Identifiable for AccountDto {
    fn id(&self) -> String {
        self.account_id.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}

impl Actor for AccountDto {
    fn is_student(&self) -> bool {
        self.is_role(AccountRole::Student)
    }

    fn is_officer(&self) -> bool {
        self.is_role(AccountRole::Officer)
    }

    fn is_manager(&self) -> bool {
        self.is_role(AccountRole::Manager)
    }

    fn is_role(&self, match_role: AccountRole) -> bool {
        self.role == match_role
    }
}
