use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::accounts::domain::AccountService;
use crate::accounts::dto::AccountDto;
use crate::core::command::{Command, CommandError};
use crate::core::library::AccountRole;

pub(crate) struct AddAccountCommand {
    account_service: Box<dyn AccountService>,
}

impl AddAccountCommand {
    pub(crate) fn new(account_service: Box<dyn AccountService>) -> Self {
        Self {
            account_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct AddAccountCommandRequest {
    pub(crate) role: AccountRole,
    pub(crate) email: String,
    pub(crate) first_name: Option<String>,
    pub(crate) last_name: Option<String>,
    pub(crate) student_number: Option<String>,
    pub(crate) phone: Option<String>,
}

impl AddAccountCommandRequest {
    pub fn new(role: AccountRole, email: &str) -> Self {
        Self {
            role,
            email: email.to_string(),
            first_name: None,
            last_name: None,
            student_number: None,
            phone: None,
        }
    }

    pub fn build_account(&self) -> AccountDto {
        let mut account = AccountDto::new(self.role, self.email.as_str());
        account.first_name = self.first_name.clone().unwrap_or_default();
        account.last_name = self.last_name.clone().unwrap_or_default();
        account.student_number = self.student_number.clone();
        account.phone = self.phone.clone();
        account
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct AddAccountCommandResponse {
    pub account: AccountDto,
}

impl AddAccountCommandResponse {
    pub fn new(account: AccountDto) -> Self {
        Self {
            account,
        }
    }
}

#[async_trait]
impl Command<AddAccountCommandRequest, AddAccountCommandResponse> for AddAccountCommand {
    async fn execute(&self, req: AddAccountCommandRequest) -> Result<AddAccountCommandResponse, CommandError> {
        let account = req.build_account();
        self.account_service.add_account(&account).await.map_err(CommandError::from).map(|_| AddAccountCommandResponse::new(account))
    }
}
