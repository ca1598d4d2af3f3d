use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use crate::accounts::domain::AccountService;
use crate::accounts::dto::AccountDto;
use crate::core::command::{Command, CommandError};
use crate::core::library::AccountRole;

// the privileged user-update operation; staff dashboards call this one
pub(crate) struct UpdateAccountCommand {
    account_service: Box<dyn AccountService>,
}

impl UpdateAccountCommand {
    pub(crate) fn new(account_service: Box<dyn AccountService>) -> Self {
        Self {
            account_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct UpdateAccountCommandRequest {
    // filled from the request path
    #[serde(default)]
    pub account_id: String,
    pub version: i64,
    pub role: AccountRole,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub student_number: Option<String>,
    pub phone: Option<String>,
}

impl UpdateAccountCommandRequest {
    pub fn new(account_id: &str, version: i64, role: AccountRole, email: &str) -> Self {
        Self {
            account_id: account_id.to_string(),
            version,
            role,
            email: email.to_string(),
            first_name: None,
            last_name: None,
            student_number: None,
            phone: None,
        }
    }

    pub fn build_account(&self) -> AccountDto {
        AccountDto {
            account_id: self.account_id.to_string(),
            version: self.version,
            role: self.role,
            email: self.email.to_string(),
            first_name: self.first_name.clone().unwrap_or_default(),
            last_name: self.last_name.clone().unwrap_or_default(),
            student_number: self.student_number.clone(),
            phone: self.phone.clone(),
            created_at: Utc::now().naive_utc(),
            updated_at: Utc::now().naive_utc(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct UpdateAccountCommandResponse {
    pub account: AccountDto,
}

impl UpdateAccountCommandResponse {
    pub fn new(account: AccountDto) -> Self {
        Self {
            account,
        }
    }
}

#[async_trait]
impl Command<UpdateAccountCommandRequest, UpdateAccountCommandResponse> for UpdateAccountCommand {
    async fn execute(&self, req: UpdateAccountCommandRequest) -> Result<UpdateAccountCommandResponse, CommandError> {
        let account = req.build_account();
        self.account_service.update_account(&account).await.map_err(CommandError::from).map(|_| UpdateAccountCommandResponse::new(account))
    }
}

#[cfg(test)]
mod tests {
    use crate::accounts::command::add_account_cmd::{AddAccountCommand, AddAccountCommandRequest};
    use crate::accounts::command::update_account_cmd::{UpdateAccountCommand, UpdateAccountCommandRequest};
    use crate::accounts::domain::service::AccountServiceImpl;
    use crate::accounts::repository::testing::FakeAccountRepository;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::core::library::AccountRole;

    fn build_account_service(repo: FakeAccountRepository) -> Box<AccountServiceImpl> {
        Box::new(AccountServiceImpl::new(&Configuration::new("test"), Box::new(repo)))
    }

    #[tokio::test]
    async fn test_should_run_update_account() {
        let repo = FakeAccountRepository::new();
        let add_cmd = AddAccountCommand::new(build_account_service(repo.clone()));
        let update_cmd = UpdateAccountCommand::new(build_account_service(repo));

        let added = add_cmd.execute(AddAccountCommandRequest::new(AccountRole::Student, "student@campus.edu"))
            .await.expect("should add account");
        let res = update_cmd.execute(UpdateAccountCommandRequest::new(
            added.account.account_id.as_str(), added.account.version, AccountRole::Student, "renamed@campus.edu"))
            .await.expect("should update account");
        assert_eq!("renamed@campus.edu", res.account.email.as_str());
    }

    #[tokio::test]
    async fn test_should_reject_stale_version() {
        let repo = FakeAccountRepository::new();
        let add_cmd = AddAccountCommand::new(build_account_service(repo.clone()));
        let update_cmd = UpdateAccountCommand::new(build_account_service(repo));

        let added = add_cmd.execute(AddAccountCommandRequest::new(AccountRole::Student, "student@campus.edu"))
            .await.expect("should add account");
        let _ = update_cmd.execute(UpdateAccountCommandRequest::new(
            added.account.account_id.as_str(), added.account.version, AccountRole::Student, "renamed@campus.edu"))
            .await.expect("should update account");
        let res = update_cmd.execute(UpdateAccountCommandRequest::new(
            added.account.account_id.as_str(), added.account.version, AccountRole::Student, "stale@campus.edu")).await;
        assert!(matches!(res, Err(CommandError::Conflict { message: _, reason_code: _ })));
    }
}
