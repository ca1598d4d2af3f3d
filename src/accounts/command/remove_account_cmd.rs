use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::accounts::domain::AccountService;
use crate::core::command::{Command, CommandError};

// the privileged user-delete operation
pub(crate) struct RemoveAccountCommand {
    account_service: Box<dyn AccountService>,
}

impl RemoveAccountCommand {
    pub(crate) fn new(account_service: Box<dyn AccountService>) -> Self {
        Self {
            account_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RemoveAccountCommandRequest {
    pub(crate) account_id: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct RemoveAccountCommandResponse {
}

impl RemoveAccountCommandResponse {
    pub fn new() -> Self {
        Self {
        }
    }
}

#[async_trait]
impl Command<RemoveAccountCommandRequest, RemoveAccountCommandResponse> for RemoveAccountCommand {
    async fn execute(&self, req: RemoveAccountCommandRequest) -> Result<RemoveAccountCommandResponse, CommandError> {
        self.account_service.remove_account(req.account_id.as_str())
            .await.map_err(CommandError::from).map(|_| RemoveAccountCommandResponse::new())
    }
}

#[cfg(test)]
mod tests {
    use crate::accounts::command::add_account_cmd::{AddAccountCommand, AddAccountCommandRequest};
    use crate::accounts::command::remove_account_cmd::{RemoveAccountCommand, RemoveAccountCommandRequest};
    use crate::accounts::domain::service::AccountServiceImpl;
    use crate::accounts::repository::testing::FakeAccountRepository;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;
    use crate::core::library::AccountRole;

    fn build_account_service(repo: FakeAccountRepository) -> Box<AccountServiceImpl> {
        Box::new(AccountServiceImpl::new(&Configuration::new("test"), Box::new(repo)))
    }

    #[tokio::test]
    async fn test_should_run_remove_account() {
        let repo = FakeAccountRepository::new();
        let add_cmd = AddAccountCommand::new(build_account_service(repo.clone()));
        let remove_cmd = RemoveAccountCommand::new(build_account_service(repo));

        let added = add_cmd.execute(AddAccountCommandRequest::new(AccountRole::Student, "student@campus.edu"))
            .await.expect("should add account");
        let _ = remove_cmd.execute(RemoveAccountCommandRequest { account_id: added.account.account_id.to_string() })
            .await.expect("should remove account");
    }
}
