use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::accounts::domain::AccountService;
use crate::accounts::dto::AccountDto;
use crate::core::command::{Command, CommandError};

pub(crate) struct GetAccountCommand {
    account_service: Box<dyn AccountService>,
}

impl GetAccountCommand {
    pub(crate) fn new(account_service: Box<dyn AccountService>) -> Self {
        Self {
            account_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct GetAccountCommandRequest {
    pub(crate) account_id: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct GetAccountCommandResponse {
    pub account: AccountDto,
}

impl GetAccountCommandResponse {
    pub fn new(account: AccountDto) -> Self {
        Self {
            account,
        }
    }
}

#[async_trait]
impl Command<GetAccountCommandRequest, GetAccountCommandResponse> for GetAccountCommand {
    async fn execute(&self, req: GetAccountCommandRequest) -> Result<GetAccountCommandResponse, CommandError> {
        self.account_service.find_account_by_id(req.account_id.as_str())
            .await.map_err(CommandError::from).map(GetAccountCommandResponse::new)
    }
}
