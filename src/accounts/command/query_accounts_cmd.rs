use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::accounts::domain::AccountService;
use crate::accounts::dto::AccountDto;
use crate::core::command::{Command, CommandError};
use crate::core::library::AccountRole;

// staff dashboard listing: accounts by role, or a single email lookup
pub(crate) struct QueryAccountsCommand {
    account_service: Box<dyn AccountService>,
}

impl QueryAccountsCommand {
    pub(crate) fn new(account_service: Box<dyn AccountService>) -> Self {
        Self {
            account_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct QueryAccountsCommandRequest {
    pub(crate) role: Option<AccountRole>,
    pub(crate) email: Option<String>,
    pub(crate) page: Option<String>,
    pub(crate) page_size: Option<usize>,
}

#[derive(Debug, Serialize)]
pub(crate) struct QueryAccountsCommandResponse {
    pub accounts: Vec<AccountDto>,
    pub next_page: Option<String>,
}

impl QueryAccountsCommandResponse {
    pub fn new(accounts: Vec<AccountDto>, next_page: Option<String>) -> Self {
        Self {
            accounts,
            next_page,
        }
    }
}

#[async_trait]
impl Command<QueryAccountsCommandRequest, QueryAccountsCommandResponse> for QueryAccountsCommand {
    async fn execute(&self, req: QueryAccountsCommandRequest) -> Result<QueryAccountsCommandResponse, CommandError> {
        if let Some(email) = &req.email {
            return self.account_service.find_account_by_email(email.as_str())
                .await.map_err(CommandError::from)
                .map(|accounts| QueryAccountsCommandResponse::new(accounts, None));
        }
        let role = req.role.unwrap_or(AccountRole::Student);
        let page_size = req.page_size.unwrap_or(50);
        self.account_service.query_by_role(role, req.page.as_deref(), page_size)
            .await.map_err(CommandError::from)
            .map(|res| QueryAccountsCommandResponse::new(res.records, res.next_page))
    }
}
