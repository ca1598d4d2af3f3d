pub mod model;
pub mod service;

use async_trait::async_trait;
use crate::accounts::dto::AccountDto;
use crate::core::library::{AccountRole, LibraryResult, PaginatedResult};

#[async_trait]
pub(crate) trait AccountService: Sync + Send {
    async fn add_account(&self, account: &AccountDto) -> LibraryResult<()>;
    async fn update_account(&self, account: &AccountDto) -> LibraryResult<()>;
    async fn remove_account(&self, id: &str) -> LibraryResult<()>;
    async fn find_account_by_id(&self, id: &str) -> LibraryResult<AccountDto>;
    // resolves the role in the same query, whichever role the email carries
    async fn find_account_by_email(&self, email: &str) -> LibraryResult<Vec<AccountDto>>;
    async fn query_by_role(&self, role: AccountRole,
                           page: Option<&str>, page_size: usize) -> LibraryResult<PaginatedResult<AccountDto>>;
}
