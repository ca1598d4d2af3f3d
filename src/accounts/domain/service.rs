use async_trait::async_trait;
use crate::accounts::domain::model::AccountEntity;
use crate::accounts::domain::AccountService;
use crate::accounts::dto::AccountDto;
use crate::accounts::repository::AccountRepository;
use crate::core::domain::Configuration;
use crate::core::library::{AccountRole, LibraryResult, PaginatedResult};

pub(crate) struct AccountServiceImpl {
    account_repository: Box<dyn AccountRepository>,
}

impl AccountServiceImpl {
    pub(crate) fn new(_config: &Configuration, account_repository: Box<dyn AccountRepository>) -> Self {
        AccountServiceImpl {
            account_repository,
        }
    }
}

#[async_trait]
impl AccountService for AccountServiceImpl {
    async fn add_account(&self, account: &AccountDto) -> LibraryResult<()> {
        self.account_repository.create(&AccountEntity::from(account)).await.map(|_| ())
    }

    async fn update_account(&self, account: &AccountDto) -> LibraryResult<()> {
        self.account_repository.update(&AccountEntity::from(account)).await.map(|_| ())
    }

    async fn remove_account(&self, id: &str) -> LibraryResult<()> {
        self.account_repository.delete(id).await.map(|_| ())
    }

    async fn find_account_by_id(&self, id: &str) -> LibraryResult<AccountDto> {
        self.account_repository.get(id).await.map(|a| AccountDto::from(&a))
    }

    async fn find_account_by_email(&self, email: &str) -> LibraryResult<Vec<AccountDto>> {
        let res = self.account_repository.find_by_email(email).await?;
        Ok(res.iter().map(AccountDto::from).collect())
    }

    async fn query_by_role(&self, role: AccountRole,
                           page: Option<&str>, page_size: usize) -> LibraryResult<PaginatedResult<AccountDto>> {
        let res = self.account_repository.find_by_role(role, page, page_size).await?;
        let records = res.records.iter().map(AccountDto::from).collect();
        Ok(PaginatedResult::new(page, page_size, res.next_page, records))
    }
}

impl From<&AccountEntity> for AccountDto {
    fn from(other: &AccountEntity) -> Self {
        Self {
            account_id: other.account_id.to_string(),
            version: other.version,
            role: other.role,
            email: other.email.to_string(),
            first_name: other.first_name.to_string(),
            last_name: other.last_name.to_string(),
            student_number: other.student_number.clone(),
            phone: other.phone.clone(),
            created_at: other.created_at,
            updated_at: other.updated_at,
        }
    }
}

impl From<&AccountDto> for AccountEntity {
    fn from(other: &AccountDto) -> Self {
        Self {
            account_id: other.account_id.to_string(),
            version: other.version,
            role: other.role,
            email: other.email.to_string(),
            first_name: other.first_name.to_string(),
            last_name: other.last_name.to_string(),
            student_number: other.student_number.clone(),
            phone: other.phone.clone(),
            created_at: other.created_at,
            updated_at: other.updated_at,
        }
    }
}
