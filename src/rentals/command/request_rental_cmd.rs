use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::rentals::domain::RentalService;
use crate::rentals::dto::RentalDto;

pub(crate) struct RequestRentalCommand {
    rental_service: Box<dyn RentalService>,
}

impl RequestRentalCommand {
    pub(crate) fn new(rental_service: Box<dyn RentalService>) -> Self {
        Self {
            rental_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RequestRentalCommandRequest {
    pub(crate) user_id: String,
    pub(crate) book_id: String,
    pub(crate) days: i64,
}

impl RequestRentalCommandRequest {
    pub fn new(user_id: &str, book_id: &str, days: i64) -> Self {
        Self {
            user_id: user_id.to_string(),
            book_id: book_id.to_string(),
            days,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct RequestRentalCommandResponse {
    pub rental: RentalDto,
}

impl RequestRentalCommandResponse {
    pub fn new(rental: RentalDto) -> Self {
        Self {
            rental,
        }
    }
}

#[async_trait]
impl Command<RequestRentalCommandRequest, RequestRentalCommandResponse> for RequestRentalCommand {
    async fn execute(&self, req: RequestRentalCommandRequest) -> Result<RequestRentalCommandResponse, CommandError> {
        self.rental_service.request(req.user_id.as_str(), req.book_id.as_str(), req.days)
            .await.map_err(CommandError::from).map(RequestRentalCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::accounts::domain::model::AccountEntity;
    use crate::accounts::domain::service::AccountServiceImpl;
    use crate::accounts::repository::testing::FakeAccountRepository;
    use crate::books::domain::model::BookEntity;
    use crate::books::repository::testing::FakeBookRepository;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::core::library::{AccountRole, RentalStatus};
    use crate::gateway::testing::NoopPublisher;
    use crate::penalties::domain::service::PenaltyServiceImpl;
    use crate::penalties::repository::testing::FakePenaltyRepository;
    use crate::rentals::command::request_rental_cmd::{RequestRentalCommand, RequestRentalCommandRequest};
    use crate::rentals::domain::service::RentalServiceImpl;
    use crate::rentals::repository::testing::FakeRentalRepository;

    fn build_rental_service(book: &BookEntity, student: &AccountEntity) -> Box<RentalServiceImpl> {
        let config = Configuration::new("test");
        let account_svc = AccountServiceImpl::new(&config,
                                                  Box::new(FakeAccountRepository::with(vec![student.clone()])));
        let penalty_svc = PenaltyServiceImpl::new(&config,
                                                  Box::new(FakePenaltyRepository::new()), Box::new(NoopPublisher {}));
        Box::new(RentalServiceImpl::new(&config,
                                        Box::new(FakeRentalRepository::new()),
                                        Box::new(FakeBookRepository::with(vec![book.clone()])),
                                        Box::new(account_svc),
                                        Box::new(penalty_svc),
                                        Box::new(NoopPublisher {})))
    }

    #[tokio::test]
    async fn test_should_run_request_rental() {
        let student = AccountEntity::new(AccountRole::Student, "student@campus.edu");
        let book = BookEntity::new("the trial", 255, 2);
        let cmd = RequestRentalCommand::new(build_rental_service(&book, &student));

        let res = cmd.execute(RequestRentalCommandRequest::new(
            student.account_id.as_str(), book.book_id.as_str(), 14))
            .await.expect("should request rental");
        assert_eq!(RentalStatus::Pending, res.rental.rental_status);
        assert_eq!(student.account_id, res.rental.user_id);
    }

    #[tokio::test]
    async fn test_should_reject_invalid_duration() {
        let student = AccountEntity::new(AccountRole::Student, "student@campus.edu");
        let book = BookEntity::new("the trial", 255, 2);
        let cmd = RequestRentalCommand::new(build_rental_service(&book, &student));

        let res = cmd.execute(RequestRentalCommandRequest::new(
            student.account_id.as_str(), book.book_id.as_str(), 45)).await;
        assert!(matches!(res, Err(CommandError::Validation { message: _, reason_code: _ })));
    }
}
