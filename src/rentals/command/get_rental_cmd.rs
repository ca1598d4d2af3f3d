use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::rentals::domain::RentalService;
use crate::rentals::dto::RentalDto;

pub(crate) struct GetRentalCommand {
    rental_service: Box<dyn RentalService>,
}

impl GetRentalCommand {
    pub(crate) fn new(rental_service: Box<dyn RentalService>) -> Self {
        Self {
            rental_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct GetRentalCommandRequest {
    pub(crate) rental_id: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct GetRentalCommandResponse {
    pub rental: RentalDto,
}

impl GetRentalCommandResponse {
    pub fn new(rental: RentalDto) -> Self {
        Self {
            rental,
        }
    }
}

#[async_trait]
impl Command<GetRentalCommandRequest, GetRentalCommandResponse> for GetRentalCommand {
    async fn execute(&self, req: GetRentalCommandRequest) -> Result<GetRentalCommandResponse, CommandError> {
        self.rental_service.find_rental_by_id(req.rental_id.as_str())
            .await.map_err(CommandError::from).map(GetRentalCommandResponse::new)
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
    use crate::core::library::AccountRole;
    use crate::core::repository::Repository;
    use crate::gateway::testing::NoopPublisher;
    use crate::penalties::domain::service::PenaltyServiceImpl;
    use crate::penalties::repository::testing::FakePenaltyRepository;
    use crate::rentals::command::get_rental_cmd::{GetRentalCommand, GetRentalCommandRequest};
    use crate::rentals::domain::model::RentalEntity;
    use crate::rentals::domain::service::RentalServiceImpl;
    use crate::rentals::repository::testing::FakeRentalRepository;

    fn build_rental_service(rental_repo: FakeRentalRepository) -> Box<RentalServiceImpl> {
        let config = Configuration::new("test");
        let student = AccountEntity::new(AccountRole::Student, "student@campus.edu");
        let account_svc = AccountServiceImpl::new(&config,
                                                  Box::new(FakeAccountRepository::with(vec![student])));
        let penalty_svc = PenaltyServiceImpl::new(&config,
                                                  Box::new(FakePenaltyRepository::new()), Box::new(NoopPublisher {}));
        Box::new(RentalServiceImpl::new(&config,
                                        Box::new(rental_repo),
                                        Box::new(FakeBookRepository::with(vec![BookEntity::new("t", 1, 1)])),
                                        Box::new(account_svc),
                                        Box::new(penalty_svc),
                                        Box::new(NoopPublisher {})))
    }

    #[tokio::test]
    async fn test_should_run_get_rental() {
        let rental_repo = FakeRentalRepository::new();
        let rental = RentalEntity::new("user1", "book1", 7);
        let _ = rental_repo.create(&rental).await.expect("should create rental");
        let get_cmd = GetRentalCommand::new(build_rental_service(rental_repo));

        let res = get_cmd.execute(GetRentalCommandRequest { rental_id: rental.rental_id.to_string() })
            .await.expect("should get rental");
        assert_eq!(rental.rental_id, res.rental.rental_id);
    }

    #[tokio::test]
    async fn test_should_fail_unknown_rental() {
        let get_cmd = GetRentalCommand::new(build_rental_service(FakeRentalRepository::new()));

        let res = get_cmd.execute(GetRentalCommandRequest { rental_id: "missing".to_string() }).await;
        assert!(matches!(res, Err(CommandError::NotFound { message: _ })));
    }
}
