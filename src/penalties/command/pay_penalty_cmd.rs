use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::penalties::domain::PenaltyService;
use crate::penalties::dto::PenaltyDto;

pub(crate) struct PayPenaltyCommand {
    penalty_service: Box<dyn PenaltyService>,
}

impl PayPenaltyCommand {
    pub(crate) fn new(penalty_service: Box<dyn PenaltyService>) -> Self {
        Self {
            penalty_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct PayPenaltyCommandRequest {
    pub(crate) penalty_id: String,
}

impl PayPenaltyCommandRequest {
    pub fn new(penalty_id: &str) -> Self {
        Self {
            penalty_id: penalty_id.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct PayPenaltyCommandResponse {
    pub penalty: PenaltyDto,
}

impl PayPenaltyCommandResponse {
    pub fn new(penalty: PenaltyDto) -> Self {
        Self {
            penalty,
        }
    }
}

#[async_trait]
impl Command<PayPenaltyCommandRequest, PayPenaltyCommandResponse> for PayPenaltyCommand {
    async fn execute(&self, req: PayPenaltyCommandRequest) -> Result<PayPenaltyCommandResponse, CommandError> {
        self.penalty_service.pay_penalty(req.penalty_id.as_str())
            .await.map_err(CommandError::from).map(PayPenaltyCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::gateway::testing::NoopPublisher;
    use crate::penalties::command::pay_penalty_cmd::{PayPenaltyCommand, PayPenaltyCommandRequest};
    use crate::penalties::domain::service::PenaltyServiceImpl;
    use crate::penalties::domain::PenaltyService;
    use crate::penalties::dto::PenaltyDto;
    use crate::penalties::repository::testing::FakePenaltyRepository;

    fn build_penalty_service(repo: FakePenaltyRepository) -> Box<PenaltyServiceImpl> {
        Box::new(PenaltyServiceImpl::new(&Configuration::new("test"),
                                         Box::new(repo), Box::new(NoopPublisher {})))
    }

    #[tokio::test]
    async fn test_should_run_pay_penalty() {
        let repo = FakePenaltyRepository::new();
        let svc = build_penalty_service(repo.clone());
        let pay_cmd = PayPenaltyCommand::new(build_penalty_service(repo));

        let now = Utc::now().naive_utc();
        let penalty = PenaltyDto::new("r1", "u1", "b1", now, now, 3, 30);
        let _ = svc.record_penalty(&penalty).await.expect("should record penalty");

        let res = pay_cmd.execute(PayPenaltyCommandRequest::new(penalty.penalty_id.as_str()))
            .await.expect("should pay penalty");
        assert!(res.penalty.paid);

        let again = pay_cmd.execute(PayPenaltyCommandRequest::new(penalty.penalty_id.as_str())).await;
        assert!(matches!(again, Err(CommandError::Validation { message: _, reason_code: _ })));
    }
}
