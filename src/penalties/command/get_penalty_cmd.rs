use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::penalties::domain::PenaltyService;
use crate::penalties::dto::PenaltyDto;

pub(crate) struct GetPenaltyCommand {
    penalty_service: Box<dyn PenaltyService>,
}

impl GetPenaltyCommand {
    pub(crate) fn new(penalty_service: Box<dyn PenaltyService>) -> Self {
        Self {
            penalty_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct GetPenaltyCommandRequest {
    pub(crate) penalty_id: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct GetPenaltyCommandResponse {
    pub penalty: PenaltyDto,
}

impl GetPenaltyCommandResponse {
    pub fn new(penalty: PenaltyDto) -> Self {
        Self {
            penalty,
        }
    }
}

#[async_trait]
impl Command<GetPenaltyCommandRequest, GetPenaltyCommandResponse> for GetPenaltyCommand {
    async fn execute(&self, req: GetPenaltyCommandRequest) -> Result<GetPenaltyCommandResponse, CommandError> {
        self.penalty_service.find_penalty_by_id(req.penalty_id.as_str())
            .await.map_err(CommandError::from).map(GetPenaltyCommandResponse::new)
    }
}
