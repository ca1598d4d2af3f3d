use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::rentals::domain::RentalService;
use crate::rentals::dto::RentalDto;

pub(crate) struct ApproveRentalCommand {
    rental_service: Box<dyn RentalService>,
}

impl ApproveRentalCommand {
    pub(crate) fn new(rental_service: Box<dyn RentalService>) -> Self {
        Self {
            rental_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApproveRentalCommandRequest {
    // filled from the request path
    #[serde(default)]
    pub(crate) rental_id: String,
    pub(crate) officer_id: String,
}

impl ApproveRentalCommandRequest {
    pub fn new(rental_id: &str, officer_id: &str) -> Self {
        Self {
            rental_id: rental_id.to_string(),
            officer_id: officer_id.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct ApproveRentalCommandResponse {
    pub rental: RentalDto,
}

impl ApproveRentalCommandResponse {
    pub fn new(rental: RentalDto) -> Self {
        Self {
            rental,
        }
    }
}

#[async_trait]
impl Command<ApproveRentalCommandRequest, ApproveRentalCommandResponse> for ApproveRentalCommand {
    async fn execute(&self, req: ApproveRentalCommandRequest) -> Result<ApproveRentalCommandResponse, CommandError> {
        self.rental_service.approve(req.rental_id.as_str(), req.officer_id.as_str())
            .await.map_err(CommandError::from).map(ApproveRentalCommandResponse::new)
    }
}
