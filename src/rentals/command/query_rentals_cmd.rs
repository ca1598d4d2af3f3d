use std::collections::HashMap;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::core::library::RentalStatus;
use crate::rentals::domain::RentalService;
use crate::rentals::dto::RentalDto;

// rental reporting view: by status and user, or only the overdue ones
pub(crate) struct QueryRentalsCommand {
    rental_service: Box<dyn RentalService>,
}

impl QueryRentalsCommand {
    pub(crate) fn new(rental_service: Box<dyn RentalService>) -> Self {
        Self {
            rental_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct QueryRentalsCommandRequest {
    pub(crate) rental_status: Option<RentalStatus>,
    pub(crate) user_id: Option<String>,
    pub(crate) overdue_only: Option<bool>,
    pub(crate) page: Option<String>,
    pub(crate) page_size: Option<usize>,
}

impl QueryRentalsCommandRequest {
    fn build_predicate(&self) -> HashMap<String, String> {
        let mut predicate = HashMap::new();
        if let Some(status) = &self.rental_status {
            predicate.insert("rental_status".to_string(), status.to_string());
        }
        if let Some(user_id) = &self.user_id {
            predicate.insert("user_id".to_string(), user_id.to_string());
        }
        predicate
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct QueryRentalsCommandResponse {
    pub rentals: Vec<RentalDto>,
    pub next_page: Option<String>,
}

impl QueryRentalsCommandResponse {
    pub fn new(rentals: Vec<RentalDto>, next_page: Option<String>) -> Self {
        Self {
            rentals,
            next_page,
        }
    }
}

#[async_trait]
impl Command<QueryRentalsCommandRequest, QueryRentalsCommandResponse> for QueryRentalsCommand {
    async fn execute(&self, req: QueryRentalsCommandRequest) -> Result<QueryRentalsCommandResponse, CommandError> {
        let predicate = req.build_predicate();
        let page_size = req.page_size.unwrap_or(50);
        let res = if req.overdue_only.unwrap_or(false) {
            self.rental_service.query_overdue(&predicate, req.page.as_deref(), page_size).await
        } else {
            self.rental_service.query_rentals(&predicate, req.page.as_deref(), page_size).await
        };
        res.map_err(CommandError::from)
            .map(|res| QueryRentalsCommandResponse::new(res.records, res.next_page))
    }
}
