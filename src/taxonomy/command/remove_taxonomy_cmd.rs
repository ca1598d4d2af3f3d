use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::taxonomy::domain::TaxonomyService;

pub(crate) struct RemoveTaxonomyCommand {
    taxonomy_service: Box<dyn TaxonomyService>,
}

impl RemoveTaxonomyCommand {
    pub(crate) fn new(taxonomy_service: Box<dyn TaxonomyService>) -> Self {
        Self {
            taxonomy_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RemoveTaxonomyCommandRequest {
    pub(crate) taxonomy_id: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct RemoveTaxonomyCommandResponse {
}

impl RemoveTaxonomyCommandResponse {
    pub fn new() -> Self {
        Self {
        }
    }
}

#[async_trait]
impl Command<RemoveTaxonomyCommandRequest, RemoveTaxonomyCommandResponse> for RemoveTaxonomyCommand {
    async fn execute(&self, req: RemoveTaxonomyCommandRequest) -> Result<RemoveTaxonomyCommandResponse, CommandError> {
        self.taxonomy_service.remove_taxonomy(req.taxonomy_id.as_str())
            .await.map_err(CommandError::from).map(|_| RemoveTaxonomyCommandResponse::new())
    }
}
