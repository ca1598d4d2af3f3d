use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::core::library::TaxonomyKind;
use crate::taxonomy::domain::TaxonomyService;
use crate::taxonomy::dto::TaxonomyDto;

pub(crate) struct UpdateTaxonomyCommand {
    taxonomy_service: Box<dyn TaxonomyService>,
}

impl UpdateTaxonomyCommand {
    pub(crate) fn new(taxonomy_service: Box<dyn TaxonomyService>) -> Self {
        Self {
            taxonomy_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct UpdateTaxonomyCommandRequest {
    // filled from the request path
    #[serde(default)]
    pub taxonomy_id: String,
    pub version: i64,
    pub kind: TaxonomyKind,
    pub name: String,
    pub description: Option<String>,
}

impl UpdateTaxonomyCommandRequest {
    pub fn new(taxonomy_id: &str, version: i64, kind: TaxonomyKind, name: &str) -> Self {
        Self {
            taxonomy_id: taxonomy_id.to_string(),
            version,
            kind,
            name: name.to_string(),
            description: None,
        }
    }

    pub fn build_taxonomy(&self) -> TaxonomyDto {
        TaxonomyDto {
            taxonomy_id: self.taxonomy_id.to_string(),
            version: self.version,
            kind: self.kind,
            name: self.name.to_string(),
            description: self.description.clone(),
            created_at: Utc::now().naive_utc(),
            updated_at: Utc::now().naive_utc(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct UpdateTaxonomyCommandResponse {
    pub taxonomy: TaxonomyDto,
}

impl UpdateTaxonomyCommandResponse {
    pub fn new(taxonomy: TaxonomyDto) -> Self {
        Self {
            taxonomy,
        }
    }
}

#[async_trait]
impl Command<UpdateTaxonomyCommandRequest, UpdateTaxonomyCommandResponse> for UpdateTaxonomyCommand {
    async fn execute(&self, req: UpdateTaxonomyCommandRequest) -> Result<UpdateTaxonomyCommandResponse, CommandError> {
        let taxonomy = req.build_taxonomy();
        self.taxonomy_service.update_taxonomy(&taxonomy).await.map_err(CommandError::from).map(|_| UpdateTaxonomyCommandResponse::new(taxonomy))
    }
}
