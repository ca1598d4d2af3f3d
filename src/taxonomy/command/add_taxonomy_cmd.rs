use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::core::library::TaxonomyKind;
use crate::taxonomy::domain::TaxonomyService;
use crate::taxonomy::dto::TaxonomyDto;

pub(crate) struct AddTaxonomyCommand {
    taxonomy_service: Box<dyn TaxonomyService>,
}

impl AddTaxonomyCommand {
    pub(crate) fn new(taxonomy_service: Box<dyn TaxonomyService>) -> Self {
        Self {
            taxonomy_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct AddTaxonomyCommandRequest {
    pub(crate) kind: TaxonomyKind,
    pub(crate) name: String,
    pub(crate) description: Option<String>,
}

impl AddTaxonomyCommandRequest {
    pub fn new(kind: TaxonomyKind, name: &str) -> Self {
        Self {
            kind,
            name: name.to_string(),
            description: None,
        }
    }

    pub fn build_taxonomy(&self) -> TaxonomyDto {
        let mut taxonomy = TaxonomyDto::new(self.kind, self.name.as_str());
        taxonomy.description = self.description.clone();
        taxonomy
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct AddTaxonomyCommandResponse {
    pub taxonomy: TaxonomyDto,
}

impl AddTaxonomyCommandResponse {
    pub fn new(taxonomy: TaxonomyDto) -> Self {
        Self {
            taxonomy,
        }
    }
}

#[async_trait]
impl Command<AddTaxonomyCommandRequest, AddTaxonomyCommandResponse> for AddTaxonomyCommand {
    async fn execute(&self, req: AddTaxonomyCommandRequest) -> Result<AddTaxonomyCommandResponse, CommandError> {
        let taxonomy = req.build_taxonomy();
        self.taxonomy_service.add_taxonomy(&taxonomy).await.map_err(CommandError::from).map(|_| AddTaxonomyCommandResponse::new(taxonomy))
    }
}

#[cfg(test)]
mod tests {
    use crate::core::command::Command;
    use crate::core::domain::Configuration;
    use crate::core::library::TaxonomyKind;
    use crate::gateway::testing::NoopPublisher;
    use crate::taxonomy::command::add_taxonomy_cmd::{AddTaxonomyCommand, AddTaxonomyCommandRequest};
    use crate::taxonomy::domain::service::TaxonomyServiceImpl;
    use crate::taxonomy::repository::testing::FakeTaxonomyRepository;

    #[tokio::test]
    async fn test_should_run_add_taxonomy() {
        let svc = TaxonomyServiceImpl::new(&Configuration::new("test"),
                                           Box::new(FakeTaxonomyRepository::new()), Box::new(NoopPublisher {}));
        let cmd = AddTaxonomyCommand::new(Box::new(svc));

        let res = cmd.execute(AddTaxonomyCommandRequest::new(TaxonomyKind::Author, "Franz Kafka"))
            .await.expect("should add taxonomy");
        assert_eq!("Franz Kafka", res.taxonomy.name.as_str());
        assert_eq!(TaxonomyKind::Author, res.taxonomy.kind);
    }
}
