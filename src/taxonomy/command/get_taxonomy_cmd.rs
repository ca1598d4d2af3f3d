use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::taxonomy::domain::TaxonomyService;
use crate::taxonomy::dto::TaxonomyDto;

pub(crate) struct GetTaxonomyCommand {
    taxonomy_service: Box<dyn TaxonomyService>,
}

impl GetTaxonomyCommand {
    pub(crate) fn new(taxonomy_service: Box<dyn TaxonomyService>) -> Self {
        Self {
            taxonomy_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct GetTaxonomyCommandRequest {
    pub(crate) taxonomy_id: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct GetTaxonomyCommandResponse {
    pub taxonomy: TaxonomyDto,
}

impl GetTaxonomyCommandResponse {
    pub fn new(taxonomy: TaxonomyDto) -> Self {
        Self {
            taxonomy,
        }
    }
}

#[async_trait]
impl Command<GetTaxonomyCommandRequest, GetTaxonomyCommandResponse> for GetTaxonomyCommand {
    async fn execute(&self, req: GetTaxonomyCommandRequest) -> Result<GetTaxonomyCommandResponse, CommandError> {
        self.taxonomy_service.find_taxonomy_by_id(req.taxonomy_id.as_str())
            .await.map_err(CommandError::from).map(GetTaxonomyCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::core::library::TaxonomyKind;
    use crate::gateway::testing::NoopPublisher;
    use crate::taxonomy::command::add_taxonomy_cmd::{AddTaxonomyCommand, AddTaxonomyCommandRequest};
    use crate::taxonomy::command::get_taxonomy_cmd::{GetTaxonomyCommand, GetTaxonomyCommandRequest};
    use crate::taxonomy::domain::service::TaxonomyServiceImpl;
    use crate::taxonomy::repository::testing::FakeTaxonomyRepository;

    fn build_taxonomy_service(repo: FakeTaxonomyRepository) -> Box<TaxonomyServiceImpl> {
        Box::new(TaxonomyServiceImpl::new(&Configuration::new("test"),
                                          Box::new(repo), Box::new(NoopPublisher {})))
    }

    #[tokio::test]
    async fn test_should_run_get_taxonomy() {
        let repo = FakeTaxonomyRepository::new();
        let add_cmd = AddTaxonomyCommand::new(build_taxonomy_service(repo.clone()));
        let get_cmd = GetTaxonomyCommand::new(build_taxonomy_service(repo));

        let added = add_cmd.execute(AddTaxonomyCommandRequest::new(TaxonomyKind::Shelf, "east wing A3"))
            .await.expect("should add taxonomy");
        let res = get_cmd.execute(GetTaxonomyCommandRequest { taxonomy_id: added.taxonomy.taxonomy_id.to_string() })
            .await.expect("should get taxonomy");
        assert_eq!(added.taxonomy.taxonomy_id, res.taxonomy.taxonomy_id);
    }

    #[tokio::test]
    async fn test_should_fail_unknown_taxonomy() {
        let get_cmd = GetTaxonomyCommand::new(build_taxonomy_service(FakeTaxonomyRepository::new()));

        let res = get_cmd.execute(GetTaxonomyCommandRequest { taxonomy_id: "missing".to_string() }).await;
        assert!(matches!(res, Err(CommandError::NotFound { message: _ })));
    }
}
