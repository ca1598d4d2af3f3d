use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::core::library::TaxonomyKind;
use crate::taxonomy::domain::TaxonomyService;
use crate::taxonomy::dto::TaxonomyDto;

pub(crate) struct QueryTaxonomyCommand {
    taxonomy_service: Box<dyn TaxonomyService>,
}

impl QueryTaxonomyCommand {
    pub(crate) fn new(taxonomy_service: Box<dyn TaxonomyService>) -> Self {
        Self {
            taxonomy_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct QueryTaxonomyCommandRequest {
    pub(crate) kind: TaxonomyKind,
    pub(crate) page: Option<String>,
    pub(crate) page_size: Option<usize>,
}

#[derive(Debug, Serialize)]
pub(crate) struct QueryTaxonomyCommandResponse {
    pub taxonomies: Vec<TaxonomyDto>,
    pub next_page: Option<String>,
}

impl QueryTaxonomyCommandResponse {
    pub fn new(taxonomies: Vec<TaxonomyDto>, next_page: Option<String>) -> Self {
        Self {
            taxonomies,
            next_page,
        }
    }
}

#[async_trait]
impl Command<QueryTaxonomyCommandRequest, QueryTaxonomyCommandResponse> for QueryTaxonomyCommand {
    async fn execute(&self, req: QueryTaxonomyCommandRequest) -> Result<QueryTaxonomyCommandResponse, CommandError> {
        let page_size = req.page_size.unwrap_or(50);
        self.taxonomy_service.query_by_kind(req.kind, req.page.as_deref(), page_size)
            .await.map_err(CommandError::from)
            .map(|res| QueryTaxonomyCommandResponse::new(res.records, res.next_page))
    }
}

#[cfg(test)]
mod tests {
    use crate::core::command::Command;
    use crate::core::domain::Configuration;
    use crate::core::library::TaxonomyKind;
    use crate::gateway::testing::NoopPublisher;
    use crate::taxonomy::command::add_taxonomy_cmd::{AddTaxonomyCommand, AddTaxonomyCommandRequest};
    use crate::taxonomy::command::query_taxonomy_cmd::{QueryTaxonomyCommand, QueryTaxonomyCommandRequest};
    use crate::taxonomy::domain::service::TaxonomyServiceImpl;
    use crate::taxonomy::repository::testing::FakeTaxonomyRepository;

    fn build_taxonomy_service(repo: FakeTaxonomyRepository) -> Box<TaxonomyServiceImpl> {
        Box::new(TaxonomyServiceImpl::new(&Configuration::new("test"),
                                          Box::new(repo), Box::new(NoopPublisher {})))
    }

    #[tokio::test]
    async fn test_should_run_query_taxonomy() {
        let repo = FakeTaxonomyRepository::new();
        let add_cmd = AddTaxonomyCommand::new(build_taxonomy_service(repo.clone()));
        let query_cmd = QueryTaxonomyCommand::new(build_taxonomy_service(repo));

        let _ = add_cmd.execute(AddTaxonomyCommandRequest::new(TaxonomyKind::Category, "fiction"))
            .await.expect("should add taxonomy");
        let _ = add_cmd.execute(AddTaxonomyCommandRequest::new(TaxonomyKind::Category, "poetry"))
            .await.expect("should add taxonomy");
        let _ = add_cmd.execute(AddTaxonomyCommandRequest::new(TaxonomyKind::Author, "Franz Kafka"))
            .await.expect("should add taxonomy");

        let res = query_cmd.execute(QueryTaxonomyCommandRequest {
            kind: TaxonomyKind::Category, page: None, page_size: None,
        }).await.expect("should query taxonomy");
        assert_eq!(2, res.taxonomies.len());
    }
}
