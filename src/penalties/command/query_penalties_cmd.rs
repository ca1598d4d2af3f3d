use std::collections::HashMap;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::penalties::domain::PenaltyService;
use crate::penalties::dto::PenaltyDto;

// penalty ledger reporting view: all penalties or only the outstanding ones,
// optionally narrowed to one user
pub(crate) struct QueryPenaltiesCommand {
    penalty_service: Box<dyn PenaltyService>,
}

impl QueryPenaltiesCommand {
    pub(crate) fn new(penalty_service: Box<dyn PenaltyService>) -> Self {
        Self {
            penalty_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct QueryPenaltiesCommandRequest {
    pub(crate) user_id: Option<String>,
    pub(crate) unpaid_only: Option<bool>,
    pub(crate) page: Option<String>,
    pub(crate) page_size: Option<usize>,
}

impl QueryPenaltiesCommandRequest {
    fn build_predicate(&self) -> HashMap<String, String> {
        let mut predicate = HashMap::new();
        if let Some(user_id) = &self.user_id {
            predicate.insert("user_id".to_string(), user_id.to_string());
        }
        predicate
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct QueryPenaltiesCommandResponse {
    pub penalties: Vec<PenaltyDto>,
    pub next_page: Option<String>,
}

impl QueryPenaltiesCommandResponse {
    pub fn new(penalties: Vec<PenaltyDto>, next_page: Option<String>) -> Self {
        Self {
            penalties,
            next_page,
        }
    }
}

#[async_trait]
impl Command<QueryPenaltiesCommandRequest, QueryPenaltiesCommandResponse> for QueryPenaltiesCommand {
    async fn execute(&self, req: QueryPenaltiesCommandRequest) -> Result<QueryPenaltiesCommandResponse, CommandError> {
        let predicate = req.build_predicate();
        let page_size = req.page_size.unwrap_or(50);
        let res = if req.unpaid_only.unwrap_or(false) {
            self.penalty_service.query_unpaid(&predicate, req.page.as_deref(), page_size).await
        } else {
            self.penalty_service.query_penalties(&predicate, req.page.as_deref(), page_size).await
        };
        res.map_err(CommandError::from)
            .map(|res| QueryPenaltiesCommandResponse::new(res.records, res.next_page))
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;
    use crate::gateway::testing::NoopPublisher;
    use crate::penalties::command::query_penalties_cmd::{QueryPenaltiesCommand, QueryPenaltiesCommandRequest};
    use crate::penalties::domain::service::PenaltyServiceImpl;
    use crate::penalties::domain::PenaltyService;
    use crate::penalties::dto::PenaltyDto;
    use crate::penalties::repository::testing::FakePenaltyRepository;

    fn build_penalty_service(repo: FakePenaltyRepository) -> Box<PenaltyServiceImpl> {
        Box::new(PenaltyServiceImpl::new(&Configuration::new("test"),
                                         Box::new(repo), Box::new(NoopPublisher {})))
    }

    #[tokio::test]
    async fn test_should_run_query_penalties() {
        let repo = FakePenaltyRepository::new();
        let svc = build_penalty_service(repo.clone());
        let query_cmd = QueryPenaltiesCommand::new(build_penalty_service(repo));

        let now = Utc::now().naive_utc();
        let first = PenaltyDto::new("r1", "u1", "b1", now, now, 1, 10);
        let second = PenaltyDto::new("r2", "u1", "b2", now, now, 2, 20);
        let _ = svc.record_penalty(&first).await.expect("should record penalty");
        let _ = svc.record_penalty(&second).await.expect("should record penalty");
        let _ = svc.pay_penalty(first.penalty_id.as_str()).await.expect("should pay penalty");

        let all = query_cmd.execute(QueryPenaltiesCommandRequest {
            user_id: Some("u1".to_string()), unpaid_only: None, page: None, page_size: None,
        }).await.expect("should query penalties");
        assert_eq!(2, all.penalties.len());

        let unpaid = query_cmd.execute(QueryPenaltiesCommandRequest {
            user_id: Some("u1".to_string()), unpaid_only: Some(true), page: None, page_size: None,
        }).await.expect("should query penalties");
        assert_eq!(1, unpaid.penalties.len());
        assert_eq!(second.penalty_id, unpaid.penalties[0].penalty_id);
    }
}
