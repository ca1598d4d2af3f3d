use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use crate::core::command::Command;
use crate::core::controller::{AppState, ServerError};
use crate::penalties::command::get_penalty_cmd::{GetPenaltyCommand, GetPenaltyCommandRequest, GetPenaltyCommandResponse};
use crate::penalties::command::pay_penalty_cmd::{PayPenaltyCommand, PayPenaltyCommandRequest, PayPenaltyCommandResponse};
use crate::penalties::command::query_penalties_cmd::{QueryPenaltiesCommand, QueryPenaltiesCommandRequest, QueryPenaltiesCommandResponse};
use crate::penalties::domain::PenaltyService;
use crate::penalties::factory;

async fn build_service(state: AppState) -> Box<dyn PenaltyService> {
    factory::create_penalty_service(&state.config, state.store).await
}

pub(crate) async fn pay_penalty(
    State(state): State<AppState>,
    Path(penalty_id): Path<String>) -> Result<Json<PayPenaltyCommandResponse>, ServerError> {
    let req = PayPenaltyCommandRequest::new(penalty_id.as_str());
    let svc = build_service(state).await;
    let res = PayPenaltyCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn find_penalty_by_id(
    State(state): State<AppState>,
    Path(penalty_id): Path<String>) -> Result<Json<GetPenaltyCommandResponse>, ServerError> {
    let req = GetPenaltyCommandRequest { penalty_id };
    let svc = build_service(state).await;
    let res = GetPenaltyCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn query_penalties(
    State(state): State<AppState>,
    Query(req): Query<QueryPenaltiesCommandRequest>) -> Result<Json<QueryPenaltiesCommandResponse>, ServerError> {
    let svc = build_service(state).await;
    let res = QueryPenaltiesCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}
