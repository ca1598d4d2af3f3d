use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use serde_json::Value;
use crate::core::command::Command;
use crate::core::controller::{AppState, json_to_server_error, ServerError};
use crate::taxonomy::command::add_taxonomy_cmd::{AddTaxonomyCommand, AddTaxonomyCommandRequest, AddTaxonomyCommandResponse};
use crate::taxonomy::command::get_taxonomy_cmd::{GetTaxonomyCommand, GetTaxonomyCommandRequest, GetTaxonomyCommandResponse};
use crate::taxonomy::command::query_taxonomy_cmd::{QueryTaxonomyCommand, QueryTaxonomyCommandRequest, QueryTaxonomyCommandResponse};
use crate::taxonomy::command::remove_taxonomy_cmd::{RemoveTaxonomyCommand, RemoveTaxonomyCommandRequest, RemoveTaxonomyCommandResponse};
use crate::taxonomy::command::update_taxonomy_cmd::{UpdateTaxonomyCommand, UpdateTaxonomyCommandRequest, UpdateTaxonomyCommandResponse};
use crate::taxonomy::domain::TaxonomyService;
use crate::taxonomy::factory;

async fn build_service(state: AppState) -> Box<dyn TaxonomyService> {
    factory::create_taxonomy_service(&state.config, state.store).await
}

pub(crate) async fn add_taxonomy(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<AddTaxonomyCommandResponse>, ServerError> {
    let req: AddTaxonomyCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let svc = build_service(state).await;
    let res = AddTaxonomyCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn update_taxonomy(
    State(state): State<AppState>,
    Path(taxonomy_id): Path<String>,
    json: Json<Value>) -> Result<Json<UpdateTaxonomyCommandResponse>, ServerError> {
    let mut req: UpdateTaxonomyCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    req.taxonomy_id = taxonomy_id;
    let svc = build_service(state).await;
    let res = UpdateTaxonomyCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn find_taxonomy_by_id(
    State(state): State<AppState>,
    Path(taxonomy_id): Path<String>) -> Result<Json<GetTaxonomyCommandResponse>, ServerError> {
    let req = GetTaxonomyCommandRequest { taxonomy_id };
    let svc = build_service(state).await;
    let res = GetTaxonomyCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn remove_taxonomy(
    State(state): State<AppState>,
    Path(taxonomy_id): Path<String>) -> Result<Json<RemoveTaxonomyCommandResponse>, ServerError> {
    let req = RemoveTaxonomyCommandRequest { taxonomy_id };
    let svc = build_service(state).await;
    let res = RemoveTaxonomyCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn query_taxonomy(
    State(state): State<AppState>,
    Query(req): Query<QueryTaxonomyCommandRequest>) -> Result<Json<QueryTaxonomyCommandResponse>, ServerError> {
    let svc = build_service(state).await;
    let res = QueryTaxonomyCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}
