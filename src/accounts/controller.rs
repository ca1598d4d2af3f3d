use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use serde_json::Value;
use crate::accounts::command::add_account_cmd::{AddAccountCommand, AddAccountCommandRequest, AddAccountCommandResponse};
use crate::accounts::command::get_account_cmd::{GetAccountCommand, GetAccountCommandRequest, GetAccountCommandResponse};
use crate::accounts::command::query_accounts_cmd::{QueryAccountsCommand, QueryAccountsCommandRequest, QueryAccountsCommandResponse};
use crate::accounts::command::remove_account_cmd::{RemoveAccountCommand, RemoveAccountCommandRequest, RemoveAccountCommandResponse};
use crate::accounts::command::update_account_cmd::{UpdateAccountCommand, UpdateAccountCommandRequest, UpdateAccountCommandResponse};
use crate::accounts::domain::AccountService;
use crate::accounts::factory;
use crate::core::command::Command;
use crate::core::controller::{AppState, json_to_server_error, ServerError};

async fn build_service(state: AppState) -> Box<dyn AccountService> {
    factory::create_account_service(&state.config, state.store).await
}

pub(crate) async fn add_account(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<AddAccountCommandResponse>, ServerError> {
    let req: AddAccountCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let svc = build_service(state).await;
    let res = AddAccountCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn update_account(
    State(state): State<AppState>,
    Path(account_id): Path<String>,
    json: Json<Value>) -> Result<Json<UpdateAccountCommandResponse>, ServerError> {
    let mut req: UpdateAccountCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    req.account_id = account_id;
    let svc = build_service(state).await;
    let res = UpdateAccountCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn find_account_by_id(
    State(state): State<AppState>,
    Path(account_id): Path<String>) -> Result<Json<GetAccountCommandResponse>, ServerError> {
    let req = GetAccountCommandRequest { account_id };
    let svc = build_service(state).await;
    let res = GetAccountCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn remove_account(
    State(state): State<AppState>,
    Path(account_id): Path<String>) -> Result<Json<RemoveAccountCommandResponse>, ServerError> {
    let req = RemoveAccountCommandRequest { account_id };
    let svc = build_service(state).await;
    let res = RemoveAccountCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn query_accounts(
    State(state): State<AppState>,
    Query(req): Query<QueryAccountsCommandRequest>) -> Result<Json<QueryAccountsCommandResponse>, ServerError> {
    let svc = build_service(state).await;
    let res = QueryAccountsCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}
