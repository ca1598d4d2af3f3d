use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use serde_json::Value;
use crate::core::command::Command;
use crate::core::controller::{AppState, json_to_server_error, ServerError};
use crate::rentals::command::approve_rental_cmd::{ApproveRentalCommand, ApproveRentalCommandRequest, ApproveRentalCommandResponse};
use crate::rentals::command::get_rental_cmd::{GetRentalCommand, GetRentalCommandRequest, GetRentalCommandResponse};
use crate::rentals::command::query_rentals_cmd::{QueryRentalsCommand, QueryRentalsCommandRequest, QueryRentalsCommandResponse};
use crate::rentals::command::request_rental_cmd::{RequestRentalCommand, RequestRentalCommandRequest, RequestRentalCommandResponse};
use crate::rentals::command::return_rental_cmd::{ReturnRentalCommand, ReturnRentalCommandRequest, ReturnRentalCommandResponse};
use crate::rentals::domain::RentalService;
use crate::rentals::factory;

async fn build_service(state: AppState) -> Box<dyn RentalService> {
    factory::create_rental_service(&state.config, state.store).await
}

pub(crate) async fn request_rental(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<RequestRentalCommandResponse>, ServerError> {
    let req: RequestRentalCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let svc = build_service(state).await;
    let res = RequestRentalCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn approve_rental(
    State(state): State<AppState>,
    Path(rental_id): Path<String>,
    json: Json<Value>) -> Result<Json<ApproveRentalCommandResponse>, ServerError> {
    let mut req: ApproveRentalCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    req.rental_id = rental_id;
    let svc = build_service(state).await;
    let res = ApproveRentalCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn return_rental(
    State(state): State<AppState>,
    Path(rental_id): Path<String>,
    json: Json<Value>) -> Result<Json<ReturnRentalCommandResponse>, ServerError> {
    let mut req: ReturnRentalCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    req.rental_id = rental_id;
    let svc = build_service(state).await;
    let res = ReturnRentalCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn find_rental_by_id(
    State(state): State<AppState>,
    Path(rental_id): Path<String>) -> Result<Json<GetRentalCommandResponse>, ServerError> {
    let req = GetRentalCommandRequest { rental_id };
    let svc = build_service(state).await;
    let res = GetRentalCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn query_rentals(
    State(state): State<AppState>,
    Query(req): Query<QueryRentalsCommandRequest>) -> Result<Json<QueryRentalsCommandResponse>, ServerError> {
    let svc = build_service(state).await;
    let res = QueryRentalsCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}
