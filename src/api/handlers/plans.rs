//! Handlers for plan endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::member::MemberResponse;
use crate::api::dto::plan::{CreatePlanRequest, PlanResponse, UpdatePlanRequest};
use crate::error::AppError;
use crate::state::AppState;

/// Lists all plans.
///
/// # Endpoint
///
/// `GET /plans`
///
/// Returns an empty array when no plans exist.
pub async fn list_plans_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<PlanResponse>>, AppError> {
    let plans = state.plan_service.list_plans().await?;

    Ok(Json(plans.into_iter().map(PlanResponse::from).collect()))
}

/// Returns a single plan.
///
/// # Endpoint
///
/// `GET /plans/{id}`
///
/// # Errors
///
/// Returns 404 if the plan does not exist.
pub async fn get_plan_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<PlanResponse>, AppError> {
    let plan = state.plan_service.get_plan(id).await?;

    Ok(Json(plan.into()))
}

/// Creates a new plan.
///
/// # Endpoint
///
/// `POST /plans`
///
/// ```json
/// { "plan_name": "Signature", "price": 1000, "status": true }
/// ```
///
/// # Errors
///
/// Returns 400 if validation fails.
/// Returns 409 if a plan with the same name exists.
pub async fn create_plan_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreatePlanRequest>,
) -> Result<(StatusCode, Json<PlanResponse>), AppError> {
    payload.validate()?;

    let plan = state.plan_service.create_plan(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(plan.into())))
}

/// Partially updates a plan.
///
/// # Endpoint
///
/// `PUT /plans/{id}`
///
/// Only supplied fields are changed.
///
/// # Errors
///
/// Returns 400 if validation fails.
/// Returns 404 if the plan does not exist.
/// Returns 409 if the new name belongs to another plan.
pub async fn update_plan_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<UpdatePlanRequest>,
) -> Result<Json<PlanResponse>, AppError> {
    payload.validate()?;

    let plan = state.plan_service.update_plan(id, payload.into()).await?;

    Ok(Json(plan.into()))
}

/// Deletes a plan and returns the removed record.
///
/// # Endpoint
///
/// `DELETE /plans/{id}`
///
/// # Errors
///
/// Returns 404 if the plan does not exist.
/// Returns 409 if members are still subscribed to the plan.
pub async fn delete_plan_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<PlanResponse>, AppError> {
    let plan = state.plan_service.delete_plan(id).await?;

    Ok(Json(plan.into()))
}

/// Lists the members subscribed to a plan.
///
/// # Endpoint
///
/// `GET /plans/{id}/members`
///
/// # Errors
///
/// Returns 404 if the plan does not exist. An existing plan without members
/// yields an empty array.
pub async fn plan_members_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<Vec<MemberResponse>>, AppError> {
    let members = state.member_service.get_members_of_plan(id).await?;

    Ok(Json(members.into_iter().map(MemberResponse::from).collect()))
}
