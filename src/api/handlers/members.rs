//! Handlers for member endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::member::{CreateMemberRequest, MemberResponse, UpdateMemberRequest};
use crate::error::AppError;
use crate::state::AppState;

/// Lists all members.
///
/// # Endpoint
///
/// `GET /members`
pub async fn list_members_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<MemberResponse>>, AppError> {
    let members = state.member_service.list_members().await?;

    Ok(Json(members.into_iter().map(MemberResponse::from).collect()))
}

/// Returns a single member.
///
/// # Endpoint
///
/// `GET /members/{id}`
///
/// # Errors
///
/// Returns 404 if the member does not exist.
pub async fn get_member_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<MemberResponse>, AppError> {
    let member = state.member_service.get_member(id).await?;

    Ok(Json(member.into()))
}

/// Creates a new member.
///
/// # Endpoint
///
/// `POST /members`
///
/// ```json
/// { "name": "Name1", "age": 30, "email": "name1@insper.com", "plan_id": 1, "status": true }
/// ```
///
/// # Errors
///
/// Returns 400 if validation fails.
/// Returns 404 if `plan_id` does not reference a plan.
pub async fn create_member_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateMemberRequest>,
) -> Result<(StatusCode, Json<MemberResponse>), AppError> {
    payload.validate()?;

    let member = state.member_service.create_member(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(member.into())))
}

/// Partially updates a member.
///
/// # Endpoint
///
/// `PUT /members/{id}`
///
/// # Errors
///
/// Returns 400 if validation fails.
/// Returns 404 if the member, or a supplied `plan_id`, does not exist.
pub async fn update_member_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateMemberRequest>,
) -> Result<Json<MemberResponse>, AppError> {
    payload.validate()?;

    let member = state
        .member_service
        .update_member(id, payload.into())
        .await?;

    Ok(Json(member.into()))
}

/// Deletes a member and returns the removed record.
///
/// # Endpoint
///
/// `DELETE /members/{id}`
///
/// # Errors
///
/// Returns 404 if the member does not exist.
pub async fn delete_member_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<MemberResponse>, AppError> {
    let member = state.member_service.delete_member(id).await?;

    Ok(Json(member.into()))
}
