//! API route configuration.

use crate::api::handlers::{
    create_member_handler, create_plan_handler, delete_member_handler, delete_plan_handler,
    get_member_handler, get_plan_handler, list_members_handler, list_plans_handler,
    plan_members_handler, update_member_handler, update_plan_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Member and plan routes.
///
/// # Endpoints
///
/// - `GET    /members`             - List members
/// - `POST   /members`             - Create a member
/// - `GET    /members/{id}`        - Fetch a member
/// - `PUT    /members/{id}`        - Partially update a member
/// - `DELETE /members/{id}`        - Delete a member
/// - `GET    /plans`               - List plans
/// - `POST   /plans`               - Create a plan
/// - `GET    /plans/{id}`          - Fetch a plan
/// - `PUT    /plans/{id}`          - Partially update a plan
/// - `DELETE /plans/{id}`          - Delete a plan without members
/// - `GET    /plans/{id}/members`  - Members subscribed to a plan
pub fn resource_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/members",
            get(list_members_handler).post(create_member_handler),
        )
        .route(
            "/members/{id}",
            get(get_member_handler)
                .put(update_member_handler)
                .delete(delete_member_handler),
        )
        .route("/plans", get(list_plans_handler).post(create_plan_handler))
        .route(
            "/plans/{id}",
            get(get_plan_handler)
                .put(update_plan_handler)
                .delete(delete_plan_handler),
        )
        .route("/plans/{id}/members", get(plan_members_handler))
}
