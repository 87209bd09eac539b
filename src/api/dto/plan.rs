//! DTOs for plan endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{NewPlan, Plan, PlanUpdate};

/// Request body for `POST /plans`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePlanRequest {
    #[validate(length(min = 1, max = 50, message = "Plan name must be 1-50 characters"))]
    pub plan_name: String,

    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    pub price: f64,

    /// Defaults to active when omitted.
    pub status: Option<bool>,
}

impl From<CreatePlanRequest> for NewPlan {
    fn from(req: CreatePlanRequest) -> Self {
        NewPlan {
            name: req.plan_name,
            price: req.price,
            status: req.status.unwrap_or(true),
        }
    }
}

/// Request body for `PUT /plans/{id}`.
///
/// All fields are optional; only supplied fields are changed.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdatePlanRequest {
    #[validate(length(min = 1, max = 50, message = "Plan name must be 1-50 characters"))]
    pub plan_name: Option<String>,

    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    pub price: Option<f64>,

    pub status: Option<bool>,
}

impl From<UpdatePlanRequest> for PlanUpdate {
    fn from(req: UpdatePlanRequest) -> Self {
        PlanUpdate {
            name: req.plan_name,
            price: req.price,
            status: req.status,
        }
    }
}

/// JSON representation of a plan.
#[derive(Debug, Serialize)]
pub struct PlanResponse {
    pub plan_id: i64,
    pub plan_name: String,
    pub price: f64,
    pub status: bool,
}

impl From<Plan> for PlanResponse {
    fn from(p: Plan) -> Self {
        PlanResponse {
            plan_id: p.id,
            plan_name: p.name,
            price: p.price,
            status: p.status,
        }
    }
}
