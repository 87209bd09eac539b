//! Plan management service.

use crate::domain::entities::{NewPlan, Plan, PlanUpdate};
use crate::domain::repositories::PlanRepository;
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// Service for managing subscription plans.
///
/// Enforces:
/// - Unique plan names on create and rename
/// - Existence checks on read, update, and delete
/// - Deletion is refused while members still reference the plan
pub struct PlanService<R: PlanRepository> {
    repository: Arc<R>,
}

impl<R: PlanRepository> PlanService<R> {
    /// Creates a new plan service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Retrieves a plan by ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the plan does not exist.
    pub async fn get_plan(&self, plan_id: i64) -> Result<Plan, AppError> {
        self.repository
            .find_by_id(plan_id)
            .await?
            .ok_or_else(|| plan_not_found(plan_id))
    }

    /// Lists every plan. An empty store yields an empty list.
    pub async fn list_plans(&self) -> Result<Vec<Plan>, AppError> {
        self.repository.list().await
    }

    /// Lists every plan together with the number of members subscribed to it.
    pub async fn list_plans_with_member_counts(&self) -> Result<Vec<(Plan, i64)>, AppError> {
        self.repository.list_with_member_counts().await
    }

    /// Creates a new plan.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if a plan with the same name exists.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_plan(&self, new_plan: NewPlan) -> Result<Plan, AppError> {
        if self.repository.find_by_name(&new_plan.name).await?.is_some() {
            return Err(AppError::conflict(
                "Plan already exists",
                json!({ "plan_name": new_plan.name }),
            ));
        }

        let plan = self.repository.create(new_plan).await?;
        tracing::info!(plan_id = plan.id, plan_name = %plan.name, "Plan created");

        Ok(plan)
    }

    /// Applies a partial update to a plan.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the plan does not exist.
    /// Returns [`AppError::Conflict`] if the new name belongs to another plan.
    pub async fn update_plan(&self, plan_id: i64, update: PlanUpdate) -> Result<Plan, AppError> {
        let current = self.get_plan(plan_id).await?;

        if let Some(name) = &update.name
            && let Some(existing) = self.repository.find_by_name(name).await?
            && existing.id != current.id
        {
            return Err(AppError::conflict(
                "Plan already exists",
                json!({ "plan_name": name }),
            ));
        }

        if update.is_empty() {
            return Ok(current);
        }

        self.repository
            .update(plan_id, update)
            .await?
            .ok_or_else(|| plan_not_found(plan_id))
    }

    /// Deletes a plan and returns the removed record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the plan does not exist.
    /// Returns [`AppError::Conflict`] if members are still subscribed to it.
    pub async fn delete_plan(&self, plan_id: i64) -> Result<Plan, AppError> {
        let plan = self.get_plan(plan_id).await?;

        let members_count = self.repository.count_members(plan.id).await?;
        if members_count > 0 {
            tracing::warn!(plan_id, members_count, "Refusing to delete plan with members");
            return Err(AppError::conflict(
                "Cannot delete plan with existing members",
                json!({ "plan_id": plan_id, "members_count": members_count }),
            ));
        }

        let deleted = self
            .repository
            .delete(plan_id)
            .await?
            .ok_or_else(|| plan_not_found(plan_id))?;
        tracing::info!(plan_id, "Plan deleted");

        Ok(deleted)
    }
}

fn plan_not_found(plan_id: i64) -> AppError {
    AppError::not_found("Plan not found", json!({ "plan_id": plan_id }))
}
