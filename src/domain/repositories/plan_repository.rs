//! Repository trait for plan management.

use crate::domain::entities::{NewPlan, Plan, PlanUpdate};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for subscription plans.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgPlanRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlanRepository: Send + Sync {
    /// Inserts a new plan.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the plan name is already taken.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_plan: NewPlan) -> Result<Plan, AppError>;

    /// Finds a plan by its ID.
    async fn find_by_id(&self, id: i64) -> Result<Option<Plan>, AppError>;

    /// Finds a plan by its unique name.
    async fn find_by_name(&self, name: &str) -> Result<Option<Plan>, AppError>;

    /// Lists all plans ordered by ID.
    async fn list(&self) -> Result<Vec<Plan>, AppError>;

    /// Applies a partial update. Returns `None` if the plan does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the new name is already taken.
    async fn update(&self, id: i64, update: PlanUpdate) -> Result<Option<Plan>, AppError>;

    /// Deletes a plan and returns the removed row, or `None` if it did not exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if members still reference the plan.
    async fn delete(&self, id: i64) -> Result<Option<Plan>, AppError>;

    /// Counts members subscribed to a plan.
    async fn count_members(&self, plan_id: i64) -> Result<i64, AppError>;

    /// Lists all plans ordered by ID, each paired with its member count.
    async fn list_with_member_counts(&self) -> Result<Vec<(Plan, i64)>, AppError>;
}
